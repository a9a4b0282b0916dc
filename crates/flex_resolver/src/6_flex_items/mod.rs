//! Flex Items: per-child inputs
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flexibility>

use serde::{Deserialize, Serialize};

use crate::error::FlexError;

/// Natural size of a child as reported by the external measurement pass.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MeasuredSize {
    pub width: i32,
    pub height: i32,
}

impl MeasuredSize {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-basis-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FlexBasis {
    /// Use the measured main size.
    #[default]
    Auto,
    /// Size from content. Rejected by layout, see [`FlexError::UnsupportedBasis`].
    Content,
    /// A definite length in px.
    Definite(i32),
}

/// Flex properties attached to one child. Absent properties fall back to the CSS initial values
/// except `flex-grow`, which defaults to 0 as in `flex: initial`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexItemData {
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-grow-property>
    pub grow: f32,
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-shrink-property>
    /// `None` means the initial value of 1.
    pub shrink: Option<f32>,
    pub basis: FlexBasis,
    /// Lower bound on the resolved main size, in px.
    pub min_size: Option<i32>,
    /// Upper bound on the resolved main size, in px.
    pub max_size: Option<i32>,
    /// Force a line break right after this child when wrapping.
    pub break_after: bool,
}

impl FlexItemData {
    #[inline]
    #[must_use]
    pub const fn grow(mut self, factor: f32) -> Self {
        self.grow = factor;
        self
    }

    #[inline]
    #[must_use]
    pub const fn shrink(mut self, factor: f32) -> Self {
        self.shrink = Some(factor);
        self
    }

    #[inline]
    #[must_use]
    pub const fn basis(mut self, basis: FlexBasis) -> Self {
        self.basis = basis;
        self
    }

    #[inline]
    #[must_use]
    pub const fn min_size(mut self, px: i32) -> Self {
        self.min_size = Some(px);
        self
    }

    #[inline]
    #[must_use]
    pub const fn max_size(mut self, px: i32) -> Self {
        self.max_size = Some(px);
        self
    }

    #[inline]
    #[must_use]
    pub const fn break_after(mut self, enabled: bool) -> Self {
        self.break_after = enabled;
        self
    }
}

/// One box inside the container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FlexChild {
    pub measured: MeasuredSize,
    #[serde(default)]
    pub flex: Option<FlexItemData>,
}

impl FlexChild {
    #[inline]
    pub const fn new(measured: MeasuredSize) -> Self {
        Self {
            measured,
            flex: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_flex(mut self, data: FlexItemData) -> Self {
        self.flex = Some(data);
        self
    }

    /// Flex grow factor; 0 without a descriptor.
    #[inline]
    pub fn grow_factor(&self) -> f32 {
        self.flex.map_or(0.0, |data| data.grow)
    }

    /// Flex shrink factor; 1 unless the descriptor sets one.
    #[inline]
    pub fn shrink_factor(&self) -> f32 {
        self.flex.and_then(|data| data.shrink).unwrap_or(1.0)
    }

    #[inline]
    pub fn basis(&self) -> FlexBasis {
        self.flex.map_or(FlexBasis::Auto, |data| data.basis)
    }

    #[inline]
    pub fn breaks_after(&self) -> bool {
        self.flex.is_some_and(|data| data.break_after)
    }

    /// Main-size bounds `(min, max)` in px. Missing bounds are `0` and `+inf`.
    #[inline]
    pub fn main_bounds(&self) -> (f32, f32) {
        let min_main = self
            .flex
            .and_then(|data| data.min_size)
            .map_or(0.0, |px| px as f32);
        let max_main = self
            .flex
            .and_then(|data| data.max_size)
            .map_or(f32::INFINITY, |px| px as f32);
        (min_main, max_main)
    }

    /// Reject lengths and factors that have no meaning for flex layout.
    ///
    /// # Errors
    /// Returns [`FlexError::NegativeLength`] or [`FlexError::InvalidFactor`] naming `index`.
    pub fn validate(&self, index: usize) -> Result<(), FlexError> {
        check_length(index, "measured.width", self.measured.width)?;
        check_length(index, "measured.height", self.measured.height)?;
        let Some(data) = self.flex else {
            return Ok(());
        };
        check_factor(index, "grow", data.grow)?;
        if let Some(shrink) = data.shrink {
            check_factor(index, "shrink", shrink)?;
        }
        if let FlexBasis::Definite(px) = data.basis {
            check_length(index, "basis", px)?;
        }
        if let Some(px) = data.min_size {
            check_length(index, "min_size", px)?;
        }
        if let Some(px) = data.max_size {
            check_length(index, "max_size", px)?;
        }
        Ok(())
    }
}

#[inline]
const fn check_length(child: usize, field: &'static str, value: i32) -> Result<(), FlexError> {
    if value < 0 {
        return Err(FlexError::NegativeLength {
            child,
            field,
            value,
        });
    }
    Ok(())
}

#[inline]
fn check_factor(child: usize, field: &'static str, value: f32) -> Result<(), FlexError> {
    if !value.is_finite() || value < 0.0 {
        return Err(FlexError::InvalidFactor {
            child,
            field,
            value,
        });
    }
    Ok(())
}
