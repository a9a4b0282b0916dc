//! Flex Containers: container properties and enums
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use serde::{Deserialize, Serialize};

use crate::error::FlexError;

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FlexWrap {
    #[default]
    Nowrap,
    Wrap,
    WrapReverse,
}

/// Main-axis distribution of leftover space within a line.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum JustifyContent {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// The flex formatting context for one layout call.
///
/// The main-axis extent is the available space supplied by the host. The container has no
/// min/max of its own.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FlexContainer {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    #[serde(default)]
    pub justify_content: JustifyContent,
    /// Available space along the main axis, in px.
    pub main_extent: i32,
}

impl FlexContainer {
    #[inline]
    pub const fn new(direction: FlexDirection, wrap: FlexWrap, main_extent: i32) -> Self {
        Self {
            direction,
            wrap,
            justify_content: JustifyContent::Start,
            main_extent,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_justify_content(mut self, justify_content: JustifyContent) -> Self {
        self.justify_content = justify_content;
        self
    }

    /// Reject geometry the layout algorithm cannot work with.
    ///
    /// # Errors
    /// Returns [`FlexError::NegativeContainerExtent`] when `main_extent < 0`.
    #[inline]
    pub const fn validate(&self) -> Result<(), FlexError> {
        if self.main_extent < 0 {
            return Err(FlexError::NegativeContainerExtent {
                extent: self.main_extent,
            });
        }
        Ok(())
    }
}
