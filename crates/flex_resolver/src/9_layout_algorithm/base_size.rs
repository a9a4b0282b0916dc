//! Flex base size and hypothetical main size.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-main-item>

use log::trace;

use super::FlexItem;
use crate::chapter6::{FlexBasis, FlexChild};
use crate::chapter7::Axes;
use crate::error::FlexError;

/// Determine the flex base size of `child` (§9.2.3).
///
/// - `auto` uses the measured size projected onto the main axis (case E).
/// - A definite basis is used as-is (case A).
/// - `content` needs intrinsic sizing (cases B–D), which the measurement pass does not provide.
///
/// # Errors
/// [`FlexError::UnsupportedBasis`] for `flex-basis: content`.
pub fn flex_base_size(child: &FlexChild, axes: Axes, index: usize) -> Result<f32, FlexError> {
    match child.basis() {
        FlexBasis::Definite(px) => Ok(px as f32),
        FlexBasis::Auto => Ok(axes.main_size(child.measured) as f32),
        FlexBasis::Content => Err(FlexError::UnsupportedBasis { child: index }),
    }
}

/// Clamp a main size into `[min_main, max_main]`. When the bounds cross, `min_main` wins.
#[inline]
pub(super) fn clamp_main(value: f32, min_main: f32, max_main: f32) -> f32 {
    value.min(max_main).max(min_main)
}

impl FlexItem {
    /// Validate `child` and project its flex inputs onto the main axis.
    ///
    /// # Errors
    /// Validation errors from [`FlexChild::validate`] and the errors of [`flex_base_size`].
    pub fn from_child(child: &FlexChild, axes: Axes, index: usize) -> Result<Self, FlexError> {
        child.validate(index)?;
        let flex_base_size = flex_base_size(child, axes, index)?;
        let (min_main, max_main) = child.main_bounds();
        let measured_main = axes.main_size(child.measured) as f32;
        let item = Self {
            flex_base_size,
            hypothetical_main_size: clamp_main(measured_main, min_main, max_main),
            flex_grow: child.grow_factor(),
            flex_shrink: child.shrink_factor(),
            min_main,
            max_main,
            break_after: child.breaks_after(),
        };
        trace!(
            target: "flex_resolver::base_size",
            "[FLEX-BASE] child={index} base={:.3} hypothetical={:.3} grow={:.3} shrink={:.3}",
            item.flex_base_size,
            item.hypothetical_main_size,
            item.flex_grow,
            item.flex_shrink
        );
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter5::FlexDirection;
    use crate::chapter6::{FlexItemData, MeasuredSize};
    use crate::chapter7::resolve_axes;

    #[test]
    /// # Panics
    /// Panics if the auto basis does not follow the main axis.
    fn auto_basis_projects_measured_size() {
        let child = FlexChild::new(MeasuredSize::new(120, 40));
        let row = flex_base_size(&child, resolve_axes(FlexDirection::Row), 0);
        let column = flex_base_size(&child, resolve_axes(FlexDirection::ColumnReverse), 0);
        assert_eq!(row, Ok(120.0));
        assert_eq!(column, Ok(40.0));
    }

    #[test]
    /// # Panics
    /// Panics if a definite basis is not used verbatim.
    fn definite_basis_ignores_measured_size() {
        let child = FlexChild::new(MeasuredSize::new(120, 40))
            .with_flex(FlexItemData::default().basis(FlexBasis::Definite(75)));
        assert_eq!(
            flex_base_size(&child, resolve_axes(FlexDirection::Row), 0),
            Ok(75.0)
        );
    }

    #[test]
    /// # Panics
    /// Panics if `flex-basis: content` does not fail with the child index.
    fn content_basis_is_rejected() {
        let child = FlexChild::new(MeasuredSize::new(10, 10))
            .with_flex(FlexItemData::default().basis(FlexBasis::Content));
        assert_eq!(
            flex_base_size(&child, resolve_axes(FlexDirection::Row), 4),
            Err(FlexError::UnsupportedBasis { child: 4 })
        );
    }

    #[test]
    /// # Panics
    /// Panics if the hypothetical size is not clamped or min does not win over max.
    fn hypothetical_size_is_clamped_with_min_winning() {
        let axes = resolve_axes(FlexDirection::Row);
        let capped = FlexChild::new(MeasuredSize::new(80, 10))
            .with_flex(FlexItemData::default().max_size(50));
        let crossed = FlexChild::new(MeasuredSize::new(80, 10))
            .with_flex(FlexItemData::default().min_size(60).max_size(20));
        let capped_item = FlexItem::from_child(&capped, axes, 0);
        let crossed_item = FlexItem::from_child(&crossed, axes, 1);
        assert_eq!(
            capped_item.map(|item| item.hypothetical_main_size),
            Ok(50.0)
        );
        assert_eq!(
            crossed_item.map(|item| item.hypothetical_main_size),
            Ok(60.0)
        );
    }
}
