//! Tests for main-axis flex layout.

use super::*;
use crate::chapter5::{FlexDirection, FlexWrap, JustifyContent};
use crate::chapter6::{FlexBasis, FlexItemData, MeasuredSize};


/// Helper to create a child measured `main` px wide and 10 px tall, without flex data.
#[inline]
pub fn plain_child(main: i32) -> FlexChild {
    FlexChild::new(MeasuredSize::new(main, 10))
}

/// Helper to create a child measured `main` px wide with the given flex data.
#[inline]
pub fn flex_child(main: i32, data: FlexItemData) -> FlexChild {
    plain_child(main).with_flex(data)
}

/// Helper to create a row container without wrapping.
#[inline]
pub fn row_nowrap(main_extent: i32) -> FlexContainer {
    FlexContainer::new(FlexDirection::Row, FlexWrap::Nowrap, main_extent)
}

/// Lay out and return `(start, end)` pairs, or an empty vector on error.
#[inline]
pub fn edges(container: &FlexContainer, children: &[FlexChild]) -> Vec<(i32, i32)> {
    let _ = env_logger::builder().is_test(true).try_init();
    layout_main_axis(container, children)
        .map(|layout| {
            layout
                .rects
                .iter()
                .map(|rect| (rect.start, rect.end))
                .collect()
        })
        .unwrap_or_default()
}
