//! Main-axis flex layout: flex base sizes, line collection, flexible lengths and positioning.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>

use core::ops::Range;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::chapter5::FlexContainer;
use crate::chapter6::FlexChild;
use crate::chapter7::resolve_axes;
use crate::error::FlexError;

mod base_size;
mod flexible_lengths;
mod line_breaking;
mod positioning;

pub use base_size::flex_base_size;
pub use flexible_lengths::resolve_flexible_lengths;
pub use line_breaking::collect_flex_lines;
pub use positioning::place_line;

/// Per-child inputs to the flexible length algorithm, projected onto the main axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexItem {
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-base-size>
    pub flex_base_size: f32,
    /// Measured main size clamped into `[min_main, max_main]`. Inflexible items freeze here.
    pub hypothetical_main_size: f32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub min_main: f32,
    pub max_main: f32,
    pub break_after: bool,
}

/// A run of consecutive children laid out together.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-lines>
#[derive(Clone, Debug, PartialEq)]
pub struct FlexLine {
    /// Child indices in this line, `[start, end)`.
    pub items: Range<usize>,
    /// Sum of the flex base sizes of the line's children.
    pub main_size: f32,
}

/// Main-axis placement of one child, in whole px from main-start.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MainRect {
    /// Index into [`FlexLayout::lines`].
    pub line: usize,
    pub start: i32,
    pub end: i32,
}

impl MainRect {
    #[inline]
    pub const fn extent(&self) -> i32 {
        self.end - self.start
    }
}

/// Result of [`layout_main_axis`].
#[derive(Clone, Debug, PartialEq)]
pub struct FlexLayout {
    /// One rect per child, in child order.
    pub rects: Vec<MainRect>,
    /// Lines in final order (reversed for `wrap-reverse`).
    pub lines: Vec<FlexLine>,
    /// Resolved main sizes before rounding, in child order.
    pub sizes: Vec<f32>,
}

/// Lay out `children` along the main axis of `container`.
///
/// Runs §9.2.3 flex base size resolution, §9.3.5 line collection, §9.7 flexible length
/// resolution per line and main-axis positioning. Cross-axis geometry is left to the caller.
///
/// # Errors
/// - [`FlexError::NegativeContainerExtent`], [`FlexError::NegativeLength`] or
///   [`FlexError::InvalidFactor`] for input rejected at the boundary.
/// - [`FlexError::UnsupportedBasis`] when a child uses `flex-basis: content`.
/// - [`FlexError::NotConverged`] if the freeze loop breaks its bound (a bug).
pub fn layout_main_axis(
    container: &FlexContainer,
    children: &[FlexChild],
) -> Result<FlexLayout, FlexError> {
    container.validate()?;
    let axes = resolve_axes(container.direction);
    let items = children
        .iter()
        .enumerate()
        .map(|(index, child)| FlexItem::from_child(child, axes, index))
        .collect::<Result<Vec<_>, _>>()?;
    let container_main = container.main_extent as f32;

    let lines = collect_flex_lines(&items, container.wrap, container_main);
    let per_line_sizes = resolve_lines(&items, &lines, container_main)?;

    let mut rects = vec![MainRect::default(); items.len()];
    let mut sizes = vec![0.0f32; items.len()];
    for (line_index, (line, line_sizes)) in lines.iter().zip(per_line_sizes).enumerate() {
        let placed = place_line(container, line_index, &line_sizes);
        if let (Some(rect_slots), Some(size_slots)) = (
            rects.get_mut(line.items.clone()),
            sizes.get_mut(line.items.clone()),
        ) {
            rect_slots.copy_from_slice(&placed);
            size_slots.copy_from_slice(&line_sizes);
        }
    }
    debug!(
        target: "flex_resolver::layout",
        "[FLEX-LAYOUT] children={} lines={} container_main={container_main:.3} rects={:?}",
        children.len(),
        lines.len(),
        rects
            .iter()
            .map(|rect| (rect.start, rect.end))
            .collect::<Vec<_>>()
    );
    Ok(FlexLayout {
        rects,
        lines,
        sizes,
    })
}

/// Like [`layout_main_axis`], but writes each child's rect into `out[child_index]` and returns
/// only the lines.
///
/// # Errors
/// [`FlexError::OutputLengthMismatch`] when `out.len() != children.len()`, plus every error of
/// [`layout_main_axis`]. `out` is left untouched on error.
pub fn layout_main_axis_into(
    container: &FlexContainer,
    children: &[FlexChild],
    out: &mut [MainRect],
) -> Result<Vec<FlexLine>, FlexError> {
    if out.len() != children.len() {
        return Err(FlexError::OutputLengthMismatch {
            expected: children.len(),
            actual: out.len(),
        });
    }
    let layout = layout_main_axis(container, children)?;
    out.copy_from_slice(&layout.rects);
    Ok(layout.lines)
}

/// Resolve every line's flexible lengths. Lines do not depend on each other.
#[cfg(not(feature = "parallel"))]
fn resolve_lines(
    items: &[FlexItem],
    lines: &[FlexLine],
    container_main: f32,
) -> Result<Vec<Vec<f32>>, FlexError> {
    lines
        .iter()
        .enumerate()
        .map(|(line_index, line)| resolve_line(items, line, container_main, line_index))
        .collect()
}

/// Resolve every line's flexible lengths on the rayon pool, keeping line order.
#[cfg(feature = "parallel")]
fn resolve_lines(
    items: &[FlexItem],
    lines: &[FlexLine],
    container_main: f32,
) -> Result<Vec<Vec<f32>>, FlexError> {
    use rayon::prelude::*;

    lines
        .par_iter()
        .enumerate()
        .map(|(line_index, line)| resolve_line(items, line, container_main, line_index))
        .collect()
}

#[inline]
fn resolve_line(
    items: &[FlexItem],
    line: &FlexLine,
    container_main: f32,
    line_index: usize,
) -> Result<Vec<f32>, FlexError> {
    let line_items = items.get(line.items.clone()).unwrap_or(&[]);
    resolve_flexible_lengths(line_items, container_main, line_index)
}

#[cfg(test)]
mod tests;
