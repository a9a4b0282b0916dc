//! Main-axis justification and positioning logic.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#main-alignment>

use log::debug;

use super::MainRect;
use crate::chapter5::{FlexContainer, JustifyContent};
use crate::chapter7::resolve_axes;

/// Compute justify-content start offset and between-spacing for one line.
pub fn justify_params(
    justify: JustifyContent,
    container_main: f32,
    content_total: f32,
    item_count: usize,
) -> (f32, f32) {
    let remaining = (container_main - content_total).max(0.0);
    match (justify, item_count) {
        (JustifyContent::End, _) => (remaining, 0.0),
        (JustifyContent::Center, _) => (remaining * 0.5, 0.0),
        (JustifyContent::SpaceBetween, count) if count > 1 => {
            (0.0, remaining / (count as f32 - 1.0))
        }
        (JustifyContent::SpaceAround, count) if count > 0 => {
            (remaining / (count as f32 * 2.0), remaining / (count as f32))
        }
        (JustifyContent::SpaceEvenly, count) if count > 0 => {
            let slots = count as f32 + 1.0;
            (remaining / slots, remaining / slots)
        }
        // Start and all other cases
        _ => (0.0, 0.0),
    }
}

/// Snap a main-axis coordinate to whole px.
#[inline]
fn snap_to_px(value: f32) -> i32 {
    value.round() as i32
}

/// Place one line's items end to end along the main axis.
///
/// Edges are accumulated in `f32` and each edge is rounded on its own, so rounded extents of a
/// line always add up to its rounded total. Reverse directions mirror positions within the line:
/// the first item sits at main-end.
pub fn place_line(container: &FlexContainer, line_index: usize, sizes: &[f32]) -> Vec<MainRect> {
    let axes = resolve_axes(container.direction);
    let container_main = container.main_extent as f32;
    let content_total: f32 = sizes.iter().sum();
    let (start_offset, between_spacing) = justify_params(
        container.justify_content,
        container_main,
        content_total,
        sizes.len(),
    );
    debug!(
        target: "flex_resolver::positioning",
        "[FLEX-JUSTIFY] line={line_index} justify={:?} reverse={} start_offset={start_offset:.3} between_spacing={between_spacing:.3} content_total={content_total:.3}",
        container.justify_content,
        axes.main_reverse
    );

    let mut cursor = start_offset;
    let mut rects = Vec::with_capacity(sizes.len());
    for size in sizes {
        let (lead, trail) = if axes.main_reverse {
            (container_main - cursor - size, container_main - cursor)
        } else {
            (cursor, cursor + size)
        };
        rects.push(MainRect {
            line: line_index,
            start: snap_to_px(lead),
            end: snap_to_px(trail),
        });
        cursor += size + between_spacing;
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter5::{FlexDirection, FlexWrap};

    #[test]
    /// # Panics
    /// Panics if the justify parameters deviate for a simple 100px leftover.
    fn justify_params_split_leftover() {
        assert_eq!(
            justify_params(JustifyContent::Start, 300.0, 200.0, 2),
            (0.0, 0.0)
        );
        assert_eq!(
            justify_params(JustifyContent::End, 300.0, 200.0, 2),
            (100.0, 0.0)
        );
        assert_eq!(
            justify_params(JustifyContent::Center, 300.0, 200.0, 2),
            (50.0, 0.0)
        );
        assert_eq!(
            justify_params(JustifyContent::SpaceBetween, 300.0, 200.0, 2),
            (0.0, 100.0)
        );
        assert_eq!(
            justify_params(JustifyContent::SpaceAround, 300.0, 200.0, 2),
            (25.0, 50.0)
        );
    }

    #[test]
    /// # Panics
    /// Panics if overflowing content is offset by justification.
    fn overflow_ignores_justification() {
        assert_eq!(
            justify_params(JustifyContent::Center, 100.0, 180.0, 3),
            (0.0, 0.0)
        );
    }

    #[test]
    /// # Panics
    /// Panics if a single item with space-between is not placed at start.
    fn space_between_single_item_starts_at_zero() {
        assert_eq!(
            justify_params(JustifyContent::SpaceBetween, 100.0, 40.0, 1),
            (0.0, 0.0)
        );
    }

    #[test]
    /// # Panics
    /// Panics if fractional sizes round in a way that opens gaps or overlaps.
    fn fractional_sizes_share_rounded_edges() {
        let container = FlexContainer::new(FlexDirection::Row, FlexWrap::Nowrap, 100);
        let rects = place_line(&container, 0, &[33.4, 33.4, 33.2]);
        let edges: Vec<(i32, i32)> = rects.iter().map(|rect| (rect.start, rect.end)).collect();
        assert_eq!(edges, vec![(0, 33), (33, 67), (67, 100)]);
    }
}
