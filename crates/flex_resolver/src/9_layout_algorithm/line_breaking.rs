//! Collect flex items into flex lines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use core::mem;

use log::debug;

use super::{FlexItem, FlexLine};
use crate::chapter5::FlexWrap;

/// Break `items` into lines by accumulating flex base sizes.
///
/// - `nowrap` yields exactly one line holding every item.
/// - Otherwise a new line starts when the next item would push a non-empty line past
///   `container_main`, and right after any item with `break_after`. Empty lines are never emitted.
/// - `wrap-reverse` reverses the line sequence, not the items within a line.
pub fn collect_flex_lines(
    items: &[FlexItem],
    wrap: FlexWrap,
    container_main: f32,
) -> Vec<FlexLine> {
    if wrap == FlexWrap::Nowrap {
        return vec![FlexLine {
            items: 0..items.len(),
            main_size: items.iter().map(|item| item.flex_base_size).sum(),
        }];
    }

    let mut lines: Vec<FlexLine> = Vec::new();
    let mut line = FlexLine {
        items: 0..0,
        main_size: 0.0,
    };
    for (idx, item) in items.iter().enumerate() {
        if !line.items.is_empty() && line.main_size + item.flex_base_size > container_main {
            let next = FlexLine {
                items: idx..idx,
                main_size: 0.0,
            };
            lines.push(mem::replace(&mut line, next));
        }
        line.items.end = idx + 1;
        line.main_size += item.flex_base_size;
        if item.break_after {
            let next = FlexLine {
                items: idx + 1..idx + 1,
                main_size: 0.0,
            };
            lines.push(mem::replace(&mut line, next));
        }
    }
    if !line.items.is_empty() {
        lines.push(line);
    }
    if wrap == FlexWrap::WrapReverse {
        lines.reverse();
    }
    debug!(
        target: "flex_resolver::lines",
        "[FLEX-LINES] wrap={wrap:?} container_main={container_main:.3} lines={:?}",
        lines
            .iter()
            .map(|flex_line| (flex_line.items.clone(), flex_line.main_size))
            .collect::<Vec<_>>()
    );
    lines
}
