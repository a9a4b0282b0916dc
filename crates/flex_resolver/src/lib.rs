//! CSS Flexible Box Layout Module Level 1: main-axis resolution for a single flex container.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>
//!
//! Given a container and its children's measured sizes, this crate collects children into
//! flex lines, resolves flexible lengths and places every child along the main axis. Measuring
//! leaf content and everything on the cross axis belong to the caller.

// Chapter modules follow the numbering of CSS Flexbox Level 1.
// §5 Flex Containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// §6 Flex Items
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// §7 Axis and Order
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// §9 Flex Layout Algorithm (main axis only)
#[path = "9_layout_algorithm/mod.rs"]
/// Line collection, flexible length resolution and main-axis positioning (§9.2–§9.7).
mod chapter9;

mod error;

pub use chapter5::{FlexContainer, FlexDirection, FlexWrap, JustifyContent};
pub use chapter6::{FlexBasis, FlexChild, FlexItemData, MeasuredSize};
pub use chapter7::{Axes, MainAxis, resolve_axes};
pub use chapter9::{
    FlexItem, FlexLayout, FlexLine, MainRect, collect_flex_lines, flex_base_size,
    layout_main_axis, layout_main_axis_into, place_line, resolve_flexible_lengths,
};
pub use error::{FlexError, FlexErrorKind};
