//! Axis resolution
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>

use crate::chapter5::FlexDirection;
use crate::chapter6::MeasuredSize;

/// Physical axis that flex distribution runs along.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MainAxis {
    /// Row variants: widths are main sizes.
    Horizontal,
    /// Column variants: heights are main sizes.
    Vertical,
}

/// Resolved axes information for a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    pub main_axis: MainAxis,
    /// True when main axis is reversed (row-reverse or column-reverse)
    pub main_reverse: bool,
}

impl Axes {
    /// Project a measured size onto the main axis.
    #[inline]
    pub const fn main_size(self, size: MeasuredSize) -> i32 {
        match self.main_axis {
            MainAxis::Horizontal => size.width,
            MainAxis::Vertical => size.height,
        }
    }
}

/// Resolve the main axis and its direction from `flex-direction`. Writing mode is fixed to
/// `horizontal-tb`.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
pub const fn resolve_axes(direction: FlexDirection) -> Axes {
    match direction {
        FlexDirection::Row => Axes {
            main_axis: MainAxis::Horizontal,
            main_reverse: false,
        },
        FlexDirection::RowReverse => Axes {
            main_axis: MainAxis::Horizontal,
            main_reverse: true,
        },
        FlexDirection::Column => Axes {
            main_axis: MainAxis::Vertical,
            main_reverse: false,
        },
        FlexDirection::ColumnReverse => Axes {
            main_axis: MainAxis::Vertical,
            main_reverse: true,
        },
    }
}
