//! Resolving flexible lengths for one flex line.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use log::{debug, trace};

use super::FlexItem;
use super::base_size::clamp_main;
use crate::error::FlexError;

/// Resolve the main size of every item in one line (§9.7).
///
/// The line grows when the sum of flex base sizes is strictly below `container_main` and shrinks
/// otherwise. Returned sizes are in item order, non-negative and respect each item's min/max.
///
/// # Errors
/// [`FlexError::NotConverged`] if items are still unfrozen after `items.len()` passes, or if a
/// pass produces a non-finite size. Every pass freezes at least one item, so this only signals
/// a bug.
pub fn resolve_flexible_lengths(
    items: &[FlexItem],
    container_main: f32,
    line_index: usize,
) -> Result<Vec<f32>, FlexError> {
    // 1) Determine the used flex factor.
    let line_main: f32 = items.iter().map(|item| item.flex_base_size).sum();
    let growing = line_main < container_main;

    // 2) Size inflexible items at their hypothetical main size.
    let mut target: Vec<f32> = items.iter().map(|item| item.flex_base_size).collect();
    let mut frozen: Vec<bool> = vec![false; items.len()];
    for ((item, size), is_frozen) in items.iter().zip(target.iter_mut()).zip(frozen.iter_mut()) {
        if is_inflexible(item, growing) {
            *is_frozen = true;
            *size = item.hypothetical_main_size;
        }
    }

    // 3) Initial free space.
    let initial_free_space = container_main - occupied_space(items, &target, &frozen);
    debug!(
        target: "flex_resolver::flexible_lengths",
        "[FLEX-FREEZE] line={line_index} items={} growing={growing} line_main={line_main:.3} initial_free_space={initial_free_space:.3}",
        items.len()
    );

    // 4) Loop until every item is frozen.
    let max_passes = items.len();
    let mut passes = 0usize;
    while frozen.contains(&false) {
        if passes >= max_passes {
            return Err(FlexError::NotConverged {
                line: line_index,
                passes,
            });
        }
        passes += 1;

        // Factors are summed in f64: finite f32 factors near f32::MAX would overflow to inf.
        let factor_sum: f64 = items
            .iter()
            .zip(&frozen)
            .filter(|(_, is_frozen)| !**is_frozen)
            .map(|(item, _)| f64::from(flex_factor(item, growing)))
            .sum();
        let mut remaining = container_main - occupied_space(items, &target, &frozen);
        if factor_sum < 1.0 {
            let scaled = (f64::from(initial_free_space) * factor_sum) as f32;
            if scaled.abs() < remaining.abs() {
                remaining = scaled;
            }
        }

        distribute_free_space(items, &frozen, &mut target, growing, remaining, factor_sum);
        if target.iter().any(|size| !size.is_finite()) {
            return Err(FlexError::NotConverged {
                line: line_index,
                passes,
            });
        }
        let violation_total = freeze_violations(items, &mut frozen, &mut target);
        trace!(
            target: "flex_resolver::flexible_lengths",
            "[FLEX-FREEZE] line={line_index} pass={passes} remaining={remaining:.3} factor_sum={factor_sum:.3} violation_total={violation_total:.3} sizes={target:?}"
        );
    }
    Ok(target)
}

/// An item is inflexible when its relevant factor is zero or its base size is already past its
/// hypothetical size in the direction the line is flexing.
#[inline]
fn is_inflexible(item: &FlexItem, growing: bool) -> bool {
    if growing {
        item.flex_grow <= 0.0 || item.flex_base_size > item.hypothetical_main_size
    } else {
        item.flex_shrink <= 0.0 || item.flex_base_size < item.hypothetical_main_size
    }
}

#[inline]
const fn flex_factor(item: &FlexItem, growing: bool) -> f32 {
    if growing {
        item.flex_grow
    } else {
        item.flex_shrink
    }
}

/// Frozen items count at their target size, unfrozen ones at their flex base size.
fn occupied_space(items: &[FlexItem], target: &[f32], frozen: &[bool]) -> f32 {
    items
        .iter()
        .zip(target)
        .zip(frozen)
        .map(|((item, size), is_frozen)| {
            if *is_frozen {
                *size
            } else {
                item.flex_base_size
            }
        })
        .sum()
}

/// Set each unfrozen item's target from its base size plus its share of `remaining`.
///
/// Shares are computed in f64 so that huge factors keep their ratios instead of overflowing.
fn distribute_free_space(
    items: &[FlexItem],
    frozen: &[bool],
    target: &mut [f32],
    growing: bool,
    remaining: f32,
    factor_sum: f64,
) {
    let scaled_shrink_sum: f64 = items
        .iter()
        .zip(frozen)
        .filter(|(_, is_frozen)| !**is_frozen)
        .map(|(item, _)| scaled_shrink_factor(item))
        .sum();
    let remaining = f64::from(remaining);
    for ((item, size), is_frozen) in items.iter().zip(target.iter_mut()).zip(frozen) {
        if *is_frozen {
            continue;
        }
        *size = item.flex_base_size;
        if remaining == 0.0 {
            continue;
        }
        let share = if growing {
            if factor_sum <= 0.0 {
                continue;
            }
            f64::from(item.flex_grow) / factor_sum * remaining
        } else {
            if scaled_shrink_sum <= 0.0 {
                continue;
            }
            -(scaled_shrink_factor(item) / scaled_shrink_sum * remaining.abs())
        };
        *size = (f64::from(item.flex_base_size) + share) as f32;
    }
}

#[inline]
fn scaled_shrink_factor(item: &FlexItem) -> f64 {
    f64::from(item.flex_base_size) * f64::from(item.flex_shrink)
}

/// Clamp unfrozen targets to their min/max and the zero floor, then freeze per the sign of the
/// total violation. Returns that total.
fn freeze_violations(items: &[FlexItem], frozen: &mut [bool], target: &mut [f32]) -> f32 {
    let mut adjustments: Vec<f32> = vec![0.0; items.len()];
    let mut total = 0.0f32;
    for (((item, size), is_frozen), adjustment) in items
        .iter()
        .zip(target.iter_mut())
        .zip(frozen.iter())
        .zip(adjustments.iter_mut())
    {
        if *is_frozen {
            continue;
        }
        let clamped = clamp_main(*size, item.min_main, item.max_main).max(0.0);
        *adjustment = clamped - *size;
        total += *adjustment;
        *size = clamped;
    }
    for (is_frozen, adjustment) in frozen.iter_mut().zip(adjustments) {
        if *is_frozen {
            continue;
        }
        let freeze = if total > 0.0 {
            adjustment > 0.0
        } else if total < 0.0 {
            adjustment < 0.0
        } else {
            true
        };
        if freeze {
            *is_frozen = true;
        }
    }
    total
}
