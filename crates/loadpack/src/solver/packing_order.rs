use std::cmp::Ordering;

use crate::problem::{amount::Amount, unit::Unit};

/// Packing priority of two units: larger load factor first, then heavier,
/// then bulkier, then earlier in expansion order.
pub fn compare_units(a: &Unit, b: &Unit, capacity: &Amount) -> Ordering {
    let load_factor_a = a.demand().load_factor(capacity);
    let load_factor_b = b.demand().load_factor(capacity);

    load_factor_b
        .total_cmp(&load_factor_a)
        .then_with(|| b.weight().total_cmp(&a.weight()))
        .then_with(|| b.volume().total_cmp(&a.volume()))
        .then_with(|| a.index().cmp(&b.index()))
}

/// Sorts `units` into first-fit-decreasing order.
pub fn sort_for_packing(units: &mut [Unit], capacity: &Amount) {
    // Total order thanks to the index tie-break.
    units.sort_unstable_by(|a, b| compare_units(a, b, capacity));
}
