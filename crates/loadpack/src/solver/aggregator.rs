use tracing::instrument;

use crate::{
    problem::{amount::Amount, vehicle_profile::VehicleProfile},
    solver::{
        packing_params::PackingParams,
        solution::{bin::Bin, packed_bin::PackedBin, packing_solution::PackingSolution},
    },
    utils::round::round_to,
};

/// Turns the solver's bins into the reported solution.
///
/// Totals are recomputed from the units rather than taken from the solver's
/// running load.
#[instrument(skip_all, level = "debug")]
pub fn aggregate(
    bins: Vec<Bin>,
    vehicle: &VehicleProfile,
    lower_bound_bins: usize,
    params: &PackingParams,
) -> PackingSolution {
    let bins: Vec<PackedBin> = bins
        .into_iter()
        .map(|bin| pack_bin(bin, vehicle, params))
        .collect();

    PackingSolution {
        vehicle: vehicle.clone(),
        total_bins: bins.len(),
        lower_bound_bins,
        bins,
    }
}

fn pack_bin(bin: Bin, vehicle: &VehicleProfile, params: &PackingParams) -> PackedBin {
    let number = bin.number();
    let units = bin.into_units();
    let total = units
        .iter()
        .fold(Amount::ZERO, |total, unit| total + unit.demand());

    PackedBin {
        number,
        weight_utilization: utilization(total.weight, vehicle.max_weight(), params),
        volume_utilization: utilization(total.volume, vehicle.max_volume(), params),
        total_weight: total.weight,
        total_volume: total.volume,
        units,
    }
}

fn utilization(used: f64, capacity: f64, params: &PackingParams) -> f64 {
    round_to(used / capacity * 100.0, params.utilization_precision)
}
