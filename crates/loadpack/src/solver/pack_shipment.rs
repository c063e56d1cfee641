use tracing::{Level, debug, instrument};

use crate::{
    error::PackingError,
    problem::{load_type::LoadType, vehicle_profile::VehicleProfile},
    solver::{
        aggregator::aggregate, capacity_validator::validate_units, expander::expand_units,
        first_fit_decreasing::first_fit_decreasing, lower_bound::minimum_bins,
        packing_params::PackingParams, solution::packing_solution::PackingSolution,
    },
};

/// Packs every unit of `load_types` into as few `vehicle`s as the
/// first-fit-decreasing heuristic manages.
///
/// Fails without a partial result when a load type is invalid or when one of
/// its units cannot fit an empty vehicle.
pub fn pack_shipment(
    load_types: &[LoadType],
    vehicle: &VehicleProfile,
) -> Result<PackingSolution, PackingError> {
    pack_shipment_with_params(load_types, vehicle, &PackingParams::default())
}

#[instrument(
    skip_all,
    level = Level::DEBUG,
    fields(vehicle = vehicle.id(), load_types = load_types.len())
)]
pub fn pack_shipment_with_params(
    load_types: &[LoadType],
    vehicle: &VehicleProfile,
    params: &PackingParams,
) -> Result<PackingSolution, PackingError> {
    let units = expand_units(load_types)?;
    validate_units(&units, vehicle)?;

    let lower_bound = minimum_bins(&units, &vehicle.capacity());
    let bins = first_fit_decreasing(units, vehicle)?;
    let solution = aggregate(bins, vehicle, lower_bound, params);

    debug!(
        bins = solution.total_bins(),
        lower_bound = solution.lower_bound_bins(),
        "Packing finished"
    );

    Ok(solution)
}
