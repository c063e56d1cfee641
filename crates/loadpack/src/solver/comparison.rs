use rayon::prelude::*;
use tracing::{Level, instrument};

use crate::{
    error::PackingError,
    problem::{load_type::LoadType, vehicle_profile::VehicleProfile},
    solver::{
        pack_shipment::pack_shipment_with_params, packing_params::PackingParams,
        solution::packing_solution::PackingSolution,
    },
};

/// Outcome of packing the same loads into one candidate vehicle type.
#[derive(Debug, Clone)]
pub struct VehicleComparison {
    pub vehicle: VehicleProfile,
    pub result: Result<PackingSolution, PackingError>,
}

/// Runs one independent packing per vehicle, in parallel.
///
/// Results come back in the order of `vehicles`.
#[instrument(skip_all, level = Level::DEBUG, fields(vehicles = vehicles.len()))]
pub fn compare_vehicles(
    load_types: &[LoadType],
    vehicles: &[VehicleProfile],
    params: &PackingParams,
) -> Vec<VehicleComparison> {
    vehicles
        .par_iter()
        .map(|vehicle| VehicleComparison {
            vehicle: vehicle.clone(),
            result: pack_shipment_with_params(load_types, vehicle, params),
        })
        .collect()
}
