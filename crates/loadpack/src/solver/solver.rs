use crate::{
    error::PackingError,
    problem::{packing_problem::PackingProblem, vehicle_profile::VehicleProfile},
    solver::{
        comparison::{VehicleComparison, compare_vehicles},
        pack_shipment::pack_shipment_with_params,
        packing_params::PackingParams,
        solution::packing_solution::PackingSolution,
    },
};

pub struct PackingSolver {
    params: PackingParams,
}

impl PackingSolver {
    pub fn new(params: PackingParams) -> Self {
        PackingSolver { params }
    }

    pub fn params(&self) -> &PackingParams {
        &self.params
    }

    pub fn solve(&self, problem: &PackingProblem) -> Result<PackingSolution, PackingError> {
        pack_shipment_with_params(problem.load_types(), problem.vehicle(), &self.params)
    }

    /// Packs the problem's loads once per vehicle in `vehicles`, ignoring the
    /// problem's own vehicle.
    pub fn compare(
        &self,
        problem: &PackingProblem,
        vehicles: &[VehicleProfile],
    ) -> Vec<VehicleComparison> {
        compare_vehicles(problem.load_types(), vehicles, &self.params)
    }
}

impl Default for PackingSolver {
    fn default() -> Self {
        PackingSolver::new(PackingParams::default())
    }
}
