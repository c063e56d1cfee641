use serde::Serialize;

use crate::{
    problem::vehicle_profile::VehicleProfile,
    solver::solution::packed_bin::PackedBin,
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PackingSolution {
    pub(crate) vehicle: VehicleProfile,
    pub(crate) total_bins: usize,
    pub(crate) lower_bound_bins: usize,
    pub(crate) bins: Vec<PackedBin>,
}

impl PackingSolution {
    pub fn vehicle(&self) -> &VehicleProfile {
        &self.vehicle
    }

    pub fn total_bins(&self) -> usize {
        self.total_bins
    }

    /// No feasible packing of these units uses fewer bins than this.
    pub fn lower_bound_bins(&self) -> usize {
        self.lower_bound_bins
    }

    /// The bin count matches the capacity lower bound, so no packing can do better.
    pub fn is_proven_optimal(&self) -> bool {
        self.total_bins == self.lower_bound_bins
    }

    pub fn bins(&self) -> &[PackedBin] {
        &self.bins
    }

    pub fn bin(&self, number: usize) -> Option<&PackedBin> {
        number
            .checked_sub(1)
            .and_then(|index| self.bins.get(index))
    }

    pub fn total_units(&self) -> usize {
        self.bins.iter().map(|bin| bin.units().len()).sum()
    }
}
