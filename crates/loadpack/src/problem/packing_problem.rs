use crate::problem::{load_type::LoadType, vehicle_profile::VehicleProfile};

/// Everything one packing run needs: the loads and the single vehicle type.
#[derive(Debug, Clone)]
pub struct PackingProblem {
    id: Option<String>,
    load_types: Vec<LoadType>,
    vehicle: VehicleProfile,
}

impl PackingProblem {
    pub fn new(id: Option<String>, load_types: Vec<LoadType>, vehicle: VehicleProfile) -> Self {
        PackingProblem {
            id,
            load_types,
            vehicle,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn load_types(&self) -> &[LoadType] {
        &self.load_types
    }

    pub fn vehicle(&self) -> &VehicleProfile {
        &self.vehicle
    }

    pub fn total_units(&self) -> usize {
        self.load_types
            .iter()
            .map(|load_type| load_type.quantity() as usize)
            .sum()
    }
}
