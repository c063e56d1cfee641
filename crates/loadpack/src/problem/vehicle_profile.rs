use serde::{Deserialize, Serialize};

use crate::{
    error::{InvalidVehicleReason, PackingError, is_positive_measure},
    problem::amount::Amount,
};

/// A vehicle type: every bin of a packing run is one instance of it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VehicleProfile {
    id: String,
    name: String,
    max_weight: f64,
    max_volume: f64,
}

impl VehicleProfile {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        max_weight: f64,
        max_volume: f64,
    ) -> Self {
        VehicleProfile {
            id: id.into(),
            name: name.into(),
            max_weight,
            max_volume,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    pub fn max_volume(&self) -> f64 {
        self.max_volume
    }

    pub fn capacity(&self) -> Amount {
        Amount::new(self.max_weight, self.max_volume)
    }

    pub fn validate(&self) -> Result<(), PackingError> {
        let reason = if !is_positive_measure(self.max_weight) {
            Some(InvalidVehicleReason::NonPositiveWeight(self.max_weight))
        } else if !is_positive_measure(self.max_volume) {
            Some(InvalidVehicleReason::NonPositiveVolume(self.max_volume))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(PackingError::InvalidVehicle {
                vehicle_id: self.id.clone(),
                reason,
            }),
            None => Ok(()),
        }
    }
}
