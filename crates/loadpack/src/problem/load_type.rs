use serde::{Deserialize, Serialize};

use crate::{
    error::{InvalidLoadReason, PackingError, is_positive_measure},
    problem::amount::Amount,
};

/// A kind of package, shipped `quantity` times.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoadType {
    id: String,
    name: String,
    unit_weight: f64,
    unit_volume: f64,
    quantity: u32,
}

impl LoadType {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_weight(&self) -> f64 {
        self.unit_weight
    }

    pub fn unit_volume(&self) -> f64 {
        self.unit_volume
    }

    pub fn unit_demand(&self) -> Amount {
        Amount::new(self.unit_weight, self.unit_volume)
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn validate(&self) -> Result<(), PackingError> {
        let reason = if self.quantity < 1 {
            Some(InvalidLoadReason::ZeroQuantity)
        } else if !is_positive_measure(self.unit_weight) {
            Some(InvalidLoadReason::NonPositiveWeight(self.unit_weight))
        } else if !is_positive_measure(self.unit_volume) {
            Some(InvalidLoadReason::NonPositiveVolume(self.unit_volume))
        } else if self.name.trim().is_empty() {
            Some(InvalidLoadReason::BlankName)
        } else {
            None
        };

        match reason {
            Some(reason) => Err(PackingError::InvalidLoad {
                load_id: self.id.clone(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct LoadTypeBuilder {
    id: Option<String>,
    name: Option<String>,
    unit_weight: Option<f64>,
    unit_volume: Option<f64>,
    quantity: Option<u32>,
}

impl LoadTypeBuilder {
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut LoadTypeBuilder {
        self.id = Some(id.into());
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut LoadTypeBuilder {
        self.name = Some(name.into());
        self
    }

    pub fn set_unit_weight(&mut self, unit_weight: f64) -> &mut LoadTypeBuilder {
        self.unit_weight = Some(unit_weight);
        self
    }

    pub fn set_unit_volume(&mut self, unit_volume: f64) -> &mut LoadTypeBuilder {
        self.unit_volume = Some(unit_volume);
        self
    }

    pub fn set_quantity(&mut self, quantity: u32) -> &mut LoadTypeBuilder {
        self.quantity = Some(quantity);
        self
    }

    /// Missing measures default to zero and are rejected once packing starts.
    pub fn build(self) -> LoadType {
        let id = self.id.unwrap_or_default();
        LoadType {
            name: self.name.unwrap_or_else(|| id.clone()),
            id,
            unit_weight: self.unit_weight.unwrap_or(0.0),
            unit_volume: self.unit_volume.unwrap_or(0.0),
            quantity: self.quantity.unwrap_or(1),
        }
    }
}
