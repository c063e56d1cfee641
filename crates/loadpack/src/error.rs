use thiserror::Error;

use crate::problem::{
    amount::{Amount, ExceededDimension},
    unit::Unit,
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PackingError {
    #[error("Invalid load '{load_id}': {reason}")]
    InvalidLoad {
        load_id: String,
        reason: InvalidLoadReason,
    },

    #[error(
        "Load '{name}' ({load_id}) cannot fit in an empty vehicle: {exceeded} over capacity (unit {unit}, capacity {capacity})"
    )]
    UnpackableItem {
        load_id: String,
        name: String,
        exceeded: ExceededDimension,
        unit: Amount,
        capacity: Amount,
    },

    #[error("Invalid vehicle '{vehicle_id}': {reason}")]
    InvalidVehicle {
        vehicle_id: String,
        reason: InvalidVehicleReason,
    },

    #[error("Unknown vehicle '{0}'")]
    UnknownVehicle(String),

    #[error("Duplicate load id '{0}'")]
    DuplicateLoadId(String),
}

impl PackingError {
    pub(crate) fn unpackable(unit: &Unit, capacity: &Amount, exceeded: ExceededDimension) -> Self {
        PackingError::UnpackableItem {
            load_id: unit.load_id().to_owned(),
            name: unit.name().to_owned(),
            exceeded,
            unit: unit.demand(),
            capacity: *capacity,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidLoadReason {
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    #[error("unit weight must be a positive number, got {0}")]
    NonPositiveWeight(f64),

    #[error("unit volume must be a positive number, got {0}")]
    NonPositiveVolume(f64),

    #[error("name must not be blank")]
    BlankName,

    #[error("shipment would exceed {0} units")]
    TooManyUnits(usize),
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidVehicleReason {
    #[error("maximum weight must be a positive number, got {0}")]
    NonPositiveWeight(f64),

    #[error("maximum volume must be a positive number, got {0}")]
    NonPositiveVolume(f64),
}

/// Positive and finite, the only acceptable weight, volume or capacity.
pub(crate) fn is_positive_measure(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
