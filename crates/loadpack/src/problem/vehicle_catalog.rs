use crate::{error::PackingError, problem::vehicle_profile::VehicleProfile};

pub const VAN: &str = "van";
pub const BOX_TRUCK: &str = "boxtruck";
pub const SEMI_TRAILER: &str = "semitrailer";

/// The built-in vehicle types, smallest first.
pub fn catalog() -> Vec<VehicleProfile> {
    vec![
        VehicleProfile::new(VAN, "Small Van", 1500.0, 4.0),
        VehicleProfile::new(BOX_TRUCK, "Box Truck", 7000.0, 40.0),
        VehicleProfile::new(SEMI_TRAILER, "Semi-Trailer", 20000.0, 90.0),
    ]
}

pub fn find_vehicle(id: &str) -> Result<VehicleProfile, PackingError> {
    catalog()
        .into_iter()
        .find(|vehicle| vehicle.id() == id)
        .ok_or_else(|| PackingError::UnknownVehicle(id.to_owned()))
}
