use crate::problem::{
    load_type::{LoadType, LoadTypeBuilder},
    vehicle_profile::VehicleProfile,
};

/// A load type whose name is its id.
pub fn create_load_type(id: &str, unit_weight: f64, unit_volume: f64, quantity: u32) -> LoadType {
    let mut builder = LoadTypeBuilder::default();
    builder
        .set_id(id)
        .set_name(id)
        .set_unit_weight(unit_weight)
        .set_unit_volume(unit_volume)
        .set_quantity(quantity);
    builder.build()
}

pub fn create_vehicle(max_weight: f64, max_volume: f64) -> VehicleProfile {
    VehicleProfile::new("test-vehicle", "Test Vehicle", max_weight, max_volume)
}
