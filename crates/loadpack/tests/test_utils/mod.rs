#![allow(dead_code)]

use std::path::PathBuf;

use loadpack::{
    problem::{
        load_type::{LoadType, LoadTypeBuilder},
        unit::Unit,
        vehicle_profile::VehicleProfile,
    },
    solver::{expander::expand_units, solution::packing_solution::PackingSolution},
};

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

pub fn data_fixture_path(fixture: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data/fixtures/")
        .join(fixture)
}

/// Every expanded unit is in exactly one bin, and nothing else is.
pub fn assert_units_conserved(load_types: &[LoadType], solution: &PackingSolution) {
    let expected = expand_units(load_types).unwrap();

    let mut packed: Vec<&Unit> = solution
        .bins()
        .iter()
        .flat_map(|bin| bin.units())
        .collect();
    packed.sort_by_key(|unit| unit.index());

    assert_eq!(packed.len(), expected.len());
    for (packed, expected) in packed.into_iter().zip(expected.iter()) {
        assert_eq!(packed, expected);
    }
}

pub fn assert_feasible(solution: &PackingSolution) {
    let vehicle = solution.vehicle();
    for bin in solution.bins() {
        assert!(
            bin.total_weight() <= vehicle.max_weight(),
            "bin {} carries {} kg",
            bin.number(),
            bin.total_weight()
        );
        assert!(
            bin.total_volume() <= vehicle.max_volume(),
            "bin {} carries {} m³",
            bin.number(),
            bin.total_volume()
        );
    }
}

pub fn assert_dense_numbering(solution: &PackingSolution) {
    assert_eq!(solution.total_bins(), solution.bins().len());
    for (position, bin) in solution.bins().iter().enumerate() {
        assert_eq!(bin.number(), position + 1);
    }
}
