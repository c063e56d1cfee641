pub mod amount;
pub mod load_type;
pub mod packing_problem;
pub mod unit;
pub mod vehicle_catalog;
pub mod vehicle_profile;
