pub mod aggregator;
pub mod capacity_validator;
pub mod comparison;
pub mod expander;
pub mod first_fit_decreasing;
pub mod lower_bound;
pub mod pack_shipment;
pub mod packing_order;
pub mod packing_params;
pub mod solution;
pub mod solver;
