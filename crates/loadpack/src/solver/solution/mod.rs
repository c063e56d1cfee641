pub mod bin;
pub mod packed_bin;
pub mod packing_solution;
