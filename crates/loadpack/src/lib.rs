pub mod error;
pub mod json;
pub mod problem;
pub mod solver;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::PackingError;
pub use solver::pack_shipment::{pack_shipment, pack_shipment_with_params};
