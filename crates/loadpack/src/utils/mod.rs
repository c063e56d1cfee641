pub mod newtype_index;
pub mod round;
