use crate::utils::round::MAX_DECIMALS;

/// Highest useful `utilization_precision`, larger values are treated as this.
pub const MAX_UTILIZATION_PRECISION: u32 = MAX_DECIMALS;

#[derive(Clone, Debug, PartialEq)]
pub struct PackingParams {
    /// Decimal places kept in the utilization percentages.
    pub utilization_precision: u32,
}

impl Default for PackingParams {
    fn default() -> Self {
        Self {
            utilization_precision: 1,
        }
    }
}
