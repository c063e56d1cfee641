use crate::problem::{amount::Amount, unit::Unit};

const EPSILON: f64 = 1e-9;

/// Kmin = max(ceil(Q_w / D_w), ceil(Q_v / D_v)) where Q = total demand and
/// D = vehicle capacity. No packing can use fewer bins.
pub fn minimum_bins(units: &[Unit], capacity: &Amount) -> usize {
    if units.is_empty() {
        return 0;
    }

    let total_demand: Amount = units.iter().map(Unit::demand).sum();

    required_bins(total_demand.weight, capacity.weight)
        .max(required_bins(total_demand.volume, capacity.volume))
        .max(1)
}

fn required_bins(demand: f64, capacity: f64) -> usize {
    // Tolerate float noise so 10.000000000001 full bins count as 10.
    (demand / capacity - EPSILON).ceil().max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use crate::{solver::expander::expand_units, test_utils::create_load_type};

    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(minimum_bins(&[], &Amount::new(1000.0, 10.0)), 0);
    }

    #[test]
    fn test_weight_bound() {
        let units = expand_units(&[create_load_type("a", 600.0, 3.0, 2)]).unwrap();

        assert_eq!(minimum_bins(&units, &Amount::new(1000.0, 10.0)), 2);
    }

    #[test]
    fn test_volume_bound() {
        let units = expand_units(&[create_load_type("a", 1.0, 2.5, 9)]).unwrap();

        assert_eq!(minimum_bins(&units, &Amount::new(1000.0, 10.0)), 3);
    }

    #[test]
    fn test_exactly_full_is_not_rounded_up() {
        let units = expand_units(&[create_load_type("a", 100.0, 0.1, 10)]).unwrap();

        assert_eq!(minimum_bins(&units, &Amount::new(1000.0, 1.0)), 1);
    }

    #[test]
    fn test_tiny_units_need_one_bin() {
        let units = expand_units(&[create_load_type("a", 0.001, 0.001, 1)]).unwrap();

        assert_eq!(minimum_bins(&units, &Amount::new(1000.0, 10.0)), 1);
    }
}
