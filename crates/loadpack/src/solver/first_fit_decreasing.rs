use tracing::{Level, debug, instrument, trace};

use crate::{
    error::PackingError,
    problem::{unit::Unit, vehicle_profile::VehicleProfile},
    solver::{packing_order::sort_for_packing, solution::bin::Bin},
};

/// Packs `units` with first-fit-decreasing.
///
/// Units are sorted by [`compare_units`](super::packing_order::compare_units)
/// and each goes into the first open bin with room left in both dimensions,
/// opening a new bin when none has. Bins are numbered from 1 in opening order.
///
/// The result is feasible and reproducible but not necessarily minimal.
/// Expects units that each fit an empty bin, see
/// [`validate_units`](super::capacity_validator::validate_units).
#[instrument(skip_all, level = Level::DEBUG)]
pub fn first_fit_decreasing(
    mut units: Vec<Unit>,
    vehicle: &VehicleProfile,
) -> Result<Vec<Bin>, PackingError> {
    let capacity = vehicle.capacity();
    sort_for_packing(&mut units, &capacity);

    let mut bins: Vec<Bin> = Vec::new();

    for unit in units {
        let demand = unit.demand();
        let refused = match bins.iter_mut().find(|bin| bin.can_fit(&demand, &capacity)) {
            Some(bin) => bin.insert(unit, &capacity).err(),
            None => Some(unit),
        };

        if let Some(unit) = refused {
            let bin = Bin::open(bins.len() + 1, unit, &capacity)?;
            trace!(bin = bin.number(), "Opened bin");
            bins.push(bin);
        }
    }

    debug!(bins = bins.len(), "Packed units");

    Ok(bins)
}

#[cfg(test)]
mod tests {
    use crate::{
        problem::amount::{Amount, ExceededDimension},
        solver::expander::expand_units,
        test_utils::{create_load_type, create_vehicle},
    };

    use super::*;

    fn bin_contents(bins: &[Bin]) -> Vec<Vec<usize>> {
        bins.iter()
            .map(|bin| bin.units().iter().map(|unit| unit.index().get()).collect())
            .collect()
    }

    #[test]
    fn test_no_units_no_bins() {
        let bins = first_fit_decreasing(Vec::new(), &create_vehicle(1000.0, 10.0)).unwrap();

        assert!(bins.is_empty());
    }

    #[test]
    fn test_units_that_cannot_share_get_own_bins() {
        let units = expand_units(&[create_load_type("a", 600.0, 3.0, 2)]).unwrap();

        let bins = first_fit_decreasing(units, &create_vehicle(1000.0, 10.0)).unwrap();

        assert_eq!(bin_contents(&bins), vec![vec![0], vec![1]]);
        assert_eq!(bins[1].number(), 2);
    }

    #[test]
    fn test_first_fit_fills_earliest_bin() {
        // Sorted: a0 a1 (0.6), c4 (0.4), b2 b3 b5 b6 (0.1).
        let units = expand_units(&[
            create_load_type("a", 600.0, 3.0, 2),
            create_load_type("b", 100.0, 1.0, 2),
            create_load_type("c", 50.0, 4.0, 1),
            create_load_type("b", 100.0, 1.0, 2),
        ])
        .unwrap();

        let bins = first_fit_decreasing(units, &create_vehicle(1000.0, 10.0)).unwrap();

        assert_eq!(bin_contents(&bins), vec![vec![0, 4, 2, 3, 5], vec![1, 6]]);
        assert_eq!(bins[0].load(), Amount::new(950.0, 10.0));
        assert_eq!(bins[1].load(), Amount::new(700.0, 4.0));
    }

    #[test]
    fn test_volume_bound_packing() {
        let units = expand_units(&[create_load_type("crate", 10.0, 2.5, 9)]).unwrap();

        let bins = first_fit_decreasing(units, &create_vehicle(1000.0, 10.0)).unwrap();

        assert_eq!(
            bins.iter().map(|bin| bin.len()).collect::<Vec<_>>(),
            vec![4, 4, 1]
        );
    }

    #[test]
    fn test_unit_refused_by_open_bin_starts_a_new_one() {
        let units = expand_units(&[
            create_load_type("rolls", 10.0, 6.0, 1),
            create_load_type("bulky", 10.0, 6.0, 1),
        ])
        .unwrap();

        let bins = first_fit_decreasing(units, &create_vehicle(1000.0, 10.0)).unwrap();

        assert_eq!(bin_contents(&bins), vec![vec![0], vec![1]]);
    }

    #[test]
    fn test_oversized_unit_reports_its_dimension() {
        let units = expand_units(&[
            create_load_type("rolls", 10.0, 6.0, 1),
            create_load_type("bulky", 10.0, 12.0, 1),
        ])
        .unwrap();

        assert!(matches!(
            first_fit_decreasing(units, &create_vehicle(1000.0, 10.0)),
            Err(PackingError::UnpackableItem {
                ref load_id,
                exceeded: ExceededDimension::Volume,
                ..
            }) if load_id == "bulky"
        ));
    }
}
