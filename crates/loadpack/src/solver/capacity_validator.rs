use tracing::instrument;

use crate::{
    error::PackingError,
    problem::{unit::Unit, vehicle_profile::VehicleProfile},
};

/// Fails on the first unit that does not fit an empty vehicle on its own.
#[instrument(skip_all, level = "debug")]
pub fn validate_units(units: &[Unit], vehicle: &VehicleProfile) -> Result<(), PackingError> {
    let capacity = vehicle.capacity();

    let offender = units.iter().find_map(|unit| {
        unit.demand()
            .exceeded_dimension(&capacity)
            .map(|exceeded| (unit, exceeded))
    });

    match offender {
        Some((unit, exceeded)) => Err(PackingError::unpackable(unit, &capacity, exceeded)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        problem::amount::{Amount, ExceededDimension},
        solver::expander::expand_units,
        test_utils::{create_load_type, create_vehicle},
    };

    use super::*;

    #[test]
    fn test_accepts_units_at_capacity() {
        let units = expand_units(&[create_load_type("full", 1000.0, 10.0, 3)]).unwrap();

        assert!(validate_units(&units, &create_vehicle(1000.0, 10.0)).is_ok());
    }

    #[test]
    fn test_rejects_overweight_unit() {
        let units = expand_units(&[
            create_load_type("light", 10.0, 1.0, 1),
            create_load_type("heavy", 1200.0, 1.0, 1),
        ])
        .unwrap();

        assert_eq!(
            validate_units(&units, &create_vehicle(1000.0, 10.0)),
            Err(PackingError::UnpackableItem {
                load_id: "heavy".to_owned(),
                name: "heavy".to_owned(),
                exceeded: ExceededDimension::Weight,
                unit: Amount::new(1200.0, 1.0),
                capacity: Amount::new(1000.0, 10.0),
            })
        );
    }

    #[test]
    fn test_reports_first_offender_in_expansion_order() {
        let units = expand_units(&[
            create_load_type("bulky", 10.0, 11.0, 1),
            create_load_type("huge", 2000.0, 20.0, 1),
        ])
        .unwrap();

        assert!(matches!(
            validate_units(&units, &create_vehicle(1000.0, 10.0)),
            Err(PackingError::UnpackableItem {
                ref load_id,
                exceeded: ExceededDimension::Volume,
                ..
            }) if load_id == "bulky"
        ));
    }
}
