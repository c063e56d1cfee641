use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    error::{InvalidLoadReason, PackingError},
    problem::{
        load_type::LoadType,
        unit::{Unit, UnitIdx},
    },
};

/// Most units a single packing run expands to.
pub const MAX_UNITS: usize = 1_000_000;

/// Expands every load type into `quantity` units, keeping input order.
///
/// All load types are validated before anything is expanded. The load type
/// that takes the running unit count past [`MAX_UNITS`] is rejected.
#[instrument(skip_all, level = "debug")]
pub fn expand_units(load_types: &[LoadType]) -> Result<Vec<Unit>, PackingError> {
    let mut total_units: usize = 0;
    for load_type in load_types {
        load_type.validate()?;

        total_units = total_units.saturating_add(load_type.quantity() as usize);
        if total_units > MAX_UNITS {
            return Err(PackingError::InvalidLoad {
                load_id: load_type.id().to_owned(),
                reason: InvalidLoadReason::TooManyUnits(MAX_UNITS),
            });
        }
    }

    let mut units = Vec::with_capacity(total_units);

    for load_type in load_types {
        let load_id: Arc<str> = Arc::from(load_type.id());
        let name: Arc<str> = Arc::from(load_type.name());

        for _ in 0..load_type.quantity() {
            units.push(Unit::new(
                UnitIdx::new(units.len()),
                Arc::clone(&load_id),
                Arc::clone(&name),
                load_type.unit_weight(),
                load_type.unit_volume(),
            ));
        }
    }

    debug!(
        load_types = load_types.len(),
        units = units.len(),
        "Expanded load types"
    );

    Ok(units)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_load_type;

    use super::*;

    #[test]
    fn test_expand_keeps_source_order() {
        let load_types = vec![
            create_load_type("a", 600.0, 3.0, 2),
            create_load_type("b", 100.0, 1.0, 3),
        ];

        let units = expand_units(&load_types).unwrap();

        assert_eq!(units.len(), 5);
        assert_eq!(
            units.iter().map(|unit| unit.load_id()).collect::<Vec<_>>(),
            vec!["a", "a", "b", "b", "b"]
        );
        for (position, unit) in units.iter().enumerate() {
            assert_eq!(unit.index().get(), position);
            assert_eq!(&units[unit.index()], unit);
        }
        let last = units.last().unwrap();
        assert_eq!(last.weight(), 100.0);
        assert_eq!(last.volume(), 1.0);
    }

    #[test]
    fn test_expand_empty() {
        assert!(expand_units(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_expand_rejects_whole_run_on_one_bad_entry() {
        let load_types = vec![
            create_load_type("a", 600.0, 3.0, 2),
            create_load_type("broken", 100.0, 1.0, 0),
        ];

        assert_eq!(
            expand_units(&load_types),
            Err(PackingError::InvalidLoad {
                load_id: "broken".to_owned(),
                reason: InvalidLoadReason::ZeroQuantity,
            })
        );
    }

    #[test]
    fn test_unit_count_ceiling() {
        let at_limit = vec![
            create_load_type("a", 1.0, 1.0, (MAX_UNITS - 1) as u32),
            create_load_type("b", 1.0, 1.0, 1),
        ];
        assert_eq!(expand_units(&at_limit).unwrap().len(), MAX_UNITS);

        let load_types = vec![
            create_load_type("a", 1.0, 1.0, 10),
            create_load_type("huge", 1.0, 1.0, 4_000_000_000),
            create_load_type("b", 1.0, 1.0, 10),
        ];
        assert_eq!(
            expand_units(&load_types),
            Err(PackingError::InvalidLoad {
                load_id: "huge".to_owned(),
                reason: InvalidLoadReason::TooManyUnits(MAX_UNITS),
            })
        );
    }
}
