use crate::{
    error::PackingError,
    problem::{amount::Amount, unit::Unit},
};

/// A vehicle instance being filled by the solver.
///
/// The accumulated load never exceeds the capacity passed to [`Bin::open`]
/// and [`Bin::insert`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    number: usize,
    units: Vec<Unit>,
    load: Amount,
}

impl Bin {
    pub fn new(number: usize) -> Self {
        Bin {
            number,
            units: Vec::new(),
            load: Amount::ZERO,
        }
    }

    /// Opens bin `number` holding `unit`, or fails when `unit` is over
    /// `capacity` on its own.
    pub fn open(number: usize, unit: Unit, capacity: &Amount) -> Result<Self, PackingError> {
        let demand = unit.demand();
        if let Some(exceeded) = demand.exceeded_dimension(capacity) {
            return Err(PackingError::unpackable(&unit, capacity, exceeded));
        }

        let mut bin = Bin::new(number);
        bin.load += demand;
        bin.units.push(unit);
        Ok(bin)
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn into_units(self) -> Vec<Unit> {
        self.units
    }

    pub fn load(&self) -> Amount {
        self.load
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn can_fit(&self, demand: &Amount, capacity: &Amount) -> bool {
        (&self.load + demand).fits_within(capacity)
    }

    /// Adds `unit` if it fits in what is left of `capacity`, otherwise hands
    /// it back untouched.
    pub fn insert(&mut self, unit: Unit, capacity: &Amount) -> Result<(), Unit> {
        let demand = unit.demand();
        if !self.can_fit(&demand, capacity) {
            return Err(unit);
        }

        self.load += demand;
        self.units.push(unit);
        Ok(())
    }
}
