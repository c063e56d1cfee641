use std::sync::Arc;

use serde::Serialize;

use crate::{define_index_newtype, problem::amount::Amount};

define_index_newtype!(UnitIdx, Unit);

/// One physical package, expanded from a [`LoadType`](super::load_type::LoadType).
///
/// `index` is the unit's position in expansion order. Units of the same load
/// type share their id and name.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Unit {
    index: UnitIdx,
    #[serde(rename = "source_load_id")]
    load_id: Arc<str>,
    name: Arc<str>,
    weight: f64,
    volume: f64,
}

impl Unit {
    pub fn new(
        index: UnitIdx,
        load_id: Arc<str>,
        name: Arc<str>,
        weight: f64,
        volume: f64,
    ) -> Self {
        Unit {
            index,
            load_id,
            name,
            weight,
            volume,
        }
    }

    pub fn index(&self) -> UnitIdx {
        self.index
    }

    pub fn load_id(&self) -> &str {
        &self.load_id
    }

    pub fn shared_load_id(&self) -> &Arc<str> {
        &self.load_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shared_name(&self) -> &Arc<str> {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn demand(&self) -> Amount {
        Amount::new(self.weight, self.volume)
    }
}
