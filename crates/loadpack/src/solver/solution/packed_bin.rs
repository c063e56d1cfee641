use std::sync::Arc;

use fxhash::FxHashMap;
use serde::Serialize;

use crate::problem::{amount::Amount, unit::Unit};

/// A filled vehicle with its totals and utilization, as reported to callers.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PackedBin {
    pub(crate) number: usize,
    pub(crate) units: Vec<Unit>,
    pub(crate) total_weight: f64,
    pub(crate) total_volume: f64,
    pub(crate) weight_utilization: f64,
    pub(crate) volume_utilization: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationLevel {
    Normal,
    High,
    Critical,
}

impl UtilizationLevel {
    pub const HIGH_THRESHOLD: f64 = 75.0;
    pub const CRITICAL_THRESHOLD: f64 = 90.0;

    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > Self::CRITICAL_THRESHOLD {
            UtilizationLevel::Critical
        } else if percentage > Self::HIGH_THRESHOLD {
            UtilizationLevel::High
        } else {
            UtilizationLevel::Normal
        }
    }
}

/// How many units of one load type ended up in a bin.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UnitCount {
    pub load_id: Arc<str>,
    pub name: Arc<str>,
    pub count: usize,
}

impl PackedBin {
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn total_volume(&self) -> f64 {
        self.total_volume
    }

    pub fn load(&self) -> Amount {
        Amount::new(self.total_weight, self.total_volume)
    }

    pub fn weight_utilization(&self) -> f64 {
        self.weight_utilization
    }

    pub fn volume_utilization(&self) -> f64 {
        self.volume_utilization
    }

    pub fn utilization_level(&self) -> UtilizationLevel {
        UtilizationLevel::from_percentage(self.weight_utilization.max(self.volume_utilization))
    }

    /// Capacity left over in each dimension.
    pub fn remaining_capacity(&self, capacity: &Amount) -> Amount {
        *capacity - self.load()
    }

    /// Units grouped by load type, in order of first appearance.
    pub fn unit_counts(&self) -> Vec<UnitCount> {
        let mut rows: Vec<UnitCount> = Vec::new();
        let mut row_by_load: FxHashMap<&str, usize> = FxHashMap::default();

        for unit in &self.units {
            match row_by_load.get(unit.load_id()) {
                Some(&row) => rows[row].count += 1,
                None => {
                    row_by_load.insert(unit.load_id(), rows.len());
                    rows.push(UnitCount {
                        load_id: Arc::clone(unit.shared_load_id()),
                        name: Arc::clone(unit.shared_name()),
                        count: 1,
                    });
                }
            }
        }

        rows
    }
}
