use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use anyhow::Context;
use fxhash::FxHashSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::PackingError,
    problem::{
        load_type::LoadTypeBuilder,
        packing_problem::PackingProblem,
        vehicle_catalog::find_vehicle,
        vehicle_profile::VehicleProfile,
    },
};

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "PackingProblem")]
pub struct JsonPackingProblem {
    pub id: Option<String>,
    pub loads: Vec<JsonLoadType>,
    pub vehicle: JsonVehicleSelection,
}

/// One kind of package; `weight` and `volume` are per unit.
#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "LoadType")]
pub struct JsonLoadType {
    pub id: Option<String>,
    pub name: String,
    /// Kilograms per unit.
    pub weight: f64,
    /// Cubic meters per unit.
    pub volume: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(untagged, rename = "VehicleSelection")]
pub enum JsonVehicleSelection {
    Catalog(JsonCatalogVehicle),
    Custom(JsonVehicleProfile),
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "CatalogVehicle")]
pub struct JsonCatalogVehicle {
    /// Id of a built-in vehicle: `van`, `boxtruck` or `semitrailer`.
    pub catalog: String,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "VehicleProfile")]
pub struct JsonVehicleProfile {
    pub id: String,
    pub name: String,
    pub max_weight: f64,
    pub max_volume: f64,
}

impl JsonVehicleSelection {
    pub fn resolve(self) -> Result<VehicleProfile, PackingError> {
        match self {
            JsonVehicleSelection::Catalog(JsonCatalogVehicle { catalog }) => find_vehicle(&catalog),
            JsonVehicleSelection::Custom(profile) => {
                let vehicle = VehicleProfile::new(
                    profile.id,
                    profile.name,
                    profile.max_weight,
                    profile.max_volume,
                );
                vehicle.validate()?;
                Ok(vehicle)
            }
        }
    }
}

impl JsonPackingProblem {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, anyhow::Error> {
        serde_json::from_reader(reader).context("Invalid packing problem JSON")
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Resolves the vehicle and assigns `load-<n>` ids to loads without one.
    ///
    /// Load measures are not checked here, packing does that.
    #[instrument(skip_all, level = "debug")]
    pub fn build_problem(self) -> Result<PackingProblem, PackingError> {
        let vehicle = self.vehicle.resolve()?;

        let mut seen_ids = FxHashSet::default();
        let mut load_types = Vec::with_capacity(self.loads.len());

        for (index, load) in self.loads.into_iter().enumerate() {
            let id = load.id.unwrap_or_else(|| format!("load-{}", index + 1));
            if !seen_ids.insert(id.clone()) {
                return Err(PackingError::DuplicateLoadId(id));
            }

            let mut builder = LoadTypeBuilder::default();
            builder
                .set_id(id)
                .set_name(load.name)
                .set_unit_weight(load.weight)
                .set_unit_volume(load.volume)
                .set_quantity(load.quantity);

            load_types.push(builder.build());
        }

        Ok(PackingProblem::new(self.id, load_types, vehicle))
    }
}
