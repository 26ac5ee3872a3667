//! JSON blast design files
//!
//! ```json
//! {
//!   "explosive": "Blendex 930",
//!   "geometry": { "hole_diameter": 140, "burden": 3, "spacing": 4 },
//!   "pricing": { "explosive_price_per_kg": 0.95, "drilling_price_per_m": 15 }
//! }
//! ```
//!
//! Omitted geometry and pricing fields take the demonstration defaults.

use crate::bench_blasting::{BenchBlasting, BenchGeometry, Pricing};
use crate::catalog;
use crate::error::{BlastingError, Result};
use crate::explosive::Explosive;
use serde::Deserialize;
use std::path::Path;

/// Explosive properties as written in a design file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExplosiveParams {
    pub name: String,
    pub density: f64,
    pub vod: f64,
    pub rws: f64,
    #[serde(default)]
    pub water_resistant: bool,
}

/// Either a catalogued product name or explicit properties
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExplosiveSpec {
    Preset(String),
    Params(ExplosiveParams),
}

impl ExplosiveSpec {
    pub fn build(&self) -> Result<Explosive> {
        match self {
            ExplosiveSpec::Preset(name) => catalog::lookup(name).ok_or_else(|| {
                BlastingError::Config(format!(
                    "unknown explosive '{}' (known: {})",
                    name,
                    catalog::names().join(", ")
                ))
            }),
            ExplosiveSpec::Params(p) => {
                Explosive::new(p.name.clone(), p.density, p.vod, p.rws, p.water_resistant)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlastDesign {
    pub explosive: ExplosiveSpec,
    #[serde(default)]
    pub geometry: BenchGeometry,
    #[serde(default)]
    pub pricing: Pricing,
}

impl BlastDesign {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BlastingError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "loading blast design");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| BlastingError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    /// Validate the design into a bench blast.
    pub fn build(&self) -> Result<BenchBlasting> {
        BenchBlasting::new(self.explosive.build()?, self.geometry)
    }
}
