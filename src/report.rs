//! Result records for presentation.
//!
//! The formulas live on [`Explosive`] and [`BenchBlasting`]; this module only
//! collects their outputs into serializable records and console lines.

use crate::bench_blasting::{BenchBlasting, BenchGeometry, CostBreakdown, Pricing};
use crate::catalog;
use crate::constants::{DEMO_CHARGE_WEIGHT_KG, DEMO_HOLE_DIAMETER_MM};
use crate::error::{require_finite, BlastingError, Result};
use crate::explosive::{Explosive, WaterResistance};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplosiveReport {
    pub name: String,
    pub detonation_pressure_kpa: f64,
    pub hole_diameter_mm: f64,
    pub linear_density_kg_m: f64,
    pub charge_weight_kg: f64,
    pub anfo_equivalent_kg: f64,
    pub water_resistance: WaterResistance,
}

impl ExplosiveReport {
    /// Rejects a non-finite diameter or weight; a negative diameter is allowed.
    pub fn new(explosive: &Explosive, hole_diameter_mm: f64, charge_weight_kg: f64) -> Result<Self> {
        let hole_diameter_mm = require_finite("hole_diameter_mm", hole_diameter_mm)?;
        let charge_weight_kg = require_finite("charge_weight_kg", charge_weight_kg)?;

        let linear_density_kg_m = explosive.linear_density(hole_diameter_mm);
        if !linear_density_kg_m.is_finite() {
            return Err(BlastingError::InvalidParameter {
                field: "hole_diameter_mm",
                value: hole_diameter_mm,
                reason: "linear density overflows",
            });
        }
        let anfo_equivalent_kg = explosive.anfo_equivalent(charge_weight_kg);
        if !anfo_equivalent_kg.is_finite() {
            return Err(BlastingError::InvalidParameter {
                field: "charge_weight_kg",
                value: charge_weight_kg,
                reason: "ANFO equivalent overflows",
            });
        }

        Ok(Self {
            name: explosive.name().to_string(),
            detonation_pressure_kpa: explosive.detonation_pressure(),
            hole_diameter_mm,
            linear_density_kg_m,
            charge_weight_kg,
            anfo_equivalent_kg,
            water_resistance: explosive.water_resistance(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    pub explosive: String,
    pub geometry: BenchGeometry,
    pub blasted_volume_m3: f64,
    pub charge_length_m: f64,
    pub charge_per_hole_kg: f64,
    pub specific_consumption_kg_m3: f64,
    pub anfo_equivalent_consumption_kg_m3: f64,
    pub pricing: Pricing,
    pub cost: CostBreakdown,
}

impl BenchReport {
    pub fn new(blast: &BenchBlasting, pricing: &Pricing) -> Result<Self> {
        Ok(Self {
            explosive: blast.explosive().name().to_string(),
            geometry: *blast.geometry(),
            blasted_volume_m3: blast.blasted_volume(),
            charge_length_m: blast.charge_length(),
            charge_per_hole_kg: blast.charge_per_hole(),
            specific_consumption_kg_m3: blast.specific_consumption()?,
            anfo_equivalent_consumption_kg_m3: blast.anfo_equivalent_consumption()?,
            pricing: *pricing,
            cost: blast.cost_breakdown(pricing)?,
        })
    }
}

/// The bench blast used by the demonstration: an emulsion-strength product
/// sold as ANFO, loaded into the default geometry.
pub fn demonstration_blast() -> Result<BenchBlasting> {
    let explosive = Explosive::new("ANFO", 1.25, 6000.0, 80.0, true)?;
    BenchBlasting::new(explosive, BenchGeometry::default())
}

/// Console lines of the demonstration: catalogue products first, then the
/// bench blast.
pub fn demonstration_lines() -> Result<Vec<String>> {
    let explosives = ["ANFO", "Blendex 930"]
        .iter()
        .map(|name| {
            catalog::lookup(name)
                .ok_or_else(|| BlastingError::Config(format!("missing catalogue entry '{name}'")))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut lines = Vec::new();
    for e in &explosives {
        lines.push(format!("{} PD: {:.2} kPa", e.name(), e.detonation_pressure()));
    }
    for e in &explosives {
        lines.push(format!(
            "{} Linear Density: {:.2} kg/m",
            e.name(),
            e.linear_density(DEMO_HOLE_DIAMETER_MM)
        ));
    }
    for e in &explosives {
        lines.push(format!(
            "{} equivalent in ANFO: {:.2} kg",
            e.name(),
            e.anfo_equivalent(DEMO_CHARGE_WEIGHT_KG)
        ));
    }
    for e in &explosives {
        lines.push(e.water_resistance_report());
    }

    let blast = demonstration_blast()?;
    let pricing = Pricing::default();
    lines.push(format!(
        "Blasting with {}: Specific consumption = {:.2} kg/m³",
        blast.explosive().name(),
        blast.specific_consumption()?
    ));
    lines.push(format!(
        "ANFO equivalent consumption: {:.2} kg/m³",
        blast.anfo_equivalent_consumption()?
    ));
    lines.push(format!(
        "Blasting cost: ${:.2} per m³",
        blast.blasting_cost(pricing.explosive_price_per_kg, pricing.drilling_price_per_m)?
    ));

    Ok(lines)
}
