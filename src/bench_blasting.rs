use crate::constants::{
    ANFO_RWS_PERCENT, DEFAULT_DRILLING_PRICE_PER_M, DEFAULT_EXPLOSIVE_PRICE_PER_KG,
    MIN_DIVISION_THRESHOLD,
};
use crate::error::{require_non_negative, require_positive, BlastingError, Result};
use crate::explosive::Explosive;
use serde::{Deserialize, Serialize};

/// Drilling and charging geometry of one representative blast hole
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchGeometry {
    pub hole_diameter: f64,   // mm
    pub burden: f64,          // meters, between rows
    pub spacing: f64,         // meters, between holes in a row
    pub hole_depth: f64,      // meters, total drilled
    pub bench_height: f64,    // meters
    pub subdrilling: f64,     // meters below grade
    pub standoff: f64,        // meters, uncharged collar (stemming)
}

impl Default for BenchGeometry {
    fn default() -> Self {
        Self {
            hole_diameter: 140.0,
            burden: 3.0,
            spacing: 4.0,
            hole_depth: 10.0,
            bench_height: 8.0,
            subdrilling: 0.5,
            standoff: 1.0,
        }
    }
}

impl BenchGeometry {
    fn validate(&self) -> Result<()> {
        require_positive("hole_diameter", self.hole_diameter)?;
        require_positive("burden", self.burden)?;
        require_positive("spacing", self.spacing)?;
        require_positive("hole_depth", self.hole_depth)?;
        require_positive("bench_height", self.bench_height)?;
        require_non_negative("subdrilling", self.subdrilling)?;
        require_non_negative("standoff", self.standoff)?;

        // A standoff longer than the hole would give a negative charge column
        if self.standoff > self.hole_depth {
            return Err(BlastingError::InvalidParameter {
                field: "standoff",
                value: self.standoff,
                reason: "must not exceed hole_depth",
            });
        }
        Ok(())
    }
}

/// Unit prices for the cost calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    pub explosive_price_per_kg: f64,  // $/kg
    pub drilling_price_per_m: f64,    // $/m
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            explosive_price_per_kg: DEFAULT_EXPLOSIVE_PRICE_PER_KG,
            drilling_price_per_m: DEFAULT_DRILLING_PRICE_PER_M,
        }
    }
}

/// Per-hole and per-volume cost of a blast
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub explosive_cost_per_hole: f64,
    pub drilling_cost_per_hole: f64,
    pub total_cost_per_hole: f64,
    pub cost_per_m3: f64,
}

/// A bench blast: one explosive loaded into holes of a given geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchBlasting {
    explosive: Explosive,
    geometry: BenchGeometry,
}

impl BenchBlasting {
    /// Combine an explosive with a hole geometry.
    ///
    /// Rejects non-positive dimensions, negative subdrilling or standoff and
    /// a standoff longer than the hole.
    pub fn new(explosive: Explosive, geometry: BenchGeometry) -> Result<Self> {
        geometry.validate()?;
        tracing::debug!(explosive = explosive.name(), ?geometry, "bench blast created");
        Ok(Self { explosive, geometry })
    }

    pub fn explosive(&self) -> &Explosive {
        &self.explosive
    }

    pub fn geometry(&self) -> &BenchGeometry {
        &self.geometry
    }

    /// Rock volume broken by one hole (m³): burden * spacing * bench height.
    pub fn blasted_volume(&self) -> f64 {
        self.geometry.burden * self.geometry.spacing * self.geometry.bench_height
    }

    /// Charged column length (m): hole depth minus standoff.
    pub(crate) fn charge_length(&self) -> f64 {
        self.geometry.hole_depth - self.geometry.standoff
    }

    /// Explosive mass loaded in one hole (kg).
    pub fn charge_per_hole(&self) -> f64 {
        self.explosive.linear_density(self.geometry.hole_diameter) * self.charge_length()
    }

    fn checked_volume(&self) -> Result<f64> {
        let volume = self.blasted_volume();
        if !volume.is_finite() || volume.abs() <= MIN_DIVISION_THRESHOLD {
            return Err(BlastingError::InvalidGeometry(format!(
                "blasted volume {volume} m³ cannot be used as a divisor"
            )));
        }
        Ok(volume)
    }

    /// Charge per hole, rejected when the geometry overflows it.
    fn checked_charge(&self) -> Result<f64> {
        finite_geometry("charge per hole (kg)", self.charge_per_hole())
    }

    /// Powder factor (kg/m³): explosive mass per blasted volume.
    pub fn specific_consumption(&self) -> Result<f64> {
        let consumption = finite_geometry(
            "specific consumption (kg/m³)",
            self.checked_charge()? / self.checked_volume()?,
        )?;
        tracing::trace!(explosive = self.explosive.name(), consumption, "specific consumption");
        Ok(consumption)
    }

    /// Powder factor expressed as ANFO (kg/m³).
    pub fn anfo_equivalent_consumption(&self) -> Result<f64> {
        let rws = self.explosive.rws();
        if rws.abs() <= MIN_DIVISION_THRESHOLD {
            return Err(BlastingError::DivisionByZero(format!(
                "relative weight strength of {} is zero",
                self.explosive.name()
            )));
        }
        finite_geometry(
            "ANFO equivalent consumption (kg/m³)",
            self.specific_consumption()? * ANFO_RWS_PERCENT / rws,
        )
    }

    /// Explosive and drilling cost split per hole and per m³.
    pub fn cost_breakdown(&self, pricing: &Pricing) -> Result<CostBreakdown> {
        let explosive_price = require_non_negative("explosive_price_per_kg", pricing.explosive_price_per_kg)?;
        let drilling_price = require_non_negative("drilling_price_per_m", pricing.drilling_price_per_m)?;
        let volume = self.checked_volume()?;

        let charge = self.checked_charge()?;

        let explosive_cost_per_hole =
            finite_cost("explosive_price_per_kg", explosive_price, charge * explosive_price)?;
        let drilling_cost_per_hole = finite_cost(
            "drilling_price_per_m",
            drilling_price,
            self.geometry.hole_depth * drilling_price,
        )?;
        let total_cost_per_hole = finite_geometry(
            "total cost per hole",
            explosive_cost_per_hole + drilling_cost_per_hole,
        )?;
        let breakdown = CostBreakdown {
            explosive_cost_per_hole,
            drilling_cost_per_hole,
            total_cost_per_hole,
            cost_per_m3: finite_geometry("cost per m³", total_cost_per_hole / volume)?,
        };
        tracing::debug!(?breakdown, "blasting cost");
        Ok(breakdown)
    }

    /// Total blasting cost per m³ of rock.
    pub fn blasting_cost(&self, explosive_price_per_kg: f64, drilling_price_per_m: f64) -> Result<f64> {
        let pricing = Pricing { explosive_price_per_kg, drilling_price_per_m };
        Ok(self.cost_breakdown(&pricing)?.cost_per_m3)
    }
}

fn finite_geometry(quantity: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(BlastingError::InvalidGeometry(format!("{quantity} overflows to {value}")));
    }
    Ok(value)
}

fn finite_cost(field: &'static str, price: f64, cost: f64) -> Result<f64> {
    if !cost.is_finite() {
        return Err(BlastingError::InvalidParameter {
            field,
            value: price,
            reason: "cost per hole overflows",
        });
    }
    Ok(cost)
}
