use crate::constants::{ANFO_RWS_PERCENT, DETONATION_PRESSURE_FACTOR, G_CM3_TO_KG_M3, MM_TO_M};
use crate::error::{require_positive, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Water resistance capability of an explosive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterResistance {
    WaterResistant,
    NotWaterResistant,
}

impl From<bool> for WaterResistance {
    fn from(resistant: bool) -> Self {
        if resistant {
            WaterResistance::WaterResistant
        } else {
            WaterResistance::NotWaterResistant
        }
    }
}

impl fmt::Display for WaterResistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaterResistance::WaterResistant => write!(f, "water resistant"),
            WaterResistance::NotWaterResistant => write!(f, "not water resistant"),
        }
    }
}

/// A commercial explosive and its intrinsic properties.
///
/// Values are validated on construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explosive {
    name: String,
    density: f64,         // g/cm³
    vod: f64,             // m/s
    rws: f64,             // % of ANFO by weight
    water_resistant: bool,
}

impl Explosive {
    /// Create an explosive, rejecting non-finite or non-positive density,
    /// velocity of detonation and relative weight strength.
    pub fn new(
        name: impl Into<String>,
        density: f64,
        vod: f64,
        rws: f64,
        water_resistant: bool,
    ) -> Result<Self> {
        let explosive = Explosive {
            name: name.into(),
            density: require_positive("density", density)?,
            vod: require_positive("vod", vod)?,
            rws: require_positive("rws", rws)?,
            water_resistant,
        };
        tracing::debug!(
            name = %explosive.name,
            density,
            vod,
            rws,
            water_resistant,
            "explosive created"
        );
        Ok(explosive)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bulk density (g/cm³)
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Velocity of detonation (m/s)
    pub fn vod(&self) -> f64 {
        self.vod
    }

    /// Relative weight strength against ANFO (%)
    pub fn rws(&self) -> f64 {
        self.rws
    }

    pub fn is_water_resistant(&self) -> bool {
        self.water_resistant
    }

    /// Detonation pressure, PD = 1/4 * ρe * VOD² (reported as kPa).
    pub fn detonation_pressure(&self) -> f64 {
        DETONATION_PRESSURE_FACTOR * self.density * self.vod.powi(2)
    }

    /// Linear charge density (kg/m) of a fully coupled column in a hole of
    /// the given diameter in millimeters.
    ///
    /// The diameter enters squared, so a negative diameter yields the same
    /// value as its absolute value.
    pub fn linear_density(&self, hole_diameter_mm: f64) -> f64 {
        if hole_diameter_mm < 0.0 {
            tracing::debug!(hole_diameter_mm, "negative hole diameter in linear density");
        }
        let diameter_m = hole_diameter_mm * MM_TO_M;
        let density_kg_m3 = self.density * G_CM3_TO_KG_M3;
        (PI / 4.0) * diameter_m.powi(2) * density_kg_m3
    }

    /// Mass of ANFO (kg) releasing the same energy as `weight_kg` of this
    /// explosive.
    pub fn anfo_equivalent(&self, weight_kg: f64) -> f64 {
        weight_kg * self.rws / ANFO_RWS_PERCENT
    }

    pub fn water_resistance(&self) -> WaterResistance {
        WaterResistance::from(self.water_resistant)
    }

    /// Human-readable sentence stating the water resistance of the product.
    pub fn water_resistance_report(&self) -> String {
        format!("{} is {}.", self.name, self.water_resistance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anfo() -> Explosive {
        Explosive::new("ANFO", 0.78, 4000.0, 100.0, false).unwrap()
    }

    fn blendex() -> Explosive {
        Explosive::new("Blendex 930", 1.0, 3920.0, 93.0, false).unwrap()
    }

    #[test]
    fn test_detonation_pressure() {
        // 0.25 * 0.78 * 4000²
        assert!((anfo().detonation_pressure() - 3_120_000.0).abs() < 1e-6);
        // 0.25 * 1.0 * 3920²
        assert!((blendex().detonation_pressure() - 3_841_600.0).abs() < 1e-6);
    }

    #[test]
    fn test_detonation_pressure_monotonic() {
        let base = Explosive::new("base", 1.0, 4000.0, 100.0, false).unwrap();
        let denser = Explosive::new("denser", 1.2, 4000.0, 100.0, false).unwrap();
        let faster = Explosive::new("faster", 1.0, 4500.0, 100.0, false).unwrap();

        assert!(denser.detonation_pressure() > base.detonation_pressure());
        assert!(faster.detonation_pressure() > base.detonation_pressure());
    }

    #[test]
    fn test_linear_density() {
        // π/4 * 0.14² * 1000
        let expected = PI / 4.0 * 0.14 * 0.14 * 1000.0;
        assert!((blendex().linear_density(140.0) - expected).abs() < 1e-9);
        assert!((blendex().linear_density(140.0) - 15.393804).abs() < 1e-5);

        // ANFO at 0.78 g/cm³
        assert!((anfo().linear_density(140.0) - 12.007167).abs() < 1e-5);
    }

    #[test]
    fn test_linear_density_scaling() {
        let explosive = blendex();
        let d = 115.0;
        let single = explosive.linear_density(d);
        let double = explosive.linear_density(2.0 * d);
        assert!((double - 4.0 * single).abs() < 1e-9);

        // Linear in density
        let heavy = Explosive::new("heavy", 2.0, 3920.0, 93.0, false).unwrap();
        assert!((heavy.linear_density(d) - 2.0 * single).abs() < 1e-9);

        assert_eq!(explosive.linear_density(0.0), 0.0);
    }

    #[test]
    fn test_linear_density_negative_diameter() {
        // Squared, so sign is lost
        let explosive = anfo();
        assert!((explosive.linear_density(-140.0) - explosive.linear_density(140.0)).abs() < 1e-12);
    }

    #[test]
    fn test_anfo_equivalent() {
        assert!((blendex().anfo_equivalent(500.0) - 465.0).abs() < 1e-9);
        // ANFO is its own reference
        assert!((anfo().anfo_equivalent(500.0) - 500.0).abs() < 1e-9);
        assert!((anfo().anfo_equivalent(123.4) - 123.4).abs() < 1e-9);

        // Linear in weight
        let e = blendex();
        assert!((e.anfo_equivalent(1000.0) - 2.0 * e.anfo_equivalent(500.0)).abs() < 1e-9);

        // Linear in relative weight strength
        let weak = Explosive::new("weak", 1.0, 3920.0, 45.0, false).unwrap();
        let strong = Explosive::new("strong", 1.0, 3920.0, 90.0, false).unwrap();
        assert!((strong.anfo_equivalent(500.0) - 2.0 * weak.anfo_equivalent(500.0)).abs() < 1e-9);
        assert!((strong.anfo_equivalent(500.0) - 450.0).abs() < 1e-9);
    }

    #[test]
    fn test_water_resistance() {
        assert_eq!(anfo().water_resistance(), WaterResistance::NotWaterResistant);
        assert_eq!(anfo().water_resistance_report(), "ANFO is not water resistant.");

        let emulsion = Explosive::new("Emulsion", 1.25, 6000.0, 80.0, true).unwrap();
        assert_eq!(emulsion.water_resistance(), WaterResistance::WaterResistant);
        assert_eq!(emulsion.water_resistance_report(), "Emulsion is water resistant.");
    }

    #[test]
    fn test_new_rejects_invalid_properties() {
        assert!(Explosive::new("bad", 0.0, 4000.0, 100.0, false).is_err());
        assert!(Explosive::new("bad", 0.78, -1.0, 100.0, false).is_err());
        assert!(Explosive::new("bad", 0.78, 4000.0, 0.0, false).is_err());
        assert!(Explosive::new("bad", f64::NAN, 4000.0, 100.0, false).is_err());
    }

    #[test]
    fn test_accessors() {
        let e = blendex();
        assert_eq!(e.name(), "Blendex 930");
        assert_eq!(e.density(), 1.0);
        assert_eq!(e.vod(), 3920.0);
        assert_eq!(e.rws(), 93.0);
        assert!(!e.is_water_resistant());
    }
}
