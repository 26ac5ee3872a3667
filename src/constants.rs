/// Physical and conversion constants used in blasting calculations

/// Conversion factor: millimeters to meters
pub const MM_TO_M: f64 = 0.001;

/// Conversion factor: g/cm³ to kg/m³
pub const G_CM3_TO_KG_M3: f64 = 1000.0;

/// Coefficient of the detonation pressure approximation
///
/// PD = 1/4 * ρe * VOD²
///
/// Note: the result is reported in kPa, but with density in g/cm³ and VOD in
/// m/s the product carries no unit conversion. The literal formula is kept so
/// published hand calculations match; the unit label is unverified.
pub const DETONATION_PRESSURE_FACTOR: f64 = 0.25;

/// Relative weight strength of ANFO, the reference explosive (%)
pub const ANFO_RWS_PERCENT: f64 = 100.0;

/// Minimum threshold for preventing division by zero in general calculations
pub const MIN_DIVISION_THRESHOLD: f64 = 1e-12;

/// Default explosive price used by the demonstration ($/kg)
pub const DEFAULT_EXPLOSIVE_PRICE_PER_KG: f64 = 0.95;

/// Default drilling price used by the demonstration ($/m)
pub const DEFAULT_DRILLING_PRICE_PER_M: f64 = 15.0;

/// Hole diameter used for the demonstration linear densities (mm)
pub const DEMO_HOLE_DIAMETER_MM: f64 = 140.0;

/// Explosive weight used for the demonstration ANFO equivalence (kg)
pub const DEMO_CHARGE_WEIGHT_KG: f64 = 500.0;
