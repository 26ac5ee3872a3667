//! # Blasting Engine
//!
//! Explosive properties and bench blasting design: detonation pressure,
//! linear charge density, ANFO equivalence, powder factor and blasting cost.

// Re-export the main types and functions
pub use bench_blasting::{BenchBlasting, BenchGeometry, CostBreakdown, Pricing};
pub use design_file::{BlastDesign, ExplosiveParams, ExplosiveSpec};
pub use error::{BlastingError, Result};
pub use explosive::{Explosive, WaterResistance};
pub use report::{demonstration_blast, demonstration_lines, BenchReport, ExplosiveReport};

// Module declarations
pub mod catalog;
pub mod constants;
pub mod logging;
mod bench_blasting;
mod design_file;
mod error;
mod explosive;
mod report;
