// Worked examples from the ENAEX manual and the bench blast used in the demo
use blasting_engine::{catalog, BenchBlasting, BenchGeometry, BlastingError, Explosive, Pricing};
use std::f64::consts::PI;

const TOLERANCE: f64 = 1e-9;

fn scenario_blast() -> BenchBlasting {
    let explosive = Explosive::new("ANFO", 1.25, 6000.0, 80.0, true).unwrap();
    let geometry = BenchGeometry {
        hole_diameter: 140.0,
        burden: 3.0,
        spacing: 4.0,
        hole_depth: 10.0,
        bench_height: 8.0,
        subdrilling: 0.5,
        standoff: 1.0,
    };
    BenchBlasting::new(explosive, geometry).unwrap()
}

#[test]
fn test_anfo_detonation_pressure() {
    let anfo = Explosive::new("ANFO", 0.78, 4000.0, 100.0, false).unwrap();
    assert!((anfo.detonation_pressure() - 3_120_000.0).abs() < 1e-6);
}

#[test]
fn test_blendex_linear_density() {
    let blendex = catalog::lookup("Blendex 930").unwrap();
    let expected = PI / 4.0 * 0.14_f64.powi(2) * 1000.0;
    assert!((blendex.linear_density(140.0) - expected).abs() < TOLERANCE);
    assert!((blendex.linear_density(140.0) - 15.393).abs() < 1e-3);
}

#[test]
fn test_blendex_anfo_equivalent() {
    let blendex = catalog::lookup("Blendex 930").unwrap();
    assert!((blendex.anfo_equivalent(500.0) - 465.0).abs() < TOLERANCE);
}

#[test]
fn test_bench_scenario() {
    let blast = scenario_blast();
    assert!((blast.blasted_volume() - 96.0).abs() < TOLERANCE);

    let charge = blast.explosive().linear_density(140.0) * 9.0;
    assert!((blast.charge_per_hole() - charge).abs() < TOLERANCE);

    let consumption = blast.specific_consumption().unwrap();
    assert!((consumption - charge / 96.0).abs() < TOLERANCE);

    let anfo = blast.anfo_equivalent_consumption().unwrap();
    assert!((anfo - consumption * 100.0 / 80.0).abs() < TOLERANCE);
}

#[test]
fn test_consumption_recovers_charge() {
    let geometries = [
        BenchGeometry::default(),
        BenchGeometry { hole_diameter: 89.0, burden: 2.2, spacing: 2.6, hole_depth: 6.5, bench_height: 6.0, subdrilling: 0.5, standoff: 2.0 },
        BenchGeometry { hole_diameter: 311.0, burden: 8.0, spacing: 10.0, hole_depth: 17.0, bench_height: 15.0, subdrilling: 2.0, standoff: 6.0 },
    ];
    for explosive in catalog::all() {
        for geometry in geometries {
            let blast = BenchBlasting::new(explosive.clone(), geometry).unwrap();
            let consumption = blast.specific_consumption().unwrap();
            let recovered = consumption * blast.blasted_volume();
            assert!(
                (recovered - blast.charge_per_hole()).abs() < 1e-9 * blast.charge_per_hole().max(1.0),
                "{} with {:?}",
                explosive.name(),
                geometry
            );
        }
    }
}

#[test]
fn test_blasting_cost_matches_breakdown() {
    let blast = scenario_blast();
    let breakdown = blast.cost_breakdown(&Pricing::default()).unwrap();
    let cost = blast.blasting_cost(0.95, 15.0).unwrap();

    assert_eq!(cost, breakdown.cost_per_m3);
    assert!((breakdown.total_cost_per_hole / 96.0 - cost).abs() < TOLERANCE);
}

#[test]
fn test_invalid_inputs_fail_before_computation() {
    assert!(matches!(
        Explosive::new("ANFO", 0.78, 0.0, 100.0, false),
        Err(BlastingError::InvalidParameter { field: "vod", .. })
    ));

    let anfo = catalog::lookup("ANFO").unwrap();
    let geometry = BenchGeometry { burden: 0.0, ..Default::default() };
    assert!(matches!(
        BenchBlasting::new(anfo, geometry),
        Err(BlastingError::InvalidParameter { field: "burden", .. })
    ));
}
