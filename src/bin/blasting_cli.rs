use blasting_engine::constants::{DEMO_CHARGE_WEIGHT_KG, DEMO_HOLE_DIAMETER_MM};
use blasting_engine::{
    catalog, demonstration_lines, logging, BenchBlasting, BenchGeometry, BenchReport, BlastDesign,
    Explosive, ExplosiveReport, Pricing,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blasting")]
#[command(author = "Blasting Engine Team")]
#[command(version = "0.1.0")]
#[command(about = "Explosive properties and bench blasting design calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detonation pressure, linear density and ANFO equivalence of an explosive
    Explosive {
        #[command(flatten)]
        explosive: ExplosiveArgs,

        /// Hole diameter for the linear density (mm)
        #[arg(long, default_value = "140.0")]
        diameter: f64,

        /// Explosive weight for the ANFO equivalence (kg)
        #[arg(long, default_value = "500.0")]
        weight: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Powder factor and cost of a bench blast
    Bench {
        #[command(flatten)]
        explosive: ExplosiveArgs,

        #[command(flatten)]
        geometry: GeometryArgs,

        /// Explosive price ($/kg)
        #[arg(long, default_value = "0.95")]
        explosive_price: f64,

        /// Drilling price ($/m)
        #[arg(long, default_value = "15.0")]
        drilling_price: f64,

        /// JSON design file; cannot be combined with the explosive, geometry and price flags
        #[arg(long, conflicts_with_all = [
            "preset", "name", "density", "vod", "rws", "water_resistant",
            "hole_diameter", "burden", "spacing", "hole_depth", "bench_height",
            "subdrilling", "standoff", "explosive_price", "drilling_price",
        ])]
        design: Option<PathBuf>,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Run the worked example
    Demo,

    /// List the reference explosives
    Catalog {
        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Display engine information
    Info,
}

#[derive(Args)]
struct ExplosiveArgs {
    /// Reference product name (see `catalog`); overrides the property flags
    #[arg(short = 'p', long)]
    preset: Option<String>,

    /// Product name
    #[arg(long, default_value = "ANFO")]
    name: String,

    /// Density (g/cm³)
    #[arg(long, default_value = "1.25")]
    density: f64,

    /// Velocity of detonation (m/s)
    #[arg(long, default_value = "6000.0")]
    vod: f64,

    /// Relative weight strength against ANFO (%)
    #[arg(long, default_value = "80.0")]
    rws: f64,

    /// Product is water resistant
    #[arg(long)]
    water_resistant: bool,
}

impl ExplosiveArgs {
    fn build(&self) -> Result<Explosive, Box<dyn Error>> {
        match &self.preset {
            Some(preset) => match catalog::lookup(preset) {
                Some(explosive) => Ok(explosive),
                None => Err(format!(
                    "Unknown explosive preset: {}. Known: {}",
                    preset,
                    catalog::names().join(", ")
                )
                .into()),
            },
            None => Ok(Explosive::new(
                self.name.clone(),
                self.density,
                self.vod,
                self.rws,
                self.water_resistant,
            )?),
        }
    }
}

#[derive(Args)]
struct GeometryArgs {
    /// Hole diameter (mm)
    #[arg(long, default_value = "140.0")]
    hole_diameter: f64,

    /// Burden, distance between rows (m)
    #[arg(long, default_value = "3.0")]
    burden: f64,

    /// Spacing, distance between holes in a row (m)
    #[arg(long, default_value = "4.0")]
    spacing: f64,

    /// Total drilled depth (m)
    #[arg(long, default_value = "10.0")]
    hole_depth: f64,

    /// Bench height (m)
    #[arg(long, default_value = "8.0")]
    bench_height: f64,

    /// Subdrilling below grade (m)
    #[arg(long, default_value = "0.5")]
    subdrilling: f64,

    /// Uncharged collar length (m)
    #[arg(long, default_value = "1.0")]
    standoff: f64,
}

impl From<&GeometryArgs> for BenchGeometry {
    fn from(args: &GeometryArgs) -> Self {
        BenchGeometry {
            hole_diameter: args.hole_diameter,
            burden: args.burden,
            spacing: args.spacing,
            hole_depth: args.hole_depth,
            bench_height: args.bench_height,
            subdrilling: args.subdrilling,
            standoff: args.standoff,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Table,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Explosive { explosive, diameter, weight, output } => {
            let explosive = explosive.build()?;
            let report = ExplosiveReport::new(&explosive, diameter, weight)?;
            display_explosive_report(&report, output)?;
        },

        Commands::Bench {
            explosive, geometry, explosive_price, drilling_price, design, output
        } => {
            let (blast, pricing) = match design {
                Some(path) => {
                    let design = BlastDesign::load(path)?;
                    (design.build()?, design.pricing)
                },
                None => {
                    let blast = BenchBlasting::new(explosive.build()?, BenchGeometry::from(&geometry))?;
                    let pricing = Pricing {
                        explosive_price_per_kg: explosive_price,
                        drilling_price_per_m: drilling_price,
                    };
                    (blast, pricing)
                },
            };

            // Computed in full before anything is printed
            let report = BenchReport::new(&blast, &pricing)?;
            display_bench_report(&report, output)?;
        },

        Commands::Demo => {
            for line in demonstration_lines()? {
                println!("{line}");
            }
        },

        Commands::Catalog { output } => {
            let reports = catalog::all()
                .iter()
                .map(|e| ExplosiveReport::new(e, DEMO_HOLE_DIAMETER_MM, DEMO_CHARGE_WEIGHT_KG))
                .collect::<Result<Vec<_>, _>>()?;
            display_catalog(&reports, output)?;
        },

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║       BLASTING ENGINE v0.1.0           ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Explosive and bench blast design       ║");
            println!("║ calculations.                          ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Detonation pressure                  ║");
            println!("║ • Linear charge density                ║");
            println!("║ • ANFO equivalence                     ║");
            println!("║ • Powder factor and blasting cost      ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_explosive_report(report: &ExplosiveReport, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        },

        OutputFormat::Csv => {
            println!("metric,value");
            println!("name,{}", report.name);
            println!("detonation_pressure_kpa,{:.2}", report.detonation_pressure_kpa);
            println!("hole_diameter_mm,{:.2}", report.hole_diameter_mm);
            println!("linear_density_kg_m,{:.2}", report.linear_density_kg_m);
            println!("charge_weight_kg,{:.2}", report.charge_weight_kg);
            println!("anfo_equivalent_kg,{:.2}", report.anfo_equivalent_kg);
            println!("water_resistance,{}", report.water_resistance);
        },

        OutputFormat::Table => {
            println!("╔══════════════════════════════════════════════╗");
            println!("║ EXPLOSIVE: {:<33} ║", report.name);
            println!("╠══════════════════════════════════════════════╣");
            println!("║ Detonation Pressure: {:>14.2} kPa      ║", report.detonation_pressure_kpa);
            println!("║ Linear Density:      {:>14.2} kg/m     ║", report.linear_density_kg_m);
            println!("║   at diameter        {:>14.2} mm       ║", report.hole_diameter_mm);
            println!("║ ANFO Equivalent:     {:>14.2} kg       ║", report.anfo_equivalent_kg);
            println!("║   of charge          {:>14.2} kg       ║", report.charge_weight_kg);
            println!("║ Water Resistance:    {:>23} ║", report.water_resistance.to_string());
            println!("╚══════════════════════════════════════════════╝");
        },
    }

    Ok(())
}

fn display_bench_report(report: &BenchReport, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        },

        OutputFormat::Csv => {
            println!("metric,value");
            println!("explosive,{}", report.explosive);
            println!("blasted_volume_m3,{:.2}", report.blasted_volume_m3);
            println!("charge_length_m,{:.2}", report.charge_length_m);
            println!("charge_per_hole_kg,{:.2}", report.charge_per_hole_kg);
            println!("specific_consumption_kg_m3,{:.2}", report.specific_consumption_kg_m3);
            println!("anfo_equivalent_consumption_kg_m3,{:.2}", report.anfo_equivalent_consumption_kg_m3);
            println!("explosive_cost_per_hole,{:.2}", report.cost.explosive_cost_per_hole);
            println!("drilling_cost_per_hole,{:.2}", report.cost.drilling_cost_per_hole);
            println!("total_cost_per_hole,{:.2}", report.cost.total_cost_per_hole);
            println!("cost_per_m3,{:.2}", report.cost.cost_per_m3);
        },

        OutputFormat::Table => {
            println!("╔══════════════════════════════════════════════╗");
            println!("║ BENCH BLAST: {:<31} ║", report.explosive);
            println!("╠══════════════════════════════════════════════╣");
            println!("║ GEOMETRY                                     ║");
            println!("║ Hole Diameter:       {:>14.2} mm       ║", report.geometry.hole_diameter);
            println!("║ Burden x Spacing:    {:>6.2} x {:<6.2} m        ║", report.geometry.burden, report.geometry.spacing);
            println!("║ Hole Depth:          {:>14.2} m        ║", report.geometry.hole_depth);
            println!("║ Bench Height:        {:>14.2} m        ║", report.geometry.bench_height);
            println!("║ Subdrilling:         {:>14.2} m        ║", report.geometry.subdrilling);
            println!("║ Standoff:            {:>14.2} m        ║", report.geometry.standoff);
            println!("╠══════════════════════════════════════════════╣");
            println!("║ CHARGE                                       ║");
            println!("║ Blasted Volume:      {:>14.2} m³       ║", report.blasted_volume_m3);
            println!("║ Charge Length:       {:>14.2} m        ║", report.charge_length_m);
            println!("║ Charge per Hole:     {:>14.2} kg       ║", report.charge_per_hole_kg);
            println!("║ Specific Consumption:{:>14.2} kg/m³    ║", report.specific_consumption_kg_m3);
            println!("║ ANFO Equivalent:     {:>14.2} kg/m³    ║", report.anfo_equivalent_consumption_kg_m3);
            println!("╠══════════════════════════════════════════════╣");
            println!("║ COST                                         ║");
            println!("║ Explosive per Hole:  {:>14.2} $        ║", report.cost.explosive_cost_per_hole);
            println!("║ Drilling per Hole:   {:>14.2} $        ║", report.cost.drilling_cost_per_hole);
            println!("║ Total per Hole:      {:>14.2} $        ║", report.cost.total_cost_per_hole);
            println!("║ Cost per m³:         {:>14.2} $        ║", report.cost.cost_per_m3);
            println!("╚══════════════════════════════════════════════╝");
        },
    }

    Ok(())
}

fn display_catalog(reports: &[ExplosiveReport], format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(reports)?);
        },

        OutputFormat::Csv => {
            println!("name,detonation_pressure_kpa,linear_density_140mm_kg_m,anfo_equivalent_500kg,water_resistance");
            for r in reports {
                println!("{},{:.2},{:.2},{:.2},{}",
                    r.name, r.detonation_pressure_kpa, r.linear_density_kg_m,
                    r.anfo_equivalent_kg, r.water_resistance);
            }
        },

        OutputFormat::Table => {
            println!("┌──────────────────┬──────────────┬────────────┬──────────────────────┐");
            println!("│ Name             │   PD (kPa)   │ LD (kg/m)  │ Water                │");
            println!("├──────────────────┼──────────────┼────────────┼──────────────────────┤");
            for r in reports {
                println!("│ {:<16} │ {:>12.2} │ {:>10.2} │ {:<20} │",
                    r.name, r.detonation_pressure_kpa, r.linear_density_kg_m,
                    r.water_resistance.to_string());
            }
            println!("└──────────────────┴──────────────┴────────────┴──────────────────────┘");
        },
    }

    Ok(())
}
