use clap::{Parser, Subcommand};
use fl_catalog::{
    CatalogStore, ComponentCategory, InMemoryCatalog, JsonFileSelectionStore, LineType,
    SelectionStore,
};
use fl_core::units::{
    as_bar, as_celsius, as_kw, as_m3_per_hour, as_mm, celsius, hz, kelvin_interval, kw, m,
};
use fl_engine::{
    Computed, DutyPoint, SizingConfig, SizingConfigDef, SizingEngine, SizingOutcome,
    SizingRequest, Suitability,
};
use fl_props::{CoolPropProvider, PropertyProvider, Refrigerant, TableProvider};
use std::path::{Path, PathBuf};
use std::str::FromStr;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "fl-cli")]
#[command(about = "Frigline CLI - refrigeration circuit sizing tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a catalog file
    Validate {
        /// Path to the catalog YAML file
        catalog_path: PathBuf,
    },
    /// List the components of a catalog
    Catalog {
        /// Path to the catalog YAML file
        catalog_path: PathBuf,
    },
    /// List supported refrigerants
    Refrigerants,
    /// Size a circuit against a catalog
    Size {
        /// Path to the catalog YAML file
        catalog_path: PathBuf,
        /// Required cooling capacity in kW
        #[arg(long)]
        capacity_kw: f64,
        /// Evaporating temperature in °C
        #[arg(long)]
        t_evap_c: f64,
        /// Condensing temperature in °C
        #[arg(long)]
        t_cond_c: f64,
        /// Subcooling in K
        #[arg(long, default_value_t = 2.0)]
        subcooling_k: f64,
        /// Superheat in K
        #[arg(long, default_value_t = 5.0)]
        superheat_k: f64,
        /// Refrigerant designation (e.g. R134a)
        #[arg(long)]
        refrigerant: String,
        /// Compressor drive frequency in Hz
        #[arg(long, default_value_t = 50.0)]
        frequency_hz: f64,
        /// One-way pipe run length in m
        #[arg(long)]
        run_length_m: f64,
        /// Number of parallel circuits
        #[arg(long, default_value_t = 1)]
        circuits: u32,
        /// Optional engine configuration YAML
        #[arg(long)]
        config: Option<PathBuf>,
        /// Use the fixed-table property provider instead of CoolProp
        #[arg(long)]
        offline: bool,
        /// Emit the outcome as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Record a chosen component in a selection file
    Select {
        /// Path to the selection JSON file
        selection_path: PathBuf,
        /// Component category (e.g. compressor, suction_pipe)
        category: String,
        /// Component name as listed in the catalog
        name: String,
    },
    /// Show recorded component selections
    Selections {
        /// Path to the selection JSON file
        selection_path: PathBuf,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Validate { catalog_path } => cmd_validate(&catalog_path),
        Commands::Catalog { catalog_path } => cmd_catalog(&catalog_path),
        Commands::Refrigerants => cmd_refrigerants(),
        Commands::Size {
            catalog_path,
            capacity_kw,
            t_evap_c,
            t_cond_c,
            subcooling_k,
            superheat_k,
            refrigerant,
            frequency_hz,
            run_length_m,
            circuits,
            config,
            offline,
            json,
        } => {
            let duty = DutyPoint {
                capacity: kw(capacity_kw),
                t_evap: celsius(t_evap_c),
                t_cond: celsius(t_cond_c),
                subcooling: kelvin_interval(subcooling_k),
                superheat: kelvin_interval(superheat_k),
                refrigerant: Refrigerant::from_str(&refrigerant)
                    .map_err(|_| format!("unknown refrigerant '{refrigerant}'"))?,
                frequency: hz(frequency_hz),
                run_length: m(run_length_m),
            };
            cmd_size(
                &catalog_path,
                duty,
                circuits,
                config.as_deref(),
                offline,
                json,
            )
        }
        Commands::Select {
            selection_path,
            category,
            name,
        } => cmd_select(&selection_path, &category, &name),
        Commands::Selections { selection_path } => cmd_selections(&selection_path),
    }
}

fn cmd_validate(catalog_path: &Path) -> CliResult<()> {
    println!("Validating catalog: {}", catalog_path.display());
    let catalog = InMemoryCatalog::from_file(catalog_path)?;
    println!("✓ Catalog is valid");
    println!("  Compressors: {}", catalog.compressors().len());
    println!("  Pipes: {}", catalog.pipes(None).len());
    Ok(())
}

fn cmd_catalog(catalog_path: &Path) -> CliResult<()> {
    let catalog = InMemoryCatalog::from_file(catalog_path)?;

    println!("Compressors:");
    for c in catalog.compressors() {
        let refrigerants: Vec<&str> = c.refrigerants.iter().map(|r| r.designation()).collect();
        println!(
            "  {} - {:.1}/{:.1} m³/h, suction {:.0} mm, discharge {:.0} mm, [{}]",
            c.name,
            as_m3_per_hour(c.displacement_50hz),
            as_m3_per_hour(c.displacement_60hz),
            as_mm(c.suction_conn),
            as_mm(c.discharge_conn),
            refrigerants.join(", ")
        );
    }

    for line_type in LineType::ALL {
        let pipes = catalog.pipes(Some(line_type));
        if pipes.is_empty() {
            continue;
        }
        println!("{}:", line_type.label());
        for p in pipes {
            println!(
                "  {} - {:.1}/{:.1} mm, {}",
                p.name,
                as_mm(p.inner_diameter),
                as_mm(p.outer_diameter),
                p.material
            );
        }
    }

    let accessories = catalog.accessories();
    if !accessories.is_empty() {
        println!("Accessories:");
        for r in &accessories.receivers {
            println!("  receiver {} ({})", r.name, r.manufacturer);
        }
        for v in &accessories.check_valves {
            println!("  check valve {} ({})", v.name, v.manufacturer);
        }
        for g in &accessories.sight_glasses {
            println!("  sight glass {} ({})", g.model, g.manufacturer);
        }
        for a in &accessories.suction_accumulators {
            println!("  suction accumulator {} ({})", a.model, a.manufacturer);
        }
        for s in &accessories.oil_separators {
            println!("  oil separator {} ({})", s.model, s.manufacturer);
        }
        for s in &accessories.oil_separator_receivers {
            println!("  oil separator/receiver {} ({})", s.model, s.manufacturer);
        }
        for r in &accessories.oil_receivers {
            println!("  oil receiver {} ({})", r.model, r.manufacturer);
        }
    }
    Ok(())
}

fn cmd_refrigerants() -> CliResult<()> {
    println!("Supported refrigerants:");
    for r in Refrigerant::ALL {
        println!(
            "  {:8} {:20} {:?}",
            r.designation(),
            r.display_name(),
            r.family()
        );
    }
    Ok(())
}

fn cmd_size(
    catalog_path: &Path,
    duty: DutyPoint,
    circuits: u32,
    config_path: Option<&Path>,
    offline: bool,
    json: bool,
) -> CliResult<()> {
    let catalog = InMemoryCatalog::from_file(catalog_path)?;
    let config = match config_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let def: SizingConfigDef = serde_yaml::from_str(&text)?;
            def.compile()?
        }
        None => SizingConfig::default(),
    };

    let coolprop;
    let table;
    let provider: &dyn PropertyProvider = if offline {
        table = TableProvider::r134a_fixture();
        &table
    } else {
        coolprop = CoolPropProvider::new();
        &coolprop
    };

    let engine = SizingEngine::new(&catalog, provider, config)?;
    let request = SizingRequest {
        duty,
        circuits,
        accessories: vec![],
    };
    let outcome = engine.size(&request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome_json(&outcome))?);
    } else {
        print_outcome(&outcome);
    }
    Ok(())
}

fn print_outcome(outcome: &SizingOutcome) {
    println!(
        "Required capacity per circuit: {:.2} kW",
        as_kw(outcome.capacity_per_circuit)
    );

    match &outcome.best_fit {
        Some(best) => {
            println!("\nBest-fit compressor: {}", best.name);
            println!(
                "  Cooling capacity: {:.2} kW",
                as_kw(best.performance.cooling_capacity)
            );
            println!("  Mass flow: {:.4} kg/s", best.performance.mass_flow.value);
            println!(
                "  Discharge temperature (isentropic estimate): {:.1} °C",
                as_celsius(best.performance.discharge_temperature)
            );
            for message in &best.advisories {
                println!("  Advisory: {}", message);
            }
            match &best.suction_pipe {
                Some(p) => println!(
                    "  Suction pipe: {} ({:.1} m/s, {:.4} bar)",
                    p.name,
                    p.hydraulics.velocity.value,
                    as_bar(p.hydraulics.pressure_drop)
                ),
                None => println!("  Suction pipe: none selected"),
            }
            match &best.discharge_pipe {
                Some(p) => println!(
                    "  Discharge pipe: {} ({:.1} m/s, {:.4} bar)",
                    p.name,
                    p.hydraulics.velocity.value,
                    as_bar(p.hydraulics.pressure_drop)
                ),
                None => println!("  Discharge pipe: none selected"),
            }
        }
        None => println!("\nNo compressor selected"),
    }

    println!("\nRanked compressors:");
    for entry in &outcome.ranked {
        let verdict = match &entry.suitability {
            Suitability::Suitable { capacity } => format!("suitable ({:.2} kW)", as_kw(*capacity)),
            Suitability::Undersized { capacity } => {
                format!("undersized ({:.2} kW)", as_kw(*capacity))
            }
            Suitability::IncompatibleRefrigerant => "incompatible refrigerant".to_string(),
            Suitability::OutsideEnvelope => "outside working envelope".to_string(),
            Suitability::Unavailable(reason) => format!("unavailable: {reason}"),
        };
        println!("  {} - {}", entry.name, verdict);
    }

    for (label, table) in [
        ("Suction pipes", &outcome.suction_pipes),
        ("Discharge pipes", &outcome.discharge_pipes),
    ] {
        if table.is_empty() {
            continue;
        }
        println!("\n{}:", label);
        for entry in table {
            match &entry.hydraulics {
                Computed::Ready(h) => println!(
                    "  {} - {:.1} m/s, {:.4} bar",
                    entry.name,
                    h.velocity.value,
                    as_bar(h.pressure_drop)
                ),
                Computed::Unavailable(reason) => println!("  {} - {}", entry.name, reason),
            }
        }
    }
}

fn outcome_json(outcome: &SizingOutcome) -> serde_json::Value {
    let chosen = |p: &Option<fl_engine::ChosenPipe>| match p {
        Some(p) => serde_json::json!({
            "name": p.name,
            "velocity_mps": p.hydraulics.velocity.value,
            "pressure_drop_bar": as_bar(p.hydraulics.pressure_drop),
        }),
        None => serde_json::Value::Null,
    };
    let table = |entries: &[fl_engine::PipeEvaluation]| {
        entries
            .iter()
            .map(|entry| match &entry.hydraulics {
                Computed::Ready(h) => serde_json::json!({
                    "name": entry.name,
                    "velocity_mps": h.velocity.value,
                    "pressure_drop_bar": as_bar(h.pressure_drop),
                }),
                Computed::Unavailable(reason) => serde_json::json!({
                    "name": entry.name,
                    "unavailable": reason.to_string(),
                }),
            })
            .collect::<Vec<_>>()
    };
    serde_json::json!({
        "capacity_per_circuit_kw": as_kw(outcome.capacity_per_circuit),
        "best_fit": outcome.best_fit.as_ref().map(|best| serde_json::json!({
            "name": best.name,
            "cooling_capacity_kw": as_kw(best.performance.cooling_capacity),
            "mass_flow_kgps": best.performance.mass_flow.value,
            "discharge_temperature_c": as_celsius(best.performance.discharge_temperature),
            "advisories": best.advisories,
            "suction_pipe": chosen(&best.suction_pipe),
            "discharge_pipe": chosen(&best.discharge_pipe),
        })),
        "ranked": outcome.ranked.iter().map(|entry| {
            let capacity = entry.performance.ready().map(|p| as_kw(p.cooling_capacity));
            serde_json::json!({
                "name": entry.name,
                "cooling_capacity_kw": capacity,
                "suitability": match &entry.suitability {
                    Suitability::Suitable { .. } => "suitable".to_string(),
                    Suitability::Undersized { .. } => "undersized".to_string(),
                    Suitability::IncompatibleRefrigerant => "incompatible_refrigerant".to_string(),
                    Suitability::OutsideEnvelope => "outside_envelope".to_string(),
                    Suitability::Unavailable(reason) => format!("unavailable: {reason}"),
                },
            })
        }).collect::<Vec<_>>(),
        "suction_pipes": table(&outcome.suction_pipes),
        "discharge_pipes": table(&outcome.discharge_pipes),
    })
}

fn cmd_select(selection_path: &Path, category: &str, name: &str) -> CliResult<()> {
    let category = ComponentCategory::from_str(category)?;
    let mut store = JsonFileSelectionStore::open(selection_path)?;
    store.record(category, name)?;
    println!("✓ Recorded {} = {}", category, name);
    Ok(())
}

fn cmd_selections(selection_path: &Path) -> CliResult<()> {
    let store = JsonFileSelectionStore::open(selection_path)?;
    let mut any = false;
    for category in ComponentCategory::ALL {
        if let Some(name) = store.selected(category) {
            println!("  {} = {}", category, name);
            any = true;
        }
    }
    if !any {
        println!("No selections recorded");
    }
    Ok(())
}
