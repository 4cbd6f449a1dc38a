//! # Involute CLI Application
//!
//! Terminal front end for gear geometry calculations. Every subcommand reads
//! its starting values from the settings file (or built-in defaults) and
//! overrides them with whatever flags were given.
//!
//! ```text
//! gearcalc geometry -m 2 -z 20 --shift 0.25
//! gearcalc reverse -m 2 -z 20 --tip-diameter 46
//! gearcalc reverse -z 25 --tip-diameter 83.4 --estimate-module
//! gearcalc --json estimate-module --tip-diameter 44 -z 20
//! gearcalc dms 15.5125
//! gearcalc --json batch gears.json
//! gearcalc                # interactive prompts
//! ```

mod interactive;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, error, warn};

use gear_core::calculations::{
    module_estimate, reverse, CalculationItem, CalculationMode, CalculationOutcome, GeometryForm, GeometryInput,
    ReverseInput,
};
use gear_core::errors::CalcError;
use gear_core::settings::{load_settings, GearSettings};
use gear_core::units::{Degrees, Dms};

#[derive(Parser, Debug)]
#[command(name = "gearcalc")]
#[command(about = "Involute gear geometry calculator - dimensions, span measurement, profile-shift reverse calculation")]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Settings file with default values and display precision
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dimensions and span measurement from design parameters
    Geometry {
        /// Normal module m_n (mm)
        #[arg(short, long)]
        module: Option<f64>,

        /// Number of teeth z
        #[arg(short = 'z', long)]
        teeth: Option<u32>,

        /// Normal pressure angle α_n (degrees)
        #[arg(short = 'a', long)]
        pressure_angle: Option<f64>,

        /// Helix angle β (degrees)
        #[arg(short = 'b', long, allow_negative_numbers = true)]
        helix_angle: Option<f64>,

        /// Profile-shift coefficient x
        #[arg(short = 'x', long, allow_negative_numbers = true)]
        shift: Option<f64>,

        /// Span-tooth count k (omit or < 1 for the recommended count)
        #[arg(short = 'k', long, allow_negative_numbers = true)]
        span: Option<i64>,
    },

    /// Profile shift from a measured tip diameter
    Reverse {
        /// Normal module m_n (mm)
        #[arg(short, long)]
        module: Option<f64>,

        /// Number of teeth z
        #[arg(short = 'z', long)]
        teeth: Option<u32>,

        /// Helix angle β (degrees)
        #[arg(short = 'b', long, allow_negative_numbers = true)]
        helix_angle: Option<f64>,

        /// Measured tip (outside) diameter (mm)
        #[arg(short = 'd', long)]
        tip_diameter: Option<f64>,

        /// Snap the module from the measured diameter first
        #[arg(long)]
        estimate_module: bool,
    },

    /// Nearest standard module for a measured tip diameter
    EstimateModule {
        /// Measured tip (outside) diameter (mm)
        #[arg(short = 'd', long)]
        tip_diameter: f64,

        /// Number of teeth z
        #[arg(short = 'z', long)]
        teeth: u32,

        /// Helix angle β (degrees)
        #[arg(short = 'b', long, default_value_t = 0.0, allow_negative_numbers = true)]
        helix_angle: f64,
    },

    /// List the standard module series
    Modules,

    /// Convert between decimal degrees and degrees/minutes/seconds
    Dms {
        /// Decimal degrees to split (negative values clamp to 0°00'00")
        #[arg(conflicts_with = "from", allow_negative_numbers = true)]
        value: Option<f64>,

        /// Degrees, minutes and seconds to combine
        #[arg(long, num_args = 3, value_names = ["D", "M", "S"], allow_negative_numbers = true)]
        from: Option<Vec<i64>>,
    },

    /// Evaluate a JSON array of tagged geometry/reverse calculations
    Batch {
        /// JSON file holding an array of tagged inputs ("type": "Geometry" or "Reverse")
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Prompt for values interactively
    Interactive,
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stderr keeps stdout clean for --json
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<GearSettings> {
    match path {
        Some(path) => load_settings(path).with_context(|| format!("loading settings from {}", path.display())),
        None => Ok(GearSettings::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = load_config(cli.config.as_ref())?;
    debug!(?settings, "settings resolved");

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Geometry {
            module,
            teeth,
            pressure_angle,
            helix_angle,
            shift,
            span,
        } => {
            let form = build_geometry_form(&settings, module, teeth, pressure_angle, helix_angle, shift, span);
            run_geometry(&form, &settings, cli.json)
        }
        Commands::Reverse {
            module,
            teeth,
            helix_angle,
            tip_diameter,
            estimate_module,
        } => {
            let input = ReverseInput {
                module_mm: module.unwrap_or(settings.reverse.module_mm),
                teeth: teeth.unwrap_or(settings.reverse.teeth),
                helix_angle_deg: helix_angle.unwrap_or(settings.reverse.helix_angle_deg),
                measured_tip_diameter_mm: tip_diameter.unwrap_or(settings.reverse.measured_tip_diameter_mm),
                ..settings.reverse.clone()
            };
            run_reverse(&input, estimate_module, &settings, cli.json)
        }
        Commands::EstimateModule {
            tip_diameter,
            teeth,
            helix_angle,
        } => {
            let estimate = module_estimate::estimate_detailed(tip_diameter, teeth, helix_angle)
                .ok_or_else(|| anyhow!("tip diameter must be positive and teeth at least 1"))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                report::print_module_estimate(&estimate, &settings.precision);
            }
            Ok(())
        }
        Commands::Modules => {
            if cli.json {
                println!("{}", modules_json()?);
            } else {
                report::print_modules();
            }
            Ok(())
        }
        Commands::Dms { value, from } => run_dms(value, from, cli.json),
        Commands::Batch { file } => {
            let items = load_batch(&file)?;
            run_batch(&items, &settings, cli.json)
        }
        Commands::Interactive => interactive::run(&settings),
    }
}

/// Geometry parameters from settings plus flag overrides.
///
/// The span count follows the recommendation for the final z, α_n and β
/// unless `--span` is given.
fn build_geometry_form(
    settings: &GearSettings,
    module: Option<f64>,
    teeth: Option<u32>,
    pressure_angle: Option<f64>,
    helix_angle: Option<f64>,
    shift: Option<f64>,
    span: Option<i64>,
) -> GeometryForm {
    let mut form = GeometryForm::new(GeometryInput {
        span_teeth: None,
        ..settings.geometry.clone()
    });

    if let Some(m) = module {
        form.set_module(m);
    }
    if let Some(z) = teeth {
        form.set_teeth(z);
    }
    if let Some(a) = pressure_angle {
        form.set_pressure_angle(a);
    }
    if let Some(b) = helix_angle {
        form.set_helix_angle(b);
    }
    if let Some(x) = shift {
        form.set_profile_shift(x);
    }
    if span.is_some() {
        form.set_span_teeth(span);
    }
    form
}

/// Warn about a validation or finiteness problem without stopping the run.
fn log_issue(e: &CalcError) {
    if e.is_input_error() {
        warn!(code = e.error_code(), "{}", e);
    } else {
        error!(code = e.error_code(), "{}", e);
    }
}

/// The standard module series as a JSON array.
fn modules_json() -> Result<String> {
    Ok(serde_json::to_string(&gear_core::STANDARD_MODULES[..])?)
}

fn run_geometry(form: &GeometryForm, settings: &GearSettings, json: bool) -> Result<()> {
    let input = form.input();
    if let Err(e) = input.validate() {
        log_issue(&e);
    }

    let result = form
        .result()
        .ok_or_else(|| anyhow!("module must be positive and teeth at least 1"))?;

    if let Err(e) = result.check_finite() {
        log_issue(&e);
    }

    if json {
        let out = serde_json::json!({ "input": input, "result": result });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        report::print_geometry(input, &result, &settings.precision);
    }
    Ok(())
}

fn run_reverse(input: &ReverseInput, estimate_module: bool, settings: &GearSettings, json: bool) -> Result<()> {
    if !estimate_module {
        if let Err(e) = input.validate() {
            log_issue(&e);
        }
        if !gear_core::standards::is_standard_module(input.module_mm) {
            warn!(module_mm = input.module_mm, "module is not in the standard series");
        }
    }

    let tolerance = settings.shift_tolerance;
    let (input, estimate, result) = if estimate_module {
        let (updated, estimate, result) = module_estimate::estimate_and_reverse(input, tolerance)
            .ok_or_else(|| anyhow!("tip diameter must be positive and teeth at least 1"))?;
        (updated, Some(estimate), result)
    } else {
        let result = reverse::calculate_with_tolerance(input, tolerance)
            .ok_or_else(|| anyhow!("module must be positive and teeth at least 1"))?;
        (input.clone(), None, result)
    };

    if let Err(e) = result.check_finite() {
        log_issue(&e);
    }

    if json {
        let out = serde_json::json!({
            "input": input,
            "module_estimate": estimate,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        if let Some(estimate) = &estimate {
            report::print_module_estimate(estimate, &settings.precision);
            println!();
        }
        report::print_reverse(&input, &result, &settings.precision);
    }
    Ok(())
}

/// One evaluated entry of a batch file.
#[derive(Debug, Serialize)]
struct BatchEntry<'a> {
    label: &'a str,
    #[serde(rename = "type")]
    calc_type: &'static str,
    mode: CalculationMode,
    /// `None` when the entry's input is incomplete
    outcome: Option<CalculationOutcome>,
}

fn load_batch(path: &Path) -> Result<Vec<CalculationItem>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading batch file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing batch file {}", path.display()))
}

fn evaluate_batch<'a>(items: &'a [CalculationItem], settings: &GearSettings) -> Vec<BatchEntry<'a>> {
    items
        .iter()
        .map(|item| {
            let outcome = item.evaluate(settings.shift_tolerance);
            if outcome.is_none() {
                warn!(label = item.label(), "incomplete input, no result");
            }
            BatchEntry {
                label: item.label(),
                calc_type: item.calc_type(),
                mode: item.mode(),
                outcome,
            }
        })
        .collect()
}

fn run_batch(items: &[CalculationItem], settings: &GearSettings, json: bool) -> Result<()> {
    let entries = evaluate_batch(items, settings);
    debug!(count = entries.len(), "batch evaluated");

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (item, entry) in items.iter().zip(&entries) {
        match (item, &entry.outcome) {
            (CalculationItem::Geometry(input), Some(CalculationOutcome::Geometry(result))) => {
                report::print_geometry(input, result, &settings.precision)
            }
            (CalculationItem::Reverse(input), Some(CalculationOutcome::Reverse(result))) => {
                report::print_reverse(input, result, &settings.precision)
            }
            _ => println!("{} '{}': incomplete input, no result", entry.calc_type, entry.label),
        }
        println!();
    }
    Ok(())
}

fn run_dms(value: Option<f64>, from: Option<Vec<i64>>, json: bool) -> Result<()> {
    match (value, from) {
        (Some(v), None) => {
            let dms = Dms::from(Degrees(v));
            if json {
                println!("{}", serde_json::to_string(&dms)?);
            } else {
                println!("{} = {}", v, dms);
            }
        }
        (None, Some(parts)) => {
            let [d, m, s] = parts.as_slice() else {
                return Err(anyhow!("--from takes exactly three values"));
            };
            let dms = Dms::default().with_degrees(*d).with_minutes(*m).with_seconds(*s);
            let degrees = Degrees::from(dms);
            if json {
                println!("{}", serde_json::to_string(&degrees)?);
            } else {
                println!("{} = {:.6}°", dms, degrees.0);
            }
        }
        _ => return Err(anyhow!("give either a decimal value or --from D M S")),
    }
    Ok(())
}
