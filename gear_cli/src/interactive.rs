//! Prompt-driven mode for quick calculations without flags.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};

use gear_core::calculations::{module_estimate, reverse, CalculationMode, GeometryForm, GeometryInput, ReverseInput};
use gear_core::settings::GearSettings;
use gear_core::PressureAngle;

use crate::report;

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(&format!("{} [{}]: ", prompt, default))
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_line(&format!("{} [{}]: ", prompt, default))
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_yes(prompt: &str) -> bool {
    prompt_line(&format!("{} [y/N]: ", prompt))
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "y" | "yes"))
        .unwrap_or(false)
}

pub fn run(settings: &GearSettings) -> Result<()> {
    println!("Involute CLI - Gear Geometry Calculator");
    println!("=======================================");
    println!();
    println!("  1) Geometry  (design parameters -> dimensions)");
    println!("  2) Reverse   (measured OD -> profile shift)");
    println!();

    let mode = match prompt_line("Mode [1]: ").as_deref() {
        Some("2") => CalculationMode::Reverse,
        _ => CalculationMode::Geometry,
    };
    match mode {
        CalculationMode::Geometry => run_geometry(settings),
        CalculationMode::Reverse => run_reverse(settings),
    }
}

fn run_geometry(settings: &GearSettings) -> Result<()> {
    let defaults = &settings.geometry;
    let mut form = GeometryForm::new(GeometryInput {
        span_teeth: None,
        ..defaults.clone()
    });

    form.set_module(prompt_f64("Module m_n (mm)", defaults.module_mm));
    form.set_teeth(prompt_u32("Teeth z", defaults.teeth));
    let presets: Vec<&str> = PressureAngle::ALL.iter().map(|p| p.label()).collect();
    println!("Pressure angle presets: {}", presets.join(", "));
    form.set_pressure_angle(prompt_f64("Pressure angle α_n (deg)", defaults.pressure_angle_deg));
    form.set_helix_angle(prompt_f64("Helix angle β (deg)", defaults.helix_angle_deg));
    form.set_profile_shift(prompt_f64("Profile shift x", defaults.profile_shift));

    let recommended = form.recommended_span_teeth();
    let k = prompt_u32("Span teeth k", recommended);
    if k != recommended {
        form.set_span_teeth(Some(k as i64));
    }

    println!();
    let result = form.result().ok_or_else(|| anyhow!("module must be positive and teeth at least 1"))?;
    report::print_geometry(form.input(), &result, &settings.precision);
    Ok(())
}

fn run_reverse(settings: &GearSettings) -> Result<()> {
    let defaults = &settings.reverse;

    let teeth = prompt_u32("Teeth z", defaults.teeth);
    let helix_angle_deg = prompt_f64("Helix angle β (deg)", defaults.helix_angle_deg);
    let measured = prompt_f64("Measured OD (mm)", defaults.measured_tip_diameter_mm);

    let mut input = ReverseInput {
        teeth,
        helix_angle_deg,
        measured_tip_diameter_mm: measured,
        ..defaults.clone()
    };

    if prompt_yes("Estimate module from OD?") {
        let estimate = module_estimate::estimate_detailed(measured, teeth, helix_angle_deg)
            .ok_or_else(|| anyhow!("measured OD must be positive and teeth at least 1"))?;
        println!();
        report::print_module_estimate(&estimate, &settings.precision);
        println!();
        input.module_mm = estimate.module_mm;
    } else {
        input.module_mm = prompt_f64("Module m_n (mm)", defaults.module_mm);
    }

    println!();
    let result = reverse::calculate_with_tolerance(&input, settings.shift_tolerance)
        .ok_or_else(|| anyhow!("module must be positive and teeth at least 1"))?;
    report::print_reverse(&input, &result, &settings.precision);
    Ok(())
}
