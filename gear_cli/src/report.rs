//! Plain-text result blocks for the terminal.

use gear_core::calculations::{GeometryInput, GeometryResult, ModuleEstimate, ReverseInput, ReverseResult};
use gear_core::settings::DisplayPrecision;
use gear_core::{PressureAngle, STANDARD_MODULES};

const RULE: &str = "═══════════════════════════════════════";

fn header(title: &str) {
    println!("{}", RULE);
    println!("  {}", title);
    println!("{}", RULE);
}

pub fn print_geometry(input: &GeometryInput, result: &GeometryResult, p: &DisplayPrecision) {
    header("GEAR GEOMETRY");
    println!();
    println!("Input:");
    if !input.label.is_empty() {
        println!("  Label:          {}", input.label);
    }
    println!("  Module m_n:     {} mm", input.module_mm);
    println!("  Teeth z:        {}", input.teeth);
    match PressureAngle::from_degrees(input.pressure_angle_deg) {
        Some(preset) => println!("  Pressure α_n:   {}", preset),
        None => println!("  Pressure α_n:   {}°", input.pressure_angle_deg),
    }
    println!("  Helix β:        {}° ({})", input.helix_angle_deg, input.helix_dms());
    println!("  Shift x:        {}", p.format_coefficient(input.profile_shift));
    println!();
    println!("Diameters:");
    println!("  Pitch d:        {} mm", p.format_length(result.pitch_diameter_mm));
    println!("  Tip d_a:        {} mm", p.format_length(result.tip_diameter_mm));
    println!("  Original OD d_a0: {} mm", p.format_length(result.standard_tip_diameter_mm));
    println!("  Root d_f:       {} mm", p.format_length(result.root_diameter_mm));
    println!("  Base d_b:       {} mm", p.format_length(result.base_diameter_mm));
    println!();
    println!("Tooth depth:");
    println!("  Addendum h_a:   {} mm", p.format_length(result.addendum_mm));
    println!("  Dedendum h_f:   {} mm", p.format_length(result.dedendum_mm));
    println!("  Whole depth h:  {} mm", p.format_length(result.whole_depth_mm));
    println!();
    println!("Inspection:");
    println!("  Transverse α_t: {:.4}°", result.transverse_pressure_angle_deg);
    println!(
        "  Span teeth k:   {}{}",
        result.span_teeth,
        if result.span_teeth_recommended { " (recommended)" } else { "" }
    );
    println!("  Span W:         {} mm", p.format_length(result.base_tangent_length_mm));
    println!();
    println!("{}", RULE);
}

pub fn print_reverse(input: &ReverseInput, result: &ReverseResult, p: &DisplayPrecision) {
    header("PROFILE SHIFT (REVERSE)");
    println!();
    println!("Input:");
    if !input.label.is_empty() {
        println!("  Label:          {}", input.label);
    }
    println!("  Module m_n:     {} mm", input.module_mm);
    println!("  Teeth z:        {}", input.teeth);
    println!("  Helix β:        {}°", input.helix_angle_deg);
    println!("  Measured OD:    {} mm", p.format_length(input.measured_tip_diameter_mm));
    println!();
    println!("Result:");
    println!("  x =             {}", p.format_coefficient(result.profile_shift));
    println!("  Original OD d_a0: {} mm  (d + 2m)", p.format_length(result.standard_tip_diameter_mm));
    println!("  Deviation:      {:+.2} mm", result.tip_deviation_mm);
    println!();
    println!("{}", RULE);
    println!("  {}", result.shift_class.label());
    println!("{}", RULE);
}

pub fn print_module_estimate(estimate: &ModuleEstimate, p: &DisplayPrecision) {
    println!("Module estimate:");
    println!("  Raw m:          {} mm", p.format_coefficient(estimate.raw_module_mm));
    println!("  Standard m:     {} mm", estimate.module_mm);
    println!("  Difference:     {:+.4} mm", estimate.deviation_mm);
}

pub fn print_modules() {
    println!("Standard modules (mm):");
    for row in STANDARD_MODULES.chunks(10) {
        let line: Vec<String> = row.iter().map(|m| m.to_string()).collect();
        println!("  {}", line.join(", "));
    }
}
