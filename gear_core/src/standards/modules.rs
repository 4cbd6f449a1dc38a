//! Standard Module Series
//!
//! The ISO 54 / JIS B 1701-2 module values (series 1 and 2 plus the common
//! intermediates) used to populate module pickers and to snap an estimated
//! module to something a cutter actually exists for.
//!
//! Any positive module is still accepted by the engines; the catalog only
//! matters for selection lists and [`nearest_module`].

/// Standard modules in millimeters, ascending.
pub const STANDARD_MODULES: [f64; 49] = [
    0.2, 0.25, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9,
    1.0, 1.25, 1.5, 1.75, 2.0, 2.25, 2.5, 2.75, 3.0, 3.25, 3.5, 3.75, 4.0, 4.5, 5.0, 5.5, 6.0, 6.5, 7.0, 8.0, 9.0,
    10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 18.0, 20.0, 22.0, 24.0, 25.0, 28.0, 30.0, 32.0, 36.0, 40.0, 45.0, 50.0,
];

/// Catalog entry closest to `module_mm`.
///
/// Linear scan keeping the first strictly closer entry, so a value exactly
/// halfway between two entries resolves to the smaller one. A NaN input
/// never compares closer and yields the first entry.
///
/// # Example
/// ```rust
/// use gear_core::standards::modules::nearest_module;
///
/// assert_eq!(nearest_module(2.1), 2.0);
/// assert_eq!(nearest_module(1.125), 1.0); // tie between 1 and 1.25
/// ```
pub fn nearest_module(module_mm: f64) -> f64 {
    STANDARD_MODULES
        .iter()
        .copied()
        .reduce(|best, candidate| {
            if (candidate - module_mm).abs() < (best - module_mm).abs() {
                candidate
            } else {
                best
            }
        })
        .unwrap_or(STANDARD_MODULES[0])
}

/// True when `module_mm` is exactly a catalog value.
pub fn is_standard_module(module_mm: f64) -> bool {
    STANDARD_MODULES.contains(&module_mm)
}
