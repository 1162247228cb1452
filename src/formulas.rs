// SPDX-FileCopyrightText: 2026 MixForge Contributors
// SPDX-License-Identifier: MIT
//! Scalar formulas for concrete mix proportioning
//!
//! Pure mathematical functions operating on scalar values. They form the
//! foundation of both calculators; the engines compose them, the boundary
//! never calls them directly.
//!
//! The regressions are empirical rules of thumb (kg per m3 of concrete),
//! not physically derived, and are deliberately independent of the
//! absolute-volume conversions below. The two proportioning routes are
//! not reconciled with each other.

use wasm_bindgen::prelude::*;

// ============================================================================
// EMPIRICAL REGRESSIONS
// ============================================================================

/// Cement demand from target strength.
///
/// cement = 350 + (f_c - 20) * 5
///
/// # Arguments
/// * `strength_mpa` - Target 28-day compressive strength (20-60 MPa)
///
/// # Returns
/// Cement content in kg/m3
#[wasm_bindgen]
pub fn cement_content(strength_mpa: f32) -> f32 {
    350.0 + (strength_mpa - 20.0) * 5.0
}

/// Water demand from target slump.
///
/// water = 180 + (slump / 150) * 20
#[wasm_bindgen]
pub fn water_demand(slump_mm: f32) -> f32 {
    180.0 + (slump_mm / 150.0) * 20.0
}

/// Fine aggregate content from target slump. Wetter mixes carry less sand.
///
/// fine = 700 - (slump / 150) * 50
#[wasm_bindgen]
pub fn fine_aggregate_content(slump_mm: f32) -> f32 {
    700.0 - (slump_mm / 150.0) * 50.0
}

/// Coarse aggregate content from target strength. Stronger mixes trade
/// coarse aggregate for paste.
///
/// coarse = 1100 - (f_c - 20) * 10
#[wasm_bindgen]
pub fn coarse_aggregate_content(strength_mpa: f32) -> f32 {
    1100.0 - (strength_mpa - 20.0) * 10.0
}

/// Water-cement ratio by mass. The denominator is the full binder, so
/// callers blending SCM into the cement pass the combined mass.
#[wasm_bindgen]
pub fn water_cement_ratio(water: f32, binder: f32) -> f32 {
    if binder <= 0.0 {
        return f32::INFINITY;
    }
    water / binder
}

// ============================================================================
// ABSOLUTE-VOLUME CONVERSIONS
// ============================================================================

/// Mass (kg) to absolute volume (m3) via specific gravity.
///
/// Density = SG * 1000 kg/m3, so volume = mass / (SG * 1000).
#[wasm_bindgen]
pub fn mass_to_volume(mass_kg: f32, sg: f32) -> f32 {
    if sg <= 0.0 {
        return 0.0;
    }
    mass_kg / (sg * 1000.0)
}

/// Absolute volume (m3) back to mass (kg) via specific gravity.
#[wasm_bindgen]
pub fn volume_to_mass(volume_m3: f32, sg: f32) -> f32 {
    volume_m3 * sg * 1000.0
}

// ============================================================================
// DISPLAY
// ============================================================================

/// Round to one decimal, the precision of the host result tables.
#[wasm_bindgen]
pub fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

// ============================================================================
// TESTS
// ============================================================================
