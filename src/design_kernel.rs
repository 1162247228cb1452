// SPDX-FileCopyrightText: 2026 MixForge Contributors
// SPDX-License-Identifier: MIT
//
// MixForge — Concrete Mix Proportioning Core
// DesignKernel: unified JSON orchestration boundary
//
// This module centralizes input handling for the presentation layer.
// The host UI should call ONLY this module, not individual engines.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::mix::{
    EmpiricalInputs, MaterialConstants, MixResult, OptimizedMixResult, SubstitutionPlan,
    VolumetricInputs, VolumetricMixResult,
};
use crate::science::empirical::EmpiricalEngine;
use crate::science::sustainability::SustainabilityEngine;
use crate::science::volumetric::VolumetricEngine;

// Selectable ranges of the host form widgets. Values outside are clamped
// here so the pure engines always see pre-validated inputs.
const WC_RATIO_RANGE: (f32, f32) = (0.3, 0.7);
const FINE_FRACTION_RANGE: (f32, f32) = (0.3, 0.6);
const STRENGTH_RANGE: (f32, f32) = (20.0, 60.0);
const SLUMP_RANGE: (f32, f32) = (25.0, 150.0);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub topic: String,
    pub message: String,
    pub severity: String, // 'INFO', 'WARNING', 'CRITICAL'
}

#[derive(Serialize, Deserialize)]
pub struct VolumetricResponse {
    pub result: VolumetricMixResult,
    pub events: Vec<ValidationEvent>,
    pub compute_time_ms: f32,
}

#[derive(Serialize, Deserialize)]
pub struct EmpiricalResponse {
    pub result: MixResult,
    pub events: Vec<ValidationEvent>,
    pub compute_time_ms: f32,
}

/// The optimizer always reports the base mix it reallocated, so the host
/// renders both tables from one response.
#[derive(Serialize, Deserialize)]
pub struct SustainableResponse {
    pub base: MixResult,
    pub optimized: OptimizedMixResult,
    pub events: Vec<ValidationEvent>,
    pub compute_time_ms: f32,
}

/// Optimizer request: empirical inputs plus an optional RNG seed so hosts
/// can replay a quoted design.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    #[serde(flatten)]
    pub inputs: EmpiricalInputs,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Selectable input ranges of the host form widgets.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SelectableRanges {
    water_cement_ratio: (f32, f32),
    fine_aggregate_fraction: (f32, f32),
    strength_mpa: (f32, f32),
    slump_mm: (f32, f32),
}

/// Default configuration handed to the host on startup.
#[derive(Serialize)]
struct KernelDefaults {
    constants: MaterialConstants,
    plan: SubstitutionPlan,
    ranges: SelectableRanges,
}

#[wasm_bindgen]
pub struct DesignKernel;

#[wasm_bindgen]
impl DesignKernel {
    /// Absolute-volume proportioning from JSON inputs.
    ///
    /// # Example
    /// ```json
    /// {"strengthMpa": 30, "waterCementRatio": 0.5, "fineAggregateFraction": 0.4}
    /// ```
    ///
    /// Returns `{ result, events, compute_time_ms }`, or a JSON error
    /// object if the input cannot be parsed.
    #[wasm_bindgen]
    pub fn compute_volumetric(inputs_json: &str) -> String {
        let start = instant::Instant::now();

        let inputs: VolumetricInputs = match serde_json::from_str(inputs_json) {
            Ok(i) => i,
            Err(e) => return error_json(&format!("Failed to parse inputs: {}", e)),
        };
        if let Err(msg) = ensure_finite(&[
            ("strengthMpa", inputs.strength_mpa),
            ("waterCementRatio", inputs.water_cement_ratio),
            ("fineAggregateFraction", inputs.fine_aggregate_fraction),
        ]) {
            return error_json(&msg);
        }

        let mut events = Vec::new();
        let wc = clamp_to_range(
            inputs.water_cement_ratio,
            WC_RATIO_RANGE,
            "waterCementRatio",
            &mut events,
        );
        let fine = clamp_to_range(
            inputs.fine_aggregate_fraction,
            FINE_FRACTION_RANGE,
            "fineAggregateFraction",
            &mut events,
        );

        let result = VolumetricEngine::compute(wc, fine, &MaterialConstants::default());

        serde_json::to_string(&VolumetricResponse {
            result,
            events,
            compute_time_ms: start.elapsed().as_secs_f32() * 1000.0,
        })
        .unwrap_or_default()
    }

    /// Empirical proportioning from JSON inputs.
    ///
    /// # Example
    /// ```json
    /// {"strengthMpa": 30, "slumpMm": 75}
    /// ```
    #[wasm_bindgen]
    pub fn compute_empirical(inputs_json: &str) -> String {
        let start = instant::Instant::now();

        let inputs: EmpiricalInputs = match serde_json::from_str(inputs_json) {
            Ok(i) => i,
            Err(e) => return error_json(&format!("Failed to parse inputs: {}", e)),
        };
        if let Err(msg) = ensure_finite(&[
            ("strengthMpa", inputs.strength_mpa),
            ("slumpMm", inputs.slump_mm),
        ]) {
            return error_json(&msg);
        }

        let mut events = Vec::new();
        let (strength, slump) = clamp_empirical(&inputs, &mut events);
        let result = EmpiricalEngine::compute(strength, slump);

        serde_json::to_string(&EmpiricalResponse {
            result,
            events,
            compute_time_ms: start.elapsed().as_secs_f32() * 1000.0,
        })
        .unwrap_or_default()
    }

    /// Sustainable reallocation of the empirical mix for the given targets.
    ///
    /// # Example
    /// ```json
    /// {"strengthMpa": 30, "slumpMm": 75, "seed": 42}
    /// ```
    ///
    /// Without `seed` the property estimates are drawn from an
    /// entropy-seeded generator; with it the response is reproducible.
    #[wasm_bindgen]
    pub fn optimize_sustainable(inputs_json: &str) -> String {
        let start = instant::Instant::now();

        let request: OptimizeRequest = match serde_json::from_str(inputs_json) {
            Ok(r) => r,
            Err(e) => return error_json(&format!("Failed to parse inputs: {}", e)),
        };
        if let Err(msg) = ensure_finite(&[
            ("strengthMpa", request.inputs.strength_mpa),
            ("slumpMm", request.inputs.slump_mm),
        ]) {
            return error_json(&msg);
        }

        let mut events = Vec::new();
        let (strength, slump) = clamp_empirical(&request.inputs, &mut events);

        let base = EmpiricalEngine::compute(strength, slump);
        let mut rng = match request.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let optimized = SustainabilityEngine::optimize(
            &base,
            strength,
            slump,
            &SubstitutionPlan::default(),
            &mut rng,
        );

        serde_json::to_string(&SustainableResponse {
            base,
            optimized,
            events,
            compute_time_ms: start.elapsed().as_secs_f32() * 1000.0,
        })
        .unwrap_or_default()
    }

    /// Default constants, substitution plan, and widget ranges as a JS
    /// value, so the host can seed its form widgets without duplicating
    /// the numbers.
    pub fn defaults() -> Result<JsValue, JsValue> {
        let defaults = KernelDefaults {
            constants: MaterialConstants::default(),
            plan: SubstitutionPlan::default(),
            ranges: SelectableRanges {
                water_cement_ratio: WC_RATIO_RANGE,
                fine_aggregate_fraction: FINE_FRACTION_RANGE,
                strength_mpa: STRENGTH_RANGE,
                slump_mm: SLUMP_RANGE,
            },
        };
        Ok(serde_wasm_bindgen::to_value(&defaults)?)
    }
}

fn clamp_empirical(inputs: &EmpiricalInputs, events: &mut Vec<ValidationEvent>) -> (f32, f32) {
    let strength = clamp_to_range(inputs.strength_mpa, STRENGTH_RANGE, "strengthMpa", events);
    let slump = clamp_to_range(inputs.slump_mm, SLUMP_RANGE, "slumpMm", events);
    (strength, slump)
}

fn clamp_to_range(
    value: f32,
    (lo, hi): (f32, f32),
    field: &str,
    events: &mut Vec<ValidationEvent>,
) -> f32 {
    if value < lo || value > hi {
        events.push(ValidationEvent {
            topic: "DESIGN.RANGE".to_string(),
            message: format!(
                "{}: {:.2} outside selectable range {:.2}-{:.2}, clamped",
                field, value, lo, hi
            ),
            severity: "WARNING".to_string(),
        });
        value.clamp(lo, hi)
    } else {
        value
    }
}

fn ensure_finite(fields: &[(&str, f32)]) -> Result<(), String> {
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(format!("{} must be a finite number", name));
        }
    }
    Ok(())
}

fn error_json(message: &str) -> String {
    serde_json::to_string(&serde_json::json!({ "error": message })).unwrap_or_default()
}
