// SPDX-FileCopyrightText: 2026 MixForge Contributors
// SPDX-License-Identifier: MIT
//
// MixForge — Concrete Mix Proportioning Core
// Mix data model: inputs, constants, substitution plan, results

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::formulas::round1;

/// Incoming request for the volumetric calculator (JSON from the host UI).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumetricInputs {
    /// Target compressive strength (MPa). Collected by the form but not
    /// consumed by the fixed-cement volumetric arithmetic.
    pub strength_mpa: f32,
    pub water_cement_ratio: f32, // selectable 0.3 - 0.7
    pub fine_aggregate_fraction: f32, // selectable 0.3 - 0.6
}

/// Incoming request for the empirical calculator and the optimizer.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpiricalInputs {
    pub strength_mpa: f32, // selectable 20 - 60 MPa
    pub slump_mm: f32,     // selectable 25 - 150 mm
}

/// Specific gravities of the constituent materials.
///
/// Injected into the engines rather than read as module globals, so a host
/// can override a gravity without forking the arithmetic.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialConstants {
    pub sg_cement: f32,
    pub sg_fine_aggregate: f32,
    pub sg_coarse_aggregate: f32,
    pub sg_water: f32,
}

impl Default for MaterialConstants {
    fn default() -> Self {
        Self {
            sg_cement: 3.15,
            sg_fine_aggregate: 2.65,
            sg_coarse_aggregate: 2.70,
            sg_water: 1.00,
        }
    }
}

/// Substitution ratios and fixed reduction estimates for the sustainable
/// reallocation. Defaults: 30% SCM for cement, 20%/15% recycled
/// coarse/fine aggregate, 2% extra water for workability.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionPlan {
    pub scm_fraction: f32,
    pub recycled_coarse_fraction: f32,
    pub recycled_fine_fraction: f32,
    pub water_uplift: f32,
    /// Upper bound of the uniform strength-loss draw (MPa).
    pub strength_loss_max_mpa: f32,
    /// Half-width of the uniform slump scatter draw (mm).
    pub slump_scatter_mm: f32,
    pub co2_reduction_pct: f32,
    pub cost_reduction_pct: f32,
}

impl Default for SubstitutionPlan {
    fn default() -> Self {
        Self {
            scm_fraction: 0.30,
            recycled_coarse_fraction: 0.20,
            recycled_fine_fraction: 0.15,
            water_uplift: 1.02,
            strength_loss_max_mpa: 2.0,
            slump_scatter_mm: 10.0,
            co2_reduction_pct: 25.0,
            cost_reduction_pct: 15.0,
        }
    }
}

/// Per-cubic-meter quantities from the absolute-volume calculator.
/// Component volumes are reported so a host can verify closure to 1 m3.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumetricMixResult {
    pub cement: f32,           // kg/m3
    pub water: f32,            // kg/m3
    pub fine_aggregate: f32,   // kg/m3
    pub coarse_aggregate: f32, // kg/m3
    pub cement_volume: f32,    // m3
    pub water_volume: f32,     // m3
    pub fine_volume: f32,      // m3
    pub coarse_volume: f32,    // m3
    pub water_cement_ratio: f32,
}

/// Per-cubic-meter quantities from the empirical calculator.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixResult {
    pub cement: f32,           // kg/m3
    pub water: f32,            // kg/m3
    pub fine_aggregate: f32,   // kg/m3
    pub coarse_aggregate: f32, // kg/m3
    pub water_cement_ratio: f32,
}

/// Sustainable reallocation of a base empirical mix.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedMixResult {
    pub cement: f32,                   // kg/m3, retained portion
    pub scm: f32,                      // kg/m3, cement substitute
    pub water: f32,                    // kg/m3, workability-adjusted
    pub fine_aggregate: f32,           // kg/m3, natural
    pub fine_recycled_aggregate: f32,  // kg/m3
    pub coarse_aggregate: f32,         // kg/m3, natural
    pub coarse_recycled_aggregate: f32, // kg/m3
    /// Water over combined binder (cement + SCM).
    pub water_cement_ratio: f32,
    pub estimated_strength_mpa: f32,
    pub estimated_slump_mm: f32,
    pub co2_reduction_pct: f32,
    pub cost_reduction_pct: f32,
}

impl VolumetricMixResult {
    pub fn rows(&self) -> Vec<(&'static str, f32)> {
        vec![
            ("Cement (kg)", self.cement),
            ("Water (kg)", self.water),
            ("Fine Aggregate (kg)", self.fine_aggregate),
            ("Coarse Aggregate (kg)", self.coarse_aggregate),
            ("w/c ratio", self.water_cement_ratio),
        ]
    }

    /// One-decimal view for tabular display.
    pub fn rounded(&self) -> Self {
        Self {
            cement: round1(self.cement),
            water: round1(self.water),
            fine_aggregate: round1(self.fine_aggregate),
            coarse_aggregate: round1(self.coarse_aggregate),
            ..*self
        }
    }
}

impl MixResult {
    pub fn rows(&self) -> Vec<(&'static str, f32)> {
        vec![
            ("Cement (kg)", self.cement),
            ("Water (kg)", self.water),
            ("Fine Aggregate (kg)", self.fine_aggregate),
            ("Coarse Aggregate (kg)", self.coarse_aggregate),
            ("w/c ratio", self.water_cement_ratio),
        ]
    }

    pub fn rounded(&self) -> Self {
        Self {
            cement: round1(self.cement),
            water: round1(self.water),
            fine_aggregate: round1(self.fine_aggregate),
            coarse_aggregate: round1(self.coarse_aggregate),
            ..*self
        }
    }
}

impl OptimizedMixResult {
    pub fn rows(&self) -> Vec<(&'static str, f32)> {
        vec![
            ("Cement (kg)", self.cement),
            ("SCMs (kg)", self.scm),
            ("Water (kg)", self.water),
            ("Fine Aggregate (kg)", self.fine_aggregate),
            ("Fine Recycled Agg. (kg)", self.fine_recycled_aggregate),
            ("Coarse Aggregate (kg)", self.coarse_aggregate),
            ("Coarse Recycled Agg. (kg)", self.coarse_recycled_aggregate),
            ("w/c ratio", self.water_cement_ratio),
            ("New Strength (MPa)", self.estimated_strength_mpa),
            ("New Slump (mm)", self.estimated_slump_mm),
            ("CO2 Reduction (%)", self.co2_reduction_pct),
            ("Cost Reduction (%)", self.cost_reduction_pct),
        ]
    }

    pub fn rounded(&self) -> Self {
        Self {
            cement: round1(self.cement),
            scm: round1(self.scm),
            water: round1(self.water),
            fine_aggregate: round1(self.fine_aggregate),
            fine_recycled_aggregate: round1(self.fine_recycled_aggregate),
            coarse_aggregate: round1(self.coarse_aggregate),
            coarse_recycled_aggregate: round1(self.coarse_recycled_aggregate),
            estimated_strength_mpa: round1(self.estimated_strength_mpa),
            estimated_slump_mm: round1(self.estimated_slump_mm),
            ..*self
        }
    }
}
