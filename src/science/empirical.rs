// SPDX-FileCopyrightText: 2026 MixForge Contributors
// SPDX-License-Identifier: MIT
//
// MixForge — Concrete Mix Proportioning Core
// EmpiricalEngine: rule-of-thumb proportioning from strength and slump

use wasm_bindgen::prelude::*;

use crate::formulas::{
    cement_content, coarse_aggregate_content, fine_aggregate_content, water_cement_ratio,
    water_demand,
};
use crate::mix::MixResult;

#[wasm_bindgen]
pub struct EmpiricalEngine;

#[wasm_bindgen]
impl EmpiricalEngine {
    /// Proportion 1 m3 of concrete from the linear regressions.
    ///
    /// Deterministic for finite inputs; the two drivers are independent
    /// (strength sets cement and coarse aggregate, slump sets water and
    /// fine aggregate), so there is no iteration or balancing step.
    pub fn compute(strength_mpa: f32, slump_mm: f32) -> MixResult {
        let cement = cement_content(strength_mpa);
        let water = water_demand(slump_mm);

        MixResult {
            cement,
            water,
            fine_aggregate: fine_aggregate_content(slump_mm),
            coarse_aggregate: coarse_aggregate_content(strength_mpa),
            water_cement_ratio: water_cement_ratio(water, cement),
        }
    }
}
