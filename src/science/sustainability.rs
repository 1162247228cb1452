// SPDX-FileCopyrightText: 2026 MixForge Contributors
// SPDX-License-Identifier: MIT
//
// MixForge — Concrete Mix Proportioning Core
// SustainabilityEngine: SCM and recycled-aggregate reallocation

use rand::Rng;
use wasm_bindgen::prelude::*;

use crate::formulas::water_cement_ratio;
use crate::mix::{MixResult, OptimizedMixResult, SubstitutionPlan};

#[wasm_bindgen]
pub struct SustainabilityEngine;

/// Pure Rust implementation (non-wasm-bindgen): the RNG is a generic
/// parameter so callers own seeding. The boundary wraps this with a
/// seedable source; tests pass a fixed-seed `StdRng`.
impl SustainabilityEngine {
    /// Reallocate a base mix toward lower-impact materials.
    ///
    /// The mass splits are deterministic: part of the cement becomes SCM,
    /// part of each aggregate becomes recycled aggregate, and water rises
    /// slightly to keep the leaner binder workable. Only the two estimated
    /// fresh/hardened properties are drawn from `rng`, modelling batch
    /// variability of substituted mixes.
    pub fn optimize(
        base: &MixResult,
        strength_mpa: f32,
        slump_mm: f32,
        plan: &SubstitutionPlan,
        rng: &mut impl Rng,
    ) -> OptimizedMixResult {
        let cement = base.cement * (1.0 - plan.scm_fraction);
        let scm = base.cement * plan.scm_fraction;

        let coarse_natural = base.coarse_aggregate * (1.0 - plan.recycled_coarse_fraction);
        let coarse_recycled = base.coarse_aggregate * plan.recycled_coarse_fraction;

        let fine_natural = base.fine_aggregate * (1.0 - plan.recycled_fine_fraction);
        let fine_recycled = base.fine_aggregate * plan.recycled_fine_fraction;

        let water = base.water * plan.water_uplift;

        let strength_loss = if plan.strength_loss_max_mpa > 0.0 {
            rng.gen_range(0.0..plan.strength_loss_max_mpa)
        } else {
            0.0
        };
        let slump_shift = if plan.slump_scatter_mm > 0.0 {
            rng.gen_range(-plan.slump_scatter_mm..plan.slump_scatter_mm)
        } else {
            0.0
        };

        OptimizedMixResult {
            cement,
            scm,
            water,
            fine_aggregate: fine_natural,
            fine_recycled_aggregate: fine_recycled,
            coarse_aggregate: coarse_natural,
            coarse_recycled_aggregate: coarse_recycled,
            // SCM counts toward the binder, so the ratio uses cement + SCM.
            water_cement_ratio: water_cement_ratio(water, cement + scm),
            estimated_strength_mpa: strength_mpa - strength_loss,
            estimated_slump_mm: slump_mm + slump_shift,
            co2_reduction_pct: plan.co2_reduction_pct,
            cost_reduction_pct: plan.cost_reduction_pct,
        }
    }
}
