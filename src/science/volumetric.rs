// SPDX-FileCopyrightText: 2026 MixForge Contributors
// SPDX-License-Identifier: MIT
//
// MixForge — Concrete Mix Proportioning Core
// VolumetricEngine: absolute-volume proportioning

use wasm_bindgen::prelude::*;

use crate::formulas::{mass_to_volume, volume_to_mass, water_cement_ratio};
use crate::mix::{MaterialConstants, VolumetricMixResult};

/// Cement content fixed by this design revision (kg/m3). The target
/// strength collected at the boundary does not feed the arithmetic yet.
pub const CEMENT_CONTENT: f32 = 400.0;

#[wasm_bindgen]
pub struct VolumetricEngine;

#[wasm_bindgen]
impl VolumetricEngine {
    /// Proportion 1 m3 of concrete by the absolute-volume method.
    ///
    /// Cement is fixed, water follows the w/c ratio, and whatever volume
    /// remains after paste is split between fine and coarse aggregate by
    /// `fine_fraction` and its complement.
    ///
    /// # Arguments
    /// * `wc_ratio` - Water-cement ratio by mass (pre-validated 0.3-0.7)
    /// * `fine_fraction` - Fine aggregate share of aggregate volume (0.3-0.6)
    /// * `constants` - Specific gravities of the constituents
    pub fn compute(
        wc_ratio: f32,
        fine_fraction: f32,
        constants: &MaterialConstants,
    ) -> VolumetricMixResult {
        let cement = CEMENT_CONTENT;
        let water = cement * wc_ratio;

        let cement_volume = mass_to_volume(cement, constants.sg_cement);
        let water_volume = mass_to_volume(water, constants.sg_water);

        // Aggregate fills everything the paste does not.
        let aggregate_volume = 1.0 - (cement_volume + water_volume);
        let fine_volume = aggregate_volume * fine_fraction;
        let coarse_volume = aggregate_volume * (1.0 - fine_fraction);

        VolumetricMixResult {
            cement,
            water,
            fine_aggregate: volume_to_mass(fine_volume, constants.sg_fine_aggregate),
            coarse_aggregate: volume_to_mass(coarse_volume, constants.sg_coarse_aggregate),
            cement_volume,
            water_volume,
            fine_volume,
            coarse_volume,
            water_cement_ratio: water_cement_ratio(water, cement),
        }
    }
}
