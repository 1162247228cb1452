// SPDX-FileCopyrightText: 2026 MixForge Contributors
// SPDX-License-Identifier: MIT
//
// MixForge — Concrete Mix Proportioning Core
// Compute profile for an external presentation layer
//

pub mod design_kernel;
pub mod formulas;
pub mod mix;
pub mod science;

#[cfg(test)]
pub mod tests_design;

// Re-export core types
pub use design_kernel::{DesignKernel, ValidationEvent};
pub use mix::{
    EmpiricalInputs, MaterialConstants, MixResult, OptimizedMixResult, SubstitutionPlan,
    VolumetricInputs, VolumetricMixResult,
};
pub use science::empirical::EmpiricalEngine;
pub use science::sustainability::SustainabilityEngine;
pub use science::volumetric::VolumetricEngine;
