// SPDX-FileCopyrightText: 2026 MixForge Contributors
// SPDX-License-Identifier: MIT
pub mod empirical;
pub mod sustainability;
pub mod volumetric;
