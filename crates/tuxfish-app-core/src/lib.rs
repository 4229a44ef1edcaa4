// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for tuxfish front ends (config, prefs).
//! Keeps the runner and any windowed adapter thin and framework-agnostic.

pub mod config;
pub mod prefs;
