// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Loading saved preferences and turning them into a game configuration.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::{debug, info};
use tuxfish_app_core::config::ConfigService;
use tuxfish_app_core::prefs::{GamePrefs, PREFS_KEY};
use tuxfish_config_fs::FsConfigStore;
use tuxfish_math::DEFAULT_SEED;
use tuxfish_sim::{GameConfig, Lens};

/// Loads (and on first use writes) the saved preferences.
pub fn load(config_dir: Option<&Path>) -> Result<GamePrefs> {
    let store = match config_dir {
        Some(dir) => FsConfigStore::with_base(dir),
        None => FsConfigStore::new(),
    }
    .context("open preferences directory")?;
    debug!(dir = %store.base().display(), "loading preferences");
    let service = ConfigService::new(store);
    let prefs: GamePrefs = service
        .load_or_init(PREFS_KEY)
        .context("load saved preferences")?;
    prefs.validate().context("saved preferences are invalid")?;
    Ok(prefs)
}

/// Seed from the wall clock, never zero.
fn clock_seed() -> i32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.subsec_nanos());
    i32::try_from(nanos).unwrap_or(DEFAULT_SEED) | 1
}

/// Game configuration for `prefs`, with `seed` taking precedence over the
/// saved one.
pub fn game_config(prefs: &GamePrefs, seed: Option<i32>) -> GameConfig {
    let seed = seed.or(prefs.seed).unwrap_or_else(|| {
        let seed = clock_seed();
        info!(seed, "seeded from the clock");
        seed
    });
    GameConfig {
        seed,
        sensitivity: prefs.camera.sensitivity,
        lens: Lens {
            fov_y_degrees: prefs.camera.fov_y_degrees,
            near: prefs.camera.near,
            far: prefs.camera.far,
        },
        width: prefs.render.width,
        height: prefs.render.height,
        ..GameConfig::default()
    }
}
