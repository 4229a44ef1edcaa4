// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]

use tuxfish_app_core::config::{ConfigError, ConfigService, ConfigStore, MemoryConfigStore};
use tuxfish_app_core::prefs::{GamePrefs, PREFS_KEY};

#[test]
fn prefs_survive_a_save_load_cycle() {
    let svc = ConfigService::new(MemoryConfigStore::new());
    let mut prefs = GamePrefs::default();
    prefs.seed = Some(-12345);
    prefs.render.msaa = 0;
    prefs.camera.sensitivity = 0.01;
    svc.save(PREFS_KEY, &prefs).expect("save");

    let loaded: GamePrefs = svc.load(PREFS_KEY).expect("load").expect("present");
    assert_eq!(loaded, prefs);
}

#[test]
fn first_run_writes_pretty_defaults() {
    let svc = ConfigService::new(MemoryConfigStore::new());
    let prefs: GamePrefs = svc.load_or_init(PREFS_KEY).expect("init");
    assert_eq!(prefs, GamePrefs::default());

    let raw = svc.store().load_raw(PREFS_KEY).expect("raw");
    let text = String::from_utf8(raw).expect("utf8");
    assert!(text.contains("\n  \"camera\": {"), "{text}");
    assert!(text.contains("\"seed\": null"), "{text}");
}

#[test]
fn missing_key_is_none_not_error() {
    let svc = ConfigService::new(MemoryConfigStore::new());
    let loaded: Option<GamePrefs> = svc.load("absent").expect("load");
    assert!(loaded.is_none());
    assert!(matches!(
        svc.store().load_raw("absent"),
        Err(ConfigError::NotFound)
    ));
}
