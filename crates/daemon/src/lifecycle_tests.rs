// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use wb_core::CarrierEndpoint;

#[test]
fn resolve_builds_paths_under_the_data_dir() {
    let config = Config::resolve(Some(PathBuf::from("/tmp/wbtest"))).unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/tmp/wbtest"));
    assert_eq!(config.config_path, PathBuf::from("/tmp/wbtest/wb.toml"));
    assert_eq!(config.lock_path, PathBuf::from("/tmp/wbtest/wbd.lock"));
    assert_eq!(config.log_path, PathBuf::from("/tmp/wbtest/wbd.log"));
}

#[test]
fn startup_acquires_an_exclusive_lock() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::resolve(Some(dir.path().to_path_buf())).unwrap();
    let app = AppConfig::default();

    let first = startup(&config, &app).unwrap();
    let second = startup(&config, &app);
    assert!(matches!(second, Err(LifecycleError::AlreadyRunning(_))));

    drop(first);
    assert!(startup(&config, &app).is_ok());
}

#[test]
fn startup_builds_registry_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::resolve(Some(dir.path().to_path_buf())).unwrap();
    let app = AppConfig {
        carriers: vec![CarrierEndpoint {
            name: "colissimo".into(),
            base_url: "https://api.example.test/colissimo".into(),
            token: None,
        }],
        ..AppConfig::default()
    };

    // Startup succeeds with carriers configured; resolution is covered
    // by the engine registry tests
    assert!(startup(&config, &app).is_ok());
}
