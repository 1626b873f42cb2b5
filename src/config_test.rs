#![allow(clippy::float_cmp)]

use super::*;

// Environment mutation is process-global, so these tests stick to the
// derivation logic and unset-variable fallbacks.

#[test]
fn control_urls_derive_from_the_base_url() {
    let mut config = Config::from_env();
    config.base_url = "http://presenter.local:9000".to_owned();

    assert_eq!(
        config.stop_url(),
        "http://presenter.local:9000/presentaciones/detector/detener/"
    );
    assert_eq!(
        config.start_url(),
        "http://presenter.local:9000/presentaciones/detector/iniciar/"
    );
}

#[test]
fn unset_variables_fall_back_to_defaults() {
    assert_eq!(env_or("HANDDECK_TEST_UNSET_STR", "fallback"), "fallback");
    assert_eq!(env_parse("HANDDECK_TEST_UNSET_NUM", 250_u64), 250);
    assert_eq!(env_parse("HANDDECK_TEST_UNSET_FLOAT", 1.5_f64), 1.5);
}

#[test]
fn defaults_are_sane_without_any_environment() {
    let config = Config::from_env();
    assert!(config.command_url.ends_with("/presentaciones/comando_gesto/"));
    assert!(config.poll_interval <= config.camera_poll_interval);
    assert!(config.container_width > 0.0);
}
