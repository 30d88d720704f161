//! The shipped example config must stay loadable and match the defaults

use birdsong_common::config::TomlConfig;
use birdsong_join::services::ImageOverrides;
use birdsong_join::{ConfigOverrides, PipelineConfig};

const EXAMPLE: &str = include_str!("../../config/birdsong.example.toml");

#[test]
fn test_example_config_resolves_to_defaults() {
    let toml = TomlConfig::parse(EXAMPLE).unwrap();
    assert_eq!(toml.logging.level, "info");

    let resolved = PipelineConfig::resolve(ConfigOverrides::default(), toml).unwrap();
    let defaults = PipelineConfig::default();

    assert_eq!(resolved.multimedia_path, defaults.multimedia_path);
    assert_eq!(resolved.occurrence_path, defaults.occurrence_path);
    assert_eq!(resolved.output_path, defaults.output_path);
    assert_eq!(resolved.allowed_locations, defaults.allowed_locations);
    assert_eq!(resolved.picture_policy, defaults.picture_policy);
    assert_eq!(resolved.media_api_base_url, defaults.media_api_base_url);
    assert_eq!(resolved.lookup_timeout, defaults.lookup_timeout);
    assert_eq!(resolved.pretty, defaults.pretty);
}

#[test]
fn test_example_overrides_match_curated_table() {
    let toml = TomlConfig::parse(EXAMPLE).unwrap();
    let resolved = PipelineConfig::resolve(ConfigOverrides::default(), toml).unwrap();

    assert_eq!(resolved.image_overrides, ImageOverrides::curated());
}
