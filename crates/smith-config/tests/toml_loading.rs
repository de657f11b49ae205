//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use smith_config::{ConfigError, SmithConfig};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[template]
path = "templates/junit4.j2"

[output]
dir = "src/test/java"

[generation]
skip_private = true
"#,
        )?;

        let config: SmithConfig = Figment::from(Serialized::defaults(SmithConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.template.path, "templates/junit4.j2");
        assert_eq!(config.output.dir, "src/test/java");
        assert!(config.generation.skip_private);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[generation]\nskip_private = true\n")?;

        let config: SmithConfig = Figment::from(Serialized::defaults(SmithConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.generation.skip_private);
        assert_eq!(config.output.dir, ".");
        assert!(config.template.external_path().is_none());
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".testsmith")?;
        jail.create_file(".testsmith/config.toml", "[output]\ndir = \"generated\"\n")?;

        let config = SmithConfig::load().expect("config loads");
        assert_eq!(config.output.dir, "generated");
        Ok(())
    });
}

#[test]
fn empty_output_dir_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[output]\ndir = \"  \"\n")?;

        let figment = Figment::from(Serialized::defaults(SmithConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = SmithConfig::from_figment(&figment).expect_err("should reject empty dir");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "output.dir"));
        Ok(())
    });
}

#[test]
fn wrong_value_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[generation]\nskip_private = \"sometimes\"\n")?;

        let figment = Figment::from(Serialized::defaults(SmithConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = SmithConfig::from_figment(&figment).expect_err("should reject bad type");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
