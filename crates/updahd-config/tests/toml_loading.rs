//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use updahd_config::{ConfigError, UpdahdConfig};

#[test]
fn loads_turso_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[turso]
url = "libsql://updahd-acme.turso.io"
auth_token = "turso-token"
local_replica_path = "./replica.db"
"#,
        )?;

        let config: UpdahdConfig = Figment::from(Serialized::defaults(UpdahdConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.turso.url, "libsql://updahd-acme.turso.io");
        assert_eq!(config.turso.auth_token, "turso-token");
        assert_eq!(config.turso.local_replica_path, "./replica.db");
        assert!(config.turso.is_configured());
        assert!(config.turso.has_local_replica());
        Ok(())
    });
}

#[test]
fn loads_clerk_and_general_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[clerk]
secret_key = "sk_test_def"
frontend_url = "https://ruling-doe-21.accounts.dev"

[general]
data_dir = "/var/lib/updahd"
default_limit = 10
"#,
        )?;

        let config: UpdahdConfig = Figment::from(Serialized::defaults(UpdahdConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.clerk.secret_key, "sk_test_def");
        assert_eq!(config.clerk.frontend_api().unwrap(), "ruling-doe-21.accounts.dev");
        assert_eq!(config.clerk.frontend_url, "https://ruling-doe-21.accounts.dev");
        assert_eq!(config.general.data_dir, "/var/lib/updahd");
        assert_eq!(config.general.default_limit, 10);
        assert_eq!(config.general.login_timeout_secs, 120);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[turso]
url = "libsql://from-toml.turso.io"
auth_token = "toml-token"
"#,
        )?;
        jail.set_env("UPDAHD_TURSO__URL", "libsql://from-env.turso.io");

        let config: UpdahdConfig = Figment::from(Serialized::defaults(UpdahdConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("UPDAHD_").split("__"))
            .extract()?;

        assert_eq!(config.turso.url, "libsql://from-env.turso.io");
        assert_eq!(config.turso.auth_token, "toml-token");
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".updahd")?;
        jail.create_file(
            ".updahd/config.toml",
            r#"
[general]
default_limit = 7
"#,
        )?;

        let config = UpdahdConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn load_rejects_zero_limit() {
    Jail::expect_with(|jail| {
        jail.set_env("UPDAHD_GENERAL__DEFAULT_LIMIT", "0");

        let result = UpdahdConfig::load();
        assert!(matches!(
            result,
            Err(ConfigError::Zero {
                field: "general.default_limit"
            })
        ));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".updahd")?;
        jail.create_file(".updahd/config.toml", "[general\ndefault_limit = ")?;

        let result = UpdahdConfig::load();
        assert!(matches!(result, Err(ConfigError::Load(_))));
        Ok(())
    });
}

#[test]
fn load_rejects_turso_url_without_token() {
    Jail::expect_with(|jail| {
        jail.set_env("UPDAHD_TURSO__URL", "libsql://updahd-acme.turso.io");

        let err = UpdahdConfig::load().unwrap_err();
        assert_eq!(
            err.to_string(),
            "turso.url is set but turso.auth_token is empty"
        );
        Ok(())
    });
}
