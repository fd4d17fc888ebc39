use figment::Jail;
use prac_config::PracConfig;

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("PRACTRACK_GENERAL__NEAR_COMPLETION_THRESHOLD", "80");
        jail.set_env("PRACTRACK_STORE__PATH", "/var/lib/practrack/hours.db");

        let config = PracConfig::load(Some(jail.directory())).expect("config loads");
        assert!((config.general.near_completion_threshold - 80.0).abs() < f64::EPSILON);
        assert_eq!(config.store.path, "/var/lib/practrack/hours.db");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".practrack")).expect("dir should create");
        jail.create_file(
            ".practrack/config.toml",
            r#"
[general]
default_limit = 10
"#,
        )?;
        jail.set_env("PRACTRACK_GENERAL__DEFAULT_LIMIT", "25");

        let config = PracConfig::load(Some(jail.directory())).expect("config loads");
        assert_eq!(config.general.default_limit, 25);
        Ok(())
    });
}

#[test]
fn unrelated_prefixed_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("PRACTRACK_LOG", "debug");

        let config = PracConfig::load(Some(jail.directory())).expect("config loads");
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}
