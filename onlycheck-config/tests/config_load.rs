use onlycheck_config::OnlycheckConfigLoader;
use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

#[test]
#[serial]
fn loads_a_file_and_expands_env_placeholders() {
    let tmp = TempDir::new().unwrap();

    let file_yaml = r#"
version: "1"
site:
  base_url: "https://only.digital/"
webdriver:
  url: "${ONLYCHECK_TEST_DRIVER}"
  headless: true
timeouts:
  implicit_secs: 3
"#;
    let p = write_yaml(&tmp, "onlycheck.yaml", file_yaml);

    temp_env::with_var(
        "ONLYCHECK_TEST_DRIVER",
        Some("http://driver.ci:4444"),
        || {
            let config = OnlycheckConfigLoader::new()
                .with_file(&p)
                .load()
                .expect("load config");

            assert_eq!(config.version.as_deref(), Some("1"));
            assert_eq!(config.webdriver.url, "http://driver.ci:4444");
            assert!(config.webdriver.headless);
            assert_eq!(config.timeouts.implicit_secs, 3);
            // Untouched sections keep their defaults.
            assert_eq!(config.timeouts.wait_secs, 20);
        },
    );
}

#[test]
#[serial]
fn environment_wins_over_the_file() {
    let tmp = TempDir::new().unwrap();
    let p = write_yaml(&tmp, "onlycheck.yaml", "webdriver:\n  headless: false\n");

    temp_env::with_var("ONLYCHECK__WEBDRIVER__HEADLESS", Some("true"), || {
        let config = OnlycheckConfigLoader::new()
            .with_file(&p)
            .load()
            .expect("load config");

        assert!(config.webdriver.headless);
    });
}

#[test]
#[serial]
fn a_missing_file_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();

    let config = OnlycheckConfigLoader::new()
        .with_file(tmp.path().join("nope.yaml"))
        .load()
        .expect("defaults load");

    assert_eq!(config.site.base_url, "https://only.digital/");
    assert_eq!(config.webdriver.url, "http://localhost:9515");
    assert!(!config.webdriver.headless);
    assert!(config.webdriver.window.is_none());
}
