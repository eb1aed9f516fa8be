//! Loader for workspace configuration with YAML + environment overlays.
//!
//! The schema lives in [`OnlycheckConfig`]; every field has a default so
//! the binary runs with no file at all. Precedence is environment
//! (`ONLYCHECK__`-prefixed) over file over defaults, and `${VAR}`
//! placeholders are expanded before the merged tree is materialised into
//! typed structs.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Top-level configuration for a verification run.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OnlycheckConfig {
    pub version: Option<String>,
    pub site: SiteConfig,
    pub webdriver: WebdriverConfig,
    pub timeouts: TimeoutConfig,
}

/// The page under verification.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub base_url: String,
    /// Locale forced onto the browser so the asserted strings stay English.
    pub locale: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://only.digital/".into(),
            locale: "en-US".into(),
        }
    }
}

/// How the browser session is reached and shaped.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebdriverConfig {
    /// WebDriver endpoint (chromedriver).
    pub url: String,
    pub headless: bool,
    /// Explicit window size; when absent the window starts maximized.
    pub window: Option<WindowSize>,
}

impl Default for WebdriverConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9515".into(),
            headless: false,
            window: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

/// Wait budgets, in the units each knob is conventionally quoted in.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Per-lookup floor applied by the remote end to every element query.
    pub implicit_secs: u64,
    /// Budget for each explicit wait-then-assert step.
    pub wait_secs: u64,
    /// Interval between polls inside an explicit wait.
    pub poll_millis: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            implicit_secs: 5,
            wait_secs: 20,
            poll_millis: 250,
        }
    }
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                if let Ok(expanded) = shellexpand::env(s) {
                    *s = expanded.into_owned();
                }
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hides the `config` crate wiring (YAML + env overrides).
pub struct OnlycheckConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for OnlycheckConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl OnlycheckConfigLoader {
    /// Start with sensible defaults: `ONLYCHECK__`-prefixed env overrides
    /// on top of whatever files get attached.
    ///
    /// ```
    /// use onlycheck_config::OnlycheckConfigLoader;
    ///
    /// let config = OnlycheckConfigLoader::new().load().expect("defaults load");
    /// assert_eq!(config.site.base_url, "https://only.digital/");
    /// assert_eq!(config.timeouts.wait_secs, 20);
    /// ```
    pub fn new() -> Self {
        let builder = Config::builder().add_source(
            Environment::with_prefix("ONLYCHECK")
                .separator("__")
                .try_parsing(true),
        );
        Self { builder }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers the format
    /// by suffix. A missing file is fine — every field has a default, so
    /// headless deployments can rely purely on environment variables.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    ///
    /// ```
    /// use onlycheck_config::OnlycheckConfigLoader;
    ///
    /// let config = OnlycheckConfigLoader::new()
    ///     .with_yaml_str("webdriver:\n  headless: true")
    ///     .load()
    ///     .expect("valid config");
    ///
    /// assert!(config.webdriver.headless);
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources into the
    /// typed config, expanding `${VAR}` placeholders along the way.
    pub fn load(self) -> Result<OnlycheckConfig, ConfigError> {
        let cfg = self.builder.build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: OnlycheckConfig =
            serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))?;

        Ok(typed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expands_simple_string() {
        temp_env::with_var("ONLY_TEST_HOST", Some("driver.internal"), || {
            let mut v = json!("http://${ONLY_TEST_HOST}:9515");
            expand_env_in_value(&mut v);
            assert_eq!(v, json!("http://driver.internal:9515"));
        });
    }

    #[test]
    fn expands_inside_arrays_and_objects() {
        temp_env::with_var("ONLY_TEST_LANG", Some("en-US"), || {
            let mut v = json!([{ "locale": "${ONLY_TEST_LANG}" }, 42, true, null]);
            expand_env_in_value(&mut v);
            assert_eq!(v, json!([{ "locale": "en-US" }, 42, true, null]));
        });
    }

    #[test]
    fn unknown_vars_are_left_as_is() {
        let mut v = json!("hi-${ONLY_TEST_DOES_NOT_EXIST}");
        expand_env_in_value(&mut v);
        assert_eq!(v, json!("hi-${ONLY_TEST_DOES_NOT_EXIST}"));
    }

    #[test]
    fn inline_yaml_overrides_defaults() {
        let config = OnlycheckConfigLoader::new()
            .with_yaml_str(
                r#"
site:
  base_url: "https://staging.only.digital/"
timeouts:
  wait_secs: 5
"#,
            )
            .load()
            .expect("valid config");

        assert_eq!(config.site.base_url, "https://staging.only.digital/");
        assert_eq!(config.site.locale, "en-US");
        assert_eq!(config.timeouts.wait_secs, 5);
        assert_eq!(config.timeouts.poll_millis, 250);
    }

    #[test]
    fn window_size_is_optional() {
        let config = OnlycheckConfigLoader::new()
            .with_yaml_str("webdriver:\n  window:\n    width: 1280\n    height: 800")
            .load()
            .expect("valid config");

        let window = config.webdriver.window.expect("window configured");
        assert_eq!((window.width, window.height), (1280, 800));
    }
}
