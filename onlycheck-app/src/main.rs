//! `onlycheck` — end-to-end verification of the only.digital footer.
//!
//! Exit codes: 0 when every check passes, 1 when a footer check fails,
//! 2 for infrastructure problems (configuration, WebDriver endpoint).

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use onlycheck_common::observability::{init_logging, LogConfig};
use onlycheck_common::OnlycheckError;
use onlycheck_config::{OnlycheckConfig, OnlycheckConfigLoader};
use onlycheck_drivers::onlycheck_browser::{SessionConfig, WaitSpec};
use onlycheck_footer::{verify_site_footer, RunOptions};
use tracing::error;
use url::Url;

#[derive(Debug, Parser)]
#[command(
    name = "onlycheck",
    about = "Verify the only.digital footer: copyright, social links, privacy policy"
)]
struct Cli {
    /// Configuration file (YAML); a missing file falls back to defaults.
    #[arg(long, default_value = "onlycheck.yaml")]
    config: PathBuf,

    /// Page to verify, overriding the configuration.
    #[arg(long)]
    base_url: Option<String>,

    /// WebDriver endpoint, overriding the configuration.
    #[arg(long)]
    webdriver_url: Option<String>,

    /// Run the browser headless.
    #[arg(long)]
    headless: bool,

    /// Emit the report as JSON instead of a summary line.
    #[arg(long)]
    json: bool,

    /// Duplicate log events to stderr.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "verification run failed");
            eprintln!("FAIL: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> onlycheck_common::Result<()> {
    let config = OnlycheckConfigLoader::new()
        .with_file(&cli.config)
        .load()
        .map_err(|e| OnlycheckError::Config(e.to_string()))?;

    init_logging(LogConfig {
        emit_stderr: cli.verbose,
        ..LogConfig::default()
    })
    .map_err(OnlycheckError::Driver)?;

    let options = build_options(&cli, &config)?;
    let report = verify_site_footer(&options).await?;

    if cli.json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| OnlycheckError::Driver(anyhow::Error::new(e)))?;
        println!("{rendered}");
    } else {
        println!(
            "PASS: footer verified ({} social links, privacy policy at {})",
            report.social_links, report.privacy_href
        );
    }
    Ok(())
}

fn build_options(cli: &Cli, config: &OnlycheckConfig) -> onlycheck_common::Result<RunOptions> {
    let raw_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.site.base_url.clone());
    let base_url = Url::parse(&raw_url)
        .map_err(|e| OnlycheckError::Config(format!("invalid base url {raw_url:?}: {e}")))?;

    let session = SessionConfig {
        webdriver_url: cli
            .webdriver_url
            .clone()
            .unwrap_or_else(|| config.webdriver.url.clone()),
        headless: cli.headless || config.webdriver.headless,
        locale: config.site.locale.clone(),
        window: config.webdriver.window.map(|w| (w.width, w.height)),
        implicit_wait: Duration::from_secs(config.timeouts.implicit_secs),
    };

    let wait = WaitSpec {
        timeout: Duration::from_secs(config.timeouts.wait_secs),
        interval: Duration::from_millis(config.timeouts.poll_millis),
    };

    Ok(RunOptions {
        base_url,
        session,
        wait,
    })
}
