//! Live end-to-end verification against <https://only.digital/>.
//!
//! Needs a chromedriver listening on `ONLYCHECK_E2E_WEBDRIVER` (default
//! `http://localhost:9515`) and network access. Gated behind
//! `ONLYCHECK_E2E=1` so ordinary `cargo test` runs stay hermetic.

use onlycheck_common::observability::{init_logging, LogConfig, LogFormat};
use onlycheck_footer::{verify_site_footer, RunOptions};

fn e2e_enabled() -> bool {
    std::env::var("ONLYCHECK_E2E").map(|v| v == "1").unwrap_or(false)
}

fn log_format() -> LogFormat {
    let json = std::env::var("ONLYCHECK_LOG_FORMAT")
        .map(|raw| raw.trim().eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json {
        LogFormat::Json
    } else {
        LogFormat::Text
    }
}

fn live_options() -> RunOptions {
    let mut options = RunOptions::default();
    options.session.headless = true;
    if let Ok(url) = std::env::var("ONLYCHECK_E2E_WEBDRIVER") {
        options.session.webdriver_url = url;
    }
    options
}

#[tokio::test(flavor = "multi_thread")]
async fn live_footer_passes_end_to_end() -> anyhow::Result<()> {
    if !e2e_enabled() {
        eprintln!("skipping live footer run: ONLYCHECK_E2E not set");
        return Ok(());
    }
    let _ = init_logging(LogConfig {
        app_name: "onlycheck-tests",
        emit_stderr: true,
        format: log_format(),
        ..LogConfig::default()
    });

    let options = live_options();
    let report = verify_site_footer(&options).await?;

    assert!(report.preloader_cleared);
    assert!(report.social_links >= 4);
    assert!(report.privacy_href.contains("pdf"));

    // Same page, fresh session: the verdict must not depend on the
    // first run having executed.
    let second = verify_site_footer(&options).await?;
    assert_eq!(second.social_links, report.social_links);
    assert_eq!(second.privacy_href, report.privacy_href);

    Ok(())
}
