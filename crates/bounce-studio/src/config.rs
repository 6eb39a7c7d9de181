use std::time::Duration;

use anyhow::{Context, Result};
use bounce_engine::coords::Size;
use bounce_engine::paint::Color;

const DELAY_VAR: &str = "BOUNCE_DELAY_MS";
const RUN_VAR: &str = "BOUNCE_RUN_MS";
const FILL_VAR: &str = "BOUNCE_FILL";
const LOG_VAR: &str = "BOUNCE_LOG";

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioConfig {
    /// Canvas extent shapes move within.
    pub margin: Size,
    /// Frame delay handed to the animator.
    pub delay: Duration,
    /// How long each animated phase of the session runs.
    pub run_for: Duration,
    /// Fill given to the selection when the session edits it.
    pub fill: Color,
    /// Log directives; `None` leaves the choice to `RUST_LOG`.
    pub log_filter: Option<String>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            margin: Size::new(500, 500),
            delay: Duration::from_millis(30),
            run_for: Duration::from_millis(600),
            fill: Color::RED,
            log_filter: None,
        }
    }
}

impl StudioConfig {
    /// Defaults overridden by `BOUNCE_DELAY_MS`, `BOUNCE_RUN_MS`,
    /// `BOUNCE_FILL` (`#rrggbb`) and `BOUNCE_LOG`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(ms) = millis(&lookup, DELAY_VAR)? {
            config.delay = ms;
        }
        if let Some(ms) = millis(&lookup, RUN_VAR)? {
            config.run_for = ms;
        }
        if let Some(raw) = lookup(FILL_VAR) {
            config.fill = raw
                .parse()
                .with_context(|| format!("{FILL_VAR}={raw:?} is not a #rrggbb color"))?;
        }
        config.log_filter = lookup(LOG_VAR);
        Ok(config)
    }
}

fn millis(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<Duration>> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let ms: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{key}={raw:?} is not a number of milliseconds"))?;
    Ok(Some(Duration::from_millis(ms)))
}
