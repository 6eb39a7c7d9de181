use std::sync::Once;

/// Filter applied when neither the config nor `RUST_LOG` gives one.
///
/// Shape creation, selection and default changes log at `debug` and the
/// animator's per-frame lines at `trace`, so a plain run only shows driver
/// start/stop and rejected input.
pub const DEFAULT_FILTER: &str = "info";

/// Logger setup for bounce binaries.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` directives such as `"bounce_anim=debug"` or
    /// `"info,bounce_anim::animator=trace"`. Takes precedence over `RUST_LOG`.
    pub filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Picks the directives to install: explicit config, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`]. Blank values count as unset.
fn resolve_filter(explicit: Option<&str>, from_env: Option<&str>) -> String {
    explicit
        .into_iter()
        .chain(from_env)
        .map(str::trim)
        .find(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` once; later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let from_env = std::env::var("RUST_LOG").ok();
        let filter = resolve_filter(config.filter.as_deref(), from_env.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter).write_style(config.write_style);

        // The test harness or an embedding shell may own the logger already.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized with `{filter}`");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_environment() {
        assert_eq!(
            resolve_filter(Some("bounce_anim=debug"), Some("warn")),
            "bounce_anim=debug"
        );
    }

    #[test]
    fn environment_used_when_config_is_silent() {
        assert_eq!(resolve_filter(None, Some("warn")), "warn");
        assert_eq!(resolve_filter(Some("  "), Some("warn")), "warn");
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
        assert_eq!(resolve_filter(None, Some("")), DEFAULT_FILTER);
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig {
            filter: Some("trace".into()),
            ..LoggingConfig::default()
        });
    }
}
