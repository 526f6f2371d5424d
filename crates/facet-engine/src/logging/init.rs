use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "facet_engine=debug,facet_studio=info"). When unset, `RUST_LOG` is
/// consulted, then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn with_default_level(mut self, level: log::LevelFilter) -> Self {
        self.default_level = level;
        self
    }

    /// Filter string actually applied, given the current `RUST_LOG` value.
    fn resolve_filter(&self, rust_log: Option<String>) -> Filter {
        match (&self.env_filter, rust_log) {
            (Some(filter), _) => Filter::Directives(filter.clone()),
            (None, Some(env)) => Filter::Directives(env),
            (None, None) => Filter::Level(self.default_level),
        }
    }
}

#[derive(Debug, PartialEq)]
enum Filter {
    Directives(String),
    Level(log::LevelFilter),
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.resolve_filter(std::env::var("RUST_LOG").ok()) {
            Filter::Directives(filter) => {
                builder.parse_filters(&filter);
            }
            Filter::Level(level) => {
                builder.filter_level(level);
            }
        }

        builder.write_style(config.write_style);

        // A second logger may already be installed by a test harness.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}
