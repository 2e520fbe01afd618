use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directive: String,
    pub json: bool,
}

/// `-q` wins over `-v`, and either wins over the configured level.
pub fn resolve(verbose: u8, quiet: bool, configured_level: &str, json: bool) -> LogSettings {
    let directive = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => configured_level.to_ascii_lowercase(),
            1 => "info".to_string(),
            _ => "debug".to_string(),
        }
    };
    LogSettings { directive, json }
}

/// Logs go to stderr so report output on stdout stays machine-readable.
pub fn init(settings: &LogSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.directive));
    let registry = tracing_subscriber::registry().with(filter);
    let result = if settings.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    if result.is_err() {
        eprintln!("warning: tracing subscriber already installed");
    }
}
