//! Logging utilities

use crate::config::get_env_or;
use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static INIT: OnceCell<()> = OnceCell::new();

static REDACTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"([?&]key=)[^&\s]+", "${1}REDACTED"),
        (r"AIza[0-9A-Za-z_\-]{20,}", "AIza-REDACTED"),
        (
            r"(?i)api[_-]?key\s*[:=]?\s*[A-Za-z0-9\-_]{12,}",
            "api_key=REDACTED",
        ),
    ]
    .into_iter()
    .filter_map(|(pattern, rep)| Regex::new(pattern).ok().map(|re| (re, rep)))
    .collect()
});

/// Initialize the global logging system
///
/// `RUST_LOG` wins when set, otherwise `ATELIER_LOG_LEVEL` (default `info`).
/// Safe to call more than once; only the first call installs the subscriber.
pub fn init_logging() {
    INIT.get_or_init(|| {
        let level = get_env_or("ATELIER_LOG_LEVEL", "info");
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();
    });
}

/// Strip credentials from a message before it is logged or returned
pub fn scrub_message(mut s: String) -> String {
    if s.len() > 2000 {
        s = s.chars().take(2000).collect();
    }
    for (re, rep) in REDACTIONS.iter() {
        s = re.replace_all(&s, *rep).into_owned();
    }
    s
}
