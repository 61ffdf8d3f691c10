//! Logging setup for the ragbot binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directive for a crate and this shared crate.
///
/// Crate names with `-` are normalized to the `_` form that tracing targets use.
pub fn default_directive(crate_name: &str, default_log_level: &str) -> String {
    format!(
        "{}={},{}={}",
        crate_name.replace('-', "_"),
        default_log_level,
        env!("CARGO_PKG_NAME").replace('-', "_"),
        default_log_level
    )
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The level can be overridden with the `RUST_LOG` environment variable.
/// Logs go to stderr so they never interleave with the chat transcript on stdout.
///
/// # Arguments
///
/// * `crate_name` - The crate whose targets should be enabled (e.g. "ragbot-client")
/// * `default_log_level` - The default log level (e.g. "debug", "info", "warn")
///
/// # Examples
///
/// ```no_run
/// use ragbot_shared::logger::setup_logger;
///
/// setup_logger("ragbot-client", "info");
/// ```
pub fn setup_logger(crate_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(crate_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_normalizes_crate_name() {
        // テスト項目: クレート名のハイフンがアンダースコアに変換される
        // given (前提条件):
        let crate_name = "ragbot-client";

        // when (操作):
        let directive = default_directive(crate_name, "info");

        // then (期待する結果):
        assert_eq!(directive, "ragbot_client=info,ragbot_shared=info");
    }
}
