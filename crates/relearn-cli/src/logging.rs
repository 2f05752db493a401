use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログフィルタを指定する環境変数。
pub const LOG_ENV: &str = "RELEARN_LOG";

/// フラグから既定のログレベルを決める。
pub fn default_level(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// tracing-subscriber を初期化する。
///
/// 診断ログは標準エラーに出し、標準出力は利用者向けの表示だけに使う。
/// `RELEARN_LOG` が設定されていればそれを優先する。
pub fn init_tracing(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false, false), "warn");
        assert_eq!(default_level(true, false), "debug");
        assert_eq!(default_level(false, true), "error");
    }
}
