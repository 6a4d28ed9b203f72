//! tracing の初期化
//!
//! `RUST_LOG` があればそれを優先。ログは stderr に出す（stdout は HTML / summary 用）。

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let default_directives = match verbose {
        0 => "roadmap=info,roadmap_core=info,warn",
        1 => "roadmap=debug,roadmap_core=debug,info",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose > 0)
                .compact(),
        )
        .try_init()?;
    Ok(())
}
