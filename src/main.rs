use tracing_subscriber::EnvFilter;

use url_registry::config::{self, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present; real environment variables take priority.
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    url_registry::server::run(config).await
}

/// Initializes the tracing subscriber according to `RUST_LOG` and `LOG_FORMAT`.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
