use attribute_submit_hook::AppResources;
use attribute_submit_hook::api::start_webserver;
use attribute_submit_hook::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn initialize_tracing() {
    let default_directives = "attribute_submit_hook=info,tower_http=info";
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer().with_target(true).with_level(true);

    registry.with(layer).init();
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    initialize_tracing();

    let config = load_config()?;
    tracing::info!(
        bind_address = %config.bind_address,
        max_body_bytes = config.limits.max_body_bytes,
        max_depth = config.limits.max_depth,
        "configuration loaded"
    );

    start_webserver(AppResources::new(config)).await?;
    Ok(())
}
