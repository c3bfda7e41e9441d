use seamless::config::Config;
use seamless::control;
use seamless::control::validate::parse_backend_list;
use seamless::proxy::BackendRegistry;
use seamless::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    // Startup uses the same validation as /set: one bad entry and we
    // refuse to come up at all.
    let initial = parse_backend_list(&cfg.backends)?;
    let registry = BackendRegistry::new(initial);

    tokio::select! {
        res = server::listener::run(&cfg.server.listen_addr, registry.clone()) => {
            res?;
        }

        res = control::server::run(&cfg.server.control_addr, registry.clone()) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
