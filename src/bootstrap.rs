//! Application startup and shutdown sequence.

use anyhow::Context;
use bookshelf_kernel::{InitCtx, ModuleRegistry, Settings};

use crate::modules;

/// Build a registry holding every project module configured from `settings`
pub fn registry(settings: &Settings) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, settings);
    registry
}

/// Initialize and start all modules, serve HTTP until shutdown, then stop
/// the modules in reverse order.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let registry = registry(&settings);
    let ctx = InitCtx {
        settings: &settings,
    };

    registry
        .init_modules(&ctx)
        .await
        .context("module initialization failed")?;
    registry
        .start_modules(&ctx)
        .await
        .context("module startup failed")?;

    let served = bookshelf_http::start_server(&registry, &settings).await;

    // Stop modules even when the server failed, but report the server error first.
    let stopped = registry.stop_modules().await;
    served?;
    stopped.context("module shutdown failed")?;

    tracing::info!("bookshelf shut down cleanly");
    Ok(())
}
