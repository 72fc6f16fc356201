pub mod models;
pub mod openapi;
pub mod routes;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use bookshelf_kernel::{settings::BooksSettings, InitCtx, Module};

use routes::BooksState;
use store::BookStore;

/// Books module: an in-memory catalog exposed as a JSON CRUD API
pub struct BooksModule {
    state: BooksState,
}

impl BooksModule {
    pub fn new(settings: &BooksSettings) -> Self {
        let store = if settings.seed_sample_data {
            BookStore::seeded(settings.id_strategy)
        } else {
            BookStore::empty(settings.id_strategy)
        };

        Self {
            state: BooksState {
                store: Arc::new(store),
                not_found: settings.not_found,
            },
        }
    }

    /// Store backing this module's routes
    pub fn store(&self) -> &Arc<BookStore> {
        &self.state.store
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let records = self.state.store.len().await;
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            records,
            id_strategy = ?self.state.store.id_strategy(),
            not_found = ?self.state.not_found,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.state.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(openapi::fragment())
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let records = self.state.store.len().await;
        tracing::info!(
            module = self.name(),
            records,
            "books module stopped; in-memory records discarded"
        );
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module(settings: &BooksSettings) -> Arc<dyn Module> {
    Arc::new(BooksModule::new(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_kernel::settings::{IdStrategy, NotFoundPolicy};
    use bookshelf_kernel::{ModuleRegistry, Settings};

    #[tokio::test]
    async fn seeding_follows_settings() {
        let seeded = BooksModule::new(&BooksSettings::default());
        assert_eq!(seeded.store().len().await, 3);

        let empty = BooksModule::new(&BooksSettings {
            seed_sample_data: false,
            id_strategy: IdStrategy::Uuid,
            not_found: NotFoundPolicy::Lenient,
        });
        assert!(empty.store().is_empty().await);
        assert_eq!(empty.store().id_strategy(), IdStrategy::Uuid);
    }

    #[tokio::test]
    async fn lifecycle_runs_on_a_spawned_task() {
        let settings = Settings::default();
        let mut registry = ModuleRegistry::new();
        registry.register(create_module(&settings.books));

        // `tokio::spawn` requires the lifecycle futures to be `Send`.
        let handle = tokio::spawn(async move {
            let ctx = InitCtx {
                settings: &settings,
            };
            registry.init_modules(&ctx).await?;
            registry.start_modules(&ctx).await?;
            registry.stop_modules().await
        });

        handle.await.unwrap().unwrap();
    }
}
