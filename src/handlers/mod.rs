//! Handler implementations and engine wiring.
//!
//! `register_handlers` binds each typed request to its handler: the closure
//! downcasts the payload and delegates to the handler function, passing the
//! shared [`CatalogContext`].

pub mod app_handlers;
pub mod form_handlers;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::app::Engine;
use crate::client::ProductClient;
use crate::request::*;
use crate::store::StateStore;

/// Delay between a successful save and navigation back to the listing.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Shared handler context — the backend client plus flow-level settings.
pub struct CatalogContext {
    pub products: ProductClient,
    /// How long the success message stays up before navigating away.
    pub redirect_delay: Duration,
    /// Monotonic load counter. A load whose generation is no longer
    /// current writes nothing, so a late response for a superseded
    /// product ID cannot overwrite newer state.
    load_generation: AtomicU64,
}

impl CatalogContext {
    pub fn new(products: ProductClient) -> Self {
        Self {
            products,
            redirect_delay: REDIRECT_DELAY,
            load_generation: AtomicU64::new(0),
        }
    }

    /// Same context with a custom redirect delay (tests use a short one).
    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    /// Start a new load; returns its generation.
    pub(crate) fn begin_load(&self) -> u64 {
        self.load_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether the given load is still the newest one.
    pub(crate) fn load_is_current(&self, generation: u64) -> bool {
        self.load_generation.load(Ordering::SeqCst) == generation
    }
}

/// Register all handlers with an engine.
pub fn register_handlers(engine: &Engine, ctx: Arc<CatalogContext>) {
    // app/initialize
    engine.on(InitializeReq::PATH, |_, _, store: Arc<StateStore>| async move {
        app_handlers::handle_initialize(&store).await;
    });

    // product-form/load
    {
        let ctx = ctx.clone();
        engine.on(LoadProductReq::PATH, move |_, payload, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                let req = payload.downcast_ref::<LoadProductReq>().unwrap();
                form_handlers::handle_load(req, &store, &ctx).await;
            }
        });
    }

    // product-form/edit-field
    engine.on(EditFieldReq::PATH, |_, payload, store: Arc<StateStore>| async move {
        let req = payload.downcast_ref::<EditFieldReq>().unwrap();
        form_handlers::handle_edit_field(req, &store).await;
    });

    // product-form/toggle-policy
    engine.on(TogglePolicyReq::PATH, |_, payload, store: Arc<StateStore>| async move {
        let req = payload.downcast_ref::<TogglePolicyReq>().unwrap();
        form_handlers::handle_toggle_policy(req, &store).await;
    });

    // product-form/submit
    {
        let ctx = ctx.clone();
        engine.on(SubmitProductReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                form_handlers::handle_submit(&store, &ctx).await;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ctx() -> CatalogContext {
        // Port 9 is unassigned locally; nothing in these tests reaches it.
        CatalogContext::new(ProductClient::new("http://127.0.0.1:9"))
    }

    #[test]
    fn load_generations_are_monotonic() {
        let ctx = test_ctx();
        let g1 = ctx.begin_load();
        let g2 = ctx.begin_load();
        assert!(g2 > g1);
    }

    #[test]
    fn only_newest_load_is_current() {
        let ctx = test_ctx();
        let g1 = ctx.begin_load();
        assert!(ctx.load_is_current(g1));

        let g2 = ctx.begin_load();
        assert!(!ctx.load_is_current(g1));
        assert!(ctx.load_is_current(g2));
    }

    #[test]
    fn default_redirect_delay_is_two_seconds() {
        let ctx = test_ctx();
        assert_eq!(ctx.redirect_delay, Duration::from_secs(2));

        let ctx = ctx.with_redirect_delay(Duration::from_millis(10));
        assert_eq!(ctx.redirect_delay, Duration::from_millis(10));
    }

    #[tokio::test]
    async fn all_request_paths_are_registered() {
        let engine = Engine::new();
        register_handlers(&engine, Arc::new(test_ctx()));

        assert!(engine.has_handler(InitializeReq::PATH));
        assert!(engine.has_handler(LoadProductReq::PATH));
        assert!(engine.has_handler(EditFieldReq::PATH));
        assert!(engine.has_handler(TogglePolicyReq::PATH));
        assert!(engine.has_handler(SubmitProductReq::PATH));
    }
}
