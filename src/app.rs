use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use crate::router::Router;
use crate::store::StateStore;
use crate::value::{StateValue, SubscriptionId};

/// The client-side state engine.
///
/// Owns the state store and the request router. A rendering layer drives it
/// through three primitives:
/// - `get(path)` — read state at a path (Arc, zero-copy)
/// - `emit(path, payload)` — send a request to its handler
/// - `subscribe(path, f)` — observe state changes at a path
///
/// # Examples
///
/// ```ignore
/// let engine = Engine::new();
///
/// engine.on("app/initialize", |_, _, store| async move {
///     store.set(AppRoute::PATH, AppRoute::listing());
/// });
///
/// engine.subscribe(ProductFormState::PATH, |_, _| { /* re-render */ });
///
/// engine.emit("app/initialize", InitializeReq).await;
/// ```
pub struct Engine {
    store: Arc<StateStore>,
    router: Router,
}

impl Engine {
    /// Create a new engine with empty state and no handlers.
    pub fn new() -> Self {
        Self {
            store: Arc::new(StateStore::new()),
            router: Router::new(),
        }
    }

    // ====================================================================
    // State — read
    // ====================================================================

    /// Read the state value at a path.
    ///
    /// Returns `None` if no value is set. The returned `StateValue` is an
    /// Arc clone; callers downcast to the concrete state type:
    ///
    /// ```ignore
    /// let v = engine.get(ProductFormState::PATH)?;
    /// let form = v.downcast_ref::<ProductFormState>()?;
    /// ```
    pub fn get(&self, path: &str) -> Option<StateValue> {
        self.store.get(path)
    }

    /// Check if a state value exists at the given path.
    pub fn contains(&self, path: &str) -> bool {
        self.store.contains(path)
    }

    /// Get a snapshot of all state entries, ordered by path.
    pub fn snapshot(&self) -> Vec<(String, StateValue)> {
        self.store.snapshot()
    }

    // ====================================================================
    // Requests
    // ====================================================================

    /// Emit a request and wait for its handler(s) to complete.
    ///
    /// The payload is wrapped in `Arc` and routed to the handlers registered
    /// for the path. If no handler matches, this is a silent no-op.
    pub async fn emit<T: Any + Send + Sync>(&self, path: &str, payload: T) {
        self.router
            .dispatch(path, Arc::new(payload), Arc::clone(&self.store))
            .await;
    }

    /// Register an async request handler for a path.
    ///
    /// The handler receives the request path, the type-erased payload
    /// (downcast inside), and the state store.
    pub fn on<F, Fut>(&self, path: &str, handler: F)
    where
        F: Fn(String, Arc<dyn Any + Send + Sync>, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.router.on(path, handler);
    }

    /// Check if a handler is registered for the given path.
    pub fn has_handler(&self, path: &str) -> bool {
        self.router.has_handler(path)
    }

    // ====================================================================
    // Subscriptions
    // ====================================================================

    /// Subscribe to state changes at a path.
    ///
    /// The handler is called synchronously on the thread that sets the
    /// value. Returns a `SubscriptionId` for unsubscribing.
    pub fn subscribe<F>(&self, path: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        self.store.subscribe(path, handler)
    }

    /// Unsubscribe a handler by its ID and the path it watches.
    pub fn unsubscribe(&self, path: &str, id: SubscriptionId) {
        self.store.unsubscribe(path, id);
    }

    // ====================================================================
    // Advanced
    // ====================================================================

    /// The underlying StateStore — for handlers that hold their own
    /// reference (spawned tasks), and for tests.
    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
