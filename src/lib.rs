//! Catalog Flux — client-side state engine for the product edit flow.
//!
//! A path-based state store with typed requests driving the edit form of a
//! product record. Rust owns all state and logic; the rendering layer only
//! reads state and emits requests.
//!
//! # Three Primitives
//!
//! - `get(path)` — read state at a path, Arc zero-copy
//! - `emit(path, payload)` — send a request, routed to its handler
//! - `subscribe(path, f)` — observe state changes at a path
//!
//! # Paths
//!
//! State and requests live in a flat path namespace with `/` as separator:
//! - `product-form/state` — the edit form ([`ProductFormState`])
//! - `app/route` — current navigation route ([`AppRoute`])
//! - `product-form/load`, `product-form/edit-field`,
//!   `product-form/toggle-policy`, `product-form/submit` — requests
//!
//! # Example
//!
//! ```ignore
//! use catalog_flux::{Engine, CatalogContext, ProductClient, register_handlers};
//! use catalog_flux::request::LoadProductReq;
//!
//! let engine = Engine::new();
//! let ctx = Arc::new(CatalogContext::new(ProductClient::new("http://localhost:8080")));
//! register_handlers(&engine, ctx);
//!
//! engine.subscribe("product-form/state", |_, _| { /* re-render */ });
//! engine.emit(LoadProductReq::PATH, LoadProductReq { product_id: "42".into() }).await;
//! ```

pub mod app;
pub mod client;
pub mod handlers;
pub mod request;
pub mod router;
pub mod state;
pub mod store;
pub mod value;

pub use app::Engine;
pub use client::{ApiError, ProductClient, DEFAULT_BASE_URL};
pub use handlers::{register_handlers, CatalogContext};
pub use router::{BoxFuture, Router};
pub use state::{
    AppRoute, Availability, FormField, FormPhase, Policy, ProductDraft, ProductFormState,
};
pub use store::{ChangeHandler, StateStore};
pub use value::{StateValue, SubscriptionId};
