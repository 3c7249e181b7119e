//! State definitions.
//!
//! Each file defines one state type stored at a well-known path. The
//! rendering layer subscribes to these paths and re-renders from the
//! current value; it never mutates them directly.

pub mod form;
pub mod route;

pub use form::{Availability, FormField, FormPhase, Policy, ProductDraft, ProductFormState};
pub use route::AppRoute;
