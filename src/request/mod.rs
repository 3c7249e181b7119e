//! Request definitions.
//!
//! Each struct is a typed request payload with a `PATH` const naming the
//! route it is emitted on. Handlers downcast the payload back to the
//! concrete type.

pub mod app;
pub mod product;

pub use app::InitializeReq;
pub use product::{EditFieldReq, LoadProductReq, SubmitProductReq, TogglePolicyReq};
