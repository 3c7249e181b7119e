//! App lifecycle requests.

/// Initialize app state — sets the route to the product listing.
#[derive(Debug, Clone)]
pub struct InitializeReq;

impl InitializeReq {
    pub const PATH: &'static str = "app/initialize";
}
