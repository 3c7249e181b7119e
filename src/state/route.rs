//! App-level state — stored at `app/route`.

use serde::{Deserialize, Serialize};

/// Navigation route. The rendering layer switches views when this changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRoute(pub String);

impl AppRoute {
    pub const PATH: &'static str = "app/route";

    /// The product listing view — navigation target after a successful save.
    pub fn listing() -> Self {
        Self("/".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_is_root() {
        assert_eq!(AppRoute::listing(), AppRoute("/".into()));
    }
}
