//! App lifecycle handler implementations.

use crate::state::AppRoute;
use crate::store::StateStore;

/// Handle `app/initialize`.
pub async fn handle_initialize(store: &StateStore) {
    store.set(AppRoute::PATH, AppRoute::listing());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn initialize_sets_listing_route() {
        let store = StateStore::new();
        handle_initialize(&store).await;

        let route = store.get(AppRoute::PATH).unwrap();
        assert_eq!(route.downcast_ref::<AppRoute>(), Some(&AppRoute::listing()));
    }
}
