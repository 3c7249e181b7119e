//! Product form handler implementations: loader, editor, submitter.

use std::sync::Arc;

use tracing::{info, warn};

use crate::handlers::CatalogContext;
use crate::request::{EditFieldReq, LoadProductReq, TogglePolicyReq};
use crate::state::{AppRoute, FormPhase, ProductDraft, ProductFormState};
use crate::store::StateStore;

/// Validation failure — shown when any field is empty at submit.
pub const MSG_ALL_FIELDS_REQUIRED: &str = "All fields are required!";
/// Loader failure.
pub const MSG_FETCH_FAILED: &str = "Failed to fetch product data.";
/// Submitter request failure.
pub const MSG_UPDATE_FAILED: &str = "Failed to update product. Please try again.";

/// Read the current form state, if any.
fn current_form(store: &StateStore) -> Option<ProductFormState> {
    store
        .get(ProductFormState::PATH)
        .and_then(|v| v.downcast_ref::<ProductFormState>().cloned())
}

/// Handle `product-form/load`.
///
/// Each load gets a generation from the context; if a newer load starts
/// while this one's response is in flight, the response is dropped instead
/// of overwriting the newer form.
pub async fn handle_load(req: &LoadProductReq, store: &StateStore, ctx: &CatalogContext) {
    let generation = ctx.begin_load();
    store.set(
        ProductFormState::PATH,
        ProductFormState::loading(&req.product_id),
    );

    let result = ctx.products.get(&req.product_id).await;

    if !ctx.load_is_current(generation) {
        warn!(product_id = %req.product_id, "dropping stale load response");
        return;
    }

    match result {
        Ok(draft) => {
            info!(product_id = %req.product_id, "product loaded");
            store.set(
                ProductFormState::PATH,
                ProductFormState::ready(&req.product_id, draft),
            );
        }
        Err(err) => {
            warn!(product_id = %req.product_id, error = %err, "product fetch failed");
            store.set(
                ProductFormState::PATH,
                ProductFormState {
                    product_id: req.product_id.clone(),
                    draft: ProductDraft::empty(),
                    phase: FormPhase::LoadFailed {
                        message: MSG_FETCH_FAILED.into(),
                    },
                },
            );
        }
    }
}

/// Handle `product-form/edit-field`.
///
/// Only a `Ready` form is editable; edits also clear any pending error
/// message.
pub async fn handle_edit_field(req: &EditFieldReq, store: &StateStore) {
    let Some(mut form) = current_form(store) else {
        return;
    };
    if !matches!(form.phase, FormPhase::Ready { .. }) {
        return;
    }

    form.draft.set_field(req.field, &req.value);
    form.phase = FormPhase::Ready { error: None };
    store.set(ProductFormState::PATH, form);
}

/// Handle `product-form/toggle-policy`.
pub async fn handle_toggle_policy(req: &TogglePolicyReq, store: &StateStore) {
    let Some(mut form) = current_form(store) else {
        return;
    };
    if !matches!(form.phase, FormPhase::Ready { .. }) {
        return;
    }

    form.draft.toggle_policy(req.policy, req.selected);
    form.phase = FormPhase::Ready { error: None };
    store.set(ProductFormState::PATH, form);
}

/// Handle `product-form/submit`.
///
/// Validates the draft, then replaces the record on the backend. A submit
/// on a form that is not `Ready` is ignored, so a double click while the
/// write is in flight cannot send a second request.
pub async fn handle_submit(store: &Arc<StateStore>, ctx: &CatalogContext) {
    let Some(form) = current_form(store) else {
        return;
    };
    if !matches!(form.phase, FormPhase::Ready { .. }) {
        return;
    }

    if !form.draft.is_complete() {
        store.set(
            ProductFormState::PATH,
            ProductFormState {
                phase: FormPhase::Ready {
                    error: Some(MSG_ALL_FIELDS_REQUIRED.into()),
                },
                ..form
            },
        );
        return;
    }

    store.set(
        ProductFormState::PATH,
        ProductFormState {
            phase: FormPhase::Submitting,
            ..form.clone()
        },
    );

    match ctx.products.update(&form.product_id, &form.draft).await {
        Ok(()) => {
            info!(product_id = %form.product_id, "product updated");
            store.set(
                ProductFormState::PATH,
                ProductFormState {
                    phase: FormPhase::Saved,
                    ..form.clone()
                },
            );
            schedule_redirect(Arc::clone(store), ctx.redirect_delay, form.product_id);
        }
        Err(err) => {
            warn!(product_id = %form.product_id, error = %err, "product update failed");
            store.set(
                ProductFormState::PATH,
                ProductFormState {
                    phase: FormPhase::Ready {
                        error: Some(MSG_UPDATE_FAILED.into()),
                    },
                    ..form
                },
            );
        }
    }
}

/// After the delay, navigate back to the listing — once, and only if the
/// saved form is still the current one (a newer load cancels the redirect).
fn schedule_redirect(store: Arc<StateStore>, delay: std::time::Duration, product_id: String) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let still_saved = store
            .get(ProductFormState::PATH)
            .and_then(|v| {
                v.downcast_ref::<ProductFormState>()
                    .map(|f| f.phase == FormPhase::Saved && f.product_id == product_id)
            })
            .unwrap_or(false);
        if !still_saved {
            return;
        }

        // The form unmounts: drop its state, then switch the route.
        store.remove(ProductFormState::PATH);
        store.set(AppRoute::PATH, AppRoute::listing());
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ProductClient;
    use crate::state::{FormField, Policy};

    fn test_store() -> Arc<StateStore> {
        Arc::new(StateStore::new())
    }

    // No test in this module performs network I/O: validation and phase
    // guards stop every flow before the client is used.
    fn test_ctx() -> CatalogContext {
        CatalogContext::new(ProductClient::new("http://127.0.0.1:9"))
    }

    fn complete_draft() -> ProductDraft {
        let mut draft = ProductDraft::empty();
        draft.name = "Desk Lamp".into();
        draft.sku = "DL-7".into();
        draft.category = "Lighting".into();
        draft.price = "24.50".into();
        draft.description = "Warm white LED.".into();
        draft.review = Some(5);
        draft.policy.insert(Policy::Return);
        draft.url = "https://img.example.com/dl-7.png".into();
        draft
    }

    fn ready_form(store: &StateStore, draft: ProductDraft) {
        store.set(ProductFormState::PATH, ProductFormState::ready("42", draft));
    }

    fn form(store: &StateStore) -> ProductFormState {
        current_form(store).expect("form state present")
    }

    // ========================================================================
    // Editor
    // ========================================================================

    #[tokio::test]
    async fn edit_field_updates_draft() {
        let store = test_store();
        ready_form(&store, ProductDraft::empty());

        handle_edit_field(
            &EditFieldReq {
                field: FormField::Name,
                value: "Desk Lamp".into(),
            },
            &store,
        )
        .await;

        assert_eq!(form(&store).draft.name, "Desk Lamp");
    }

    #[tokio::test]
    async fn edit_clears_pending_error() {
        let store = test_store();
        store.set(
            ProductFormState::PATH,
            ProductFormState {
                product_id: "42".into(),
                draft: ProductDraft::empty(),
                phase: FormPhase::Ready {
                    error: Some(MSG_ALL_FIELDS_REQUIRED.into()),
                },
            },
        );

        handle_edit_field(
            &EditFieldReq {
                field: FormField::Sku,
                value: "DL-7".into(),
            },
            &store,
        )
        .await;

        assert_eq!(form(&store).phase, FormPhase::Ready { error: None });
    }

    #[tokio::test]
    async fn edit_ignored_while_loading() {
        let store = test_store();
        store.set(ProductFormState::PATH, ProductFormState::loading("42"));

        handle_edit_field(
            &EditFieldReq {
                field: FormField::Name,
                value: "x".into(),
            },
            &store,
        )
        .await;

        let f = form(&store);
        assert_eq!(f.phase, FormPhase::Loading);
        assert!(f.draft.name.is_empty());
    }

    #[tokio::test]
    async fn edit_without_form_is_noop() {
        let store = test_store();
        handle_edit_field(
            &EditFieldReq {
                field: FormField::Name,
                value: "x".into(),
            },
            &store,
        )
        .await;
        assert!(store.get(ProductFormState::PATH).is_none());
    }

    #[tokio::test]
    async fn toggle_policy_roundtrip() {
        let store = test_store();
        ready_form(&store, ProductDraft::empty());

        handle_toggle_policy(
            &TogglePolicyReq {
                policy: Policy::Replace,
                selected: true,
            },
            &store,
        )
        .await;
        assert!(form(&store).draft.policy.contains(&Policy::Replace));

        handle_toggle_policy(
            &TogglePolicyReq {
                policy: Policy::Replace,
                selected: false,
            },
            &store,
        )
        .await;
        assert!(form(&store).draft.policy.is_empty());
    }

    #[tokio::test]
    async fn toggle_ignored_while_submitting() {
        let store = test_store();
        store.set(
            ProductFormState::PATH,
            ProductFormState {
                product_id: "42".into(),
                draft: complete_draft(),
                phase: FormPhase::Submitting,
            },
        );

        handle_toggle_policy(
            &TogglePolicyReq {
                policy: Policy::Replace,
                selected: true,
            },
            &store,
        )
        .await;

        assert!(!form(&store).draft.policy.contains(&Policy::Replace));
    }

    // ========================================================================
    // Submitter — validation path (no network involved)
    // ========================================================================

    #[tokio::test]
    async fn submit_incomplete_draft_sets_error_and_keeps_draft() {
        let store = test_store();
        let mut draft = complete_draft();
        draft.sku.clear();
        ready_form(&store, draft.clone());

        handle_submit(&store, &test_ctx()).await;

        let f = form(&store);
        assert_eq!(
            f.phase,
            FormPhase::Ready {
                error: Some(MSG_ALL_FIELDS_REQUIRED.into())
            }
        );
        assert_eq!(f.draft, draft);
    }

    #[tokio::test]
    async fn submit_empty_policy_set_is_rejected() {
        let store = test_store();
        let mut draft = complete_draft();
        draft.policy.clear();
        ready_form(&store, draft);

        handle_submit(&store, &test_ctx()).await;

        assert_eq!(
            form(&store).phase,
            FormPhase::Ready {
                error: Some(MSG_ALL_FIELDS_REQUIRED.into())
            }
        );
    }

    #[tokio::test]
    async fn submit_ignored_unless_ready() {
        let store = test_store();
        for phase in [FormPhase::Loading, FormPhase::Submitting, FormPhase::Saved] {
            store.set(
                ProductFormState::PATH,
                ProductFormState {
                    product_id: "42".into(),
                    draft: complete_draft(),
                    phase: phase.clone(),
                },
            );

            handle_submit(&store, &test_ctx()).await;
            assert_eq!(form(&store).phase, phase);
        }
    }

    #[tokio::test]
    async fn submit_without_form_is_noop() {
        let store = test_store();
        handle_submit(&store, &test_ctx()).await;
        assert!(store.get(ProductFormState::PATH).is_none());
    }
}
