//! Product form requests.

use crate::state::{FormField, Policy};

/// Fetch a product and open the edit form for it.
#[derive(Debug, Clone)]
pub struct LoadProductReq {
    pub product_id: String,
}

impl LoadProductReq {
    pub const PATH: &'static str = "product-form/load";
}

/// Replace one scalar field of the draft.
#[derive(Debug, Clone)]
pub struct EditFieldReq {
    pub field: FormField,
    pub value: String,
}

impl EditFieldReq {
    pub const PATH: &'static str = "product-form/edit-field";
}

/// Add or remove a policy from the draft's policy set.
#[derive(Debug, Clone)]
pub struct TogglePolicyReq {
    pub policy: Policy,
    pub selected: bool,
}

impl TogglePolicyReq {
    pub const PATH: &'static str = "product-form/toggle-policy";
}

/// Validate the draft and send it to the backend as a full-record update.
#[derive(Debug, Clone)]
pub struct SubmitProductReq;

impl SubmitProductReq {
    pub const PATH: &'static str = "product-form/submit";
}
