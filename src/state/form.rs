//! Product edit form state — stored at `product-form/state`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Stock status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Availability {
    InStock,
    OutOfStock,
    Discontinued,
}

impl Availability {
    /// Parse the wire form (`"IN_STOCK"`, `"OUT_OF_STOCK"`, `"DISCONTINUED"`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "IN_STOCK" => Some(Self::InStock),
            "OUT_OF_STOCK" => Some(Self::OutOfStock),
            "DISCONTINUED" => Some(Self::Discontinued),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "IN_STOCK",
            Self::OutOfStock => "OUT_OF_STOCK",
            Self::Discontinued => "DISCONTINUED",
        }
    }
}

/// A post-sale term applicable to a product. The draft holds a set of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Policy {
    Return,
    Replace,
}

impl Policy {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "RETURN" => Some(Self::Return),
            "REPLACE" => Some(Self::Replace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Return => "RETURN",
            Self::Replace => "REPLACE",
        }
    }
}

/// The locally held, editable copy of a product record.
///
/// This struct is also the wire shape: `GET /product/{id}` returns it and
/// `PUT /product/{id}` carries it, so field names match the backend JSON
/// exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub category: String,
    /// Numeric text, kept verbatim as typed ("19.99").
    pub price: String,
    pub description: String,
    pub availability: Availability,
    /// Star rating 1–5; `None` until chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<u8>,
    pub policy: BTreeSet<Policy>,
    pub url: String,
}

/// Scalar draft fields addressable by `product-form/edit-field`.
///
/// `policy` is deliberately absent — the set is mutated through
/// `product-form/toggle-policy` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Sku,
    Category,
    Price,
    Description,
    Availability,
    Review,
    Url,
}

impl ProductDraft {
    /// The initial draft: all text empty, no review, no policies, in stock.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            category: String::new(),
            price: String::new(),
            description: String::new(),
            availability: Availability::InStock,
            review: None,
            policy: BTreeSet::new(),
            url: String::new(),
        }
    }

    /// Replace one scalar field, leaving the others untouched.
    ///
    /// Select-style fields parse their wire form: an unrecognized
    /// availability string is a no-op, an unparsable review clears the
    /// rating.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.name = value.to_string(),
            FormField::Sku => self.sku = value.to_string(),
            FormField::Category => self.category = value.to_string(),
            FormField::Price => self.price = value.to_string(),
            FormField::Description => self.description = value.to_string(),
            FormField::Availability => {
                if let Some(a) = Availability::parse(value) {
                    self.availability = a;
                }
            }
            FormField::Review => {
                self.review = value.trim().parse::<u8>().ok().filter(|n| (1..=5).contains(n));
            }
            FormField::Url => self.url = value.to_string(),
        }
    }

    /// Add the policy to the set when `selected`, remove it otherwise.
    ///
    /// Duplicate adds are impossible (set semantics); toggling twice
    /// restores the prior membership.
    pub fn toggle_policy(&mut self, policy: Policy, selected: bool) {
        if selected {
            self.policy.insert(policy);
        } else {
            self.policy.remove(&policy);
        }
    }

    /// Submit-time validation: every field present, policy set non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.sku.is_empty()
            && !self.category.is_empty()
            && !self.price.is_empty()
            && !self.description.is_empty()
            && self.review.is_some()
            && !self.policy.is_empty()
            && !self.url.is_empty()
    }
}

/// Lifecycle of the edit form.
///
/// Tagged so that invalid combinations (e.g. saved and errored at once)
/// cannot be represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormPhase {
    /// Fetch in flight; the form is not rendered yet.
    Loading,
    /// Fetch failed; the draft is still empty.
    LoadFailed { message: String },
    /// Editable. `error` carries the last validation or submit failure
    /// message and is cleared on the next edit.
    Ready { error: Option<String> },
    /// Write in flight.
    Submitting,
    /// Write succeeded; navigation back to the listing is scheduled.
    Saved,
}

/// The edit form — stored at `product-form/state`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFormState {
    pub product_id: String,
    pub draft: ProductDraft,
    pub phase: FormPhase,
}

impl ProductFormState {
    pub const PATH: &'static str = "product-form/state";

    /// Fresh form for `product_id`, fetch not yet resolved.
    pub fn loading(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            draft: ProductDraft::empty(),
            phase: FormPhase::Loading,
        }
    }

    /// Editable form populated with a fetched draft.
    pub fn ready(product_id: impl Into<String>, draft: ProductDraft) -> Self {
        Self {
            product_id: product_id.into(),
            draft,
            phase: FormPhase::Ready { error: None },
        }
    }
}
