use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::value::{StateValue, SubscriptionId};

/// Callback type for state change notifications.
pub type ChangeHandler = Arc<dyn Fn(&str, &StateValue) + Send + Sync>;

/// Per-path state store with exact-path change subscriptions.
///
/// - `set(path, value)` stores a value and notifies subscribers of that path.
/// - `get(path)` reads the current value (Arc clone, cheap).
/// - `subscribe(path, handler)` registers a change handler.
/// - `unsubscribe(path, id)` removes a handler.
///
/// The edit flow only watches two fixed paths (`product-form/state` and
/// `app/route`), so subscriptions are keyed by exact path.
pub struct StateStore {
    /// Current state values, keyed by exact path.
    values: RwLock<BTreeMap<String, StateValue>>,
    /// Change handlers, keyed by the exact path they watch.
    handlers: RwLock<HashMap<String, Vec<HandlerEntry>>>,
    /// Monotonic counter for subscription IDs.
    next_id: AtomicU64,
}

#[derive(Clone)]
struct HandlerEntry {
    id: SubscriptionId,
    handler: ChangeHandler,
}

impl StateStore {
    /// Create a new empty StateStore.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(BTreeMap::new()),
            handlers: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Set a typed value at the given path and notify its subscribers.
    pub fn set<T: Any + Send + Sync>(&self, path: &str, value: T) {
        let value = StateValue::new(value);
        {
            let mut values = self.values.write().unwrap();
            values.insert(path.to_string(), value.clone());
        }
        // Notify after the write so handlers observe the new value.
        let entries = {
            let handlers = self.handlers.read().unwrap();
            handlers.get(path).cloned().unwrap_or_default()
        };
        for entry in entries {
            (entry.handler)(path, &value);
        }
    }

    /// Get the current state value at the given path.
    ///
    /// Returns a cloned `StateValue` (Arc clone — no data copy), or `None`
    /// if nothing is set at this path.
    pub fn get(&self, path: &str) -> Option<StateValue> {
        let values = self.values.read().unwrap();
        values.get(path).cloned()
    }

    /// Remove the state value at the given path.
    ///
    /// Returns the old value if present. Does NOT notify subscribers.
    pub fn remove(&self, path: &str) -> Option<StateValue> {
        let mut values = self.values.write().unwrap();
        values.remove(path)
    }

    /// Check if a value exists at the given path.
    pub fn contains(&self, path: &str) -> bool {
        let values = self.values.read().unwrap();
        values.contains_key(path)
    }

    /// Get the total number of stored paths.
    pub fn len(&self) -> usize {
        let values = self.values.read().unwrap();
        values.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribe to changes of the given path.
    ///
    /// The handler is called synchronously, on the thread that calls `set`,
    /// after the store already holds the new value.
    ///
    /// Returns a `SubscriptionId` for unsubscribing.
    pub fn subscribe<F>(&self, path: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let entry = HandlerEntry {
            id,
            handler: Arc::new(handler),
        };
        let mut handlers = self.handlers.write().unwrap();
        handlers.entry(path.to_string()).or_default().push(entry);
        id
    }

    /// Unsubscribe a handler by its subscription ID and path.
    pub fn unsubscribe(&self, path: &str, id: SubscriptionId) {
        let mut handlers = self.handlers.write().unwrap();
        if let Some(entries) = handlers.get_mut(path) {
            entries.retain(|e| e.id != id);
            if entries.is_empty() {
                handlers.remove(path);
            }
        }
    }

    /// Get a snapshot of all paths and values, ordered by path.
    pub fn snapshot(&self) -> Vec<(String, StateValue)> {
        let values = self.values.read().unwrap();
        values.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
