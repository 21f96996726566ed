//! MVC Controller - Mediates between the Model (MultiSelectStore) and a View
//!
//! # Responsibilities
//!
//! - Share one store between every widget of a view
//! - Forward user events (add, delete, select) to the store
//! - Filter/search stored items
//! - Provide data to the View in UI-friendly, owned form
//!
//! # Architecture
//!
//! The Controller holds the store behind `Rc<RefCell<..>>` and knows
//! nothing about widgets. Clones share state, so each widget callback can
//! own a handle. Handles are `!Send`: all events arrive on the view's
//! single thread and each call completes before the next one starts.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use crate::config::StoreConfig;
use crate::core::{Clock, KeyList, MultiSelectStore, Snapshot, SystemClock};

/// MVC Controller coordinating a shared store and its views
pub struct Controller<T, C = SystemClock> {
    /// The store (shared mutable reference)
    store: Rc<RefCell<MultiSelectStore<T, C>>>,
}

impl<T, C> Clone for Controller<T, C> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
        }
    }
}

impl<T> Controller<T> {
    /// Creates a Controller over an empty store using the system clock
    ///
    /// # Example
    ///
    /// ```
    /// use multiselect_store::config::StoreConfig;
    /// use multiselect_store::ui::Controller;
    ///
    /// let controller: Controller<String> = Controller::new(&StoreConfig::default());
    /// let key = controller.add_obj_to_store("README.md".to_string(), "file");
    ///
    /// controller.select_obj(&key);
    /// assert_eq!(controller.selected_count(), 1);
    /// ```
    pub fn new(config: &StoreConfig) -> Self {
        Self::from_store(MultiSelectStore::with_config(config))
    }
}

impl<T, C: Clock> Controller<T, C> {
    /// Wraps an existing store
    pub fn from_store(store: MultiSelectStore<T, C>) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
        }
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.store.borrow().has_key(key)
    }

    /// Stores `item` and returns its generated key
    pub fn add_obj_to_store(&self, item: T, key_prefix: &str) -> String {
        self.store.borrow_mut().add_obj_to_store(item, key_prefix)
    }

    /// Removes an item everywhere, returning it if it existed
    pub fn del_obj_from_store(&self, key: &str) -> Option<T> {
        self.store.borrow_mut().del_obj_from_store(key)
    }

    pub fn del_all_objs(&self) {
        self.store.borrow_mut().del_all_objs();
    }

    pub fn select_obj(&self, key: &str) {
        self.store.borrow_mut().select_obj(key);
    }

    pub fn unselect_obj(&self, key: &str) {
        self.store.borrow_mut().unselect_obj(key);
    }

    pub fn toggle_obj(&self, key: &str) -> bool {
        self.store.borrow_mut().toggle_obj(key)
    }

    pub fn select_all(&self) {
        self.store.borrow_mut().select_all();
    }

    pub fn unselect_all(&self) {
        self.store.borrow_mut().unselect_all();
    }

    /// All keys in insertion order
    pub fn key_list(&self) -> KeyList {
        self.store.borrow().key_list().clone()
    }

    /// Selected keys in selection order
    pub fn selected_keys(&self) -> KeyList {
        self.store.borrow().selected_keys().clone()
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.store.borrow().is_selected(key)
    }

    /// Returns total count of stored items
    pub fn item_count(&self) -> usize {
        self.store.borrow().len()
    }

    /// Returns count of selected items
    pub fn selected_count(&self) -> usize {
        self.store.borrow().selected_count()
    }

    /// Runs `f` against the store without copying anything out
    pub fn read<R>(&self, f: impl FnOnce(&MultiSelectStore<T, C>) -> R) -> R {
        f(&self.store.borrow())
    }
}

impl<T: Clone, C: Clock> Controller<T, C> {
    pub fn get(&self, key: &str) -> Option<T> {
        self.store.borrow().get(key).cloned()
    }

    /// Selected key/item pairs in selection order
    pub fn selected_items(&self) -> Vec<(String, T)> {
        self.store
            .borrow()
            .selected_items()
            .map(|(key, item)| (key.to_string(), item.clone()))
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot<T> {
        self.store.borrow().snapshot()
    }
}

impl<T: Display, C: Clock> Controller<T, C> {
    /// Filters keys by search query
    ///
    /// Searches in:
    /// - The key itself (e.g., "row_1700000000000")
    /// - The item's `Display` text
    ///
    /// Search is case-insensitive and keeps key list order.
    ///
    /// # Arguments
    ///
    /// * `query` - Search term (empty = return all)
    pub fn filter_keys(&self, query: &str) -> Vec<String> {
        let store = self.store.borrow();

        // Empty query returns all keys
        if query.trim().is_empty() {
            return store.key_list().as_slice().to_vec();
        }

        let query_lower = query.to_lowercase();

        let matches: Vec<String> = store
            .iter()
            .filter(|(key, item)| {
                key.to_lowercase().contains(&query_lower)
                    || item.to_string().to_lowercase().contains(&query_lower)
            })
            .map(|(key, _)| key.to_string())
            .collect();

        matches
    }
}
