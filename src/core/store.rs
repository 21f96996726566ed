// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/store.rs
//!
//! Keyed item store with multi-selection tracking
//!
//! `MultiSelectStore` owns three collections that always agree:
//! - the object store (key → item)
//! - the key list (every valid key, insertion order)
//! - the selected keys (subset of the key list, selection order)
//!
//! Every mutator restores the invariants before it returns, and none of
//! them can fail: unknown keys and empty stores are silent no-ops.

use log::{debug, warn};
use std::collections::HashMap;

use crate::config::StoreConfig;
use crate::core::key_list::KeyList;
use crate::core::keygen::{Clock, KeyGenerator, SystemClock};
use crate::core::snapshot::Snapshot;

/// Multi-selection state container.
///
/// Items are opaque values of type `T`. Keys are generated from the clock
/// `C` and returned to the caller, who uses them to delete or select.
///
/// # Example
/// ```
/// use multiselect_store::MultiSelectStore;
///
/// let mut store = MultiSelectStore::new();
/// let key = store.add_obj_to_store("notes.txt", "file");
///
/// store.select_obj(&key);
/// assert!(store.is_selected(&key));
///
/// store.del_obj_from_store(&key);
/// assert!(store.selected_keys().is_empty());
/// ```
#[derive(Debug)]
pub struct MultiSelectStore<T, C = SystemClock> {
    /// Key → item
    objects: HashMap<String, T>,
    /// Every key in `objects`, in insertion order
    keys: KeyList,
    /// Selected keys, always a subset of `keys`
    selected: KeyList,
    keygen: KeyGenerator<C>,
    /// Used by `add` and by `add_obj_to_store` with an empty prefix
    default_prefix: String,
}

impl<T> MultiSelectStore<T> {
    /// Creates an empty store using the system clock and default config.
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Creates an empty store using the system clock.
    pub fn with_config(config: &StoreConfig) -> Self {
        Self::with_clock(SystemClock, config)
    }
}

impl<T> Default for MultiSelectStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Clock> MultiSelectStore<T, C> {
    /// Creates an empty store reading timestamps from `clock`.
    ///
    /// A separator that fails [`StoreConfig::validate`] is replaced with `_`.
    pub fn with_clock(clock: C, config: &StoreConfig) -> Self {
        let separator = match config.validate() {
            Ok(()) => config.separator.as_str(),
            Err(e) => {
                warn!("{}, using '_'", e);
                "_"
            }
        };

        Self {
            objects: HashMap::new(),
            keys: KeyList::new(),
            selected: KeyList::new(),
            keygen: KeyGenerator::new(clock, config.on_collision, separator),
            default_prefix: config.default_prefix.clone(),
        }
    }

    /// Checks whether `key` names a stored item.
    pub fn has_key(&self, key: &str) -> bool {
        self.objects.contains_key(key)
    }

    /// Stores `item` under a freshly generated key and returns the key.
    ///
    /// The key is `<key_prefix>_<millis>`, or `<millis>` when the prefix is
    /// empty and no default prefix is configured.
    pub fn add_obj_to_store(&mut self, item: T, key_prefix: &str) -> String {
        let prefix = if key_prefix.is_empty() {
            self.default_prefix.as_str()
        } else {
            key_prefix
        };
        let key = self.keygen.next_key(prefix);

        if self.objects.insert(key.clone(), item).is_some() {
            warn!("Key '{}' generated twice, earlier item overwritten", key);
        }
        self.keys.insert(&key);

        debug!("Added '{}' ({} items)", key, self.objects.len());
        key
    }

    /// Stores `item` under the default prefix.
    pub fn add(&mut self, item: T) -> String {
        self.add_obj_to_store(item, "")
    }

    /// Removes `key` from the store, the key list and the selection.
    ///
    /// Returns the removed item, or `None` if the key was unknown (in which
    /// case nothing changes).
    pub fn del_obj_from_store(&mut self, key: &str) -> Option<T> {
        let removed = self.objects.remove(key);
        self.keys.remove(key);
        self.selected.remove(key);

        if removed.is_some() {
            debug!("Deleted '{}' ({} items)", key, self.objects.len());
        }
        removed
    }

    /// Empties the store, the key list and the selection.
    pub fn del_all_objs(&mut self) {
        self.objects.clear();
        self.keys.clear();
        self.selected.clear();
        debug!("Deleted all items");
    }

    /// Selects `key` if it names a stored item. Unknown keys are ignored.
    pub fn select_obj(&mut self, key: &str) {
        if !self.has_key(key) {
            return;
        }

        if self.selected.insert(key) {
            debug!("Selected '{}'", key);
        }
    }

    /// Deselects `key`. The key does not have to exist in the store.
    pub fn unselect_obj(&mut self, key: &str) {
        if self.selected.remove(key) {
            debug!("Unselected '{}'", key);
        }
    }

    /// Flips the selection state of a stored item.
    ///
    /// Returns `true` if the key is selected afterwards. Unknown keys are
    /// ignored and return `false`.
    pub fn toggle_obj(&mut self, key: &str) -> bool {
        if self.selected.contains(key) {
            self.unselect_obj(key);
            false
        } else {
            self.select_obj(key);
            self.selected.contains(key)
        }
    }

    /// Replaces the selection with every stored key, in key list order.
    pub fn select_all(&mut self) {
        self.selected.replace_with(&self.keys);
        debug!("Selected all {} items", self.selected.len());
    }

    /// Clears the selection.
    pub fn unselect_all(&mut self) {
        self.selected.clear();
        debug!("Cleared selection");
    }

    /// Key → item mapping.
    pub fn store(&self) -> &HashMap<String, T> {
        &self.objects
    }

    /// Every valid key in insertion order.
    pub fn key_list(&self) -> &KeyList {
        &self.keys
    }

    /// Selected keys in selection order.
    pub fn selected_keys(&self) -> &KeyList {
        &self.selected
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.objects.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.objects.get_mut(key)
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Key/item pairs in key list order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.pairs(&self.keys)
    }

    /// Selected key/item pairs in selection order.
    pub fn selected_items(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.pairs(&self.selected)
    }

    fn pairs<'a>(&'a self, keys: &'a KeyList) -> impl Iterator<Item = (&'a str, &'a T)> + 'a {
        keys.iter()
            .filter_map(move |key| self.objects.get(key).map(|item| (key, item)))
    }

    /// Key generator driving this store.
    pub fn key_generator(&self) -> &KeyGenerator<C> {
        &self.keygen
    }
}

impl<T: Clone, C: Clock> MultiSelectStore<T, C> {
    /// Owned copy of the three observables.
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::capture(self)
    }
}
