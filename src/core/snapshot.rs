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

//! src/core/snapshot.rs
//!
//! Owned view of a store's observables

use serde::{Deserialize, Serialize};

use crate::core::key_list::KeyList;
use crate::core::keygen::Clock;
use crate::core::store::MultiSelectStore;

/// One stored item together with its key.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Entry<T> {
    pub key: String,
    pub item: T,
}

/// Copy of the store, key list and selection taken at one point in time.
///
/// Items are listed in key list order so a view can render them directly.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Snapshot<T> {
    pub items: Vec<Entry<T>>,
    pub keys: KeyList,
    pub selected: KeyList,
}

impl<T: Clone> Snapshot<T> {
    pub fn capture<C: Clock>(store: &MultiSelectStore<T, C>) -> Self {
        let items = store
            .iter()
            .map(|(key, item)| Entry {
                key: key.to_string(),
                item: item.clone(),
            })
            .collect();

        Self {
            items,
            keys: store.key_list().clone(),
            selected: store.selected_keys().clone(),
        }
    }
}

impl<T> Snapshot<T> {
    /// Items whose keys are selected, in selection order.
    pub fn selected_entries(&self) -> Vec<&Entry<T>> {
        self.selected
            .iter()
            .filter_map(|key| self.items.iter().find(|entry| entry.key == key))
            .collect()
    }
}
