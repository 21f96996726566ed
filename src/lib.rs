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

//! Multi-Select Store
//!
//! A keyed item store with ordered multi-selection tracking, built to sit
//! behind an interactive view (rows, tags, files).
//!
//! # Features
//!
//! - **Generated Keys:** `<prefix>_<millis>` keys, unique per store
//! - **Ordered Selection:** Selected keys kept in selection order, no duplicates
//! - **Cascading Deletes:** Removing an item also deselects it
//! - **Total Operations:** Unknown keys and empty stores never cause errors
//! - **Snapshots:** Serialisable copy of the store for rendering
//! - **Script Replay:** Reproduce a sequence of view events from a text file
//!
//! # Architecture
//!
//! - **`core`:** State container (key list, key generation, store, snapshots)
//! - **`config`:** Key generation settings loaded from JSON
//! - **`script`:** Command script parser and replayer
//! - **`ui`:** Shared single-threaded controller for view layers
//!
//! # Invariants
//!
//! After every operation:
//!
//! - The key list holds exactly the keys of the store, in insertion order
//! - The selection is a duplicate-free subset of the key list
//!
//! # Examples
//!
//! ## Managing a selection
//!
//! ```
//! use multiselect_store::MultiSelectStore;
//!
//! let mut store = MultiSelectStore::new();
//! let a = store.add_obj_to_store("a.txt", "file");
//! let b = store.add_obj_to_store("b.txt", "file");
//!
//! store.select_all();
//! store.unselect_obj(&a);
//! assert_eq!(store.selected_keys(), &[b.as_str()]);
//!
//! store.del_obj_from_store(&b);
//! assert!(store.selected_keys().is_empty());
//! ```
//!
//! ## Replaying a script
//!
//! ```
//! use multiselect_store::script::{parse_script, replay};
//! use multiselect_store::MultiSelectStore;
//!
//! let lines = parse_script("add = row, apple\nadd = row, pear\nselect = @2\n")?;
//! let mut store = MultiSelectStore::new();
//! let added = replay(&mut store, &lines)?;
//!
//! assert!(store.is_selected(&added[1]));
//! # Ok::<(), multiselect_store::script::ScriptError>(())
//! ```

pub mod config;
pub mod core;
pub mod script;
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::config::StoreConfig;
pub use crate::core::{CollisionPolicy, KeyList, MultiSelectStore, Snapshot};
