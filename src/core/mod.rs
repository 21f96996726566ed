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

//! src/core/mod.rs
//!
//! Core state container
//!
//! This module contains the data structures behind multi-selection:
//! - `KeyList`: insertion-ordered, duplicate-free key sequence
//! - `KeyGenerator` and `Clock`: timestamp-based key generation
//! - `MultiSelectStore`: the store, key list and selection kept in sync
//! - `Snapshot`: owned copy of the observables for rendering
//!
//! Nothing here touches I/O, so everything is unit tested without a view.

pub mod key_list;
pub mod keygen;
pub mod snapshot;
pub mod store;

pub use key_list::KeyList;
pub use keygen::{Clock, CollisionPolicy, KeyGenerator, ManualClock, SystemClock};
pub use snapshot::{Entry, Snapshot};
pub use store::MultiSelectStore;

#[cfg(test)]
mod tests;
