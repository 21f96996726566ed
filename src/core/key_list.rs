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

//! src/core/key_list.rs
//!
//! Ordered, duplicate-free list of store keys
//!
//! Both the list of valid keys and the list of selected keys are a
//! `KeyList`. Order is insertion order; inserting a key that is already
//! present leaves the list untouched.
//!
//! # Performance
//! - `contains` / `insert`: O(1) average case (HashSet index)
//! - `remove`: O(n), the Vec is shifted to keep order

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Insertion-ordered set of keys.
///
/// Serialises as a plain list of strings. Deserialising a list with
/// duplicates keeps the first occurrence of each key.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeyList {
    /// Keys in insertion order
    order: Vec<String>,
    /// Membership index over `order`
    index: HashSet<String>,
}

impl KeyList {
    /// Creates an empty key list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key` unless it is already present.
    ///
    /// Returns `true` if the key was added.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.index.contains(key) {
            return false;
        }

        self.index.insert(key.to_string());
        self.order.push(key.to_string());
        true
    }

    /// Removes `key` by value.
    ///
    /// Returns `true` if the key was present.
    pub fn remove(&mut self, key: &str) -> bool {
        if !self.index.remove(key) {
            return false;
        }

        self.order.retain(|k| k != key);
        true
    }

    /// Checks whether `key` is in the list.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    /// Replaces the contents with a copy of `other`, order included.
    pub fn replace_with(&mut self, other: &KeyList) {
        self.order.clone_from(&other.order);
        self.index.clone_from(&other.index);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates keys in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Keys in insertion order as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }
}

impl PartialEq for KeyList {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for KeyList {}

impl From<Vec<String>> for KeyList {
    fn from(keys: Vec<String>) -> Self {
        keys.into_iter().collect()
    }
}

impl From<KeyList> for Vec<String> {
    fn from(list: KeyList) -> Self {
        list.order
    }
}

impl FromIterator<String> for KeyList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = KeyList::new();
        for key in iter {
            list.insert(&key);
        }
        list
    }
}

impl<'a> IntoIterator for &'a KeyList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

impl PartialEq<[&str]> for KeyList {
    fn eq(&self, other: &[&str]) -> bool {
        self.order.len() == other.len() && self.order.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for KeyList {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}
