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

//! Replayable command scripts
//!
//! A script is a line-oriented record of view-layer events. Replaying it
//! against a store reproduces the selection state those events lead to.
//! `@N` names the key returned by the N-th `add` (the first add is `@1`);
//! `add = pear` without a comma uses the default prefix.
//!
//! ```text
//! # whole-line comments only
//! $fruit = apple
//! add = row, $fruit
//! add = pear
//! select = @1
//! toggle = @2
//! delete = row_1700000000000
//! select_all
//! unselect_all
//! clear
//! ```

pub mod parser;

pub use parser::parse_script;

use log::debug;
use std::{fmt, fs, path::Path};
use thiserror::Error;

use crate::core::{Clock, MultiSelectStore};

/// Script errors with line number context
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    #[error("Undefined variable '${variable}' on line {line}")]
    UndefinedVariable { variable: String, line: usize },

    #[error("Reference @{index} on line {line} has no matching add")]
    UnknownReference { index: usize, line: usize },

    #[error("IO error reading script: {0}")]
    IoError(#[from] std::io::Error),
}

/// How a command names its target key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeyRef {
    /// Key returned by the N-th `add` of the replay (1-based)
    Added(usize),
    /// Key spelled out in the script
    Literal(String),
}

impl fmt::Display for KeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRef::Added(index) => write!(f, "@{}", index),
            KeyRef::Literal(key) => write!(f, "{}", key),
        }
    }
}

/// One store operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Add { prefix: String, item: String },
    Delete(KeyRef),
    Select(KeyRef),
    Unselect(KeyRef),
    Toggle(KeyRef),
    SelectAll,
    UnselectAll,
    Clear,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Add { prefix, item } if prefix.is_empty() => write!(f, "add = {}", item),
            Command::Add { prefix, item } => write!(f, "add = {}, {}", prefix, item),
            Command::Delete(key) => write!(f, "delete = {}", key),
            Command::Select(key) => write!(f, "select = {}", key),
            Command::Unselect(key) => write!(f, "unselect = {}", key),
            Command::Toggle(key) => write!(f, "toggle = {}", key),
            Command::SelectAll => write!(f, "select_all"),
            Command::UnselectAll => write!(f, "unselect_all"),
            Command::Clear => write!(f, "clear"),
        }
    }
}

/// A parsed command and the line it came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

/// Reads and parses a script file.
pub fn read_script(path: &Path) -> Result<Vec<ScriptLine>, ScriptError> {
    let content = fs::read_to_string(path)?;
    parse_script(&content)
}

/// Applies `lines` to `store` in order.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Keys generated by each `add`, in order
/// * `Err(ScriptError)` - An `@N` reference named an add that has not run
///   yet. Commands before the failing line have already been applied.
pub fn replay<C: Clock>(
    store: &mut MultiSelectStore<String, C>,
    lines: &[ScriptLine],
) -> Result<Vec<String>, ScriptError> {
    let mut added: Vec<String> = Vec::new();

    for ScriptLine { line, command } in lines {
        debug!("line {}: {}", line, command);

        match command {
            Command::Add { prefix, item } => {
                added.push(store.add_obj_to_store(item.clone(), prefix));
            }
            Command::Delete(key) => {
                store.del_obj_from_store(resolve(key, &added, *line)?);
            }
            Command::Select(key) => store.select_obj(resolve(key, &added, *line)?),
            Command::Unselect(key) => store.unselect_obj(resolve(key, &added, *line)?),
            Command::Toggle(key) => {
                store.toggle_obj(resolve(key, &added, *line)?);
            }
            Command::SelectAll => store.select_all(),
            Command::UnselectAll => store.unselect_all(),
            Command::Clear => store.del_all_objs(),
        }
    }

    Ok(added)
}

fn resolve<'a>(key: &'a KeyRef, added: &'a [String], line: usize) -> Result<&'a str, ScriptError> {
    match key {
        KeyRef::Added(index) => index
            .checked_sub(1)
            .and_then(|i| added.get(i))
            .map(String::as_str)
            .ok_or(ScriptError::UnknownReference {
                index: *index,
                line,
            }),
        KeyRef::Literal(key) => Ok(key),
    }
}

#[cfg(test)]
mod tests;
