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

//! src/script/parser.rs
//!
//! Command script parser
//!
//! It handles:
//! - Every store command (add, delete, select, unselect, toggle,
//!   select_all, unselect_all, clear)
//! - Variable substitution ($fruit); an undefined `$name` at the start
//!   of a token is an error, any other `$` is literal
//! - Comments and whitespace
//! - Line numbers for error reporting
//!
//! # Architecture
//! The parser uses nom combinators for the per-line grammar and makes
//! two passes:
//! 1. First pass: Collect variable definitions
//! 2. Second pass: Parse commands with variable substitution

use nom::{
    bytes::complete::{take_until, take_while1},
    character::complete::{char, digit1, space0},
    combinator::{map, opt},
    error::{Error, ErrorKind},
    sequence::terminated,
    IResult, Parser,
};
use std::collections::HashMap;

use crate::script::{Command, KeyRef, ScriptError, ScriptLine};

/// Parse a complete command script
///
/// # Returns
/// The commands in file order, each tagged with its 1-based line number
///
/// # Example
/// ```
/// use multiselect_store::script::{parse_script, Command};
///
/// let lines = parse_script("add = row, apple\nselect = @1\n")?;
/// assert_eq!(lines.len(), 2);
/// assert!(matches!(lines[0].command, Command::Add { .. }));
/// # Ok::<(), multiselect_store::script::ScriptError>(())
/// ```
pub fn parse_script(content: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    // First pass: Collect variable definitions
    let variables = collect_variables(content);

    // Second pass: Parse commands with variable substitution
    let mut lines = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1;

        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') || line_trimmed.starts_with('$')
        {
            continue;
        }

        let substituted = substitute_variables(line_trimmed, &variables);
        if let Some(variable) = find_variable(&substituted) {
            return Err(ScriptError::UndefinedVariable {
                variable: variable.to_string(),
                line: line_num,
            });
        }

        let command = match parse_line(&substituted) {
            Ok((rest, command)) if rest.trim().is_empty() => command,
            Ok((rest, _)) => {
                return Err(ScriptError::InvalidSyntax {
                    line: line_num,
                    message: format!("unexpected trailing input '{}'", rest.trim()),
                });
            }
            Err(e) => {
                return Err(ScriptError::InvalidSyntax {
                    line: line_num,
                    message: e.to_string(),
                });
            }
        };

        lines.push(ScriptLine {
            line: line_num,
            command,
        });
    }

    Ok(lines)
}

/// Collect variable definitions
///
/// Format: `$name = value`. Later definitions override earlier ones.
pub fn collect_variables(content: &str) -> HashMap<String, String> {
    let mut variables = HashMap::new();

    for line in content.lines() {
        let line_trimmed = line.trim();

        if let Some(definition) = line_trimmed.strip_prefix('$') {
            if let Some((name, value)) = definition.split_once('=') {
                variables.insert(name.trim().to_string(), value.trim().to_string());
            }
        }
    }

    variables
}

/// Replace `$name` with its value
///
/// Longer names are substituted first so `$fruit` never eats the start
/// of `$fruits`.
pub fn substitute_variables(line: &str, variables: &HashMap<String, String>) -> String {
    let mut names: Vec<&String> = variables.keys().collect();
    names.sort_by_key(|name| std::cmp::Reverse(name.len()));

    let mut result = line.to_string();
    for name in names {
        result = result.replace(&format!("${}", name), &variables[name]);
    }

    result
}

/// First unresolved `$name` left in a line, if any
///
/// A `$` only starts a variable at the start of a token (line start, or
/// after whitespace, `,` or `=`) and when followed by a letter or `_`.
/// Anything else, like `price$usd` or `$5`, is literal text.
fn find_variable(line: &str) -> Option<&str> {
    let mut prev = None;

    for (i, c) in line.char_indices() {
        let at_token_start = matches!(prev, None | Some(',') | Some('='))
            || prev.is_some_and(char::is_whitespace);
        prev = Some(c);

        if c != '$' || !at_token_start {
            continue;
        }

        let rest = &line[i + 1..];
        if !rest.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
            continue;
        }

        let end = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        return Some(&rest[..end]);
    }

    None
}

/// Parse a single command line
///
/// Formats:
/// - `add = PREFIX, ITEM` or `add = ITEM`
/// - `delete | select | unselect | toggle = KEYREF`
/// - `select_all`, `unselect_all`, `clear`
pub fn parse_line(input: &str) -> IResult<&str, Command> {
    let (rest, word) = parse_keyword(input)?;

    let with_key: fn(KeyRef) -> Command = match word {
        "select_all" => return Ok((rest, Command::SelectAll)),
        "unselect_all" => return Ok((rest, Command::UnselectAll)),
        "clear" => return Ok((rest, Command::Clear)),
        "add" => {
            let (rest, _) = parse_assign(rest)?;
            return parse_add(rest);
        }
        "delete" => Command::Delete,
        "select" => Command::Select,
        "unselect" => Command::Unselect,
        "toggle" => Command::Toggle,
        _ => return Err(nom::Err::Error(Error::new(input, ErrorKind::Tag))),
    };

    let (rest, _) = parse_assign(rest)?;
    map(parse_key_ref, with_key).parse(rest)
}

/// Command keyword: letters and underscores
pub fn parse_keyword(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphabetic() || c == '_')(input)
}

fn parse_assign(input: &str) -> IResult<&str, ()> {
    let (input, _) = (space0, char('='), space0).parse(input)?;
    Ok((input, ()))
}

/// Parse the arguments of `add`
///
/// Everything before the first comma is the prefix; the rest of the line
/// is the item. Without a comma the prefix is empty.
pub fn parse_add(input: &str) -> IResult<&str, Command> {
    let (input, prefix) = opt(terminated(take_until(","), char(','))).parse(input)?;
    let (input, _) = space0(input)?;
    let (input, item) = take_while1(|c: char| c != '\n')(input)?;

    let item = item.trim();
    if item.is_empty() {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::TakeWhile1)));
    }

    Ok((
        input,
        Command::Add {
            prefix: prefix.map(|p: &str| p.trim().to_string()).unwrap_or_default(),
            item: item.to_string(),
        },
    ))
}

/// Parse a key reference
///
/// - `@N` → key returned by the N-th add (N ≥ 1)
/// - anything else without whitespace → literal key
pub fn parse_key_ref(input: &str) -> IResult<&str, KeyRef> {
    if let Some(rest) = input.strip_prefix('@') {
        let (rest, digits) = digit1(rest)?;
        return match digits.parse::<usize>() {
            Ok(index) if index > 0 => Ok((rest, KeyRef::Added(index))),
            _ => Err(nom::Err::Failure(Error::new(input, ErrorKind::Digit))),
        };
    }

    map(take_while1(|c: char| !c.is_whitespace()), |key: &str| {
        KeyRef::Literal(key.to_string())
    })
    .parse(input)
}
