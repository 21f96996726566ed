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

//! View-layer glue with MVC architecture
//!
//! # Architecture
//!
//! - **Model**: MultiSelectStore (in the `core` module)
//! - **View**: supplied by the embedding application
//! - **Controller**: Shares the Model between view callbacks (in `controller.rs`)

pub mod controller;

pub use controller::Controller;

#[cfg(test)]
mod tests;
