// Copyright 2023 Datafuse Labs.
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

//! `jscalar` is a strict parser for JSON text holding a single scalar value:
//! `null`, `true`, `false` or a number.
//!
//! ## Numbers
//!
//! A number must match `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?` exactly.
//! Parsing first asks a lenient, C-style float scanner how far a conversion
//! would read, then runs that span through a table-driven state machine that
//! is the only authority on what is a valid number:
//!
//! ```text
//! state 0 start       '-' -> 1   '0' -> 2   '1'..'9' -> 3
//! state 1 minus       '0' -> 2   '1'..'9' -> 3
//! state 2 zero        '.' -> 4   'e' | 'E' -> 5                     (accepting)
//! state 3 integer     '0'..'9' -> 3   '.' -> 4   'e' | 'E' -> 5      (accepting)
//! state 4 point       '0'..'9' -> 6
//! state 5 exponent    '+' | '-' -> 7   '0'..'9' -> 8
//! state 6 fraction    '0'..'9' -> 6   'e' | 'E' -> 5                 (accepting)
//! state 7 exp sign    '0'..'9' -> 8
//! state 8 exp digits  '0'..'9' -> 8                                  (accepting)
//! ```
//!
//! ## Errors
//!
//! Every failure is one of four codes, see [`ParseErrorCode`]:
//!
//! - `ExpectValue`: the input is empty or only whitespace.
//! - `InvalidValue`: a literal or number is malformed (`tru`, `+1`, `1.`, `0x1`).
//! - `RootNotSingular`: a complete value is followed by more content (`1 2`).
//! - `NumberTooBig`: a well-formed number overflows `f64` (`1e400`).
//!
//! ```
//! use jscalar::{parse_value, ParseErrorCode, Value};
//!
//! assert_eq!(parse_value(b" -1.5e2 ").unwrap(), Value::Number(-150.0));
//! assert_eq!(parse_value(b"true").unwrap(), Value::Bool(true));
//! assert_eq!(
//!     parse_value(b"1e400").unwrap_err().code(),
//!     ParseErrorCode::NumberTooBig
//! );
//! ```

#![allow(clippy::uninlined_format_args)]

mod constants;
mod error;
mod from;
mod number;
mod parser;
mod value;

pub use error::Error;
pub use error::ParseErrorCode;
pub use error::ParseStatus;
pub use error::Result;
pub use number::validate_number;
pub use parser::parse_into;
pub use parser::parse_value;
pub use value::*;
