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

use core::fmt::Display;

/// The reason a buffer was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorCode {
    /// The buffer was empty or held only whitespace.
    ExpectValue,
    /// A literal or number was malformed at the point examined.
    InvalidValue,
    /// A complete value was followed by more non-whitespace content.
    RootNotSingular,
    /// A well-formed number does not fit in an `f64`.
    NumberTooBig,
}

impl ParseErrorCode {
    pub fn status(&self) -> ParseStatus {
        match self {
            ParseErrorCode::ExpectValue => ParseStatus::ExpectValue,
            ParseErrorCode::InvalidValue => ParseStatus::InvalidValue,
            ParseErrorCode::RootNotSingular => ParseStatus::RootNotSingular,
            ParseErrorCode::NumberTooBig => ParseStatus::NumberTooBig,
        }
    }
}

impl Display for ParseErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            ParseErrorCode::ExpectValue => f.write_str("expected value"),
            ParseErrorCode::InvalidValue => f.write_str("invalid value"),
            ParseErrorCode::RootNotSingular => f.write_str("root not singular"),
            ParseErrorCode::NumberTooBig => f.write_str("number too big"),
        }
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Syntax error with the byte offset where it was detected.
    Syntax(ParseErrorCode, usize),
}

impl Error {
    pub fn code(&self) -> ParseErrorCode {
        match self {
            Error::Syntax(code, _) => *code,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Error::Syntax(_, pos) => *pos,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Syntax(code, pos) => write!(f, "{}, pos {}", code, pos),
        }
    }
}

impl std::error::Error for Error {}

/// Outcome of a single parse, one per call.
///
/// This is the flat status view used by [`crate::parse_into`]; every
/// variant except `Ok` corresponds to a [`ParseErrorCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseStatus {
    Ok,
    ExpectValue,
    InvalidValue,
    RootNotSingular,
    NumberTooBig,
}

impl ParseStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, ParseStatus::Ok)
    }
}

impl<T> From<&Result<T>> for ParseStatus {
    fn from(res: &Result<T>) -> Self {
        match res {
            Ok(_) => ParseStatus::Ok,
            Err(err) => err.code().status(),
        }
    }
}

impl Display for ParseStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseStatus::Ok => f.write_str("ok"),
            ParseStatus::ExpectValue => write!(f, "{}", ParseErrorCode::ExpectValue),
            ParseStatus::InvalidValue => write!(f, "{}", ParseErrorCode::InvalidValue),
            ParseStatus::RootNotSingular => write!(f, "{}", ParseErrorCode::RootNotSingular),
            ParseStatus::NumberTooBig => write!(f, "{}", ParseErrorCode::NumberTooBig),
        }
    }
}
