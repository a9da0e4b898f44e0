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

use super::constants::*;
use super::error::Error;
use super::error::ParseErrorCode;
use super::error::ParseStatus;
use super::error::Result;
use super::number::convert_number;
use super::number::scan_float_candidate;
use super::number::validate_number;
use super::value::Value;

/// Parse JSON text holding a single scalar value.
///
/// The text is `null`, `true`, `false` or a number, optionally surrounded
/// by whitespace. A `\0` byte ends the input like a C string terminator.
pub fn parse_value(buf: &[u8]) -> Result<Value> {
    let mut parser = Parser::new(buf);
    parser.parse()
}

/// Parse JSON text into `value`, reporting the outcome as a status.
///
/// `value` is always overwritten: it holds the parsed value when the status
/// is `Ok` and `Value::Null` otherwise.
pub fn parse_into(value: &mut Value, buf: &[u8]) -> ParseStatus {
    let res = parse_value(buf);
    let status = ParseStatus::from(&res);
    *value = res.unwrap_or_default();
    status
}

struct Parser<'a> {
    buf: &'a [u8],
    idx: usize,
}

impl<'a> Parser<'a> {
    fn new(buf: &'a [u8]) -> Parser<'a> {
        let end = buf.iter().position(|c| *c == NUL).unwrap_or(buf.len());
        Self {
            buf: &buf[..end],
            idx: 0,
        }
    }

    fn parse(&mut self) -> Result<Value> {
        self.skip_whitespace();
        let val = self.parse_json_value()?;
        self.skip_whitespace();
        if self.idx < self.buf.len() {
            log::debug!("trailing characters after {} at pos {}", val.type_name(), self.idx);
            return Err(self.error(ParseErrorCode::RootNotSingular));
        }
        Ok(val)
    }

    fn parse_json_value(&mut self) -> Result<Value> {
        let Some(c) = self.peek() else {
            return Err(self.error(ParseErrorCode::ExpectValue));
        };
        log::trace!("dispatch {:?} at pos {}", c as char, self.idx);
        match c {
            b'n' => self.parse_json_literal(LITERAL_NULL, Value::Null),
            b't' => self.parse_json_literal(LITERAL_TRUE, Value::Bool(true)),
            b'f' => self.parse_json_literal(LITERAL_FALSE, Value::Bool(false)),
            _ => self.parse_json_number(),
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.buf.get(self.idx).copied()
    }

    #[inline]
    fn step_by(&mut self, n: usize) {
        self.idx += n;
    }

    fn error(&self, code: ParseErrorCode) -> Error {
        Error::Syntax(code, self.idx)
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !is_whitespace(c) {
                break;
            }
            self.idx += 1;
        }
    }

    /// The first byte of `literal` was matched by the dispatcher, the rest
    /// must follow exactly. The cursor only moves on a full match.
    fn parse_json_literal(&mut self, literal: &[u8], value: Value) -> Result<Value> {
        let rest = &self.buf[self.idx..];
        if rest.len() < literal.len() || rest[1..literal.len()] != literal[1..] {
            return Err(self.error(ParseErrorCode::InvalidValue));
        }
        self.step_by(literal.len());
        Ok(value)
    }

    /// Parse a JSON number.
    ///
    /// The lenient float scanner only locates how far a generic conversion
    /// would read. That span must then pass the number validator, which
    /// rejects the forms JSON does not allow (`+1`, `01`, `.5`, `1.`, `inf`,
    /// hex floats). The cursor is advanced only after the converted value
    /// is known to fit in an `f64`.
    fn parse_json_number(&mut self) -> Result<Value> {
        let rest = &self.buf[self.idx..];
        let len = scan_float_candidate(rest);
        if len == 0 {
            return Err(self.error(ParseErrorCode::InvalidValue));
        }
        let span = &rest[..len];
        if let Err(code) = validate_number(span) {
            return Err(self.error(Self::number_verdict(code)));
        }
        let n = convert_number(span).map_err(|code| self.error(code))?;
        self.step_by(len);
        Ok(Value::Number(n))
    }

    /// Bytes the validator refused after a complete number still belong to
    /// the scanned span, so they make the number itself invalid.
    #[cfg(not(feature = "validator-root-verdict"))]
    #[inline]
    fn number_verdict(code: ParseErrorCode) -> ParseErrorCode {
        match code {
            ParseErrorCode::RootNotSingular => ParseErrorCode::InvalidValue,
            code => code,
        }
    }

    #[cfg(feature = "validator-root-verdict")]
    #[inline]
    fn number_verdict(code: ParseErrorCode) -> ParseErrorCode {
        code
    }
}
