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

use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::char;
use nom::character::complete::digit0;
use nom::character::complete::digit1;
use nom::character::complete::hex_digit0;
use nom::character::complete::one_of;
use nom::combinator::opt;
use nom::combinator::recognize;
use nom::combinator::verify;
use nom::IResult;
use nom::Parser;

use crate::error::ParseErrorCode;

/// A single transition rule of the number state machine.
#[derive(Debug, Clone, Copy)]
enum Pattern {
    /// Matches exactly this byte.
    Byte(u8),
    /// Matches any byte in the inclusive range.
    Range(u8, u8),
}

impl Pattern {
    #[inline]
    fn matches(&self, c: u8) -> bool {
        match *self {
            Pattern::Byte(b) => c == b,
            Pattern::Range(lo, hi) => (lo..=hi).contains(&c),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    pattern: Pattern,
    next: usize,
}

const fn byte(c: u8, next: usize) -> Transition {
    Transition {
        pattern: Pattern::Byte(c),
        next,
    }
}

const fn range(lo: u8, hi: u8, next: usize) -> Transition {
    Transition {
        pattern: Pattern::Range(lo, hi),
        next,
    }
}

const START: usize = 0;
const MINUS: usize = 1;
const ZERO: usize = 2;
const INTEGER: usize = 3;
const POINT: usize = 4;
const EXP_MARK: usize = 5;
const FRACTION: usize = 6;
const EXP_SIGN: usize = 7;
const EXP_DIGITS: usize = 8;

/// Transitions of `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`,
/// indexed by state. Rules of a state are tried in order.
static STATE_TABLE: [&[Transition]; 9] = [
    // START
    &[byte(b'-', MINUS), byte(b'0', ZERO), range(b'1', b'9', INTEGER)],
    // MINUS
    &[byte(b'0', ZERO), range(b'1', b'9', INTEGER)],
    // ZERO
    &[byte(b'.', POINT), byte(b'e', EXP_MARK), byte(b'E', EXP_MARK)],
    // INTEGER
    &[
        range(b'0', b'9', INTEGER),
        byte(b'.', POINT),
        byte(b'e', EXP_MARK),
        byte(b'E', EXP_MARK),
    ],
    // POINT
    &[range(b'0', b'9', FRACTION)],
    // EXP_MARK
    &[
        byte(b'+', EXP_SIGN),
        byte(b'-', EXP_SIGN),
        range(b'0', b'9', EXP_DIGITS),
    ],
    // FRACTION
    &[
        range(b'0', b'9', FRACTION),
        byte(b'e', EXP_MARK),
        byte(b'E', EXP_MARK),
    ],
    // EXP_SIGN
    &[range(b'0', b'9', EXP_DIGITS)],
    // EXP_DIGITS
    &[range(b'0', b'9', EXP_DIGITS)],
];

#[inline]
fn is_accepting(state: usize) -> bool {
    matches!(state, ZERO | INTEGER | FRACTION | EXP_DIGITS)
}

#[inline]
fn next_state(state: usize, c: u8) -> Option<usize> {
    STATE_TABLE[state]
        .iter()
        .find(|t| t.pattern.matches(c))
        .map(|t| t.next)
}

/// Check that `span` is exactly one JSON number.
///
/// A span that stops in the middle of the grammar (`1.`, `1e`, `-`) or that
/// starts with something the grammar never allows (`+1`, `.5`, `inf`) is
/// `InvalidValue`. A span whose leading part is already a complete number
/// but continues with bytes that cannot extend it (`01`, `0x1`, `1.5.2`)
/// is `RootNotSingular`.
pub fn validate_number(span: &[u8]) -> Result<(), ParseErrorCode> {
    let mut state = START;
    for (i, c) in span.iter().enumerate() {
        match next_state(state, *c) {
            Some(next) => state = next,
            None => {
                let code = if is_accepting(state) {
                    ParseErrorCode::RootNotSingular
                } else {
                    ParseErrorCode::InvalidValue
                };
                log::debug!(
                    "number rejected at byte {} ({:?}) in state {}: {}",
                    i,
                    *c as char,
                    state,
                    code
                );
                return Err(code);
            }
        }
    }
    if is_accepting(state) {
        Ok(())
    } else {
        log::debug!("number ends in non-accepting state {}", state);
        Err(ParseErrorCode::InvalidValue)
    }
}

fn sign(input: &[u8]) -> IResult<&[u8], Option<char>> {
    opt(one_of("+-")).parse(input)
}

fn hex_float(input: &[u8]) -> IResult<&[u8], &[u8]> {
    recognize((
        tag_no_case("0x"),
        verify(
            recognize((hex_digit0, opt((char('.'), hex_digit0)))),
            |s: &[u8]| s.iter().any(u8::is_ascii_hexdigit),
        ),
        opt((one_of("pP"), sign, digit1)),
    ))
    .parse(input)
}

fn special_float(input: &[u8]) -> IResult<&[u8], &[u8]> {
    alt((
        tag_no_case("infinity"),
        tag_no_case("inf"),
        tag_no_case("nan"),
    ))
    .parse(input)
}

fn decimal_float(input: &[u8]) -> IResult<&[u8], &[u8]> {
    recognize((
        verify(
            recognize((digit0, opt((char('.'), digit0)))),
            |s: &[u8]| s.iter().any(u8::is_ascii_digit),
        ),
        // a dangling exponent mark is swallowed, the validator rejects it
        opt((one_of("eE"), sign, digit0)),
    ))
    .parse(input)
}

/// Number of leading bytes of `buf` a lenient C-style float conversion
/// would consume, or 0 if it would not convert anything.
///
/// This accepts far more than JSON does (signs, hex floats, `inf`, `nan`,
/// bare `.5`, trailing `1.` or `1e`); its span must go through
/// [`validate_number`].
pub(crate) fn scan_float_candidate(buf: &[u8]) -> usize {
    match recognize((sign, alt((hex_float, special_float, decimal_float)))).parse(buf) {
        Ok((_, span)) => span.len(),
        Err(_) => 0,
    }
}

/// Convert a validated number span to `f64`.
///
/// Overflow is part of the result: a magnitude beyond `f64::MAX` is
/// `NumberTooBig` rather than an infinite value.
pub(crate) fn convert_number(span: &[u8]) -> Result<f64, ParseErrorCode> {
    match fast_float2::parse::<f64, _>(span) {
        Ok(v) if v.is_infinite() => Err(ParseErrorCode::NumberTooBig),
        Ok(v) => Ok(v),
        Err(_) => Err(ParseErrorCode::InvalidValue),
    }
}
