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

// JSON text literals
pub(crate) const LITERAL_NULL: &[u8] = b"null";
pub(crate) const LITERAL_TRUE: &[u8] = b"true";
pub(crate) const LITERAL_FALSE: &[u8] = b"false";

// Input terminator, everything after it is ignored
pub(crate) const NUL: u8 = b'\0';

// Value compare level
pub(crate) const NULL_LEVEL: u8 = 7;
pub(crate) const NUMBER_LEVEL: u8 = 3;
pub(crate) const TRUE_LEVEL: u8 = 2;
pub(crate) const FALSE_LEVEL: u8 = 1;

pub(crate) const TYPE_NULL: &str = "null";
pub(crate) const TYPE_BOOLEAN: &str = "boolean";
pub(crate) const TYPE_NUMBER: &str = "number";

/// Only space, horizontal tab, line feed and carriage return separate tokens.
#[inline]
pub(crate) fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r')
}
