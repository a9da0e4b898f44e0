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

use std::cmp::Ordering;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use ordered_float::OrderedFloat;

use crate::constants::*;
use crate::error::Error;
use crate::parser::parse_value;

/// Represents a scalar JSON value.
///
/// Only the scalar kinds are supported: `null`, `true`, `false` and numbers.
/// A number is always stored as an `f64`, so the payload can only be read
/// from a value that actually holds one.
#[derive(Debug, Clone, Copy, Default)]
pub enum Value {
    /// Represents a JSON null value
    #[default]
    Null,
    /// Represents a JSON boolean value (true or false)
    Bool(bool),
    /// Represents a finite JSON number
    Number(f64),
}

/// The tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Null => f.write_str("null"),
            ValueType::False => f.write_str("false"),
            ValueType::True => f.write_str("true"),
            ValueType::Number => f.write_str("number"),
        }
    }
}

impl Eq for Value {}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Number(v1), Value::Number(v2)) => {
                OrderedFloat(*v1).cmp(&OrderedFloat(*v2))
            }
            (_, _) => self.level().cmp(&other.level()),
        }
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_value(s.as_bytes())
    }
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(false) => ValueType::False,
            Value::Bool(true) => ValueType::True,
            Value::Number(_) => ValueType::Number,
        }
    }

    /// The JSON type name of the value, as reported by `json_typeof`-like functions.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => TYPE_NULL,
            Value::Bool(_) => TYPE_BOOLEAN,
            Value::Number(_) => TYPE_NUMBER,
        }
    }

    pub fn is_null(&self) -> bool {
        self.as_null().is_some()
    }

    pub fn as_null(&self) -> Option<()> {
        match self {
            Value::Null => Some(()),
            _ => None,
        }
    }

    pub fn is_boolean(&self) -> bool {
        self.as_bool().is_some()
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        self.as_f64().is_some()
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    fn level(&self) -> u8 {
        match self {
            Value::Null => NULL_LEVEL,
            Value::Number(_) => NUMBER_LEVEL,
            Value::Bool(true) => TRUE_LEVEL,
            Value::Bool(false) => FALSE_LEVEL,
        }
    }
}
