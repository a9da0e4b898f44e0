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

use ordered_float::OrderedFloat;
use serde_json::Number as JsonNumber;
use serde_json::Value as JsonValue;

use crate::error::Error;
use crate::error::ParseErrorCode;
use crate::value::Value;

macro_rules! from_float {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

from_float! {
    f32 f64
}

impl From<OrderedFloat<f64>> for Value {
    fn from(f: OrderedFloat<f64>) -> Self {
        Value::Number(f.0)
    }
}

impl From<bool> for Value {
    fn from(f: bool) -> Self {
        Value::Bool(f)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl TryFrom<&JsonValue> for Value {
    type Error = Error;

    /// Only scalar values convert; strings, arrays and objects are refused.
    fn try_from(value: &JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::Null => Ok(Value::Null),
            JsonValue::Bool(v) => Ok(Value::Bool(*v)),
            JsonValue::Number(v) => v
                .as_f64()
                .map(Value::Number)
                .ok_or(Error::Syntax(ParseErrorCode::InvalidValue, 0)),
            JsonValue::String(_) | JsonValue::Array(_) | JsonValue::Object(_) => {
                Err(Error::Syntax(ParseErrorCode::InvalidValue, 0))
            }
        }
    }
}

impl TryFrom<JsonValue> for Value {
    type Error = Error;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        Value::try_from(&value)
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(v) => JsonValue::Bool(v),
            // If the value is NaN or Infinity, fallback to NULL
            Value::Number(v) => JsonNumber::from_f64(v)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
        }
    }
}
