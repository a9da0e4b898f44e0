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

use jscalar::{parse_value, ParseErrorCode, Value, ValueType};

fn test_parse_err(errors: &[(&str, &'static str)]) {
    for &(s, err) in errors {
        let res = parse_value(s.as_bytes());
        assert!(res.is_err(), "{s:?}");
        assert_eq!(res.err().unwrap().to_string(), err, "{s:?}");
    }
}

fn test_parse_ok(tests: Vec<(&str, Value)>) {
    for (s, val) in tests {
        assert_eq!(parse_value(s.as_bytes()).unwrap(), val, "{s:?}");
    }
}

fn check_parse_number(tests: &[(&str, f64)]) {
    for &(s, n) in tests {
        let val = parse_value(s.as_bytes()).unwrap();
        assert_eq!(val.value_type(), ValueType::Number, "{s:?}");
        assert_eq!(val.as_f64(), Some(n), "{s:?}");
    }
}

#[test]
fn test_parse_expect_value() {
    test_parse_err(&[
        ("", "expected value, pos 0"),
        (" ", "expected value, pos 1"),
        (" \t\n\r", "expected value, pos 4"),
        ("\0", "expected value, pos 0"),
    ]);
}

#[test]
fn test_parse_null() {
    test_parse_err(&[
        ("n", "invalid value, pos 0"),
        ("nul", "invalid value, pos 0"),
        ("nulx", "invalid value, pos 0"),
        (" Null", "invalid value, pos 1"),
        ("NULL", "invalid value, pos 0"),
        ("nulla", "root not singular, pos 4"),
    ]);

    test_parse_ok(vec![
        ("null", Value::Null),
        (" null ", Value::Null),
        ("\t\r\nnull\n", Value::Null),
    ]);
}

#[test]
fn test_parse_boolean() {
    test_parse_err(&[
        ("t", "invalid value, pos 0"),
        ("tru", "invalid value, pos 0"),
        ("True", "invalid value, pos 0"),
        ("TRUE", "invalid value, pos 0"),
        ("f", "invalid value, pos 0"),
        ("fals", "invalid value, pos 0"),
        ("faLse", "invalid value, pos 0"),
        ("truex", "root not singular, pos 4"),
        ("truetrue", "root not singular, pos 4"),
        ("false null", "root not singular, pos 6"),
    ]);

    test_parse_ok(vec![
        ("true", Value::Bool(true)),
        (" true ", Value::Bool(true)),
        ("false", Value::Bool(false)),
        ("\tfalse\r\n", Value::Bool(false)),
    ]);
}

#[test]
fn test_parse_number() {
    check_parse_number(&[
        ("0", 0.0),
        ("-0", 0.0),
        ("-0.0", 0.0),
        ("1", 1.0),
        ("-1", -1.0),
        ("1.5", 1.5),
        ("-1.5", -1.5),
        ("3.1416", 3.1416),
        ("1E10", 1E10),
        ("1e10", 1e10),
        ("1E+10", 1E+10),
        ("1E-10", 1E-10),
        ("-1E10", -1E10),
        ("-1e10", -1e10),
        ("-1E+10", -1E+10),
        ("-1E-10", -1E-10),
        ("1.234E+10", 1.234E+10),
        ("1.234E-10", 1.234E-10),
        ("1e-10000", 0.0),
        (" 42 ", 42.0),
        // the smallest number > 1
        ("1.0000000000000002", 1.0000000000000002),
        // minimum denormal
        ("4.9406564584124654e-324", 4.9406564584124654e-324),
        ("-4.9406564584124654e-324", -4.9406564584124654e-324),
        // max subnormal double
        ("2.2250738585072009e-308", 2.2250738585072009e-308),
        ("-2.2250738585072009e-308", -2.2250738585072009e-308),
        // min normal positive double
        ("2.2250738585072014e-308", 2.2250738585072014e-308),
        ("-2.2250738585072014e-308", -2.2250738585072014e-308),
        // max double
        ("1.7976931348623157e+308", 1.7976931348623157e+308),
        ("-1.7976931348623157e+308", -1.7976931348623157e+308),
    ]);
}

#[test]
fn test_parse_number_negative_zero() {
    let val = parse_value(b"-0").unwrap();
    assert!(val.as_f64().unwrap().is_sign_negative());
}

#[test]
fn test_parse_number_errors() {
    test_parse_err(&[
        ("+0", "invalid value, pos 0"),
        ("+1", "invalid value, pos 0"),
        (".123", "invalid value, pos 0"),
        (".5", "invalid value, pos 0"),
        ("1.", "invalid value, pos 0"),
        ("-", "invalid value, pos 0"),
        ("-.5", "invalid value, pos 0"),
        ("1e", "invalid value, pos 0"),
        ("1e+", "invalid value, pos 0"),
        (" 1E-", "invalid value, pos 1"),
        ("INF", "invalid value, pos 0"),
        ("inf", "invalid value, pos 0"),
        ("-Infinity", "invalid value, pos 0"),
        ("NAN", "invalid value, pos 0"),
        ("nan", "invalid value, pos 0"),
        ("NaN", "invalid value, pos 0"),
        ("?", "invalid value, pos 0"),
        ("x1", "invalid value, pos 0"),
    ]);
}

#[cfg(not(feature = "validator-root-verdict"))]
#[test]
fn test_parse_number_bad_continuation() {
    test_parse_err(&[
        ("01", "invalid value, pos 0"),
        ("0123", "invalid value, pos 0"),
        ("0x0", "invalid value, pos 0"),
        ("0x1", "invalid value, pos 0"),
        ("0x123", "invalid value, pos 0"),
        (" -0x1p3", "invalid value, pos 1"),
    ]);
}

#[test]
fn test_parse_root_not_singular() {
    test_parse_err(&[
        ("123abc", "root not singular, pos 3"),
        ("1 2", "root not singular, pos 2"),
        ("1.5.2", "root not singular, pos 3"),
        ("1e5e5", "root not singular, pos 3"),
        ("-1,", "root not singular, pos 2"),
        ("null x", "root not singular, pos 5"),
        ("0 0", "root not singular, pos 2"),
        ("1\x0c", "root not singular, pos 1"),
    ]);
}

#[test]
fn test_parse_number_too_big() {
    test_parse_err(&[
        ("1e309", "number too big, pos 0"),
        ("1e400", "number too big, pos 0"),
        ("-1e400", "number too big, pos 0"),
        (" 1.8e308 ", "number too big, pos 1"),
    ]);
}

#[test]
fn test_parse_error_code() {
    let cases = [
        ("", ParseErrorCode::ExpectValue),
        ("nul", ParseErrorCode::InvalidValue),
        ("1 2", ParseErrorCode::RootNotSingular),
        ("1e400", ParseErrorCode::NumberTooBig),
    ];
    for (s, code) in cases {
        let err = parse_value(s.as_bytes()).unwrap_err();
        assert_eq!(err.code(), code);
    }
}

#[test]
fn test_parse_from_str() {
    let val: Value = "  -2.5e-1 ".parse().unwrap();
    assert_eq!(val, Value::Number(-0.25));
    assert!("True".parse::<Value>().is_err());
}

#[test]
fn test_parse_idempotent() {
    for s in ["null", "true", "false", "0", "-12.75e3", "4.9406564584124654e-324"] {
        let v1 = parse_value(s.as_bytes()).unwrap();
        let v2 = parse_value(s.as_bytes()).unwrap();
        assert_eq!(v1.value_type(), v2.value_type());
        assert_eq!(v1.as_f64().map(f64::to_bits), v2.as_f64().map(f64::to_bits));
    }
}

#[test]
fn test_parse_concurrent() {
    let inputs = ["null", "true", "false", "1.5", "-1e-3", "01", "1e400"];
    let expected: Vec<_> = inputs.iter().map(|s| parse_value(s.as_bytes())).collect();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    for (s, want) in inputs.iter().zip(expected.iter()) {
                        assert_eq!(&parse_value(s.as_bytes()), want);
                    }
                }
            });
        }
    });
}
