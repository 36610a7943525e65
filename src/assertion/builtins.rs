use serde_json::Value;

use super::AssertionResolver;
use crate::error::AssertionError;

pub(super) fn register(resolver: &mut AssertionResolver) {
    resolver.bind_fn("to_equal", to_equal);
    resolver.bind_fn("not_to_equal", not_to_equal);
    resolver.bind_fn("to_be_null", to_be_null);
    resolver.bind_fn("to_be_true", to_be_true);
    resolver.bind_fn("to_be_false", to_be_false);
    resolver.bind_fn("to_contain", to_contain);
    resolver.bind_fn("to_have_length", to_have_length);
}

fn expect_args<'a>(
    assertion: &str,
    args: &'a [Value],
    expected: usize,
) -> Result<&'a [Value], AssertionError> {
    if args.len() == expected {
        Ok(args)
    } else {
        Err(AssertionError::arity(assertion, expected, args.len()))
    }
}

fn to_equal(topic: &Value, args: &[Value]) -> Result<(), AssertionError> {
    let expected = &expect_args("to_equal", args, 1)?[0];
    if topic == expected {
        Ok(())
    } else {
        Err(AssertionError::failed(
            "to_equal",
            format!("expected {topic} to equal {expected}"),
        ))
    }
}

fn not_to_equal(topic: &Value, args: &[Value]) -> Result<(), AssertionError> {
    let unexpected = &expect_args("not_to_equal", args, 1)?[0];
    if topic != unexpected {
        Ok(())
    } else {
        Err(AssertionError::failed(
            "not_to_equal",
            format!("expected {topic} not to equal {unexpected}"),
        ))
    }
}

fn to_be_null(topic: &Value, args: &[Value]) -> Result<(), AssertionError> {
    expect_args("to_be_null", args, 0)?;
    if topic.is_null() {
        Ok(())
    } else {
        Err(AssertionError::failed(
            "to_be_null",
            format!("expected {topic} to be null"),
        ))
    }
}

fn to_be_true(topic: &Value, args: &[Value]) -> Result<(), AssertionError> {
    expect_args("to_be_true", args, 0)?;
    match topic {
        Value::Bool(true) => Ok(()),
        _ => Err(AssertionError::failed(
            "to_be_true",
            format!("expected {topic} to be true"),
        )),
    }
}

fn to_be_false(topic: &Value, args: &[Value]) -> Result<(), AssertionError> {
    expect_args("to_be_false", args, 0)?;
    match topic {
        Value::Bool(false) => Ok(()),
        _ => Err(AssertionError::failed(
            "to_be_false",
            format!("expected {topic} to be false"),
        )),
    }
}

fn to_contain(topic: &Value, args: &[Value]) -> Result<(), AssertionError> {
    let item = &expect_args("to_contain", args, 1)?[0];
    let found = match (topic, item) {
        (Value::Array(items), _) => items.contains(item),
        (Value::String(haystack), Value::String(needle)) => haystack.contains(needle.as_str()),
        (Value::Object(map), Value::String(key)) => map.contains_key(key),
        _ => false,
    };

    if found {
        Ok(())
    } else {
        Err(AssertionError::failed(
            "to_contain",
            format!("expected {topic} to contain {item}"),
        ))
    }
}

fn to_have_length(topic: &Value, args: &[Value]) -> Result<(), AssertionError> {
    let expected = &expect_args("to_have_length", args, 1)?[0];
    let length = match topic {
        Value::Array(items) => Some(items.len()),
        Value::String(s) => Some(s.chars().count()),
        Value::Object(map) => Some(map.len()),
        _ => None,
    };

    match (length, expected.as_u64()) {
        (Some(actual), Some(wanted)) if actual as u64 == wanted => Ok(()),
        (Some(actual), _) => Err(AssertionError::failed(
            "to_have_length",
            format!("expected {topic} to have length {expected}, but it has {actual}"),
        )),
        (None, _) => Err(AssertionError::failed(
            "to_have_length",
            format!("{topic} has no length"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolver() -> AssertionResolver {
        AssertionResolver::with_builtins()
    }

    #[test]
    fn test_builtins_are_bound() {
        let resolver = resolver();
        assert_eq!(
            resolver.names(),
            vec![
                "not_to_equal",
                "to_be_false",
                "to_be_null",
                "to_be_true",
                "to_contain",
                "to_equal",
                "to_have_length",
            ]
        );
    }

    #[test]
    fn test_to_equal() {
        let resolver = resolver();
        assert!(resolver.check("to_equal", &json!({"a": 1}), &[json!({"a": 1})]).is_ok());

        let err = resolver.check("to_equal", &json!(1), &[json!(2)]).unwrap_err();
        assert_eq!(err.to_string(), "to_equal: expected 1 to equal 2");
    }

    #[test]
    fn test_not_to_equal() {
        let resolver = resolver();
        assert!(resolver.check("not_to_equal", &json!("a"), &[json!("b")]).is_ok());
        assert!(resolver.check("not_to_equal", &json!("a"), &[json!("a")]).is_err());
    }

    #[test]
    fn test_null_and_booleans() {
        let resolver = resolver();
        assert!(resolver.check("to_be_null", &Value::Null, &[]).is_ok());
        assert!(resolver.check("to_be_null", &json!(0), &[]).is_err());
        assert!(resolver.check("to_be_true", &json!(true), &[]).is_ok());
        assert!(resolver.check("to_be_true", &json!(1), &[]).is_err());
        assert!(resolver.check("to_be_false", &json!(false), &[]).is_ok());
        assert!(resolver.check("to_be_false", &Value::Null, &[]).is_err());
    }

    #[test]
    fn test_to_contain() {
        let resolver = resolver();
        assert!(resolver.check("to_contain", &json!([1, 2, 3]), &[json!(2)]).is_ok());
        assert!(resolver.check("to_contain", &json!("vows"), &[json!("ow")]).is_ok());
        assert!(resolver.check("to_contain", &json!({"key": 1}), &[json!("key")]).is_ok());
        assert!(resolver.check("to_contain", &json!([1, 2, 3]), &[json!(4)]).is_err());
        assert!(resolver.check("to_contain", &json!(5), &[json!(5)]).is_err());
    }

    #[test]
    fn test_to_have_length() {
        let resolver = resolver();
        assert!(resolver.check("to_have_length", &json!([1, 2]), &[json!(2)]).is_ok());
        assert!(resolver.check("to_have_length", &json!("héllo"), &[json!(5)]).is_ok());

        let err = resolver.check("to_have_length", &json!([1]), &[json!(3)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "to_have_length: expected [1] to have length 3, but it has 1"
        );
        assert!(resolver.check("to_have_length", &json!(true), &[json!(1)]).is_err());
    }

    #[test]
    fn test_wrong_arity() {
        let resolver = resolver();
        let err = resolver.check("to_equal", &json!(1), &[]).unwrap_err();
        assert_eq!(err, AssertionError::arity("to_equal", 1, 0));
    }
}
