//! Own-property check.

use objkit_graph::Value;

/// Whether `value` carries `key` as its own property.
///
/// Objects answer for their keys; sequences answer for in-bounds indices
/// and their `length`; everything else has no own properties.
pub fn has_own(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(obj) => obj.has(key),
        Value::Array(seq) => {
            if key == "length" {
                return true;
            }
            match key.parse::<usize>() {
                Ok(index) => index < seq.len(),
                Err(_) => false,
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_keys() {
        let obj = Value::object_from([("a", Value::from(1.0)), ("a.b", Value::from(2.0))]);
        assert!(has_own(&obj, "a"));
        // a dotted key is a perfectly ordinary own property
        assert!(has_own(&obj, "a.b"));
        assert!(!has_own(&obj, "b"));
    }

    #[test]
    fn test_array_indices_and_length() {
        let arr = Value::array_from([Value::from(1.0), Value::from(2.0)]);
        assert!(has_own(&arr, "0"));
        assert!(has_own(&arr, "1"));
        assert!(!has_own(&arr, "2"));
        assert!(has_own(&arr, "length"));
        assert!(!has_own(&arr, "x"));
    }

    #[test]
    fn test_primitives_have_no_own_properties() {
        assert!(!has_own(&Value::from("abc"), "0"));
        assert!(!has_own(&Value::Null, "a"));
    }
}
