//! Response-shape normalization.
//!
//! The backend's enveloping is inconsistent across endpoints: sometimes
//! `{"data": [...]}`, sometimes `{"achievements": [...]}`, sometimes a bare
//! array. These helpers let callers treat all of them uniformly instead of
//! special-casing every endpoint. Ambiguous shapes resolve via the fixed
//! key-priority order below; this is a best-effort heuristic, not a
//! contract.

use std::collections::HashSet;

use serde_json::Value;

/// Wrapper keys scanned in priority order.
const COLLECTION_KEYS: [&str; 12] = [
    "data",
    "items",
    "results",
    "achievements",
    "records",
    "entries",
    "list",
    "modules",
    "leaderboard",
    "accessible",
    "locked",
    "values",
];

/// Unwraps the innermost meaningful payload of a response value.
///
/// Arrays and scalars are terminal. Objects are unwrapped through the first
/// candidate key present, recursively; an object with no candidate key is
/// assumed to already be the payload (e.g. a single record).
pub fn extract_data(input: &Value) -> &Value {
    let mut visited = HashSet::new();
    extract_inner(input, &mut visited)
}

fn extract_inner<'a>(input: &'a Value, visited: &mut HashSet<usize>) -> &'a Value {
    let Value::Object(map) = input else {
        return input;
    };

    // Revisiting a node ends the walk. `Value` trees cannot alias, so this
    // is a structural backstop rather than a reachable branch.
    if !visited.insert(input as *const Value as usize) {
        return input;
    }

    for key in COLLECTION_KEYS {
        if let Some(nested) = map.get(key) {
            if !std::ptr::eq(nested, input) {
                return extract_inner(nested, visited);
            }
        }
    }

    input
}

/// Finite numbers pass through; numeric-looking strings are coerced.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => s.parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Recursively searches arrays and objects for the first coercible numeric
/// value, matching object fields against the caller-supplied candidate keys.
/// `None` is the "not found" sentinel; display fallbacks are the caller's
/// business.
pub fn find_numeric_value(value: &Value, keys: &[&str]) -> Option<f64> {
    if let Some(direct) = coerce_number(value) {
        return Some(direct);
    }

    match value {
        Value::Array(items) => items.iter().find_map(|item| find_numeric_value(item, keys)),
        Value::Object(map) => keys
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(|nested| find_numeric_value(nested, keys)),
        _ => None,
    }
}

/// Whether a value is worth rendering at all.
pub fn has_meaningful_data(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn extract_unwraps_nested_candidate_keys() {
        let input = json!({ "data": { "items": [1, 2, 3] } });
        assert_eq!(extract_data(&input), &json!([1, 2, 3]));
    }

    #[test]
    fn extract_returns_arrays_unchanged() {
        // arrays are terminal even when their elements look like wrappers
        let input = json!([{ "data": [1] }, 2]);
        assert_eq!(extract_data(&input), &input);
    }

    #[test]
    fn extract_returns_scalars_and_null_unchanged() {
        assert_eq!(extract_data(&Value::Null), &Value::Null);
        assert_eq!(extract_data(&json!(5)), &json!(5));
        assert_eq!(extract_data(&json!("plain")), &json!("plain"));
    }

    #[test]
    fn extract_falls_back_to_the_object_itself() {
        let input = json!({ "id": "m1", "title": "Module" });
        assert_eq!(extract_data(&input), &input);
    }

    #[test]
    fn extract_respects_key_priority() {
        // "data" outranks "modules" regardless of field order
        let input = json!({ "modules": [1], "data": [2] });
        assert_eq!(extract_data(&input), &json!([2]));
    }

    #[test]
    fn extract_terminates_on_deep_wrapper_chains() {
        let mut input = json!([1]);
        for _ in 0..200 {
            input = json!({ "data": input });
        }
        assert_eq!(extract_data(&input), &json!([1]));
    }

    #[test]
    fn extract_unwraps_envelope_to_single_record() {
        let input = json!({ "data": { "total_points": 12 } });
        assert_eq!(extract_data(&input), &json!({ "total_points": 12 }));
    }

    #[test]
    fn coerce_handles_numbers_and_numeric_strings() {
        assert_eq!(coerce_number(&json!(7)), Some(7.0));
        assert_eq!(coerce_number(&json!("42")), Some(42.0));
        assert_eq!(coerce_number(&json!("7.5")), Some(7.5));
        assert_eq!(coerce_number(&json!("points")), None);
        assert_eq!(coerce_number(&json!("")), None);
        assert_eq!(coerce_number(&json!(true)), None);
    }

    #[test]
    fn find_numeric_coerces_string_metric() {
        let input = json!({ "total_points": "42" });
        assert_eq!(find_numeric_value(&input, &["total_points"]), Some(42.0));
    }

    #[test]
    fn find_numeric_missing_key_is_none() {
        assert_eq!(find_numeric_value(&json!({}), &["total_points"]), None);
    }

    #[test]
    fn find_numeric_descends_arrays_and_objects() {
        let input = json!([{ "summary": { "points": 9 } }]);
        assert_eq!(find_numeric_value(&input, &["summary", "points"]), Some(9.0));
    }

    #[test]
    fn find_numeric_ignores_non_candidate_keys() {
        let input = json!({ "unrelated": 3 });
        assert_eq!(find_numeric_value(&input, &["points"]), None);
    }

    #[test]
    fn meaningful_data_checks() {
        assert!(!has_meaningful_data(&Value::Null));
        assert!(!has_meaningful_data(&json!([])));
        assert!(!has_meaningful_data(&json!({})));
        assert!(has_meaningful_data(&json!([1])));
        assert!(has_meaningful_data(&json!({ "a": 1 })));
        assert!(has_meaningful_data(&json!(0)));
    }
}
