//! Normalisation helpers for loosely-typed résumé input.
//!
//! Résumé JSON arrives from forms, so multi-value fields may be a list, a
//! comma-separated string or a newline-separated block. These helpers never
//! fail: malformed input degrades to an empty list or the caller's default.

use serde_json::Value;

/// Normalises `input` into an ordered list of trimmed, non-empty strings.
///
/// - absent / `null` → empty list
/// - string containing a newline → split on newlines, otherwise on commas
/// - array → each non-empty element stringified and trimmed
/// - any other scalar → single-element list unless it trims to empty
pub fn format_list_items(input: Option<&Value>) -> Vec<String> {
    match input {
        None | Some(Value::Null) => vec![],
        Some(Value::String(s)) => split_text(s),
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| is_truthy(item))
            .map(|item| value_to_string(item).trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
        Some(other) => {
            let s = value_to_string(other);
            let trimmed = s.trim();
            if trimmed.is_empty() {
                vec![]
            } else {
                vec![trimmed.to_string()]
            }
        }
    }
}

fn split_text(s: &str) -> Vec<String> {
    let separator = if s.contains('\n') { '\n' } else { ',' };
    s.split(separator)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns the trimmed string form of `record[key]`, or `default` when the key
/// is missing, `null`, falsy, blank, or `record` is not an object.
pub fn safe_get(record: &Value, key: &str, default: &str) -> String {
    match lookup(record, key) {
        Some(value) if is_truthy(value) => {
            let s = value_to_string(value);
            let trimmed = s.trim();
            if trimmed.is_empty() {
                default.to_string()
            } else {
                trimmed.to_string()
            }
        }
        _ => default.to_string(),
    }
}

/// Looks up a snake_case `key` on an object, falling back to its camelCase
/// spelling (`full_name` → `fullName`). The snake_case key wins if both exist.
pub fn lookup<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
    record.get(key).or_else(|| {
        if key.contains('_') {
            record.get(camel_case(key).as_str())
        } else {
            None
        }
    })
}

fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// String conversion used wherever input is coerced to text. Strings are
/// taken verbatim; other JSON values use their compact JSON form.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Presence test for loosely-typed input: `null`, `false`, `0`, `""`, `[]`
/// and `{}` all count as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fmt(v: Value) -> Vec<String> {
        format_list_items(Some(&v))
    }

    #[test]
    fn test_absent_and_null_yield_empty() {
        assert!(format_list_items(None).is_empty());
        assert!(fmt(Value::Null).is_empty());
    }

    #[test]
    fn test_comma_string_matches_list() {
        let expected = vec!["a", "b", "c"];
        assert_eq!(fmt(json!("a, b, c")), expected);
        assert_eq!(fmt(json!(["a", "b", "c"])), expected);
    }

    #[test]
    fn test_newlines_take_precedence_over_commas() {
        let items = fmt(json!("Led team, shipped v2\n  Cut costs by 30%  \n\n"));
        assert_eq!(items, vec!["Led team, shipped v2", "Cut costs by 30%"]);
    }

    #[test]
    fn test_empty_pieces_dropped() {
        assert_eq!(fmt(json!(" , a,, ,b ,")), vec!["a", "b"]);
        assert!(fmt(json!("   ")).is_empty());
    }

    #[test]
    fn test_list_elements_stringified_and_blank_dropped() {
        let items = fmt(json!(["  Rust ", "", null, 42, "   ", true]));
        assert_eq!(items, vec!["Rust", "42", "true"]);
    }

    #[test]
    fn test_scalar_wrapped() {
        assert_eq!(fmt(json!(3.5)), vec!["3.5"]);
        assert_eq!(fmt(json!(false)), vec!["false"]);
    }

    #[test]
    fn test_idempotent_on_clean_lists() {
        let once = fmt(json!(["x", " y ", "z, w"]));
        let twice = fmt(json!(once.clone()));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_safe_get_trims_and_defaults() {
        let record = json!({ "name": "  Ada  ", "blank": "   ", "none": null, "n": 7 });
        assert_eq!(safe_get(&record, "name", ""), "Ada");
        assert_eq!(safe_get(&record, "blank", "-"), "-");
        assert_eq!(safe_get(&record, "none", "-"), "-");
        assert_eq!(safe_get(&record, "missing", "dflt"), "dflt");
        assert_eq!(safe_get(&record, "n", ""), "7");
    }

    #[test]
    fn test_safe_get_on_non_object_returns_default() {
        assert_eq!(safe_get(&json!("text"), "key", "d"), "d");
        assert_eq!(safe_get(&json!([1, 2]), "key", "d"), "d");
    }

    #[test]
    fn test_lookup_accepts_camel_case_alias() {
        let record = json!({ "fullName": "Ada Lovelace", "start_date": "2020", "startDate": "1999" });
        assert_eq!(safe_get(&record, "full_name", ""), "Ada Lovelace");
        assert_eq!(safe_get(&record, "start_date", ""), "2020");
        assert!(lookup(&record, "graduation_date").is_none());
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!([0])));
    }
}
