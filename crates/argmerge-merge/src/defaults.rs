//! One-level default seeding for argument lists.

use argmerge_types::{Key, Record, Value};
use tracing::debug;

use crate::UNDEFINED;

/// Shallow copy of `record` without keys whose value is undefined.
///
/// The prototype is kept.
pub fn remove_undefined_from_object(record: &Record) -> Record {
    let mut stripped = record.empty_like();
    for (key, value) in record {
        if !value.is_undefined() {
            stripped.insert(key.clone(), value.clone());
        }
    }
    stripped
}

/// Copy of `base` with `top`'s own properties assigned over it, one level
/// deep. The result keeps `base`'s prototype.
pub fn shallow_merge(base: &Record, top: &Record) -> Record {
    let mut merged = base.clone();
    for (key, value) in top {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Seed `passed_arg` from `default_arg` in place and return it.
///
/// For each position up to the longer list:
/// - both records: the default record with the passed record's defined
///   properties assigned on top;
/// - passed value falsy: the default value;
/// - otherwise the passed value is kept.
///
/// `default_arg` is not modified.
pub fn merge_default_parameter<'a>(
    default_arg: &[Value],
    passed_arg: &'a mut Vec<Value>,
) -> &'a mut Vec<Value> {
    debug!(
        defaults = default_arg.len(),
        passed = passed_arg.len(),
        "merging default parameters"
    );
    if passed_arg.len() < default_arg.len() {
        passed_arg.resize(default_arg.len(), Value::Undefined);
    }
    for (index, slot) in passed_arg.iter_mut().enumerate() {
        let default = default_arg.get(index).unwrap_or(&UNDEFINED);
        let seeded = match (&*slot, default) {
            (Value::Record(passed), Value::Record(base)) => Some(Value::Record(shallow_merge(
                base,
                &remove_undefined_from_object(passed),
            ))),
            (passed, _) if !passed.is_truthy() => Some(default.clone()),
            _ => None,
        };
        if let Some(value) = seeded {
            *slot = value;
        }
    }
    passed_arg
}

/// Assign each string-keyed property of `base` to `target` when the target's
/// current value for that key, own or inherited, is falsy.
pub fn shallow_merge_nonexisting_property_only<'a>(
    target: &'a mut Record,
    base: &Record,
) -> &'a mut Record {
    for (key, value) in base {
        if key.is_symbol() {
            continue;
        }
        if !target.lookup(key).is_some_and(Value::is_truthy) {
            target.insert(Key::clone(key), value.clone());
        }
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use argmerge_types::{Prototype, Shape, Symbol};
    use serde_json::json;

    fn list(json: serde_json::Value) -> Vec<Value> {
        match Value::from(json) {
            Value::Array(items) => items,
            other => panic!("expected a sequence, got {other:?}"),
        }
    }

    // -----------------------------------------------------------------------
    // remove_undefined_from_object
    // -----------------------------------------------------------------------

    #[test]
    fn strips_only_undefined() {
        let record = Record::new()
            .with("a", Value::Undefined)
            .with("b", Value::Null)
            .with("c", 0)
            .with("d", "");
        let stripped = remove_undefined_from_object(&record);
        let keys: Vec<&str> = stripped.string_keys().collect();
        assert_eq!(keys, vec!["b", "c", "d"]);
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn strip_keeps_prototype_and_symbols() {
        let proto = Prototype::new(Shape::class("Options"));
        let sym = Symbol::new("meta");
        let record = Record::instance_of(&proto).with(&sym, 1).with("gone", Value::Undefined);
        let stripped = remove_undefined_from_object(&record);
        assert!(stripped.prototype().same_identity(&proto));
        assert!(stripped.contains_key(&Key::from(&sym)));
        assert_eq!(stripped.len(), 1);
    }

    // -----------------------------------------------------------------------
    // merge_default_parameter
    // -----------------------------------------------------------------------

    #[test]
    fn absent_argument_takes_fallback() {
        let mut passed = vec![Value::Undefined];
        merge_default_parameter(&list(json!(["fallback"])), &mut passed);
        assert_eq!(passed, list(json!(["fallback"])));
    }

    #[test]
    fn falsy_arguments_take_defaults() {
        let mut passed = vec![Value::Null, Value::from(0), Value::from(""), Value::Bool(false)];
        merge_default_parameter(&list(json!(["a", "b", "c", "d"])), &mut passed);
        assert_eq!(passed, list(json!(["a", "b", "c", "d"])));
    }

    #[test]
    fn truthy_arguments_are_kept() {
        let mut passed = list(json!(["given", 7, [1]]));
        merge_default_parameter(&list(json!(["a", 1, {"x": 1}])), &mut passed);
        assert_eq!(passed, list(json!(["given", 7, [1]])));
    }

    #[test]
    fn records_merge_one_level_deep() {
        let mut passed = vec![Value::from(
            Record::new()
                .with("port", 8080)
                .with("host", Value::Undefined)
                .with("tls", Record::new().with("cert", "a.pem")),
        )];
        let defaults = list(json!([{"host": "localhost", "port": 80, "tls": {"cert": "d.pem", "key": "d.key"}}]));
        merge_default_parameter(&defaults, &mut passed);
        assert_eq!(
            passed,
            list(json!([{"host": "localhost", "port": 8080, "tls": {"cert": "a.pem"}}]))
        );
    }

    #[test]
    fn passed_list_grows_to_default_length() {
        let mut passed = list(json!(["x"]));
        merge_default_parameter(&list(json!(["a", "b"])), &mut passed);
        assert_eq!(passed, list(json!(["x", "b"])));
    }

    #[test]
    fn longer_passed_list_is_kept() {
        let mut passed = list(json!(["x", "y", null]));
        merge_default_parameter(&list(json!(["a"])), &mut passed);
        assert_eq!(passed, vec![Value::from("x"), Value::from("y"), Value::Undefined]);
    }

    #[test]
    fn defaults_are_not_modified() {
        let defaults = list(json!([{"a": 1}]));
        let snapshot = defaults.clone();
        let mut passed = list(json!([{"b": 2}]));
        merge_default_parameter(&defaults, &mut passed);
        assert_eq!(defaults, snapshot);
        assert_eq!(passed, list(json!([{"a": 1, "b": 2}])));
    }

    #[test]
    fn record_default_keeps_its_prototype() {
        let proto = Prototype::new(Shape::class("Options"));
        let defaults = vec![Value::from(Record::instance_of(&proto).with("a", 1))];
        let mut passed = list(json!([{"a": 2}]));
        merge_default_parameter(&defaults, &mut passed);
        let record = passed[0].as_record().unwrap();
        assert!(record.prototype().same_identity(&proto));
        assert_eq!(record.get_str("a"), Some(&Value::from(2)));
    }

    // -----------------------------------------------------------------------
    // shallow_merge_nonexisting_property_only
    // -----------------------------------------------------------------------

    #[test]
    fn fills_only_falsy_properties() {
        let mut target = Record::new().with("a", 1).with("b", 0).with("c", Value::Null);
        let base = Record::new().with("a", 10).with("b", 20).with("c", 30).with("d", 40);
        shallow_merge_nonexisting_property_only(&mut target, &base);
        assert_eq!(
            target,
            Record::new().with("a", 1).with("b", 20).with("c", 30).with("d", 40)
        );
    }

    #[test]
    fn inherited_truthy_member_blocks_fill() {
        let proto = Prototype::new(Shape::delegate("prototype").with_member("label", "inherited"));
        let mut target = Record::instance_of(&proto);
        let base = Record::new().with("label", "base");
        shallow_merge_nonexisting_property_only(&mut target, &base);
        assert!(target.is_empty());
    }

    #[test]
    fn symbol_keys_are_skipped() {
        let sym = Symbol::new("meta");
        let mut target = Record::new();
        shallow_merge_nonexisting_property_only(&mut target, &Record::new().with(&sym, 1));
        assert!(target.is_empty());
    }
}
