use serde_json::Value;

/// The path of a single document, `collection/key`, as used in logs and in
/// the failure journal.
pub fn document_path(collection: &str, key: &str) -> String {
    format!("{collection}/{key}")
}

/// Apply a field-level merge of `patch` onto `target`.
///
/// When both sides are objects, each top-level field of `patch` replaces the
/// field of the same name in `target`, and a `null` field removes it. Nested
/// objects are replaced wholesale, not merged recursively. Any other
/// combination replaces `target` entirely.
pub fn merge_document(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(fields), Value::Object(updates)) => {
            for (key, value) in updates {
                if value.is_null() {
                    fields.remove(&key);
                } else {
                    fields.insert(key, value);
                }
            }
        }
        (target, patch) => *target = patch,
    }
}
