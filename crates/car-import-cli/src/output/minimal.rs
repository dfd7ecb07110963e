use serde_json::Value;

/// Print just the headline figure from the output.
///
/// Prefers the formatted total of an estimate, then the raw total, then
/// falls back to the first field of the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_paths: [&[&str]; 4] = [
        &["formatted", "total"],
        &["breakdown", "total"],
        &["total"],
        &["id"],
    ];

    for path in &priority_paths {
        if let Some(val) = lookup_path(result_obj, path) {
            if !val.is_null() {
                println!("{}", format_minimal(val));
                return;
            }
        }
    }

    // Country listings: one id per line
    if let Some(Value::Array(rows)) = value.as_object().and_then(|m| m.get("results")) {
        for row in rows {
            if let Some(id) = row.get("id") {
                println!("{}", format_minimal(id));
            }
        }
        return;
    }

    if let Value::Object(map) = result_obj {
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn lookup_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |v, key| v.get(*key))
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
