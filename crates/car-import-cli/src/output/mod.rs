pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use colored::Colorize;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("{} {e}", "error:".red().bold()),
    }
}

/// Flatten nested objects into dotted keys (`breakdown.total`). Arrays and
/// scalars are left as leaf values.
pub fn flatten(map: &Map<String, Value>) -> Vec<(String, Value)> {
    let mut rows = Vec::new();
    flatten_into("", map, &mut rows);
    rows
}

fn flatten_into(prefix: &str, map: &Map<String, Value>, rows: &mut Vec<(String, Value)>) {
    for (key, val) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Object(inner) => flatten_into(&path, inner, rows),
            _ => rows.push((path, val.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_keys() {
        let v = json!({"country": {"id": "germany"}, "breakdown": {"total": "32784.5"}, "warnings": []});
        let rows = flatten(v.as_object().unwrap());
        let keys: Vec<&str> = rows.iter().map(|(k, _)| k.as_str()).collect();
        assert!(keys.contains(&"country.id"));
        assert!(keys.contains(&"breakdown.total"));
        assert!(keys.contains(&"warnings"));
    }
}
