//! Descriptor file loading.
//!
//! Parses via serde_yaml, then converts to `serde_json::Value` for uniform
//! shape checks. The two-step load exists because the gyp dialect (JSON
//! with single-quoted strings and `#` comments) sits inside YAML 1.1, while
//! the checkpoint walk wants plain JSON-shaped values to probe.

use std::path::Path;

use serde_json::Value;

use crate::error::{BindingError, BindingResult};

/// Load a descriptor file and return its document as a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`BindingError::Read`] when the file cannot be read (including a
/// missing file) and [`BindingError::Parse`] when the contents are not
/// parsable as the gyp dialect.
pub fn load_descriptor(path: &Path) -> BindingResult<Value> {
    let content =
        std::fs::read_to_string(path).map_err(|source| BindingError::Read { source })?;
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|source| BindingError::Parse { source })?;
    Ok(yaml_to_json_value(yaml))
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Handles the type mapping differences between the two value models: YAML
/// tags are stripped, non-string mapping keys are stringified, and numbers
/// JSON cannot represent collapse to null. The checkpoints only probe
/// mappings, sequences, and strings, so lossy number handling never
/// changes an outcome.
fn yaml_to_json_value(yaml: serde_yaml::Value) -> Value {
    match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(serde_json::Number::from(i))
            } else if let Some(u) = n.as_u64() {
                Value::Number(serde_json::Number::from(u))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            } else {
                Value::Null
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Value::Array(seq.into_iter().map(yaml_to_json_value).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let mut obj = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    serde_yaml::Value::Null => "null".to_string(),
                    other => format!("{other:?}"),
                };
                obj.insert(key, yaml_to_json_value(v));
            }
            Value::Object(obj)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(tagged.value),
    }
}
