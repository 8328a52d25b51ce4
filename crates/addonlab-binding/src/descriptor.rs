//! Typed view of the binding.gyp document.
//!
//! The exercise contract names one file, one target, one source, and one
//! include entry; the constants here are the single source of those
//! literals. [`RawDescriptor`] and [`RawTarget`] are the decoded
//! intermediate representations of the document root and its first
//! target: every field optional and untyped, so presence and shape stay
//! the checkpoints' job instead of failing wholesale inside
//! deserialization.

use serde::Deserialize;
use serde_json::Value;

/// Name of the descriptor file inside a submission directory.
pub const BINDING_FILE: &str = "binding.gyp";

/// Target name the exercise requires of the first target.
pub const TARGET_NAME: &str = "myaddon";

/// Source file the exercise requires the first target to compile.
pub const REQUIRED_SOURCE: &str = "myaddon.cc";

/// Canonical `include_dirs` entry resolving the NAN headers at configure
/// time. Matched exactly; alternate quoting or spacing is not recognized.
pub const NAN_INCLUDE_DIR: &str = r#"<!(node -e "require('nan')")"#;

/// Document root as an optionally-present raw view.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawDescriptor {
    /// The `targets` value, if the key is present.
    pub targets: Option<Value>,
}

impl RawDescriptor {
    /// Decode the document root as a typed view.
    ///
    /// A non-mapping root decodes to the all-`None` descriptor; the root
    /// checkpoint rejects those before this view is consulted. The mapping
    /// guard also keeps serde's positional sequence-to-struct decoding
    /// from treating a sequence root as field values.
    pub fn from_document(doc: &Value) -> Self {
        if doc.is_object() {
            serde_json::from_value(doc.clone()).unwrap_or_default()
        } else {
            RawDescriptor::default()
        }
    }
}

/// First-target fields as optionally-present raw values.
///
/// A field holds `Some` whenever the key exists, regardless of the value's
/// type; checkpoints then decide whether the value has the right shape and
/// report their own message when it does not.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawTarget {
    /// The `target_name` value, if the key is present.
    pub target_name: Option<Value>,
    /// The `sources` value, if the key is present.
    pub sources: Option<Value>,
    /// The `include_dirs` value, if the key is present.
    pub include_dirs: Option<Value>,
}

impl RawTarget {
    /// Extract the first element of `targets` as a typed view.
    ///
    /// An empty `targets` sequence or a non-mapping first element decodes
    /// to the all-`None` target, so the target_name checkpoint reports it
    /// instead of the walk crashing or misclassifying it as a parse error.
    /// The mapping filter also keeps serde's positional sequence-to-struct
    /// decoding from treating a sequence element as field values.
    pub fn first(targets: &[Value]) -> Self {
        targets
            .first()
            .filter(|target| target.is_object())
            .map(|target| serde_json::from_value(target.clone()).unwrap_or_default())
            .unwrap_or_default()
    }
}
