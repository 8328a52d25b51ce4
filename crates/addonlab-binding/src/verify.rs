//! Ordered checkpoint walk over a submission's binding.gyp.
//!
//! [`verify_binding`] loads the descriptor from disk and delegates to
//! [`verify_document`], which walks the shape checkpoints against the
//! parsed value. The split keeps the walk testable without touching the
//! filesystem.

use std::path::Path;

use serde_json::Value;

use crate::descriptor::{
    RawDescriptor, RawTarget, BINDING_FILE, NAN_INCLUDE_DIR, REQUIRED_SOURCE, TARGET_NAME,
};
use crate::error::BindingError;
use crate::parser;
use crate::report::CheckReport;

/// Options recognized by the checkpoint walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Bypass the include_dirs/NAN checkpoints entirely. The remaining
    /// checkpoints still run; the bypassed ones neither pass nor fail.
    pub skip_include_dirs: bool,
}

/// Verify `<submission_dir>/binding.gyp` against the exercise contract.
///
/// Reads and parses the descriptor, then walks the checkpoints in order.
/// A read or parse failure terminates the walk before any shape check
/// runs, with the failure classified accordingly.
pub fn verify_binding(submission_dir: &Path, options: &CheckOptions) -> CheckReport {
    let mut report = CheckReport::new();

    let doc = match parser::load_descriptor(&submission_dir.join(BINDING_FILE)) {
        Ok(doc) => doc,
        Err(err) => {
            report.fail(err);
            return report;
        }
    };

    verify_document_into(&doc, options, report)
}

/// Walk the shape checkpoints against an already-parsed descriptor.
///
/// Checkpoints run in a fixed order and the walk stops at the first
/// failure: the report never carries more than one failure, and a failed
/// report carries exactly the passes cleared before the failing
/// checkpoint.
pub fn verify_document(doc: &Value, options: &CheckOptions) -> CheckReport {
    verify_document_into(doc, options, CheckReport::new())
}

fn verify_document_into(
    doc: &Value,
    options: &CheckOptions,
    mut report: CheckReport,
) -> CheckReport {
    if !doc.is_object() {
        report.fail(BindingError::MissingRootObject);
        return report;
    }

    let descriptor = RawDescriptor::from_document(doc);

    let Some(targets) = descriptor.targets.as_ref().and_then(Value::as_array) else {
        report.fail(BindingError::MissingTargetsArray);
        return report;
    };

    let target = RawTarget::first(targets);

    let Some(name) = target.target_name.as_ref().and_then(Value::as_str) else {
        report.fail(BindingError::MissingTargetName);
        return report;
    };

    if name != TARGET_NAME {
        report.fail(BindingError::WrongTargetName);
        return report;
    }

    report.pass(format!("binding.gyp includes a \"{TARGET_NAME}\" target"));

    let Some(sources) = target.sources.as_ref().and_then(Value::as_array) else {
        report.fail(BindingError::MissingSourcesArray);
        return report;
    };

    if !sources.iter().any(|s| s.as_str() == Some(REQUIRED_SOURCE)) {
        report.fail(BindingError::MissingAddonSource);
        return report;
    }

    report.pass(format!("binding.gyp includes \"{REQUIRED_SOURCE}\" as a source file"));

    if options.skip_include_dirs {
        return report;
    }

    let Some(include_dirs) = target.include_dirs.as_ref().and_then(Value::as_array) else {
        report.fail(BindingError::MissingIncludeDirsArray);
        return report;
    };

    if !include_dirs.iter().any(|d| d.as_str() == Some(NAN_INCLUDE_DIR)) {
        report.fail(BindingError::MissingNanInclude);
        return report;
    }

    report.pass("binding.gyp includes a correct NAN include statement");

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn complete_descriptor() -> Value {
        json!({
            "targets": [{
                "target_name": "myaddon",
                "sources": ["myaddon.cc"],
                "include_dirs": [NAN_INCLUDE_DIR],
            }]
        })
    }

    #[test]
    fn complete_descriptor_clears_all_checkpoints() {
        let report = verify_document(&complete_descriptor(), &CheckOptions::default());
        assert!(report.success());
        assert_eq!(
            report.passes(),
            [
                "binding.gyp includes a \"myaddon\" target",
                "binding.gyp includes \"myaddon.cc\" as a source file",
                "binding.gyp includes a correct NAN include statement",
            ]
        );
    }

    #[test]
    fn non_object_roots_fail_the_root_checkpoint() {
        for doc in [json!(null), json!("scalar"), json!([1, 2]), json!(42)] {
            let report = verify_document(&doc, &CheckOptions::default());
            assert!(matches!(
                report.failure(),
                Some(BindingError::MissingRootObject)
            ));
            assert!(report.passes().is_empty());
        }
    }

    #[test]
    fn absent_or_non_sequence_targets_fails_with_zero_passes() {
        for doc in [
            json!({}),
            json!({ "targets": "myaddon" }),
            json!({ "targets": { "target_name": "myaddon" } }),
        ] {
            let report = verify_document(&doc, &CheckOptions::default());
            assert!(matches!(
                report.failure(),
                Some(BindingError::MissingTargetsArray)
            ));
            assert!(report.passes().is_empty());
        }
    }

    #[test]
    fn empty_targets_lands_at_the_target_name_checkpoint() {
        let report = verify_document(&json!({ "targets": [] }), &CheckOptions::default());
        assert!(matches!(
            report.failure(),
            Some(BindingError::MissingTargetName)
        ));
    }

    #[test]
    fn non_mapping_first_target_lands_at_the_target_name_checkpoint() {
        for first in [json!("myaddon"), json!(["myaddon"]), json!(7)] {
            let doc = json!({ "targets": [first] });
            let report = verify_document(&doc, &CheckOptions::default());
            assert!(matches!(
                report.failure(),
                Some(BindingError::MissingTargetName)
            ));
            assert!(report.passes().is_empty());
        }
    }

    #[test]
    fn non_string_target_name_fails_before_any_pass() {
        for name in [json!(null), json!(3), json!(["myaddon"])] {
            let doc = json!({ "targets": [{ "target_name": name }] });
            let report = verify_document(&doc, &CheckOptions::default());
            assert!(matches!(
                report.failure(),
                Some(BindingError::MissingTargetName)
            ));
            assert!(report.passes().is_empty());
        }
    }

    #[test]
    fn wrong_target_name_fails_before_any_pass() {
        let doc = json!({ "targets": [{ "target_name": "MyAddon" }] });
        let report = verify_document(&doc, &CheckOptions::default());
        assert!(matches!(
            report.failure(),
            Some(BindingError::WrongTargetName)
        ));
        assert!(report.passes().is_empty());
    }

    #[test]
    fn missing_sources_fails_after_one_pass() {
        let doc = json!({ "targets": [{ "target_name": "myaddon" }] });
        let report = verify_document(&doc, &CheckOptions::default());
        assert!(matches!(
            report.failure(),
            Some(BindingError::MissingSourcesArray)
        ));
        assert_eq!(report.passes().len(), 1);
    }

    #[test]
    fn source_match_is_exact() {
        // Wrong extension, path prefix, and case are all rejected.
        for sources in [
            json!(["myaddon.cpp"]),
            json!(["src/myaddon.cc"]),
            json!(["MyAddon.cc"]),
            json!([]),
        ] {
            let doc = json!({
                "targets": [{ "target_name": "myaddon", "sources": sources }]
            });
            let report = verify_document(&doc, &CheckOptions::default());
            assert!(matches!(
                report.failure(),
                Some(BindingError::MissingAddonSource)
            ));
            assert_eq!(report.passes().len(), 1);
        }
    }

    #[test]
    fn extra_sources_around_the_required_one_still_pass() {
        let doc = json!({
            "targets": [{
                "target_name": "myaddon",
                "sources": ["other.cc", "myaddon.cc"],
                "include_dirs": [NAN_INCLUDE_DIR],
            }]
        });
        let report = verify_document(&doc, &CheckOptions::default());
        assert!(report.success());
    }

    #[test]
    fn missing_include_dirs_fails_after_exactly_two_passes() {
        let doc = json!({
            "targets": [{ "target_name": "myaddon", "sources": ["myaddon.cc"] }]
        });
        let report = verify_document(&doc, &CheckOptions::default());
        assert!(matches!(
            report.failure(),
            Some(BindingError::MissingIncludeDirsArray)
        ));
        assert_eq!(report.passes().len(), 2);
    }

    #[test]
    fn skip_include_dirs_bypasses_the_remaining_checkpoints() {
        let doc = json!({
            "targets": [{ "target_name": "myaddon", "sources": ["myaddon.cc"] }]
        });
        let options = CheckOptions {
            skip_include_dirs: true,
        };
        let report = verify_document(&doc, &options);
        assert!(report.success());
        assert_eq!(report.passes().len(), 2);
    }

    #[test]
    fn alternate_nan_quoting_is_not_recognized() {
        let doc = json!({
            "targets": [{
                "target_name": "myaddon",
                "sources": ["myaddon.cc"],
                "include_dirs": ["<!(node -e 'require(\"nan\")')"],
            }]
        });
        let report = verify_document(&doc, &CheckOptions::default());
        assert!(matches!(
            report.failure(),
            Some(BindingError::MissingNanInclude)
        ));
        assert_eq!(report.passes().len(), 2);
    }

    #[test]
    fn every_failure_here_is_schema_class() {
        let docs = [
            json!([]),
            json!({}),
            json!({ "targets": [] }),
            json!({ "targets": [{ "target_name": "other" }] }),
            json!({ "targets": [{ "target_name": "myaddon" }] }),
        ];
        for doc in docs {
            let report = verify_document(&doc, &CheckOptions::default());
            let failure = report.failure().expect("fixture must fail");
            assert_eq!(failure.kind(), ErrorKind::Schema);
        }
    }
}
