//! FHIR OperationOutcome model

use crate::common::{BackboneElement, CodeableConcept};
use crate::resource::{Discriminant, DomainResource};
use serde::{Deserialize, Serialize};

/// Information about the success/failure of an action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutcome {
    /// Resource type - always "OperationOutcome"
    #[serde(default)]
    pub resource_type: Discriminant<OperationOutcome>,

    #[serde(flatten)]
    pub base: DomainResource,

    /// A single issue associated with the action
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issue: Vec<OperationOutcomeIssue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutcomeIssue {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<IssueSeverity>,

    /// Error or warning code (`invalid`, `not-found`, `exception`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<CodeableConcept>,

    /// Additional diagnostic information about the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expression: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Fatal,
    Error,
    Warning,
    Information,
}

impl IssueSeverity {
    /// Fatal and error issues mean the action did not succeed
    pub fn is_failure(&self) -> bool {
        matches!(self, IssueSeverity::Fatal | IssueSeverity::Error)
    }
}

impl OperationOutcome {
    /// An outcome carrying one issue
    pub fn single(
        severity: IssueSeverity,
        code: impl Into<String>,
        diagnostics: impl Into<String>,
    ) -> Self {
        Self {
            issue: vec![OperationOutcomeIssue {
                severity: Some(severity),
                code: Some(code.into()),
                diagnostics: Some(diagnostics.into()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    pub fn has_failures(&self) -> bool {
        self.issue
            .iter()
            .any(|i| i.severity.is_some_and(|s| s.is_failure()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_issue_outcome() {
        let outcome =
            OperationOutcome::single(IssueSeverity::Error, "not-found", "Patient/9 is gone");
        assert!(outcome.has_failures());

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            json!({
                "resourceType": "OperationOutcome",
                "issue": [{"severity": "error", "code": "not-found", "diagnostics": "Patient/9 is gone"}]
            })
        );
    }

    #[test]
    fn test_warnings_are_not_failures() {
        let outcome: OperationOutcome = serde_json::from_value(json!({
            "resourceType": "OperationOutcome",
            "issue": [
                {"severity": "warning", "code": "informational"},
                {"severity": "information", "code": "informational"}
            ]
        }))
        .unwrap();

        assert_eq!(outcome.issue.len(), 2);
        assert!(!outcome.has_failures());
    }
}
