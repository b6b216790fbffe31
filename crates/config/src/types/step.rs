//! Step descriptors as they appear in a tour file.

use serde::{Deserialize, Serialize};

use super::settings::TourSettings;

/// One stop in a tour, before its target selector is resolved against a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepSpec {
    pub title: String,
    pub body: String,
    /// Tag of the element to highlight (e.g. `data-first`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl StepSpec {
    /// A step that is shown centered, without a highlighted element.
    pub fn untargeted(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            target: None,
        }
    }

    /// A step anchored to the element tagged with `selector`.
    pub fn targeted(
        title: impl Into<String>,
        body: impl Into<String>,
        selector: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            target: Some(selector.into()),
        }
    }
}

/// The on-disk shape of a tour: optional settings plus the ordered steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TourFile {
    #[serde(default)]
    pub settings: TourSettings,
    pub steps: Vec<StepSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_is_optional_in_json() {
        let spec: StepSpec = serde_json::from_str(r#"{"title":"A","body":"a"}"#).unwrap();
        assert_eq!(spec, StepSpec::untargeted("A", "a"));
    }

    #[test]
    fn test_unknown_step_field_rejected() {
        let result: Result<StepSpec, _> =
            serde_json::from_str(r#"{"title":"A","body":"a","element":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_untargeted_step_serializes_without_target() {
        let json = serde_json::to_string(&StepSpec::untargeted("A", "a")).unwrap();
        assert!(!json.contains("target"));
    }

    #[test]
    fn test_settings_default_when_absent() {
        let file: TourFile = serde_json::from_str(r#"{"steps":[]}"#).unwrap();
        assert_eq!(file.settings, TourSettings::default());
        assert!(file.steps.is_empty());
    }
}
