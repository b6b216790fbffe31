//! Tour steps resolved against a page.

use tour_config::StepSpec;

use crate::page::{ElementId, Page};

/// One stop in the tour. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    title: String,
    body: String,
    target: Option<ElementId>,
}

impl Step {
    pub fn new(title: impl Into<String>, body: impl Into<String>, target: Option<ElementId>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            target,
        }
    }

    /// Resolve a step descriptor's selector. An unmatched selector yields an
    /// untargeted step.
    pub fn resolve(spec: &StepSpec, page: &Page) -> Self {
        let target = spec.target.as_deref().and_then(|selector| {
            let found = page.query(selector);
            if found.is_none() {
                tracing::warn!(selector, title = %spec.title, "Tour target not found; step will be centered");
            }
            found
        });
        Self::new(spec.title.clone(), spec.body.clone(), target)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn target(&self) -> Option<ElementId> {
        self.target
    }
}

/// Resolve every descriptor, preserving order.
pub fn resolve_steps(specs: &[StepSpec], page: &Page) -> Vec<Step> {
    specs.iter().map(|spec| Step::resolve(spec, page)).collect()
}
