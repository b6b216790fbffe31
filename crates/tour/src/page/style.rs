//! Presentational classes and the rules that interpret them.
//!
//! The tour never positions its chrome directly on screen: it toggles
//! classes and sets style boxes, and these rules turn that into geometry.
//!
//! - `hide` removes any element from layout.
//! - The backdrop and the panel are laid out only while `show` is set.
//! - `center` centres the panel in the viewport, ignoring its style box position.

use std::collections::BTreeSet;

use super::ElementKind;
use crate::geometry::Bounds;

pub const SHOW: &str = "show";
pub const CENTER: &str = "center";
pub const HIDE: &str = "hide";

/// Set of presentational classes on an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(BTreeSet<&'static str>);

impl ClassList {
    pub fn add(&mut self, class: &'static str) {
        self.0.insert(class);
    }

    pub fn remove(&mut self, class: &'static str) {
        self.0.remove(class);
    }

    /// Add `class` when `on` is true, remove it otherwise.
    pub fn toggle(&mut self, class: &'static str, on: bool) {
        if on {
            self.add(class);
        } else {
            self.remove(class);
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }
}

/// Resolve an overlay element's box in document coordinates.
///
/// `viewport` is the visible area in document coordinates. Returns `None`
/// when the element takes no part in layout.
pub(crate) fn overlay_box(
    kind: ElementKind,
    classes: &ClassList,
    style_box: Bounds,
    viewport: Bounds,
) -> Option<Bounds> {
    if classes.contains(HIDE) {
        return None;
    }
    match kind {
        ElementKind::Backdrop => classes.contains(SHOW).then_some(viewport),
        ElementKind::Panel => {
            if !classes.contains(SHOW) {
                None
            } else if classes.contains(CENTER) {
                Some(viewport.centered(style_box.width, style_box.height))
            } else {
                Some(style_box)
            }
        }
        ElementKind::Highlight => Some(style_box),
        ElementKind::Content | ElementKind::Container => None,
    }
}
