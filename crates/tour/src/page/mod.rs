//! In-memory model of the host page the tour runs on.
//!
//! Responsibilities:
//! - Hold the host's content regions (document coordinates, optional scroll containers).
//! - Hold the presentational elements the tour inserts (backdrop, panel, highlight).
//! - Track document scroll, viewport size and registered listeners.
//! - Dispatch events: apply their default effect, hit-test clicks, pick listeners.
//!
//! Does NOT handle:
//! - Drawing (see `ui`), which reads the resolved boxes from here.
//! - Any tour semantics (see `controller`).
//!
//! Invariants:
//! - Paint and hit order follow insertion order; children are inserted after their parents.
//! - Removing an element removes its descendants.
//! - Document and container scroll offsets stay within their scrollable extent.

mod event;
pub mod style;

pub use event::{Dispatch, ListenerKind, PageEvent, ScrollSource};
pub(crate) use event::Listener;
pub use style::ClassList;

use std::collections::{BTreeMap, BTreeSet};

use crate::geometry::{Bounds, Offset, Point};

/// Handle to an element on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

/// Handle returned by [`Page::add_listener`] and handed back to remove it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A host region.
    Content,
    /// A host region whose children scroll inside it.
    Container,
    /// Full-viewport layer behind the panel. Absorbs clicks.
    Backdrop,
    /// The presenter's floating panel.
    Panel,
    /// Frame drawn around the current target.
    Highlight,
}

impl ElementKind {
    pub fn is_overlay(self) -> bool {
        matches!(self, Self::Backdrop | Self::Panel | Self::Highlight)
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    id: ElementId,
    kind: ElementKind,
    label: String,
    parent: Option<ElementId>,
    tags: BTreeSet<String>,
    /// Document box at zero container scroll, or the style box for overlays.
    bounds: Bounds,
    /// Scroll offset of a container's children.
    scroll: Offset,
    classes: ClassList,
}

impl Element {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// The host page.
#[derive(Debug, Clone)]
pub struct Page {
    elements: Vec<Element>,
    listeners: BTreeMap<ListenerId, Listener>,
    viewport: (u16, u16),
    scroll: Offset,
    next_id: u64,
}

impl Page {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            elements: Vec::new(),
            listeners: BTreeMap::new(),
            viewport: (width, height),
            scroll: Offset::ZERO,
            next_id: 1,
        }
    }

    fn allocate(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn push(
        &mut self,
        kind: ElementKind,
        label: &str,
        parent: Option<ElementId>,
        bounds: Bounds,
    ) -> ElementId {
        let id = ElementId(self.allocate());
        self.elements.push(Element {
            id,
            kind,
            label: label.to_string(),
            parent,
            tags: BTreeSet::new(),
            bounds,
            scroll: Offset::ZERO,
            classes: ClassList::default(),
        });
        id
    }

    // ---------------------------------------------------------------------
    // Structure
    // ---------------------------------------------------------------------

    /// Add a host region at document coordinates.
    pub fn insert_content(&mut self, label: &str, bounds: Bounds) -> ElementId {
        self.push(ElementKind::Content, label, None, bounds)
    }

    /// Add a scrollable host region.
    pub fn insert_container(&mut self, label: &str, bounds: Bounds) -> ElementId {
        self.push(ElementKind::Container, label, None, bounds)
    }

    /// Add a host region inside `parent`. `bounds` are document coordinates
    /// at zero container scroll.
    pub fn insert_child(
        &mut self,
        parent: ElementId,
        label: &str,
        bounds: Bounds,
    ) -> Option<ElementId> {
        let parent_kind = self.element(parent)?.kind;
        if parent_kind.is_overlay() {
            return None;
        }
        Some(self.push(ElementKind::Content, label, Some(parent), bounds))
    }

    /// Insert a presentational element. It starts with an empty style box.
    pub fn insert_overlay(&mut self, kind: ElementKind) -> ElementId {
        debug_assert!(kind.is_overlay());
        let label = match kind {
            ElementKind::Backdrop => "modal-backdrop",
            ElementKind::Panel => "modal",
            _ => "highlight-container",
        };
        self.push(kind, label, None, Bounds::ZERO)
    }

    /// Remove an element and its descendants. Returns false if it was not present.
    pub fn remove(&mut self, id: ElementId) -> bool {
        if self.element(id).is_none() {
            return false;
        }
        let mut doomed = BTreeSet::from([id]);
        // Children always follow their parents, so one pass collects every descendant.
        for element in &self.elements {
            if element.parent.is_some_and(|p| doomed.contains(&p)) {
                doomed.insert(element.id);
            }
        }
        self.elements.retain(|e| !doomed.contains(&e.id));
        true
    }

    /// Attach a selector tag (e.g. `data-first`) to an element.
    pub fn tag(&mut self, id: ElementId, tag: &str) -> bool {
        match self.element_mut(id) {
            Some(element) => {
                element.tags.insert(tag.to_string());
                true
            }
            None => false,
        }
    }

    /// First host element carrying `selector`. Accepts `data-x` or `[data-x]`.
    pub fn query(&self, selector: &str) -> Option<ElementId> {
        let tag = selector
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']');
        self.elements
            .iter()
            .find(|e| !e.kind.is_overlay() && e.tags.contains(tag))
            .map(|e| e.id)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Elements in paint order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Number of presentational elements currently on the page.
    pub fn overlay_count(&self) -> usize {
        self.elements.iter().filter(|e| e.kind.is_overlay()).count()
    }

    /// True when `node` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.element(id).and_then(|e| e.parent);
        }
        false
    }

    fn ancestors(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut current = self.element(id).and_then(|e| e.parent);
        while let Some(parent) = current {
            out.push(parent);
            current = self.element(parent).and_then(|e| e.parent);
        }
        out
    }

    // ---------------------------------------------------------------------
    // Presentation
    // ---------------------------------------------------------------------

    pub fn classes_mut(&mut self, id: ElementId) -> Option<&mut ClassList> {
        self.element_mut(id).map(|e| &mut e.classes)
    }

    /// Set an overlay's style box (document coordinates).
    pub fn set_style_box(&mut self, id: ElementId, bounds: Bounds) {
        if let Some(element) = self.element_mut(id) {
            element.bounds = bounds;
        }
    }

    pub fn style_box(&self, id: ElementId) -> Option<Bounds> {
        self.element(id).map(|e| e.bounds)
    }

    // ---------------------------------------------------------------------
    // Geometry
    // ---------------------------------------------------------------------

    pub fn viewport_size(&self) -> (u16, u16) {
        self.viewport
    }

    pub fn scroll_offset(&self) -> Offset {
        self.scroll
    }

    /// The visible area in document coordinates.
    pub fn viewport_bounds(&self) -> Bounds {
        Bounds::new(
            self.scroll.x,
            self.scroll.y,
            i32::from(self.viewport.0),
            i32::from(self.viewport.1),
        )
    }

    /// Scroll applied to an element by its ancestor containers.
    fn container_shift(&self, id: ElementId) -> Offset {
        self.ancestors(id)
            .into_iter()
            .filter_map(|a| self.element(a))
            .fold(Offset::ZERO, |acc, e| Offset::new(acc.x - e.scroll.x, acc.y - e.scroll.y))
    }

    /// Resolved box in document coordinates, or `None` if not laid out.
    pub fn resolve_box(&self, id: ElementId) -> Option<Bounds> {
        let element = self.element(id)?;
        if element.kind.is_overlay() {
            style::overlay_box(
                element.kind,
                &element.classes,
                element.bounds,
                self.viewport_bounds(),
            )
        } else {
            Some(element.bounds.translate(self.container_shift(id)))
        }
    }

    /// Resolved box clipped by every ancestor container.
    pub fn visible_box(&self, id: ElementId) -> Option<Bounds> {
        let mut visible = self.resolve_box(id)?;
        for ancestor in self.ancestors(id) {
            let clip = self.resolve_box(ancestor)?;
            visible = visible.intersection(&clip)?;
        }
        Some(visible)
    }

    /// Viewport-relative rectangle of an element, like `getBoundingClientRect`.
    pub fn bounding_rect(&self, id: ElementId) -> Option<Bounds> {
        self.resolve_box(id)
            .map(|b| b.translate(Offset::new(-self.scroll.x, -self.scroll.y)))
    }

    /// Width and height of the laid-out host content.
    fn document_extent(&self) -> (i32, i32) {
        self.elements
            .iter()
            .filter(|e| e.kind != ElementKind::Content || e.parent.is_none())
            .filter(|e| !e.kind.is_overlay())
            .fold((0, 0), |(w, h), e| (w.max(e.bounds.right()), h.max(e.bounds.bottom())))
    }

    fn max_document_scroll(&self) -> Offset {
        let (w, h) = self.document_extent();
        Offset::new(
            (w - i32::from(self.viewport.0)).max(0),
            (h - i32::from(self.viewport.1)).max(0),
        )
    }

    fn max_container_scroll(&self, container: ElementId) -> Offset {
        let Some(c) = self.element(container) else {
            return Offset::ZERO;
        };
        let (right, bottom) = self
            .elements
            .iter()
            .filter(|e| e.parent == Some(container))
            .fold((c.bounds.right(), c.bounds.bottom()), |(r, b), e| {
                (r.max(e.bounds.right()), b.max(e.bounds.bottom()))
            });
        Offset::new(right - c.bounds.right(), bottom - c.bounds.bottom())
    }

    fn clamp(offset: Offset, max: Offset) -> Offset {
        Offset::new(offset.x.clamp(0, max.x), offset.y.clamp(0, max.y))
    }

    /// Set the document scroll, clamped. Returns whether it moved.
    pub fn scroll_document_to(&mut self, offset: Offset) -> bool {
        let clamped = Self::clamp(offset, self.max_document_scroll());
        let changed = clamped != self.scroll;
        self.scroll = clamped;
        changed
    }

    /// Set a container's scroll, clamped. Returns whether it moved.
    pub fn scroll_container_to(&mut self, container: ElementId, offset: Offset) -> bool {
        let max = self.max_container_scroll(container);
        match self.element_mut(container) {
            Some(c) if c.kind == ElementKind::Container => {
                let clamped = Self::clamp(offset, max);
                let changed = clamped != c.scroll;
                c.scroll = clamped;
                changed
            }
            _ => false,
        }
    }

    pub fn container_scroll(&self, container: ElementId) -> Option<Offset> {
        self.element(container)
            .filter(|e| e.kind == ElementKind::Container)
            .map(|e| e.scroll)
    }

    /// Scroll ancestors, innermost first, then the document so that the
    /// element's centre lines up with the centre of each scrollport.
    /// Returns whether anything moved.
    pub fn scroll_into_view(&mut self, id: ElementId) -> bool {
        let mut changed = false;
        for container in self.ancestors(id) {
            let (Some(target), Some(port), Some(current)) = (
                self.resolve_box(id),
                self.resolve_box(container),
                self.container_scroll(container),
            ) else {
                continue;
            };
            let (tc, pc) = (target.center(), port.center());
            let desired = Offset::new(current.x + tc.x - pc.x, current.y + tc.y - pc.y);
            changed |= self.scroll_container_to(container, desired);
        }
        if let Some(target) = self.resolve_box(id) {
            let center = target.center();
            let desired = Offset::new(
                center.x - i32::from(self.viewport.0) / 2,
                center.y - i32::from(self.viewport.1) / 2,
            );
            changed |= self.scroll_document_to(desired);
        }
        changed
    }

    // ---------------------------------------------------------------------
    // Events
    // ---------------------------------------------------------------------

    pub fn add_listener(&mut self, kind: ListenerKind, capture: bool) -> ListenerId {
        let id = ListenerId(self.allocate());
        self.listeners.insert(id, Listener { kind, capture });
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn listeners_where(&self, pred: impl Fn(&Listener) -> bool) -> Vec<ListenerId> {
        self.listeners
            .iter()
            .filter(|(_, l)| pred(l))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Topmost element under a document-space point.
    ///
    /// Order: panel, highlight, host content (deepest first), backdrop.
    pub fn hit_test(&self, point: Point) -> Option<ElementId> {
        let hit = |kinds: &[ElementKind]| {
            self.elements
                .iter()
                .rev()
                .filter(|e| kinds.contains(&e.kind))
                .find(|e| self.visible_box(e.id).is_some_and(|b| b.contains(point)))
                .map(|e| e.id)
        };
        hit(&[ElementKind::Panel])
            .or_else(|| hit(&[ElementKind::Highlight]))
            .or_else(|| hit(&[ElementKind::Content, ElementKind::Container]))
            .or_else(|| hit(&[ElementKind::Backdrop]))
    }

    /// Deliver an event: apply its default effect and report who hears it.
    pub fn dispatch(&mut self, event: PageEvent) -> Dispatch {
        match event {
            PageEvent::Click(viewport_point) => {
                let point = viewport_point.offset_by(self.scroll);
                let target = self.hit_test(point);
                let absorbed = target
                    .and_then(|t| self.element(t))
                    .is_some_and(|e| e.kind == ElementKind::Backdrop);
                // The backdrop stops propagation: capture listeners still run, bubbling ones do not.
                let listeners = self
                    .listeners_where(|l| l.kind == ListenerKind::Click && (l.capture || !absorbed));
                Dispatch {
                    event,
                    target,
                    point: Some(point),
                    listeners,
                }
            }
            PageEvent::Resize { width, height } => {
                self.viewport = (width, height);
                let scroll = self.scroll;
                self.scroll_document_to(scroll);
                Dispatch {
                    event,
                    target: None,
                    point: None,
                    listeners: self.listeners_where(|l| l.kind == ListenerKind::Resize),
                }
            }
            PageEvent::Scroll { source, delta } => {
                let (moved, capture_only) = match source {
                    ScrollSource::Document => {
                        let to = self.scroll + delta;
                        (self.scroll_document_to(to), false)
                    }
                    ScrollSource::Container(id) => {
                        let moved = match self.container_scroll(id) {
                            Some(current) => self.scroll_container_to(id, current + delta),
                            None => false,
                        };
                        (moved, true)
                    }
                };
                // Scroll does not bubble: container scrolls reach capture listeners only.
                let listeners = if moved {
                    self.listeners_where(|l| {
                        l.kind == ListenerKind::Scroll && (l.capture || !capture_only)
                    })
                } else {
                    Vec::new()
                };
                Dispatch {
                    event,
                    target: None,
                    point: None,
                    listeners,
                }
            }
        }
    }
}
