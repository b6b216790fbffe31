//! Terminal rendering of the page and the tour chrome.
//!
//! Responsibilities:
//! - Map document-space boxes onto the frame, clipped to the visible area.
//! - Draw host regions, the dimming backdrop and the highlight frame.
//!
//! Does NOT handle:
//! - Layout decisions; every box comes from `Page::resolve_box`/`visible_box`.
//! - The panel itself (see `panel`).

pub mod panel;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Paragraph},
};
use tour_config::Theme;

use crate::geometry::{Bounds, Offset};
use crate::page::{ElementKind, Page};

/// Screen rectangle for a document-space box, or `None` when it is off screen.
pub(crate) fn to_screen(bounds: Bounds, page: &Page, area: Rect) -> Option<Rect> {
    let scroll = page.scroll_offset();
    let viewport = Bounds::new(0, 0, i32::from(area.width), i32::from(area.height));
    let visible = bounds
        .translate(Offset::new(-scroll.x, -scroll.y))
        .intersection(&viewport)?;
    Some(Rect::new(
        area.x + u16::try_from(visible.x).ok()?,
        area.y + u16::try_from(visible.y).ok()?,
        u16::try_from(visible.width).ok()?,
        u16::try_from(visible.height).ok()?,
    ))
}

/// Draw the host regions, then the backdrop and highlight when present.
pub fn render_page(f: &mut Frame, page: &Page, theme: &Theme) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        area,
    );

    for element in page.elements().filter(|e| !e.kind().is_overlay()) {
        let Some(rect) = page
            .visible_box(element.id())
            .and_then(|b| to_screen(b, page, area))
        else {
            continue;
        };
        let block = Block::bordered()
            .border_style(Style::default().fg(theme.content_border))
            .title(Span::styled(
                element.label(),
                Style::default().fg(theme.content_label),
            ));
        f.render_widget(block, rect);
    }

    let overlay_rect = |kind: ElementKind| {
        page.elements()
            .filter(|e| e.kind() == kind)
            .find_map(|e| page.resolve_box(e.id()))
            .and_then(|b| to_screen(b, page, area))
    };
    let highlight = overlay_rect(ElementKind::Highlight);

    if let Some(backdrop) = overlay_rect(ElementKind::Backdrop) {
        let style = Style::default()
            .fg(theme.backdrop)
            .add_modifier(Modifier::DIM);
        dim_outside(f.buffer_mut(), backdrop, highlight, style);
    }

    if let Some(rect) = highlight {
        f.render_widget(
            Block::bordered()
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(theme.highlight)),
            rect,
        );
    }
}

/// Apply `style` to every cell of `area` that lies outside `keep`.
fn dim_outside(buf: &mut Buffer, area: Rect, keep: Option<Rect>, style: Style) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if keep.is_some_and(|k| k.contains((x, y).into())) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(style);
            }
        }
    }
}

/// Key hints shown while no tour is running.
pub fn render_hint(f: &mut Frame, theme: &Theme) {
    let area = f.area();
    if area.height == 0 {
        return;
    }
    let row = Rect::new(area.x, area.bottom() - 1, area.width, 1);
    f.render_widget(
        Paragraph::new(" s: start tour  q: quit ")
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.text_dim)),
        row,
    );
}
