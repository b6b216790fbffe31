//! Drawing of the tour panel.
//!
//! Title and body are drawn as plain text; nothing in them is interpreted.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Clear, Paragraph, Wrap},
};
use tour_config::Theme;

use crate::geometry::Bounds;
use crate::page::Page;
use crate::presenter::{CLOSE_GLYPH, Presenter};
use crate::ui::to_screen;

/// Render the panel if it is currently laid out on the page.
pub fn render_panel<A: Clone>(f: &mut Frame, page: &Page, presenter: &Presenter<A>, theme: &Theme) {
    let Some(layout) = presenter.layout(page) else {
        return;
    };
    let area = f.area();
    let region = |bounds: Bounds| to_screen(bounds, page, area);

    let Some(frame_rect) = region(layout.frame) else {
        return;
    };
    f.render_widget(Clear, frame_rect);
    f.render_widget(
        Block::bordered()
            .border_style(Style::default().fg(theme.panel_border))
            .style(Style::default().bg(theme.background).fg(theme.text)),
        frame_rect,
    );

    if let Some(rect) = region(layout.title) {
        f.render_widget(
            Paragraph::new(presenter.title()).style(
                Style::default()
                    .fg(theme.panel_title)
                    .add_modifier(Modifier::BOLD),
            ),
            rect,
        );
    }
    if let Some(rect) = region(layout.close) {
        f.render_widget(
            Paragraph::new(CLOSE_GLYPH).style(Style::default().fg(theme.text_dim)),
            rect,
        );
    }
    if let Some(rect) = region(layout.body) {
        f.render_widget(
            Paragraph::new(presenter.body())
                .wrap(Wrap { trim: false })
                .style(Style::default().fg(theme.text)),
            rect,
        );
    }
    if let Some(rect) = region(layout.back) {
        render_button(f, rect, presenter.back_label(), presenter.back_enabled(), theme);
    }
    if let Some(rect) = region(layout.advance) {
        render_button(f, rect, presenter.advance_label(), true, theme);
    }
    if let (Some(rect), Some((current, total))) = (region(layout.progress), presenter.progress()) {
        f.render_widget(
            Paragraph::new(format!("Step {current} of {total}"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.text_dim)),
            rect,
        );
    }
}

fn render_button(f: &mut Frame, rect: Rect, label: &str, enabled: bool, theme: &Theme) {
    let style = if enabled {
        Style::default().fg(theme.button_fg).bg(theme.button_bg)
    } else {
        Style::default().fg(theme.disabled)
    };
    f.render_widget(Paragraph::new(format!(" {label} ")).style(style), rect);
}
