//! Test helpers for the guided tour.
//!
//! Provides key and mouse event constructors and a `TuiHarness` that runs
//! the demo app over ratatui's `TestBackend`.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use guided_tour::action::Action;
use guided_tour::app::App;
use guided_tour::controller::Tour;
use guided_tour::demo::{sample_page, sample_tour};
use guided_tour::geometry::Point;
use guided_tour::step::resolve_steps;
use ratatui::{Terminal, backend::TestBackend};
use tour_config::{Theme, TourSettings};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create a key event without modifiers.
pub fn code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Create a left-button press at a screen cell.
pub fn click_at(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Create a wheel-down event at a screen cell.
pub fn wheel_down_at(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Create a wheel-up event at a screen cell.
pub fn wheel_up_at(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::ScrollUp,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Screen cell of a viewport-relative point.
pub fn cell(point: Point) -> (u16, u16) {
    (point.x as u16, point.y as u16)
}

/// The demo app with the sample tour, not yet started.
pub fn sample_app(width: u16, height: u16) -> App {
    sample_app_with(width, height, TourSettings::default())
}

pub fn sample_app_with(width: u16, height: u16, settings: TourSettings) -> App {
    let page = sample_page(width, height);
    let steps = resolve_steps(&sample_tour(), &page);
    let theme = Theme::from_color_theme(settings.theme);
    App::new(page, Tour::new(steps, settings), theme)
}

/// Feed an input result back into the app, as the main loop does.
pub fn run(app: &mut App, action: Option<Action>) {
    if let Some(action) = action {
        app.update(action);
    }
}

pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    /// Create a harness with the sample tour already started.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_settings(width, height, TourSettings::default())
    }

    pub fn with_settings(width: u16, height: u16, settings: TourSettings) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        let mut app = sample_app_with(width, height, settings);
        app.update(Action::StartTour);
        Self { app, terminal }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        self.terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }

    /// Render and return a single screen row.
    pub fn row(&mut self, y: usize) -> String {
        self.render()
            .lines()
            .nth(y)
            .map(str::to_string)
            .unwrap_or_default()
    }
}

/// Convert a ratatui Buffer to a string.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}
