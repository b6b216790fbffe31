//! Rendering of the page and the tour panel over ratatui's `TestBackend`.

mod helpers;

use guided_tour::action::Action;
use guided_tour::controller::TourAction;
use helpers::TuiHarness;
use tour_config::TourSettings;

/// Columns covered by the centered 44-wide panel on an 80-column screen.
fn panel_slice(row: &str) -> String {
    row.chars().skip(18).take(44).collect()
}

#[test]
fn test_first_step_title_row() {
    let mut harness = TuiHarness::new(80, 24);
    let row = harness.row(8);
    insta::assert_snapshot!(panel_slice(&row), @"│Welcome                                 × │");
}

#[test]
fn test_first_step_footer_row() {
    let mut harness = TuiHarness::new(80, 24);
    let row = harness.row(14);
    insta::assert_snapshot!(panel_slice(&row), @"│ Back          Step 1 of 6           Next │");
}

#[test]
fn test_body_is_wrapped_inside_panel() {
    let mut harness = TuiHarness::new(80, 24);
    let screen = harness.render();
    assert!(screen.contains("This short tour walks through the main"));
    assert!(screen.contains("areas of the page."));
}

#[test]
fn test_last_step_shows_done() {
    let mut harness = TuiHarness::new(80, 24);
    for _ in 0..5 {
        harness.app.update(Action::Tour(TourAction::Advance));
    }
    let screen = harness.render();
    assert!(screen.contains(" Done "));
    assert!(screen.contains("Step 6 of 6"));
    assert!(screen.contains("Help & feedback"));
}

#[test]
fn test_progress_can_be_hidden() {
    let settings = TourSettings {
        show_progress: false,
        ..TourSettings::default()
    };
    let mut harness = TuiHarness::with_settings(80, 24, settings);
    assert!(!harness.render().contains("Step 1 of 6"));
}

#[test]
fn test_markup_in_text_is_drawn_verbatim() {
    let mut harness = TuiHarness::new(80, 24);
    harness.app.tour.finish(&mut harness.app.page);
    let mut tour = guided_tour::Tour::new(
        vec![guided_tour::Step::new("<b>Bold</b>", "a &amp; b", None)],
        TourSettings::default(),
    );
    tour.start(&mut harness.app.page).unwrap();
    harness.app.tour = tour;
    let screen = harness.render();
    assert!(screen.contains("<b>Bold</b>"));
    assert!(screen.contains("a &amp; b"));
}

#[test]
fn test_hint_shown_after_tour_ends() {
    let mut harness = TuiHarness::new(80, 24);
    assert!(!harness.render().contains("s: start tour"));
    harness.app.update(Action::Tour(TourAction::Close));
    assert!(harness.row(23).contains("s: start tour"));
}

#[test]
fn test_highlight_frame_is_drawn_around_target() {
    let mut harness = TuiHarness::new(80, 24);
    // Step 3: the search box at (2, 4), framed one cell out.
    harness.app.update(Action::Tour(TourAction::Advance));
    harness.app.update(Action::Tour(TourAction::Advance));
    let row = harness.row(3);
    assert_eq!(row.chars().nth(1), Some('┏'));
    assert_eq!(row.chars().nth(38), Some('┓'));
}
