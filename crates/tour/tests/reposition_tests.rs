//! Repositioning after resize and scroll, including scrolls inside containers.
//!
//! Step 4 of the sample tour targets the last entry of the activity feed,
//! which only becomes visible once the feed scrolls.

mod helpers;

use crossterm::event::KeyCode;
use guided_tour::action::Action;
use guided_tour::controller::TourAction;
use guided_tour::geometry::{Bounds, Offset, highlight_bounds};
use guided_tour::page::{ListenerKind, PageEvent, ScrollSource};
use helpers::{code, run, sample_app, wheel_down_at, wheel_up_at};

const FEED_STEP: usize = 3;

fn app_at_feed_step() -> guided_tour::App {
    let mut app = sample_app(80, 24);
    app.update(Action::StartTour);
    for _ in 0..FEED_STEP {
        app.update(Action::Tour(TourAction::Advance));
    }
    app
}

fn feed(app: &guided_tour::App) -> guided_tour::ElementId {
    let entry = app.page.query("data-third").unwrap();
    app.page.element(entry).unwrap().parent().unwrap()
}

#[test]
fn test_target_in_container_is_scrolled_into_view() {
    let app = app_at_feed_step();
    let entry = app.page.query("data-third").unwrap();

    assert_eq!(app.page.container_scroll(feed(&app)), Some(Offset::new(0, 18)));
    assert_eq!(app.page.scroll_offset(), Offset::new(0, 5));
    assert_eq!(app.page.bounding_rect(entry), Some(Bounds::new(3, 11, 38, 3)));

    let highlight = app.tour.highlight().unwrap();
    assert_eq!(app.page.resolve_box(highlight), Some(Bounds::new(2, 15, 40, 5)));
    let panel = app.tour.presenter().unwrap().panel_id();
    assert_eq!(app.page.resolve_box(panel), Some(Bounds::new(4, 20, 44, 9)));
}

#[test]
fn test_container_scroll_repositions_without_changing_step() {
    let mut app = app_at_feed_step();
    let entry = app.page.query("data-third").unwrap();

    // Screen row 6 is document row 11, inside the feed but above every overlay.
    let action = app.handle_mouse(wheel_up_at(30, 6));
    run(&mut app, action);

    assert_eq!(app.tour.current_index(), Some(FEED_STEP));
    assert_eq!(app.page.container_scroll(feed(&app)), Some(Offset::new(0, 15)));
    let rect = app.page.bounding_rect(entry).unwrap();
    assert_eq!(rect, Bounds::new(3, 14, 38, 3));

    let highlight = app.tour.highlight().unwrap();
    assert_eq!(
        app.page.resolve_box(highlight),
        Some(highlight_bounds(rect, app.page.scroll_offset(), 1))
    );
    // Below the entry would overflow the viewport, so the panel sits above it.
    let panel = app.tour.presenter().unwrap().panel_id();
    assert_eq!(app.page.resolve_box(panel), Some(Bounds::new(4, 9, 44, 9)));
}

#[test]
fn test_document_scroll_keeps_highlight_on_target() {
    let mut app = app_at_feed_step();
    let highlight = app.tour.highlight().unwrap();
    let before = app.page.resolve_box(highlight);

    let action = app.handle_input(code(KeyCode::Down));
    run(&mut app, action);

    assert_eq!(app.page.scroll_offset(), Offset::new(0, 8));
    assert_eq!(app.tour.current_index(), Some(FEED_STEP));
    assert_eq!(app.page.resolve_box(highlight), before);
}

#[test]
fn test_resize_recenters_untargeted_step() {
    let mut app = sample_app(80, 24);
    app.update(Action::StartTour);

    assert_eq!(app.handle_resize(100, 30), Some(Action::Redraw));
    assert_eq!(app.tour.current_index(), Some(0));
    let panel = app.tour.presenter().unwrap().panel_id();
    assert_eq!(app.page.resolve_box(panel), Some(Bounds::new(28, 10, 44, 9)));
}

#[test]
fn test_container_scroll_reaches_capture_listeners_only() {
    let mut app = app_at_feed_step();
    let bubbling = app.page.add_listener(ListenerKind::Scroll, false);
    let capturing = app.page.add_listener(ListenerKind::Scroll, true);

    let dispatch = app.page.dispatch(PageEvent::Scroll {
        source: ScrollSource::Container(feed(&app)),
        delta: Offset::new(0, -1),
    });
    assert!(dispatch.reaches(capturing));
    assert!(!dispatch.reaches(bubbling));
}

#[test]
fn test_wheel_outside_containers_scrolls_document() {
    let mut app = sample_app(80, 24);
    let action = app.handle_mouse(wheel_down_at(60, 20));
    run(&mut app, action);
    assert_eq!(app.page.scroll_offset(), Offset::new(0, 3));
}
