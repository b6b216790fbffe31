//! Built-in sample page and tour used when no tour file is given.

use tour_config::StepSpec;

use crate::geometry::Bounds;
use crate::page::Page;

/// Document height of the sample page; taller than most terminals so the
/// last region needs a document scroll.
pub const SAMPLE_DOCUMENT_HEIGHT: i32 = 64;

/// A document with five tagged regions, `data-first` to `data-fifth`.
///
/// `data-third` sits inside a scroll container below its fold.
pub fn sample_page(width: u16, height: u16) -> Page {
    let mut page = Page::new(width, height);
    let w = i32::from(width).max(80);

    let header = page.insert_content("Navigation", Bounds::new(0, 0, w, 3));
    page.tag(header, "data-first");

    let search = page.insert_content("Search", Bounds::new(2, 4, 36, 3));
    page.tag(search, "data-second");

    let feed = page.insert_container("Activity feed", Bounds::new(2, 9, 40, 10));
    for (i, y) in (10..34).step_by(4).enumerate() {
        let label = format!("Entry {}", i + 1);
        page.insert_child(feed, &label, Bounds::new(3, y, 38, 3));
    }
    if let Some(latest) = page.insert_child(feed, "Latest entry", Bounds::new(3, 34, 38, 3)) {
        page.tag(latest, "data-third");
    }

    let settings = page.insert_content("Settings", Bounds::new(46, 9, 32, 8));
    page.tag(settings, "data-fourth");

    page.insert_content("Notes", Bounds::new(2, 22, w - 4, 30));

    let footer = page.insert_content(
        "Help & feedback",
        Bounds::new(0, SAMPLE_DOCUMENT_HEIGHT - 3, w, 3),
    );
    page.tag(footer, "data-fifth");

    page
}

/// Six steps: a centered welcome, then one stop per sample region.
pub fn sample_tour() -> Vec<StepSpec> {
    vec![
        StepSpec::untargeted(
            "Welcome",
            "This short tour walks through the main areas of the page. \
             Use Next and Back, or press Esc to leave at any time.",
        ),
        StepSpec::targeted(
            "Navigation",
            "The top bar links to every section of the page.",
            "data-first",
        ),
        StepSpec::targeted(
            "Search",
            "Type here to filter everything below.",
            "data-second",
        ),
        StepSpec::targeted(
            "Latest activity",
            "New entries appear at the end of the feed, which scrolls on its own.",
            "data-third",
        ),
        StepSpec::targeted(
            "Settings",
            "Adjust the theme and layout from this panel.",
            "data-fourth",
        ),
        StepSpec::targeted(
            "Help",
            "Questions or feedback? The footer has links to both.",
            "data-fifth",
        ),
    ]
}
