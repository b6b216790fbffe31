//! Guided Tour Library
//!
//! A step-by-step guided tour over a terminal page: a floating panel walks
//! the user through an ordered list of steps, highlighting the page region
//! each step refers to.
//!
//! # Example
//!
//! ```rust
//! use guided_tour::{Page, Step, Tour, geometry::Bounds};
//! use tour_config::TourSettings;
//!
//! let mut page = Page::new(80, 24);
//! let menu = page.insert_content("Menu", Bounds::new(0, 0, 80, 3));
//! let mut tour = Tour::new(
//!     vec![Step::new("Hi", "Welcome", None), Step::new("Menu", "Links", Some(menu))],
//!     TourSettings::default(),
//! );
//! tour.start(&mut page).unwrap();
//! assert_eq!(tour.presenter().unwrap().title(), "Hi");
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod controller;
pub mod demo;
pub mod error;
pub mod geometry;
pub mod page;
pub mod presenter;
pub mod runtime;
pub mod step;
pub mod ui;

pub use action::Action;
pub use app::App;
pub use controller::{Tour, TourAction};
pub use error::TourError;
pub use page::{Dispatch, ElementId, Page, PageEvent};
pub use presenter::{ControlBindings, PanelControl, PanelLayout, Presenter};
pub use step::{Step, resolve_steps};
