//! Tour definition types.

mod settings;
mod step;
mod theme;

pub use settings::TourSettings;
pub use step::{StepSpec, TourFile};
pub use theme::{ColorTheme, Theme};
