//! Runtime components for the demo binary.
//!
//! - Terminal management (`TerminalGuard`)
//!
//! Does NOT handle:
//! - Rendering or input handling (see `app` and `ui`).

pub mod terminal;
