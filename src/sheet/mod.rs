//! Sheet orchestration: fluent configuration, validation, grid layout, and
//! the render pass.
//!
//! ## Pipeline
//!
//! ```text
//! SheetBuilder (chained setters, no computation)
//!     ↓ build()
//! validation (fail-fast checks, then normalization: defaults, clamping,
//!             distribution synthesis, code padding)
//!     ↓
//! GridLayout (row height, bar height scaling)
//!     ↓
//! render pass (one SheetCell per code; blanks stay empty)
//!     ↓
//! DocumentWriter → bytes → optional file persistence
//! ```

mod builder;
mod layout;

pub use builder::{BuildState, SheetBuilder, DEFAULT_CELL_PADDING, MAX_CAPTIONED_BAR_HEIGHT};
pub use layout::GridLayout;
