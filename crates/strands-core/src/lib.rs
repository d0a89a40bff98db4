//! Pure strand-field simulation shared with the web frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs and
//! build on native targets, where the test suite runs. The web frontend
//! consumes them to drive the per-frame canvas update.

pub mod constants;
pub mod draw;
pub mod field;
pub mod geometry;
pub mod pointer;
pub mod strand;
pub mod viewport;

pub use draw::*;
pub use field::*;
pub use pointer::*;
pub use strand::*;
pub use viewport::*;
