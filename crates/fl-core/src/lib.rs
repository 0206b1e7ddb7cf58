//! fl-core: stable foundation for frigline.
//!
//! Contains:
//! - units (uom SI types + named unit constructors)
//! - numeric (tolerances + float comparison)
//! - ids (stable compact IDs for catalog records)

pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use ids::*;
pub use numeric::*;
pub use units::*;
