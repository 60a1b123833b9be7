//! The timeline engine: turns projects and a [`TimeScale`] into a window,
//! a column sequence, header bands and pixel geometry.
//!
//! Everything here is a pure function of its inputs. Nothing fails; odd
//! input data degrades to a best-effort layout.
//!
//! [`TimeScale`]: crate::model::TimeScale

pub mod bands;
pub mod date_math;
pub mod layout;
pub mod range;
pub mod scale;

pub use bands::{band_units, HeaderBand};
pub use layout::{compute_unit_width, day_equivalent_width, LayoutGeometry, UnitWidthTracker};
pub use range::{resolve_window, TimeWindow};
pub use scale::generate_units;
