//! Color assignment for visualization metadata.
//!
//! Pairs ordered trait values with palette colors and writes the
//! tab-separated colors table consumed downstream.

pub mod assign;
pub mod ordering;
pub mod schemes;

pub use assign::{assign_colors, write_colors, TraitColors};
pub use ordering::{filter_ordering, read_metadata, read_ordering, Metadata, TraitOrdering};
pub use schemes::{read_color_schemes, ColorSchemes};
