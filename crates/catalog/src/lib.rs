//! Static geographic reference data.
//!
//! Two lookup tables back the map view: the state table (USPS postal code,
//! FIPS code, name) and the bounding-box table keyed by `"XX"` for a whole
//! state or `"XXNN"` for a congressional district. Both are pure data; absent
//! keys are an expected outcome, never an error.

pub mod bboxes;
pub mod states;

pub use bboxes::*;
pub use states::*;
