pub mod bounds;
pub mod geo;
pub mod mercator;
pub mod viewport;

// Foundation crate: small, well-tested primitives only.
pub use bounds::*;
pub use geo::*;
pub use viewport::*;
