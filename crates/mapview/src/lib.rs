//! Map view controller core.
//!
//! Keeps one long-lived, imperative rendering-engine instance consistent with
//! an externally-owned selection snapshot, and turns map gestures back into
//! selection updates. The engine sits behind the narrow [`MapEngine`]
//! interface and is driven exclusively by the command lists produced in
//! [`reconcile()`], so the whole core runs against the recording fakes in
//! [`testing`] without a real renderer.

pub mod controller;
pub mod engine;
pub mod filter;
pub mod gesture;
pub mod inset;
pub mod popup;
pub mod reconcile;
pub mod snapshot;
pub mod testing;

pub use controller::*;
pub use engine::*;
pub use filter::FilterExpr;
pub use gesture::GestureResult;
pub use reconcile::reconcile;
pub use snapshot::*;
