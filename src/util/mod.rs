//! Shared math utilities.
//!
//! Screen ↔ world unprojection helpers used by the camera and manipulators.

pub mod transform;
