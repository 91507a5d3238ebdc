// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera, projection and viewport navigation for interactive 3D viewers.
//!
//! viso-nav turns viewport size changes and raw pointer, wheel and key events
//! into a view matrix, a projection matrix and screen ↔ world conversions
//! that rendering and picking code consume.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - yaw/pitch camera owning its projections and
//!   manipulator
//! - [`camera::Projection`] - orthographic or perspective projection
//! - [`manipulator::Manipulator`] - pointer state machine and range limits
//! - [`options::Options`] - TOML presets that build a ready camera
//!
//! # Architecture
//!
//! The [`camera::Camera`] owns a [`manipulator::Manipulator`]. Input events
//! go through [`camera::Camera::handle_event`]; the manipulator's pointer
//! state turns them into [`manipulator::Gesture`]s which are applied back to
//! the camera. Every camera mutation clamps against the manipulator's
//! [`manipulator::RangeLimits`], recomputes the basis and view matrix and
//! re-unprojects the lookpoint, the world point under the viewport centre
//! on `z = 0`.

pub mod camera;
pub mod error;
pub mod input;
pub mod manipulator;
pub mod options;
pub mod util;

pub use camera::{Camera, CameraParameters, MovementDirection, Projection};
pub use error::NavError;
pub use input::InputEvent;
pub use manipulator::{Gesture, Manipulator, ManipulatorKind, RangeLimits};
pub use options::Options;
