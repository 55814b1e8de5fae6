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
// Complexity limits
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

//! Screen focus, overlay placement and camera control locking for
//! interactive 3D rooms.
//!
//! A room holds two flat "screen" meshes. Clicking one derives a
//! viewer-facing rectangle aligned to the mesh whatever its world
//! transform, flies the camera over to frame it, and keeps the orbit
//! controls out of the way while the user scrolls or touches the overlay
//! laid over the screen.
//!
//! # Key entry points
//!
//! - [`engine::ScreenRoom`] - selection, hover, flight and overlay state
//! - [`geometry::derive_basis`] - the viewer-facing frame of a mesh
//! - [`geometry::HitPlane`] - pointer targets built from screen meshes
//! - [`animation::FocusAnimator`] - single-slot camera tweening
//! - [`input::InteractionLock`] - pointer/touch ownership of the controls
//! - [`options::Options`] - runtime configuration (camera, focus, screens,
//!   overlay, repositories)
//!
//! # Architecture
//!
//! Everything runs on the host's frame loop except repository listing,
//! which [`repos::RepoCatalog`] runs on short-lived worker threads and
//! collects over a channel on each [`engine::ScreenRoom::tick`]. The scene
//! and camera stay with the host and are reached through the
//! [`scene::SceneProvider`] and [`camera::CameraRig`] traits.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod options;
pub mod repos;
pub mod scene;
