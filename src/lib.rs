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

//! Camera transition and scene animation coordinator.
//!
//! Vantage drives a virtual camera between viewpoints with eased, heuristically
//! timed transitions, orbits it about its focus pivot, tours the scene's
//! cameras, and steps keyframed scene animations. A single "settled" event is
//! reported once every camera move and viewpoint-bound animation has stopped.
//!
//! # Key entry points
//!
//! - [`engine::ViewEngine`] - tick dispatcher and message router
//! - [`scene::Scene`] - the narrow contract a host scene implements
//! - [`camera::pose::ViewpointPose`] - the interpolable camera state
//! - [`options::Options`] - runtime tunables (timing, orbit, cycling,
//!   animation partitioning)
//!
//! # Architecture
//!
//! Everything runs synchronously inside the host's periodic tick. Each tick
//! advances the camera transition (or orbit), then the camera tour, then the
//! animation streams, and feeds the two settled signals through an
//! order-independent latch. Time is passed in explicitly, so the whole
//! coordinator can be driven deterministically.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod options;
pub mod scene;
pub mod util;
