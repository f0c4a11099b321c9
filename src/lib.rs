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

//! Gooey metaball scene: three rounded squares that melt into each other
//! when close, rendered with a single full-screen wgpu shader pass.
//!
//! # Key entry points
//!
//! - [`GooeyEngine`] - host-side state: parameters, swap animation, panel
//! - [`params::ParameterStore`] - the named values the shader reads
//! - [`animation`] - spring-damper and elastic tween swap drivers
//! - [`panel`] - two-way binding with the slider control panel
//! - [`options::Options`] - startup configuration (TOML)
//!
//! # Architecture
//!
//! Each display refresh the host loop calls [`GooeyEngine::tick`], which
//! advances whichever swap driver the options selected, then packs the
//! store into a [`params::SceneUniform`] for the
//! [`renderer::SceneRenderer`]. Panel widgets write straight into the store
//! and are refreshed whenever the engine moves values on its own.
//!
//! With the `viewer` feature, [`Viewer`] opens a winit window and drives
//! that loop; `gui` adds the webview slider panel.

pub mod animation;
pub mod engine;
pub mod error;
pub mod gpu;
#[cfg(feature = "gui")]
pub mod gui;
pub mod options;
pub mod panel;
pub mod params;
pub mod renderer;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::GooeyEngine;
pub use error::GooeyError;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
