//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization and the shared pipeline
//! boilerplate used by the scene pass.

/// Shared wgpu boilerplate helpers for full-screen pipelines.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
