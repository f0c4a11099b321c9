//! Native-side GUI layer: wry webview hosting the slider panel.
//!
//! The webview is created as a child of the winit window and talks to the
//! engine over a small JSON IPC bridge.

/// Panel controller owned by the viewer.
pub(crate) mod panel;
/// Wry webview creation, IPC handler, and the webview [`PanelDisplay`].
///
/// [`PanelDisplay`]: crate::panel::PanelDisplay
pub mod webview;
