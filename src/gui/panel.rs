//! GUI panel controller: owns the wry webview and its action channel.

use std::rc::Rc;
use std::sync::mpsc;

use web_time::Instant;
use winit::window::Window;

use super::webview::{self, WebviewPanel};
use crate::panel::UiAction;
use crate::GooeyEngine;

/// Owns the webview panel and routes its actions into the engine.
pub(crate) struct PanelController {
    webview: Option<Rc<wry::WebView>>,
    action_rx: Option<mpsc::Receiver<UiAction>>,
}

impl PanelController {
    /// Create a controller with no webview yet.
    pub(crate) const fn new() -> Self {
        Self {
            webview: None,
            action_rx: None,
        }
    }

    /// Create the webview and attach it to the engine as its panel display.
    /// The viewer keeps running without a panel if creation fails.
    pub(crate) fn init_webview(
        &mut self,
        window: &Window,
        engine: &mut GooeyEngine,
    ) {
        let inner = window.inner_size();
        match webview::create_webview(window, inner.width, inner.height) {
            Ok((wv, rx)) => {
                let wv = Rc::new(wv);
                engine.attach_panel(Box::new(WebviewPanel::new(Rc::clone(&wv))));
                self.webview = Some(wv);
                self.action_rx = Some(rx);
            }
            Err(e) => {
                log::error!("Failed to create webview: {e}");
            }
        }
    }

    /// Keep the panel pinned to the right edge after a resize.
    pub(crate) fn apply_layout(&self, window: &Window) {
        let Some(ref wv) = self.webview else {
            return;
        };
        let inner = window.inner_size();
        if let Err(e) =
            wv.set_bounds(webview::panel_bounds(inner.width, inner.height))
        {
            log::warn!("failed to position panel: {e}");
        }
    }

    /// Apply every action the panel posted since the last frame.
    pub(crate) fn drain_and_apply(
        &self,
        engine: &mut GooeyEngine,
        now: Instant,
    ) {
        let Some(ref rx) = self.action_rx else {
            return;
        };
        while let Ok(action) = rx.try_recv() {
            engine.apply_ui_action(&action, now);
        }
    }
}
