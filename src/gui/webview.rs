//! Wry webview child of the winit window.
//!
//! Loads the embedded slider panel page, turns its IPC messages into
//! [`UiAction`]s, and implements [`PanelDisplay`] by evaluating bridge
//! functions inside the page.

use std::rc::Rc;
use std::sync::mpsc;

use wry::{dpi, Rect, WebView, WebViewBuilder};

use crate::panel::{PanelDisplay, SliderSpec, UiAction};

/// Width of the control panel in physical pixels.
pub const PANEL_WIDTH: u32 = 300;

/// Slider panel page.
const PANEL_HTML: &str = include_str!("../../assets/ui/panel.html");

/// Create the wry webview as a child of the given window.
///
/// Returns `(webview, action_rx)`; the receiver yields [`UiAction`]s posted
/// by the panel page. Malformed messages are logged and dropped.
pub fn create_webview<W: wry::raw_window_handle::HasWindowHandle>(
    window: &W,
    window_width: u32,
    window_height: u32,
) -> Result<(WebView, mpsc::Receiver<UiAction>), wry::Error> {
    let (tx, rx) = mpsc::channel();

    let webview = WebViewBuilder::new()
        .with_bounds(panel_bounds(window_width, window_height))
        .with_initialization_script(BRIDGE_JS)
        .with_html(PANEL_HTML)
        .with_ipc_handler(move |req| match parse_action(req.body()) {
            Some(action) => {
                if tx.send(action).is_err() {
                    log::debug!("panel action dropped: receiver closed");
                }
            }
            None => log::warn!("unrecognized panel message: {}", req.body()),
        })
        .build_as_child(window)?;

    Ok((webview, rx))
}

/// Compute the [`Rect`] for the panel at the right edge of the window.
#[must_use]
pub fn panel_bounds(window_width: u32, window_height: u32) -> Rect {
    let x = window_width.saturating_sub(PANEL_WIDTH);
    Rect {
        position: dpi::Position::Physical(dpi::PhysicalPosition::new(
            x as i32, 0,
        )),
        size: dpi::Size::Physical(dpi::PhysicalSize::new(
            PANEL_WIDTH.min(window_width),
            window_height,
        )),
    }
}

/// [`PanelDisplay`] backed by the webview page.
pub struct WebviewPanel {
    webview: Rc<WebView>,
}

impl WebviewPanel {
    /// Wrap a webview created by [`create_webview`].
    #[must_use]
    pub const fn new(webview: Rc<WebView>) -> Self {
        Self { webview }
    }

    fn call(&self, function: &str, payload: &impl serde::Serialize) {
        let script = match serde_json::to_string(payload) {
            Ok(json) => script_call(function, &json),
            Err(e) => {
                log::error!("failed to encode panel payload: {e}");
                return;
            }
        };
        if let Err(e) = self.webview.evaluate_script(&script) {
            log::warn!("panel script `{function}` failed: {e}");
        }
    }
}

impl PanelDisplay for WebviewPanel {
    fn register(&mut self, sliders: &[SliderSpec]) {
        self.call("__gooey_register", &sliders);
    }

    fn refresh(&mut self, values: &[(String, f32)]) {
        self.call("__gooey_refresh", &values);
    }
}

// ── Internals ────────────────────────────────────────────────────────────

/// JavaScript injected before page load.
///
/// Calls that arrive before the page has registered its listeners are
/// buffered and replayed when a listener attaches.
const BRIDGE_JS: &str = r#"
(function() {
    var pending = { register: null, refresh: null };

    function dispatch(name, json) {
        window.dispatchEvent(new CustomEvent(name, { detail: json }));
    }

    window.__gooey_register = function(json) {
        pending.register = json;
        dispatch('gooey-register', json);
    };
    window.__gooey_refresh = function(json) {
        pending.refresh = json;
        dispatch('gooey-refresh', json);
    };

    var origAdd = EventTarget.prototype.addEventListener;
    EventTarget.prototype.addEventListener = function(type, fn, opts) {
        origAdd.call(this, type, fn, opts);
        if (this === window && type === 'gooey-register' && pending.register) {
            dispatch('gooey-register', pending.register);
        }
        if (this === window && type === 'gooey-refresh' && pending.refresh) {
            dispatch('gooey-refresh', pending.refresh);
        }
    };
})();
"#;

/// Build `window.<function>('<json>')` with the JSON quoted as a JS string.
fn script_call(function: &str, json: &str) -> String {
    let escaped = json.replace('\\', "\\\\").replace('\'', "\\'");
    format!("window.{function}('{escaped}')")
}

fn parse_action(body: &str) -> Option<UiAction> {
    serde_json::from_str(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_call_escapes_quotes() {
        let script = script_call("__gooey_refresh", r#"[["it's",1.0]]"#);
        assert_eq!(script, r#"window.__gooey_refresh('[["it\'s",1.0]]')"#);
    }

    #[test]
    fn parses_panel_messages() {
        assert_eq!(
            parse_action(r#"{"action":"set_param","name":"square1.x","value":0.5}"#),
            Some(UiAction::SetParam {
                name: "square1.x".to_owned(),
                value: 0.5,
            })
        );
        assert_eq!(parse_action(r#"{"action":"swap"}"#), Some(UiAction::Swap));
        assert_eq!(parse_action(r#"{"action":"reset"}"#), Some(UiAction::Reset));
        assert_eq!(parse_action(r#"{"action":"load_file"}"#), None);
        assert_eq!(parse_action("not json"), None);
    }

    #[test]
    fn panel_hugs_right_edge() {
        let rect = panel_bounds(1000, 600);
        match rect.position {
            dpi::Position::Physical(p) => assert_eq!((p.x, p.y), (700, 0)),
            dpi::Position::Logical(_) => panic!("expected physical position"),
        }

        let narrow = panel_bounds(200, 600);
        match narrow.size {
            dpi::Size::Physical(s) => assert_eq!((s.width, s.height), (200, 600)),
            dpi::Size::Logical(_) => panic!("expected physical size"),
        }
    }
}
