use console_error_panic_hook::set_once;
use gloo_net::http::Request;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use feed::{FetchError, SeismicEvent, decode_events};
use panels::Drawer;
use runtime::viewport::Viewport;
use viewer::{FetchApplied, FetchTicket, GlobeContext, ViewerConfig};

mod dom;
mod render;
use dom::DomSurface;
use render::{draw_world, fit_canvas};

struct HostState {
    globe: GlobeContext<DomSurface>,
    canvas: HtmlCanvasElement,
    ctx2d: CanvasRenderingContext2d,
}

thread_local! {
    static STATE: RefCell<Option<HostState>> = const { RefCell::new(None) };
}

fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Runs `f` against the host state, if [`init`] has completed.
fn with_host<R>(f: impl FnOnce(&mut HostState) -> R) -> Option<R> {
    STATE.with(|state| state.borrow_mut().as_mut().map(f))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    Ok(())
}

/// Binds to `canvas.webgl` and the panel markup, then starts the first load.
///
/// `config_json` is an optional JSON viewer config; missing keys keep their
/// defaults.
#[wasm_bindgen]
pub fn init(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(text) => {
            ViewerConfig::from_json(&text).map_err(|e| JsValue::from_str(&e.to_string()))?
        }
        None => ViewerConfig::default(),
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .query_selector("canvas.webgl")?
        .ok_or_else(|| JsValue::from_str("missing canvas.webgl"))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let viewport = Viewport::new(
        window.inner_width()?.as_f64().unwrap_or(1280.0),
        window.inner_height()?.as_f64().unwrap_or(720.0),
        window.device_pixel_ratio(),
    );
    fit_canvas(&canvas, &ctx2d, viewport)?;

    let mut globe = GlobeContext::new(config, DomSurface::new(document), viewport);
    let ticket = globe.start_load();

    STATE.with(|state| {
        *state.borrow_mut() = Some(HostState {
            globe,
            canvas,
            ctx2d,
        });
    });
    spawn_fetch(ticket);
    Ok(())
}

/// One animation frame: update, then draw. Called from
/// `requestAnimationFrame` with the elapsed time in seconds.
#[wasm_bindgen]
pub fn frame(dt_s: f64) -> Result<(), JsValue> {
    with_host(|host| {
        let before = host.globe.viewport();
        host.globe.tick(dt_s);
        let viewport = host.globe.viewport();
        if viewport != before {
            fit_canvas(&host.canvas, &host.ctx2d, viewport)?;
        }
        // Canvas2D keeps no per-entity resources; draining keeps the queue bounded.
        host.globe.drain_released();
        draw_world(&host.ctx2d, host.globe.world(), host.globe.camera(), viewport)
    })
    .unwrap_or(Ok(()))
}

#[wasm_bindgen]
pub fn resize(width: f64, height: f64, device_pixel_ratio: f64) {
    with_host(|host| host.globe.resize(width, height, device_pixel_ratio));
}

#[wasm_bindgen]
pub fn pointer_move(x_px: f64, y_px: f64) {
    with_host(|host| host.globe.pointer_move(x_px, y_px));
}

#[wasm_bindgen]
pub fn pointer_down(x_px: f64, y_px: f64) {
    with_host(|host| host.globe.pointer_down(x_px, y_px));
}

#[wasm_bindgen]
pub fn pointer_up() {
    with_host(|host| host.globe.pointer_up());
}

/// Marks whether the pointer is over a `.no-pick` element.
#[wasm_bindgen]
pub fn set_pick_suppressed(suppressed: bool) {
    with_host(|host| host.globe.set_suppressed(suppressed));
}

#[wasm_bindgen]
pub fn click() {
    with_host(|host| host.globe.click());
}

/// Zoom (dolly) in/out. Intended usage: call with wheel deltaY.
#[wasm_bindgen]
pub fn wheel(delta_y: f64) {
    with_host(|host| host.globe.zoom(delta_y));
}

#[wasm_bindgen]
pub fn submit_filter(limit: &str, min_magnitude: &str) -> Result<(), JsValue> {
    let ticket = with_host(|host| host.globe.submit_filter(limit, min_magnitude))
        .ok_or_else(|| JsValue::from_str("viewer not initialised"))?
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    spawn_fetch(ticket);
    Ok(())
}

/// Selects a list entry from the JSON stored in its `data-event` attribute.
#[wasm_bindgen]
pub fn select_list_entry(event_json: &str) -> Result<(), JsValue> {
    let event: SeismicEvent =
        serde_json::from_str(event_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    with_host(|host| host.globe.select_from_list(&event));
    Ok(())
}

#[wasm_bindgen]
pub fn toggle_drawer(key: &str, open: bool) -> Result<(), JsValue> {
    let drawer = Drawer::from_key(key).ok_or_else(|| JsValue::from_str("unknown drawer"))?;
    with_host(|host| host.globe.set_drawer(drawer, open));
    Ok(())
}

fn spawn_fetch(ticket: FetchTicket) {
    let Some(endpoint) = with_host(|host| host.globe.config().endpoint.clone()) else {
        return;
    };
    spawn_local(async move {
        let result = fetch_events(&ticket.query().url(&endpoint)).await;
        if let Err(err) = &result {
            log(&format!("event fetch failed: {err}"));
        }
        let applied = with_host(|host| host.globe.apply_fetch(ticket, result));
        if applied == Some(FetchApplied::Stale) {
            log("dropped a superseded response");
        }
    });
}

async fn fetch_events(url: &str) -> Result<Vec<SeismicEvent>, FetchError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status {
            status: resp.status(),
        });
    }
    let text = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode_events(&text)
}
