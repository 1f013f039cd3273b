use crate::host::ModeHost;
use crate::logger;
use crate::renderer::WgpuRenderer;
use glam::UVec2;
use pong_core::{KillerPongMode, RenderError};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

thread_local! {
    static HOST: RefCell<Option<ModeHost>> = const { RefCell::new(None) };
}

fn to_js(e: RenderError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn with_host<T>(f: impl FnOnce(&mut ModeHost) -> Result<T, JsValue>) -> Result<T, JsValue> {
    HOST.with(|cell| match cell.borrow_mut().as_mut() {
        Some(host) => f(host),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement) -> js_sys::Promise {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    wasm_bindgen_futures::future_to_promise(async move {
        let size = UVec2::new(canvas.width(), canvas.height());
        let renderer = WgpuRenderer::new(canvas).await.map_err(to_js)?;
        let seed = js_sys::Date::now() as u64;
        let mode = KillerPongMode::new(renderer, seed);
        log::info!("match started, seed {seed}");

        HOST.with(|cell| {
            *cell.borrow_mut() = Some(ModeHost::new(Box::new(mode), size));
        });
        Ok(JsValue::UNDEFINED)
    })
}

/// Pointer position in canvas pixels, origin top-left
#[wasm_bindgen]
pub fn pointer_moved(x: f32, y: f32) -> Result<(), JsValue> {
    with_host(|host| {
        host.pointer_moved(x, y);
        Ok(())
    })
}

/// Advance and draw; returns true once the match is over
#[wasm_bindgen]
pub fn frame(timestamp_ms: f64) -> Result<bool, JsValue> {
    with_host(|host| {
        host.frame(timestamp_ms).map_err(to_js)?;
        Ok(host.is_complete())
    })
}

#[wasm_bindgen]
pub fn resize(width: u32, height: u32) -> Result<(), JsValue> {
    with_host(|host| {
        host.resize(width, height);
        Ok(())
    })
}
