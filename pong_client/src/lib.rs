//! WebGPU client for Killer Pong
//!
//! The page owns the canvas and the animation loop; the wasm bindings forward
//! pointer motion, resizes and frame timestamps into a `ModeHost`.

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod host;

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use bindings::*;
