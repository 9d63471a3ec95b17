pub mod config;
pub mod game;
pub mod input;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod web;
