//! Shared Dioxus components and D3.js bridge for SCA dashboard apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `downloads`: Blob/anchor bridge for user-triggered report downloads
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, inputs, metric cards)

pub mod components;
pub mod downloads;
pub mod js_bridge;
pub mod state;
