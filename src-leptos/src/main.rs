//! Concessionario back office - Leptos frontend
//!
//! Client-side rendered app talking to the dealership REST API through
//! `concessionario-client`.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use chrono as _;
use concessionario_client as _;
use concessionario_types as _;
use gloo_timers as _;
use leptos_meta as _;
use leptos_router as _;
use wasm_bindgen as _;
use web_sys as _;

use concessionario_leptos::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized).
    // `tracing` events from the client crate arrive here through its `log` bridge.
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Concessionario back office starting...");

    mount_to_body(App);
}
