// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=longpress_web --heading-base-level=0

//! Longpress Web: the `longpress` detector wired to real DOM elements.
//!
//! On `wasm32` this crate provides:
//!
//! - `WebHost`: a [`longpress::Host`] that registers listeners with
//!   `addEventListener` (the `click` listener in the capture phase) and
//!   schedules press timers with `setTimeout`.
//! - `LongPressDirective`: a `wasm_bindgen` class wrapping a detector and its
//!   host, meant to be called from a UI framework's mount/unmount hooks.
//!
//! On every target it provides [`ElementKeys`], the identity map that lets
//! the detector key its registry on elements that cannot be hashed, with
//! [`attach_keyed`] and [`detach_keyed`] to keep keys and attachments in
//! step, and [`threshold_from_js`] to vet thresholds passed from JavaScript.
//!
//! # Usage
//!
//! From JavaScript, for example inside a directive definition:
//!
//! ```text
//! const presses = new LongPressDirective();
//!
//! export default {
//!   beforeMount(el, binding) {
//!     presses.attachWithArg(el, binding.value, binding.arg);
//!   },
//!   unmounted(el) {
//!     presses.detach(el);
//!   },
//! };
//! ```
//!
//! From Rust:
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn bind(el: &web_sys::Element) -> Result<(), wasm_bindgen::JsValue> {
//!     let presses = longpress_web::LongPressDirective::new()?;
//!     presses
//!         .attach_binding(el, longpress::Binding::new(|| {}).with_threshold(800))
//!         .map_err(|err| wasm_bindgen::JsValue::from_str(&err.to_string()))?;
//!     // Keep `presses` alive for as long as the listeners should stay.
//!     std::mem::forget(presses);
//!     Ok(())
//! }
//! ```
//!
//! Notes:
//! - Listener and timer closures only hold a weak reference to the detector;
//!   dropping the directive removes every listener it registered.
//! - Callbacks run after the detector borrow is released, so they may attach
//!   or detach elements, including their own.
//! - Trace output goes to the `log` facade under the `longpress` target;
//!   install a logger to see it.

mod keys;
mod threshold;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use keys::{ElementKey, ElementKeys, KeyedHost, attach_keyed, detach_keyed};
pub use threshold::threshold_from_js;

#[cfg(target_arch = "wasm32")]
pub use dom::{LongPressDirective, WebHost, WebListener, WebTimer};
