// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM host and the `wasm_bindgen` directive object.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use longpress::{
    Binding, Error, EventKind, Host, InputEvent, LogTrace, LongPress, PointerButton, Threshold,
    TimerId,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, MouseEvent, Window};

use crate::{ElementKey, ElementKeys, KeyedHost, attach_keyed, detach_keyed, threshold_from_js};

type Shared = RefCell<LongPress<WebHost, LogTrace>>;

/// A listener registered on a DOM element.
///
/// Owns the closure; dropping it invalidates the JS function.
pub struct WebListener {
    closure: Closure<dyn FnMut(Event)>,
}

impl fmt::Debug for WebListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebListener").finish_non_exhaustive()
    }
}

/// A `setTimeout` registration.
pub struct WebTimer {
    handle: Option<i32>,
    closure: Closure<dyn FnMut()>,
}

impl fmt::Debug for WebTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebTimer")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

/// [`Host`] backed by `addEventListener` and `setTimeout`.
///
/// Listener and timer closures hold a weak reference to the detector that
/// owns this host, so they become no-ops once it is dropped.
pub struct WebHost {
    window: Window,
    detector: Weak<Shared>,
    keys: ElementKeys<Element>,
    // Fired timers, kept alive until the next schedule so that a closure is
    // never freed from inside its own invocation.
    spent: Vec<Closure<dyn FnMut()>>,
}

impl fmt::Debug for WebHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebHost")
            .field("keys", &self.keys.len())
            .field("spent", &self.spent.len())
            .finish_non_exhaustive()
    }
}

impl WebHost {
    fn new(window: Window, detector: Weak<Shared>) -> Self {
        Self {
            window,
            detector,
            keys: ElementKeys::new(),
            spent: Vec::new(),
        }
    }

    /// The key assigned to `element`, if it is attached.
    #[must_use]
    pub fn key_of(&self, element: &Element) -> Option<ElementKey> {
        self.keys.key_of(element)
    }
}

impl KeyedHost for WebHost {
    type Target = Element;

    fn keys(&self) -> &ElementKeys<Element> {
        &self.keys
    }

    fn keys_mut(&mut self) -> &mut ElementKeys<Element> {
        &mut self.keys
    }
}

impl Host for WebHost {
    type Element = ElementKey;
    type Listener = WebListener;
    type Timer = WebTimer;

    fn add_listener(&mut self, key: &ElementKey, kind: EventKind) -> WebListener {
        let detector = self.detector.clone();
        let key = *key;
        let closure = Closure::wrap(Box::new(move |event: Event| {
            dispatch(&detector, key, kind, &event);
        }) as Box<dyn FnMut(_)>);

        if let Some(element) = self.keys.element(key) {
            let function: &js_sys::Function = closure.as_ref().unchecked_ref();
            let added = if kind.capture() {
                element.add_event_listener_with_callback_and_bool(kind.name(), function, true)
            } else {
                element.add_event_listener_with_callback(kind.name(), function)
            };
            if let Err(err) = added {
                log::warn!(target: "longpress", "addEventListener({}) failed: {err:?}", kind.name());
            }
        }
        WebListener { closure }
    }

    fn remove_listener(&mut self, key: &ElementKey, kind: EventKind, listener: WebListener) {
        let Some(element) = self.keys.element(*key) else {
            return;
        };
        let function: &js_sys::Function = listener.closure.as_ref().unchecked_ref();
        let removed = if kind.capture() {
            element.remove_event_listener_with_callback_and_bool(kind.name(), function, true)
        } else {
            element.remove_event_listener_with_callback(kind.name(), function)
        };
        if let Err(err) = removed {
            log::warn!(target: "longpress", "removeEventListener({}) failed: {err:?}", kind.name());
        }
    }

    fn set_timeout(&mut self, key: &ElementKey, timer: TimerId, delay: Threshold) -> WebTimer {
        self.spent.clear();

        let detector = self.detector.clone();
        let key = *key;
        let closure = Closure::wrap(Box::new(move || {
            fire(&detector, key, timer);
        }) as Box<dyn FnMut()>);

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis,
            )
            .inspect_err(|err| log::warn!(target: "longpress", "setTimeout failed: {err:?}"))
            .ok();
        WebTimer { handle, closure }
    }

    fn clear_timeout(&mut self, timer: WebTimer) {
        if let Some(handle) = timer.handle {
            self.window.clear_timeout_with_handle(handle);
        }
    }

    fn timer_spent(&mut self, timer: WebTimer) {
        self.spent.push(timer.closure);
    }
}

fn dispatch(detector: &Weak<Shared>, key: ElementKey, kind: EventKind, event: &Event) {
    let Some(detector) = detector.upgrade() else {
        return;
    };
    let input = InputEvent {
        kind,
        button: event
            .dyn_ref::<MouseEvent>()
            .map(|mouse| PointerButton::from_dom(mouse.button())),
    };
    let Ok(mut lp) = detector.try_borrow_mut() else {
        log::warn!(target: "longpress", "{} delivered while the detector was busy", kind.name());
        return;
    };
    let disposition = lp.handle_event(&key, &input);
    drop(lp);

    if disposition.prevents_default() {
        event.prevent_default();
    }
    if disposition.stops_propagation() {
        event.stop_immediate_propagation();
    }
}

fn fire(detector: &Weak<Shared>, key: ElementKey, timer: TimerId) {
    let Some(detector) = detector.upgrade() else {
        return;
    };
    let callback = match detector.try_borrow_mut() {
        Ok(mut lp) => lp.confirm(&key, timer),
        Err(_) => {
            log::warn!(target: "longpress", "{timer} fired while the detector was busy");
            None
        }
    };
    // The borrow is released: the callback may attach or detach elements.
    if let Some(callback) = callback {
        callback();
    }
}

/// Long-press detection for DOM elements.
///
/// Create one per application (or per component library) and call
/// [`attach`](Self::attach) / [`detach`](Self::detach) from the host
/// framework's mount and unmount hooks. Dropping it (or calling `free()`
/// from JavaScript) removes every listener it registered.
#[wasm_bindgen]
pub struct LongPressDirective {
    inner: Rc<Shared>,
}

impl fmt::Debug for LongPressDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LongPressDirective")
            .field("attached", &self.inner.borrow().len())
            .finish()
    }
}

#[wasm_bindgen]
impl LongPressDirective {
    /// Creates a directive bound to the global `window`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<LongPressDirective, JsValue> {
        console_error_panic_hook::set_once();
        let window = web_sys::window().ok_or("no global window exists")?;
        let inner = Rc::new_cyclic(|weak| {
            RefCell::new(LongPress::with_trace(
                WebHost::new(window, weak.clone()),
                LogTrace,
            ))
        });
        Ok(Self { inner })
    }

    /// Attach to `element`, running `callback` after a press of `threshold`
    /// milliseconds. A missing threshold, or one that is not a positive whole
    /// number, means 500.
    ///
    /// Fails if `callback` is missing.
    pub fn attach(
        &self,
        element: &Element,
        callback: Option<js_sys::Function>,
        threshold: Option<f64>,
    ) -> Result<(), JsValue> {
        let mut binding = js_binding(callback);
        binding.threshold_ms = threshold_from_js(threshold);
        self.attach_binding(element, binding)
            .map_err(|err| JsValue::from_str(&format!("{err}")))
    }

    /// Like [`attach`](Self::attach), with the threshold given as a directive
    /// argument string such as `"800"`.
    #[wasm_bindgen(js_name = attachWithArg)]
    pub fn attach_with_arg(
        &self,
        element: &Element,
        callback: Option<js_sys::Function>,
        arg: Option<String>,
    ) -> Result<(), JsValue> {
        let binding = match arg {
            Some(arg) => js_binding(callback).with_arg(&arg),
            None => js_binding(callback),
        };
        self.attach_binding(element, binding)
            .map_err(|err| JsValue::from_str(&format!("{err}")))
    }

    /// Detach from `element`. Detaching an element that is not attached is
    /// logged and otherwise ignored.
    pub fn detach(&self, element: &Element) {
        // `MissingContext` has already been logged through the trace.
        let _ = self.detach_element(element);
    }

    /// Returns `true` if `element` is attached.
    #[wasm_bindgen(js_name = isAttached)]
    pub fn is_attached(&self, element: &Element) -> bool {
        let lp = self.inner.borrow();
        lp.host()
            .key_of(element)
            .is_some_and(|key| lp.is_attached(&key))
    }

    /// Number of attached elements.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.inner.borrow().len()
    }
}

impl LongPressDirective {
    /// Attach to `element` with a Rust-side [`Binding`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCallback`] if the binding has no callback; nothing is
    /// registered.
    pub fn attach_binding(
        &self,
        element: &Element,
        binding: Binding,
    ) -> Result<(), Error<ElementKey>> {
        attach_keyed(&mut *self.inner.borrow_mut(), element, binding)
    }

    /// Detach from `element`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingContext`] if `element` is not attached.
    pub fn detach_element(&self, element: &Element) -> Result<(), Error<ElementKey>> {
        detach_keyed(&mut *self.inner.borrow_mut(), element)
    }
}

fn js_binding(callback: Option<js_sys::Function>) -> Binding {
    match callback {
        Some(function) => Binding::new(move || {
            if let Err(err) = function.call0(&JsValue::NULL) {
                log::error!(target: "longpress", "long-press callback threw: {err:?}");
            }
        }),
        None => Binding::default(),
    }
}
