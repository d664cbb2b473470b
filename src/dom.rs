use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, EventTarget, HtmlElement};

use crate::config;

thread_local! {
    static LIVE_LISTENERS: Cell<usize> = Cell::new(0);
}

// Listeners currently attached through EventListener
pub fn live_listeners() -> usize {
    LIVE_LISTENERS.with(Cell::get)
}

// A DOM event listener that is removed again when dropped
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        LIVE_LISTENERS.with(|live| live.set(live.get() + 1));

        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        LIVE_LISTENERS.with(|live| live.set(live.get().saturating_sub(1)));
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

// Calls tick on every animation frame until dropped
pub struct AnimationFrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationFrameLoop {
    pub fn start<F>(mut tick: F) -> Option<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let window = window()?;
        let handle = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let next_handle = handle.clone();
        let next_callback = callback.clone();
        let next_window = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            tick(timestamp);
            // The slot is emptied on drop, which also ends the loop.
            if let Some(callback) = next_callback.borrow().as_ref() {
                next_handle.set(
                    next_window
                        .request_animation_frame(callback.as_ref().unchecked_ref())
                        .ok(),
                );
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(first) = callback.borrow().as_ref() {
            handle.set(window.request_animation_frame(first.as_ref().unchecked_ref()).ok());
        }

        Some(Self { handle, callback })
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        if let (Some(window), Some(handle)) = (window(), self.handle.take()) {
            let _ = window.cancel_animation_frame(handle);
        }
        // Breaks the Rc cycle between the closure and its own slot.
        self.callback.borrow_mut().take();
    }
}

pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

pub fn scroll_y() -> Option<f64> {
    window()?.scroll_y().ok()
}

// None before the page has a window
pub fn mobile_media_matches() -> Option<bool> {
    let query = window()?.match_media(config::MOBILE_MEDIA_QUERY).ok()??;
    Some(query.matches())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn clear_style(element: &HtmlElement, property: &str) {
    let _ = element.style().remove_property(property);
}

pub fn toggle_class(element: &HtmlElement, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}
