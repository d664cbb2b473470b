use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent};
use yew::{Callback, NodeRef};

use crate::choreography::cursor::Point;
use crate::choreography::reveal::RevealChange;
use crate::choreography::timeline::frame_label;
use crate::choreography::{Choreographer, FrameUpdate};
use crate::config::PARALLAX_SHIFT;
use crate::content;
use crate::dom::{self, AnimationFrameLoop, EventListener};
use crate::stage::StageRefs;

// Everything bound while the page runs the pinned desktop layout. Dropping it
// unbinds all of it and puts the animated elements back as the markup renders them.
pub struct DesktopSession {
    refs: StageRefs,
    _listeners: Vec<EventListener>,
    _frames: Option<AnimationFrameLoop>,
}

impl DesktopSession {
    pub fn enter(refs: StageRefs, on_resize: Callback<f64>) -> Option<Self> {
        let window = window()?;
        let document = window.document()?;
        let width = dom::viewport_width().unwrap_or(0.0);

        let engine = Rc::new(RefCell::new(Choreographer::new(
            &content::reveal_counts(),
            width,
        )));
        let mut listeners = Vec::new();

        let scroll_handler = {
            let engine = engine.clone();
            let wrapper = refs.wrapper.clone();
            move || {
                if let Some(offset) = pinned_offset(&wrapper) {
                    engine.borrow_mut().scroll_to(offset);
                }
            }
        };

        listeners.extend(EventListener::new(&window, "scroll", move |_| scroll_handler()));

        listeners.extend(EventListener::new(&window, "resize", {
            let engine = engine.clone();
            let wrapper = refs.wrapper.clone();
            let on_resize = on_resize.clone();
            move |_| {
                let Some(width) = dom::viewport_width() else {
                    return;
                };
                let offset = pinned_offset(&wrapper).unwrap_or(0.0);
                engine.borrow_mut().resize(width, offset);
                on_resize.emit(width);
            }
        }));

        listeners.extend(EventListener::new(&document, "mousemove", {
            let engine = engine.clone();
            move |event| {
                if let Ok(event) = event.dyn_into::<MouseEvent>() {
                    let point = Point::new(event.client_x() as f64, event.client_y() as f64);
                    engine.borrow_mut().pointer_moved(point, now());
                }
            }
        }));

        for panel in &refs.panels {
            if let Some(label) = panel.descriptor.cursor_label {
                bind_hover(&mut listeners, &engine, &panel.section, Some(label));
            }
            for (target, label) in panel.hover_targets.iter().zip(panel.descriptor.hover_labels) {
                bind_hover(&mut listeners, &engine, target, Some(*label));
            }
        }

        let frames = AnimationFrameLoop::start({
            let engine = engine.clone();
            let refs = refs.clone();
            move |timestamp| {
                let update = engine.borrow_mut().tick(timestamp);
                apply(&refs, &update);
            }
        });

        // Sprockets and the pin spacer follow the width the session started with
        on_resize.emit(width);
        if let Some(offset) = pinned_offset(&refs.wrapper) {
            engine.borrow_mut().jump_to(offset);
        }

        info!(
            "desktop session bound ({} listeners live)",
            dom::live_listeners()
        );

        Some(Self {
            refs,
            _listeners: listeners,
            _frames: frames,
        })
    }

    fn revert(&self) {
        let refs = &self.refs;
        if let Some(track) = refs.track.cast::<HtmlElement>() {
            dom::clear_style(&track, "transform");
        }
        if let Some(progress) = refs.progress.cast::<HtmlElement>() {
            dom::clear_style(&progress, "width");
        }
        if let Some(frame) = refs.frame.cast::<HtmlElement>() {
            frame.set_text_content(Some(&frame_label(1)));
        }
        if let Some(cursor) = refs.cursor.cast::<HtmlElement>() {
            dom::clear_style(&cursor, "transform");
            dom::toggle_class(&cursor, "hovered", false);
            let _ = cursor.set_attribute("data-text", "");
        }
        for panel in &refs.panels {
            if let Some(section) = panel.section.cast::<HtmlElement>() {
                dom::toggle_class(&section, "revealed", false);
            }
            if let Some(image) = panel.parallax.cast::<HtmlElement>() {
                dom::clear_style(&image, "transform");
            }
        }
    }
}

impl Drop for DesktopSession {
    fn drop(&mut self) {
        self.revert();
        debug!("desktop session released");
    }
}

fn bind_hover(
    listeners: &mut Vec<EventListener>,
    engine: &Rc<RefCell<Choreographer>>,
    target: &NodeRef,
    label: Option<&'static str>,
) {
    let Some(element) = target.cast::<HtmlElement>() else {
        return;
    };

    listeners.extend(EventListener::new(&element, "mouseenter", {
        let engine = engine.clone();
        move |_| engine.borrow_mut().hover_enter(label)
    }));
    listeners.extend(EventListener::new(&element, "mouseleave", {
        let engine = engine.clone();
        move |_| engine.borrow_mut().hover_leave()
    }));
}

fn pinned_offset(wrapper: &NodeRef) -> Option<f64> {
    let wrapper = wrapper.cast::<HtmlElement>()?;
    Some(dom::scroll_y()? - wrapper.offset_top() as f64)
}

fn now() -> f64 {
    window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

fn apply(refs: &StageRefs, update: &FrameUpdate) {
    if let Some(track) = refs.track.cast::<HtmlElement>() {
        dom::set_style(
            &track,
            "transform",
            &format!("translate3d({:.2}px, 0, 0)", update.motion.translate_x),
        );
    }
    if let Some(progress) = refs.progress.cast::<HtmlElement>() {
        dom::set_style(&progress, "width", &format!("{:.3}%", update.progress * 100.0));
    }
    if let Some(frame) = refs.frame.cast::<HtmlElement>() {
        let label = frame_label(update.frame_index);
        if frame.text_content().as_deref() != Some(label.as_str()) {
            frame.set_text_content(Some(&label));
        }
    }

    for (panel, sample) in refs.panels.iter().zip(&update.motion.panels) {
        if !panel.descriptor.parallax {
            continue;
        }
        if let Some(image) = panel.parallax.cast::<HtmlElement>() {
            let shift = sample.parallax * PARALLAX_SHIFT * 100.0;
            dom::set_style(&image, "transform", &format!("translate3d({:.3}%, 0, 0)", shift));
        }
    }

    for change in &update.reveals {
        let (index, on) = match *change {
            RevealChange::Play(index) => (index, true),
            RevealChange::Reverse(index) => (index, false),
        };
        if let Some(section) = refs.panels.get(index).and_then(|panel| panel.section.cast::<HtmlElement>()) {
            dom::toggle_class(&section, "revealed", on);
        }
    }

    if let Some(cursor) = refs.cursor.cast::<HtmlElement>() {
        let position = update.cursor_position;
        dom::set_style(
            &cursor,
            "transform",
            &format!("translate3d({:.1}px, {:.1}px, 0)", position.x, position.y),
        );
        if let Some(hover) = &update.cursor_hover {
            dom::toggle_class(&cursor, "hovered", hover.hovered);
            let _ = cursor.set_attribute("data-text", &hover.label);
        }
    }
}
