//! Browser event plumbing. Every registration here is owned by a guard
//! that unregisters on drop.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Event, EventTarget, MouseEvent, Storage, Window};

use crate::scene::{host::Host, Viewport};

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn viewport_of(win: &Window) -> Viewport {
    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(Viewport::FALLBACK.width);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(Viewport::FALLBACK.height);

    Viewport::new(width, height)
}

pub fn viewport() -> Viewport {
    window()
        .map(|win| viewport_of(&win))
        .unwrap_or(Viewport::FALLBACK)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` loop that reschedules itself until dropped.
pub struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start(mut handler: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = window()?;
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let tick = {
            let window = window.clone();
            let pending = pending.clone();
            let callback = callback.clone();
            Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
                pending.set(None);
                handler(timestamp);

                if let Some(next) = callback.borrow().as_ref() {
                    if let Ok(id) = window.request_animation_frame(next.as_ref().unchecked_ref()) {
                        pending.set(Some(id));
                    }
                }
            })
        };

        let id = window
            .request_animation_frame(tick.as_ref().unchecked_ref())
            .ok()?;
        pending.set(Some(id));
        *callback.borrow_mut() = Some(tick);

        Some(Self {
            window,
            pending,
            callback,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

/// A live registration made through [`WebHost`].
pub enum Registration {
    Event(Listener),
    Frames(FrameLoop),
    Unavailable,
}

impl From<Option<Listener>> for Registration {
    fn from(listener: Option<Listener>) -> Self {
        listener.map_or(Self::Unavailable, Self::Event)
    }
}

pub struct WebHost {
    window: Window,
}

impl WebHost {
    pub fn new() -> Option<Self> {
        Some(Self { window: window()? })
    }

    fn target(&self) -> EventTarget {
        self.window.clone().into()
    }
}

impl Host for WebHost {
    type Handle = Registration;

    fn viewport(&self) -> Viewport {
        viewport_of(&self.window)
    }

    fn on_resize(&self, mut handler: Box<dyn FnMut(Viewport)>) -> Registration {
        let window = self.window.clone();
        Listener::new(&self.target(), "resize", move |_| handler(viewport_of(&window))).into()
    }

    fn on_pointer(&self, mut handler: Box<dyn FnMut(f64, f64)>) -> Registration {
        Listener::new(&self.target(), "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                handler(f64::from(event.client_x()), f64::from(event.client_y()));
            }
        })
        .into()
    }

    fn on_scroll(&self, mut handler: Box<dyn FnMut(f64, f64)>) -> Registration {
        let window = self.window.clone();
        Listener::new(&self.target(), "scroll", move |_| {
            let offset = window.scroll_y().unwrap_or(0.0);
            handler(offset, viewport_of(&window).height);
        })
        .into()
    }

    fn on_frame(&self, handler: Box<dyn FnMut(f64)>) -> Registration {
        FrameLoop::start(handler).map_or(Registration::Unavailable, Registration::Frames)
    }
}
