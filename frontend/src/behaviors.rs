pub mod counter;
pub mod faq;
pub mod forms;
pub mod links;
pub mod motion;
pub mod navigation;
pub mod reveal;
pub mod scroll;
pub mod service_worker;
pub mod typewriter;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use crate::config::Config;
use crate::dom::{Listener, Observer};
use crate::state::ViewState;

pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: Config,
}

impl Page {
    pub fn new(config: Config) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        Ok(Self {
            window,
            document,
            config,
        })
    }
}

pub type SharedState = Rc<RefCell<ViewState>>;

#[derive(Default)]
pub struct Bindings {
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
    created: Vec<Element>,
}

impl Bindings {
    pub fn listen(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn observe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub fn created(&mut self, element: Element) {
        self.created.push(element);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for Bindings {
    fn drop(&mut self) {
        for element in self.created.drain(..) {
            element.remove();
        }
    }
}
