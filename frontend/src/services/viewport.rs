use dashboard_domain::{LayoutSnapshot, PickerError, ViewportObserver};
use gloo::events::EventListener;
use shared::{LayoutRect, ViewportSize};
use wasm_bindgen::JsValue;
use web_sys::Element;
use yew::{Callback, NodeRef};

const DIALOG_SELECTOR: &str = "[role='dialog']";

/// Browser-backed viewport observer: reads the trigger's bounding box and
/// listens for window resize/orientation changes while the picker is open.
pub struct WebViewportObserver {
    trigger: NodeRef,
    on_layout_change: Callback<()>,
    listeners: Vec<EventListener>,
}

impl WebViewportObserver {
    pub fn new(trigger: NodeRef, on_layout_change: Callback<()>) -> Self {
        Self {
            trigger,
            on_layout_change,
            listeners: Vec::new(),
        }
    }
}

fn rect_of(element: &Element) -> LayoutRect {
    let rect = element.get_bounding_client_rect();
    LayoutRect {
        left: rect.left(),
        top: rect.top(),
        right: rect.right(),
        bottom: rect.bottom(),
    }
}

fn window_dimension(name: &str, value: Result<JsValue, JsValue>) -> Result<f64, PickerError> {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|v| v.is_finite())
        .ok_or_else(|| PickerError::ViewportUnavailable(format!("could not read window.{}", name)))
}

impl ViewportObserver for WebViewportObserver {
    fn measure(&self) -> Result<LayoutSnapshot, PickerError> {
        let trigger = self
            .trigger
            .cast::<Element>()
            .ok_or(PickerError::TriggerNotMounted)?;
        let window = web_sys::window()
            .ok_or_else(|| PickerError::ViewportUnavailable("no window".to_string()))?;

        let boundary = trigger
            .closest(DIALOG_SELECTOR)
            .ok()
            .flatten()
            .map(|dialog| rect_of(&dialog));

        Ok(LayoutSnapshot {
            trigger: rect_of(&trigger),
            viewport: ViewportSize {
                width: window_dimension("innerWidth", window.inner_width())?,
                height: window_dimension("innerHeight", window.inner_height())?,
            },
            boundary,
        })
    }

    fn attach(&mut self) {
        if !self.listeners.is_empty() {
            return;
        }
        let Some(window) = web_sys::window() else {
            log::warn!("No window available, picker will not follow resizes");
            return;
        };

        for event in ["resize", "orientationchange"] {
            let on_layout_change = self.on_layout_change.clone();
            self.listeners.push(EventListener::new(&window, event, move |_| {
                on_layout_change.emit(());
            }));
        }
    }

    fn detach(&mut self) {
        // Dropping an EventListener unregisters it
        self.listeners.clear();
    }
}
