//! Test doubles shared by the controller tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use shared::{LayoutRect, ViewportSize};

use crate::error::PickerError;
use crate::viewport::{LayoutSnapshot, ViewportObserver};

/// Side effects recorded in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverEvent {
    Attach,
    Detach,
    Commit,
}

/// Shared, cloneable log so the commit callback and the observer write into
/// the same sequence
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<ObserverEvent>>>);

impl EventLog {
    pub fn push(&self, event: ObserverEvent) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<ObserverEvent> {
        self.0.borrow().clone()
    }
}

/// Trigger near the top-left of a 1280x800 window, no dialog
pub fn roomy_layout() -> LayoutSnapshot {
    LayoutSnapshot {
        trigger: LayoutRect::new(100.0, 100.0, 320.0, 40.0),
        viewport: ViewportSize {
            width: 1280.0,
            height: 800.0,
        },
        boundary: None,
    }
}

pub struct FakeViewportObserver {
    log: EventLog,
    layout: RefCell<Result<LayoutSnapshot, PickerError>>,
    attached: bool,
    measures: Cell<usize>,
}

impl FakeViewportObserver {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            layout: RefCell::new(Ok(roomy_layout())),
            attached: false,
            measures: Cell::new(0),
        }
    }

    /// Script what the next `measure` calls return
    pub fn set_layout(&self, layout: Result<LayoutSnapshot, PickerError>) {
        *self.layout.borrow_mut() = layout;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn measure_count(&self) -> usize {
        self.measures.get()
    }
}

impl ViewportObserver for FakeViewportObserver {
    fn measure(&self) -> Result<LayoutSnapshot, PickerError> {
        self.measures.set(self.measures.get() + 1);
        match &*self.layout.borrow() {
            Ok(layout) => Ok(*layout),
            Err(PickerError::ViewportUnavailable(reason)) => {
                Err(PickerError::ViewportUnavailable(reason.clone()))
            }
            Err(_) => Err(PickerError::TriggerNotMounted),
        }
    }

    fn attach(&mut self) {
        self.attached = true;
        self.log.push(ObserverEvent::Attach);
    }

    fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            self.log.push(ObserverEvent::Detach);
        }
    }
}
