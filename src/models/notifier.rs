use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::models::{Alert, AlertSlot, ClearPolicy};
use crate::timer::Timer;

/// Receives every change of the visible alert.
pub type AlertSink = Box<dyn Fn(Option<Alert>)>;

struct Shared {
    slot: RefCell<AlertSlot>,
    sink: AlertSink,
}

impl Shared {
    fn publish(&self) {
        let current = self.slot.borrow().current().cloned();
        (self.sink)(current);
    }

    fn expire(&self, generation: u64) {
        let cleared = self.slot.borrow_mut().expire(generation);
        if cleared {
            self.publish();
        }
    }
}

/// Drives an [`AlertSlot`] with a timer and pushes changes to a sink.
///
/// Timer callbacks only hold a weak reference, so dropping the notifier
/// turns every pending clear into a no-op.
pub struct Notifier<T: Timer> {
    shared: Rc<Shared>,
    timer: T,
    display_for: Duration,
}

impl<T: Timer> Notifier<T> {
    pub fn new(
        timer: T,
        display_for: Duration,
        policy: ClearPolicy,
        sink: impl Fn(Option<Alert>) + 'static,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                slot: RefCell::new(AlertSlot::new(policy)),
                sink: Box::new(sink),
            }),
            timer,
            display_for,
        }
    }

    /// Show `alert` now and schedule its clear.
    pub fn trigger(&self, alert: Alert) {
        let generation = self.shared.slot.borrow_mut().show(alert);
        self.shared.publish();

        let shared: Weak<Shared> = Rc::downgrade(&self.shared);
        let task = Box::new(move || {
            if let Some(shared) = shared.upgrade() {
                shared.expire(generation);
            }
        });

        if let Err(e) = self.timer.schedule(self.display_for, task) {
            // Alert stays up until replaced or dismissed
            web_sys::console::error_1(&format!("Failed to schedule alert clear: {e}").into());
        }
    }

    /// Hide the current alert and cancel its pending clear.
    pub fn dismiss(&self) {
        let cleared = self.shared.slot.borrow_mut().dismiss();
        if cleared {
            self.shared.publish();
        }
    }
}
