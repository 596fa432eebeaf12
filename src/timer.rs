use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::TimerError;

/// Deferred callback run once on the UI thread.
pub type Task = Box<dyn FnOnce()>;

/// Schedules one-shot callbacks after a delay.
pub trait Timer {
    fn schedule(&self, delay: Duration, task: Task) -> Result<(), TimerError>;
}

impl<T: Timer + ?Sized> Timer for Rc<T> {
    fn schedule(&self, delay: Duration, task: Task) -> Result<(), TimerError> {
        (**self).schedule(delay, task)
    }
}

/// `window.setTimeout` backed timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn schedule(&self, delay: Duration, task: Task) -> Result<(), TimerError> {
        let window = web_sys::window().ok_or(TimerError::NoWindow)?;
        let millis = i32::try_from(delay.as_millis())
            .map_err(|_| TimerError::DelayOutOfRange(delay))?;

        // once_into_js frees the closure after its single invocation
        let callback = Closure::once_into_js(move || task());
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                millis,
            )
            .map_err(|e| TimerError::Schedule(format!("{e:?}")))?;
        Ok(())
    }
}

#[cfg(test)]
pub use manual::ManualTimer;
