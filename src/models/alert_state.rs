use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::config::AppConfig;
use crate::models::{Alert, AlertKind, Notifier};
use crate::timer::{BrowserTimer, Timer};

/// Alert state owned by the root component.
///
/// Not provided through context: the root hands out the read side to the
/// banner and a [`ShowAlert`] capability to the pages that may raise alerts.
#[derive(Clone, Copy)]
pub struct AlertState {
    /// Currently visible alert (if any)
    alert: RwSignal<Option<Alert>>,
    notifier: StoredValue<Notifier<Rc<dyn Timer>>, LocalStorage>,
}

impl AlertState {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_timer(Rc::new(BrowserTimer), config)
    }

    pub fn with_timer(timer: Rc<dyn Timer>, config: &AppConfig) -> Self {
        let alert = RwSignal::new(None);
        let notifier = Notifier::new(
            timer,
            config.alert_duration(),
            config.clear_policy,
            move |current| alert.set(current),
        );

        Self {
            alert,
            notifier: StoredValue::new_local(notifier),
        }
    }

    /// Read-only view for the display surface
    pub fn alert(&self) -> Signal<Option<Alert>> {
        self.alert.into()
    }

    pub fn show(&self, message: impl Into<String>, kind: impl Into<AlertKind>) {
        let alert = Alert::new(message, kind);
        self.notifier.with_value(|notifier| notifier.trigger(alert));
    }

    pub fn dismiss(&self) {
        self.notifier.with_value(Notifier::dismiss);
    }

    /// Capability handed to pages
    pub const fn show_alert(&self) -> ShowAlert {
        ShowAlert { state: *self }
    }
}

/// The only way a page can raise an alert.
///
/// Accepts any message and tag, returns nothing and never fails.
#[derive(Clone, Copy)]
pub struct ShowAlert {
    state: AlertState,
}

impl ShowAlert {
    pub fn show(&self, message: impl Into<String>, kind: impl Into<AlertKind>) {
        self.state.show(message, kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ALERT_DURATION_MS;
    use crate::models::ClearPolicy;
    use crate::timer::ManualTimer;

    fn in_owner(f: impl FnOnce()) {
        let owner = Owner::new();
        owner.with(f);
    }

    fn state_with(timer: &Rc<ManualTimer>, policy: ClearPolicy) -> AlertState {
        let config = AppConfig {
            clear_policy: policy,
            ..AppConfig::default()
        };
        let timer: Rc<dyn Timer> = Rc::clone(timer) as Rc<dyn Timer>;
        AlertState::with_timer(timer, &config)
    }

    fn banner_message(state: &AlertState) -> Option<String> {
        state.alert().get_untracked().map(|a| a.message)
    }

    #[test]
    fn test_show_reaches_banner_signal() {
        in_owner(|| {
            let timer = Rc::new(ManualTimer::new());
            let state = state_with(&timer, ClearPolicy::LatestWins);
            assert!(state.alert().get_untracked().is_none());

            state.show_alert().show("Invalid credentials", "danger");
            assert_eq!(
                state.alert().get_untracked(),
                Some(Alert::new("Invalid credentials", AlertKind::Danger))
            );

            timer.advance_to(u64::from(DEFAULT_ALERT_DURATION_MS) - 1);
            assert!(state.alert().get_untracked().is_some());
            timer.advance_to(u64::from(DEFAULT_ALERT_DURATION_MS));
            assert!(state.alert().get_untracked().is_none());
        });
    }

    #[test]
    fn test_newer_alert_survives_older_clear_on_signal() {
        in_owner(|| {
            let timer = Rc::new(ManualTimer::new());
            let state = state_with(&timer, ClearPolicy::LatestWins);

            state.show("A", "info");
            timer.advance_to(1000);
            state.show("B", "info");
            timer.advance_to(1600);
            assert_eq!(banner_message(&state).as_deref(), Some("B"));
            timer.advance_to(2500);
            assert!(banner_message(&state).is_none());
        });
    }

    #[test]
    fn test_dismiss_clears_banner_signal() {
        in_owner(|| {
            let timer = Rc::new(ManualTimer::new());
            let state = state_with(&timer, ClearPolicy::LatestWins);

            state.show("Saved", "success");
            state.dismiss();
            assert!(banner_message(&state).is_none());

            timer.advance_to(200);
            state.show("Again", "success");
            // The dismissed alert's clear at 1500 leaves this one alone
            timer.advance_to(1500);
            assert_eq!(banner_message(&state).as_deref(), Some("Again"));
        });
    }
}
