use std::fmt;

use serde::Deserialize;

/// Presentation category of an alert.
///
/// Known tags map onto the stylesheet's contextual classes. Any other tag is
/// kept verbatim so callers can introduce their own categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
    Warning,
    Info,
    Primary,
    Secondary,
    Other(String),
}

impl AlertKind {
    /// Tag as it appears in CSS class names
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Other(tag) => tag,
        }
    }

    /// CSS classes for the banner element
    pub fn css_class(&self) -> String {
        format!("alert alert-{} alert-dismissible", self.as_str())
    }

    /// Short heading shown in front of the message, e.g. "Danger".
    pub fn label(&self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

impl From<&str> for AlertKind {
    fn from(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "danger" => Self::Danger,
            "warning" => Self::Warning,
            "info" => Self::Info,
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            _ => Self::Other(tag.to_string()),
        }
    }
}

impl From<String> for AlertKind {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient message shown in the alert banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
}

impl Alert {
    pub fn new(message: impl Into<String>, kind: impl Into<AlertKind>) -> Self {
        Self {
            message: message.into(),
            kind: kind.into(),
        }
    }
}

/// Decides what a scheduled clear does when a newer alert has replaced the
/// one that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClearPolicy {
    /// Only the clear belonging to the latest alert empties the slot.
    #[default]
    LatestWins,
    /// Every scheduled clear empties the slot, even if it belongs to an
    /// alert that has since been replaced.
    Unconditional,
}

/// Single-slot alert holder.
///
/// Every `show` and `dismiss` bumps the generation. A scheduled clear carries
/// the generation it was issued for and is honoured according to the policy.
#[derive(Debug, Clone, Default)]
pub struct AlertSlot {
    current: Option<Alert>,
    generation: u64,
    policy: ClearPolicy,
}

impl AlertSlot {
    pub fn new(policy: ClearPolicy) -> Self {
        Self {
            current: None,
            generation: 0,
            policy,
        }
    }

    /// Replace whatever is shown; returns the generation to expire later.
    pub fn show(&mut self, alert: Alert) -> u64 {
        self.generation += 1;
        self.current = Some(alert);
        self.generation
    }

    /// Handle a scheduled clear. Returns true if the slot was emptied.
    pub fn expire(&mut self, generation: u64) -> bool {
        let stale = generation != self.generation;
        if stale && self.policy == ClearPolicy::LatestWins {
            return false;
        }
        self.current.take().is_some()
    }

    /// Clear immediately and invalidate every pending clear.
    pub fn dismiss(&mut self) -> bool {
        self.generation += 1;
        self.current.take().is_some()
    }

    pub const fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }
}
