//! Transient, auto-dismissing toast notifications

use std::time::{Duration, Instant};

/// Shown after the simulated submission completes
pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Where a notification is in its lifetime
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationPhase {
    /// Sliding in, progress 0.0 to 1.0
    Entering(f32),
    Visible,
    /// Sliding out, progress 0.0 to 1.0
    Leaving(f32),
    /// Past its removal transition, about to be discarded
    Expired,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: Instant,
}

/// Owns every live notification; each one manages its own lifetime.
#[derive(Debug)]
pub struct Notifier {
    notifications: Vec<Notification>,
    display: Duration,
    exit: Duration,
    next_id: u64,
}

impl Notifier {
    pub fn new(display: Duration, exit: Duration) -> Self {
        Self {
            notifications: Vec::new(),
            display,
            exit,
            next_id: 0,
        }
    }

    /// Show a notification immediately; returns its id
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        tracing::debug!("Showing notification {id}: {message}");
        self.notifications.push(Notification {
            id,
            kind,
            message,
            shown_at: now,
        });
        id
    }

    pub fn phase(&self, notification: &Notification, now: Instant) -> NotificationPhase {
        let elapsed = now.saturating_duration_since(notification.shown_at);
        if elapsed < self.exit {
            NotificationPhase::Entering(progress(elapsed, self.exit))
        } else if elapsed < self.display {
            NotificationPhase::Visible
        } else if elapsed < self.display + self.exit {
            NotificationPhase::Leaving(progress(elapsed - self.display, self.exit))
        } else {
            NotificationPhase::Expired
        }
    }

    /// Discard notifications whose removal transition has finished
    pub fn tick(&mut self, now: Instant) {
        let before = self.notifications.len();
        let display = self.display;
        let exit = self.exit;
        self.notifications
            .retain(|n| now.saturating_duration_since(n.shown_at) < display + exit);
        let removed = before - self.notifications.len();
        if removed > 0 {
            tracing::debug!("Discarded {removed} expired notification(s)");
        }
    }

    /// Live notifications with their current phase, oldest first
    pub fn visible(&self, now: Instant) -> impl Iterator<Item = (&Notification, NotificationPhase)> {
        self.notifications
            .iter()
            .map(move |n| (n, self.phase(n, now)))
            .filter(|(_, phase)| *phase != NotificationPhase::Expired)
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}
