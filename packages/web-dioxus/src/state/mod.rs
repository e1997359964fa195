//! Global state management

use dioxus::prelude::*;
use nuber_core::NotificationSink;

/// How long a toast stays on screen
#[cfg(feature = "web")]
const TOAST_DURATION_MS: u32 = 3_000;

/// One transient notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Toast queue; doubles as the notification sink handed to form handlers
#[derive(Clone, Copy)]
pub struct ToastState {
    pub toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn push(&self, message: &str) -> u64 {
        let mut toasts = self.toasts;
        let mut next_id = self.next_id;

        let id = *next_id.peek();
        next_id.set(id + 1);
        toasts.write().push(Toast {
            id,
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|toast| toast.id != id);
    }
}

impl NotificationSink for ToastState {
    fn notify_error(&self, message: &str) {
        let id = self.push(message);

        #[cfg(feature = "web")]
        {
            let state = *self;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
                state.dismiss(id);
            });
        }

        #[cfg(not(feature = "web"))]
        let _ = id;
    }
}

/// Hook to access the toast queue
pub fn use_toasts() -> ToastState {
    use_context::<ToastState>()
}
