use dioxus::core::Task;

/// A running timer that can be stopped.
pub trait TimerHandle {
    fn cancel(self);
}

impl TimerHandle for Task {
    fn cancel(self) {
        Task::cancel(self);
    }
}

/// Owns at most one live timer.
///
/// The slot is active exactly when it holds a handle. Installing a new handle
/// cancels the one it replaces.
#[derive(Debug)]
pub struct TimerSlot<H: TimerHandle> {
    handle: Option<H>,
}

impl<H: TimerHandle> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: TimerHandle> TimerSlot<H> {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn replace(&mut self, handle: H) {
        if let Some(previous) = self.handle.replace(handle) {
            previous.cancel();
        }
    }

    /// Cancel the held timer. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    /// Forget the held timer without cancelling it, for a timer that is
    /// finishing on its own.
    pub fn release(&mut self) -> Option<H> {
        self.handle.take()
    }
}
