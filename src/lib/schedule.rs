//! One-shot timers for delayed UI work such as feedback removal and the
//! post-success redirect. A handle cancels its task when dropped, so storing a
//! new handle over an old one releases the superseded timer.

#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;

/// Handle for a scheduled task. Dropping the handle cancels the task.
pub struct TaskHandle {
    #[cfg(target_arch = "wasm32")]
    timeout: Option<Timeout>,
}

impl TaskHandle {
    /// Cancels the scheduled task.
    pub fn cancel(self) {}
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        if let Some(timeout) = self.timeout.take() {
            timeout.cancel();
        }
    }
}

/// Schedules `task` to run once after `delay_ms` milliseconds. Outside the
/// browser the task never fires; tests drive completions directly.
pub fn schedule_once<F>(delay_ms: u32, task: F) -> TaskHandle
where
    F: FnOnce() + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        TaskHandle {
            timeout: Some(Timeout::new(delay_ms, task)),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (delay_ms, task);
        TaskHandle {}
    }
}

#[cfg(test)]
mod tests {
    use super::schedule_once;

    #[test]
    fn handles_can_be_cancelled_or_dropped() {
        let handle = schedule_once(300, || {});
        handle.cancel();

        let replaced = schedule_once(300, || {});
        drop(replaced);
    }
}
