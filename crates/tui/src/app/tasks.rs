use std::{
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use tokio::task::JoinHandle;

use super::event::{AppEvent, EventSender, deliver};

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Process-wide unique id used to match background results to the request
/// that produced them.
pub fn next_ticket() -> u64 {
    NEXT_TICKET.fetch_add(1, Ordering::Relaxed)
}

/// A spawned task that is aborted when the handle is dropped.
#[derive(Debug)]
pub struct TaskHandle(JoinHandle<()>);

impl TaskHandle {
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self(tokio::spawn(future))
    }

    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Background work owned by a screen or by the app shell.
///
/// Every task still pending when the scope is dropped is aborted, so a timer
/// can never deliver an event on behalf of an owner that no longer exists.
#[derive(Debug, Default)]
pub struct TaskScope {
    tasks: Vec<TaskHandle>,
}

impl TaskScope {
    pub fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.push(TaskHandle::spawn(future));
    }

    /// Delivers `event` after `delay`.
    pub fn schedule(&mut self, delay: Duration, events: &EventSender, event: AppEvent) {
        let events = events.clone();
        self.spawn(async move {
            tokio::time::sleep(delay).await;
            deliver(&events, event);
        });
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }
}
