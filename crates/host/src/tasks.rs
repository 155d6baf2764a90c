//! Deferred startup queue
//!
//! Work queued here runs after the host finishes its asynchronous
//! startup/loading pipeline, on the UI thread. Mods use it for setup
//! that needs types which only exist once loading completes.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// A task to execute once startup completes
pub type StartupTask = Box<dyn FnOnce() + Send + 'static>;

/// Capacity of the startup queue
const QUEUE_CAPACITY: usize = 64;

/// Queue of one-shot tasks drained by the host after loading
pub struct StartupQueue {
    sender: Sender<StartupTask>,
    receiver: Receiver<StartupTask>,
}

impl Default for StartupQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl StartupQueue {
    pub fn new() -> Self {
        let (sender, receiver) = bounded(QUEUE_CAPACITY);
        Self { sender, receiver }
    }

    /// Queue a task to run once startup completes
    ///
    /// # Returns
    /// - `Ok(())` if the task was queued
    /// - `Err(())` if the queue is full (task is dropped)
    pub fn queue<F>(&self, task: F) -> Result<(), ()>
    where
        F: FnOnce() + Send + 'static,
    {
        match self.sender.try_send(Box::new(task)) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                tracing::warn!("Startup queue full, dropping task");
                Err(())
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!("Startup queue disconnected");
                Err(())
            }
        }
    }

    /// Run all queued tasks in FIFO order
    ///
    /// Called by the host on the UI thread once its startup pipeline
    /// completes. Returns the number of tasks run.
    pub fn run_pending(&self) -> usize {
        let mut count = 0;

        while let Ok(task) = self.receiver.try_recv() {
            task();
            count += 1;

            if count >= QUEUE_CAPACITY {
                break;
            }
        }

        if count > 0 {
            tracing::trace!("Ran {} startup tasks", count);
        }
        count
    }

    /// Number of tasks currently queued
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_tasks_run_in_fifo_order() {
        let queue = StartupQueue::new();
        let log = Arc::new(parking_lot::Mutex::new(Vec::new()));

        for i in 0..3 {
            let log = log.clone();
            queue.queue(move || log.lock().push(i)).unwrap();
        }

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.run_pending(), 3);
        assert_eq!(*log.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_second_drain_is_empty() {
        let queue = StartupQueue::new();
        queue.queue(|| {}).unwrap();

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(queue.run_pending(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_full_queue_rejects_task() {
        let queue = StartupQueue::new();
        let ran = Arc::new(AtomicUsize::new(0));

        for _ in 0..QUEUE_CAPACITY {
            let ran = ran.clone();
            queue
                .queue(move || {
                    ran.fetch_add(1, Ordering::Relaxed);
                })
                .unwrap();
        }

        // One past capacity is dropped
        assert!(queue.queue(|| {}).is_err());

        assert_eq!(queue.run_pending(), QUEUE_CAPACITY);
        assert_eq!(ran.load(Ordering::Relaxed), QUEUE_CAPACITY);
    }
}
