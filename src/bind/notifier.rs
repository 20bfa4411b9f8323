//! Cross-thread Notifier
//!
//! Lets any thread request that a fixed target function run on the
//! thread that owns the event loop, without sharing memory with that
//! loop. The sending side is [`NotifyHandle`]; the receiving side is
//! [`AsyncNotifier`], which stays on the loop-owning thread and delivers
//! queued payloads when that thread decides to drain.
//!
//! Every payload is queued explicitly, so unlike wake-signal schemes
//! that collapse rapid notifications into one, delivery is exactly once
//! per [`notify`](NotifyHandle::notify) call and in send order.

use std::time::Duration;

/// Sending half of a notifier. Cheap to clone, usable from any thread,
/// including the loop-owning thread itself.
pub struct NotifyHandle<T> {
    tx: flume::Sender<T>,
}

impl<T> Clone for NotifyHandle<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: Send> NotifyHandle<T> {
    /// Enqueues `payload` for delivery on the owning thread and returns
    /// immediately. Fire-and-forget: there is no way to wait for the
    /// target to run, and if the [`AsyncNotifier`] has been dropped the
    /// payload is silently discarded.
    pub fn notify(&self, payload: T) {
        let _ = self.tx.send(payload);
    }
}

/// Receiving half of a notifier; owns the bound target function.
///
/// Lives on the loop-owning thread. The target is bound once at
/// construction and invoked exactly once per queued payload, only from
/// [`deliver_pending`](Self::deliver_pending) or
/// [`deliver_next`](Self::deliver_next).
///
/// There is no supervisory boundary around the target: a panic escaping
/// it propagates to the delivering thread.
pub struct AsyncNotifier<T> {
    // Keeping a sender here means the channel only disconnects when the
    // notifier itself is dropped, never while handles are still out.
    tx: flume::Sender<T>,
    rx: flume::Receiver<T>,
    target: Box<dyn FnMut(T)>,
}

impl<T: Send + 'static> AsyncNotifier<T> {
    /// Binds `target` for the lifetime of this notifier.
    #[must_use]
    pub fn new(target: impl FnMut(T) + 'static) -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            tx,
            rx,
            target: Box::new(target),
        }
    }

    /// A new sending handle for this notifier.
    #[must_use]
    pub fn handle(&self) -> NotifyHandle<T> {
        NotifyHandle {
            tx: self.tx.clone(),
        }
    }

    /// Delivers every payload queued so far, in send order, invoking the
    /// target once per payload. Returns the number delivered.
    pub fn deliver_pending(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(payload) = self.rx.try_recv() {
            log::trace!("notifier delivery on {:?}", std::thread::current().id());
            (self.target)(payload);
            delivered += 1;
        }
        delivered
    }

    /// Blocks up to `timeout` for one payload and delivers it. Returns
    /// `false` if the timeout elapsed with the queue empty.
    pub fn deliver_next(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(payload) => {
                log::trace!("notifier delivery on {:?}", std::thread::current().id());
                (self.target)(payload);
                true
            }
            Err(_) => false,
        }
    }

    /// Number of payloads queued and not yet delivered.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}
