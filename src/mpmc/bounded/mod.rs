use crate::error::CapacityError;
use crate::sync::atomic::AtomicBool;
use crate::sync::atomic::Ordering::{AcqRel, Acquire};
use crate::sync::{Condvar, Mutex, MutexGuard};
use std::collections::VecDeque;
use std::fmt;
use std::sync::PoisonError;
use tracing::{debug, trace};

cfg_not_loom! {
    use std::time::{Duration, Instant};
}

mod error;
#[doc(inline)]
pub use error::{PopError, PopTimeoutError, PushError, PushTimeoutError};

/// Decides what [`push`](BoundedQueue::push) and [`pop`](BoundedQueue::pop)
/// do when they can't complete right away.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Policy {
    /// Suspend the calling thread until the operation can complete
    /// or the queue is closed.
    Blocking,
    /// Fail with `Full`/`Empty` instead of suspending.
    NonBlocking,
}

/// A fixed capacity FIFO queue shared by any number of producers and consumers.
///
/// The queue is usually shared through an [`Arc`](std::sync::Arc); all
/// operations take `&self`. Messages leave the queue in the order their
/// pushes completed, across all producers.
///
/// Once [`close`](BoundedQueue::close)d, the queue rejects every push, lets
/// consumers drain whatever was still pending and then reports
/// [`PopError::Closed`]. Messages still queued when the queue is dropped
/// are dropped with it.
pub struct BoundedQueue<T> {
    /// Read without the lock only to reject operations early.
    closed: AtomicBool,
    capacity: usize,
    queue: Mutex<VecDeque<T>>,
    not_full: Condvar,
    not_empty: Condvar,
    /// Threads currently sleeping on either condvar.
    #[cfg(test)]
    parked: std::sync::atomic::AtomicUsize,
}

/// How long a blocked operation may wait.
enum Wait {
    Never,
    Forever,
    #[cfg(not(feature = "loom"))]
    Until(Option<Instant>),
}

/// Why an operation gave up.
#[derive(Clone, Copy)]
enum Rejection {
    WouldBlock,
    Closed,
    #[cfg(not(feature = "loom"))]
    TimedOut,
}

type Guard<'a, T> = MutexGuard<'a, VecDeque<T>>;

impl<T> BoundedQueue<T> {
    /// Creates a queue that holds at most `capacity` messages.
    ///
    /// # Panics
    ///
    /// The function panics if `capacity` is zero or if it can't
    /// allocate the memory needed for the queue.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(queue) => queue,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a queue that holds at most `capacity` messages,
    /// returning a [`CapacityError`] if `capacity` is zero.
    ///
    /// # Panics
    ///
    /// The function panics if it can't allocate the memory needed for the queue.
    pub fn try_new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError {});
        }
        Ok(Self {
            closed: AtomicBool::new(false),
            capacity,
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            #[cfg(test)]
            parked: Default::default(),
        })
    }

    /// Appends `item` to the back of the queue.
    ///
    /// If the queue is full, [`Policy::Blocking`] waits for a consumer to make
    /// room and [`Policy::NonBlocking`] returns [`PushError::Full`]. A closed
    /// queue always returns [`PushError::Closed`], even if it has room.
    /// The message is handed back inside the error.
    pub fn push(&self, item: T, policy: Policy) -> Result<(), PushError<T>> {
        let wait = match policy {
            Policy::Blocking => Wait::Forever,
            Policy::NonBlocking => Wait::Never,
        };
        self.push_inner(item, wait).map_err(|(item, why)| match why {
            Rejection::WouldBlock => PushError::Full(item),
            _ => PushError::Closed(item),
        })
    }

    /// Removes the message at the front of the queue.
    ///
    /// If the queue is empty, [`Policy::Blocking`] waits for a producer and
    /// [`Policy::NonBlocking`] returns [`PopError::Empty`].
    ///
    /// # Note
    ///
    /// A closed queue keeps handing out its pending messages. [`PopError::Closed`]
    /// is returned only once the queue is both closed and empty.
    pub fn pop(&self, policy: Policy) -> Result<T, PopError> {
        let wait = match policy {
            Policy::Blocking => Wait::Forever,
            Policy::NonBlocking => Wait::Never,
        };
        self.pop_inner(wait).map_err(|why| match why {
            Rejection::WouldBlock => PopError::Empty,
            _ => PopError::Closed,
        })
    }

    /// Closes the queue.
    ///
    /// Every thread blocked in [`push`](BoundedQueue::push) wakes up with
    /// [`PushError::Closed`]; threads blocked in [`pop`](BoundedQueue::pop)
    /// wake up, drain the remaining messages and then get [`PopError::Closed`].
    /// Closing an already closed queue does nothing.
    pub fn close(&self) {
        if self.closed.swap(true, AcqRel) {
            return;
        }
        /* Potential lost wake-up:
         *  1. a waiter takes the lock and finds the queue open.
         *  2. close() stores the flag and broadcasts; nobody is waiting yet.
         *  3. the waiter goes to sleep on the condvar and never wakes.
         *
         * Waiters check the flag while holding the lock, so taking it
         * once between the store and the broadcast rules this out.
         */
        let pending = self.lock().len();
        debug!(capacity = self.capacity, pending, "queue closed");
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    /// Checks if the queue has been [`close`](BoundedQueue::close)d.
    ///
    /// # Note
    ///
    /// A closed queue may still hold messages that [`pop`](BoundedQueue::pop) will return.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Acquire)
    }

    /// Returns the maximum number of messages the queue can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of pending messages.
    ///
    /// The value may be stale by the time it's read if other threads are using the queue.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Checks if the queue has no pending messages.
    ///
    /// The value may be stale by the time it's read if other threads are using the queue.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn push_inner(&self, item: T, wait: Wait) -> Result<(), (T, Rejection)> {
        if self.is_closed() {
            return Err((item, Rejection::Closed));
        }
        let mut queue = self.lock();
        loop {
            if self.is_closed() {
                return Err((item, Rejection::Closed));
            }
            if queue.len() < self.capacity {
                break;
            }
            trace!(capacity = self.capacity, "push waiting for space");
            queue = match self.park(&self.not_full, queue, &wait) {
                Ok(queue) => queue,
                Err(why) => return Err((item, why)),
            };
            trace!(len = queue.len(), "push woke up");
        }
        queue.push_back(item);
        debug_assert!(queue.len() <= self.capacity);
        drop(queue);
        self.not_empty.notify_one();
        Ok(())
    }

    fn pop_inner(&self, wait: Wait) -> Result<T, Rejection> {
        let mut queue = self.lock();
        let item = loop {
            if let Some(item) = queue.pop_front() {
                break item;
            }
            if self.is_closed() {
                return Err(Rejection::Closed);
            }
            trace!("pop waiting for a message");
            queue = self.park(&self.not_empty, queue, &wait)?;
            trace!(len = queue.len(), "pop woke up");
        };
        drop(queue);
        self.not_full.notify_one();
        Ok(item)
    }

    /// Sleeps on `condvar` according to `wait`.
    ///
    /// Returns the reacquired guard; the caller must re-check its condition.
    fn park<'a>(
        &self,
        condvar: &Condvar,
        guard: Guard<'a, T>,
        wait: &Wait,
    ) -> Result<Guard<'a, T>, Rejection> {
        match *wait {
            Wait::Never => Err(Rejection::WouldBlock),
            Wait::Forever => Ok(self.sleeping(|| condvar.wait(guard))
                .unwrap_or_else(PoisonError::into_inner)),
            #[cfg(not(feature = "loom"))]
            Wait::Until(None) => Ok(self.sleeping(|| condvar.wait(guard))
                .unwrap_or_else(PoisonError::into_inner)),
            #[cfg(not(feature = "loom"))]
            Wait::Until(Some(deadline)) => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() {
                    return Err(Rejection::TimedOut);
                }
                //spurious wake-ups don't extend the deadline, it's recomputed on every call.
                let (guard, _) = self
                    .sleeping(|| condvar.wait_timeout(guard, remaining))
                    .unwrap_or_else(PoisonError::into_inner);
                Ok(guard)
            }
        }
    }

    #[cfg(not(test))]
    #[inline(always)]
    fn sleeping<R>(&self, wait: impl FnOnce() -> R) -> R {
        wait()
    }

    //counted under the lock, so a waiter seen here is asleep once the lock is free.
    #[cfg(test)]
    fn sleeping<R>(&self, wait: impl FnOnce() -> R) -> R {
        use std::sync::atomic::Ordering::SeqCst;
        self.parked.fetch_add(1, SeqCst);
        let ret = wait();
        self.parked.fetch_sub(1, SeqCst);
        ret
    }

    fn lock(&self) -> Guard<'_, T> {
        //no user code runs under the lock, so a poisoned lock still guards a valid queue.
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

cfg_not_loom! {
impl<T> BoundedQueue<T> {
    /// Like [`push`](BoundedQueue::push) with [`Policy::Blocking`],
    /// but gives up after `timeout`.
    ///
    /// The message is handed back inside the error.
    pub fn push_timeout(&self, item: T, timeout: Duration) -> Result<(), PushTimeoutError<T>> {
        let deadline = Instant::now().checked_add(timeout);
        self.push_inner(item, Wait::Until(deadline))
            .map_err(|(item, why)| match why {
                Rejection::TimedOut => PushTimeoutError::Timeout(item),
                _ => PushTimeoutError::Closed(item),
            })
    }

    /// Like [`pop`](BoundedQueue::pop) with [`Policy::Blocking`],
    /// but gives up after `timeout`.
    pub fn pop_timeout(&self, timeout: Duration) -> Result<T, PopTimeoutError> {
        let deadline = Instant::now().checked_add(timeout);
        self.pop_inner(Wait::Until(deadline)).map_err(|why| match why {
            Rejection::TimedOut => PopTimeoutError::Timeout,
            _ => PopTimeoutError::Closed,
        })
    }
}
}

impl<T> fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("closed", &self.is_closed())
            .finish()
    }
}
