use std::error::Error;
use std::fmt;

#[doc(inline)]
pub use crate::mpmc::bounded::{PopError, PopTimeoutError, PushError, PushTimeoutError};

/// The outcome vocabulary shared by every queue operation.
///
/// Each operation error converts into a `MessageResult`, which is handy
/// when callers want to log or count outcomes without matching on the
/// individual error types.
///
#[cfg_attr(not(feature = "loom"), doc = "```")]
#[cfg_attr(feature = "loom", doc = "```ignore")]
/// use concurrent_mq::error::MessageResult;
/// use concurrent_mq::mpmc::bounded::{BoundedQueue, Policy};
///
/// let queue = BoundedQueue::new(1);
/// assert_eq!(MessageResult::from(queue.push(1, Policy::NonBlocking)), MessageResult::Ok);
/// assert_eq!(MessageResult::from(queue.push(2, Policy::NonBlocking)), MessageResult::Full);
/// ```
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum MessageResult {
    /// The operation succeeded.
    Ok,
    /// A non-blocking read found no pending messages.
    Empty,
    /// A non-blocking write found the queue at capacity.
    Full,
    /// Reserved. No operation of this library produces it.
    NotFound,
    /// The queue was closed. Writes are rejected and reads have drained
    /// every message that was pending at the time of closing.
    Closed,
}

impl MessageResult {
    /// Returns `true` for [`MessageResult::Ok`].
    #[inline]
    pub fn is_ok(self) -> bool {
        self == MessageResult::Ok
    }
}

impl fmt::Display for MessageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            MessageResult::Ok => "ok",
            MessageResult::Empty => "empty",
            MessageResult::Full => "full",
            MessageResult::NotFound => "not found",
            MessageResult::Closed => "closed",
        })
    }
}

/// Error returned by [`BoundedQueue::try_new`](crate::mpmc::bounded::BoundedQueue::try_new)
/// when asked for a queue that can't hold a single message.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct CapacityError {}

impl Error for CapacityError {}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("queue capacity must be at least one")
    }
}
