use crate::error::MessageResult;
use std::error::Error;
use std::fmt;

/// An enumeration listing the failure modes of the [`push`](super::BoundedQueue::push) method.
///
/// Both variants hand the rejected message back to the caller.
#[derive(PartialEq, Eq, Clone, Copy)]
pub enum PushError<T> {
    /// The message couldn't be pushed with [`Policy::NonBlocking`](super::Policy::NonBlocking)
    /// because the queue was already full.
    Full(T),
    /// The queue was [`close`](super::BoundedQueue::close)d and any
    /// further pushes will not succeed.
    Closed(T),
}

/// An enumeration listing the failure modes of the [`pop`](super::BoundedQueue::pop) method.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum PopError {
    /// [`Policy::NonBlocking`](super::Policy::NonBlocking) was requested
    /// and the queue had no pending messages.
    Empty,
    /// The queue was [`close`](super::BoundedQueue::close)d
    /// and all previously pushed messages were already popped.
    Closed,
}

/// An enumeration listing the failure modes of the
/// [`push_timeout`](super::BoundedQueue::push_timeout) method.
#[derive(PartialEq, Eq, Clone, Copy)]
pub enum PushTimeoutError<T> {
    /// The queue stayed full for the whole timeout.
    Timeout(T),
    /// The queue was closed before space became available.
    Closed(T),
}

/// An enumeration listing the failure modes of the
/// [`pop_timeout`](super::BoundedQueue::pop_timeout) method.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum PopTimeoutError {
    /// The queue stayed empty for the whole timeout.
    Timeout,
    /// The queue was closed and all previously pushed messages were already popped.
    Closed,
}

impl<T> PushError<T> {
    /// Returns the message that failed to push.
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            PushError::Full(item) | PushError::Closed(item) => item,
        }
    }

    /// Returns `true` if the queue was full.
    #[inline]
    pub fn is_full(&self) -> bool {
        matches!(self, PushError::Full(_))
    }

    /// Returns `true` if the queue was closed.
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, PushError::Closed(_))
    }
}

impl<T> PushTimeoutError<T> {
    /// Returns the message that failed to push.
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            PushTimeoutError::Timeout(item) | PushTimeoutError::Closed(item) => item,
        }
    }
}

impl<T> Error for PushError<T> {}
impl Error for PopError {}
impl<T> Error for PushTimeoutError<T> {}
impl Error for PopTimeoutError {}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PushError::Full(_) => f.write_str("pushing to a full queue"),
            PushError::Closed(_) => f.write_str("pushing to a closed queue"),
        }
    }
}

impl fmt::Display for PopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PopError::Empty => f.write_str("popping from an empty queue"),
            PopError::Closed => f.write_str("popping from a closed and drained queue"),
        }
    }
}

impl<T> fmt::Display for PushTimeoutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PushTimeoutError::Timeout(_) => f.write_str("timed out pushing to a full queue"),
            PushTimeoutError::Closed(_) => f.write_str("pushing to a closed queue"),
        }
    }
}

impl fmt::Display for PopTimeoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PopTimeoutError::Timeout => f.write_str("timed out popping from an empty queue"),
            PopTimeoutError::Closed => f.write_str("popping from a closed and drained queue"),
        }
    }
}

impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PushError::Full(_) => f.write_str("Full(..)"),
            PushError::Closed(_) => f.write_str("Closed(..)"),
        }
    }
}

impl<T> fmt::Debug for PushTimeoutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PushTimeoutError::Timeout(_) => f.write_str("Timeout(..)"),
            PushTimeoutError::Closed(_) => f.write_str("Closed(..)"),
        }
    }
}

impl<T> From<PushError<T>> for MessageResult {
    fn from(err: PushError<T>) -> Self {
        match err {
            PushError::Full(_) => MessageResult::Full,
            PushError::Closed(_) => MessageResult::Closed,
        }
    }
}

impl From<PopError> for MessageResult {
    fn from(err: PopError) -> Self {
        match err {
            PopError::Empty => MessageResult::Empty,
            PopError::Closed => MessageResult::Closed,
        }
    }
}

impl<T> From<Result<(), PushError<T>>> for MessageResult {
    fn from(res: Result<(), PushError<T>>) -> Self {
        match res {
            Ok(()) => MessageResult::Ok,
            Err(err) => err.into(),
        }
    }
}

impl<T> From<Result<T, PopError>> for MessageResult {
    fn from(res: Result<T, PopError>) -> Self {
        match res {
            Ok(_) => MessageResult::Ok,
            Err(err) => err.into(),
        }
    }
}
