/// A bounded, closable Multi Producer Multi Consumer queue.
///
/// A fixed capacity queue for passing messages between any number of
/// producer and consumer threads. Every operation chooses a [`Policy`](bounded::Policy):
/// block until it can complete, or fail immediately.
///
/// # Example
///
#[cfg_attr(not(feature = "loom"), doc = "```")]
#[cfg_attr(feature = "loom", doc = "```ignore")]
/// use concurrent_mq::mpmc::bounded::{BoundedQueue, Policy, PopError, PushError};
/// use std::sync::Arc;
/// use std::thread;
/// fn main() {
///     let queue = Arc::new(BoundedQueue::<&'static str>::new(8));
///
///     let src = Arc::clone(&queue);
///     thread::spawn(move || {
///         for letter in ["H", "E", "L", "L", "O"] {
///             match src.push(letter, Policy::NonBlocking) {
///                 Ok(()) => {}
///                 Err(PushError::Full(_)) => unreachable!("the queue has room for 8"),
///                 Err(PushError::Closed(_)) => return,
///             }
///         }
///         src.close();
///     });
///     let mut str = String::new();
///     loop {
///         match queue.pop(Policy::NonBlocking) {
///             Ok(s) => str.push_str(s),
///             Err(PopError::Empty) => {/*sophisticated back-off policy*/},
///             Err(PopError::Closed) => break,
///         }
///     }
///
///     assert_eq!(str, "HELLO");
/// }
/// ```
///
/// # Cross-platform notes
///
/// This implementation depends on `std`'s `Mutex` and `Condvar`.
pub mod bounded;
