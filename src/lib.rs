#![deny(missing_docs)]
// doc examples run outside a loom model, so loom builds only get the short description.
#![cfg_attr(not(feature = "loom"), doc = include_str!("../README.md"))]
#![cfg_attr(
    feature = "loom",
    doc = "A bounded multi-producer multi-consumer message queue (loom model-checking build)."
)]

// loom integration
#[doc(hidden)]
macro_rules! cfg_loom {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "loom")]
            $item
        )*
    };
}
#[doc(hidden)]
macro_rules! cfg_not_loom {
    ($($item:item)*) => {
        $(
            #[cfg(not(feature = "loom"))]
            $item
        )*
    };
}

#[doc(hidden)]
mod sync;
#[cfg(test)]
#[doc(hidden)]
mod thread;
//loom integration finished.

/// A module containing the result vocabulary and construction errors of the library.
pub mod error;

/// A module containing flavors of Multi Producer Multi Consumer queues.
pub mod mpmc;
