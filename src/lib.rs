//! Umbrella crate for the demos: re-exports [`placenames_core`].
pub use placenames_core::*;
