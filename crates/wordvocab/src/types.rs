//! # Common Types and Traits
use core::hash::Hash;
use num_traits::{CheckedAdd, FromPrimitive, ToPrimitive, Unsigned};
use std::fmt::{Debug, Display};

/// A type that can be used as a token id.
pub trait TokenType:
    'static
    + Default
    + Debug
    + Display
    + Clone
    + Copy
    + Hash
    + Send
    + Sync
    + Unsigned
    + CheckedAdd
    + From<u8>
    + FromPrimitive
    + ToPrimitive
    + Ord
    + serde::Serialize
    + for<'de> serde::Deserialize<'de>
{
}

impl<T> TokenType for T where
    T: 'static
        + Default
        + Debug
        + Display
        + Clone
        + Copy
        + Hash
        + Send
        + Sync
        + Unsigned
        + CheckedAdd
        + From<u8>
        + FromPrimitive
        + ToPrimitive
        + Ord
        + serde::Serialize
        + for<'de> serde::Deserialize<'de>
{
}

/// Word to T map.
pub type WordToTokenMap<T> = ahash::AHashMap<String, T>;

/// T to word map.
pub type TokenToWordMap<T> = ahash::AHashMap<T, String>;

/// Check if a type is `Send`.
#[cfg(test)]
pub(crate) fn check_is_send<S: Send>(_: S) {}

#[cfg(test)]
/// Check if a type is `Sync`.
pub(crate) fn check_is_sync<S: Sync>(_: S) {}
