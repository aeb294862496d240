//! Offline, path-resolvable implementation of the `masking` crate API the
//! RocketGate workspace depends on.
//!
//! Upstream, `masking` is pulled from the hyperswitch git repository. That
//! source is unreachable in offline builds, so this crate reproduces the
//! subset of its public API the workspace actually uses: the [`Secret`]
//! wrapper with its [`PeekInterface`]/[`ExposeInterface`] accessors, the
//! [`Maskable`] header value enum, and the [`ErasedMaskSerialize`] trait used
//! to carry request bodies as type-erased, serializable trait objects.
//!
//! Semantics mirror upstream: `Secret` redacts its `Debug` output but
//! serializes transparently to the wrapped value, and `ErasedMaskSerialize`
//! forwards serialization to the concrete type via `erased-serde`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wrapper around a secret value that redacts its `Debug` representation while
/// serializing transparently to the inner value.
pub struct Secret<T, I = ()> {
    inner: T,
    _marker: PhantomData<I>,
}

/// Alias kept for API compatibility with upstream `masking`.
pub type StrongSecret<T, I = ()> = Secret<T, I>;

impl<T, I> Secret<T, I> {
    /// Wraps `inner` in a `Secret`.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

/// Read-only access to the wrapped value.
pub trait PeekInterface<T> {
    fn peek(&self) -> &T;
}

impl<T, I> PeekInterface<T> for Secret<T, I> {
    fn peek(&self) -> &T {
        &self.inner
    }
}

/// Consuming access to the wrapped value.
pub trait ExposeInterface<T> {
    fn expose(self) -> T;
}

impl<T, I> ExposeInterface<T> for Secret<T, I> {
    fn expose(self) -> T {
        self.inner
    }
}

impl<T, I> From<T> for Secret<T, I> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Clone, I> Clone for Secret<T, I> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<T: Default, I> Default for Secret<T, I> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, I> fmt::Debug for Secret<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*** redacted ***")
    }
}

impl<T: PartialEq, I> PartialEq for Secret<T, I> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq, I> Eq for Secret<T, I> {}

impl<T: Hash, I> Hash for Secret<T, I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<T: Serialize, I> Serialize for Secret<T, I> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, I> Deserialize<'de> for Secret<T, I> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Secret::new)
    }
}

/// A header value that may be either masked or plain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Maskable<T: Eq + PartialEq + Clone> {
    Masked(Secret<T>),
    Normal(T),
}

impl<T: Eq + PartialEq + Clone> Maskable<T> {
    pub fn new_masked(item: Secret<T>) -> Self {
        Self::Masked(item)
    }

    pub fn new_normal(item: T) -> Self {
        Self::Normal(item)
    }

    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Masked(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Masked(secret) => secret.expose(),
            Self::Normal(value) => value,
        }
    }
}

impl<T: Eq + PartialEq + Clone> From<T> for Maskable<T> {
    fn from(value: T) -> Self {
        Self::Normal(value)
    }
}

impl From<&str> for Maskable<String> {
    fn from(value: &str) -> Self {
        Self::Normal(value.to_string())
    }
}

/// Type-erased, serializable payload. Serialization forwards to the concrete
/// type via `erased-serde`, while [`masked_serialize`](ErasedMaskSerialize::masked_serialize)
/// produces a JSON value for logging.
pub trait ErasedMaskSerialize: erased_serde::Serialize {
    fn masked_serialize(&self) -> Result<serde_json::Value, serde_json::Error>;
}

impl<T: Serialize> ErasedMaskSerialize for T {
    fn masked_serialize(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

erased_serde::serialize_trait_object!(ErasedMaskSerialize);
