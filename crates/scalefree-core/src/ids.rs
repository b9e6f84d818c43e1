//! Element identity tokens and the factories that mint them.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

/// Bounds every vertex or edge identity must satisfy.
///
/// Identities are opaque: the graph only compares and hashes them.
pub trait ElementId: Clone + Eq + Hash + Debug {}

impl<T> ElementId for T where T: Clone + Eq + Hash + Debug {}

/// Identifier for a vertex minted by [`SequentialIds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u64);

/// Identifier for an edge minted by [`SequentialIds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(u64);

/// Identity types that can be rebuilt from a raw counter value.
pub trait RawId: Sized {
    /// Creates a new identifier from its raw integer representation.
    fn from_raw(raw: u64) -> Self;

    /// Returns the raw integer representation of the identifier.
    fn as_raw(&self) -> u64;
}

impl RawId for VertexId {
    fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    fn as_raw(&self) -> u64 {
        self.0
    }
}

impl RawId for EdgeId {
    fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    fn as_raw(&self) -> u64 {
        self.0
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Capability that mints a fresh, never reused identity on each call.
pub trait IdFactory<T> {
    /// Returns the next identity.
    fn next_id(&mut self) -> T;
}

impl<T, F> IdFactory<T> for F
where
    F: FnMut() -> T,
{
    fn next_id(&mut self) -> T {
        self()
    }
}

/// Counter-backed factory producing `T::from_raw(0)`, `T::from_raw(1)`, ...
pub struct SequentialIds<T> {
    next: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> SequentialIds<T> {
    /// Creates a factory whose first identity has raw value zero.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates a factory whose first identity has the provided raw value.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: first,
            _marker: PhantomData,
        }
    }

    /// Returns the raw value the next identity will carry.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl<T> Default for SequentialIds<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for SequentialIds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequentialIds")
            .field("next", &self.next)
            .finish()
    }
}

impl<T: RawId> IdFactory<T> for SequentialIds<T> {
    fn next_id(&mut self) -> T {
        let id = T::from_raw(self.next);
        self.next += 1;
        id
    }
}
