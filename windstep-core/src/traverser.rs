// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use core::ops::Deref;

/// A pipeline token: a payload plus the number of identical tokens it stands for.
///
/// `bulk` lets a step carry many logically duplicate results as one value
/// instead of enumerating each copy. A traverser whose bulk reaches 0 is dead;
/// steps drop dead traversers instead of emitting them.
///
/// # Examples
///
/// ```
/// use windstep_core::Traverser;
///
/// let mut marko = Traverser::with_bulk("marko", 10);
/// let split = marko.split(4);
///
/// assert_eq!(marko.bulk(), 6);
/// assert_eq!(split.bulk(), 4);
/// assert_eq!(*split.get(), "marko");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Traverser<T> {
    value: T,
    bulk: u64,
}

impl<T> Traverser<T> {
    /// Creates a traverser representing a single token.
    pub const fn new(value: T) -> Self {
        Self { value, bulk: 1 }
    }

    pub const fn with_bulk(value: T, bulk: u64) -> Self {
        Self { value, bulk }
    }

    pub const fn bulk(&self) -> u64 {
        self.bulk
    }

    /// Overwrites the multiplicity in place.
    ///
    /// Setting 0 is allowed; it marks the traverser dead and the owning step
    /// is then responsible for not emitting it.
    pub fn set_bulk(&mut self, bulk: u64) {
        self.bulk = bulk;
    }

    pub const fn is_dead(&self) -> bool {
        self.bulk == 0
    }

    pub const fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Consumes the traverser and returns its payload together with its bulk.
    pub fn into_parts(self) -> (T, u64) {
        (self.value, self.bulk)
    }

    /// Moves `bulk` units of multiplicity out of this traverser into a new one.
    ///
    /// The amount is clamped to what this traverser holds, so the split never
    /// underflows; splitting everything leaves `self` dead.
    pub fn split(&mut self, bulk: u64) -> Self
    where
        T: Clone,
    {
        let moved = bulk.min(self.bulk);
        self.bulk -= moved;
        Self {
            value: self.value.clone(),
            bulk: moved,
        }
    }
}

impl<T> Deref for Traverser<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> From<T> for Traverser<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Display> fmt::Display for Traverser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.value, self.bulk)
    }
}
