//! Key-interval descriptors claimed by compactions.
//!
//! A [`RangeDescriptor`] carries explicit endpoint inclusivity instead of
//! `std::ops::Bound` so that release matching can compare descriptors
//! structurally, field by field, exactly as they were registered.

use std::cmp::Ordering;

use crate::comparator::KeyComparator;

/// A key interval with explicit endpoint inclusivity and an unbounded sentinel.
///
/// When `is_infinite` is set the descriptor denotes the set of all possible
/// keys and the endpoint fields are ignored by every interval computation.
/// Equality is structural over all five fields; it is what
/// [`RangeRegistry::unregister`](crate::registry::RangeRegistry::unregister)
/// matches on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeDescriptor<K> {
    /// Lower endpoint; ignored when `is_infinite` is set.
    pub start: K,
    /// Upper endpoint; ignored when `is_infinite` is set.
    pub limit: K,
    /// Whether `start` itself belongs to the interval.
    pub include_start: bool,
    /// Whether `limit` itself belongs to the interval.
    pub include_limit: bool,
    /// Sentinel denoting the set of all possible keys.
    pub is_infinite: bool,
}

impl<K> RangeDescriptor<K> {
    /// Build a finite descriptor from its endpoints and inclusivity flags.
    pub fn new(start: K, limit: K, include_start: bool, include_limit: bool) -> Self {
        Self {
            start,
            limit,
            include_start,
            include_limit,
            is_infinite: false,
        }
    }

    /// Build the inclusive-start, exclusive-limit descriptor `[start, limit)`
    /// used by subcompaction boundaries.
    pub fn half_open(start: K, limit: K) -> Self {
        Self::new(start, limit, true, false)
    }

    /// Build the unbounded sentinel covering every key.
    ///
    /// The endpoint slots are filled with `K::default()`; they take no part
    /// in interval computations but do participate in structural equality,
    /// so two `all()` descriptors always match each other.
    pub fn all() -> Self
    where
        K: Default,
    {
        Self {
            start: K::default(),
            limit: K::default(),
            include_start: false,
            include_limit: false,
            is_infinite: true,
        }
    }

    /// Whether the interval contains no key under `comparator`.
    ///
    /// A finite descriptor is empty iff `start` orders after `limit`, or the
    /// endpoints are equal and at least one of them is exclusive. The
    /// unbounded sentinel is never empty.
    pub fn is_empty<C>(&self, comparator: &C) -> bool
    where
        C: KeyComparator<K>,
    {
        if self.is_infinite {
            return false;
        }
        match comparator.compare(&self.start, &self.limit) {
            Ordering::Greater => true,
            Ordering::Equal => !(self.include_start && self.include_limit),
            Ordering::Less => false,
        }
    }

    /// Whether every key of `self` orders before every key of `other`.
    ///
    /// Holds iff `self.limit < other.start`, or the two are equal and at
    /// least one of {`self.include_limit`, `other.include_start`} is false.
    /// Meaningless for the unbounded sentinel; callers check `is_infinite`
    /// first.
    pub fn entirely_before<C>(&self, other: &Self, comparator: &C) -> bool
    where
        C: KeyComparator<K>,
    {
        match comparator.compare(&self.limit, &other.start) {
            Ordering::Less => true,
            Ordering::Equal => !(self.include_limit && other.include_start),
            Ordering::Greater => false,
        }
    }

    /// Whether `self` and `other` share no key.
    ///
    /// An unbounded descriptor is disjoint from nothing. Both descriptors are
    /// assumed non-empty; the registry filters empty entries before asking.
    pub fn is_disjoint<C>(&self, other: &Self, comparator: &C) -> bool
    where
        C: KeyComparator<K>,
    {
        if self.is_infinite || other.is_infinite {
            return false;
        }
        self.entirely_before(other, comparator) || other.entirely_before(self, comparator)
    }
}
