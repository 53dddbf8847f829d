//! Guard-based reservation surface over the registry.
//!
//! Manual-compaction handlers that want release-on-drop semantics instead of
//! the raw register/unregister pair can hold a [`RangeReservation`] for the
//! duration of the work; the claim is released when the guard goes out of
//! scope, on success and failure paths alike.

use crate::{
    comparator::KeyComparator, error::ReservationError, range::RangeDescriptor,
    registry::RangeRegistry,
};

/// An exclusive claim over a key interval, released on drop.
#[derive(Debug)]
pub struct RangeReservation<'a, K, C>
where
    K: PartialEq,
    C: KeyComparator<K>,
{
    registry: &'a RangeRegistry<K, C>,
    range: Option<RangeDescriptor<K>>,
}

impl<K, C> RangeRegistry<K, C>
where
    K: Clone + PartialEq,
    C: KeyComparator<K>,
{
    /// Reserve `range` and return a guard that releases it on drop.
    ///
    /// [`ReservationError::Busy`] means an overlapping reservation is in
    /// flight; the caller retries later or reports "busy" upstream.
    pub fn try_reserve(
        &self,
        range: RangeDescriptor<K>,
    ) -> Result<RangeReservation<'_, K, C>, ReservationError> {
        if !self.register(range.clone()) {
            return Err(ReservationError::Busy);
        }
        Ok(RangeReservation {
            registry: self,
            range: Some(range),
        })
    }
}

impl<K, C> RangeReservation<'_, K, C>
where
    K: PartialEq,
    C: KeyComparator<K>,
{
    /// The reserved descriptor.
    pub fn range(&self) -> &RangeDescriptor<K> {
        self.range.as_ref().expect("reservation is live until drop")
    }

    /// Release the claim now instead of at end of scope.
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if let Some(range) = self.range.take() {
            self.registry.unregister(&range);
        }
    }
}

impl<K, C> Drop for RangeReservation<'_, K, C>
where
    K: PartialEq,
    C: KeyComparator<K>,
{
    fn drop(&mut self) {
        self.release_inner();
    }
}
