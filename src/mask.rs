//! A fixed-capacity bitset of ship segment indices.
//!
//! The set is `no_std` friendly and packed into the unsigned integer `T`,
//! so a ship's hit record is a single copyable word. Index `i` stands for
//! the ship's `i`-th segment counted from its head.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by segment mask operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Index is not representable in `T::BITS`.
    IndexOutOfRange { index: usize, capacity: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::IndexOutOfRange { index, capacity } => {
                write!(f, "IndexOutOfRange: index={} capacity={}", index, capacity)
            }
        }
    }
}

/// Set of segment indices stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentMask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

/// Hit record for ships; five segments fit comfortably in a byte.
pub type HitMask = SegmentMask<u8>;

impl<T> SegmentMask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of indices the mask can hold.
    pub const CAPACITY: usize = mem::size_of::<T>() * 8;

    /// Create an empty mask.
    #[inline]
    pub fn new() -> Self {
        SegmentMask { bits: T::zero() }
    }

    #[inline]
    fn low_bits(len: usize) -> T {
        if len == Self::CAPACITY {
            !T::zero()
        } else {
            (T::one() << len) - T::one()
        }
    }

    #[inline]
    fn check_index(index: usize) -> Result<(), MaskError> {
        if index >= Self::CAPACITY {
            Err(MaskError::IndexOutOfRange {
                index,
                capacity: Self::CAPACITY,
            })
        } else {
            Ok(())
        }
    }

    /// Whether `index` is in the set. Out-of-range indices are never set.
    pub fn contains(&self, index: usize) -> bool {
        index < Self::CAPACITY && ((self.bits >> index) & T::one()) != T::zero()
    }

    /// Add `index` to the set.
    pub fn insert(&mut self, index: usize) -> Result<(), MaskError> {
        Self::check_index(index)?;
        self.bits = self.bits | (T::one() << index);
        Ok(())
    }

    /// Number of indices in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// True when every index in `0..len` is present.
    pub fn covers(&self, len: usize) -> bool {
        if len > Self::CAPACITY {
            return false;
        }
        let wanted = Self::low_bits(len);
        self.bits & wanted == wanted
    }

    /// True when some index at or beyond `len` is present.
    pub fn exceeds(&self, len: usize) -> bool {
        len < Self::CAPACITY && !(self.bits >> len).is_zero()
    }

    #[inline]
    pub fn into_raw(self) -> T {
        self.bits
    }

    #[inline]
    pub fn from_raw(raw: T) -> Self {
        SegmentMask { bits: raw }
    }
}

impl<T> Default for SegmentMask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SegmentMask<T>
where
    T: PrimInt + Unsigned + Zero + fmt::Binary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SegmentMask({:#b})", self.bits)
    }
}
