//! Provide `FixedHashState` and `NoOpHashState`.
//!
//! `FixedHasher` wraps `foldhash` with a compile-time seed, so a map built
//! from the same keys hashes them identically in every process.
//!
//! `NoOpHasher` passes an already well-distributed `u64` (such as the one
//! written by `TypeId`) straight through.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x6A09_E667_F3BC_C908);

/// A [`foldhash`] hasher seeded with a constant.
///
/// Created through [`FixedHashState::build_hasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Hash state whose output depends only on the hashed input.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use ak_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("ak_contract::Node");
/// let b = FixedHashState.hash_one("ak_contract::Node");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// A hasher that keeps the last `u64` written to it.
///
/// Byte input is folded in reverse order, so `write_u32(7)` and
/// `write_u64(7)` agree when each is the only call.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Hash state producing [`NoOpHasher`]s, used by [`TypeIdMap`](crate::TypeIdMap).
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use ak_utils::hash::NoOpHashState;
///
/// assert_eq!(NoOpHashState.hash_one(42_u64), 42);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::hash::{BuildHasher, Hasher};

    use super::{FixedHashState, NoOpHashState};

    #[test]
    fn fixed_state_is_reproducible() {
        let first = FixedHashState.hash_one(("Person", 3_u32));
        let second = FixedHashState.hash_one(("Person", 3_u32));
        assert_eq!(first, second);
        assert_ne!(first, FixedHashState.hash_one(("Person", 4_u32)));
    }

    #[test]
    fn noop_width_agnostic() {
        let mut narrow = NoOpHashState.build_hasher();
        narrow.write_u32(1234);
        let mut wide = NoOpHashState.build_hasher();
        wide.write_u64(1234);
        assert_eq!(narrow.finish(), wide.finish());
    }
}
