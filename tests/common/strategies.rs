use proptest::prelude::*;

/// Position counts spanning empty, sub-chunk and multi-chunk ledgers
pub fn position_count_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![Just(0u64), Just(1), Just(100), Just(101), 0u64..450]
}

/// Chunk sizes including the degenerate size of one
pub fn chunk_size_strategy() -> impl Strategy<Value = usize> {
    prop_oneof![Just(1usize), Just(100), 1usize..64]
}

/// Arbitrary request payload sequences
pub fn item_sequence_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(any::<u32>(), 0..300)
}
