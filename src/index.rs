//! Mapping between global bit indices and `(block, mask)` pairs.
//!
//! Offset 0 within a block is its most significant bit, so bit `i` of an
//! array lives in block `i / B::BITS` under the mask
//! `1 << (B::BITS - i % B::BITS - 1)`.

use crate::Block;

/// Computes the number of blocks needed to store `bits` bits.
///
/// # Examples
/// ```
/// use bit_array::block_count;
///
/// assert_eq!(block_count::<u8>(0), 0);
/// assert_eq!(block_count::<u8>(9), 2);
/// assert_eq!(block_count::<u16>(16), 1);
/// assert_eq!(block_count::<u32>(33), 2);
/// ```
pub const fn block_count<B: Block>(bits: usize) -> usize {
    bits.div_ceil(B::BITS)
}

/// Returns the index of the block holding bit `index`.
#[inline]
pub fn block_index<B: Block>(index: usize) -> usize {
    index / B::BITS
}

/// Returns the offset of bit `index` inside its block.
#[inline]
pub fn block_offset<B: Block>(index: usize) -> usize {
    index & (B::BITS - 1)
}

/// Returns the mask selecting in-block `offset`, where offset 0 is the most
/// significant bit.
///
/// `offset` must be below `B::BITS`.
#[inline]
pub fn offset_mask<B: Block>(offset: usize) -> B {
    B::one() << (B::BITS - offset - 1)
}

/// Returns the mask selecting bit `index` inside the block that holds it.
///
/// # Examples
/// ```
/// use bit_array::index::mask;
///
/// assert_eq!(mask::<u8>(0), 0b1000_0000);
/// assert_eq!(mask::<u8>(7), 0b0000_0001);
/// assert_eq!(mask::<u8>(9), 0b0100_0000);
/// ```
#[inline]
pub fn mask<B: Block>(index: usize) -> B {
    offset_mask::<B>(block_offset::<B>(index))
}

/// Splits bit `index` into the block holding it and the mask selecting it.
#[inline]
pub fn locate<B: Block>(index: usize) -> (usize, B) {
    (block_index::<B>(index), mask::<B>(index))
}

/// Inverse of [`block_index`] and [`block_offset`]: the global index of
/// `offset` inside block `block`.
#[inline]
pub fn position<B: Block>(block: usize, offset: usize) -> usize {
    block * B::BITS + offset
}
