use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr;

use crate::Block;
use crate::index::offset_mask;

mod sealed {
    pub trait Sealed {}
}

/// Walking direction of a [`Cursor`].
///
/// Sealed; implemented by [`Forward`] and [`Reverse`] only.
pub trait Direction: Copy + sealed::Sealed {
    #[doc(hidden)]
    fn advance<B: Block>(pos: &mut Position);
    #[doc(hidden)]
    fn retreat<B: Block>(pos: &mut Position);
}

/// Walks from bit 0 towards the last bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forward;

/// Walks from the last bit towards bit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reverse;

impl sealed::Sealed for Forward {}
impl sealed::Sealed for Reverse {}

impl Direction for Forward {
    #[inline]
    fn advance<B: Block>(pos: &mut Position) {
        pos.increment::<B>();
    }

    #[inline]
    fn retreat<B: Block>(pos: &mut Position) {
        pos.decrement::<B>();
    }
}

impl Direction for Reverse {
    #[inline]
    fn advance<B: Block>(pos: &mut Position) {
        pos.decrement::<B>();
    }

    #[inline]
    fn retreat<B: Block>(pos: &mut Position) {
        pos.increment::<B>();
    }
}

/// A `(block, offset)` pair. `block` is signed so a reverse cursor can sit one
/// block before the buffer.
#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    block: isize,
    offset: usize,
}

impl Position {
    #[inline]
    fn increment<B: Block>(&mut self) {
        if self.offset + 1 < B::BITS {
            self.offset += 1;
        } else {
            self.offset = 0;
            self.block += 1;
        }
    }

    #[inline]
    fn decrement<B: Block>(&mut self) {
        if self.offset == 0 {
            self.offset = B::BITS - 1;
            self.block -= 1;
        } else {
            self.offset -= 1;
        }
    }
}

/// A read-only, bidirectional position inside a [`BitArray`].
///
/// Cursors borrow the array's blocks and never own them. They come in pairs
/// from the array: [`begin`]/[`end`] for [`Forward`] cursors and
/// [`rbegin`]/[`rend`] for [`Reverse`] ones. The second cursor of each pair
/// is a sentinel one past the last (or one before the first) bit and must not
/// be read.
///
/// There is no way to create a cursor other than through its array:
///
/// ```compile_fail
/// use bit_array::ForwardCursor;
///
/// let cursor: ForwardCursor<'static, u8> = Default::default();
/// ```
///
/// [`BitArray`]: crate::BitArray
/// [`begin`]: crate::BitArray::begin
/// [`end`]: crate::BitArray::end
/// [`rbegin`]: crate::BitArray::rbegin
/// [`rend`]: crate::BitArray::rend
pub struct Cursor<'array, B: Block, D: Direction> {
    blocks: &'array [B],
    pos: Position,
    direction: PhantomData<D>,
}

/// Cursor walking from the first bit to the last.
pub type ForwardCursor<'array, B> = Cursor<'array, B, Forward>;

/// Cursor walking from the last bit to the first.
pub type ReverseCursor<'array, B> = Cursor<'array, B, Reverse>;

impl<'array, B: Block, D: Direction> Cursor<'array, B, D> {
    /// A negative `offset` rolls over to the last offset of the previous
    /// block, which is how the reverse cursors land on the last bit of a
    /// fully used final block and one before the first bit.
    pub(crate) fn new(blocks: &'array [B], block: isize, offset: isize) -> Self {
        let pos = match usize::try_from(offset) {
            Ok(offset) => Position { block, offset },
            Err(_) => Position {
                block: block - 1,
                offset: B::BITS - 1,
            },
        };
        Self {
            blocks,
            pos,
            direction: PhantomData,
        }
    }

    /// Moves one bit in the cursor's direction (the `next` step).
    #[inline]
    pub fn advance(&mut self) {
        D::advance::<B>(&mut self.pos);
    }

    /// Moves one bit against the cursor's direction (the `prev` step).
    #[inline]
    pub fn retreat(&mut self) {
        D::retreat::<B>(&mut self.pos);
    }

    /// Returns the bit under the cursor.
    ///
    /// # Panics
    /// Panics if the cursor lies outside the array's blocks. A sentinel
    /// cursor inside a partially used last block reads a padding bit instead;
    /// its value is meaningless.
    ///
    /// # Examples
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::<u8>::new(10);
    /// bits.set(9);
    /// let mut cursor = bits.rbegin();
    /// assert!(cursor.get());
    /// cursor.advance();
    /// assert!(!cursor.get());
    /// ```
    #[inline]
    pub fn get(&self) -> bool {
        let block = usize::try_from(self.pos.block)
            .ok()
            .and_then(|block| self.blocks.get(block));
        match block {
            Some(block) => *block & offset_mask::<B>(self.pos.offset) != B::zero(),
            None => panic!("Cursor at {} read outside of its bit array", self.index()),
        }
    }

    /// Returns the global bit index under the cursor. This is `-1` for
    /// [`rend`](crate::BitArray::rend) and the bit count for
    /// [`end`](crate::BitArray::end).
    #[inline]
    pub fn index(&self) -> isize {
        self.pos.block * B::BITS as isize + self.pos.offset as isize
    }
}

impl<B: Block, D: Direction> Clone for Cursor<'_, B, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Block, D: Direction> Copy for Cursor<'_, B, D> {}

/// Two cursors are equal when they read the same block buffer at the same
/// position. Only cursors of the same array are meaningful to compare: every
/// empty array shares the same dangling buffer address, so the cursors of two
/// distinct empty arrays compare equal.
impl<B: Block, D: Direction> PartialEq for Cursor<'_, B, D> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.blocks, other.blocks) && self.pos == other.pos
    }
}

impl<B: Block, D: Direction> Eq for Cursor<'_, B, D> {}

impl<B: Block, D: Direction> Debug for Cursor<'_, B, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("block", &self.pos.block)
            .field("offset", &self.pos.offset)
            .finish()
    }
}

/// Iterator over the bits between two cursors, as `bool` values.
///
/// Returned by [`BitArray::iter()`] (index order) and
/// [`BitArray::iter_rev()`] (reverse index order).
///
/// [`BitArray::iter()`]: crate::BitArray::iter
/// [`BitArray::iter_rev()`]: crate::BitArray::iter_rev
#[derive(Clone, Copy, Debug)]
pub struct Bits<'array, B: Block, D: Direction> {
    front: Cursor<'array, B, D>,
    back: Cursor<'array, B, D>,
    remaining: usize,
}

impl<'array, B: Block, D: Direction> Bits<'array, B, D> {
    pub(crate) fn new(
        front: Cursor<'array, B, D>,
        back: Cursor<'array, B, D>,
        remaining: usize,
    ) -> Self {
        Self {
            front,
            back,
            remaining,
        }
    }
}

impl<B: Block, D: Direction> Iterator for Bits<'_, B, D> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let bit = self.front.get();
        self.front.advance();
        self.remaining -= 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<B: Block, D: Direction> DoubleEndedIterator for Bits<'_, B, D> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.retreat();
        self.remaining -= 1;
        Some(self.back.get())
    }
}

impl<B: Block, D: Direction> ExactSizeIterator for Bits<'_, B, D> {}

impl<B: Block, D: Direction> FusedIterator for Bits<'_, B, D> {}
