use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Display, Formatter};
use core::ops::Index;

use log::trace;

use crate::Block;
use crate::cursor::{Bits, Forward, ForwardCursor, Reverse, ReverseCursor};
use crate::error::IndexOutOfRange;
use crate::index::{block_count, block_index, block_offset, locate, mask};

/// Bit count used by [`BitArray::default`].
pub const DEFAULT_BITS: usize = 16;

/// A fixed number of bits packed into blocks of type `B`.
///
/// Bit `i` lives in block `i / B::BITS`, with offset 0 of every block being
/// its most significant bit. The buffer holds the fewest blocks that cover
/// all bits; the bits after the last logical one in the final block are
/// padding and are never exposed by checked operations.
///
/// The array owns its blocks exclusively. [`Clone`] copies them, and the
/// size is fixed for the array's whole life.
///
/// # Unchecked operations
/// [`set`], [`clear`], [`bit`] and indexing with `[]` skip the logical
/// bounds check for speed. The caller must keep the index below
/// [`size`]. An index inside the padding of the last block silently reads or
/// writes a padding bit, and an index past the last block panics. Use
/// [`accessible`] or the checked [`at`] when the index is not known to be
/// valid.
///
/// [`set`]: BitArray::set
/// [`clear`]: BitArray::clear
/// [`bit`]: BitArray::bit
/// [`size`]: BitArray::size
/// [`accessible`]: BitArray::accessible
/// [`at`]: BitArray::at
#[derive(Clone)]
pub struct BitArray<B: Block> {
    blocks: Box<[B]>,
    bits: usize,
}

impl<B: Block> BitArray<B> {
    /// Creates an array of `bits` bits, all cleared.
    ///
    /// # Examples
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::<u32>::new(40);
    /// assert_eq!(bits.size(), 40);
    /// assert_eq!(bits.blocks().len(), 2);
    /// assert!(bits.iter().all(|bit| !bit));
    /// ```
    pub fn new(bits: usize) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = B::WIDTH_IS_POWER_OF_TWO;
        let count = block_count::<B>(bits);
        trace!("allocating {count} blocks of {} bits for {bits} bits", B::BITS);
        Self {
            blocks: vec![B::zero(); count].into_boxed_slice(),
            bits,
        }
    }

    /// Constructs an array from a boolean slice, where `true` means set.
    ///
    /// # Examples
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::<u8>::from_slice(&[true, false, true]);
    /// assert_eq!(bits.size(), 3);
    /// assert_eq!(bits.to_string(), "101");
    /// ```
    pub fn from_slice(bits: &[bool]) -> Self {
        let mut array = Self::new(bits.len());
        for (idx, bit) in bits.iter().enumerate() {
            if *bit {
                array.set(idx);
            }
        }
        array
    }

    /// Sets the bit at `index`.
    ///
    /// Unchecked: `index` must be below [`size`](BitArray::size), see the
    /// [type level docs](BitArray#unchecked-operations).
    ///
    /// # Panics
    /// Panics if `index` lies past the last block.
    ///
    /// # Examples
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::<u8>::new(12);
    /// bits.set(9);
    /// assert_eq!(bits.at(9), Ok(true));
    /// assert_eq!(bits.blocks(), &[0b0000_0000, 0b0100_0000]);
    /// ```
    #[inline]
    pub fn set(&mut self, index: usize) {
        let (block, mask) = locate::<B>(index);
        self.blocks[block] = self.blocks[block] | mask;
    }

    /// Clears the bit at `index`.
    ///
    /// Unchecked: `index` must be below [`size`](BitArray::size), see the
    /// [type level docs](BitArray#unchecked-operations).
    ///
    /// # Panics
    /// Panics if `index` lies past the last block.
    ///
    /// # Examples
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::<u16>::new(12);
    /// bits.set_all();
    /// bits.clear(0);
    /// assert_eq!(bits.to_string(), "011111111111");
    /// ```
    #[inline]
    pub fn clear(&mut self, index: usize) {
        let (block, mask) = locate::<B>(index);
        self.blocks[block] = self.blocks[block] & !mask;
    }

    /// Sets every bit below [`size`](BitArray::size). Padding bits keep their
    /// value.
    pub fn set_all(&mut self) {
        trace!("setting all {} bits", self.bits);
        for index in 0..self.bits {
            self.set(index);
        }
    }

    /// Clears every bit below [`size`](BitArray::size). Padding bits keep
    /// their value.
    pub fn clear_all(&mut self) {
        trace!("clearing all {} bits", self.bits);
        for index in 0..self.bits {
            self.clear(index);
        }
    }

    /// Returns `true` if `index` addresses one of the array's bits.
    #[inline]
    pub fn accessible(&self, index: usize) -> bool {
        index < self.bits
    }

    /// Returns the bit at `index`, or [`IndexOutOfRange`] if `index` is not
    /// below [`size`](BitArray::size).
    ///
    /// # Examples
    /// ```
    /// use bit_array::{BitArray, IndexOutOfRange};
    ///
    /// let mut bits = BitArray::<u64>::new(3);
    /// bits.set(2);
    /// assert_eq!(bits.at(2), Ok(true));
    /// assert_eq!(bits.at(3), Err(IndexOutOfRange));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<bool, IndexOutOfRange> {
        if self.accessible(index) {
            Ok(self.bit(index))
        } else {
            Err(IndexOutOfRange)
        }
    }

    /// Returns the bit at `index` without the bounds check of
    /// [`at`](BitArray::at).
    ///
    /// Unchecked: `index` must be below [`size`](BitArray::size), see the
    /// [type level docs](BitArray#unchecked-operations).
    ///
    /// # Panics
    /// Panics if `index` lies past the last block.
    #[inline]
    pub fn bit(&self, index: usize) -> bool {
        self.blocks[block_index::<B>(index)] & mask::<B>(index) != B::zero()
    }

    /// Returns the number of bits in the array.
    #[inline]
    pub fn size(&self) -> usize {
        self.bits
    }

    /// Returns `true` if the array holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the underlying blocks, padding included.
    #[inline]
    pub fn blocks(&self) -> &[B] {
        &self.blocks
    }

    /// Returns a cursor on the first bit.
    ///
    /// # Examples
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::<u8>::new(10);
    /// bits.set(1);
    ///
    /// let mut seen = Vec::new();
    /// let mut cursor = bits.begin();
    /// while cursor != bits.end() {
    ///     seen.push(cursor.get());
    ///     cursor.advance();
    /// }
    /// assert_eq!(seen.len(), 10);
    /// assert!(seen[1]);
    /// ```
    #[inline]
    pub fn begin(&self) -> ForwardCursor<'_, B> {
        ForwardCursor::new(self.blocks(), 0, 0)
    }

    /// Returns the sentinel cursor one past the last bit.
    #[inline]
    pub fn end(&self) -> ForwardCursor<'_, B> {
        ForwardCursor::new(
            self.blocks(),
            block_index::<B>(self.bits) as isize,
            block_offset::<B>(self.bits) as isize,
        )
    }

    /// Same as [`begin`](BitArray::begin); every cursor is read-only.
    #[inline]
    pub fn cbegin(&self) -> ForwardCursor<'_, B> {
        self.begin()
    }

    /// Same as [`end`](BitArray::end); every cursor is read-only.
    #[inline]
    pub fn cend(&self) -> ForwardCursor<'_, B> {
        self.end()
    }

    /// Returns a reverse cursor on the last bit.
    ///
    /// # Examples
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::<u8>::from_slice(&[true, true, false]);
    ///
    /// let mut reversed = String::new();
    /// let mut cursor = bits.rbegin();
    /// while cursor != bits.rend() {
    ///     reversed.push(if cursor.get() { '1' } else { '0' });
    ///     cursor.advance();
    /// }
    /// assert_eq!(reversed, "011");
    /// ```
    #[inline]
    pub fn rbegin(&self) -> ReverseCursor<'_, B> {
        ReverseCursor::new(
            self.blocks(),
            block_index::<B>(self.bits) as isize,
            block_offset::<B>(self.bits) as isize - 1,
        )
    }

    /// Returns the sentinel reverse cursor one before the first bit.
    #[inline]
    pub fn rend(&self) -> ReverseCursor<'_, B> {
        ReverseCursor::new(self.blocks(), 0, -1)
    }

    /// Same as [`rbegin`](BitArray::rbegin); every cursor is read-only.
    #[inline]
    pub fn crbegin(&self) -> ReverseCursor<'_, B> {
        self.rbegin()
    }

    /// Same as [`rend`](BitArray::rend); every cursor is read-only.
    #[inline]
    pub fn crend(&self) -> ReverseCursor<'_, B> {
        self.rend()
    }

    /// Returns an iterator over all bits as `bool`, in index order.
    ///
    /// # Examples
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::<u8>::from_slice(&[true, false, false]);
    /// assert_eq!(bits.iter().collect::<Vec<_>>(), [true, false, false]);
    /// assert_eq!(bits.iter().rev().collect::<Vec<_>>(), [false, false, true]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Bits<'_, B, Forward> {
        Bits::new(self.begin(), self.end(), self.bits)
    }

    /// Returns an iterator over all bits as `bool`, from the last bit to the
    /// first.
    #[inline]
    pub fn iter_rev(&self) -> Bits<'_, B, Reverse> {
        Bits::new(self.rbegin(), self.rend(), self.bits)
    }
}

impl<B: Block> Default for BitArray<B> {
    /// Creates an array of [`DEFAULT_BITS`] cleared bits.
    fn default() -> Self {
        Self::new(DEFAULT_BITS)
    }
}

impl<B: Block> Index<usize> for BitArray<B> {
    type Output = bool;

    /// Unchecked read, see [`BitArray::bit`].
    fn index(&self, index: usize) -> &bool {
        if self.bit(index) { &true } else { &false }
    }
}

impl<B: Block> PartialEq for BitArray<B> {
    /// Compares sizes and logical bits; padding is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && self.iter().eq(other.iter())
    }
}

impl<B: Block> Eq for BitArray<B> {}

impl<'array, B: Block> IntoIterator for &'array BitArray<B> {
    type Item = bool;
    type IntoIter = Bits<'array, B, Forward>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Constructs an array holding exactly the yielded bits, appending one block
/// whenever the previous one is full.
impl<B: Block> FromIterator<bool> for BitArray<B> {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = B::WIDTH_IS_POWER_OF_TWO;
        let iter = iter.into_iter();
        let mut blocks: Vec<B> = Vec::with_capacity(block_count::<B>(iter.size_hint().0));
        let mut bits = 0;
        for bit in iter {
            if block_offset::<B>(bits) == 0 {
                blocks.push(B::zero());
            }
            if bit {
                let (block, mask) = locate::<B>(bits);
                blocks[block] = blocks[block] | mask;
            }
            bits += 1;
        }
        Self {
            blocks: blocks.into_boxed_slice(),
            bits,
        }
    }
}

impl<B: Block> Debug for BitArray<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, bit) in self.iter().enumerate() {
            if i % B::BITS == 0 {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{i}: ")?;
            }
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        write!(f, "]")
    }
}

impl<B: Block> Display for BitArray<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for bit in self {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}
