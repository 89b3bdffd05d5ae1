use core::mem::size_of;

use num_traits::PrimInt;
use static_assertions::const_assert;

mod sealed {
    pub trait Sealed {}
}

/// An integer type usable as the storage unit of a [`BitArray`].
///
/// Implemented for every primitive integer. All of them have a power of two
/// byte size, so [`Block::BITS`] is a power of two as well. The trait is
/// sealed; other types are rejected at compile time.
///
/// ```compile_fail
/// use bit_array::BitArray;
///
/// let floats = BitArray::<f32>::new(8);
/// ```
///
/// ```compile_fail
/// use bit_array::BitArray;
///
/// let bools = BitArray::<bool>::new(8);
/// ```
///
/// [`BitArray`]: crate::BitArray
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a bit array block",
    label = "not a block type",
    note = "blocks must be primitive integers whose byte size is a power of two"
)]
pub trait Block: PrimInt + sealed::Sealed + 'static {
    /// Number of bits stored in one block.
    const BITS: usize = size_of::<Self>() * 8;

    /// Evaluated when a [`BitArray`](crate::BitArray) is created for `Self`.
    #[doc(hidden)]
    const WIDTH_IS_POWER_OF_TWO: () = assert!(
        size_of::<Self>().is_power_of_two(),
        "block type must have a power of two size in bytes"
    );
}

macro_rules! impl_block {
    ($($t:ty),+ $(,)?) => {
        $(
            const_assert!(size_of::<$t>().is_power_of_two());
            impl sealed::Sealed for $t {}
            impl Block for $t {}
        )+
    };
}

impl_block![u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize];
