//! A fixed-size bit array packed into integer blocks of a chosen width.
//! `no_std` with `alloc`, no `unsafe`.
//!
//! [`BitArray`] is the main struct in this library. Its [features](#features)
//! are listed below.
//!
//! # Examples
//! ```
//! use bit_array::BitArray;
//!
//! let mut bits = BitArray::<u8>::new(24);
//! bits.set_all();
//! bits.clear(0);
//! assert_eq!(bits.at(0), Ok(false));
//! assert_eq!(bits.at(1), Ok(true));
//! assert!(bits.at(24).is_err());
//!
//! let reversed: String = bits.iter_rev().map(|bit| if bit { '1' } else { '0' }).collect();
//! assert_eq!(reversed, "111111111111111111111110");
//! ```
//!
//! # Layout
//!
//! Bit `i` is stored in block `i / B::BITS`. Inside a block, offset 0 is the
//! most significant bit and offset `B::BITS - 1` the least significant one.
//! The array allocates the fewest blocks covering all of its bits; the
//! remaining low bits of the last block are padding.
//!
//! # Features
//!
//! - `#![no_std]` compatible, one heap allocation per array
//! - Any primitive integer as block type: `BitArray<u8>` ... `BitArray<u128>`
//! - Unchecked per-bit operations: `set`, `clear`, `bit`, `array[i]`
//! - Checked access: `accessible`, `at`
//! - Bulk operations: `set_all`, `clear_all`
//! - Bidirectional cursors over the bits:
//!   - `begin()`/`end()` and `cbegin()`/`cend()` (forward)
//!   - `rbegin()`/`rend()` and `crbegin()`/`crend()` (reverse)
//! - Standard iterators: `iter()`, `iter_rev()`, `&BitArray: IntoIterator`

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod array;
mod block;
mod cursor;
mod error;
pub mod index;

pub use array::{BitArray, DEFAULT_BITS};
pub use block::Block;
pub use cursor::{Bits, Cursor, Direction, Forward, ForwardCursor, Reverse, ReverseCursor};
pub use error::IndexOutOfRange;
pub use index::block_count;
