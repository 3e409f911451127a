//! Least-significant-digit radix sort for `u32` keys.
//!
//! The engine is two small pieces: a stable counting sort over one bit-field
//! "digit" ([`pass`]) and a scheduler ([`schedule`]) that splits the 32 key
//! bits into a validated sequence of digits and runs one pass per digit,
//! ping-ponging between the caller's two buffers.
//!
//! Two stock decompositions are provided: [`Decomposition::three_pass`]
//! (10 + 11 + 11 bits) and [`Decomposition::four_pass`] (8 + 8 + 8 + 8
//! bits). Both produce the same ascending order; they trade histogram size
//! against the number of full-array scans.
//!
//! All misuse (digits that don't tile the key, histogram too small,
//! mismatched buffer lengths) is a programming defect and panics; there are
//! no recoverable errors in a pure in-memory sort.

pub mod pass;
pub mod patterns;
pub mod schedule;

pub use pass::{counting_sort_pass, Histogram};
pub use schedule::{Decomposition, DigitSpec, SortedBuffer};

/// Sorts `v` ascending by unsigned value.
///
/// Convenience wrapper over [`schedule::sort`] that owns the scratch buffer
/// and copies the result back into `v` when the final pass left it in the
/// scratch side.
pub fn sort(v: &mut [u32], decomposition: &Decomposition) {
    let mut scratch = vec![0u32; v.len()];
    if schedule::sort(v, &mut scratch, decomposition) == SortedBuffer::Scratch {
        v.copy_from_slice(&scratch);
    }
}
