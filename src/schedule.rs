//! Splits the 32 key bits into low-to-high digit passes and drives the
//! counting sort over a pair of ping-pong buffers.

use crate::pass::{counting_sort_pass, Histogram};

/// One contiguous bit field of the key, the sort key of a single pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DigitSpec {
    pub width: u32,
    pub offset: u32,
}

/// An ordered list of digit specs covering all 32 key bits exactly once,
/// lowest bits first. Validated at construction, so a `Decomposition` that
/// exists is always runnable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decomposition {
    specs: Vec<DigitSpec>,
}

impl Decomposition {
    /// Three passes of 10, 11 and 11 bits. Larger histogram, one fewer
    /// full-array scan than [`four_pass`](Self::four_pass).
    pub fn three_pass() -> Self {
        Self::from_widths(&[10, 11, 11])
    }

    /// Four passes of 8 bits each, the classic byte-wise split with a
    /// 256-slot histogram.
    pub fn four_pass() -> Self {
        Self::from_widths(&[8, 8, 8, 8])
    }

    /// Builds a decomposition from digit widths alone, placing each digit
    /// directly above the previous one.
    ///
    /// # Panics
    ///
    /// Panics unless every width is positive and the widths sum to exactly
    /// 32 bits.
    pub fn from_widths(widths: &[u32]) -> Self {
        let mut specs = Vec::with_capacity(widths.len());
        let mut offset = 0;
        for &width in widths {
            assert!(width <= u32::BITS, "digit width {width} wider than the key");
            specs.push(DigitSpec { width, offset });
            offset += width;
        }
        Self::new(specs)
    }

    /// Validates explicit digit specs: positive widths, offsets contiguous
    /// from bit 0 with no gaps or overlaps, and coverage of exactly the 32
    /// key bits. Any mismatch is a configuration defect and panics before a
    /// single pass can run.
    pub fn new(specs: Vec<DigitSpec>) -> Self {
        assert!(!specs.is_empty(), "empty decomposition");

        let mut covered = 0u32;
        for spec in &specs {
            assert!(spec.width >= 1, "zero-width digit at offset {}", spec.offset);
            assert!(
                spec.width <= u32::BITS,
                "digit width {} wider than the key",
                spec.width
            );
            assert_eq!(
                spec.offset, covered,
                "digit at offset {} leaves a gap or overlap, expected offset {covered}",
                spec.offset
            );
            covered += spec.width;
            assert!(
                covered <= u32::BITS,
                "digits extend past bit {}",
                u32::BITS
            );
        }
        assert_eq!(
            covered,
            u32::BITS,
            "digit widths cover {covered} bits, the key has {}",
            u32::BITS
        );

        Self { specs }
    }

    pub fn specs(&self) -> &[DigitSpec] {
        &self.specs
    }

    pub fn passes(&self) -> usize {
        self.specs.len()
    }

    /// Histogram slots needed by the widest digit in this decomposition.
    pub fn histogram_len(&self) -> usize {
        // Non-empty is a construction invariant.
        self.specs
            .iter()
            .map(|spec| 1usize << spec.width)
            .max()
            .unwrap_or(0)
    }
}

/// Names the buffer that ended up holding the sorted sequence, so callers
/// never have to re-derive pass-count parity themselves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortedBuffer {
    Input,
    Scratch,
}

/// Sorts `input` ascending by unsigned value, one counting sort pass per
/// digit spec, alternating `input` and `scratch` as source and destination.
///
/// Both buffers are clobbered. The return value names the buffer holding
/// the sorted sequence: `input` after an even number of passes, `scratch`
/// after an odd number.
///
/// Buffers of length 0 or 1 are already sorted; no pass runs, the ping-pong
/// does not advance, and the result is reported in `input`.
///
/// The histogram is allocated here, per call, sized for the widest digit in
/// the decomposition; concurrent sorts never share scratch state.
///
/// # Panics
///
/// Panics if the buffer lengths differ.
pub fn sort(input: &mut [u32], scratch: &mut [u32], decomposition: &Decomposition) -> SortedBuffer {
    assert_eq!(
        input.len(),
        scratch.len(),
        "input and scratch must have equal length"
    );

    if input.len() <= 1 {
        // A pass over 0 or 1 elements copies nothing, so advancing the
        // ping-pong here would name a buffer the data never reached.
        return SortedBuffer::Input;
    }

    let mut histogram = Histogram::new(decomposition.histogram_len());
    let mut input_is_source = true;

    for spec in decomposition.specs() {
        let (src, dst) = if input_is_source {
            (&*input, &mut *scratch)
        } else {
            (&*scratch, &mut *input)
        };
        counting_sort_pass(spec.width, spec.offset, src, dst, &mut histogram);
        input_is_source = !input_is_source;
    }

    if input_is_source {
        SortedBuffer::Input
    } else {
        SortedBuffer::Scratch
    }
}
