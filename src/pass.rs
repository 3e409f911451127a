//! Stable counting sort over a single bit-field "digit" of a `u32` key.

/// Scratch table for one counting sort pass.
///
/// During a pass the table maps each digit value to its occurrence count,
/// then (after the prefix sum) to the next destination index for that digit
/// value. It is fully re-zeroed at the start of every pass; nothing is
/// carried from one pass to the next.
///
/// Capacity is fixed at construction. Every digit width used against this
/// histogram must satisfy `2^width <= len()`, checked per pass.
pub struct Histogram {
    slots: Vec<usize>,
}

impl Histogram {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![0; len],
        }
    }

    /// Smallest histogram that can serve a digit of `width` bits.
    pub fn for_width(width: u32) -> Self {
        Self::new(1usize << width)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Rearranges `src` into `dst`, grouping elements by the value of the key
/// bits `[offset, offset + width)`, groups in ascending digit-value order.
///
/// Elements sharing a digit value keep the relative order they held in
/// `src`. Later passes over higher bits depend on this stability to compose
/// into a fully ascending order.
///
/// If `src` holds 0 or 1 elements the input is already sorted and nothing is
/// copied; `dst` keeps whatever it held before. Callers must treat such
/// input as final where it already is instead of reading `dst`.
///
/// # Panics
///
/// Panics if `width` is zero, the digit extends past bit 32, the digit
/// space `2^width` exceeds the histogram capacity, or the buffers differ in
/// length. Also panics on the internal invariant checks (digit value out of
/// range, destination index out of bounds); those fire only if the mask and
/// histogram no longer agree, i.e. on internal corruption.
pub fn counting_sort_pass(
    width: u32,
    offset: u32,
    src: &[u32],
    dst: &mut [u32],
    histogram: &mut Histogram,
) {
    assert!(width >= 1, "zero-width digit");
    assert!(
        offset + width <= u32::BITS,
        "digit [{offset}, {}) extends past bit {}",
        offset + width,
        u32::BITS
    );
    let digit_space = 1usize << width;
    assert!(
        digit_space <= histogram.slots.len(),
        "digit space {digit_space} exceeds histogram capacity {}",
        histogram.slots.len()
    );
    assert_eq!(
        src.len(),
        dst.len(),
        "source and destination must have equal length"
    );

    let size = src.len();
    if size <= 1 {
        return;
    }

    // width >= 1, so the shift below stays in range.
    let mask = (u32::MAX >> (u32::BITS - width)) << offset;

    let slots = &mut histogram.slots[..digit_space];
    slots.fill(0);

    for &key in src {
        let digit = ((key & mask) >> offset) as usize;
        assert!(
            digit < digit_space,
            "digit {digit} out of range for a {width}-bit digit"
        );
        slots[digit] += 1;
    }

    // Exclusive prefix sum: each slot becomes the first destination index
    // for its digit value. Forward running sum, no reverse iteration.
    let mut sum = 0;
    for slot in slots.iter_mut() {
        let count = *slot;
        *slot = sum;
        sum += count;
    }

    // Scanning `src` in order is what keeps the pass stable.
    for &key in src {
        let digit = ((key & mask) >> offset) as usize;
        let pos = slots[digit];
        assert!(pos < size, "destination index {pos} out of bounds for {size} elements");
        dst[pos] = key;
        slots[digit] += 1;
    }
}
