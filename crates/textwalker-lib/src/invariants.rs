//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

/// The cursor moves forward only, and only within the source.
pub(crate) fn ensure_cursor_advance(from: usize, to: usize, len: usize) {
    assert!(
        from <= to && to <= len,
        "walker: cursor moved from {from} to {to} (source length {len})"
    );
}
