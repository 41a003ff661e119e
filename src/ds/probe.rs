//! Ring-index arithmetic for linear probing.
//!
//! The slot table is a fixed-length ring: probing walks forward modulo the
//! table capacity, cluster scans walk backward. These helpers keep all the
//! modular arithmetic in one place so the table code reads as plain probe
//! logic.
//!
//! All functions expect `capacity >= 2` and `index < capacity`; both are
//! guaranteed by the cache constructor.

/// The slot one step forward in probe order.
#[inline]
pub fn next_index(index: usize, capacity: usize) -> usize {
    (index + 1) % capacity
}

/// The slot one step backward in probe order.
#[inline]
pub fn prev_index(index: usize, capacity: usize) -> usize {
    (index + capacity - 1) % capacity
}

/// The ideal slot for a hash: where probing for that key starts.
#[inline]
pub fn hash_to_index(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

/// Forward probe distance from `ideal` to `actual`, accounting for
/// wraparound. Zero means the entry sits in its ideal slot.
#[inline]
pub fn displacement(actual: usize, ideal: usize, capacity: usize) -> usize {
    (actual + capacity - ideal) % capacity
}
