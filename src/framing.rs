//! The three operations and one scalar that vary between BCS and BINCODE.
//!
//! Everything else — the type-directed walk itself — is shared in
//! [`crate::ser`] and [`crate::de`], generic over this trait.

use crate::error::{DeError, SerError};
use crate::read::SliceReader;

/// A format's length codec, variant-index codec, map-ordering policy, and
/// depth budget, bundled behind a zero-sized marker type.
pub(crate) trait Framing {
    /// Recursion-depth budget, or `None` if unbounded.
    fn depth_budget() -> Option<u32>;

    /// Emit a sequence/map/bytes/string length.
    fn encode_length(out: &mut Vec<u8>, len: usize) -> Result<(), SerError>;

    /// Read a sequence/map/bytes/string length.
    fn decode_length(reader: &mut SliceReader<'_>) -> Result<usize, DeError>;

    /// Emit a variant-table index.
    fn encode_variant_index(out: &mut Vec<u8>, index: u32) -> Result<(), SerError>;

    /// Read a variant-table index.
    fn decode_variant_index(reader: &mut SliceReader<'_>) -> Result<u32, DeError>;

    /// Reorder already-written map entries in place by the format's
    /// ordering policy.
    ///
    /// `entry_starts[i]` is the buffer offset where entry `i`'s key begins;
    /// `entry_starts` additionally holds one trailing sentinel equal to the
    /// buffer's length after the last entry. `key_ends[i]` is the offset
    /// where entry `i`'s serialized key ends (and its value begins).
    fn sort_map_entries(out: &mut [u8], entry_starts: &[usize], key_ends: &[usize]);

    /// Validate a newly decoded map key's serialized bytes against the
    /// previous entry's (`None` on the first entry).
    fn check_map_key_order(previous: Option<&[u8]>, current: &[u8]) -> Result<(), DeError>;
}
