//! The memory buffer contract and its fixed-window implementation.
//!
//! [`MemBuffer`] is the capability shared by every buffer variant, whatever
//! its backing: bounds-checked byte access, best-effort bulk copy, and
//! endian-aware scalar decoding. [`ByteMemBuffer`] is the variant provided
//! here. It is a read-only window over bytes captured up front (a file
//! region, a test fixture, a disassembly window) with no live memory
//! behind it.

use bytes::Bytes;
use num_bigint::BigInt;
use tracing::trace;

use crate::core::address::Address;
use crate::core::endian::Endianness;
use crate::error::{MemBufferError, Result};

/// A live memory system backing a buffer.
///
/// Variants backed by a real memory subsystem implement this; the fixed
/// byte window never does. The body stays empty until such a variant
/// exists in-tree, since callers only need the capability check through
/// [`MemBuffer::memory`].
pub trait Memory {}

/// Bounds-checked, endian-aware read access over a run of bytes.
///
/// All scalar reads are strict: either every required byte is in range or
/// the call fails with [`MemBufferError::OutOfRange`]. The one partial-
/// tolerant operation is [`get_bytes`](MemBuffer::get_bytes), which reports
/// how many bytes it copied instead of failing.
///
/// The whole contract is available through trait objects; holders of a
/// `&dyn MemBuffer` can decode scalars without knowing the variant.
pub trait MemBuffer {
    /// The address associated with offset 0 of this buffer.
    ///
    /// Identity and reporting only; reads are keyed by plain offsets.
    fn address(&self) -> &Address;

    /// The byte order used for all multi-byte reads.
    fn endianness(&self) -> Endianness;

    /// True when multi-byte reads assemble most significant byte first.
    fn is_big_endian(&self) -> bool {
        self.endianness().is_big()
    }

    /// The byte at `offset`, or `OutOfRange` when `offset` is past the end.
    fn get_byte(&self, offset: u64) -> Result<u8>;

    /// Best-effort bulk copy starting at `offset` into the front of `dest`.
    ///
    /// Returns the number of bytes copied. An out-of-range start offset
    /// copies nothing and returns 0. That is defined behavior, not a
    /// suppressed error.
    fn get_bytes(&self, dest: &mut [u8], offset: u64) -> usize;

    /// Decode a signed 16-bit integer at `offset` in this buffer's byte
    /// order.
    ///
    /// Implementations delegate to the converter selected by their stored
    /// endianness.
    fn get_i16(&self, offset: u64) -> Result<i16>;

    /// Decode a signed 32-bit integer at `offset` in this buffer's byte
    /// order.
    fn get_i32(&self, offset: u64) -> Result<i32>;

    /// Decode a signed 64-bit integer at `offset` in this buffer's byte
    /// order.
    fn get_i64(&self, offset: u64) -> Result<i64>;

    /// Decode `size` bytes at `offset` into an arbitrary-precision integer.
    ///
    /// `size` may exceed 8. When `signed`, the result uses two's-complement
    /// semantics over `size * 8` bits; otherwise it is the non-negative
    /// magnitude. All-or-nothing like the fixed-width reads.
    fn get_big_integer(&self, offset: u64, size: usize, signed: bool) -> Result<BigInt>;

    /// Handle to the live memory system backing this buffer.
    ///
    /// Fails with [`MemBufferError::Unsupported`] for variants with no such
    /// backing. Callers should branch on this capability rather than assume
    /// it is present.
    fn memory(&self) -> Result<&dyn Memory> {
        Err(MemBufferError::Unsupported(
            "buffer has no live memory backing".to_string(),
        ))
    }
}

/// A read-only, fixed-size byte window with an associated address.
///
/// The backing bytes are captured at construction and never change; the
/// buffer is pure after that point and safe for unsynchronized concurrent
/// reads. [`MemBuffer::memory`] always fails because there is no memory
/// system behind this object.
#[derive(Debug, Clone)]
pub struct ByteMemBuffer {
    bytes: Bytes,
    address: Address,
    endianness: Endianness,
}

impl ByteMemBuffer {
    /// Create a buffer over `bytes`, associating `address` with offset 0.
    ///
    /// Any sequence is accepted, including empty.
    pub fn new(address: Address, bytes: impl Into<Bytes>, endianness: Endianness) -> Self {
        let bytes = bytes.into();
        trace!(
            address = %address,
            len = bytes.len(),
            endianness = %endianness,
            "Created byte window buffer"
        );
        Self {
            bytes,
            address,
            endianness,
        }
    }

    /// Create a buffer from individual byte values.
    ///
    /// Each value is truncated to its low 8 bits, in order. Convenience
    /// form for fixtures: `from_values(addr, e, &[1, 2, 255, 256])` holds
    /// the bytes `[0x01, 0x02, 0xFF, 0x00]`.
    pub fn from_values(address: Address, endianness: Endianness, values: &[i32]) -> Self {
        let bytes: Vec<u8> = values.iter().map(|&v| v as u8).collect();
        Self::new(address, bytes, endianness)
    }

    /// Number of bytes held by this buffer.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl MemBuffer for ByteMemBuffer {
    fn address(&self) -> &Address {
        &self.address
    }

    fn endianness(&self) -> Endianness {
        self.endianness
    }

    fn get_byte(&self, offset: u64) -> Result<u8> {
        if offset >= self.bytes.len() as u64 {
            return Err(MemBufferError::OutOfRange { offset });
        }
        Ok(self.bytes[offset as usize])
    }

    fn get_bytes(&self, dest: &mut [u8], offset: u64) -> usize {
        if offset >= self.bytes.len() as u64 {
            return 0;
        }
        let start = offset as usize;
        let len = dest.len().min(self.bytes.len() - start);
        dest[..len].copy_from_slice(&self.bytes[start..start + len]);

        trace!(offset, copied = len, "Performed bulk read");

        len
    }

    fn get_i16(&self, offset: u64) -> Result<i16> {
        self.endianness.converter().get_i16(self, offset)
    }

    fn get_i32(&self, offset: u64) -> Result<i32> {
        self.endianness.converter().get_i32(self, offset)
    }

    fn get_i64(&self, offset: u64) -> Result<i64> {
        self.endianness.converter().get_i64(self, offset)
    }

    fn get_big_integer(&self, offset: u64, size: usize, signed: bool) -> Result<BigInt> {
        self.endianness
            .converter()
            .get_big_integer(self, offset, size, signed)
    }
}
