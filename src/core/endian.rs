//! Endianness flag and the two byte-order decoding strategies.
//!
//! Multi-byte reads on a [`MemBuffer`](crate::core::mem_buffer::MemBuffer)
//! delegate to one of two stateless [`DataConverter`] strategies selected by
//! the buffer's stored [`Endianness`]. Keeping the assembly and
//! sign-extension logic here, parameterized by width, avoids duplicating it
//! across every scalar accessor.

use crate::core::mem_buffer::MemBuffer;
use crate::error::{MemBufferError, Result};
use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The byte order used to assemble multi-byte integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endianness {
    /// Little-endian byte order
    Little,
    /// Big-endian byte order
    Big,
}

impl Endianness {
    /// True for big-endian byte order.
    pub fn is_big(&self) -> bool {
        matches!(self, Endianness::Big)
    }

    /// The decoding strategy for this byte order.
    pub fn converter(&self) -> &'static dyn DataConverter {
        match self {
            Endianness::Big => &BigEndianConverter,
            Endianness::Little => &LittleEndianConverter,
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "Little"),
            Endianness::Big => write!(f, "Big"),
        }
    }
}

/// A stateless decoding strategy over a bounds-checked byte source.
///
/// Every read is all-or-nothing: the required bytes are fetched through the
/// source's bulk copy, and anything short of the full width fails with
/// `OutOfRange`. Results are byte-identical to repeated single-byte reads at
/// `offset`, `offset + 1`, and so on.
pub trait DataConverter: Sync {
    /// The byte order this strategy decodes.
    fn endianness(&self) -> Endianness;

    /// Decode a two's-complement 16-bit integer at `offset`.
    fn get_i16(&self, src: &dyn MemBuffer, offset: u64) -> Result<i16>;

    /// Decode a two's-complement 32-bit integer at `offset`.
    fn get_i32(&self, src: &dyn MemBuffer, offset: u64) -> Result<i32>;

    /// Decode a two's-complement 64-bit integer at `offset`.
    fn get_i64(&self, src: &dyn MemBuffer, offset: u64) -> Result<i64>;

    /// Decode `size` bytes at `offset` into an arbitrary-precision integer.
    ///
    /// The unsigned interpretation accumulates the bytes in this strategy's
    /// order; when `signed` and the top bit of the most significant byte is
    /// set, the value is reinterpreted as two's complement over `size * 8`
    /// bits. A `size` of 0 yields 0 at any offset.
    fn get_big_integer(
        &self,
        src: &dyn MemBuffer,
        offset: u64,
        size: usize,
        signed: bool,
    ) -> Result<BigInt>;
}

/// Fetch exactly `N` bytes or fail.
fn fetch<const N: usize>(src: &dyn MemBuffer, offset: u64) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    if src.get_bytes(&mut buf, offset) != N {
        return Err(MemBufferError::OutOfRange { offset });
    }
    Ok(buf)
}

/// Fetch exactly `size` bytes or fail.
fn fetch_exact(src: &dyn MemBuffer, offset: u64, size: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; size];
    if src.get_bytes(&mut buf, offset) != size {
        return Err(MemBufferError::OutOfRange { offset });
    }
    Ok(buf)
}

/// Most-significant-byte-first decoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigEndianConverter;

impl DataConverter for BigEndianConverter {
    fn endianness(&self) -> Endianness {
        Endianness::Big
    }

    fn get_i16(&self, src: &dyn MemBuffer, offset: u64) -> Result<i16> {
        Ok(i16::from_be_bytes(fetch::<2>(src, offset)?))
    }

    fn get_i32(&self, src: &dyn MemBuffer, offset: u64) -> Result<i32> {
        Ok(i32::from_be_bytes(fetch::<4>(src, offset)?))
    }

    fn get_i64(&self, src: &dyn MemBuffer, offset: u64) -> Result<i64> {
        Ok(i64::from_be_bytes(fetch::<8>(src, offset)?))
    }

    fn get_big_integer(
        &self,
        src: &dyn MemBuffer,
        offset: u64,
        size: usize,
        signed: bool,
    ) -> Result<BigInt> {
        let bytes = fetch_exact(src, offset, size)?;
        if signed {
            Ok(BigInt::from_signed_bytes_be(&bytes))
        } else {
            Ok(BigUint::from_bytes_be(&bytes).into())
        }
    }
}

/// Least-significant-byte-first decoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct LittleEndianConverter;

impl DataConverter for LittleEndianConverter {
    fn endianness(&self) -> Endianness {
        Endianness::Little
    }

    fn get_i16(&self, src: &dyn MemBuffer, offset: u64) -> Result<i16> {
        Ok(i16::from_le_bytes(fetch::<2>(src, offset)?))
    }

    fn get_i32(&self, src: &dyn MemBuffer, offset: u64) -> Result<i32> {
        Ok(i32::from_le_bytes(fetch::<4>(src, offset)?))
    }

    fn get_i64(&self, src: &dyn MemBuffer, offset: u64) -> Result<i64> {
        Ok(i64::from_le_bytes(fetch::<8>(src, offset)?))
    }

    fn get_big_integer(
        &self,
        src: &dyn MemBuffer,
        offset: u64,
        size: usize,
        signed: bool,
    ) -> Result<BigInt> {
        let bytes = fetch_exact(src, offset, size)?;
        if signed {
            Ok(BigInt::from_signed_bytes_le(&bytes))
        } else {
            Ok(BigUint::from_bytes_le(&bytes).into())
        }
    }
}
