//! Fixed-window, endian-aware memory buffer primitives.
//!
//! This crate provides the [`MemBuffer`] capability contract for
//! bounds-checked byte access and endian-aware scalar decoding over an
//! addressed run of bytes, together with [`ByteMemBuffer`], a read-only
//! implementation backed by bytes captured up front rather than by a live
//! memory system. Typical uses are decoding scalar values out of file
//! regions, test fixtures, and disassembly windows with the same API a
//! live-memory buffer would offer.

/// Core data types module
pub mod core;

/// Error types module
pub mod error;

/// Logging and tracing setup
pub mod logging;

pub use crate::core::address::{Address, AddressKind};
pub use crate::core::endian::{BigEndianConverter, DataConverter, Endianness, LittleEndianConverter};
pub use crate::core::mem_buffer::{ByteMemBuffer, MemBuffer, Memory};
pub use crate::error::{MemBufferError, Result};
