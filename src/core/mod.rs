//! Core data types for memory buffer access.
//!
//! This module contains the fundamental types of the crate: the Address
//! identity type, the endianness flag with its decoding strategies, and the
//! memory buffer contract with its fixed-window implementation.

pub mod address;
pub mod endian;
pub mod mem_buffer;
