//! Address types for memory buffers.
//!
//! An [`Address`] identifies where a buffer's bytes came from. Buffers carry
//! it for identity and reporting only; every read inside a buffer is keyed by
//! a plain byte offset, never by address arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of location an address refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum AddressKind {
    /// Virtual address (runtime memory address)
    Virtual,
    /// Offset within a file on disk
    FileOffset,
    /// Physical memory address (kernel/embedded captures)
    Physical,
}

/// An opaque location identity attached to a buffer.
///
/// Addresses are stored and returned, compared and displayed; offset-based
/// arithmetic on buffer contents never goes through them. The checked
/// `add`/`sub` helpers exist for callers that want to derive the address of a
/// byte they read, not for the buffer itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// The kind of location this represents
    pub kind: AddressKind,
    /// The numeric value of the address
    pub value: u64,
    /// Address space identifier (optional, defaults to "default")
    pub space: Option<String>,
}

impl Address {
    /// Create a new Address.
    pub fn new(kind: AddressKind, value: u64) -> Self {
        Address {
            kind,
            value,
            space: None,
        }
    }

    /// Create a new Address within a named address space.
    pub fn with_space(kind: AddressKind, value: u64, space: impl Into<String>) -> Self {
        Address {
            kind,
            value,
            space: Some(space.into()),
        }
    }

    /// Add an offset to this address, failing on overflow.
    pub fn add(&self, offset: u64) -> Result<Self, String> {
        let value = self
            .value
            .checked_add(offset)
            .ok_or_else(|| "addition overflow".to_string())?;
        Ok(Address {
            kind: self.kind,
            value,
            space: self.space.clone(),
        })
    }

    /// Subtract an offset from this address, failing on underflow.
    pub fn sub(&self, offset: u64) -> Result<Self, String> {
        let value = self
            .value
            .checked_sub(offset)
            .ok_or_else(|| "subtraction underflow".to_string())?;
        Ok(Address {
            kind: self.kind,
            value,
            space: self.space.clone(),
        })
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }

    /// Deserialize from JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, String> {
        serde_json::from_str(json_str).map_err(|e| e.to_string())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let space_str = self
            .space
            .as_ref()
            .map(|s| format!("@{}", s))
            .unwrap_or_default();

        match self.kind {
            AddressKind::Virtual => write!(f, "VA:{:x}{}", self.value, space_str),
            AddressKind::FileOffset => write!(f, "FO:{:x}{}", self.value, space_str),
            AddressKind::Physical => write!(f, "PA:{:x}{}", self.value, space_str),
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressKind::Virtual => write!(f, "Virtual"),
            AddressKind::FileOffset => write!(f, "FileOffset"),
            AddressKind::Physical => write!(f, "Physical"),
        }
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Primary: compare by value
        match self.value.cmp(&other.value) {
            std::cmp::Ordering::Equal => {}
            ord => return ord,
        }

        // Secondary: compare by kind (arbitrary but consistent ordering)
        match self.kind.cmp(&other.kind) {
            std::cmp::Ordering::Equal => {}
            ord => return ord,
        }

        // Tertiary: compare by space (None < Some)
        match (&self.space, &other.space) {
            (None, None) => std::cmp::Ordering::Equal,
            (None, Some(_)) => std::cmp::Ordering::Less,
            (Some(_), None) => std::cmp::Ordering::Greater,
            (Some(a), Some(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
