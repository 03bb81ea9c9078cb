//! Node identifiers.
//!
//! Every IR node produced by one lowering session carries a `QuintId` drawn
//! from that session's [`Registry`](crate::Registry). Identifiers are
//! strictly increasing within a session and never reused; a session
//! numbered from the top of the `u64` range wraps around to zero.

use std::fmt;

/// Identifier of an IR node.
///
/// Layout: a plain `u64`. Zero is never issued by a registry created with the
/// default configuration, but nothing in the IR treats it specially.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct QuintId(u64);

impl QuintId {
    /// Create an identifier from its raw value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        QuintId(raw)
    }

    /// Get the raw value.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for QuintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuintId({})", self.0)
    }
}

impl fmt::Display for QuintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::QuintId;
    crate::static_assert_size!(QuintId, 8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_by_raw_value() {
        assert!(QuintId::new(1) < QuintId::new(2));
        assert_eq!(QuintId::new(7).raw(), 7);
    }

    #[test]
    fn display_is_the_bare_number() {
        assert_eq!(QuintId::new(42).to_string(), "42");
        assert_eq!(format!("{:?}", QuintId::new(42)), "QuintId(42)");
    }
}
