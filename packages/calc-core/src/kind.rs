//! Operation kinds and their stable interop tags.
//!
//! The four kinds are identified by small positive integer tags (1–4). The
//! tags are a compatibility contract: serialized kinds, logs, and foreign
//! callers all agree on them, so they must never be renumbered.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbolic tag identifying which arithmetic operation to perform.
///
/// Serializes to and from the bare integer tag
/// (`#[serde(try_from = "i32", into = "i32")]`), keeping the serialized form
/// identical across languages and versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum CalcKind {
    /// Addition (`a + b`).
    Add = 1,
    /// Subtraction (`a - b`).
    Subtract = 2,
    /// Multiplication (`a * b`).
    Multiply = 3,
    /// Division (`a / b`, truncated toward zero).
    Divide = 4,
}

/// Error returned when an integer tag names no recognized operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation kind tag: {0}")]
pub struct UnknownTag(pub i32);

impl CalcKind {
    /// All recognized kinds, in tag order.
    pub const ALL: [CalcKind; 4] = [
        CalcKind::Add,
        CalcKind::Subtract,
        CalcKind::Multiply,
        CalcKind::Divide,
    ];

    /// Returns the stable interop tag for this kind.
    #[must_use]
    pub const fn tag(self) -> i32 {
        self as i32
    }

    /// Resolves a raw integer tag to a kind.
    ///
    /// Returns `None` for every value outside the recognized set; there is no
    /// panicking variant.
    #[must_use]
    pub const fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            1 => Some(CalcKind::Add),
            2 => Some(CalcKind::Subtract),
            3 => Some(CalcKind::Multiply),
            4 => Some(CalcKind::Divide),
            _ => None,
        }
    }

    /// Returns the symbolic name rendered in error messages (`"Add"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CalcKind::Add => "Add",
            CalcKind::Subtract => "Subtract",
            CalcKind::Multiply => "Multiply",
            CalcKind::Divide => "Divide",
        }
    }
}

impl fmt::Display for CalcKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<CalcKind> for i32 {
    fn from(kind: CalcKind) -> Self {
        kind.tag()
    }
}

impl TryFrom<i32> for CalcKind {
    type Error = UnknownTag;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        Self::from_tag(tag).ok_or(UnknownTag(tag))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Tag stability: the interop contract ----

    #[test]
    fn tags_never_change() {
        assert_eq!(CalcKind::Add.tag(), 1);
        assert_eq!(CalcKind::Subtract.tag(), 2);
        assert_eq!(CalcKind::Multiply.tag(), 3);
        assert_eq!(CalcKind::Divide.tag(), 4);
    }

    #[test]
    fn from_tag_roundtrips_every_kind() {
        for kind in CalcKind::ALL {
            assert_eq!(CalcKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn from_tag_rejects_unrecognized_values() {
        for tag in [0, 5, -1, 99, i32::MIN, i32::MAX] {
            assert_eq!(CalcKind::from_tag(tag), None, "tag {tag}");
        }
    }

    #[test]
    fn try_from_carries_the_offending_tag() {
        assert_eq!(CalcKind::try_from(3), Ok(CalcKind::Multiply));
        assert_eq!(CalcKind::try_from(99), Err(UnknownTag(99)));
    }

    #[test]
    fn unknown_tag_message_names_the_tag() {
        assert_eq!(
            UnknownTag(42).to_string(),
            "unknown operation kind tag: 42"
        );
    }

    // ---- Symbolic names: rendered into the error-message contract ----

    #[test]
    fn display_uses_symbolic_names() {
        assert_eq!(CalcKind::Add.to_string(), "Add");
        assert_eq!(CalcKind::Subtract.to_string(), "Subtract");
        assert_eq!(CalcKind::Multiply.to_string(), "Multiply");
        assert_eq!(CalcKind::Divide.to_string(), "Divide");
    }

    // ---- Serde: the integer tag is the wire form ----

    #[test]
    fn serializes_as_the_bare_tag() {
        let json = serde_json::to_string(&CalcKind::Divide).expect("serialize");
        assert_eq!(json, "4");
    }

    #[test]
    fn deserializes_from_the_bare_tag() {
        let kind: CalcKind = serde_json::from_str("2").expect("deserialize");
        assert_eq!(kind, CalcKind::Subtract);
    }

    #[test]
    fn deserializing_an_unknown_tag_fails() {
        let result = serde_json::from_str::<CalcKind>("99");
        assert!(result.is_err());
    }

    #[test]
    fn serde_roundtrips_every_kind() {
        for kind in CalcKind::ALL {
            let json = serde_json::to_string(&kind).expect("serialize");
            let decoded: CalcKind = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(kind, decoded);
        }
    }
}
