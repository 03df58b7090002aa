//! Purpose: Name the four field-presentation policies and their rules.
//! Exports: `Policy`.
//! Role: Selector for `AnyRecord` and the CLI; carries no codec logic itself.
//! Invariants: `Policy::ALL` order is A, B, C, D and is used for stable output order.
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Policy {
    /// A: tri-state `name`/`age`, references always emitted (`null` when unset).
    TriState,
    /// B: plain fields, everything omitted when empty.
    OmitEmpty,
    /// C: plain fields, everything always emitted.
    AlwaysEmit,
    /// D: like B, but `other` is held by value and always emitted.
    InlineOther,
}

impl Policy {
    pub const ALL: [Policy; 4] = [
        Policy::TriState,
        Policy::OmitEmpty,
        Policy::AlwaysEmit,
        Policy::InlineOther,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Policy::TriState => "tri-state",
            Policy::OmitEmpty => "omit-empty",
            Policy::AlwaysEmit => "always-emit",
            Policy::InlineOther => "inline-other",
        }
    }

    pub fn letter(self) -> char {
        match self {
            Policy::TriState => 'A',
            Policy::OmitEmpty => 'B',
            Policy::AlwaysEmit => 'C',
            Policy::InlineOther => 'D',
        }
    }

    /// Whether an explicit `null` survives decoding as something other than zero.
    pub fn preserves_null(self) -> bool {
        matches!(self, Policy::TriState)
    }

    /// Whether zero-valued plain fields are dropped from the output.
    pub fn omits_empty(self) -> bool {
        matches!(self, Policy::OmitEmpty | Policy::InlineOther)
    }

    /// Whether an unset `employee` is written as `null` rather than left out.
    pub fn emits_unset_references(self) -> bool {
        matches!(self, Policy::TriState | Policy::AlwaysEmit)
    }

    pub fn other_by_value(self) -> bool {
        matches!(self, Policy::InlineOther)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
