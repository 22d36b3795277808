//! Syntax pattern compiler.
//!
//! Turns a pattern such as `"%abdim %rt,[%ra],%rb{,%enb4}"` into a flat
//! list of [`Lex`] elements once, so matching never re-parses the pattern.

use alloc::vec::Vec;

use crate::registry::Registry;

/// Upper bound on optional groups per pattern; matching tries
/// `2^groups` combinations.
pub const MAX_OPTIONAL_GROUPS: usize = 8;

/// How an instruction accesses an operand field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Access {
    /// `%field`: read.
    Use,
    /// `=field`: written.
    Def,
    /// `&field`: read and written.
    UseDef,
}

impl Access {
    /// Whether the operand is read.
    #[inline]
    pub fn is_use(self) -> bool {
        matches!(self, Access::Use | Access::UseDef)
    }

    /// Whether the operand is written.
    #[inline]
    pub fn is_def(self) -> bool {
        matches!(self, Access::Def | Access::UseDef)
    }
}

/// One compiled lexical element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lex {
    /// Literal character that must appear in the input.
    Char(char),
    /// Operand field, by registry index.
    Field {
        /// Index into the registry's field list.
        field: usize,
        /// Direction of the operand.
        access: Access,
    },
    /// Start of optional group `group`; `end` is the position of the
    /// matching [`Lex::OptEnd`].
    OptStart {
        /// Group number in order of appearance.
        group: u8,
        /// Index of the matching end marker.
        end: usize,
    },
    /// End of an optional group.
    OptEnd,
}

/// A compiled syntax pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    lexes: Vec<Lex>,
    groups: u8,
}

impl Syntax {
    /// Compile `pattern`, resolving field names through `registry`.
    ///
    /// # Panics
    ///
    /// Panics if the pattern names an unknown field, has unbalanced braces,
    /// or more than [`MAX_OPTIONAL_GROUPS`] optional groups. These are
    /// defects in the instruction-set description.
    pub fn compile(pattern: &str, registry: &Registry) -> Self {
        let mut lexes = Vec::with_capacity(pattern.len());
        let mut open: Vec<usize> = Vec::new();
        let mut groups = 0usize;
        let mut rest = pattern;

        while let Some(c) = rest.chars().next() {
            rest = &rest[c.len_utf8()..];
            let access = match c {
                '%' => Access::Use,
                '=' => Access::Def,
                '&' => Access::UseDef,
                '{' => {
                    assert!(
                        groups < MAX_OPTIONAL_GROUPS,
                        "syntax '{}' has more than {} optional groups",
                        pattern,
                        MAX_OPTIONAL_GROUPS
                    );
                    open.push(lexes.len());
                    lexes.push(Lex::OptStart {
                        group: groups as u8,
                        end: 0,
                    });
                    groups += 1;
                    continue;
                }
                '}' => {
                    let start = match open.pop() {
                        Some(start) => start,
                        None => panic!("syntax '{}' closes a group that was never opened", pattern),
                    };
                    let end = lexes.len();
                    if let Lex::OptStart { end: slot, .. } = &mut lexes[start] {
                        *slot = end;
                    }
                    lexes.push(Lex::OptEnd);
                    continue;
                }
                _ => {
                    lexes.push(Lex::Char(c));
                    continue;
                }
            };

            let len = rest
                .bytes()
                .take_while(|&b| b.is_ascii_alphanumeric() || b == b'_')
                .count();
            let name = &rest[..len];
            rest = &rest[len..];
            let field = match registry.resolve_field(name) {
                Some((index, _)) => index,
                None => panic!("syntax '{}' refers to unknown field '{}'", pattern, name),
            };
            lexes.push(Lex::Field { field, access });
        }

        assert!(open.is_empty(), "syntax '{}' has an unclosed group", pattern);

        Self {
            lexes,
            groups: groups as u8,
        }
    }

    /// The compiled elements.
    #[inline]
    pub fn lexes(&self) -> &[Lex] {
        &self.lexes
    }

    /// Number of optional groups.
    #[inline]
    pub fn groups(&self) -> u8 {
        self.groups
    }

    /// Number of optional-operand combinations the matcher tries.
    #[inline]
    pub fn variants(&self) -> u32 {
        1u32 << self.groups
    }
}
