//! Field and keyword registry.
//!
//! Built once from an [`IsaDescription`]; read-only afterwards.

use alloc::vec::Vec;

use crate::isa::{attr, Field, IsaDescription, Keyword};
use crate::symtab::SymbolTable;

/// Longest keyword the scanner accepts.
pub const MAX_KEYWORD_LEN: usize = 32;

/// Name → field descriptor and class → keyword table lookups.
#[derive(Debug, Clone)]
pub struct Registry {
    fields: Vec<Field>,
    field_index: SymbolTable<usize>,
    classes: SymbolTable<SymbolTable<Keyword>>,
}

impl Registry {
    /// Build the registry, keeping only keywords applicable to the selected
    /// ISA variants and extensions.
    ///
    /// # Panics
    ///
    /// Panics on duplicate field names, duplicate keyword classes or names,
    /// a field that refers to a keyword class with no table, or a field
    /// whose width, offset and scale do not fit the instruction word.
    pub fn new(desc: &IsaDescription, isa: u32, extensions: u32) -> Self {
        let fields: Vec<Field> = desc.fields.to_vec();
        let field_index = SymbolTable::build(fields.iter().enumerate().map(|(i, f)| (f.name, i)));

        let classes = SymbolTable::build(desc.keywords.iter().map(|table| {
            let entries = table
                .entries
                .iter()
                .filter(|k| attr::applicable(k.attr, isa, extensions))
                .map(|k| (k.name, *k));
            (table.class, SymbolTable::build(entries))
        }));

        for field in &fields {
            assert!(field.width >= 1, "field '{}' has zero width", field.name);
            assert!(
                u32::from(field.offset) + u32::from(field.width) <= 32,
                "field '{}' does not fit in a 32-bit word",
                field.name
            );
            assert!(
                u32::from(field.width) + u32::from(field.scale) < 64,
                "field '{}' is wider than a 64-bit value",
                field.name
            );
            if let Some(class) = field.resource.keyword_class() {
                assert!(
                    classes.get(class).is_some(),
                    "field '{}' refers to unknown keyword class '{}'",
                    field.name,
                    class
                );
            }
        }

        Self {
            fields,
            field_index,
            classes,
        }
    }

    /// Find a field by name, returning its index and descriptor.
    #[inline]
    pub fn resolve_field(&self, name: &str) -> Option<(usize, &Field)> {
        let index = *self.field_index.get(name)?;
        Some((index, &self.fields[index]))
    }

    /// Field descriptor by index.
    #[inline]
    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index]
    }

    /// Look up `name` (already normalized) in keyword class `class`.
    #[inline]
    pub fn resolve_keyword(&self, class: &str, name: &str) -> Option<&Keyword> {
        self.classes.get(class)?.get(name)
    }

    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of keyword classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

/// A keyword candidate scanned from operand text, lower-cased in place.
pub struct KeywordToken {
    buf: [u8; MAX_KEYWORD_LEN],
    len: usize,
}

impl KeywordToken {
    /// The normalized keyword text.
    pub fn as_str(&self) -> &str {
        // Only ASCII bytes are ever stored.
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

/// Scan a keyword at the start of `input`: skip one `$`, take the maximal
/// run of alphanumerics, `.` and `_`, and lower-case it.
///
/// Returns `None` when the run is longer than [`MAX_KEYWORD_LEN`].
pub fn scan_keyword(input: &str) -> Option<(KeywordToken, &str)> {
    let input = input.strip_prefix('$').unwrap_or(input);
    let len = input
        .bytes()
        .take_while(|&b| b.is_ascii_alphanumeric() || b == b'.' || b == b'_')
        .count();
    if len > MAX_KEYWORD_LEN {
        return None;
    }
    let mut buf = [0u8; MAX_KEYWORD_LEN];
    for (dst, src) in buf.iter_mut().zip(input.bytes().take(len)) {
        *dst = src.to_ascii_lowercase();
    }
    Some((KeywordToken { buf, len }, &input[len..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::{KeywordTable, Resource, GPR_CLASS};

    static FIELDS: &[Field] = &[
        Field::new("rt", 20, 5, 0, Resource::Gpr),
        Field::new("ra", 15, 5, 0, Resource::Gpr),
        Field::new("sr", 10, 10, 0, Resource::Keyword("sr")),
    ];
    static GPR: &[Keyword] = &[
        Keyword::new("r0", 0, attr::RDREG),
        Keyword::new("r16", 16, 0),
        Keyword::new("r24", 24, attr::V3),
    ];
    static SR: &[Keyword] = &[Keyword::new("psw", 0x80, 0)];
    static KEYWORDS: &[KeywordTable] = &[
        KeywordTable {
            class: GPR_CLASS,
            entries: GPR,
        },
        KeywordTable {
            class: "sr",
            entries: SR,
        },
    ];
    static DESC: IsaDescription = IsaDescription {
        fields: FIELDS,
        keywords: KEYWORDS,
        opcodes: &[],
    };

    #[test]
    fn resolve_field_by_name() {
        let reg = Registry::new(&DESC, attr::ALL, attr::EXT_MASK);
        let (idx, field) = reg.resolve_field("ra").unwrap();
        assert_eq!(idx, 1);
        assert_eq!(field.offset, 15);
        assert!(reg.resolve_field("rz").is_none());
        assert_eq!(reg.field_count(), 3);
        assert_eq!(reg.class_count(), 2);
    }

    #[test]
    fn resolve_keyword_in_class() {
        let reg = Registry::new(&DESC, attr::ALL, attr::EXT_MASK);
        assert_eq!(reg.resolve_keyword(GPR_CLASS, "r16").unwrap().value, 16);
        assert_eq!(reg.resolve_keyword("sr", "psw").unwrap().value, 0x80);
        assert!(reg.resolve_keyword("sr", "r16").is_none());
        assert!(reg.resolve_keyword("usr", "psw").is_none());
    }

    #[test]
    fn keywords_hidden_by_isa_variant() {
        let reg = Registry::new(&DESC, attr::V1, attr::EXT_MASK);
        assert!(reg.resolve_keyword(GPR_CLASS, "r24").is_none());
        assert!(reg.resolve_keyword(GPR_CLASS, "r16").is_some());
    }

    fn registry_with(fields: &'static [Field]) -> Registry {
        let desc = IsaDescription {
            fields,
            keywords: KEYWORDS,
            opcodes: &[],
        };
        Registry::new(&desc, attr::ALL, 0)
    }

    #[test]
    #[should_panic(expected = "field 'z' has zero width")]
    fn zero_width_field_panics() {
        static BAD_FIELDS: &[Field] = &[Field::new("z", 0, 0, 0, Resource::Int)];
        let _ = registry_with(BAD_FIELDS);
    }

    #[test]
    #[should_panic(expected = "field 'hi' does not fit in a 32-bit word")]
    fn field_past_word_end_panics() {
        static BAD_FIELDS: &[Field] = &[Field::new("hi", 28, 8, 0, Resource::Uint)];
        let _ = registry_with(BAD_FIELDS);
    }

    #[test]
    #[should_panic(expected = "field 'big' is wider than a 64-bit value")]
    fn oversized_scale_panics() {
        static BAD_FIELDS: &[Field] = &[Field::new("big", 0, 4, 60, Resource::Int)];
        let _ = registry_with(BAD_FIELDS);
    }

    #[test]
    fn full_word_field_accepted() {
        static WIDE: &[Field] = &[Field::new("w", 0, 32, 0, Resource::Uint)];
        assert_eq!(registry_with(WIDE).field_count(), 1);
    }

    #[test]
    #[should_panic(expected = "unknown keyword class 'usr'")]
    fn missing_keyword_class_panics() {
        static BAD_FIELDS: &[Field] = &[Field::new("usr", 10, 10, 0, Resource::Keyword("usr"))];
        let desc = IsaDescription {
            fields: BAD_FIELDS,
            keywords: KEYWORDS,
            opcodes: &[],
        };
        let _ = Registry::new(&desc, attr::ALL, 0);
    }

    #[test]
    fn scan_keyword_normalizes() {
        let (tok, rest) = scan_keyword("$R10,[r2]").unwrap();
        assert_eq!(tok.as_str(), "r10");
        assert_eq!(rest, ",[r2]");

        let (tok, rest) = scan_keyword("D0.Lo rest").unwrap();
        assert_eq!(tok.as_str(), "d0.lo");
        assert_eq!(rest, " rest");

        let (tok, rest) = scan_keyword(",r1").unwrap();
        assert_eq!(tok.as_str(), "");
        assert_eq!(rest, ",r1");
    }

    #[test]
    fn scan_keyword_rejects_overlong_run() {
        let long = "a".repeat(MAX_KEYWORD_LEN + 1);
        assert!(scan_keyword(&long).is_none());
        let exact = "b".repeat(MAX_KEYWORD_LEN);
        assert_eq!(scan_keyword(&exact).unwrap().0.as_str(), exact);
    }
}
