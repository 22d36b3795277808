//! Regression tests for bug fixes.
//!
//! Each test documents a specific bug that was found and fixed, ensuring the
//! fix is never accidentally reverted.

use table_asm::{
    attr, pack_field, EncodeError, EncodeOptions, Engine, Field, IsaDescription, Keyword,
    KeywordTable, OpcodeDef, Resource, GPR_CLASS,
};

static FIELDS: &[Field] = &[
    Field::new("rt", 20, 5, 0, Resource::Gpr),
    Field::new("ra", 15, 5, 0, Resource::Gpr),
    Field::new("x", 0, 4, 0, Resource::Uint),
    Field::new("y", 4, 4, 0, Resource::Uint),
    Field::new("z", 8, 4, 0, Resource::Uint),
];

static GPR: &[Keyword] = &[
    Keyword::new("r1", 1, attr::RDREG),
    Keyword::new("r2", 2, attr::RDREG),
    Keyword::new("r3", 3, attr::RDREG),
];

static KEYWORDS: &[KeywordTable] = &[KeywordTable {
    class: GPR_CLASS,
    entries: GPR,
}];

static OPCODES: &[OpcodeDef] = &[
    OpcodeDef::new("nest", "%x{,%y{,%z}}", 0x1000_0000, 4, attr::ALL),
    OpcodeDef::new("cp", "=rt{,%ra}", 0x2000_0000, 4, attr::ALL),
    OpcodeDef::new("two", "%rt,%ra,%x", 0x3000_0000, 4, attr::ALL),
    OpcodeDef::new("two", "%rt,%ra", 0x3800_0000, 4, attr::ALL),
];

static DESC: IsaDescription = IsaDescription {
    fields: FIELDS,
    keywords: KEYWORDS,
    opcodes: OPCODES,
};

fn engine() -> Engine {
    Engine::new(&DESC, EncodeOptions::default())
}

/// Regression: skipping an outer optional group must skip its nested group
/// too, landing after the matching close brace rather than the first one.
#[test]
fn nested_group_skip_lands_after_matching_brace() {
    let e = engine();
    assert_eq!(e.encode("nest 1").unwrap().insn, 0x1000_0001);
    assert_eq!(e.encode("nest 1,2").unwrap().insn, 0x1000_0021);
    assert_eq!(e.encode("nest 1,2,3").unwrap().insn, 0x1000_0321);
}

/// Regression: registers consumed by a rejected combination must not leak
/// into the def/use masks of the accepted one.
#[test]
fn rejected_variant_does_not_leak_register_masks() {
    let insn = engine().encode("cp r1").unwrap();
    assert_eq!(insn.defs, 1 << 1);
    assert_eq!(insn.uses, 0);

    let insn = engine().encode("cp r1,r2").unwrap();
    assert_eq!(insn.defs, 1 << 1);
    assert_eq!(insn.uses, 1 << 2);
}

/// Regression: a failed overload must not leave bits in the word of the
/// overload that succeeds after it.
#[test]
fn failed_overload_leaves_no_bits_behind() {
    let insn = engine().encode("two r3,r2").unwrap();
    assert_eq!(insn.insn, 0x3800_0000 | (3 << 20) | (2 << 15));
    assert_eq!(insn.uses, (1 << 3) | (1 << 2));
}

/// Regression: a 32-bit two's-complement pattern for a negative value is
/// accepted by a signed field instead of being reported out of range.
#[test]
fn signed_field_accepts_32bit_negative_pattern() {
    let field = Field::new("i5s", 0, 5, 0, Resource::Int);
    assert_eq!(pack_field(&field, 0xffff_fff0), Ok(0x10));
    assert_eq!(pack_field(&field, -16), Ok(0x10));
    assert!(pack_field(&field, 0x1_0000_0000).is_err());
}

/// Regression: packing at the extremes of a 64-bit value must report an
/// error rather than overflow.
#[test]
fn extreme_values_do_not_overflow() {
    let signed = Field::new("i15s", 0, 15, 0, Resource::Int);
    let unsigned = Field::new("u5", 0, 5, 0, Resource::Uint);
    assert!(matches!(
        pack_field(&signed, i64::MAX),
        Err(EncodeError::OutOfRange { .. })
    ));
    assert!(matches!(
        pack_field(&signed, i64::MIN),
        Err(EncodeError::OutOfRange { .. })
    ));
    assert!(matches!(
        pack_field(&unsigned, i64::MIN),
        Err(EncodeError::OutOfRange { .. })
    ));
}

/// Regression: a mnemonic followed by a tab splits like one followed by a
/// space.
#[test]
fn tab_separated_mnemonic() {
    assert_eq!(
        engine().encode("two\tr3,r2,4").unwrap().insn,
        0x3000_0000 | (3 << 20) | (2 << 15) | 4
    );
}

/// Regression: an empty line is an unknown (empty) mnemonic, not a panic.
#[test]
fn empty_line_is_unknown_mnemonic() {
    assert_eq!(
        engine().encode("").unwrap_err(),
        EncodeError::UnknownMnemonic {
            mnemonic: String::new()
        }
    );
}

/// Regression: an overlong keyword is rejected as an unknown operand rather
/// than truncated into a valid register name.
#[test]
fn overlong_keyword_rejected() {
    let line = format!("cp r1{}", "1".repeat(40));
    assert!(engine().encode(&line).is_err());
}
