//! Serde tests for `table_asm` public types.
//!
//! Options and errors round-trip through JSON; encoded instructions
//! serialize to the expected shape.

#![cfg(feature = "serde")]

use table_asm::{attr, EncodeError, EncodeOptions};

/// Helper: serialize to JSON, deserialize back, assert equality.
fn round_trip<T>(val: &T)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + core::fmt::Debug,
{
    let json = serde_json::to_string(val).expect("serialize");
    let back: T = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(val, &back, "round-trip mismatch for JSON: {json}");
}

// ─── EncodeOptions ──────────────────────────────────────────────────────────

#[test]
fn serde_options() {
    round_trip(&EncodeOptions::default());
    round_trip(
        &EncodeOptions::default()
            .reduced_registers(true)
            .isa(attr::V3M)
            .extensions(attr::PERF_EXT | attr::FPU),
    );
}

// ─── EncodeError ────────────────────────────────────────────────────────────

#[test]
fn serde_errors() {
    for err in [
        EncodeError::UnknownMnemonic {
            mnemonic: "frob".into(),
        },
        EncodeError::SyntaxMismatch {
            mnemonic: "add".into(),
            detail: ",r9".into(),
        },
        EncodeError::UnknownOperand {
            operand: "r99".into(),
        },
        EncodeError::ReducedRegister {
            register: "r20".into(),
        },
        EncodeError::OutOfRange {
            field: "i15s".into(),
            value: 99999,
        },
        EncodeError::Misaligned {
            field: "i15s2".into(),
            value: 6,
            align: 4,
        },
        EncodeError::IllegalExpression { text: "*".into() },
    ] {
        round_trip(&err);
    }
}

// ─── EncodedInsn ────────────────────────────────────────────────────────────

#[cfg(feature = "nds32")]
#[test]
fn serde_encoded_insn() {
    let insn = table_asm::encode("add r0,r1,r2").unwrap();
    let json = serde_json::to_value(insn).unwrap();
    assert_eq!(json["mnemonic"], "add");
    assert_eq!(json["insn"], 0x4000_8800u32);
    assert_eq!(json["size"], 4);
    assert_eq!(json["defs"], 1);
    assert_eq!(json["uses"], 6);
    assert!(json["fixup"].is_null());
}

#[cfg(feature = "nds32")]
#[test]
fn serde_fixup_field() {
    let insn = table_asm::encode("j target").unwrap();
    let json = serde_json::to_value(insn).unwrap();
    assert_eq!(json["fixup"]["name"], "i24s1");
    assert_eq!(json["fixup"]["scale"], 1);
}
