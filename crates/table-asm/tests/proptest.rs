//! Property-based tests using proptest.
//!
//! Verifies that the encoder never panics on arbitrary input, that packing
//! places exactly the operand bits, and that encoding is deterministic.

use proptest::prelude::*;
use table_asm::{pack_field, EncodeError, Field, Resource};

/// Generate arbitrary single-line input, including malformed operands.
fn arb_line() -> impl Strategy<Value = String> {
    "[a-z0-9.]{0,8}( [a-z0-9$#!+\\-\\[\\](),<>_]{0,40})?"
}

/// Field geometries that fit a 32-bit word.
fn arb_field(signed: bool) -> impl Strategy<Value = Field> {
    (1u8..=20, 0u8..=3).prop_flat_map(move |(width, scale)| {
        (0u8..=(32 - width)).prop_map(move |offset| {
            let resource = if signed { Resource::Int } else { Resource::Uint };
            Field::new("f", offset, width, scale, resource)
        })
    })
}

#[cfg(feature = "nds32")]
fn valid_nds32_line() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "add r0,r1,r2",
        "nop",
        "lwi r0,[r1+8]",
        "lmw.bim r0,[r1],r2,0xf",
        "beqz r1,.L1",
        "push25 r6,8",
        "lwi45.fe r0,-4",
        "movpi45 r1,16",
        "mfsr r1,psw",
        "cctl r1,l1d_va_inval,alevel",
        "sethi r2,hi20(0x12345678)",
        "nop16",
        "ret",
        "trap",
        "break",
    ])
}

proptest! {
    #[test]
    fn unsigned_round_trip(field in arb_field(false), raw in any::<u32>()) {
        let units = i64::from(raw & field.mask());
        let value = units << field.scale;
        let bits = pack_field(&field, value).unwrap();
        prop_assert_eq!(i64::from((bits >> field.offset) & field.mask()), units);
        prop_assert_eq!(bits & !(field.mask() << field.offset), 0);
    }

    #[test]
    fn signed_round_trip(field in arb_field(true), raw in any::<u32>()) {
        let mask = field.mask();
        let sign = 1u32 << (field.width - 1);
        let units = i64::from((raw & mask) ^ sign) - i64::from(sign);
        let value = units << field.scale;
        let bits = pack_field(&field, value).unwrap();
        let back = i64::from(((bits >> field.offset) & mask) ^ sign) - i64::from(sign);
        prop_assert_eq!(back, units);
    }

    #[test]
    fn misaligned_values_rejected(field in arb_field(false), raw in any::<u16>(), low in 1i64..8) {
        prop_assume!(field.scale > 0);
        let low = low & ((1 << field.scale) - 1);
        prop_assume!(low != 0);
        let value = (i64::from(raw) << field.scale) | low;
        let is_misaligned = matches!(
            pack_field(&field, value),
            Err(EncodeError::Misaligned { .. })
        );
        prop_assert!(is_misaligned);
    }

    #[test]
    fn values_past_range_rejected(field in arb_field(false), extra in 0i64..1024) {
        let (_, max) = field.range();
        let value = ((max >> field.scale) + 1 + extra) << field.scale;
        let is_out_of_range = matches!(
            pack_field(&field, value),
            Err(EncodeError::OutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
    }
}

#[cfg(feature = "nds32")]
proptest! {
    #[test]
    fn no_panic_on_arbitrary_input(line in arb_line()) {
        let _ = table_asm::nds32::engine().encode(&line);
    }

    #[test]
    fn valid_lines_always_encode(line in valid_nds32_line()) {
        prop_assert!(table_asm::encode(line).is_ok(), "failed: {}", line);
    }

    #[test]
    fn deterministic(line in valid_nds32_line()) {
        let engine = table_asm::nds32::engine();
        prop_assert_eq!(engine.encode(line), engine.encode(line));
    }
}
