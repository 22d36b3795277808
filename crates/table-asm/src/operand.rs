//! Operand encoder: parses one operand for one field and packs it.
//!
//! ```text
//! input ──► keyword / expression / hook ──► value ──► align + range ──► insn |= bits
//! ```

use alloc::string::String;

use crate::error::EncodeError;
use crate::isa::{attr, Field, ParseHook, Resource, GPR_CLASS};
use crate::registry::{scan_keyword, Registry};
use crate::resolver::{Resolve, Resolved};
use crate::syntax::Access;

/// Accumulator for one encode attempt.
#[derive(Debug, Clone)]
pub(crate) struct Insn {
    /// Mnemonic of the opcode being tried, for diagnostics.
    pub mnemonic: &'static str,
    /// Instruction word under construction.
    pub word: u32,
    /// Registers written.
    pub defs: u32,
    /// Registers read.
    pub uses: u32,
    /// Opcode attributes plus relocation-modifier bits.
    pub attr: u32,
    /// Field left unpacked because its operand is symbolic.
    pub fixup: Option<Field>,
}

/// Relocation modifiers recognised in front of an integer operand.
const MODIFIERS: [(&str, u32); 3] = [
    ("hi20(", attr::HI20),
    ("lo12(", attr::LO12),
    ("lo20(", attr::LO20),
];

/// Value reported when a biased field's operand is not a constant.
pub(crate) const UNRESOLVED: i64 = 1 << 32;

/// Parses operands against field descriptors.
pub(crate) struct OperandEncoder<'e, R: ?Sized> {
    pub registry: &'e Registry,
    pub resolver: &'e R,
    pub reduced_registers: bool,
}

impl<R: Resolve + ?Sized> OperandEncoder<'_, R> {
    /// Parse the operand for `field` at the start of `input`, pack it into
    /// `insn` and return the remaining input.
    pub fn encode_field<'a>(
        &self,
        insn: &mut Insn,
        field: &Field,
        access: Access,
        input: &'a str,
    ) -> Result<&'a str, EncodeError> {
        let (value, rest) = match field.hook {
            Some(hook) => self.parse_hooked(field, hook, input)?,
            None => match field.resource {
                Resource::Gpr | Resource::Keyword(_) => {
                    let (value, rest) = self.parse_keyword(insn, field, access, input)?;
                    (Some(value), rest)
                }
                Resource::Int | Resource::Uint => self.parse_integer(insn, field, input)?,
            },
        };

        if let Some(value) = value {
            insn.word |= pack_field(field, value)?;
        }
        Ok(rest)
    }

    fn parse_keyword<'a>(
        &self,
        insn: &mut Insn,
        field: &Field,
        access: Access,
        input: &'a str,
    ) -> Result<(i64, &'a str), EncodeError> {
        let class = field.resource.keyword_class().unwrap_or(GPR_CLASS);
        let (token, rest) = scan_keyword(input).ok_or_else(|| unknown_operand(input))?;
        let keyword = self
            .registry
            .resolve_keyword(class, token.as_str())
            .ok_or_else(|| unknown_operand(input))?;

        let mut value = keyword.value;
        if field.resource == Resource::Gpr {
            if self.reduced_registers && keyword.attr & attr::RDREG == 0 {
                return Err(EncodeError::ReducedRegister {
                    register: String::from(token.as_str()),
                });
            }
            if let Some(bit) = register_bit(value) {
                if access.is_use() {
                    insn.uses |= bit;
                }
                if access.is_def() {
                    insn.defs |= bit;
                }
            }
        }

        if field.compact {
            value = compact_register(value).ok_or_else(|| EncodeError::OutOfRange {
                field: String::from(field.name),
                value,
            })?;
        }
        Ok((value, rest))
    }

    fn parse_integer<'a>(
        &self,
        insn: &mut Insn,
        field: &Field,
        input: &'a str,
    ) -> Result<(Option<i64>, &'a str), EncodeError> {
        let text = input.strip_prefix('#').unwrap_or(input);
        let (modifier, text) = strip_modifier(text);

        let (value, rest) = match self.resolver.resolve(text) {
            Resolved::Illegal => {
                return Err(EncodeError::IllegalExpression {
                    text: operand_text(text),
                })
            }
            Resolved::Symbol(rest) => {
                insn.fixup = Some(*field);
                (None, rest)
            }
            Resolved::Constant(value, rest) => {
                let value = match modifier {
                    attr::HI20 => (value >> 12) & 0xfffff,
                    attr::LO12 => value & 0xfff,
                    attr::LO20 => value & 0xfffff,
                    _ => value,
                };
                (Some(value), rest)
            }
        };

        if modifier == 0 {
            return Ok((value, rest));
        }
        let rest = rest
            .strip_prefix(')')
            .ok_or_else(|| EncodeError::SyntaxMismatch {
                mnemonic: String::from(insn.mnemonic),
                detail: String::from(rest),
            })?;
        insn.attr |= modifier;
        Ok((value, rest))
    }

    fn parse_hooked<'a>(
        &self,
        field: &Field,
        hook: ParseHook,
        input: &'a str,
    ) -> Result<(Option<i64>, &'a str), EncodeError> {
        match hook {
            ParseHook::PushPopRegister => {
                let (token, rest) = scan_keyword(input).ok_or_else(|| unknown_operand(input))?;
                let reg = self
                    .registry
                    .resolve_keyword(GPR_CLASS, token.as_str())
                    .ok_or_else(|| unknown_operand(input))?;
                let code = match reg.value {
                    6 => 0,
                    8 => 1,
                    10 => 2,
                    14 => 3,
                    _ => return Err(unknown_operand(input)),
                };
                Ok((Some(code), rest))
            }
            ParseHook::Bias(bias) => {
                let text = input.strip_prefix('#').unwrap_or(input);
                match self.resolver.resolve(text) {
                    Resolved::Constant(value, rest) => {
                        let value = value.checked_add(bias).ok_or_else(|| {
                            EncodeError::OutOfRange {
                                field: String::from(field.name),
                                value,
                            }
                        })?;
                        Ok((Some(value), rest))
                    }
                    // Biased fields take constants only.
                    Resolved::Symbol(_) | Resolved::Illegal => Err(EncodeError::OutOfRange {
                        field: String::from(field.name),
                        value: UNRESOLVED,
                    }),
                }
            }
        }
    }
}

/// Validate `value` against `field` and return its bits in position.
///
/// The value is in operand units: a field with `scale = 2` takes byte
/// offsets that must be multiples of 4.
pub fn pack_field(field: &Field, value: i64) -> Result<u32, EncodeError> {
    let scale = u32::from(field.scale);
    let bits = u32::from(field.width) + scale;

    if value & ((1i64 << scale) - 1) != 0 {
        return Err(EncodeError::Misaligned {
            field: String::from(field.name),
            value,
            align: 1 << scale,
        });
    }

    let out_of_range = || EncodeError::OutOfRange {
        field: String::from(field.name),
        value,
    };

    let mut value = value;
    if field.resource.is_signed() {
        // A 32-bit two's-complement pattern such as 0xffff_fff0 means -16.
        if value >> 32 == 0 && value & 0x8000_0000 != 0 {
            value |= -1i64 << 31;
        }
        let biased = value
            .checked_add(1i64 << (bits - 1))
            .ok_or_else(out_of_range)?;
        if biased >> bits != 0 {
            return Err(out_of_range());
        }
    } else if value >> bits != 0 {
        return Err(out_of_range());
    }

    let encoded = ((value >> scale) as u32) & field.mask();
    Ok(encoded << field.offset)
}

/// Map a register number onto the 4-bit compact register file:
/// r0–r11 keep their number, r16–r19 become 12–15.
pub fn compact_register(reg: i64) -> Option<i64> {
    match reg {
        0..=11 => Some(reg),
        16..=19 => Some(reg - 4),
        _ => None,
    }
}

#[inline]
fn register_bit(reg: i64) -> Option<u32> {
    u32::try_from(reg).ok().and_then(|r| 1u32.checked_shl(r))
}

/// Detect a case-insensitive relocation modifier prefix.
fn strip_modifier(text: &str) -> (u32, &str) {
    for (prefix, bit) in MODIFIERS {
        if let Some(head) = text.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                return (bit, &text[prefix.len()..]);
            }
        }
    }
    (0, text)
}

/// The operand as written, up to the next separator.
fn operand_text(input: &str) -> String {
    let end = input
        .find(|c: char| matches!(c, ',' | ' ' | '\t' | ']' | ')' | '!' | '#'))
        .unwrap_or(input.len());
    String::from(&input[..end])
}

fn unknown_operand(input: &str) -> EncodeError {
    EncodeError::UnknownOperand {
        operand: operand_text(input.strip_prefix('$').unwrap_or(input)),
    }
}
