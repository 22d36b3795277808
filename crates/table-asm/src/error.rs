//! Error types reported by an encode attempt.

use alloc::string::String;
use core::fmt;

/// Why a line of assembly could not be encoded.
///
/// When every overload and every optional-operand combination fails, the
/// engine reports the failure of the *last* attempt, which is not always the
/// most relevant one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodeError {
    /// No opcode entry carries this mnemonic, even after stripping a dotted
    /// suffix.
    UnknownMnemonic {
        /// The mnemonic as written.
        mnemonic: String,
    },

    /// The mnemonic exists but the operand text does not fit its syntax.
    SyntaxMismatch {
        /// The mnemonic that was looked up.
        mnemonic: String,
        /// Remaining operand text where matching stopped.
        detail: String,
    },

    /// An operand is in the right position but is not a known keyword.
    UnknownOperand {
        /// The offending operand text.
        operand: String,
    },

    /// A register outside the reduced register set was used while the
    /// engine is configured for reduced registers.
    ReducedRegister {
        /// The register as written.
        register: String,
    },

    /// A value does not fit the field it is encoded into.
    OutOfRange {
        /// Name of the field.
        field: String,
        /// The rejected value.
        value: i64,
    },

    /// A value has nonzero bits below the field's implicit shift.
    Misaligned {
        /// Name of the field.
        field: String,
        /// The rejected value.
        value: i64,
        /// Required alignment in operand units.
        align: u32,
    },

    /// The resolver rejected the expression outright.
    IllegalExpression {
        /// The expression text handed to the resolver.
        text: String,
    },
}

impl EncodeError {
    /// Whether this error ends the whole encode call instead of moving on to
    /// the next optional-operand combination or overload.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EncodeError::UnknownMnemonic { .. })
    }

    /// Whether this error ends the current overload's remaining
    /// optional-operand combinations. The next overload is still tried.
    pub fn ends_overload(&self) -> bool {
        matches!(self, EncodeError::IllegalExpression { .. })
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UnknownMnemonic { mnemonic } => {
                write!(f, "unknown mnemonic '{}'", mnemonic)
            }
            EncodeError::SyntaxMismatch { mnemonic, detail } => {
                if detail.is_empty() {
                    write!(f, "syntax error: operands of '{}' do not match", mnemonic)
                } else {
                    write!(
                        f,
                        "syntax error: operands of '{}' do not match at '{}'",
                        mnemonic, detail
                    )
                }
            }
            EncodeError::UnknownOperand { operand } => {
                write!(f, "unknown operand '{}'", operand)
            }
            EncodeError::ReducedRegister { register } => {
                write!(
                    f,
                    "register '{}' is not available in reduced-register mode",
                    register
                )
            }
            EncodeError::OutOfRange { field, value } => {
                write!(f, "value {} out of range for field '{}'", value, field)
            }
            EncodeError::Misaligned {
                field,
                value,
                align,
            } => {
                write!(
                    f,
                    "value {} for field '{}' is not a multiple of {}",
                    value, field, align
                )
            }
            EncodeError::IllegalExpression { text } => {
                write!(f, "illegal expression '{}'", text)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn unknown_mnemonic_display() {
        let err = EncodeError::UnknownMnemonic {
            mnemonic: "foo.bar".into(),
        };
        assert_eq!(format!("{}", err), "unknown mnemonic 'foo.bar'");
    }

    #[test]
    fn syntax_mismatch_display() {
        let err = EncodeError::SyntaxMismatch {
            mnemonic: "add".into(),
            detail: String::new(),
        };
        assert_eq!(
            format!("{}", err),
            "syntax error: operands of 'add' do not match"
        );

        let err = EncodeError::SyntaxMismatch {
            mnemonic: "add".into(),
            detail: "]".into(),
        };
        assert_eq!(
            format!("{}", err),
            "syntax error: operands of 'add' do not match at ']'"
        );
    }

    #[test]
    fn out_of_range_display() {
        let err = EncodeError::OutOfRange {
            field: "i15s".into(),
            value: 40000,
        };
        assert_eq!(
            format!("{}", err),
            "value 40000 out of range for field 'i15s'"
        );
    }

    #[test]
    fn misaligned_display() {
        let err = EncodeError::Misaligned {
            field: "i15s2".into(),
            value: 6,
            align: 4,
        };
        assert_eq!(
            format!("{}", err),
            "value 6 for field 'i15s2' is not a multiple of 4"
        );
    }

    #[test]
    fn reduced_register_display() {
        let err = EncodeError::ReducedRegister {
            register: "r16".into(),
        };
        assert_eq!(
            format!("{}", err),
            "register 'r16' is not available in reduced-register mode"
        );
    }

    #[test]
    fn fatal_errors() {
        let illegal = EncodeError::IllegalExpression { text: "1+".into() };
        assert!(!illegal.is_fatal());
        assert!(illegal.ends_overload());
        assert!(EncodeError::UnknownMnemonic {
            mnemonic: "x".into()
        }
        .is_fatal());
        assert!(!EncodeError::UnknownOperand {
            operand: "r99".into()
        }
        .is_fatal());
    }
}
