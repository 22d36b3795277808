//! Template matcher.
//!
//! A syntax with `k` optional groups is tried `2^k` times. In variant `v`,
//! bit `n` set means optional group `n` is left out, so for `"a{,b}{,c}"`:
//!
//! ```text
//! 0 (b00): a,b,c
//! 1 (b01): a,c
//! 2 (b10): a,b
//! 3 (b11): a
//! ```

use alloc::string::String;

use crate::error::EncodeError;
use crate::isa::OpcodeDef;
use crate::operand::{Insn, OperandEncoder};
use crate::resolver::Resolve;
use crate::syntax::{Lex, Syntax};

/// Match `text` against every optional-group combination of `syntax`.
///
/// Returns the first accepted variant. When all fail, the error of the
/// last attempt is returned. A fatal error, or one that ends the overload,
/// stops the search at once.
pub(crate) fn match_template<R: Resolve + ?Sized>(
    enc: &OperandEncoder<'_, R>,
    def: &OpcodeDef,
    syntax: &Syntax,
    text: &str,
) -> Result<Insn, EncodeError> {
    let mut last = None;
    for variant in 0..syntax.variants() {
        match try_variant(enc, def, syntax, variant, text) {
            Ok(insn) => return Ok(insn),
            Err(err) if err.is_fatal() || err.ends_overload() => return Err(err),
            Err(err) => {
                tracing::trace!(
                    mnemonic = def.mnemonic,
                    pattern = def.pattern,
                    variant,
                    error = %err,
                    "variant rejected"
                );
                last = Some(err);
            }
        }
    }
    Err(last.unwrap_or_else(|| mismatch(def, text)))
}

fn try_variant<R: Resolve + ?Sized>(
    enc: &OperandEncoder<'_, R>,
    def: &OpcodeDef,
    syntax: &Syntax,
    variant: u32,
    text: &str,
) -> Result<Insn, EncodeError> {
    let mut insn = Insn {
        mnemonic: def.mnemonic,
        word: def.value,
        defs: def.defs,
        uses: def.uses,
        attr: def.attr,
        fixup: None,
    };

    let lexes = syntax.lexes();
    let mut rest = text;
    let mut i = 0;
    while let Some(lex) = lexes.get(i) {
        match *lex {
            Lex::Char(c) => {
                rest = rest.strip_prefix(c).ok_or_else(|| mismatch(def, rest))?;
            }
            Lex::Field { field, access } => {
                let field = enc.registry.field(field);
                rest = enc.encode_field(&mut insn, field, access, rest)?;
            }
            Lex::OptStart { group, end } => {
                if variant & (1 << group) != 0 {
                    i = end;
                }
            }
            Lex::OptEnd => {}
        }
        i += 1;
    }

    if rest.is_empty() || rest.starts_with(['!', '#']) {
        Ok(insn)
    } else {
        Err(mismatch(def, rest))
    }
}

fn mismatch(def: &OpcodeDef, at: &str) -> EncodeError {
    EncodeError::SyntaxMismatch {
        mnemonic: String::from(def.mnemonic),
        detail: String::from(at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::{attr, Field, IsaDescription, Keyword, KeywordTable, Resource, GPR_CLASS};
    use crate::registry::Registry;
    use crate::resolver::Literals;

    static FIELDS: &[Field] = &[
        Field::new("a", 0, 4, 0, Resource::Uint),
        Field::new("b", 4, 4, 0, Resource::Uint),
        Field::new("c", 8, 4, 0, Resource::Uint),
        Field::new("rt", 20, 5, 0, Resource::Gpr),
    ];
    static KEYWORDS: &[KeywordTable] = &[KeywordTable {
        class: GPR_CLASS,
        entries: &[Keyword::new("r1", 1, 0)],
    }];
    static DESC: IsaDescription = IsaDescription {
        fields: FIELDS,
        keywords: KEYWORDS,
        opcodes: &[],
    };

    fn run(pattern: &'static str, text: &str) -> Result<Insn, EncodeError> {
        let registry = Registry::new(&DESC, attr::ALL, attr::EXT_MASK);
        let resolver = Literals::new();
        let enc = OperandEncoder {
            registry: &registry,
            resolver: &resolver,
            reduced_registers: false,
        };
        let def = OpcodeDef::new("op", pattern, 0xf000_0000, 4, 0);
        let syntax = Syntax::compile(pattern, &registry);
        match_template(&enc, &def, &syntax, text)
    }

    #[test]
    fn all_optional_present() {
        let insn = run("%a{,%b}{,%c}", "1,2,3").unwrap();
        assert_eq!(insn.word, 0xf000_0321);
    }

    #[test]
    fn none_present() {
        let insn = run("%a{,%b}{,%c}", "1").unwrap();
        assert_eq!(insn.word, 0xf000_0001);
    }

    #[test]
    fn single_optional_binds_last_group_first() {
        // Variant 1 (b01: a,c) is tried before variant 2 (b10: a,b).
        let insn = run("%a{,%b}{,%c}", "1,5").unwrap();
        assert_eq!(insn.word, 0xf000_0501);
    }

    #[test]
    fn terminators_accepted() {
        assert!(run("%a", "1!").is_ok());
        assert!(run("%a", "1# comment").is_ok());
        assert!(matches!(
            run("%a", "1 x"),
            Err(EncodeError::SyntaxMismatch { .. })
        ));
    }

    #[test]
    fn last_failure_is_reported() {
        // Variant 0 fails on range, variant 1 (no optional) on trailing text.
        let err = run("%a{,%b}", "1,99").unwrap_err();
        assert_eq!(
            err,
            EncodeError::SyntaxMismatch {
                mnemonic: "op".into(),
                detail: ",99".into()
            }
        );
    }

    #[test]
    fn illegal_expression_ends_overload() {
        let err = run("%a{,%b}", "1,*").unwrap_err();
        assert!(matches!(err, EncodeError::IllegalExpression { .. }));
    }

    #[test]
    fn def_use_reset_between_variants() {
        let insn = run("=rt{,%a}", "r1").unwrap();
        assert_eq!(insn.defs, 1 << 1);
        assert_eq!(insn.uses, 0);
    }
}
