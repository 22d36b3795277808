//! Encode orchestrator: the public [`Engine`].
//!
//! ```text
//! line ──► split mnemonic ──► overload list ──► matcher ──► EncodedInsn
//!               │ not found, dotted?
//!               └─► retry "base" with "suffix operands"
//! ```

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::EncodeError;
use crate::isa::{attr, Field, IsaDescription, OpcodeDef};
use crate::matcher::match_template;
use crate::operand::{Insn, OperandEncoder};
use crate::registry::Registry;
use crate::resolver::{Literals, Resolve};
use crate::symtab::MultiTable;
use crate::syntax::Syntax;

/// Engine configuration, fixed at construction.
///
/// # Examples
///
/// ```rust
/// use table_asm::{attr, EncodeOptions};
///
/// let opts = EncodeOptions::default()
///     .reduced_registers(true)
///     .isa(attr::V3M);
/// assert!(opts.reduced_registers);
/// assert_eq!(opts.extensions, attr::EXT_MASK);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeOptions {
    /// Reject general-purpose registers outside the reduced register set.
    /// Default: `false`.
    pub reduced_registers: bool,
    /// Selected ISA variant bits ([`attr::V1`] .. [`attr::V3M`]).
    /// Default: all variants.
    pub isa: u32,
    /// Enabled extension bits ([`attr::PERF_EXT`] .. [`attr::IFC_EXT`]).
    /// Default: all extensions.
    pub extensions: u32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            reduced_registers: false,
            isa: attr::ALL,
            extensions: attr::EXT_MASK,
        }
    }
}

impl EncodeOptions {
    /// Restrict general-purpose registers to the reduced set.
    pub fn reduced_registers(mut self, on: bool) -> Self {
        self.reduced_registers = on;
        self
    }

    /// Select the ISA variant bits.
    pub fn isa(mut self, isa: u32) -> Self {
        self.isa = isa;
        self
    }

    /// Select the enabled extension bits.
    pub fn extensions(mut self, extensions: u32) -> Self {
        self.extensions = extensions;
        self
    }
}

/// A successfully encoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[must_use]
pub struct EncodedInsn {
    /// Mnemonic of the opcode entry that matched.
    pub mnemonic: &'static str,
    /// Encoded bits. A 16-bit instruction occupies the low half.
    pub insn: u32,
    /// Encoded size in bytes.
    pub size: u8,
    /// Registers written, one bit per register number.
    pub defs: u32,
    /// Registers read, one bit per register number.
    pub uses: u32,
    /// Opcode attributes plus any relocation-modifier bits.
    pub attr: u32,
    /// Field left unpacked because its operand was symbolic.
    pub fixup: Option<Field>,
}

impl EncodedInsn {
    fn from_insn(size: u8, insn: Insn) -> Self {
        Self {
            mnemonic: insn.mnemonic,
            insn: insn.word,
            size,
            defs: insn.defs,
            uses: insn.uses,
            attr: insn.attr,
            fixup: insn.fixup,
        }
    }

    /// Big-endian byte image, exactly `size` bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "nds32")] {
    /// let nop = table_asm::encode("nop16").unwrap();
    /// assert_eq!(nop.to_be_bytes(), vec![0x92, 0x00]);
    /// # }
    /// ```
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let bytes = self.insn.to_be_bytes();
        let size = usize::from(self.size).min(bytes.len());
        bytes[bytes.len() - size..].to_vec()
    }

    /// Whether this is a 16-bit compact instruction.
    pub fn is_16bit(&self) -> bool {
        self.size == 2
    }

    /// Whether a symbolic operand left a field for the caller to patch.
    pub fn needs_fixup(&self) -> bool {
        self.fixup.is_some()
    }
}

/// One opcode entry with its compiled syntax.
#[derive(Debug, Clone)]
pub struct Opcode {
    def: OpcodeDef,
    syntax: Option<Syntax>,
}

impl Opcode {
    fn new(def: OpcodeDef) -> Self {
        Self { def, syntax: None }
    }

    /// The static description.
    pub fn def(&self) -> &OpcodeDef {
        &self.def
    }

    /// The compiled syntax, if built.
    pub fn syntax(&self) -> Option<&Syntax> {
        self.syntax.as_ref()
    }

    /// Compile the syntax; a second call returns the cached one untouched.
    pub fn build_syntax(&mut self, registry: &Registry) -> &Syntax {
        let pattern = self.def.pattern;
        self.syntax
            .get_or_insert_with(|| Syntax::compile(pattern, registry))
    }
}

/// A table-driven instruction encoder for one instruction set.
///
/// Built once from an [`IsaDescription`]; encoding borrows the engine
/// immutably, so one engine can serve many threads.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "nds32")] {
/// use table_asm::{nds32, EncodeOptions, Engine};
///
/// let engine = Engine::new(&nds32::DESCRIPTION, EncodeOptions::default());
/// let add = engine.encode("add r0,r1,r2").unwrap();
/// assert_eq!(add.insn, 0x4000_8800);
/// assert_eq!(add.defs, 1 << 0);
/// assert_eq!(add.uses, (1 << 1) | (1 << 2));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Engine<R = Literals> {
    registry: Registry,
    opcodes: Vec<Opcode>,
    mnemonics: MultiTable,
    options: EncodeOptions,
    resolver: R,
}

impl Engine<Literals> {
    /// Build an engine that resolves plain integer literals and treats
    /// identifiers as symbols.
    ///
    /// # Panics
    ///
    /// Panics if the description is inconsistent: duplicate field or
    /// keyword names, a field referring to a missing keyword class, or a
    /// syntax pattern with an unknown field or malformed optional groups.
    pub fn new(desc: &IsaDescription, options: EncodeOptions) -> Self {
        Self::with_resolver(desc, options, Literals::new())
    }
}

impl<R: Resolve> Engine<R> {
    /// Build an engine with a caller-supplied expression resolver.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Engine::new`].
    pub fn with_resolver(desc: &IsaDescription, options: EncodeOptions, resolver: R) -> Self {
        let registry = Registry::new(desc, options.isa, options.extensions);

        let mut opcodes = Vec::with_capacity(desc.opcodes.len());
        let mut mnemonics = MultiTable::new();
        for def in desc.opcodes {
            if !attr::applicable(def.attr, options.isa, options.extensions) {
                continue;
            }
            let mut opcode = Opcode::new(*def);
            opcode.build_syntax(&registry);
            mnemonics.insert(def.mnemonic, opcodes.len());
            opcodes.push(opcode);
        }

        tracing::debug!(
            fields = registry.field_count(),
            keyword_classes = registry.class_count(),
            opcodes = opcodes.len(),
            hidden = desc.opcodes.len() - opcodes.len(),
            mnemonics = mnemonics.len(),
            reduced = options.reduced_registers,
            "encoder engine built"
        );

        Self {
            registry,
            opcodes,
            mnemonics,
            options,
            resolver,
        }
    }

    /// The options the engine was built with.
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// The field and keyword registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The expression resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Whether `name` is a visible mnemonic (exact match, no suffix retry).
    pub fn is_mnemonic(&self, name: &str) -> bool {
        self.mnemonics.get(name).is_some()
    }

    /// Visible overloads of `mnemonic`, in table order.
    pub fn opcodes<'s>(&'s self, mnemonic: &str) -> impl Iterator<Item = &'s Opcode> + 's {
        self.mnemonics
            .get(mnemonic)
            .unwrap_or(&[])
            .iter()
            .map(move |&i| &self.opcodes[i])
    }

    /// Encode one line of assembly.
    ///
    /// The mnemonic ends at the first space or tab. Operands may be
    /// followed by `!` or `#` and anything after it.
    ///
    /// # Errors
    ///
    /// [`EncodeError::UnknownMnemonic`] if no entry carries the mnemonic;
    /// otherwise the failure of the last overload and operand combination
    /// attempted. An [`EncodeError::IllegalExpression`] skips the rest of its
    /// overload's combinations but not later overloads.
    pub fn encode(&self, line: &str) -> Result<EncodedInsn, EncodeError> {
        let (mnemonic, operands) = split_mnemonic(line);

        let (overloads, text) = match self.mnemonics.get(mnemonic) {
            Some(list) => (list, Cow::Borrowed(operands.unwrap_or(""))),
            None => {
                let retry = mnemonic
                    .split_once('.')
                    .and_then(|(base, suffix)| Some((self.mnemonics.get(base)?, suffix)));
                let Some((list, suffix)) = retry else {
                    return Err(EncodeError::UnknownMnemonic {
                        mnemonic: String::from(mnemonic),
                    });
                };
                tracing::trace!(mnemonic, suffix, "retrying without dotted suffix");
                let text = match operands {
                    Some(operands) => format!("{suffix} {operands}"),
                    None => String::from(suffix),
                };
                (list, Cow::Owned(text))
            }
        };

        let enc = OperandEncoder {
            registry: &self.registry,
            resolver: &self.resolver,
            reduced_registers: self.options.reduced_registers,
        };

        let mut last = None;
        for &index in overloads {
            let opcode = &self.opcodes[index];
            let compiled;
            let syntax = match &opcode.syntax {
                Some(syntax) => syntax,
                None => {
                    compiled = Syntax::compile(opcode.def.pattern, &self.registry);
                    &compiled
                }
            };
            match match_template(&enc, &opcode.def, syntax, &text) {
                Ok(insn) => return Ok(EncodedInsn::from_insn(opcode.def.size, insn)),
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => last = Some(err),
            }
        }

        Err(last.unwrap_or_else(|| EncodeError::SyntaxMismatch {
            mnemonic: String::from(mnemonic),
            detail: text.into_owned(),
        }))
    }

    /// Encode newline-separated lines, skipping blank ones. Each line is
    /// trimmed before encoding.
    ///
    /// # Errors
    ///
    /// Stops at the first line that fails and returns its error.
    pub fn encode_many(&self, text: &str) -> Result<Vec<EncodedInsn>, EncodeError> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| self.encode(line))
            .collect()
    }
}

/// Split at the first space or tab. The operand text is everything after
/// that one separator.
fn split_mnemonic(line: &str) -> (&str, Option<&str>) {
    match line.find([' ', '\t']) {
        Some(at) => (&line[..at], Some(&line[at + 1..])),
        None => (line, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::{Keyword, KeywordTable, Resource, GPR_CLASS};

    static FIELDS: &[Field] = &[
        Field::new("rt", 20, 5, 0, Resource::Gpr),
        Field::new("ra", 15, 5, 0, Resource::Gpr),
        Field::new("rb", 10, 5, 0, Resource::Gpr),
        Field::new("abdim", 2, 3, 0, Resource::Keyword("abdim")),
        Field::new("i15s", 0, 15, 0, Resource::Int),
    ];
    static GPR: &[Keyword] = &[
        Keyword::new("r1", 1, attr::RDREG),
        Keyword::new("r2", 2, attr::RDREG),
        Keyword::new("r3", 3, attr::RDREG),
        Keyword::new("r20", 20, 0),
    ];
    static ABDIM: &[Keyword] = &[Keyword::new("bi", 0, 0), Keyword::new("adm", 7, 0)];
    static KEYWORDS: &[KeywordTable] = &[
        KeywordTable {
            class: GPR_CLASS,
            entries: GPR,
        },
        KeywordTable {
            class: "abdim",
            entries: ABDIM,
        },
    ];
    static OPCODES: &[OpcodeDef] = &[
        OpcodeDef::new("add", "=rt,%ra,%rb", 0, 4, 0),
        OpcodeDef::new("addi", "=rt,%ra,%i15s", 0x5000_0000, 4, 0),
        OpcodeDef::new("lmw", "%abdim %rt,[%ra],%rb", 0x3a00_0000, 4, 0),
        OpcodeDef::new("v3only", "%rt", 0x1000_0000, 4, attr::V3),
        OpcodeDef::new("mac", "%rt", 0x2000_0000, 4, attr::MAC),
        OpcodeDef::new("mov", "=rt,%ra", 0x0100_0000, 4, 0),
        OpcodeDef::new("mov", "=rt,%i15s", 0x0200_0000, 4, 0),
    ];
    static DESC: IsaDescription = IsaDescription {
        fields: FIELDS,
        keywords: KEYWORDS,
        opcodes: OPCODES,
    };

    fn engine() -> Engine {
        Engine::new(&DESC, EncodeOptions::default())
    }

    #[test]
    fn split_at_first_blank() {
        assert_eq!(split_mnemonic("add r1,r2"), ("add", Some("r1,r2")));
        assert_eq!(split_mnemonic("nop"), ("nop", None));
        assert_eq!(split_mnemonic("ret\tlp"), ("ret", Some("lp")));
        assert_eq!(split_mnemonic("add  r1"), ("add", Some(" r1")));
    }

    #[test]
    fn encode_three_registers() {
        let insn = engine().encode("add r1,r2,r3").unwrap();
        assert_eq!(insn.insn, (1 << 20) | (2 << 15) | (3 << 10));
        assert_eq!(insn.defs, 1 << 1);
        assert_eq!(insn.uses, (1 << 2) | (1 << 3));
        assert_eq!(insn.size, 4);
        assert_eq!(insn.mnemonic, "add");
    }

    #[test]
    fn missing_operand_is_syntax_mismatch() {
        let err = engine().encode("add r1,r2").unwrap_err();
        assert!(matches!(err, EncodeError::SyntaxMismatch { .. }));
    }

    #[test]
    fn unknown_mnemonic() {
        let err = engine().encode("frob r1").unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnknownMnemonic {
                mnemonic: "frob".into()
            }
        );
        let err = engine().encode("frob.x r1").unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnknownMnemonic {
                mnemonic: "frob.x".into()
            }
        );
    }

    #[test]
    fn dotted_suffix_retry() {
        let insn = engine().encode("lmw.adm r1,[r2],r3").unwrap();
        assert_eq!(insn.mnemonic, "lmw");
        assert_eq!(
            insn.insn,
            0x3a00_0000 | (7 << 2) | (1 << 20) | (2 << 15) | (3 << 10)
        );
    }

    #[test]
    fn overloads_tried_in_order() {
        let e = engine();
        assert_eq!(e.encode("mov r1,r2").unwrap().insn, 0x0100_0000 | (1 << 20) | (2 << 15));
        assert_eq!(e.encode("mov r1,42").unwrap().insn, 0x0200_0000 | (1 << 20) | 42);
        assert_eq!(e.opcodes("mov").count(), 2);
    }

    #[test]
    fn last_overload_error_surfaces() {
        // First overload fails on the register lookup, second on range.
        let err = engine().encode("mov r1,99999").unwrap_err();
        assert_eq!(
            err,
            EncodeError::OutOfRange {
                field: "i15s".into(),
                value: 99999
            }
        );
    }

    #[test]
    fn isa_and_extension_visibility() {
        let v2 = Engine::new(&DESC, EncodeOptions::default().isa(attr::V2));
        assert!(!v2.is_mnemonic("v3only"));
        assert!(matches!(
            v2.encode("v3only r1"),
            Err(EncodeError::UnknownMnemonic { .. })
        ));
        assert!(engine().is_mnemonic("v3only"));

        let no_mac = Engine::new(&DESC, EncodeOptions::default().extensions(0));
        assert!(!no_mac.is_mnemonic("mac"));
        assert!(no_mac.is_mnemonic("add"));
    }

    #[test]
    fn reduced_registers() {
        let reduced = Engine::new(&DESC, EncodeOptions::default().reduced_registers(true));
        assert_eq!(
            reduced.encode("add r20,r1,r2").unwrap_err(),
            EncodeError::ReducedRegister {
                register: "r20".into()
            }
        );
        assert!(engine().encode("add r20,r1,r2").is_ok());
    }

    #[test]
    fn syntax_compiled_eagerly_and_idempotent() {
        let mut e = engine();
        let before = e.opcodes("add").next().unwrap().syntax().cloned();
        assert!(before.is_some());
        let registry = e.registry.clone();
        let again = e.opcodes[0].build_syntax(&registry).clone();
        assert_eq!(before, Some(again));
    }

    #[test]
    fn encode_many_lines() {
        let out = engine()
            .encode_many("add r1,r2,r3\n\n  addi r1,r1,-1  \n")
            .unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].insn & 0x7fff, 0x7fff);

        let err = engine().encode_many("add r1,r2,r3\nbogus").unwrap_err();
        assert!(matches!(err, EncodeError::UnknownMnemonic { .. }));
    }

    #[test]
    fn byte_image() {
        let wide = EncodedInsn {
            mnemonic: "x",
            insn: 0x1234_5678,
            size: 4,
            defs: 0,
            uses: 0,
            attr: 0,
            fixup: None,
        };
        assert_eq!(wide.to_be_bytes(), [0x12, 0x34, 0x56, 0x78]);
        assert!(!wide.is_16bit());
        let narrow = EncodedInsn {
            insn: 0x9200,
            size: 2,
            ..wide
        };
        assert_eq!(narrow.to_be_bytes(), [0x92, 0x00]);
        assert!(narrow.is_16bit());
    }
}
