//! Instruction-set description: the static tables an [`Engine`](crate::Engine)
//! is built from.
//!
//! A description is three lists (operand fields, keyword tables and opcode
//! templates) mirroring the layout of a hand-written assembler table:
//!
//! ```text
//! Field:    name   offset width scale resource        hook
//!           "rt"   20     5     0     Gpr             -
//!           "i8s1" 0      8     1     Int             -
//!
//! Opcode:   mnemonic  pattern          value       size attr
//!           "add"     "=rt,%ra,%rb"    0x40000000  4    ALL
//! ```
//!
//! Syntax patterns use five meta-characters: `%field` (input operand),
//! `=field` (output operand), `&field` (input and output), and `{ ... }`
//! for an optional group. Every other character must appear verbatim in
//! the assembly text.

/// Attribute bits carried by opcodes, keywords and encoded instructions.
///
/// The low byte selects ISA variants, the next byte optional extensions.
/// An entry with no variant bits is valid for every variant.
pub mod attr {
    /// Baseline ISA, version 1.
    pub const V1: u32 = 1 << 0;
    /// ISA version 2.
    pub const V2: u32 = 1 << 1;
    /// ISA version 3.
    pub const V3: u32 = 1 << 2;
    /// ISA version 3, microcontroller profile.
    pub const V3M: u32 = 1 << 3;
    /// Mask of all ISA variant bits.
    pub const ISA_MASK: u32 = 0xff;

    /// Every ISA variant.
    pub const ALL: u32 = V1 | V2 | V3 | V3M;
    /// Version 2 and later.
    pub const V2UP: u32 = V2 | V3 | V3M;
    /// Version 3 (including the microcontroller profile).
    pub const V3MUP: u32 = V3 | V3M;
    /// Every variant except the microcontroller profile.
    pub const V3MEX_V1: u32 = V1 | V2 | V3;
    /// Version 2 and 3, excluding the microcontroller profile.
    pub const V3MEX_V2: u32 = V2 | V3;

    /// Performance extension.
    pub const PERF_EXT: u32 = 1 << 8;
    /// Second performance extension.
    pub const PERF2_EXT: u32 = 1 << 9;
    /// String extension.
    pub const STR_EXT: u32 = 1 << 10;
    /// Floating-point unit.
    pub const FPU: u32 = 1 << 11;
    /// Hardware divider.
    pub const DIV: u32 = 1 << 12;
    /// Multiply-accumulate.
    pub const MAC: u32 = 1 << 13;
    /// Instruction-table (`ex9.it`) extension.
    pub const EX9_EXT: u32 = 1 << 14;
    /// In-function call extension.
    pub const IFC_EXT: u32 = 1 << 15;
    /// Mask of all extension bits.
    pub const EXT_MASK: u32 = 0xff00;

    /// Register is usable in reduced-register mode (keyword attribute).
    pub const RDREG: u32 = 1 << 16;
    /// PC-relative operand.
    pub const PCREL: u32 = 1 << 17;
    /// Register-indirect branch.
    pub const BRANCH: u32 = 1 << 18;
    /// GP-relative access.
    pub const GPREL: u32 = 1 << 19;

    /// `hi20(...)` modifier was applied to an operand.
    pub const HI20: u32 = 1 << 24;
    /// `lo12(...)` modifier was applied to an operand.
    pub const LO12: u32 = 1 << 25;
    /// `lo20(...)` modifier was applied to an operand.
    pub const LO20: u32 = 1 << 26;

    /// Whether an entry carrying `attrs` is visible under the selected
    /// ISA variants and enabled extensions.
    #[inline]
    pub const fn applicable(attrs: u32, isa: u32, extensions: u32) -> bool {
        let variants = attrs & ISA_MASK;
        let required = attrs & EXT_MASK;
        (variants == 0 || variants & isa != 0) && required & !extensions == 0
    }
}

/// Name of the keyword table holding general-purpose registers.
pub const GPR_CLASS: &str = "gpr";

/// Hardware resource an operand field draws its values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Resource {
    /// General-purpose register, looked up in the [`GPR_CLASS`] table.
    /// Tracked in def/use masks and subject to reduced-register gating.
    Gpr,
    /// Any other keyword class (system/user/floating/co-processor
    /// registers, flag and sub-operation selectors), named by its table.
    Keyword(&'static str),
    /// Signed integer or symbolic expression.
    Int,
    /// Unsigned integer or symbolic expression.
    Uint,
}

impl Resource {
    /// Keyword table consulted for this resource, if any.
    pub const fn keyword_class(self) -> Option<&'static str> {
        match self {
            Resource::Gpr => Some(GPR_CLASS),
            Resource::Keyword(class) => Some(class),
            Resource::Int | Resource::Uint => None,
        }
    }

    /// Whether values are range-checked as two's-complement.
    pub const fn is_signed(self) -> bool {
        matches!(self, Resource::Int)
    }
}

/// Parse strategy overriding the generic operand parse for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParseHook {
    /// Register pair selector of `push25`/`pop25`: one of r6, r8, r10,
    /// r14 encoded as 0..=3.
    PushPopRegister,
    /// Integer operand whose value is offset by a constant before the
    /// generic shift and range check.
    Bias(i64),
}

/// One operand bit-field of an encoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Field {
    /// Name referenced by syntax patterns.
    pub name: &'static str,
    /// Bit position of the least significant encoded bit.
    pub offset: u8,
    /// Number of encoded bits.
    pub width: u8,
    /// Implicit left shift: the operand value must be a multiple of
    /// `1 << scale` and only the bits above it are encoded.
    pub scale: u8,
    /// Value domain.
    pub resource: Resource,
    /// Optional parse override.
    pub hook: Option<ParseHook>,
    /// Register number goes through the 4-bit compact register map.
    pub compact: bool,
}

impl Field {
    /// Describe a field.
    pub const fn new(
        name: &'static str,
        offset: u8,
        width: u8,
        scale: u8,
        resource: Resource,
    ) -> Self {
        Self {
            name,
            offset,
            width,
            scale,
            resource,
            hook: None,
            compact: false,
        }
    }

    /// Attach a parse strategy.
    pub const fn with_hook(mut self, hook: ParseHook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Encode registers through the compact 4-bit register map.
    pub const fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    /// Mask of the encoded bits, before shifting into position.
    #[inline]
    pub const fn mask(&self) -> u32 {
        if self.width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.width) - 1
        }
    }

    /// Smallest and largest operand value the field accepts, in operand
    /// units (before the implicit shift).
    pub const fn range(&self) -> (i64, i64) {
        let bits = (self.width + self.scale) as u32;
        if self.resource.is_signed() {
            (-(1i64 << (bits - 1)), (1i64 << (bits - 1)) - 1)
        } else {
            (0, (1i64 << bits) - 1)
        }
    }
}

/// One named value of a keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keyword {
    /// Lower-case name as written in assembly.
    pub name: &'static str,
    /// Encoded value.
    pub value: i64,
    /// Attribute bits ([`attr::RDREG`], ISA variant bits).
    pub attr: u32,
}

impl Keyword {
    /// Describe a keyword.
    pub const fn new(name: &'static str, value: i64, attr: u32) -> Self {
        Self { name, value, attr }
    }
}

/// A named keyword class.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    /// Class name referenced by [`Resource::Keyword`].
    pub class: &'static str,
    /// Entries; names must be unique within the table.
    pub entries: &'static [Keyword],
}

/// One mnemonic variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeDef {
    /// Instruction name, possibly dotted (`lwi.bi`).
    pub mnemonic: &'static str,
    /// Operand syntax pattern.
    pub pattern: &'static str,
    /// Base encoding; operand fields are ORed into it.
    pub value: u32,
    /// Encoded size in bytes.
    pub size: u8,
    /// Applicability and semantic attribute bits.
    pub attr: u32,
    /// Registers implicitly written.
    pub defs: u32,
    /// Registers implicitly read.
    pub uses: u32,
}

impl OpcodeDef {
    /// Describe an opcode with no implicit register accesses.
    pub const fn new(
        mnemonic: &'static str,
        pattern: &'static str,
        value: u32,
        size: u8,
        attr: u32,
    ) -> Self {
        Self {
            mnemonic,
            pattern,
            value,
            size,
            attr,
            defs: 0,
            uses: 0,
        }
    }

    /// Mark register `reg` as implicitly read.
    pub const fn uses(mut self, reg: u32) -> Self {
        self.uses |= 1 << reg;
        self
    }

    /// Mark register `reg` as implicitly written.
    pub const fn defs(mut self, reg: u32) -> Self {
        self.defs |= 1 << reg;
        self
    }
}

/// A complete instruction-set description.
#[derive(Debug, Clone, Copy)]
pub struct IsaDescription {
    /// Operand fields, unique by name.
    pub fields: &'static [Field],
    /// Keyword tables, unique by class.
    pub keywords: &'static [KeywordTable],
    /// Opcode templates; entries sharing a mnemonic are tried in order.
    pub opcodes: &'static [OpcodeDef],
}
