//! # table-asm: Table-Driven Instruction Encoder
//!
//! `table-asm` turns one line of assembly text into an encoded machine
//! instruction, driven entirely by static tables: operand bit-fields,
//! keyword tables (register names, sub-operation selectors) and opcode
//! templates with a small syntax language.
//!
//! ## Quick Start
//!
//! ```rust
//! let insn = table_asm::encode("add r0,r1,r2").unwrap();
//! assert_eq!(insn.insn, 0x4000_8800);
//! assert_eq!(insn.size, 4);
//! ```
//!
//! ## Features
//!
//! - **Table-driven**: an instruction set is plain `static` data
//!   ([`IsaDescription`]); the engine never hard-codes an encoding.
//! - **Optional operand groups**: `{ ... }` in a template expands into
//!   every present/absent combination.
//! - **Def/use tracking**: each result records which general-purpose
//!   registers it reads and writes.
//! - **Symbolic operands**: unresolved expressions are left as a fix-up
//!   for the caller to patch.
//! - **`no_std` + `alloc`**: embeddable in firmware and tooling alike.
//! - **NDS32**: a bundled description behind the `nds32` feature.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
// ── Pedantic lint policy ─────────────────────────────────────────────────
// An encoder performs many narrowing / sign-changing casts between integer
// widths (i64→u32, u8→u32) and uses dense hex literals without separators
// (0xfc00, 0xdd80).  The lints below are expected and acceptable here.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::cast_possible_wrap,
    clippy::unreadable_literal,
    clippy::match_same_arms,
    clippy::wildcard_imports,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args,
    clippy::doc_markdown,
    clippy::similar_names,
    clippy::too_many_lines,
    clippy::manual_let_else,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::return_self_not_must_use
)]

extern crate alloc;

/// Encode orchestrator: [`Engine`], options and results.
pub mod engine;
/// Error type.
pub mod error;
/// Instruction-set description types and attribute bits.
pub mod isa;
pub(crate) mod matcher;
/// Bundled NDS32 instruction-set description.
#[cfg(feature = "nds32")]
pub mod nds32;
/// Operand parsing and bit-field packing.
pub mod operand;
/// Field and keyword registry.
pub mod registry;
/// Expression resolution.
pub mod resolver;
/// Name lookup tables.
pub mod symtab;
/// Syntax pattern compiler.
pub mod syntax;

// Re-exports
pub use engine::{EncodeOptions, EncodedInsn, Engine, Opcode};
pub use error::EncodeError;
pub use isa::{
    attr, Field, IsaDescription, Keyword, KeywordTable, OpcodeDef, ParseHook, Resource, GPR_CLASS,
};
pub use operand::{compact_register, pack_field};
pub use registry::Registry;
pub use resolver::{Literals, Resolve, Resolved};
pub use syntax::{Access, Lex, Syntax, MAX_OPTIONAL_GROUPS};

/// Encode one line with the bundled NDS32 description and default options.
///
/// Builds a fresh engine per call; keep an [`Engine`] around when encoding
/// more than a handful of lines.
///
/// # Errors
///
/// Returns [`EncodeError`] if the mnemonic is unknown or no template of it
/// accepts the operands.
///
/// # Examples
///
/// ```rust
/// let insn = table_asm::encode("movi55 r1,-3").unwrap();
/// assert_eq!(insn.insn, 0x843d);
/// assert!(insn.is_16bit());
/// ```
#[cfg(feature = "nds32")]
pub fn encode(line: &str) -> Result<EncodedInsn, EncodeError> {
    nds32::engine().encode(line)
}
