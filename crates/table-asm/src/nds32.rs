//! Bundled NDS32 (AndeStar) instruction-set description.
//!
//! Covers the field layouts and keyword tables of the architecture, and the
//! 32-bit ALU, immediate, load/store, branch, load/store-multiple,
//! system-register and 16-bit compact opcode families.
//!
//! ```rust
//! use table_asm::nds32;
//!
//! let engine = nds32::engine();
//! let lw = engine.encode("lwi r0,[r1+8]").unwrap();
//! assert_eq!(lw.insn, 0x0400_8002);
//! ```

use crate::engine::{EncodeOptions, Engine};
use crate::isa::attr::*;
use crate::isa::{Field, IsaDescription, Keyword, KeywordTable, OpcodeDef, ParseHook, Resource};

// ── Encoding helpers ────────────────────────────────────────────────────

const fn op6(op: u32) -> u32 {
    op << 25
}

const fn alu1(sub: u32) -> u32 {
    op6(OP6_ALU1) | sub
}

const fn alu2(sub: u32) -> u32 {
    op6(OP6_ALU2) | sub
}

const fn misc(sub: u32) -> u32 {
    op6(OP6_MISC) | sub
}

const fn mem(sub: u32) -> u32 {
    op6(OP6_MEM) | sub
}

const fn br2(sub: u32) -> u32 {
    op6(OP6_BR2) | (sub << 16)
}

const fn jreg(sub: u32) -> u32 {
    op6(OP6_JREG) | sub
}

const fn lsmw(sub: u32) -> u32 {
    op6(OP6_LSMW) | sub
}

const fn rt(r: u32) -> u32 {
    r << 20
}

const fn rb(r: u32) -> u32 {
    r << 10
}

const fn usridx(group: i64, usr: i64) -> i64 {
    group | (usr << 5)
}

const fn sridx(major: i64, minor: i64, ext: i64) -> i64 {
    (major << 7) | (minor << 3) | ext
}

const OP6_LBI: u32 = 0x00;
const OP6_LHI: u32 = 0x01;
const OP6_LWI: u32 = 0x02;
const OP6_LBI_BI: u32 = 0x04;
const OP6_LHI_BI: u32 = 0x05;
const OP6_LWI_BI: u32 = 0x06;
const OP6_SBI: u32 = 0x08;
const OP6_SHI: u32 = 0x09;
const OP6_SWI: u32 = 0x0a;
const OP6_SBI_BI: u32 = 0x0c;
const OP6_SHI_BI: u32 = 0x0d;
const OP6_SWI_BI: u32 = 0x0e;
const OP6_LBSI: u32 = 0x10;
const OP6_LHSI: u32 = 0x11;
const OP6_DPREFI: u32 = 0x13;
const OP6_LBGP: u32 = 0x17;
const OP6_LWC: u32 = 0x18;
const OP6_SWC: u32 = 0x19;
const OP6_MEM: u32 = 0x1c;
const OP6_LSMW: u32 = 0x1d;
const OP6_HWGP: u32 = 0x1e;
const OP6_SBGP: u32 = 0x1f;
const OP6_ALU1: u32 = 0x20;
const OP6_ALU2: u32 = 0x21;
const OP6_MOVI: u32 = 0x22;
const OP6_SETHI: u32 = 0x23;
const OP6_JI: u32 = 0x24;
const OP6_JREG: u32 = 0x25;
const OP6_BR1: u32 = 0x26;
const OP6_BR2: u32 = 0x27;
const OP6_ADDI: u32 = 0x28;
const OP6_SUBRI: u32 = 0x29;
const OP6_ANDI: u32 = 0x2a;
const OP6_XORI: u32 = 0x2b;
const OP6_ORI: u32 = 0x2c;
const OP6_BR3: u32 = 0x2d;
const OP6_SLTI: u32 = 0x2e;
const OP6_SLTSI: u32 = 0x2f;
const OP6_MISC: u32 = 0x32;
const OP6_BITCI: u32 = 0x33;

const JREG_RET: u32 = 1 << 5;
const JREG_IFC: u32 = 1 << 6;

/// Register numbers with fixed roles.
pub mod reg {
    /// Implicit source of `beqs38`/`bnes38`/`beqzs8`/`bnezs8`.
    pub const R5: u32 = 5;
    /// Base register of `lwi45.fe`.
    pub const R8: u32 = 8;
    /// Destination of the 16-bit compare instructions.
    pub const TA: u32 = 15;
    /// Frame pointer.
    pub const FP: u32 = 28;
    /// Global pointer.
    pub const GP: u32 = 29;
    /// Link pointer.
    pub const LP: u32 = 30;
    /// Stack pointer.
    pub const SP: u32 = 31;
}

// ── Fields ──────────────────────────────────────────────────────────────

const fn gpr(name: &'static str, offset: u8, width: u8) -> Field {
    Field::new(name, offset, width, 0, Resource::Gpr)
}

const fn kw(name: &'static str, offset: u8, width: u8, class: &'static str) -> Field {
    Field::new(name, offset, width, 0, Resource::Keyword(class))
}

const fn int(name: &'static str, offset: u8, width: u8, scale: u8) -> Field {
    Field::new(name, offset, width, scale, Resource::Int)
}

const fn uint(name: &'static str, offset: u8, width: u8, scale: u8) -> Field {
    Field::new(name, offset, width, scale, Resource::Uint)
}

/// Operand fields. `%name` in a syntax pattern refers to an entry here.
pub static FIELDS: &[Field] = &[
    gpr("rt", 20, 5),
    gpr("ra", 15, 5),
    gpr("rb", 10, 5),
    gpr("rd", 5, 5),
    kw("fst", 20, 5, "fsr"),
    kw("fsa", 15, 5, "fsr"),
    kw("fsb", 10, 5, "fsr"),
    kw("fdt", 20, 5, "fdr"),
    kw("fda", 15, 5, "fdr"),
    kw("fdb", 10, 5, "fdr"),
    kw("cprt", 20, 5, "cpr"),
    kw("cp", 13, 2, "cp"),
    uint("sh", 5, 5, 0),
    uint("sv", 8, 2, 0),
    kw("dt", 21, 1, "dxr"),
    kw("usr", 10, 10, "usr"),
    kw("sr", 10, 10, "sr"),
    uint("ridx", 10, 10, 0),
    uint("enb4", 6, 9, 0),
    uint("swid", 5, 15, 0),
    kw("stdby_st", 5, 2, "standby_st"),
    kw("tlbop_st", 5, 5, "tlbop_st"),
    uint("tlbop_stx", 5, 5, 0),
    kw("cctl_st0", 5, 5, "cctl_st0"),
    kw("cctl_st1", 5, 5, "cctl_st1"),
    kw("cctl_st2", 5, 5, "cctl_st2"),
    kw("cctl_st3", 5, 5, "cctl_st3"),
    kw("cctl_st4", 5, 5, "cctl_st4"),
    kw("cctl_st5", 5, 5, "cctl_st5"),
    uint("cctl_stx", 5, 5, 0),
    kw("cctl_lv", 10, 1, "cctl_lv"),
    kw("msync_st", 5, 3, "msync_st"),
    uint("msync_stx", 5, 3, 0),
    kw("dpref_st", 20, 5, "dpref_st"),
    gpr("rt5", 5, 5),
    gpr("ra5", 0, 5),
    gpr("rt4", 5, 4).compact(),
    gpr("rt3", 6, 3),
    gpr("rt38", 8, 3),
    gpr("ra3", 3, 3),
    gpr("rb3", 0, 3),
    Field::new("rt5e", 4, 4, 1, Resource::Gpr),
    Field::new("ra5e", 0, 4, 1, Resource::Gpr),
    gpr("re2", 5, 2).with_hook(ParseHook::PushPopRegister),
    uint("fe5", 0, 5, 2).with_hook(ParseHook::Bias(128)),
    uint("pi5", 0, 5, 0).with_hook(ParseHook::Bias(-16)),
    kw("abdim", 2, 3, "abdim"),
    kw("abm", 2, 3, "abm"),
    kw("dtiton", 8, 2, "dtiton"),
    kw("dtitoff", 8, 2, "dtitoff"),
    int("i5s", 0, 5, 0),
    int("i10s", 0, 10, 0),
    int("i15s", 0, 15, 0),
    int("i19s", 0, 19, 0),
    int("i20s", 0, 20, 0),
    int("i8s1", 0, 8, 1),
    int("i11br3", 8, 11, 0),
    int("i14s1", 0, 14, 1),
    int("i15s1", 0, 15, 1),
    int("i16s1", 0, 16, 1),
    int("i18s1", 0, 18, 1),
    int("i24s1", 0, 24, 1),
    int("i8s2", 0, 8, 2),
    int("i12s2", 0, 12, 2),
    int("i15s2", 0, 15, 2),
    int("i17s2", 0, 17, 2),
    int("i19s2", 0, 19, 2),
    uint("i3u", 0, 3, 0),
    uint("i5u", 0, 5, 0),
    uint("ib5u", 10, 5, 0),
    int("ib5s", 10, 5, 0),
    uint("i9u", 0, 9, 0),
    uint("ia3u", 3, 3, 0),
    uint("i8u", 0, 8, 0),
    uint("i15u", 0, 15, 0),
    uint("i20u", 0, 20, 0),
    uint("i3u1", 0, 3, 1),
    uint("i9u1", 0, 9, 1),
    uint("i3u2", 0, 3, 2),
    uint("i6u2", 0, 6, 2),
    uint("i7u2", 0, 7, 2),
    uint("i5u3", 0, 5, 3),
    uint("i15s3", 0, 15, 3),
];

// ── Keywords ────────────────────────────────────────────────────────────

const fn k(name: &'static str, value: i64) -> Keyword {
    Keyword::new(name, value, 0)
}

const fn rd(name: &'static str, value: i64) -> Keyword {
    Keyword::new(name, value, RDREG)
}

#[rustfmt::skip]
static GPR: &[Keyword] = &[
    rd("r0", 0), rd("r1", 1), rd("r2", 2), rd("r3", 3),
    rd("r4", 4), rd("r5", 5), rd("r6", 6), rd("r7", 7),
    rd("r8", 8), rd("r9", 9), rd("r10", 10),
    k("r11", 11), k("r12", 12), k("r13", 13), k("r14", 14),
    rd("r15", 15),
    k("r16", 16), k("r17", 17), k("r18", 18), k("r19", 19),
    k("r20", 20), k("r21", 21), k("r22", 22), k("r23", 23),
    k("r24", 24), k("r25", 25), k("r26", 26), k("r27", 27),
    rd("r28", 28), rd("r29", 29), rd("r30", 30), rd("r31", 31),
    rd("ta", 15), k("p0", 26), k("p1", 27),
    rd("fp", 28), rd("gp", 29), rd("lp", 30), rd("sp", 31),
];

static USR: &[Keyword] = &[
    k("d0.lo", usridx(0, 0)),
    k("d0.hi", usridx(0, 1)),
    k("d1.lo", usridx(0, 2)),
    k("d1.hi", usridx(0, 3)),
    k("itb", usridx(0, 28)),
    k("ifc_lp", usridx(0, 29)),
    k("pc", usridx(0, 31)),
    k("dma_cfg", usridx(1, 0)),
    k("dma_gcsw", usridx(1, 1)),
    k("dma_chnsel", usridx(1, 2)),
    k("dma_act", usridx(1, 3)),
    k("dma_setup", usridx(1, 4)),
    k("dma_isaddr", usridx(1, 5)),
    k("dma_esaddr", usridx(1, 6)),
    k("dma_tcnt", usridx(1, 7)),
    k("dma_status", usridx(1, 8)),
    k("dma_2dset", usridx(1, 9)),
    k("dma_rcnt", usridx(1, 23)),
    k("dma_hstatus", usridx(1, 24)),
    k("dma_2dsctl", usridx(1, 25)),
    k("pfmc0", usridx(2, 0)),
    k("pfmc1", usridx(2, 1)),
    k("pfmc2", usridx(2, 2)),
    k("pfm_ctl", usridx(2, 4)),
];

static DXR: &[Keyword] = &[k("d0", 0), k("d1", 1)];

#[rustfmt::skip]
static SR: &[Keyword] = &[
    k("cr0", sridx(0, 0, 0)), k("cpu_ver", sridx(0, 0, 0)),
    k("cr1", sridx(0, 1, 0)), k("icm_cfg", sridx(0, 1, 0)),
    k("cr2", sridx(0, 2, 0)), k("dcm_cfg", sridx(0, 2, 0)),
    k("cr3", sridx(0, 3, 0)), k("mmu_cfg", sridx(0, 3, 0)),
    k("cr4", sridx(0, 4, 0)), k("msc_cfg", sridx(0, 4, 0)),
    k("cr5", sridx(0, 0, 1)), k("core_id", sridx(0, 0, 1)),
    k("cr6", sridx(0, 5, 0)), k("fucop_exist", sridx(0, 5, 0)),
    k("ir0", sridx(1, 0, 0)), k("psw", sridx(1, 0, 0)),
    k("ir1", sridx(1, 0, 1)), k("ipsw", sridx(1, 0, 1)),
    k("ir2", sridx(1, 0, 2)), k("p_ipsw", sridx(1, 0, 2)),
    k("ir3", sridx(1, 1, 1)), k("ivb", sridx(1, 1, 1)),
    k("ir4", sridx(1, 2, 1)), k("eva", sridx(1, 2, 1)),
    k("ir5", sridx(1, 2, 2)), k("p_eva", sridx(1, 2, 2)),
    k("ir6", sridx(1, 3, 1)), k("itype", sridx(1, 3, 1)),
    k("ir7", sridx(1, 3, 2)), k("p_itype", sridx(1, 3, 2)),
    k("ir8", sridx(1, 4, 1)), k("merr", sridx(1, 4, 1)),
    k("ir9", sridx(1, 5, 1)), k("ipc", sridx(1, 5, 1)),
    k("ir10", sridx(1, 5, 2)), k("p_ipc", sridx(1, 5, 2)),
    k("ir11", sridx(1, 5, 3)), k("oipc", sridx(1, 5, 3)),
    k("ir12", sridx(1, 6, 2)), k("p_p0", sridx(1, 6, 2)),
    k("ir13", sridx(1, 7, 2)), k("p_p1", sridx(1, 7, 2)),
    k("ir14", sridx(1, 8, 0)), k("int_mask", sridx(1, 8, 0)),
    k("ir15", sridx(1, 9, 0)), k("int_pend", sridx(1, 9, 0)),
    k("ir16", sridx(1, 10, 0)), k("sp_usr", sridx(1, 10, 0)),
    k("ir17", sridx(1, 10, 1)), k("sp_priv", sridx(1, 10, 1)),
    k("ir18", sridx(1, 11, 0)), k("int_pri", sridx(1, 11, 0)),
    k("ir19", sridx(1, 1, 2)), k("int_ctrl", sridx(1, 1, 2)),
    k("ir20", sridx(1, 10, 2)), k("sp_usr1", sridx(1, 10, 2)),
    k("ir21", sridx(1, 10, 3)), k("sp_priv1", sridx(1, 10, 3)),
    k("ir22", sridx(1, 10, 4)), k("sp_usr2", sridx(1, 10, 4)),
    k("ir23", sridx(1, 10, 5)), k("sp_priv2", sridx(1, 10, 5)),
    k("ir24", sridx(1, 10, 6)), k("sp_usr3", sridx(1, 10, 6)),
    k("ir25", sridx(1, 10, 7)), k("sp_priv3", sridx(1, 10, 7)),
    k("ir26", sridx(1, 8, 1)), k("int_mask2", sridx(1, 8, 1)),
    k("ir27", sridx(1, 9, 1)), k("int_pend2", sridx(1, 9, 1)),
    k("ir28", sridx(1, 11, 1)), k("int_pri2", sridx(1, 11, 1)),
    k("ir29", sridx(1, 9, 4)), k("int_trigger", sridx(1, 9, 4)),
    k("ir30", sridx(1, 1, 3)),
    k("mr0", sridx(2, 0, 0)), k("mmu_ctl", sridx(2, 0, 0)),
    k("mr1", sridx(2, 1, 0)), k("l1_pptb", sridx(2, 1, 0)),
    k("mr2", sridx(2, 2, 0)), k("tlb_vpn", sridx(2, 2, 0)),
    k("mr3", sridx(2, 3, 0)), k("tlb_data", sridx(2, 3, 0)),
    k("mr4", sridx(2, 4, 0)), k("tlb_misc", sridx(2, 4, 0)),
    k("mr5", sridx(2, 5, 0)), k("vlpt_idx", sridx(2, 5, 0)),
    k("mr6", sridx(2, 6, 0)), k("ilmb", sridx(2, 6, 0)),
    k("mr7", sridx(2, 7, 0)), k("dlmb", sridx(2, 7, 0)),
    k("mr8", sridx(2, 8, 0)), k("cache_ctl", sridx(2, 8, 0)),
    k("mr9", sridx(2, 9, 0)), k("hsmp_saddr", sridx(2, 9, 0)),
    k("mr10", sridx(2, 9, 1)), k("hsmp_eaddr", sridx(2, 9, 1)),
    k("mr11", sridx(2, 0, 1)), k("bg_region", sridx(2, 0, 1)),
    k("pfr0", sridx(4, 0, 0)), k("pfmc0", sridx(4, 0, 0)),
    k("pfr1", sridx(4, 0, 1)), k("pfmc1", sridx(4, 0, 1)),
    k("pfr2", sridx(4, 0, 2)), k("pfmc2", sridx(4, 0, 2)),
    k("pfr3", sridx(4, 1, 0)), k("pfm_ctl", sridx(4, 1, 0)),
    k("dmar0", sridx(5, 0, 0)), k("dma_cfg", sridx(5, 0, 0)),
    k("dmar1", sridx(5, 1, 0)), k("dma_gcsw", sridx(5, 1, 0)),
    k("dmar2", sridx(5, 2, 0)), k("dma_chnsel", sridx(5, 2, 0)),
    k("dmar3", sridx(5, 3, 0)), k("dma_act", sridx(5, 3, 0)),
    k("dmar4", sridx(5, 4, 0)), k("dma_setup", sridx(5, 4, 0)),
    k("dmar5", sridx(5, 5, 0)), k("dma_isaddr", sridx(5, 5, 0)),
    k("dmar6", sridx(5, 6, 0)), k("dma_esaddr", sridx(5, 6, 0)),
    k("dmar7", sridx(5, 7, 0)), k("dma_tcnt", sridx(5, 7, 0)),
    k("dmar8", sridx(5, 8, 0)), k("dma_status", sridx(5, 8, 0)),
    k("dmar9", sridx(5, 9, 0)), k("dma_2dset", sridx(5, 9, 0)),
    k("dmar10", sridx(5, 9, 1)), k("dma_2dsctl", sridx(5, 9, 1)),
    k("dmar11", sridx(5, 7, 1)), k("dma_rcnt", sridx(5, 7, 1)),
    k("dmar12", sridx(5, 8, 1)), k("dma_hstatus", sridx(5, 8, 1)),
    k("idr0", sridx(2, 15, 0)), k("sdz_ctl", sridx(2, 15, 0)),
    k("idr1", sridx(2, 15, 1)), k("n12misc_ctl", sridx(2, 15, 1)),
    k("misc_ctl", sridx(2, 15, 1)),
    k("secur0", sridx(6, 0, 0)), k("sfcr", sridx(6, 0, 0)),
    k("prusr_acc_ctl", sridx(4, 4, 0)),
    k("fucpr", sridx(4, 5, 0)), k("fucop_ctl", sridx(4, 5, 0)),
];

static CP: &[Keyword] = &[k("cp0", 0), k("cp1", 1), k("cp2", 2), k("cp3", 3)];

#[rustfmt::skip]
static CPR: &[Keyword] = &[
    k("cpr0", 0), k("cpr1", 1), k("cpr2", 2), k("cpr3", 3),
    k("cpr4", 4), k("cpr5", 5), k("cpr6", 6), k("cpr7", 7),
    k("cpr8", 8), k("cpr9", 9), k("cpr10", 10), k("cpr11", 11),
    k("cpr12", 12), k("cpr13", 13), k("cpr14", 14), k("cpr15", 15),
    k("cpr16", 16), k("cpr17", 17), k("cpr18", 18), k("cpr19", 19),
    k("cpr20", 20), k("cpr21", 21), k("cpr22", 22), k("cpr23", 23),
    k("cpr24", 24), k("cpr25", 25), k("cpr26", 26), k("cpr27", 27),
    k("cpr28", 28), k("cpr29", 29), k("cpr30", 30), k("cpr31", 31),
];

#[rustfmt::skip]
static FSR: &[Keyword] = &[
    k("fs0", 0), k("fs1", 1), k("fs2", 2), k("fs3", 3),
    k("fs4", 4), k("fs5", 5), k("fs6", 6), k("fs7", 7),
    k("fs8", 8), k("fs9", 9), k("fs10", 10), k("fs11", 11),
    k("fs12", 12), k("fs13", 13), k("fs14", 14), k("fs15", 15),
    k("fs16", 16), k("fs17", 17), k("fs18", 18), k("fs19", 19),
    k("fs20", 20), k("fs21", 21), k("fs22", 22), k("fs23", 23),
    k("fs24", 24), k("fs25", 25), k("fs26", 26), k("fs27", 27),
    k("fs28", 28), k("fs29", 29), k("fs30", 30), k("fs31", 31),
];

#[rustfmt::skip]
static FDR: &[Keyword] = &[
    k("fd0", 0), k("fd1", 1), k("fd2", 2), k("fd3", 3),
    k("fd4", 4), k("fd5", 5), k("fd6", 6), k("fd7", 7),
    k("fd8", 8), k("fd9", 9), k("fd10", 10), k("fd11", 11),
    k("fd12", 12), k("fd13", 13), k("fd14", 14), k("fd15", 15),
    k("fd16", 16), k("fd17", 17), k("fd18", 18), k("fd19", 19),
    k("fd20", 20), k("fd21", 21), k("fd22", 22), k("fd23", 23),
    k("fd24", 24), k("fd25", 25), k("fd26", 26), k("fd27", 27),
    k("fd28", 28), k("fd29", 29), k("fd30", 30), k("fd31", 31),
];

#[rustfmt::skip]
static ABDIM: &[Keyword] = &[
    k("bi", 0), k("bim", 1), k("bd", 2), k("bdm", 3),
    k("ai", 4), k("aim", 5), k("ad", 6), k("adm", 7),
];

static ABM: &[Keyword] = &[k("b", 0), k("bm", 1), k("a", 4), k("am", 5)];

static DTITON: &[Keyword] = &[k("iton", 1), k("ton", 3)];

static DTITOFF: &[Keyword] = &[k("itoff", 1), k("toff", 3)];

#[rustfmt::skip]
static DPREF_ST: &[Keyword] = &[
    k("srd", 0), k("mrd", 1), k("swr", 2),
    k("mwr", 3), k("pte", 4), k("clwr", 5),
];

// cctl Ra, SubType
#[rustfmt::skip]
static CCTL_ST0: &[Keyword] = &[
    k("l1d_ix_inval", 0x0), k("l1d_ix_wb", 0x1), k("l1d_ix_wbinval", 0x2),
    k("l1d_va_fillck", 0xb), k("l1d_va_ulck", 0xc), k("l1i_ix_inval", 0x10),
    k("l1i_va_fillck", 0x1b), k("l1i_va_ulck", 0x1c),
];

// cctl Ra, SubType, level
#[rustfmt::skip]
static CCTL_ST1: &[Keyword] = &[
    k("l1d_va_inval", 0x8), k("l1d_va_wb", 0x9),
    k("l1d_va_wbinval", 0xa), k("l1i_va_inval", 0x18),
];

// cctl Rt, Ra, SubType
#[rustfmt::skip]
static CCTL_ST2: &[Keyword] = &[
    k("l1d_ix_rtag", 0x3), k("l1d_ix_rwd", 0x4),
    k("l1i_ix_rtag", 0x13), k("l1i_ix_rwd", 0x14),
];

// cctl Rb, Ra, SubType
#[rustfmt::skip]
static CCTL_ST3: &[Keyword] = &[
    k("l1d_ix_wtag", 0x5), k("l1d_ix_wwd", 0x6),
    k("l1i_ix_wtag", 0x15), k("l1i_ix_wwd", 0x16),
];

static CCTL_ST4: &[Keyword] = &[k("l1d_invalall", 0x7)];

static CCTL_ST5: &[Keyword] = &[k("l1d_wball", 0xf)];

static CCTL_LV: &[Keyword] = &[k("1level", 0), k("alevel", 1), k("0", 0), k("1", 1)];

// "pb" takes two operands and "flua" none; both are spelled out in the
// opcode table instead.
#[rustfmt::skip]
static TLBOP_ST: &[Keyword] = &[
    k("trd", 0), k("targetread", 0),
    k("twr", 1), k("targetwrite", 1),
    k("rwr", 2), k("rwrite", 2),
    k("rwlk", 3), k("rwritelock", 3),
    k("unlk", 4), k("unlock", 4),
    k("inv", 6), k("invalidate", 6),
];

#[rustfmt::skip]
static STANDBY_ST: &[Keyword] = &[
    k("no_wake_grant", 0), k("wake_grant", 1), k("wait_done", 2),
    k("0", 0), k("1", 1), k("2", 2), k("3", 3),
];

static MSYNC_ST: &[Keyword] = &[k("all", 0), k("store", 1)];

const fn class(class: &'static str, entries: &'static [Keyword]) -> KeywordTable {
    KeywordTable { class, entries }
}

/// Keyword tables by class.
pub static KEYWORDS: &[KeywordTable] = &[
    class("gpr", GPR),
    class("usr", USR),
    class("dxr", DXR),
    class("sr", SR),
    class("fsr", FSR),
    class("fdr", FDR),
    class("cp", CP),
    class("cpr", CPR),
    class("abdim", ABDIM),
    class("abm", ABM),
    class("dtiton", DTITON),
    class("dtitoff", DTITOFF),
    class("dpref_st", DPREF_ST),
    class("cctl_st0", CCTL_ST0),
    class("cctl_st1", CCTL_ST1),
    class("cctl_st2", CCTL_ST2),
    class("cctl_st3", CCTL_ST3),
    class("cctl_st4", CCTL_ST4),
    class("cctl_st5", CCTL_ST5),
    class("cctl_lv", CCTL_LV),
    class("tlbop_st", TLBOP_ST),
    class("standby_st", STANDBY_ST),
    class("msync_st", MSYNC_ST),
];

// ── Opcodes ─────────────────────────────────────────────────────────────

const fn w(mnemonic: &'static str, pattern: &'static str, value: u32, attr: u32) -> OpcodeDef {
    OpcodeDef::new(mnemonic, pattern, value, 4, attr)
}

const fn h(mnemonic: &'static str, pattern: &'static str, value: u32, attr: u32) -> OpcodeDef {
    OpcodeDef::new(mnemonic, pattern, value, 2, attr)
}

/// Opcode templates. Entries sharing a mnemonic are tried in this order.
pub static OPCODES: &[OpcodeDef] = &[
    // ALU1
    w("add", "=rt,%ra,%rb", alu1(0x00), ALL),
    w("sub", "=rt,%ra,%rb", alu1(0x01), ALL),
    w("and", "=rt,%ra,%rb", alu1(0x02), ALL),
    w("xor", "=rt,%ra,%rb", alu1(0x03), ALL),
    w("or", "=rt,%ra,%rb", alu1(0x04), ALL),
    w("nor", "=rt,%ra,%rb", alu1(0x05), ALL),
    w("slt", "=rt,%ra,%rb", alu1(0x06), ALL),
    w("slts", "=rt,%ra,%rb", alu1(0x07), ALL),
    w("slli", "=rt,%ra,%ib5u", alu1(0x08), ALL),
    w("srli", "=rt,%ra,%ib5u", alu1(0x09), ALL),
    w("srai", "=rt,%ra,%ib5u", alu1(0x0a), ALL),
    w("rotri", "=rt,%ra,%ib5u", alu1(0x0b), ALL),
    w("sll", "=rt,%ra,%rb", alu1(0x0c), ALL),
    w("srl", "=rt,%ra,%rb", alu1(0x0d), ALL),
    w("sra", "=rt,%ra,%rb", alu1(0x0e), ALL),
    w("rotr", "=rt,%ra,%rb", alu1(0x0f), ALL),
    w("seb", "=rt,%ra", alu1(0x10), ALL),
    w("seh", "=rt,%ra", alu1(0x11), ALL),
    w("bitc", "=rt,%ra,%rb", alu1(0x12), V3),
    w("zeh", "=rt,%ra", alu1(0x13), ALL),
    w("wsbh", "=rt,%ra", alu1(0x14), ALL),
    w("divsr", "=rt,=rd,%ra,%rb", alu1(0x16), DIV | V2UP),
    w("divr", "=rt,=rd,%ra,%rb", alu1(0x17), DIV | V2UP),
    w("sva", "=rt,%ra,%rb", alu1(0x18), ALL),
    w("svs", "=rt,%ra,%rb", alu1(0x19), ALL),
    w("cmovz", "=rt,%ra,%rb", alu1(0x1a), ALL),
    w("cmovn", "=rt,%ra,%rb", alu1(0x1b), ALL),
    w("add_slli", "=rt,%ra,%rb,%sh", alu1(0x00), V3),
    w("sub_slli", "=rt,%ra,%rb,%sh", alu1(0x01), V3),
    w("and_slli", "=rt,%ra,%rb,%sh", alu1(0x02), V3),
    w("xor_slli", "=rt,%ra,%rb,%sh", alu1(0x03), V3),
    w("or_slli", "=rt,%ra,%rb,%sh", alu1(0x04), V3),
    w("or_srli", "=rt,%ra,%rb,%sh", alu1(0x15), V3),
    w("add_srli", "=rt,%ra,%rb,%sh", alu1(0x1c), V3),
    w("sub_srli", "=rt,%ra,%rb,%sh", alu1(0x1d), V3),
    w("and_srli", "=rt,%ra,%rb,%sh", alu1(0x1e), V3),
    w("xor_srli", "=rt,%ra,%rb,%sh", alu1(0x1f), V3),
    // ALU2
    w("max", "=rt,%ra,%rb", alu2(0x00), PERF_EXT),
    w("min", "=rt,%ra,%rb", alu2(0x01), PERF_EXT),
    w("ave", "=rt,%ra,%rb", alu2(0x02), PERF_EXT),
    w("abs", "=rt,%ra", alu2(0x03), PERF_EXT),
    w("clips", "=rt,%ra,%ib5s", alu2(0x04), PERF_EXT),
    w("clip", "=rt,%ra,%ib5u", alu2(0x05), PERF_EXT),
    w("clo", "=rt,%ra", alu2(0x06), PERF_EXT),
    w("clz", "=rt,%ra", alu2(0x07), PERF_EXT),
    w("bset", "=rt,%ra,%ib5u", alu2(0x08), PERF_EXT),
    w("bclr", "=rt,%ra,%ib5u", alu2(0x09), PERF_EXT),
    w("btgl", "=rt,%ra,%ib5u", alu2(0x0a), PERF_EXT),
    w("btst", "=rt,%ra,%ib5u", alu2(0x0b), PERF_EXT),
    w("bse", "=rt,%ra,=rb", alu2(0x0c), PERF2_EXT),
    w("bsp", "=rt,%ra,=rb", alu2(0x0d), PERF2_EXT),
    w("ffb", "=rt,%ra,%rb", alu2(0x0e), STR_EXT),
    w("ffmism", "=rt,%ra,%rb", alu2(0x0f), STR_EXT),
    w("ffzmism", "=rt,%ra,%rb", alu2(0x17), STR_EXT),
    w("mfusr", "=rt,%usr", alu2(0x20), V3MEX_V1),
    w("mtusr", "%rt,%usr", alu2(0x21), V3MEX_V1),
    w("mfusr", "=rt,%ridx", alu2(0x20), V3MEX_V1),
    w("mtusr", "%rt,%ridx", alu2(0x21), V3MEX_V1),
    w("mul", "=rt,%ra,%rb", alu2(0x24), ALL),
    w("mults64", "=dt,%ra,%rb", alu2(0x28), ALL),
    w("mult64", "=dt,%ra,%rb", alu2(0x29), ALL),
    w("madds64", "=dt,%ra,%rb", alu2(0x2a), MAC | ALL),
    w("madd64", "=dt,%ra,%rb", alu2(0x2b), MAC | ALL),
    w("msubs64", "=dt,%ra,%rb", alu2(0x2c), MAC | ALL),
    w("msub64", "=dt,%ra,%rb", alu2(0x2d), MAC | ALL),
    w("divs", "=dt,%ra,%rb", alu2(0x2e), DIV),
    w("div", "=dt,%ra,%rb", alu2(0x2f), DIV),
    w("mult32", "=dt,%ra,%rb", alu2(0x31), ALL),
    w("madd32", "=dt,%ra,%rb", alu2(0x33), MAC | ALL),
    w("msub32", "=dt,%ra,%rb", alu2(0x35), MAC | ALL),
    w("ffbi", "=rt,%ra,%ib5u", alu2(0x0e) | (1 << 6), STR_EXT),
    w("flmism", "=rt,%ra,%rb", alu2(0x0f) | (1 << 6), STR_EXT),
    w("mulsr64", "=rt,%ra,%rb", alu2(0x28) | (1 << 6), V3MEX_V2),
    w("mulr64", "=rt,%ra,%rb", alu2(0x29) | (1 << 6), V3MEX_V2),
    w("maddr32", "=rt,%ra,%rb", alu2(0x33) | (1 << 6), MAC | V2UP),
    w("msubr32", "=rt,%ra,%rb", alu2(0x35) | (1 << 6), MAC | V2UP),
    // MISC
    w("standby", "%stdby_st", misc(0x00), ALL),
    w("cctl", "%ra,%cctl_st0", misc(0x01), V3MEX_V1),
    w("cctl", "%ra,%cctl_st1{,%cctl_lv}", misc(0x01), V3MEX_V1),
    w("cctl", "=rt,%ra,%cctl_st2", misc(0x01), V3MEX_V1),
    w("cctl", "%rt,%ra,%cctl_st3", misc(0x01), V3MEX_V1),
    w("cctl", "%cctl_st4", misc(0x01), V3MEX_V1),
    w("cctl", "%cctl_st5{,%cctl_lv}", misc(0x01), V3),
    w("cctl", "=rt,%ra,%cctl_stx,%cctl_lv", misc(0x01), V3MEX_V1),
    w("mfsr", "=rt,%sr", misc(0x02), ALL),
    w("mtsr", "%rt,%sr", misc(0x03), ALL),
    w("mfsr", "=rt,%ridx", misc(0x02), ALL),
    w("mtsr", "%rt,%ridx", misc(0x03), ALL),
    w("iret", "", misc(0x04), ALL),
    w("trap", "%swid", misc(0x05), V3MEX_V1),
    w("trap", "", misc(0x05), V3MEX_V1),
    w("teqz", "%rt,%swid", misc(0x06), V3MEX_V1),
    w("tnez", "%rt,%swid", misc(0x07), V3MEX_V1),
    w("dsb", "", misc(0x08), ALL),
    w("isb", "", misc(0x09), ALL),
    w("break", "%swid", misc(0x0a), ALL),
    w("break", "", misc(0x0a), ALL),
    w("syscall", "%swid", misc(0x0b), ALL),
    w("msync", "%msync_st", misc(0x0c), ALL),
    w("msync", "%msync_stx", misc(0x0c), ALL),
    w("isync", "%rt", misc(0x0d), ALL),
    w("tlbop", "%ra,%tlbop_st", misc(0x0e), V3MEX_V1),
    w("tlbop", "%ra,%tlbop_stx", misc(0x0e), V3MEX_V1),
    w("tlbop", "%rt,%ra,pb", misc(0x0e) | (5 << 5), V3MEX_V1),
    w("tlbop", "flua", misc(0x0e) | (7 << 5), V3MEX_V1),
    w("setend.l", "", misc(0x03) | ((sridx(1, 0, 0) as u32) << 10) | (1 << 5), ALL),
    w("setend.b", "", misc(0x03) | ((sridx(1, 0, 0) as u32) << 10) | (1 << 5) | (1 << 20), ALL),
    w("setgie.d", "", misc(0x03) | ((sridx(1, 0, 0) as u32) << 10) | (1 << 6), ALL),
    w("setgie.e", "", misc(0x03) | ((sridx(1, 0, 0) as u32) << 10) | (1 << 6) | (1 << 20), ALL),
    // JI
    w("jal", "%i24s1", op6(OP6_JI) | (1 << 24), PCREL | ALL),
    w("j", "%i24s1", op6(OP6_JI), PCREL | ALL),
    // BR1
    w("beq", "%rt,%ra,%i14s1", op6(OP6_BR1), PCREL | ALL),
    w("bne", "%rt,%ra,%i14s1", op6(OP6_BR1) | (1 << 14), PCREL | ALL),
    // BR2
    w("beqz", "%rt,%i16s1", br2(0x2), PCREL | ALL),
    w("bnez", "%rt,%i16s1", br2(0x3), PCREL | ALL),
    w("bgez", "%rt,%i16s1", br2(0x4), PCREL | ALL),
    w("bltz", "%rt,%i16s1", br2(0x5), PCREL | ALL),
    w("bgtz", "%rt,%i16s1", br2(0x6), PCREL | ALL),
    w("blez", "%rt,%i16s1", br2(0x7), PCREL | ALL),
    w("bgezal", "%rt,%i16s1", br2(0xc), PCREL | ALL),
    w("bltzal", "%rt,%i16s1", br2(0xd), PCREL | ALL),
    // BR3
    w("beqc", "%rt,%i11br3,%i8s1", op6(OP6_BR3), PCREL | V3MUP),
    w("bnec", "%rt,%i11br3,%i8s1", op6(OP6_BR3) | (1 << 19), PCREL | V3MUP),
    // JREG
    w("jr", "%rb", jreg(0), BRANCH | ALL),
    w("jral", "%rt,%rb", jreg(1), BRANCH | ALL),
    w("jral", "%rb", jreg(1) | rt(reg::LP), BRANCH | ALL),
    w("jrnez", "%rb", jreg(2), BRANCH | V3),
    w("jralnez", "%rt,%rb", jreg(3), BRANCH | V3),
    w("jralnez", "%rb", jreg(3) | rt(reg::LP), BRANCH | V3),
    w("ret", "%rb", jreg(0) | JREG_RET, BRANCH | ALL),
    w("ret", "", jreg(0) | JREG_RET | rb(reg::LP), BRANCH | ALL),
    w("jral", "%dtiton %rt,%rb", jreg(1), BRANCH | ALL),
    w("jral", "%dtiton %rb", jreg(1) | rt(reg::LP), BRANCH | ALL),
    w("jr", "%dtitoff %rb", jreg(0), BRANCH | V3MEX_V1),
    w("ret", "%dtitoff %rb", jreg(0) | JREG_RET, BRANCH | V3MEX_V1),
    w("ifret", "", jreg(0) | JREG_IFC | JREG_RET, BRANCH | IFC_EXT),
    // MEM
    w("lb", "=rt,[%ra+(%rb<<%sv)]", mem(0x00), ALL),
    w("lb", "=rt,[%ra+%rb{<<%sv}]", mem(0x00), ALL),
    w("lh", "=rt,[%ra+(%rb<<%sv)]", mem(0x01), ALL),
    w("lh", "=rt,[%ra+%rb{<<%sv}]", mem(0x01), ALL),
    w("lw", "=rt,[%ra+(%rb<<%sv)]", mem(0x02), ALL),
    w("lw", "=rt,[%ra+%rb{<<%sv}]", mem(0x02), ALL),
    w("sb", "%rt,[%ra+(%rb<<%sv)]", mem(0x08), ALL),
    w("sb", "%rt,[%ra+%rb{<<%sv}]", mem(0x08), ALL),
    w("sh", "%rt,[%ra+(%rb<<%sv)]", mem(0x09), ALL),
    w("sh", "%rt,[%ra+%rb{<<%sv}]", mem(0x09), ALL),
    w("sw", "%rt,[%ra+(%rb<<%sv)]", mem(0x0a), ALL),
    w("sw", "%rt,[%ra+%rb{<<%sv}]", mem(0x0a), ALL),
    w("lb.bi", "=rt,[%ra],(%rb<<%sv)", mem(0x04), ALL),
    w("lb.bi", "=rt,[%ra],%rb{<<%sv}", mem(0x04), ALL),
    w("lh.bi", "=rt,[%ra],(%rb<<%sv)", mem(0x05), ALL),
    w("lh.bi", "=rt,[%ra],%rb{<<%sv}", mem(0x05), ALL),
    w("lw.bi", "=rt,[%ra],(%rb<<%sv)", mem(0x06), ALL),
    w("lw.bi", "=rt,[%ra],%rb{<<%sv}", mem(0x06), ALL),
    w("sb.bi", "%rt,[%ra],(%rb<<%sv)", mem(0x0c), ALL),
    w("sb.bi", "%rt,[%ra],%rb{<<%sv}", mem(0x0c), ALL),
    w("sh.bi", "%rt,[%ra],(%rb<<%sv)", mem(0x0d), ALL),
    w("sh.bi", "%rt,[%ra],%rb{<<%sv}", mem(0x0d), ALL),
    w("sw.bi", "%rt,[%ra],(%rb<<%sv)", mem(0x0e), ALL),
    w("sw.bi", "%rt,[%ra],%rb{<<%sv}", mem(0x0e), ALL),
    w("lbs", "=rt,[%ra+(%rb<<%sv)]", mem(0x10), ALL),
    w("lbs", "=rt,[%ra+%rb{<<%sv}]", mem(0x10), ALL),
    w("lhs", "=rt,[%ra+(%rb<<%sv)]", mem(0x11), ALL),
    w("lhs", "=rt,[%ra+%rb{<<%sv}]", mem(0x11), ALL),
    w("llw", "=rt,[%ra+(%rb<<%sv)]", mem(0x18), V3MEX_V1),
    w("llw", "=rt,[%ra+%rb{<<%sv}]", mem(0x18), V3MEX_V1),
    w("scw", "%rt,[%ra+(%rb<<%sv)]", mem(0x19), V3MEX_V1),
    w("scw", "%rt,[%ra+%rb{<<%sv}]", mem(0x19), V3MEX_V1),
    w("dpref", "%dpref_st,[%ra+(%rb<<%sv)]", mem(0x13), V3MEX_V1),
    w("dpref", "%dpref_st,[%ra+%rb{<<%sv}]", mem(0x13), V3MEX_V1),
    // GP-relative
    w("lbi.gp", "=rt,[+%i19s]", op6(OP6_LBGP), GPREL | V2UP).uses(reg::GP),
    w("lbsi.gp", "=rt,[+%i19s]", op6(OP6_LBGP) | (1 << 19), GPREL | V2UP).uses(reg::GP),
    w("sbi.gp", "%rt,[+%i19s]", op6(OP6_SBGP), GPREL | V2UP).uses(reg::GP),
    w("addi.gp", "=rt,%i19s", op6(OP6_SBGP) | (1 << 19), GPREL | V2UP).uses(reg::GP),
    w("lhi.gp", "=rt,[+%i18s1]", op6(OP6_HWGP), GPREL | V2UP).uses(reg::GP),
    w("lhsi.gp", "=rt,[+%i18s1]", op6(OP6_HWGP) | (2 << 17), GPREL | V2UP).uses(reg::GP),
    w("shi.gp", "%rt,[+%i18s1]", op6(OP6_HWGP) | (4 << 17), GPREL | V2UP).uses(reg::GP),
    w("lwi.gp", "=rt,[+%i17s2]", op6(OP6_HWGP) | (6 << 17), GPREL | V2UP).uses(reg::GP),
    w("swi.gp", "%rt,[+%i17s2]", op6(OP6_HWGP) | (7 << 17), GPREL | V2UP).uses(reg::GP),
    // LSMW
    w("lmw", "%abdim %rt,[%ra],%rb{,%enb4}", lsmw(0), ALL),
    w("smw", "%abdim %rt,[%ra],%rb{,%enb4}", lsmw(0) | (1 << 5), ALL),
    w("lmwa", "%abdim %rt,[%ra],%rb{,%enb4}", lsmw(1), V3MEX_V2),
    w("smwa", "%abdim %rt,[%ra],%rb{,%enb4}", lsmw(1) | (1 << 5), V3MEX_V2),
    w("lmwzb", "%abm %rt,[%ra],%rb{,%enb4}", lsmw(2), STR_EXT),
    w("smwzb", "%abm %rt,[%ra],%rb{,%enb4}", lsmw(2) | (1 << 5), STR_EXT),
    // Immediate loads and stores
    w("lbi", "=rt,[%ra{+%i15s}]", op6(OP6_LBI), ALL),
    w("lhi", "=rt,[%ra{+%i15s1}]", op6(OP6_LHI), ALL),
    w("lwi", "=rt,[%ra{+%i15s2}]", op6(OP6_LWI), ALL),
    w("lbi.bi", "=rt,[%ra],%i15s", op6(OP6_LBI_BI), ALL),
    w("lhi.bi", "=rt,[%ra],%i15s1", op6(OP6_LHI_BI), ALL),
    w("lwi.bi", "=rt,[%ra],%i15s2", op6(OP6_LWI_BI), ALL),
    w("sbi", "%rt,[%ra{+%i15s}]", op6(OP6_SBI), ALL),
    w("shi", "%rt,[%ra{+%i15s1}]", op6(OP6_SHI), ALL),
    w("swi", "%rt,[%ra{+%i15s2}]", op6(OP6_SWI), ALL),
    w("sbi.bi", "%rt,[%ra],%i15s", op6(OP6_SBI_BI), ALL),
    w("shi.bi", "%rt,[%ra],%i15s1", op6(OP6_SHI_BI), ALL),
    w("swi.bi", "%rt,[%ra],%i15s2", op6(OP6_SWI_BI), ALL),
    w("lbsi", "=rt,[%ra{+%i15s}]", op6(OP6_LBSI), ALL),
    w("lhsi", "=rt,[%ra{+%i15s1}]", op6(OP6_LHSI), ALL),
    w("cplwi", "%cp,=cprt,[%ra{+%i12s2}]", op6(OP6_LWC), 0),
    w("cpswi", "%cp,%cprt,[%ra{+%i12s2}]", op6(OP6_SWC), 0),
    w("flsi", "=fst,[%ra{+%i12s2}]", op6(OP6_LWC), FPU),
    w("fssi", "%fst,[%ra{+%i12s2}]", op6(OP6_SWC), FPU),
    // ALU immediate
    w("movi", "=rt,%i20s", op6(OP6_MOVI), ALL),
    w("sethi", "=rt,%i20u", op6(OP6_SETHI), ALL),
    w("addi", "=rt,%ra,%i15s", op6(OP6_ADDI), ALL),
    w("subri", "=rt,%ra,%i15s", op6(OP6_SUBRI), ALL),
    w("andi", "=rt,%ra,%i15u", op6(OP6_ANDI), ALL),
    w("xori", "=rt,%ra,%i15u", op6(OP6_XORI), ALL),
    w("ori", "=rt,%ra,%i15u", op6(OP6_ORI), ALL),
    w("slti", "=rt,%ra,%i15s", op6(OP6_SLTI), ALL),
    w("sltsi", "=rt,%ra,%i15s", op6(OP6_SLTSI), ALL),
    w("bitci", "=rt,%ra,%i15u", op6(OP6_BITCI), V3),
    w("dprefi.w", "%dpref_st,[%ra{+%i15s2}]", op6(OP6_DPREFI), V3MEX_V1),
    w("dprefi.d", "%dpref_st,[%ra{+%i15s3}]", op6(OP6_DPREFI) | (1 << 24), V3MEX_V1),
    // 16-bit
    h("mov55", "=rt5,%ra5", 0x8000, ALL),
    h("ifret16", "", 0x83ff, IFC_EXT),
    h("movi55", "=rt5,%i5s", 0x8400, ALL),
    h("add45", "=rt4,%ra5", 0x8800, ALL),
    h("sub45", "=rt4,%ra5", 0x8a00, ALL),
    h("addi45", "=rt4,%i5u", 0x8c00, ALL),
    h("subi45", "=rt4,%i5u", 0x8e00, ALL),
    h("srai45", "=rt4,%i5u", 0x9000, ALL),
    h("srli45", "=rt4,%i5u", 0x9200, ALL),
    h("slli333", "=rt3,%ra3,%i3u", 0x9400, ALL),
    h("zeb33", "=rt3,%ra3", 0x9600, ALL),
    h("zeh33", "=rt3,%ra3", 0x9601, ALL),
    h("seb33", "=rt3,%ra3", 0x9602, ALL),
    h("seh33", "=rt3,%ra3", 0x9603, ALL),
    h("xlsb33", "=rt3,%ra3", 0x9604, ALL),
    h("x11b33", "=rt3,%ra3", 0x9605, ALL),
    h("bmski33", "=rt3,%ia3u", 0x9606, V3MUP),
    h("fexti33", "=rt3,%ia3u", 0x9607, V3MUP),
    h("add333", "=rt3,%ra3,%rb3", 0x9800, ALL),
    h("sub333", "=rt3,%ra3,%rb3", 0x9a00, ALL),
    h("addi333", "=rt3,%ra3,%i3u", 0x9c00, ALL),
    h("subi333", "=rt3,%ra3,%i3u", 0x9e00, ALL),
    h("lwi333", "=rt3,[%ra3{+%i3u2}]", 0xa000, ALL),
    h("lwi333.bi", "=rt3,[%ra3],%i3u2", 0xa200, ALL),
    h("lhi333", "=rt3,[%ra3{+%i3u1}]", 0xa400, ALL),
    h("lbi333", "=rt3,[%ra3{+%i3u}]", 0xa600, ALL),
    h("swi333", "%rt3,[%ra3{+%i3u2}]", 0xa800, ALL),
    h("swi333.bi", "%rt3,[%ra3],%i3u2", 0xaa00, ALL),
    h("shi333", "%rt3,[%ra3{+%i3u1}]", 0xac00, ALL),
    h("sbi333", "%rt3,[%ra3{+%i3u}]", 0xae00, ALL),
    h("addri36.sp", "%rt3,%i6u2", 0xb000, V3MUP).uses(reg::SP),
    h("lwi45.fe", "=rt4,%fe5", 0xb200, V3MUP).uses(reg::R8),
    h("lwi450", "=rt4,[%ra5]", 0xb400, ALL),
    h("swi450", "%rt4,[%ra5]", 0xb600, ALL),
    h("lwi37", "=rt38,[$fp{+%i7u2}]", 0xb800, ALL).uses(reg::FP),
    h("swi37", "%rt38,[$fp{+%i7u2}]", 0xb880, ALL).uses(reg::FP),
    h("beqz38", "%rt38,%i8s1", 0xc000, PCREL | ALL),
    h("bnez38", "%rt38,%i8s1", 0xc800, PCREL | ALL),
    h("beqs38", "%rt38,%i8s1", 0xd000, PCREL | ALL).uses(reg::R5),
    h("j8", "%i8s1", 0xd500, PCREL | ALL),
    h("bnes38", "%rt38,%i8s1", 0xd800, PCREL | ALL).uses(reg::R5),
    h("jr5", "%ra5", 0xdd00, ALL),
    h("ex9.it", "%i5u", 0xdd40, EX9_EXT),
    h("ret5", "%ra5", 0xdd80, ALL),
    h("ret5", "", 0xdd80 | reg::LP, ALL),
    h("jral5", "%ra5", 0xdd20, ALL),
    h("add5.pc", "%ra5", 0xdda0, V3),
    h("slts45", "%rt4,%ra5", 0xe000, ALL).defs(reg::TA),
    h("slt45", "%rt4,%ra5", 0xe200, ALL).defs(reg::TA),
    h("sltsi45", "%rt4,%i5u", 0xe400, ALL).defs(reg::TA),
    h("slti45", "%rt4,%i5u", 0xe600, ALL).defs(reg::TA),
    h("beqzs8", "%i8s1", 0xe800, PCREL | ALL).uses(reg::R5),
    h("bnezs8", "%i8s1", 0xe900, PCREL | ALL).uses(reg::R5),
    h("ex9.it", "%i9u", 0xea00, EX9_EXT),
    h("break16", "%i9u", 0xea00, ALL),
    h("addi10.sp", "%i10s", 0xec00, V2UP).uses(reg::SP).defs(reg::SP),
    h("lwi37.sp", "=rt38,[+%i7u2]", 0xf000, V2UP).uses(reg::SP),
    h("swi37.sp", "%rt38,[+%i7u2]", 0xf080, V2UP).uses(reg::SP),
    h("ifcall9", "%i9u1", 0xf800, IFC_EXT),
    h("movpi45", "=rt4,%pi5", 0xfa00, V3MUP),
    h("push25", "%re2,%i5u3", 0xfc00, V3MUP).uses(reg::SP).defs(reg::SP),
    h("pop25", "%re2,%i5u3", 0xfc80, V3MUP).uses(reg::SP).defs(reg::SP),
    h("movd44", "=rt5e,%ra5e", 0xfd00, V3MUP),
    h("neg33", "=rt3,%ra3", 0xfe02, V3MUP),
    h("not33", "=rt3,%ra3", 0xfe03, V3MUP),
    h("mul33", "=rt3,%ra3", 0xfe04, V3MUP),
    h("xor33", "=rt3,%ra3", 0xfe05, V3MUP),
    h("and33", "=rt3,%ra3", 0xfe06, V3MUP),
    h("or33", "=rt3,%ra3", 0xfe07, V3MUP),
    // Aliases
    w("neg", "=rt,%ra", op6(OP6_SUBRI), ALL),
    w("zeb", "=rt,%ra", op6(OP6_ANDI) | 0xff, ALL),
    w("nop", "", alu1(0x09), ALL),
    h("nop16", "", 0x9200, ALL),
];

/// The complete NDS32 description.
pub static DESCRIPTION: IsaDescription = IsaDescription {
    fields: FIELDS,
    keywords: KEYWORDS,
    opcodes: OPCODES,
};

/// An engine over [`DESCRIPTION`] with default options.
pub fn engine() -> Engine {
    Engine::new(&DESCRIPTION, EncodeOptions::default())
}
