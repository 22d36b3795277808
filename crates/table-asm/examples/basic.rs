//! Basic encoding example demonstrating the one-shot and engine APIs.
//!
//! Run with: `cargo run --example basic`
//! Set `RUST_LOG=table_asm=trace` to watch rejected operand combinations.

use table_asm::{attr, nds32, EncodeError, EncodeOptions, Engine, Literals};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== table_asm basic example ===\n");

    // --- One-shot encoding ---
    println!("1. One-shot encoding (add r0,r1,r2):");
    let add = table_asm::encode("add r0,r1,r2").unwrap();
    print_insn("   ", "add r0,r1,r2", &add);

    // --- Reusable engine ---
    println!("\n2. Engine over a short routine:");
    let engine = nds32::engine();
    let source = r#"
        push25 r6,8
        lwi r0,[r1+8]
        lmw.bim r2,[r1],r3,0xf
        mfsr r4,psw
        add45 r16,r1
        beqz r0,.Ldone
        pop25 r6,8
    "#;
    for line in source.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match engine.encode(line) {
            Ok(insn) => print_insn("   ", line, &insn),
            Err(e) => println!("   {line:<28} error: {e}"),
        }
    }

    // --- Named constants ---
    println!("\n3. Named constants:");
    let resolver = Literals::new().with_constant("FRAME", 16);
    let engine = Engine::with_resolver(&nds32::DESCRIPTION, EncodeOptions::default(), resolver);
    let line = "addi sp,sp,-FRAME";
    print_insn("   ", line, &engine.encode(line).unwrap());

    // --- Configurations ---
    println!("\n4. Microcontroller profile with reduced registers:");
    let v3m = Engine::new(
        &nds32::DESCRIPTION,
        EncodeOptions::default()
            .isa(attr::V3M)
            .reduced_registers(true),
    );
    for line in ["add r0,r1,r2", "add r0,r1,r20", "mfusr r0,pc"] {
        match v3m.encode(line) {
            Ok(insn) => print_insn("   ", line, &insn),
            Err(EncodeError::UnknownMnemonic { mnemonic }) => {
                println!("   {line:<28} not available: {mnemonic}")
            }
            Err(e) => println!("   {line:<28} error: {e}"),
        }
    }

    println!("\n=== Done! ===");
}

fn print_insn(prefix: &str, line: &str, insn: &table_asm::EncodedInsn) {
    print!("{prefix}{line:<28} ");
    for b in insn.to_be_bytes() {
        print!("{:02X} ", b);
    }
    if let Some(field) = insn.fixup {
        print!(" [fixup {}]", field.name);
    }
    println!();
}
