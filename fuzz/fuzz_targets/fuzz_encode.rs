#![no_main]
use libfuzzer_sys::fuzz_target;

use table_asm::{attr, nds32, EncodeOptions, Engine};

fuzz_target!(|data: &str| {
    // Must never panic, only return Ok/Err.
    let engine = nds32::engine();
    for line in data.lines() {
        let _ = engine.encode(line);
    }
    let _ = engine.encode_many(data);

    // Reduced registers on the microcontroller profile.
    let v3m = Engine::new(
        &nds32::DESCRIPTION,
        EncodeOptions::default()
            .isa(attr::V3M)
            .reduced_registers(true),
    );
    for line in data.lines() {
        let _ = v3m.encode(line);
    }
});
