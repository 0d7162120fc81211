#![no_main]

use libfuzzer_sys::fuzz_target;
use postboard_cli::Command;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    for line in text.lines() {
        let _ = Command::parse(line);
    }
});
