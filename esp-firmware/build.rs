// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

fn main() {
    // Hilfreiche Hinweise bei Linker-Fehlern
    linker_be_nice();

    // defmt.x - Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // linkall.x - ESP32 Memory-Layout, muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Wird vom Linker als "--error-handling-script" mit Fehler-Typ und Symbol aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        let hint = match (args[1].as_str(), args[2].as_str()) {
            ("undefined-symbol", what) if what.starts_with("_defmt_") => Some(
                "`defmt` not found - make sure `defmt.x` is added as a linker script and esp-println uses the `defmt-espflash` feature",
            ),
            ("undefined-symbol", "_stack_start") => {
                Some("Is the linker script `linkall.x` missing?")
            }
            ("undefined-symbol", what) if what.starts_with("esp_rtos_") => {
                Some("`esp_rtos::start` was not called before spawning tasks")
            }
            ("undefined-symbol", "malloc" | "free" | "calloc") => {
                Some("Did you forget `esp_alloc::heap_allocator!` in main?")
            }
            ("undefined-symbol", _) => None,
            _ => std::process::exit(1),
        };

        if let Some(hint) = hint {
            eprintln!();
            eprintln!("💡 {hint}");
            eprintln!();
        }
        std::process::exit(0);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
