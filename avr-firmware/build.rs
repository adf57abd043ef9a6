// Build-Script: Wird vor dem Kompilieren ausgeführt
// Reicht optionale Konfigurations-Overrides aus .env an den Compiler weiter

/// Environment-Variablen die zur Compile-Zeit eingebacken werden
/// (siehe src/config.rs, Parsing via avr_core::parse_decimal)
const CONFIG_VARS: [&str; 2] = ["AVR_BAUD_RATE", "AVR_PWM_DUTY_PERCENT"];

fn main() {
    // Lade .env file für Overrides
    // Fehler ignorieren wenn .env nicht existiert (dann gelten die Defaults aus config.rs)
    if let Err(e) = dotenvy::dotenv() {
        println!("cargo:warning=.env file nicht gefunden ({}), nutze Defaults", e);
    }

    // Gebe Overrides an Rust-Compiler weiter
    // Die Werte werden zur Compile-Zeit in den Code eingebacken
    for var in CONFIG_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
        if let Ok(value) = std::env::var(var) {
            println!("cargo:rustc-env={}={}", var, value.trim());
        }
    }

    println!("cargo:rerun-if-changed=.env");
}
