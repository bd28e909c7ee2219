//! EventHub storefront - Dioxus app over in-memory demo data.
//! Default: web (cargo run). Desktop: cargo run --features desktop.

#[cfg(feature = "desktop")]
fn main() {
    use dioxus::prelude::*;
    use eventhub_frontend::app::App;
    launch(App);
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
fn main() {
    // Wasm builds need reference-types disabled or wasm-bindgen fails with
    // "failed to find intrinsics to enable clone_ref" (Rust 1.82+ default).
    // dx may not forward env to the cargo child it spawns, so set RUSTFLAGS in
    // the same shell that execs it.
    let mut rustflags = std::env::var("RUSTFLAGS").unwrap_or_default();
    if !rustflags.is_empty() {
        rustflags.push(' ');
    }
    rustflags.push_str("-C target-feature=-reference-types");

    let command = format!(
        "export RUSTFLAGS='{}'; exec dx serve",
        rustflags.replace('\'', "'\"'\"'")
    );
    match std::process::Command::new("sh").args(["-c", &command]).status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {}", e);
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            eprintln!("Or run directly: RUSTFLAGS='-C target-feature=-reference-types' dx serve");
            std::process::exit(1);
        }
    }
}
