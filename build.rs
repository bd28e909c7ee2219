// Desktop builds on Linux need libxdo at link time; fail early with install hints.

fn main() {
    if std::env::var("CARGO_FEATURE_DESKTOP").is_err() {
        return;
    }
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("linux") {
        return;
    }

    // libxdo may ship without a .pc file, so fall back to scanning ldconfig.
    let found = std::process::Command::new("pkg-config")
        .args(["--exists", "libxdo"])
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
        || std::process::Command::new("ldconfig")
            .arg("-p")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).contains("libxdo"))
            .unwrap_or(false);

    if !found {
        eprintln!();
        eprintln!("  error: the desktop feature on Linux requires libxdo.");
        eprintln!();
        eprintln!("    Debian/Ubuntu: sudo apt install libxdo-dev");
        eprintln!("    Fedora/RHEL:   sudo dnf install libxdo-devel");
        eprintln!();
        eprintln!("  Then rerun: cargo run --features desktop");
        eprintln!();
        std::process::exit(1);
    }
}
