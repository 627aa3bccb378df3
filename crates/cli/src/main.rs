//! AdPilot CLI entry point.

fn main() {
    if let Err(e) = adpilot_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
