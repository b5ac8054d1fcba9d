//! FILENAME: app/server/src/main.rs
// PURPOSE: Service entry point with unified logging.
// FORMAT: seq|level|category|message

fn main() {
    if let Err(e) = calc_service::run() {
        eprintln!("[SYS] FAILED: {}", e);
        std::process::exit(1);
    }
}
