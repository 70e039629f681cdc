fn main() {
    if let Err(e) = pman::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
