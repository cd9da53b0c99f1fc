fn main() {
    if let Err(err) = ai_humanities_diagrams::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
