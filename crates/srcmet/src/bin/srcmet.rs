fn main() {
    if let Err(err) = srcmet::run() {
        eprintln!("{}", srcmet::format_error(&err));
        std::process::exit(1);
    }
}
