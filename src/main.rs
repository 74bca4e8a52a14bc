fn main() {
    if let Err(err) = seqflow::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
