fn main() {
    if let Err(err) = movie_reports::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
