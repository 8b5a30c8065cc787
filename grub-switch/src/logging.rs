use env_logger::Target;
use std::fs;
use std::path::PathBuf;

pub fn init_with(log_file: Option<PathBuf>) {
    // If the requested log file cannot be opened (permissions, readonly FS, etc.),
    // fall back to stderr.
    let target = log_file
        .and_then(|path| {
            fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        })
        .map(|file| Target::Pipe(Box::new(file)))
        .unwrap_or(Target::Stderr);

    // Keep the interactive prompt clean unless RUST_LOG asks for more.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .target(target)
        .init();
}
