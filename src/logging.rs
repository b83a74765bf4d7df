use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::path::Path;

/// Send log messages at `level` and above to the file at `path`, appending
/// to any existing contents.  The terminal belongs to the game, so nothing
/// is ever logged to stdout or stderr.
///
/// If the file cannot be opened, the program continues without logging.
pub(crate) fn init(path: Option<&Path>, level: LevelFilter) {
    let Some(path) = path else {
        return;
    };
    let file = match open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("snakebite: logging disabled: {e}");
            return;
        }
    };
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    if WriteLogger::init(level, config, file).is_ok() {
        log::info!("snakebite {} starting", env!("CARGO_PKG_VERSION"));
    }
}

fn open(path: &Path) -> std::io::Result<fs_err::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}
