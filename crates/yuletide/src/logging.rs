//! File logging. The terminal belongs to the UI, so log records go to a file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;

/// Open (or create) the log file at `path` for appending.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Logger builder writing plain records at `level` into `file`.
fn builder(level: LevelFilter, file: File) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_millis()
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(Box::new(file)));
    builder
}

/// Install the file logger. Logging stays off when the level is `Off`, there
/// is no log path, or the file cannot be opened.
pub fn init(level: LevelFilter, path: Option<&Path>) {
    if level == LevelFilter::Off {
        return;
    }
    let Some(path) = path else {
        return;
    };
    let Ok(file) = open_log_file(path) else {
        return;
    };
    let _ = builder(level, file).try_init();
}

#[cfg(test)]
mod tests {
    use log::{Level, Log, Record};

    use super::*;

    fn record(level: Level, message: std::fmt::Arguments<'_>, logger: &impl Log) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("yuletide")
                .args(message)
                .build(),
        );
    }

    #[test]
    fn test_logger_writes_enabled_records_only() {
        let path = std::env::temp_dir()
            .join(format!("yuletide-log-test-{}", std::process::id()))
            .join("yuletide.log");
        let _ = fs::remove_file(&path);

        let file = open_log_file(&path).unwrap();
        let logger = builder(LevelFilter::Info, file).build();
        record(Level::Info, format_args!("card revealed"), &logger);
        record(Level::Debug, format_args!("frame tick"), &logger);
        logger.flush();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("INFO"));
        assert!(text.contains("card revealed"));
        assert!(!text.contains("frame tick"));
        assert!(!text.contains('\u{1b}'));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unopenable_path_disables_logging() {
        let dir = std::env::temp_dir().join(format!("yuletide-log-dir-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        assert!(open_log_file(&dir).is_err());
        init(LevelFilter::Info, Some(&dir));
        let _ = fs::remove_dir(&dir);
    }
}
