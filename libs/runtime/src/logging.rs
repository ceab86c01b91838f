use crate::config::LoggingConfig;
use std::{
    io::Write,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use file_rotate::{compression::Compression, suffix::AppendCount, ContentLimit, FileRotate};

fn parse_level(s: &str) -> Option<Level> {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        "off" | "none" => None,
        _ => Some(Level::INFO),
    }
}

// -------- rotating writer for files --------
#[derive(Clone)]
struct RotWriter(Arc<Mutex<FileRotate<AppendCount>>>);

impl<'a> fmt::MakeWriter<'a> for RotWriter {
    type Writer = RotWriterHandle;
    fn make_writer(&'a self) -> Self::Writer {
        RotWriterHandle(self.0.clone())
    }
}

#[derive(Clone)]
struct RotWriterHandle(Arc<Mutex<FileRotate<AppendCount>>>);

impl Write for RotWriterHandle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.lock().unwrap().flush()
    }
}

/// Resolve a log file path against `base_dir` (home_dir).
/// Absolute paths are kept as-is; relative paths are joined with `base_dir`.
fn resolve_log_path(file: &str, base_dir: &Path) -> PathBuf {
    let p = Path::new(file);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}

/// Create a rotating writer, ensuring the parent directory exists.
fn create_rotating_writer(
    log_path: &Path,
    max_bytes: usize,
    max_backups: usize,
) -> Result<RotWriter, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let rot = FileRotate::new(
        log_path,
        AppendCount::new(max_backups),
        ContentLimit::BytesSurpassed(max_bytes),
        Compression::None,
        #[cfg(unix)]
        None, // file permissions (Unix only)
    );

    Ok(RotWriter(Arc::new(Mutex::new(rot))))
}

/// Initialize logging from a configuration.
/// - `cfg`: console level plus an optional rotating log file
/// - `base_dir`: base directory used to resolve relative log file paths (usually server.home_dir)
pub fn init_logging_from_config(cfg: &LoggingConfig, base_dir: &Path) {
    let console_filter = parse_level(&cfg.console_level)
        .map(LevelFilter::from_level)
        .unwrap_or(LevelFilter::OFF);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_filter(console_filter)
        .boxed();

    let mut layers = vec![console_layer];

    if !cfg.file.trim().is_empty() {
        let file_filter = if cfg.file_level.trim().is_empty() {
            console_filter
        } else {
            parse_level(&cfg.file_level)
                .map(LevelFilter::from_level)
                .unwrap_or(LevelFilter::OFF)
        };

        let max_bytes = cfg.max_size_mb.unwrap_or(100).saturating_mul(1024 * 1024);
        let log_path = resolve_log_path(&cfg.file, base_dir);

        match create_rotating_writer(&log_path, max_bytes as usize, cfg.max_backups.unwrap_or(3)) {
            Ok(writer) => {
                let file_layer = fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(writer)
                    .with_filter(file_filter)
                    .boxed();
                layers.push(file_layer);
            }
            Err(e) => {
                eprintln!(
                    "Failed to initialize log file '{}': {}",
                    log_path.to_string_lossy(),
                    e
                );
            }
        }
    }

    let _ = tracing_subscriber::registry().with(layers).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(parse_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_level("warn"), Some(Level::WARN));
        assert_eq!(parse_level("off"), None);
        // Unknown strings fall back to info rather than failing startup
        assert_eq!(parse_level("verbose"), Some(Level::INFO));
    }

    #[test]
    fn resolves_relative_log_paths() {
        let base = Path::new("/var/lib/wardrobe");
        assert_eq!(
            resolve_log_path("logs/wardrobe.log", base),
            PathBuf::from("/var/lib/wardrobe/logs/wardrobe.log")
        );
        assert_eq!(
            resolve_log_path("/tmp/w.log", base),
            PathBuf::from("/tmp/w.log")
        );
    }
}
