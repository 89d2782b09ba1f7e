use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Name of the log file inside the data directory
pub const LOG_FILE_NAME: &str = "tariffsweep.log";

const ROTATION_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// Size limits for the log file, applied once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogRotation {
    /// Rotate when the file grows past this many bytes
    max_size: u64,
    /// Bytes of the newest entries kept after rotating
    keep_size: u64,
}

impl Default for LogRotation {
    fn default() -> Self {
        Self {
            max_size: 5 * 1024 * 1024,
            keep_size: 1024 * 1024,
        }
    }
}

impl LogRotation {
    /// Truncate `path` to its newest `keep_size` bytes if it is over
    /// `max_size`. The kept tail starts at a line boundary. Returns whether
    /// the file was rotated.
    fn apply(&self, path: &Path) -> io::Result<bool> {
        let len = match fs::metadata(path) {
            Ok(metadata) => metadata.len(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(err) => return Err(err),
        };
        if len <= self.max_size {
            return Ok(false);
        }

        let mut tail = Vec::new();
        let mut file = File::open(path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(self.keep_size)))?;
        file.read_to_end(&mut tail)?;
        drop(file);

        let line_start = tail.iter().position(|&b| b == b'\n').map_or(0, |i| i + 1);

        let mut file = File::create(path)?;
        file.write_all(ROTATION_MARKER)?;
        file.write_all(&tail[line_start..])?;
        Ok(true)
    }
}

/// Filter directive used when `RUST_LOG` is not set
fn default_filter(level: &str) -> String {
    format!("tariffsweep={level},tariffsweep_core=warn")
}

/// Route `tracing` output to `{data_dir}/tariffsweep.log`.
///
/// The chart view owns the terminal, so nothing is logged to stdout or
/// stderr. `RUST_LOG` takes precedence over `level`. Returns the log path.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE_NAME);

    let rotated = match LogRotation::default().apply(&log_path) {
        Ok(rotated) => rotated,
        Err(e) => {
            eprintln!("Warning: Failed to rotate log file: {e}");
            false
        }
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(log_path = %log_path.display(), rotated, "tariffsweep logging initialized");
    Ok(log_path)
}
