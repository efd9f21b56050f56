// src/services/snapshot.rs
// On-demand export of the current drawing: asks nannou to capture the
// next window frame into a timestamped image file.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use nannou::window::Window;

const SNAPSHOT_EXT: &str = "png";

pub struct SnapshotWriter {
    output_dir: PathBuf,
    prefix: String,
}

impl SnapshotWriter {
    pub fn new(output_dir: PathBuf, prefix: &str) -> Self {
        // Ensure output directory exists
        std::fs::create_dir_all(&output_dir).expect("Failed to create output directory");

        Self {
            output_dir,
            prefix: prefix.to_string(),
        }
    }

    /// Queue a capture of the window's next frame. Returns the path the
    /// image will be written to.
    pub fn save(&self, window: &Window) -> PathBuf {
        let path = self
            .output_dir
            .join(timestamped_name(&self.prefix, Local::now()));
        window.capture_frame(&path);
        path
    }
}

fn timestamped_name(prefix: &str, now: DateTime<Local>) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        now.format("%Y%m%d_%H%M%S"),
        SNAPSHOT_EXT
    )
}
