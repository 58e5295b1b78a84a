use std::path::PathBuf;

use crate::config::app::Paths;
use crate::consts::{DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_DIR};

pub fn default_source_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_DIR)
}

pub fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

pub fn default_paths() -> Paths {
    Paths {
        source_dir: default_source_dir(),
        output: default_output(),
    }
}
