use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;

pub const ENV_DATA_DIR: &str = "TATOOLKIT_DATA_DIR";
const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "tatoolkit";
const APPLICATION: &str = "tatoolkit";

/// Resolve the base directory for everything the toolkit writes.
pub fn data_dir() -> io::Result<PathBuf> {
    let path = determine_data_dir()?;
    fs::create_dir_all(&path)?;
    Ok(path)
}

/// Directory holding the rolling diagnostic logs.
pub fn log_dir() -> io::Result<PathBuf> {
    Ok(data_dir()?.join("logs"))
}

fn determine_data_dir() -> io::Result<PathBuf> {
    // Priority 1: Explicit environment variable override
    if let Some(env_dir) = env::var_os(ENV_DATA_DIR) {
        if !env_dir.is_empty() {
            return Ok(PathBuf::from(env_dir));
        }
    }

    // Priority 2: OS-standard application data directory
    if let Some(project_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        return Ok(project_dirs.data_local_dir().to_path_buf());
    }

    Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("Could not determine data directory. Please set {ENV_DATA_DIR}."),
    ))
}
