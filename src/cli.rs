//! Command-line argument parsing
//!
//! Supports:
//! - Opening a fiddle folder
//! - Starting from the template, ignoring any folder given

use clap::Parser;
use std::path::PathBuf;

/// A playground for small Electron experiments
#[derive(Parser, Debug)]
#[command(name = "fiddle", version, about = "Compose and save small Electron fiddles")]
pub struct CliArgs {
    /// Fiddle folder to open
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Start from the template
    #[arg(short = 'n', long)]
    pub new: bool,
}

/// What to show at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// The configured template
    Template,
    /// The fiddle saved in this folder
    Project(PathBuf),
}

impl CliArgs {
    /// Convert parsed CLI args into a startup mode
    pub fn into_mode(self) -> Result<StartupMode, String> {
        match self.path {
            Some(_) if self.new => Ok(StartupMode::Template),
            Some(path) if path.is_dir() => Ok(StartupMode::Project(path)),
            Some(path) if path.exists() => {
                Err(format!("{} is not a folder", path.display()))
            }
            Some(path) => Err(format!("{} does not exist", path.display())),
            None => Ok(StartupMode::Template),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_no_args_gives_template() {
        let args = CliArgs::parse_from(["fiddle"]);
        assert_eq!(args.into_mode().unwrap(), StartupMode::Template);
    }

    #[test]
    fn test_new_flag_ignores_path() {
        let args = CliArgs::parse_from(["fiddle", "--new", "/does/not/exist"]);
        assert_eq!(args.into_mode().unwrap(), StartupMode::Template);
    }

    #[test]
    fn test_folder_opens_project() {
        let dir = TempDir::new().unwrap();
        let args = CliArgs {
            path: Some(dir.path().to_path_buf()),
            new: false,
        };
        assert_eq!(
            args.into_mode().unwrap(),
            StartupMode::Project(dir.path().to_path_buf())
        );
    }

    #[test]
    fn test_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("main.js");
        std::fs::write(&file, "").unwrap();
        let args = CliArgs {
            path: Some(file),
            new: false,
        };
        assert!(args.into_mode().unwrap_err().contains("is not a folder"));
    }

    #[test]
    fn test_missing_path_is_rejected() {
        let args = CliArgs::parse_from(["fiddle", "/does/not/exist"]);
        assert!(args.into_mode().is_err());
    }
}
