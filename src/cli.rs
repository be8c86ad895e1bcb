use crate::resume;
use crate::types::FileId;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Probe file discovery for flash storage verification
#[derive(Parser, Debug, Clone)]
#[command(name = "flashprobe")]
#[command(version)]
#[command(about = "Find and order the probe files written to a flash drive", long_about = None)]
pub struct Args {
    /// Verbose logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the probe files in a directory, in order
    List {
        /// Directory holding the probe files
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Skip files numbered below NUM (1-based)
        #[arg(long = "start-at", value_name = "NUM", allow_hyphen_values = true)]
        start_at: Option<String>,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the path of probe file NUMBER (1-based)
    Path {
        /// Directory holding the probe files
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        #[arg(value_name = "NUMBER")]
        number: u64,
    },
}

impl Args {
    /// Validate the arguments
    pub fn validate(&self) -> Result<(), String> {
        if self.dir().as_os_str().is_empty() {
            return Err("Directory path cannot be empty".to_string());
        }

        if let Command::Path { number, .. } = &self.command {
            if *number == 0 {
                return Err("File numbers start at 1".to_string());
            }
        }

        Ok(())
    }

    pub fn dir(&self) -> &Path {
        match &self.command {
            Command::List { dir, .. } | Command::Path { dir, .. } => dir.as_path(),
        }
    }

    /// Resume threshold from `--start-at`; rejected values disable resuming.
    pub fn start_at(&self) -> Option<FileId> {
        match &self.command {
            Command::List {
                start_at: Some(value),
                ..
            } => resume::parse_start_at_value(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_list_args() {
        let args = parse(&["flashprobe", "list", "/mnt/usb", "--start-at", "5", "--json"]);
        assert!(args.validate().is_ok());
        assert_eq!(args.dir(), Path::new("/mnt/usb"));
        assert_eq!(args.start_at(), Some(FileId(4)));
        assert!(matches!(args.command, Command::List { json: true, .. }));
    }

    #[test]
    fn test_start_at_forms() {
        let args = parse(&["flashprobe", "list", "/mnt/usb", "--start-at=3"]);
        assert_eq!(args.start_at(), Some(FileId(2)));

        let args = parse(&["flashprobe", "list", "/mnt/usb", "--start-at", "-2"]);
        assert_eq!(args.start_at(), None);

        let args = parse(&["flashprobe", "list", "/mnt/usb"]);
        assert_eq!(args.start_at(), None);
    }

    #[test]
    fn test_invalid_path_number() {
        let args = parse(&["flashprobe", "path", "/mnt/usb", "0"]);
        assert!(args.validate().is_err());

        let args = parse(&["flashprobe", "path", "/mnt/usb", "1"]);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_empty_dir() {
        let args = Args {
            verbose: true,
            command: Command::List {
                dir: PathBuf::new(),
                start_at: None,
                json: false,
            },
        };
        assert!(args.validate().is_err());
    }
}
