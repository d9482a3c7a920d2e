use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use filekit_core::utils::fs::EntryFilter;
use filekit_core::utils::{extension, path_extension, path_file_name};
use filekit_core::{
    FsConfig, Result, copy_file, current_resource_path, delete, file_hash, list_files,
    list_files_recursive, read_lines, to_cygwin_path, to_windows_path, try_relative_string,
};

/// Filekit: filesystem helpers for build tooling
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Configuration file (.json, .yaml/.yml or .toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the SHA-1 of a file
    Hash { file: PathBuf },
    /// Copy a file, replacing the target
    Copy { from: PathBuf, to: PathBuf },
    /// Recursively delete a file or directory
    Delete { path: PathBuf },
    /// Print a file line by line
    Lines { file: PathBuf },
    /// Print the base name and extension of a path
    Name { path: PathBuf },
    /// Convert a path for a Cygwin command line
    Cygwin { path: String },
    /// Convert a path for a Windows command line
    Windows { path: String },
    /// Print a path relative to a base directory
    Relative { base: PathBuf, path: PathBuf },
    /// List the entries of a directory
    List {
        dir: PathBuf,
        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
        /// Only show entries with this extension
        #[arg(long)]
        ext: Option<String>,
    },
    /// Create a persistent temp file and print its path
    TempFile {
        /// Extension without the leading dot
        #[arg(long, default_value = "")]
        suffix: String,
    },
    /// Create a persistent temp directory and print its path
    TempDir,
    /// Print the location of this executable
    Resource,
}

pub fn run(args: CliArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => FsConfig::load(path)?,
        None => FsConfig::default(),
    };

    match args.command {
        Commands::Hash { file } => println!("{}  {}", file_hash(&file)?, file.display()),
        Commands::Copy { from, to } => {
            let bytes = copy_file(&from, &to)?;
            println!("copied {} bytes", bytes);
        }
        Commands::Delete { path } => delete(&path)?,
        Commands::Lines { file } => {
            for line in read_lines(&file)? {
                println!("{}", line);
            }
        }
        Commands::Name { path } => {
            println!("name: {}", path_file_name(&path));
            println!("extension: {}", path_extension(&path).unwrap_or_default());
        }
        Commands::Cygwin { path } => println!("{}", to_cygwin_path(&path)),
        Commands::Windows { path } => println!("{}", to_windows_path(&path)),
        Commands::Relative { base, path } => println!("{}", try_relative_string(&base, &path)),
        Commands::List { dir, recursive, ext } => list(&dir, recursive, ext.as_deref())?,
        Commands::TempFile { suffix } => {
            println!("{}", config.temp_space().new_temp_file(&suffix)?.display())
        }
        Commands::TempDir => println!("{}", config.temp_space().new_temp_dir()?.display()),
        Commands::Resource => println!("{}", current_resource_path()?.display()),
    }
    Ok(())
}

fn list(dir: &Path, recursive: bool, ext: Option<&str>) -> Result<()> {
    let matches_ext = |p: &Path| match ext {
        Some(wanted) => p
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(extension)
            .is_some_and(|e| e.eq_ignore_ascii_case(wanted)),
        None => true,
    };
    let filter: EntryFilter<'_> = &matches_ext;

    let entries = if recursive {
        list_files_recursive(dir, Some(filter))
    } else {
        list_files(dir, Some(filter))?
    };
    for entry in entries {
        println!("{}", entry.relative().display());
    }
    Ok(())
}
