//! Spotify Image Downloader Library
//!
//! This library resolves a Spotify resource URL or URI to the images Spotify
//! publishes for it, picks the largest rendition and saves it to disk. Client
//! credentials are kept in a small key/value file so they only have to be
//! passed on the first run.
//!
//! # Modules
//!
//! - `cli` - Command implementations wired up by the binary
//! - `config` - Credential file location and API endpoint configuration
//! - `error` - The crate-wide error type
//! - `management` - Credential persistence and output file handling
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Identifier parsing, image ranking and helpers
//!
//! # Example
//!
//! ```
//! use spotify_image_downloader::utils;
//!
//! let reference = utils::resolve("spotify:album:4aawyAB9vmqN3uQ7FjRGTy")?;
//! assert_eq!(reference.id, "4aawyAB9vmqN3uQ7FjRGTy");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the crate reports one of the [`Error`]
/// variants, so the binary can print a single human-readable message and
/// stop without a backtrace.
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching images for {}", reference);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Saved image to {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing, so it is
/// only used at the top level of the binary.
///
/// # Example
///
/// ```
/// error!("{}", err);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Credentials were not saved: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
