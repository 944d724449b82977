use colored::Colorize;
use std::fmt;
use std::process;
use yarrrml_fed_mapping::MappingError;

pub const EXIT_ERROR: i32 = 1;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Bad file path, unreadable input, YAML parse failure.
    Input(String),
    /// Malformed mapping document.
    Mapping(MappingError),
    /// Report rendering failure.
    Render(String),
}

pub type CliResult<T> = Result<T, CliError>;

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Mapping(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Render(msg) => write!(f, "{} {msg}", "error:".red().bold()),
        }
    }
}

impl From<MappingError> for CliError {
    fn from(err: MappingError) -> CliError {
        CliError::Mapping(err)
    }
}

/// Print the error to stderr and exit with a failure code.
pub fn exit_with_error(e: CliError) -> ! {
    eprintln!("{e}");
    process::exit(EXIT_ERROR)
}
