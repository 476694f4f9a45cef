use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The sub process exiting with non-success code.")]
    SubProcessExit,

    #[error("Error with sub process process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("`{}` failed with status {}: {}", .command, .status, .stderr)]
    SearchFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Could not decode output of `{}` as {}", .command, .encoding)]
    Decode { command: String, encoding: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Configuration file error: could not parse `{}`: {}", .path, .original)]
    ConfigParse {
        path: String,
        original: ini::ParseError,
    },

    #[error("Configuration file error: No option '{}' in section: '{}'", .option, .section)]
    MissingConfigOption { section: String, option: String },

    #[error("Configuration file error: '{}' is not a valid color", _0)]
    UnknownColorName(String),

    #[error("No packages were selected.")]
    EmptySelection,

    #[error("Invalid selection `{}`: expected a number or a range like 1-3", _0)]
    InvalidSelection(String),

    #[error("Ranges must be in ascending order")]
    DescendingRange { start: usize, end: usize },

    #[error("Invalid package number")]
    InvalidPackageNumber { number: usize, available: usize },

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn config_parse(path: String, original: ini::ParseError) -> Self {
        Self::ConfigParse { path, original }
    }

    pub fn missing_config_option(section: &str, option: &str) -> Self {
        Self::MissingConfigOption {
            section: section.to_string(),
            option: option.to_string(),
        }
    }
}
