//! AQDEF Library
//!
//! A Rust library for reading and writing Q-DAS AQDEF (DFQ) quality data files.
//!
//! This library provides tools for:
//! - Looking up typed metadata for every K-key (part, characteristic, value, group,
//!   hierarchy and catalog fields)
//! - Converting K-key values between their DFQ text form and typed values
//! - Parsing DFQ content (keyed records and binary measured-value lines) into an
//!   ordered object model of parts, characteristics, values and groups
//! - Maintaining and normalizing the characteristic hierarchy in both of its encodings
//! - Writing the object model back as canonical DFQ
//!
//! ```rust
//! use aqdef::{DfqParser, DfqWriter};
//!
//! # fn example() -> aqdef::Result<()> {
//! let mut model = DfqParser::new().parse_str("K1001/1 P1\nK2001/1 C1\nK0001/1 1.5\n")?;
//! let dfq = DfqWriter::new().write_to_string(&mut model)?;
//! assert!(dfq.starts_with("K0100 1\r\n"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog;
        pub mod converters;
        pub mod dfq_parser;
        pub mod dfq_writer;
        pub mod hierarchy;
        pub mod kkey_registry;
        pub mod object_model;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{
    CatalogRecordIndex, CharacteristicIndex, DataType, GroupIndex, KKey, KKeyMetadata, KKeyValue,
    Level, NodeIndex, PartIndex, ValueIndex,
};
pub use app::services::catalog::{Catalog, CatalogField, CatalogFieldType};
pub use app::services::dfq_parser::{DfqParser, ParseResult, ParseStats};
pub use app::services::dfq_writer::DfqWriter;
pub use app::services::hierarchy::{AqdefHierarchy, AqdefHierarchyBuilder, HierarchyEntry};
pub use app::services::kkey_registry::{KKeyProvider, KKeyRepository};
pub use app::services::object_model::{AqdefObjectModel, AqdefObjectModelBuilder};
pub use config::{Config, ParserOptions};

/// Result type alias for AQDEF operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for AQDEF parsing, conversion and writing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// DFQ content violates the structure of the format
    #[error("Invalid AQDEF structure: {message}")]
    InvalidStructure { message: String },

    /// A K-key value could not be converted between text and its typed form
    #[error("Failed to convert value '{value}' of K-key {key}: {message}")]
    ValueConversion {
        key: String,
        value: String,
        message: String,
    },

    /// The K-key has no metadata in the registry
    #[error("Unknown K-key: {key}")]
    UnknownKKey { key: String },

    /// An API was used with arguments it does not accept
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Failure while parsing a single DFQ line
    #[error("Failed to parse DFQ file. Error at line: {line} Cause: {message}")]
    Parse {
        line: usize,
        message: String,
        #[source]
        source: Box<Error>,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Character encoding error
    #[error("Encoding error: {message}")]
    Encoding { message: String },
}

impl Error {
    /// Create a structural error
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }

    /// Create a value conversion error
    pub fn value_conversion(
        key: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ValueConversion {
            key: key.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an unknown K-key error
    pub fn unknown_kkey(key: impl Into<String>) -> Self {
        Self::UnknownKKey { key: key.into() }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Wrap an error raised while parsing the given 1-based line
    pub fn parse(line: usize, source: Error) -> Self {
        Self::Parse {
            line,
            message: source.to_string(),
            source: Box::new(source),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an encoding error
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Attach the K-key to a value conversion error raised by a converter
    pub fn for_kkey(self, key: &str) -> Self {
        match self {
            Self::ValueConversion { value, message, .. } => Self::ValueConversion {
                key: key.to_string(),
                value,
                message,
            },
            other => other,
        }
    }

    /// Whether this error (or the error it wraps) is a structural error
    pub fn is_invalid_structure(&self) -> bool {
        match self {
            Self::InvalidStructure { .. } => true,
            Self::Parse { source, .. } => source.is_invalid_structure(),
            _ => false,
        }
    }

    /// Line number of a parse failure, if known
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid configuration file: {}", error),
        }
    }
}
