// Error types for tsguard.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while turning TypeScript source into guard
/// functions. Extraction fails atomically per file: one malformed construct
/// means no interface list for that file at all.
#[derive(Debug, Error)]
pub enum Error {
    /// The parser rejected the source text.
    #[error("failed to parse TypeScript source: {message}")]
    Parse { message: String },

    /// An interface body member that is not a plain property signature.
    #[error("encountered an interface body member of kind '{found}' but expected 'TSPropertySignature'")]
    UnexpectedMember { found: &'static str },

    /// A property key that is not a plain identifier.
    #[error("encountered a property key of kind '{found}' but expected 'Identifier'")]
    UnexpectedKey { found: &'static str },

    /// A type annotation that is not a bare primitive keyword.
    #[error("property type annotation of kind '{found}' is not supported")]
    UnsupportedAnnotation { found: &'static str },

    /// Generated guards could not be written to their destination.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
