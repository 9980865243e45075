//! Error types for challenge page conversion
//!
//! Every variant is fatal for the document being converted. There is no
//! partial-success mode: a conversion either produces a full result or one of
//! these errors, carrying the URL, filename or tag needed to diagnose it.

/// Result alias for the conversion pipeline
pub type ConvertResult<T> = Result<T, ConversionError>;

/// Error types for HTML to Markdown challenge conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Title or description anchor is missing from the page
    #[error("Page structure not found: no element matches '{anchor}'")]
    StructureNotFound { anchor: String },

    /// A link or image URL matched none of the known link shapes
    #[error("A URL was found to an unknown resource type: {url}")]
    UnknownLinkType { url: String },

    /// Two different remote files sanitize to the same local filename
    #[error("Multiple resources found with the name {filename}: {existing} and {incoming}")]
    DuplicateResource {
        filename: String,
        existing: String,
        incoming: String,
    },

    /// No filename with an extension could be located in a resource URL
    #[error("Could not find a filename with an extension in '{input}'")]
    Format { input: String },

    /// An element reached a converter that has no rule for it
    #[error("Unsupported element <{tag}> in {context}")]
    UnsupportedElement { tag: String, context: &'static str },
}

impl ConversionError {
    pub(crate) fn structure_not_found(anchor: impl Into<String>) -> Self {
        Self::StructureNotFound {
            anchor: anchor.into(),
        }
    }

    pub(crate) fn unsupported(tag: impl Into<String>, context: &'static str) -> Self {
        Self::UnsupportedElement {
            tag: tag.into(),
            context,
        }
    }
}
