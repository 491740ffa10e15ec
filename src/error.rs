use thiserror::Error;

/// Failures while acquiring pixel samples for an image reference.
///
/// These surface to the caller untouched: the core's mid-grey fallbacks
/// only cover "given an empty pixel sequence", never "the image could not
/// be loaded". Masking a fetch failure behind a fallback color would let a
/// page silently pretend the image existed.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to fetch image: {0}")]
    Fetch(String),

    #[error("Failed to decode image: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Pixel source error: {0}")]
    Source(#[from] SourceError),
}
