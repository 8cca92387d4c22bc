use thiserror::Error;

/// All errors that the crate can generate. Laying out blocks never fails; errors only come
/// from reading content and configuration, from invalid page geometry, and from writing the
/// finished document.
#[derive(Error, Debug)]
pub enum QuickRefError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// A content or configuration file was not valid TOML or did not match the expected shape
    Toml(#[from] toml::de::Error),

    #[error("invalid page geometry: {reason}")]
    /// The page, margins and column settings leave no room for content
    InvalidGeometry { reason: String },
}
