//! Short link entity mapping a short code to its destination URL.

use url::Url;

use crate::error::StoreError;

/// Maximum length of a short code.
pub const MAX_CODE_LEN: usize = 64;

/// Maximum length of a destination URL.
pub const MAX_DESTINATION_LEN: usize = 2048;

/// A short code together with the URL it redirects to.
///
/// Construct through [`ShortLink::new`], which guarantees a URL-safe code and
/// a non-empty destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub destination: String,
}

impl ShortLink {
    /// Validates and builds a short link.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidLink`] if the code is empty, too long or
    /// contains characters outside `[A-Za-z0-9_-]`, or if the destination is
    /// empty, too long, contains whitespace anywhere (including leading or
    /// trailing), or uses a scheme other than HTTP(S). The destination is
    /// stored exactly as given.
    pub fn new(code: impl Into<String>, destination: impl Into<String>) -> Result<Self, StoreError> {
        let code = code.into();
        let destination = destination.into();

        validate_code(&code)?;
        validate_destination(&destination)?;

        Ok(Self { code, destination })
    }
}

/// Checks that a short code is non-empty and URL-safe.
pub fn validate_code(code: &str) -> Result<(), StoreError> {
    if code.is_empty() {
        return Err(StoreError::invalid("short code must not be empty"));
    }

    if code.len() > MAX_CODE_LEN {
        return Err(StoreError::invalid(format!(
            "short code must be at most {MAX_CODE_LEN} characters"
        )));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(StoreError::invalid(
            "short code may only contain letters, digits, '-' and '_'",
        ));
    }

    Ok(())
}

/// Checks that a destination is a non-empty absolute HTTP(S) URL or a relative reference.
pub fn validate_destination(destination: &str) -> Result<(), StoreError> {
    if destination.is_empty() {
        return Err(StoreError::invalid("destination must not be empty"));
    }

    if destination.len() > MAX_DESTINATION_LEN {
        return Err(StoreError::invalid(format!(
            "destination must be at most {MAX_DESTINATION_LEN} characters"
        )));
    }

    if destination.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(StoreError::invalid(
            "destination must not contain whitespace",
        ));
    }

    // Sent verbatim in the Location header.
    if !destination.is_ascii() {
        return Err(StoreError::invalid(
            "destination must be ASCII; percent-encode other characters",
        ));
    }

    match Url::parse(destination) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(url) => Err(StoreError::invalid(format!(
            "unsupported destination scheme '{}'",
            url.scheme()
        ))),
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(()),
        Err(e) => Err(StoreError::invalid(format!("malformed destination: {e}"))),
    }
}

/// Outcome of registering a short code.
///
/// `Conflict` means the code was already taken and nothing was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Created,
    Conflict,
}

impl Registration {
    pub fn is_created(self) -> bool {
        matches!(self, Registration::Created)
    }
}
