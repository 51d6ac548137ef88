use thiserror::Error;

/// The listing endpoint answered with something that is neither a bare
/// array of postings nor an object carrying a `jobs` array.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("unsupported feed shape: expected an array or an object with a `jobs` array, found {found}")]
    UnsupportedShape { found: &'static str },
}

/// Apply-form validation failures. `title()` and the `Display` text are the
/// messages shown next to the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Contact number must be exactly 11 digits.")]
    InvalidContact,

    #[error("Email must be valid and end with .com.")]
    InvalidEmail,
}

impl ApplyError {
    pub fn title(&self) -> &'static str {
        match self {
            ApplyError::MissingFields => "Error",
            ApplyError::InvalidContact => "Invalid Contact",
            ApplyError::InvalidEmail => "Invalid Email",
        }
    }
}
