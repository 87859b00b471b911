use std::borrow::Cow;

/// A specialized [`PagesError`] enum of this crate.
#[aasm_derive::site_error]
pub enum PagesError {
    /// The content file could not be read.
    #[error("Content IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
    /// The content document is not valid TOML or does not match the expected shape.
    #[error("Content parse error{}: {source}", format_context(.context))]
    Content { source: toml::de::Error, context: Option<Cow<'static, str>> },
    /// Template compilation or rendering failed.
    #[error("Render error{}: {source}", format_context(.context))]
    Render { source: tera::Error, context: Option<Cow<'static, str>> },
    /// The document parsed but breaks a content rule.
    #[error("Content validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl PagesError {
    pub(crate) fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation { message: message.into(), context: None }
    }
}
