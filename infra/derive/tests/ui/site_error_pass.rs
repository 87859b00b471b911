use aasm_derive::site_error;
use std::borrow::Cow;

#[site_error]
pub enum ContentError {
    #[error("Read error{}: {source}", format_context(.context))]
    Read {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, ContentError> {
    let raw = std::fs::read_to_string("site.toml").context("Reading site.toml")?;
    Ok(raw)
}

fn main() {
    let _ = read();
    let _: ContentError = "boom".into();
}
