use std::borrow::Cow;
use vcb_derive::vcb_error;

#[vcb_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open() -> Result<std::fs::File, DemoError> {
    std::fs::File::open("missing.toml").context("Opening config")
}

fn main() {
    let _ = open();
}
