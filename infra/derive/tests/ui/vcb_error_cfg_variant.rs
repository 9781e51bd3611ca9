use std::borrow::Cow;
use vcb_derive::vcb_error;

#[vcb_error]
#[derive(Debug)]
pub enum DemoError {
    #[cfg(any())]
    #[error("Never compiled{}: {source}", format_context(.context))]
    Never { source: std::fmt::Error, context: Option<Cow<'static, str>> },

    #[error("Unsupported path {path}")]
    Unsupported { path: String },
}

fn main() {
    let err = DemoError::Unsupported { path: "/unknown".to_owned() };
    let _ = format!("{err} {err:?}");
}
