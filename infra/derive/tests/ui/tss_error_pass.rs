use std::borrow::Cow;
use tss_derive::tss_error;

#[tss_error]
pub enum SpawnError {
    #[error("Spawn failed{}: {source}", format_context(.context))]
    Spawn {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Exit status {code}")]
    Exit { code: i32 },
}

fn main() {
    let err = SpawnError::Exit { code: 2 };
    assert_eq!(err.to_string(), "Exit status 2");
}
