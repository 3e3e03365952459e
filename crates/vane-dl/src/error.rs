use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {url}")]
    #[diagnostic(code(vane_dl::invalid_url))]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Not a local file path: {url}")]
    #[diagnostic(
        code(vane_dl::not_a_file_path),
        help("`file://` repository URLs must carry an absolute path")
    )]
    NotAFilePath { url: String },

    #[error(transparent)]
    #[diagnostic(
        code(vane_dl::network),
        help("Check your internet connection or try again later")
    )]
    Network(#[from] Box<ureq::Error>),

    #[error("HTTP {status}: {url}")]
    #[diagnostic(code(vane_dl::http_error))]
    HttpStatus { status: u16, url: String },

    #[error(transparent)]
    #[diagnostic(code(vane_dl::io))]
    Io(#[from] std::io::Error),

    #[error("No repository serves group '{0}'")]
    #[diagnostic(
        code(vane_dl::unresolved),
        help("Add the group to a repository scope or configure a default repository")
    )]
    NoEligibleRepository(String),

    #[error("All eligible repositories failed for {coordinate}")]
    #[diagnostic(
        code(vane_dl::all_failed),
        help("Attempts:\n{}", .failures.join("\n"))
    )]
    AllRepositoriesFailed {
        coordinate: String,
        failures: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, FetchError>;

impl From<ureq::Error> for FetchError {
    fn from(e: ureq::Error) -> Self {
        Self::Network(Box::new(e))
    }
}
