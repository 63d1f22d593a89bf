#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    Regex(#[from] fancy_regex::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
    #[error("invalid catalog for locale {locale:?}: {reason}")]
    InvalidCatalog { locale: String, reason: String },
    #[error("no message {key:?} for locale {locale:?} or its fallbacks")]
    MissingMessage { key: String, locale: String },
    #[error("message {key:?} references missing argument {argument:?}")]
    MissingArgument { key: String, argument: String },
    #[error("message {key:?} contains a malformed placeholder")]
    InvalidPlaceholder { key: String },
}

pub type Result<T> = std::result::Result<T, Error>;
