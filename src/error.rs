#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MixIdError {
    #[error("alphabet must not contain any multibyte characters")]
    InvalidAlphabet,

    #[error("alphabet length must be at least 5")]
    AlphabetTooShort,

    #[error("alphabet must contain unique characters")]
    DuplicateAlphabetCharacters,

    #[error("minimum length has to be between 0 and {max}")]
    MinLengthOutOfRange { max: usize },

    #[error("ran out of range checking against the blocklist")]
    BlocklistExhausted,
}

pub type Result<T> = std::result::Result<T, MixIdError>;
