use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error(transparent)]
    Parse(#[from] gendiff_parsers::ParseError),

    #[error(transparent)]
    Diff(#[from] gendiff_diff::DiffError),
}

pub type SdkResult<T> = Result<T, SdkError>;
