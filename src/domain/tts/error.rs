use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("Text cannot be empty")]
    EmptyText,
    #[error("{0}")]
    Provider(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::EmptyText => AppError::BadRequest("Text cannot be empty".to_string()),
            TtsServiceError::Provider(msg) => AppError::SpeechGeneration(msg),
            TtsServiceError::Io(e) => AppError::SpeechGeneration(e.to_string()),
        }
    }
}
