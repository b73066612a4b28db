use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("failed to draw scope: {0}")]
    Draw(String),
    #[error("failed to encode snapshot: {0}")]
    Encode(String),
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for ScopeError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ScopeError::Draw(format!("{value:?}"))
    }
}

impl From<image::ImageError> for ScopeError {
    fn from(value: image::ImageError) -> Self {
        ScopeError::Encode(value.to_string())
    }
}
