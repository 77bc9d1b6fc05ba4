use thiserror::Error;

/// Failures of the persisted review store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage unavailable: {0}")]
    Unavailable(String),
    #[error("stored reviews are not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("failed to encode reviews: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Reasons a review operation is rejected. The validation messages are shown
/// to the visitor as-is.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Por favor, selecione uma classificação por estrelas")]
    MissingRating,
    #[error("Por favor, preencha todos os campos")]
    MissingFields,
    #[error("Não foi possível salvar a avaliação: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
