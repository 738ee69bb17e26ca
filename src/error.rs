//! Error types for the domain and repository layers.

/// Errors returned by repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No row matched the lookup. `id` is `None` for bulk reads.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: Option<String> },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A stored value cannot be represented in the domain model.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: Some(id.to_string()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Violations of domain rules.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Customer {0} needs an address to be activated")]
    AddressRequired(String),
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;
