use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    /// Infrastructure failure wrapped with the operation that hit it,
    /// e.g. "failed to create category".
    #[error("{context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: InfraError,
    },

    #[error(transparent)]
    Infra(#[from] InfraError),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        DomainError::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }

    pub fn storage(context: impl Into<String>, source: impl Into<InfraError>) -> Self {
        DomainError::Storage {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = DomainError::not_found("Category", 42);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: Category with id=42");
    }

    #[test]
    fn storage_error_keeps_context_and_source() {
        let err = DomainError::storage(
            "failed to create category",
            sea_orm::DbErr::Custom("disk full".into()),
        );
        assert!(!err.is_not_found());
        let msg = err.to_string();
        assert!(msg.starts_with("failed to create category: "));
        assert!(msg.contains("disk full"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn query_errors_pass_through_unlabeled() {
        let err: DomainError = InfraError::from(sea_orm::DbErr::Custom("boom".into())).into();
        let msg = err.to_string();
        assert!(msg.starts_with("Database error: "));
        assert!(msg.contains("boom"));
    }
}
