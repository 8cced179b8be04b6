#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    UnknownField(String),
    NotASelectField(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::UnknownField(name) => {
                write!(f, "Unknown form field: {}", name)
            }
            DomainError::NotASelectField(name) => {
                write!(f, "Field does not offer options: {}", name)
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
