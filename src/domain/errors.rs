#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    BlankTitle,
    BlankNote,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::BlankTitle => {
                write!(f, "Title must not be blank")
            }
            DomainError::BlankNote => {
                write!(f, "Note must not be blank")
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
