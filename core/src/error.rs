use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Unknown customer: {id}")]
    UnknownCustomer { id: String },

    #[error("An action is already in flight for customer {id}")]
    ActionInFlight { id: String },

    #[error("A refresh is already in flight")]
    RefreshInFlight,

    #[error("The assistant is still composing a reply")]
    ReplyInFlight,

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DeskResult<T> = Result<T, DeskError>;
