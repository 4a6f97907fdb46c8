use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmailError {
    /// A sender or recipient address could not be parsed as a mailbox.
    #[error("Invalid email address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    /// The message could not be assembled.
    #[error(transparent)]
    Build(#[from] lettre::error::Error),

    /// The SMTP relay rejected the message or could not be reached.
    #[error(transparent)]
    Transport(#[from] lettre::transport::smtp::Error),
}
