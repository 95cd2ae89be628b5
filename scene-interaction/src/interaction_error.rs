use thiserror::Error;

/// Errors raised while setting up interaction state.
///
/// The per-tick systems never fail; only operations such as attaching a component to an
/// entity or loading configuration can.
#[derive(Error, Debug)]
pub enum InteractionError {
    /// The entity was despawned or never existed
    #[error("The entity does not exist")]
    NoSuchEntity(#[from] hecs::NoSuchEntity),
    /// The configuration could not be parsed
    #[error("The configuration could not be parsed")]
    InvalidConfig(#[from] serde_json::Error),
    /// A configuration value was out of range
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// Path to the offending field
        field: &'static str,
        /// What was wrong with it
        message: String,
    },
    /// Reading a configuration file failed
    #[error(transparent)]
    IO(#[from] std::io::Error),
}
