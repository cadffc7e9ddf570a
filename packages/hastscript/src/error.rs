use thiserror::Error;

pub type HastscriptResult<T> = Result<T, HastscriptError>;

/// Errors raised while constructing a node
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HastscriptError {
    /// A child is not null, text, a number, a list or a node.
    #[error("Expected node, nodes, or string, got `{value}`")]
    InvalidChild { value: String },

    /// A node-shaped object that cannot be turned into a node.
    #[error("Cannot create `{node_type}` node: {reason}")]
    InvalidNode { node_type: String, reason: String },
}

/// Errors raised while building a factory from configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Unknown schema space '{0}', expected 'html' or 'svg'")]
    UnknownSpace(String),

    #[error("Default tag name must not be empty")]
    EmptyDefaultTagName,
}
