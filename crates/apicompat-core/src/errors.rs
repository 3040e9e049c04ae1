//! Error facility
//!
//! Two layers: [`ContractError`] names what went wrong in domain terms;
//! [`ExError`] is what crosses crate boundaries, with a stable code and the
//! context (operation, file, request) needed to act on it.

use apicompat_core_types::RequestId;
use thiserror::Error;

pub type Result<T, E = ExError> = std::result::Result<T, E>;

/// Error classification with stable codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Contract text is not JSON
    InvalidJson,
    /// JSON that is neither an interface-description document nor an object
    /// with an `apis` list
    InvalidContract,
    InvalidPolicy,
    /// Unusable argument, such as an unknown report format
    InvalidInput,
    Io,
    Serialization,
}

impl ExErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidJson => "ERR_INVALID_JSON",
            ExErrorKind::InvalidContract => "ERR_INVALID_CONTRACT",
            ExErrorKind::InvalidPolicy => "ERR_INVALID_POLICY",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Structured error returned by every fallible public operation
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Name of the operation that failed
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Contract or policy file being processed
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Replace the message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// `[CODE] in operation 'op': message (path: file)`, absent parts omitted
impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

/// Domain failures of loading and normalizing contracts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    #[error("Contract is not valid JSON: {message}")]
    InvalidJson { message: String },

    /// Parsed document has the wrong shape
    #[error("Invalid contract JSON format: {message}")]
    InvalidContract { message: String },

    #[error("Invalid compatibility policy: {message}")]
    InvalidPolicy { message: String },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// JSON encoding of a report or converted contract failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl ContractError {
    pub fn kind(&self) -> ExErrorKind {
        match self {
            ContractError::InvalidJson { .. } => ExErrorKind::InvalidJson,
            ContractError::InvalidContract { .. } => ExErrorKind::InvalidContract,
            ContractError::InvalidPolicy { .. } => ExErrorKind::InvalidPolicy,
            ContractError::Io { .. } => ExErrorKind::Io,
            ContractError::Serialization { .. } => ExErrorKind::Serialization,
        }
    }
}

impl From<ContractError> for ExError {
    fn from(err: ContractError) -> Self {
        let ex = ExError::new(err.kind());
        match err {
            // The path goes into its own slot; keep the message bare
            ContractError::Io { path, message } => ex.with_path(path).with_message(message),
            ContractError::Serialization { message } => ex.with_message(message),
            other => ex.with_message(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ContractError {
    fn from(err: serde_json::Error) -> Self {
        ContractError::Serialization {
            message: err.to_string(),
        }
    }
}
