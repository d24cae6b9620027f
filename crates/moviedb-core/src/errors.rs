use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure that can leave a repository call falls into one of these
/// kinds. Each kind maps to a stable error code that can be used for
/// programmatic error handling, log assertions and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Store unreachable or misconfigured (missing file, not a database, no permission)
    Connection,
    /// Malformed statement, constraint violation or I/O fault while running a query
    Execution,
    /// A row did not have the shape the decoders expect (unexpected null or type)
    Mapping,
    /// Caller handed in a value the store cannot accept
    InvalidInput,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Connection => "ERR_CONNECTION",
            ExErrorKind::Execution => "ERR_EXECUTION",
            ExErrorKind::Mapping => "ERR_MAPPING",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the operation and
/// entity context needed when reading logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (a genre name, a movie title, a row id)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

/// Lets the logging macros take a borrowed error
impl From<&ExError> for ExError {
    fn from(err: &ExError) -> Self {
        err.clone()
    }
}

// ========== End Error Facility ==========

/// Failures raised while decoding a single column into an entity field
///
/// These travel through the driver as conversion failures and surface as
/// `ExErrorKind::Mapping`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Column holds text or a number that is not a calendar date
    #[error("Column {column} holds an invalid date: {value}")]
    InvalidDate { column: String, value: String },

    /// Column holds a storage type the field cannot be built from
    #[error("Column {column} has unsupported storage type {found}")]
    UnsupportedType { column: String, found: String },
}

impl From<DecodeError> for ExError {
    fn from(err: DecodeError) -> Self {
        let column = match &err {
            DecodeError::InvalidDate { column, .. } => column.clone(),
            DecodeError::UnsupportedType { column, .. } => column.clone(),
        };
        ExError::new(ExErrorKind::Mapping)
            .with_op("decode_row")
            .with_entity_id(column)
            .with_message(err.to_string())
    }
}
