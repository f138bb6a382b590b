use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;
use std::sync::Arc;

/// Error kinds for memodb operations
///
/// This enum represents all possible error types that can occur during store operations.
/// Each error kind describes a specific category of failure, enabling precise error handling.
///
/// # Examples
///
/// ```rust,ignore
/// use memodb::errors::{MemodbError, ErrorKind, MemodbResult};
///
/// fn example() -> MemodbResult<()> {
///     Err(MemodbError::new("Document does not support empty key", ErrorKind::InvalidOperation))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    // Filter Errors - actively used in filter construction
    /// Error during filter evaluation or construction
    FilterError,

    // Operation Errors - actively used for invalid/unsupported operations
    /// The operation is not valid in the current context
    InvalidOperation,

    // Validation Errors - actively used in field/data validation
    /// Generic validation error
    ValidationError,
    /// Invalid field name
    InvalidFieldName,

    // Generic/Internal Errors - used as fallback
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::FilterError => write!(f, "Filter error"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::ValidationError => write!(f, "Validation error"),
            ErrorKind::InvalidFieldName => write!(f, "Invalid field name"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Custom memodb error type.
///
/// `MemodbError` encapsulates error information including the error message, kind, and
/// optional cause. It supports error chaining and backtraces for debugging.
///
/// # Examples
///
/// ```rust,ignore
/// use memodb::errors::{MemodbError, ErrorKind};
///
/// // Create a simple error
/// let err = MemodbError::new("Document does not support empty key", ErrorKind::InvalidOperation);
///
/// // Create an error with a cause
/// let cause = MemodbError::new("field resolution failed", ErrorKind::InvalidFieldName);
/// let err = MemodbError::new_with_cause("Filter construction failed", ErrorKind::FilterError, cause);
/// ```
///
/// # Type alias
///
/// The `MemodbResult<T>` type alias is equivalent to `Result<T, MemodbError>` and is used
/// throughout the codebase for operations that can fail.
#[derive(Clone)]
pub struct MemodbError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<MemodbError>>,
    backtrace: Arc<Backtrace>,
}

impl MemodbError {
    /// Creates a new `MemodbError` with the specified message and error kind.
    ///
    /// # Arguments
    ///
    /// * `message` - A description of the error
    /// * `error_kind` - The category of error
    ///
    /// # Returns
    ///
    /// A new `MemodbError` instance.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        MemodbError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: Arc::new(Backtrace::new()),
        }
    }

    /// Creates a new `MemodbError` with a cause error.
    ///
    /// This creates an error chain where the cause error is preserved for debugging.
    ///
    /// # Arguments
    ///
    /// * `message` - A description of the error
    /// * `error_kind` - The category of error
    /// * `cause` - The underlying error that caused this error
    ///
    /// # Returns
    ///
    /// A new `MemodbError` instance with the cause error attached.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: MemodbError) -> Self {
        MemodbError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: Arc::new(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&MemodbError> {
        self.cause.as_deref()
    }
}

impl PartialEq for MemodbError {
    fn eq(&self, other: &Self) -> bool {
        // backtraces are debugging payload, not identity
        self.message == other.message && self.error_kind == other.error_kind
    }
}

impl Display for MemodbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for MemodbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace),
        }
    }
}

impl Error for MemodbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for memodb operations.
///
/// `MemodbResult<T>` is shorthand for `Result<T, MemodbError>`.
/// All fallible memodb operations return this type.
pub type MemodbResult<T> = Result<T, MemodbError>;
