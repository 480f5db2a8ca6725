use crate::error_code::StandardErrorCode;
use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path that caused the error (e.g., "responses", "windows[2].text")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected count, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "classify_batch", "client_builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the Pangram client.
///
/// Every failure surfaces to the caller; nothing here is retried or recovered locally.
#[derive(Debug, Error)]
pub enum Error {
    /// The client could not be constructed (missing credential, bad endpoint).
    /// Raised before any network activity.
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    /// A client-side precondition was violated. No request was sent.
    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    /// The service answered, but the answer is a failure: a non-200 status,
    /// an in-band `error` field, or a body missing a required field.
    #[error("API error{}: {message}{}", format_status(.status), format_context(.context))]
    Api {
        status: Option<u16>,
        message: String,
        context: ErrorContext,
    },

    /// The request never produced an HTTP response (timeout, connection reset, DNS).
    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    /// A 200 body whose fields do not match the declared result shape.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {})", code),
        None => String::new(),
    }
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Non-200 response; the raw body becomes the message.
    pub fn api_status(status: u16, body: impl Into<String>) -> Self {
        Error::Api {
            status: Some(status),
            message: body.into(),
            context: ErrorContext::new(),
        }
    }

    /// Failure reported inside an otherwise successful response.
    pub fn api_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Api {
            status: None,
            message: msg.into(),
            context,
        }
    }

    pub fn missing_field(field: impl Into<String>, source: &str) -> Self {
        let field = field.into();
        Self::api_with_context(
            format!("failed to retrieve {}", field),
            ErrorContext::new()
                .with_field_path(field)
                .with_source(source),
        )
    }

    /// HTTP status of an `Api` error, when the service returned one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => *status,
            _ => None,
        }
    }

    /// Message carried by `Configuration`, `Validation` and `Api` errors.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::Configuration { message, .. }
            | Error::Validation { message, .. }
            | Error::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. }
            | Error::Validation { context, .. }
            | Error::Api { context, .. } => Some(context),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(t) if t.is_timeout())
    }

    /// Canonical classification of this error. Informational only.
    pub fn code(&self) -> StandardErrorCode {
        match self {
            Error::Configuration { .. } => StandardErrorCode::Configuration,
            Error::Validation { .. } => StandardErrorCode::InvalidRequest,
            Error::Api {
                status: Some(status),
                ..
            } => StandardErrorCode::from_http_status(*status),
            Error::Api { status: None, .. } => StandardErrorCode::InvalidResponse,
            Error::Transport(t) if t.is_timeout() => StandardErrorCode::Timeout,
            Error::Transport(_) => StandardErrorCode::Unknown,
            Error::Serialization(_) => StandardErrorCode::InvalidResponse,
        }
    }
}
