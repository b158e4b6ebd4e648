use reqwest::StatusCode;
use thiserror::Error;

/// Why a backend operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The request never got a response (connection refused, DNS, broken pipe).
    Network,
    Timeout,
    /// The backend answered 404.
    NotFound,
    /// The backend rejected the request (any other 4xx).
    Validation,
    /// 5xx, or any other non-success status.
    Server,
    /// A success status whose body could not be decoded into the entity.
    InvalidResponse,
}

impl FailureKind {
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::NOT_FOUND {
            FailureKind::NotFound
        } else if status.is_client_error() {
            FailureKind::Validation
        } else {
            FailureKind::Server
        }
    }

    pub fn from_transport(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            FailureKind::Timeout
        } else if error.is_decode() {
            FailureKind::InvalidResponse
        } else if error.is_builder() {
            FailureKind::Validation
        } else if let Some(status) = error.status() {
            FailureKind::from_status(status)
        } else {
            FailureKind::Network
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            FailureKind::Network | FailureKind::Timeout | FailureKind::Server
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Error, Debug)]
pub enum RentalError {
    /// A repository operation failed. Displays only the localized message;
    /// `kind`, `status` and `detail` keep the original diagnostic.
    #[error("{message}")]
    Operation {
        kind: FailureKind,
        status: Option<u16>,
        detail: String,
        message: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl RentalError {
    pub fn operation(
        kind: FailureKind,
        message: impl Into<String>,
        status: Option<StatusCode>,
        detail: impl Into<String>,
    ) -> Self {
        RentalError::Operation {
            kind,
            status: status.map(|s| s.as_u16()),
            detail: detail.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            RentalError::Operation { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RentalError::Operation { status, .. } => *status,
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            RentalError::Operation { detail, .. } => Some(detail),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(FailureKind::NotFound)
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RentalError::Operation { kind, .. } if kind.is_transient() => ErrorSeverity::Medium,
            RentalError::Operation { .. } => ErrorSeverity::High,
            RentalError::SerializationError(_) => ErrorSeverity::High,
            RentalError::ConfigError { .. }
            | RentalError::InvalidConfigValueError { .. }
            | RentalError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RentalError::Operation { message, .. } => message.clone(),
            RentalError::SerializationError(e) => format!("JSON inválido: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RentalError::Operation { kind, .. } => match kind {
                FailureKind::Network => "Check that the backend is running and the API URL is reachable",
                FailureKind::Timeout => "The backend is slow to respond; raise --timeout-seconds or try again later",
                FailureKind::NotFound => "Verify the id exists with the matching `list` command",
                FailureKind::Validation => "Review the submitted fields; the backend rejected them",
                FailureKind::Server => "The backend failed while handling the request; check its logs",
                FailureKind::InvalidResponse => "The backend replied with an unexpected body; check the API version",
            },
            RentalError::SerializationError(_) => "Pass a valid JSON object to --json",
            RentalError::ConfigError { .. }
            | RentalError::InvalidConfigValueError { .. } => {
                "Fix the configuration file, --api-url or VHS_API_URL"
            }
            RentalError::IoError(_) => "Check that the configuration file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, RentalError>;
