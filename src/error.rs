//! Error taxonomy for API calls

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Classification of a non-200 response from the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseErrorKind {
    /// 400: parameters rejected by the service
    InvalidInput,
    /// 403: blocked by moderation, or the caller lacks VIP/admin rights
    ModerationRejected,
    /// 404
    NotFound,
    /// 405 or 409: the submission or vote already exists
    Duplicate,
    /// 429: too many requests for the same user or IP
    RateLimited,
    /// Any other non-200 status
    UnexpectedStatus,
}

impl ResponseErrorKind {
    /// Classify a status code. Returns `None` for 200.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200 => None,
            400 => Some(Self::InvalidInput),
            403 => Some(Self::ModerationRejected),
            404 => Some(Self::NotFound),
            405 | 409 => Some(Self::Duplicate),
            429 => Some(Self::RateLimited),
            _ => Some(Self::UnexpectedStatus),
        }
    }

    fn describe(self, status: u16) -> String {
        match self {
            Self::InvalidInput => "Bad Request (your inputs are wrong/impossible)".to_string(),
            Self::ModerationRejected => "Rejected by auto moderator".to_string(),
            Self::NotFound => "Not Found".to_string(),
            Self::Duplicate => "Duplicate".to_string(),
            Self::RateLimited => "Rate Limit (too many for the same user or IP)".to_string(),
            Self::UnexpectedStatus => format!("Status code not 200 ({})", status),
        }
    }
}

impl fmt::Display for ResponseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidInput => "invalid input",
            Self::ModerationRejected => "rejected by moderation",
            Self::NotFound => "not found",
            Self::Duplicate => "duplicate",
            Self::RateLimited => "rate limited",
            Self::UnexpectedStatus => "unexpected status",
        };
        f.write_str(name)
    }
}

/// Which identifier a resolvable value was missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    VideoId,
    SegmentUuid,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VideoId => f.write_str("videoID"),
            Self::SegmentUuid => f.write_str("UUID"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// The service answered with a status other than 200
    #[error("[SponsorBlock] {message}")]
    Response {
        kind: ResponseErrorKind,
        status: u16,
        message: String,
    },

    /// The hash-prefix bucket came back without the requested video
    #[error("[SponsorBlock] video {video_id} not found within returned videos (prefix {hash_prefix})")]
    LookupMiss {
        video_id: String,
        hash_prefix: String,
    },

    /// A resolvable object carried no usable identifier
    #[error("[SponsorBlock] missing {kind} on resolvable value")]
    MissingIdentifier { kind: IdentifierKind },

    #[error("hash prefix length {0} is outside the accepted range 3-32")]
    InvalidHashPrefixLength(usize),

    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to {action} {path:?}")]
    ConfigIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to determine config directory")]
    NoConfigDir,
}

impl Error {
    /// Build the error for a non-200 status. `body` is the raw response text.
    pub fn from_status(status: u16, body: &str) -> Option<Self> {
        let kind = ResponseErrorKind::from_status(status)?;
        Some(Self::response(kind, status, body))
    }

    pub(crate) fn response(kind: ResponseErrorKind, status: u16, body: &str) -> Self {
        let mut message = kind.describe(status);
        let body = body.trim();
        if !body.is_empty() {
            message.push_str(": ");
            message.push_str(body);
        }
        Error::Response {
            kind,
            status,
            message,
        }
    }

    /// HTTP status carried by the error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Response { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<ResponseErrorKind> {
        match self {
            Error::Response { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.kind() == Some(ResponseErrorKind::RateLimited)
    }

    pub fn is_lookup_miss(&self) -> bool {
        matches!(self, Error::LookupMiss { .. })
    }
}
