use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StatusCode {
    NotFound = 1,
    MalformedPayload = 2,
    InvalidArgument = 4,
}

/// Error type shared by the filter codec and the registry.
#[derive(Debug, Clone)]
pub struct Status {
    code: StatusCode,
    message: Option<String>,
}

impl Status {
    pub fn not_found(msg: &str, msg2: Option<&str>) -> Self {
        Self::new(StatusCode::NotFound, msg, msg2)
    }

    /// The bytes handed to a decoder cannot be read under its encoding.
    /// Not transient: retrying with the same bytes fails the same way.
    pub fn malformed_payload(msg: &str, msg2: Option<&str>) -> Self {
        Self::new(StatusCode::MalformedPayload, msg, msg2)
    }

    /// The caller handed in something that cannot be put on the wire.
    pub fn invalid_argument(msg: &str, msg2: Option<&str>) -> Self {
        Self::new(StatusCode::InvalidArgument, msg, msg2)
    }

    fn new(code: StatusCode, msg: &str, msg2: Option<&str>) -> Self {
        let message = match msg2 {
            Some(m2) => format!("{}: {}", msg, m2),
            None => msg.to_string(),
        };
        Status {
            code,
            message: Some(message),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code == StatusCode::NotFound
    }

    pub fn is_malformed_payload(&self) -> bool {
        self.code == StatusCode::MalformedPayload
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.code == StatusCode::InvalidArgument
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{:?}: {}", self.code, msg),
            None => write!(f, "{:?}", self.code),
        }
    }
}

impl std::error::Error for Status {}
