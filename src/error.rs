use crate::llm::InferenceError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Every inference failure collapses into this one message on the wire.
    #[error("ERROR: Can't invoke '{model_id}'. Reason: {source}")]
    Invocation {
        model_id: String,
        #[source]
        source: InferenceError,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invocation(model_id: impl Into<String>, source: InferenceError) -> Self {
        Self::Invocation {
            model_id: model_id.into(),
            source,
        }
    }

    /// The underlying failure kind, when this error came from the inference service.
    pub fn inference_kind(&self) -> Option<&InferenceError> {
        match self {
            Self::Invocation { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invocation_message_format() {
        let err = Error::invocation(
            "anthropic.claude-3-haiku-20240307-v1:0",
            InferenceError::network("connection refused"),
        );

        assert_eq!(
            err.to_string(),
            "ERROR: Can't invoke 'anthropic.claude-3-haiku-20240307-v1:0'. Reason: connection refused"
        );
    }

    #[test]
    fn test_invocation_message_hides_failure_kind() {
        let auth = Error::invocation("m", InferenceError::authentication("bad token"));
        let malformed = Error::invocation("m", InferenceError::malformed_response("bad token"));

        assert_eq!(auth.to_string(), malformed.to_string());
        assert!(matches!(
            auth.inference_kind(),
            Some(InferenceError::Authentication(_))
        ));
        assert!(matches!(
            malformed.inference_kind(),
            Some(InferenceError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_non_inference_errors_have_no_kind() {
        let err = Error::config("missing origin");
        assert!(err.inference_kind().is_none());
        assert_eq!(err.to_string(), "Configuration error: missing origin");
    }
}
