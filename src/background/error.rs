use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong while running the background effect.
///
/// None of these reach the user: the controller logs them and keeps showing
/// the fallback gradient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    #[error("couldn't load module `{module}`: {reason}")]
    Load { module: String, reason: String },
    #[error("module `{0}` doesn't export a usable effect")]
    Unusable(String),
    #[error("effect libraries didn't load within {0:?}")]
    Timeout(Duration),
    #[error("effect construction failed: {0}")]
    Construct(String),
    #[error("effect resize failed: {0}")]
    Resize(String),
    #[error("effect teardown failed: {0}")]
    Destroy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_module() {
        let err = EffectError::Load {
            module: "three".to_string(),
            reason: "network error".to_string(),
        };
        assert_eq!(err.to_string(), "couldn't load module `three`: network error");

        let err = EffectError::Unusable("vanta.dots".to_string());
        assert!(err.to_string().contains("vanta.dots"));
    }

    #[test]
    fn test_timeout_message() {
        let err = EffectError::Timeout(Duration::from_secs(10));
        assert_eq!(err.to_string(), "effect libraries didn't load within 10s");
    }
}
