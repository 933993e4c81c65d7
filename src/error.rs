//! Error types for the fallible edges of the wizard
//!
//! The wizard core itself never fails; these cover picking photo files
//! and talking to the system clipboard.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("Photo not found: {}", .0.display())]
    PhotoNotFound(PathBuf),

    #[error("Not a file: {}", .0.display())]
    PhotoNotAFile(PathBuf),

    #[error("Cannot read {}: {source}", path.display())]
    PhotoUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

impl From<arboard::Error> for WizardError {
    fn from(err: arboard::Error) -> Self {
        WizardError::Clipboard(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_path() {
        let err = WizardError::PhotoNotFound(PathBuf::from("/tmp/a.jpg"));
        assert_eq!(err.to_string(), "Photo not found: /tmp/a.jpg");

        let err = WizardError::PhotoNotAFile(PathBuf::from("/tmp"));
        assert_eq!(err.to_string(), "Not a file: /tmp");
    }

    #[test]
    fn test_unreadable_keeps_source() {
        use std::error::Error as _;
        let err = WizardError::PhotoUnreadable {
            path: PathBuf::from("/root/secret.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("Cannot read /root/secret.png"));
        assert!(err.source().is_some());
    }
}
