// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Preferences(String),
    Camera(CameraError),
}

/// Specific error types for photo capture.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// No capture device exists at the configured index.
    NoDevice,

    /// The device exists but the OS refused access to it.
    AccessDenied,

    /// The device could not deliver a frame in a format we can decode.
    UnsupportedFormat(String),

    /// Capturing or encoding the frame failed.
    CaptureFailed(String),

    /// This build has no camera backend for the current platform.
    Unavailable,
}

impl CameraError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CameraError::NoDevice => "notification-camera-no-device",
            CameraError::AccessDenied => "notification-camera-access-denied",
            CameraError::UnsupportedFormat(_) => "notification-camera-unsupported-format",
            CameraError::CaptureFailed(_) => "notification-camera-capture-failed",
            CameraError::Unavailable => "notification-camera-unavailable",
        }
    }

    /// Classifies an I/O error raised while opening or streaming from a device.
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CameraError::NoDevice,
            std::io::ErrorKind::PermissionDenied => CameraError::AccessDenied,
            _ => CameraError::CaptureFailed(err.to_string()),
        }
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::NoDevice => write!(f, "No camera device found"),
            CameraError::AccessDenied => write!(f, "Access to the camera was denied"),
            CameraError::UnsupportedFormat(format) => {
                write!(f, "Unsupported camera pixel format: {}", format)
            }
            CameraError::CaptureFailed(msg) => write!(f, "Capture failed: {}", msg),
            CameraError::Unavailable => write!(f, "Camera capture is not available"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Preferences(e) => write!(f, "Preferences Error: {}", e),
            Error::Camera(e) => write!(f, "Camera Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CameraError> for Error {
    fn from(err: CameraError) -> Self {
        Error::Camera(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ciborium::ser::Error<std::io::Error>> for Error {
    fn from(err: ciborium::ser::Error<std::io::Error>) -> Self {
        Error::Preferences(err.to_string())
    }
}

impl From<ciborium::de::Error<std::io::Error>> for Error {
    fn from(err: ciborium::de::Error<std::io::Error>) -> Self {
        Error::Preferences(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn camera_error_from_missing_device() {
        let io_error = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert_eq!(CameraError::from_io(&io_error), CameraError::NoDevice);
    }

    #[test]
    fn camera_error_from_permission_denied() {
        let io_error = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert_eq!(CameraError::from_io(&io_error), CameraError::AccessDenied);
    }

    #[test]
    fn camera_error_from_other_io_is_capture_failure() {
        let io_error = std::io::Error::other("VIDIOC_STREAMON failed");
        assert!(matches!(
            CameraError::from_io(&io_error),
            CameraError::CaptureFailed(msg) if msg.contains("STREAMON")
        ));
    }

    #[test]
    fn camera_error_i18n_keys() {
        assert_eq!(
            CameraError::NoDevice.i18n_key(),
            "notification-camera-no-device"
        );
        assert_eq!(
            CameraError::Unavailable.i18n_key(),
            "notification-camera-unavailable"
        );
    }

    #[test]
    fn camera_error_wraps_into_error() {
        let err: Error = CameraError::AccessDenied.into();
        assert!(format!("{}", err).contains("denied"));
    }
}
