// SPDX-License-Identifier: MPL-2.0
//! Runtime permission checks.
//!
//! Desktop systems have no permission prompt for cameras; access is decided
//! by file permissions on the device node. The controller maps that onto the
//! grant / deny / deny-always model the scan flow is written against:
//!
//! | Device node                  | `is_granted` | `provide`             |
//! |------------------------------|--------------|-----------------------|
//! | readable and writable        | `true`       | `Ok(())`              |
//! | missing                      | `false`      | `Err(Denied)`         |
//! | present, access refused      | `false`      | `Err(DeniedAlways)`   |

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Camera,
}

/// Why a permission request was not granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionError {
    /// Refused for now; asking again later may succeed.
    Denied,
    /// Refused until the user changes a system setting.
    DeniedAlways,
}

impl fmt::Display for PermissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionError::Denied => write!(f, "Permission denied"),
            PermissionError::DeniedAlways => write!(f, "Permission permanently denied"),
        }
    }
}

impl std::error::Error for PermissionError {}

/// Localized text shown when the user is sent to fix access themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsGuidance {
    pub title: String,
    pub message: String,
}

pub trait PermissionsController: Send + Sync {
    fn is_granted(&self, permission: Permission) -> BoxFuture<'static, bool>;

    fn provide(&self, permission: Permission) -> BoxFuture<'static, Result<(), PermissionError>>;

    fn open_app_settings(&self, guidance: SettingsGuidance) -> BoxFuture<'static, ()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeviceAccess {
    Granted,
    Missing,
    Refused,
}

/// Permission controller backed by the capture device node.
#[derive(Debug, Clone)]
pub struct DevicePermissions {
    device_path: PathBuf,
}

impl DevicePermissions {
    /// Checks `/dev/video<device_index>`.
    pub fn new(device_index: usize) -> Self {
        Self::for_path(PathBuf::from(format!("/dev/video{}", device_index)))
    }

    pub fn for_path(device_path: PathBuf) -> Self {
        Self { device_path }
    }

    pub fn device_path(&self) -> &std::path::Path {
        &self.device_path
    }

    fn probe(&self) -> BoxFuture<'static, DeviceAccess> {
        let path = self.device_path.clone();
        async move {
            let opened = tokio::fs::OpenOptions::new()
                .read(true)
                .write(true)
                .open(&path)
                .await;
            let access = match opened {
                Ok(_) => DeviceAccess::Granted,
                Err(err) => match err.kind() {
                    std::io::ErrorKind::PermissionDenied => DeviceAccess::Refused,
                    std::io::ErrorKind::NotFound => DeviceAccess::Missing,
                    _ => {
                        tracing::debug!(path = %path.display(), error = %err, "camera probe failed");
                        DeviceAccess::Missing
                    }
                },
            };
            tracing::debug!(path = %path.display(), ?access, "camera access probed");
            access
        }
        .boxed()
    }
}

impl PermissionsController for DevicePermissions {
    fn is_granted(&self, permission: Permission) -> BoxFuture<'static, bool> {
        match permission {
            Permission::Camera => self
                .probe()
                .map(|access| access == DeviceAccess::Granted)
                .boxed(),
        }
    }

    fn provide(&self, permission: Permission) -> BoxFuture<'static, Result<(), PermissionError>> {
        match permission {
            Permission::Camera => self
                .probe()
                .map(|access| match access {
                    DeviceAccess::Granted => Ok(()),
                    DeviceAccess::Missing => Err(PermissionError::Denied),
                    DeviceAccess::Refused => Err(PermissionError::DeniedAlways),
                })
                .boxed(),
        }
    }

    fn open_app_settings(&self, guidance: SettingsGuidance) -> BoxFuture<'static, ()> {
        async move {
            rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Info)
                .set_title(guidance.title)
                .set_description(guidance.message)
                .set_buttons(rfd::MessageButtons::Ok)
                .show()
                .await;
        }
        .boxed()
    }
}
