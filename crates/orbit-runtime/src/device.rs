//! Session-scoped device classification

use serde::{Deserialize, Serialize};

/// Which input hardware the session is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Keyboard and mouse
    #[default]
    Desktop,
    /// Touch screen with on-screen joysticks
    Touch,
}

impl DeviceClass {
    /// Classify a browser user-agent string. Android and iOS devices are touch devices.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        let is_android = ua.contains("android");
        let is_ios = ["iphone", "ipad", "ipod"].iter().any(|d| ua.contains(d));
        if is_android || is_ios {
            DeviceClass::Touch
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_touch(&self) -> bool {
        matches!(self, DeviceClass::Touch)
    }
}
