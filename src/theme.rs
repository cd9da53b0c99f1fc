use serde::{Deserialize, Serialize};

/// Pastel palette and typography shared by every diagram. Built once at
/// startup and treated as read-only from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub title_size: f32,
    pub blue_light: String,
    pub blue_mid: String,
    pub blue_deep: String,
    pub purple_light: String,
    pub purple_mid: String,
    pub green_light: String,
    pub green_mid: String,
    pub green_deep: String,
    pub yellow_light: String,
    pub yellow_mid: String,
    pub red_light: String,
    pub red_mid: String,
    pub red_deep: String,
    pub gray_light: String,
    pub gray_mid: String,
    pub ink: String,
    pub muted: String,
    pub faint: String,
    pub background: String,
}

impl Theme {
    pub fn pastel() -> Self {
        Self {
            font_family: "Apple SD Gothic Neo, Noto Sans KR, sans-serif".to_string(),
            font_size: 9.0,
            title_size: 14.0,
            blue_light: "#A8C8E8".to_string(),
            blue_mid: "#7EB3D8".to_string(),
            blue_deep: "#5B9BD5".to_string(),
            purple_light: "#C3AED6".to_string(),
            purple_mid: "#B39DDB".to_string(),
            green_light: "#A8D5BA".to_string(),
            green_mid: "#81C784".to_string(),
            green_deep: "#2E7D32".to_string(),
            yellow_light: "#FFE0A3".to_string(),
            yellow_mid: "#FFD54F".to_string(),
            red_light: "#F4A7A7".to_string(),
            red_mid: "#EF9A9A".to_string(),
            red_deep: "#C62828".to_string(),
            gray_light: "#E0E0E0".to_string(),
            gray_mid: "#BDBDBD".to_string(),
            ink: "#333333".to_string(),
            muted: "#555555".to_string(),
            faint: "#999999".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::pastel()
    }
}
