use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub header_font_size: f32,
    pub title_font_size: f32,
    pub flag_font_size: f32,
    pub header_background: String,
    pub header_text_color: String,
    pub row_background: String,
    pub alt_row_background: String,
    pub border_color: String,
    pub link_color: String,
    pub text_color: String,
    pub not_used_color: String,
    pub todo_color: String,
    pub tree_line_color: String,
    pub resource_icon_color: String,
    pub element_icon_color: String,
    pub extension_icon_color: String,
    pub choice_icon_color: String,
    pub reference_icon_color: String,
}

impl Theme {
    /// Palette of the HL7 structure tables.
    pub fn standard() -> Self {
        Self {
            font_family: "Arial, sans-serif".to_string(),
            font_size: 12.0,
            header_font_size: 13.0,
            title_font_size: 14.0,
            flag_font_size: 10.0,
            header_background: "#F0F0F0".to_string(),
            header_text_color: "#333333".to_string(),
            row_background: "#FFFFFF".to_string(),
            alt_row_background: "#F8F8F8".to_string(),
            border_color: "#CCCCCC".to_string(),
            link_color: "#005EB8".to_string(),
            text_color: "#333333".to_string(),
            not_used_color: "#999999".to_string(),
            todo_color: "#FF6600".to_string(),
            tree_line_color: "#CCCCCC".to_string(),
            resource_icon_color: "#FDB813".to_string(),
            element_icon_color: "#005EB8".to_string(),
            extension_icon_color: "#FF8C00".to_string(),
            choice_icon_color: "#28A745".to_string(),
            reference_icon_color: "#005EB8".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}
