use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where glyph advances come from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSource {
    /// Fixed per-glyph advance table; identical on every machine.
    #[default]
    Builtin,
    /// Installed font matching the theme's font family list.
    System,
    /// A TrueType/OpenType file on disk.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticConfig {
    pub message: String,
    pub width: f32,
    pub height: f32,
    pub text_x: f32,
    pub text_y: f32,
    pub font_size: f32,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self {
            message: "Error: Could not load font for text measurement".to_string(),
            width: 400.0,
            height: 100.0,
            text_x: 10.0,
            text_y: 50.0,
            font_size: 14.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub font_source: FontSource,
    pub title: String,
    pub line_height: f32,
    pub min_row_height: f32,
    pub row_top_margin: f32,
    pub row_bottom_margin: f32,
    pub title_height: f32,
    pub header_height: f32,
    pub icon_size: f32,
    pub padding: f32,
    pub indent: f32,
    pub tree_line_width: f32,
    pub min_name_width: f32,
    pub max_name_width: f32,
    pub flags_width: f32,
    pub cardinality_width: f32,
    pub type_width: f32,
    pub description_width: f32,
    /// Slack subtracted from every wrap budget to absorb renderer variance.
    pub font_rendering_buffer: f32,
    pub bold_width_factor: f32,
    pub icon_text_gap: f32,
    pub icon_padding_right: f32,
    /// Room reserved for the icon when sizing the name column.
    pub icon_measure_allowance: f32,
    pub tree_horizontal_gap: f32,
    pub flag_char_width: f32,
    pub flag_box_padding: f32,
    pub flag_gap: f32,
    pub bottom_pad: f32,
    pub not_used_label: String,
    pub todo_marker: String,
    pub notes_separator: String,
    pub diagnostic: DiagnosticConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_source: FontSource::Builtin,
            title: "Structure".to_string(),
            line_height: 16.0,
            min_row_height: 26.0,
            row_top_margin: 4.0,
            row_bottom_margin: 6.0,
            title_height: 32.0,
            header_height: 28.0,
            icon_size: 14.0,
            padding: 8.0,
            indent: 20.0,
            tree_line_width: 1.0,
            min_name_width: 180.0,
            max_name_width: 300.0,
            flags_width: 50.0,
            cardinality_width: 55.0,
            type_width: 220.0,
            description_width: 400.0,
            font_rendering_buffer: 15.0,
            bold_width_factor: 0.90,
            icon_text_gap: 4.0,
            icon_padding_right: 8.0,
            icon_measure_allowance: 12.0,
            tree_horizontal_gap: 2.0,
            flag_char_width: 7.0,
            flag_box_padding: 6.0,
            flag_gap: 4.0,
            bottom_pad: 2.0,
            not_used_label: "Not used".to_string(),
            todo_marker: "TODO".to_string(),
            notes_separator: " - ".to_string(),
            diagnostic: DiagnosticConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Pixel density multiplier for raster output.
    pub scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    header_font_size: Option<f32>,
    title_font_size: Option<f32>,
    flag_font_size: Option<f32>,
    header_bg_color: Option<String>,
    header_text_color: Option<String>,
    row_bg_color: Option<String>,
    alt_row_bg_color: Option<String>,
    border_color: Option<String>,
    link_color: Option<String>,
    text_color: Option<String>,
    not_used_color: Option<String>,
    todo_color: Option<String>,
    tree_line_color: Option<String>,
    resource_icon_color: Option<String>,
    element_icon_color: Option<String>,
    extension_icon_color: Option<String>,
    choice_icon_color: Option<String>,
    reference_icon_color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    title: Option<String>,
    line_height: Option<f32>,
    min_row_height: Option<f32>,
    title_height: Option<f32>,
    header_height: Option<f32>,
    icon_size: Option<f32>,
    padding: Option<f32>,
    indent: Option<f32>,
    min_name_width: Option<f32>,
    max_name_width: Option<f32>,
    flags_width: Option<f32>,
    cardinality_width: Option<f32>,
    type_width: Option<f32>,
    description_width: Option<f32>,
    not_used_label: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutConfigFile>,
    font_source: Option<String>,
    font_file: Option<PathBuf>,
    scale: Option<f32>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Applies a JSON config document on top of the defaults. Every key is optional.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(vars) = parsed.theme_variables {
        let theme = &mut config.theme;
        if let Some(v) = vars.font_family {
            theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            theme.font_size = v;
        }
        if let Some(v) = vars.header_font_size {
            theme.header_font_size = v;
        }
        if let Some(v) = vars.title_font_size {
            theme.title_font_size = v;
        }
        if let Some(v) = vars.flag_font_size {
            theme.flag_font_size = v;
        }
        if let Some(v) = vars.header_bg_color {
            theme.header_background = v;
        }
        if let Some(v) = vars.header_text_color {
            theme.header_text_color = v;
        }
        if let Some(v) = vars.row_bg_color {
            theme.row_background = v;
        }
        if let Some(v) = vars.alt_row_bg_color {
            theme.alt_row_background = v;
        }
        if let Some(v) = vars.border_color {
            theme.border_color = v;
        }
        if let Some(v) = vars.link_color {
            theme.link_color = v;
        }
        if let Some(v) = vars.text_color {
            theme.text_color = v;
        }
        if let Some(v) = vars.not_used_color {
            theme.not_used_color = v;
        }
        if let Some(v) = vars.todo_color {
            theme.todo_color = v;
        }
        if let Some(v) = vars.tree_line_color {
            theme.tree_line_color = v;
        }
        if let Some(v) = vars.resource_icon_color {
            theme.resource_icon_color = v;
        }
        if let Some(v) = vars.element_icon_color {
            theme.element_icon_color = v;
        }
        if let Some(v) = vars.extension_icon_color {
            theme.extension_icon_color = v;
        }
        if let Some(v) = vars.choice_icon_color {
            theme.choice_icon_color = v;
        }
        if let Some(v) = vars.reference_icon_color {
            theme.reference_icon_color = v;
        }
    }

    if let Some(layout) = parsed.layout {
        let target = &mut config.layout;
        if let Some(v) = layout.title {
            target.title = v;
        }
        if let Some(v) = layout.line_height {
            target.line_height = v;
        }
        if let Some(v) = layout.min_row_height {
            target.min_row_height = v;
        }
        if let Some(v) = layout.title_height {
            target.title_height = v;
        }
        if let Some(v) = layout.header_height {
            target.header_height = v;
        }
        if let Some(v) = layout.icon_size {
            target.icon_size = v;
        }
        if let Some(v) = layout.padding {
            target.padding = v;
        }
        if let Some(v) = layout.indent {
            target.indent = v;
        }
        if let Some(v) = layout.min_name_width {
            target.min_name_width = v;
        }
        if let Some(v) = layout.max_name_width {
            target.max_name_width = v;
        }
        if let Some(v) = layout.flags_width {
            target.flags_width = v;
        }
        if let Some(v) = layout.cardinality_width {
            target.cardinality_width = v;
        }
        if let Some(v) = layout.type_width {
            target.type_width = v;
        }
        if let Some(v) = layout.description_width {
            target.description_width = v;
        }
        if let Some(v) = layout.not_used_label {
            target.not_used_label = v;
        }
    }

    if let Some(path) = parsed.font_file {
        config.layout.font_source = FontSource::File(path);
    } else if let Some(source) = parsed.font_source.as_deref() {
        config.layout.font_source = match source {
            "system" => FontSource::System,
            "builtin" => FontSource::Builtin,
            other => anyhow::bail!("unknown fontSource `{other}` (expected builtin or system)"),
        };
    }

    if let Some(v) = parsed.scale {
        config.render.scale = v;
    }

    if config.layout.min_name_width > config.layout.max_name_width {
        anyhow::bail!(
            "minNameWidth ({}) exceeds maxNameWidth ({})",
            config.layout.min_name_width,
            config.layout.max_name_width
        );
    }

    Ok(config)
}
