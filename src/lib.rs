#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod layout;
pub mod layout_dump;
pub mod model;
pub mod render;
pub mod text_metrics;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, FontSource, LayoutConfig, RenderConfig, load_config};
pub use layout::{Layout, compute_layout};
pub use model::{ExtensionNode, ModelError, RecordNode, Usage, parse_resource};
pub use render::render_svg;
pub use theme::Theme;

/// Options for rendering a structure diagram.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

/// Renders a resource definition to an SVG document with default options.
///
/// Never fails: if the font cannot be loaded the result is a small
/// diagnostic SVG carrying the error message.
pub fn render(resource: &RecordNode) -> String {
    render_with_options(resource, &RenderOptions::default())
}

pub fn render_with_options(resource: &RecordNode, options: &RenderOptions) -> String {
    let layout = compute_layout(resource, &options.theme, &options.layout);
    render_svg(&layout, &options.theme, &options.layout)
}
