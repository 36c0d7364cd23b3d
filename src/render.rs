use crate::config::{LayoutConfig, RenderConfig};
use crate::layout::{
    DiagramData, ErrorLayout, IconKind, Layout, LineSegment, StructureLayout, TextStyle, WrappedRow,
};
use crate::theme::Theme;
use anyhow::Result;
use std::borrow::Cow;
use std::fmt::Write as _;
use std::path::Path;

const COLUMN_HEADERS: [&str; 5] = ["Name", "Flags", "Card.", "Type", "Description & Constraints"];
const CLIP_IDS: [&str; 5] = ["name", "flags", "card", "type", "desc"];
const HEADER_TEXT_MARGIN: f32 = 6.0;
const HEADER_BASELINE_OFFSET: f32 = 5.0;
const CELL_BASELINE_OFFSET: f32 = 4.0;
const BORDER_STROKE_WIDTH: f32 = 0.5;
const FLAG_BOX_TOP: f32 = -8.0;
const FLAG_BOX_HEIGHT: f32 = 14.0;
const FLAG_BASELINE: f32 = 2.0;
const FLAG_TEXT_INSET: f32 = 3.0;

pub fn render_svg(layout: &Layout, theme: &Theme, config: &LayoutConfig) -> String {
    match &layout.diagram {
        DiagramData::Structure(structure) => render_structure(layout, structure, theme, config),
        DiagramData::Error(error) => render_error(layout, error, theme),
    }
}

fn render_structure(
    layout: &Layout,
    structure: &StructureLayout,
    theme: &Theme,
    config: &LayoutConfig,
) -> String {
    let mut svg = String::new();
    let width = layout.width;
    let height = layout.height;

    svg.push_str(&format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" width=\"{width:.2}\" height=\"{height:.2}\" viewBox=\"0 0 {width:.2} {height:.2}\">\n",
    ));
    svg.push_str("<defs>\n");
    svg.push_str(&style_block(theme));
    svg.push_str(&clip_paths(structure, height));
    svg.push_str("</defs>\n");

    svg.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{width:.2}\" height=\"{:.2}\" fill=\"{}\" stroke=\"{}\"/>\n",
        config.title_height, theme.header_background, theme.border_color
    ));
    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" class=\"title-text\">{}</text>\n",
        config.padding,
        config.title_height / 2.0 + HEADER_BASELINE_OFFSET,
        escape_xml(&structure.title)
    ));

    svg.push_str(&header_row(structure, width, theme, config));
    for row in &structure.rows {
        svg.push_str(&data_row(row, structure, width, theme, config));
    }

    svg.push_str("</svg>");
    svg
}

fn style_block(theme: &Theme) -> String {
    let family = escape_xml(&theme.font_family);
    let size = theme.font_size;
    format!(
        "<style>
.header-text {{ font-family: {family}; font-size: {}px; font-weight: bold; fill: {}; }}
.cell-text {{ font-family: {family}; font-size: {size}px; fill: {}; }}
.link-text {{ font-family: {family}; font-size: {size}px; fill: {}; cursor: pointer; }}
.not-used {{ font-family: {family}; font-size: {size}px; fill: {}; font-style: italic; }}
.todo {{ font-family: {family}; font-size: {size}px; fill: {}; font-weight: bold; }}
.flag-box {{ font-family: {family}; font-size: {}px; fill: {}; }}
.title-text {{ font-family: {family}; font-size: {}px; font-weight: bold; fill: {}; }}
</style>
",
        theme.header_font_size,
        theme.header_text_color,
        theme.text_color,
        theme.link_color,
        theme.not_used_color,
        theme.todo_color,
        theme.flag_font_size,
        theme.text_color,
        theme.title_font_size,
        theme.header_text_color,
    )
}

fn clip_paths(structure: &StructureLayout, height: f32) -> String {
    let mut out = String::new();
    let starts = structure.columns.starts();
    let widths = structure.columns.widths();
    for ((id, x), width) in CLIP_IDS.iter().zip(starts).zip(widths) {
        let _ = writeln!(
            out,
            "<clipPath id=\"clip-{id}\"><rect x=\"{x:.2}\" y=\"0\" width=\"{width:.2}\" height=\"{height:.2}\"/></clipPath>"
        );
    }
    out
}

fn header_row(structure: &StructureLayout, width: f32, theme: &Theme, config: &LayoutConfig) -> String {
    let mut out = String::new();
    let y = structure.header_y;
    let bottom = y + config.header_height;
    let _ = writeln!(
        out,
        "<rect x=\"0\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{:.2}\" fill=\"{}\" stroke=\"{}\"/>",
        config.header_height, theme.header_background, theme.border_color
    );

    let text_y = y + config.header_height / 2.0 + HEADER_BASELINE_OFFSET;
    let starts = structure.columns.starts();
    for (idx, (label, start)) in COLUMN_HEADERS.iter().zip(starts).enumerate() {
        let _ = writeln!(
            out,
            "<text x=\"{:.2}\" y=\"{text_y:.2}\" class=\"header-text\">{}</text>",
            start + config.padding + HEADER_TEXT_MARGIN,
            escape_xml(label)
        );
        if idx > 0 {
            out.push_str(&separator(start, y, bottom, theme));
        }
    }
    out
}

fn data_row(
    row: &WrappedRow,
    structure: &StructureLayout,
    width: f32,
    theme: &Theme,
    config: &LayoutConfig,
) -> String {
    let mut out = String::new();
    let y = row.y;
    let bottom = y + row.height;
    let [_, flags_x, card_x, type_x, desc_x] = structure.columns.starts();
    let background = if row.is_alt {
        &theme.alt_row_background
    } else {
        &theme.row_background
    };

    let _ = writeln!(
        out,
        "<rect x=\"0\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{:.2}\" fill=\"{background}\"/>",
        row.height
    );
    let _ = writeln!(
        out,
        "<line x1=\"0\" y1=\"{bottom:.2}\" x2=\"{width:.2}\" y2=\"{bottom:.2}\" stroke=\"{}\" stroke-width=\"{BORDER_STROKE_WIDTH}\"/>",
        theme.border_color
    );

    for segment in &row.connectors {
        out.push_str(&tree_line(segment, theme, config));
    }
    out.push_str(&render_icon(row.icon, row.icon_x, row.icon_y, config.icon_size, theme));
    out.push('\n');

    out.push_str("<g clip-path=\"url(#clip-name)\">\n");
    text_lines(&mut out, &row.name_lines, row.name_x, row.baseline_y, row.name_style, config);
    out.push_str("</g>\n");
    out.push_str(&separator(flags_x, y, bottom, theme));

    let _ = writeln!(
        out,
        "<g clip-path=\"url(#clip-flags)\"><g transform=\"translate({:.2},{:.2})\">{}</g></g>",
        flags_x + config.padding,
        y + row.height / 2.0,
        render_flags(&row.flags, theme, config)
    );
    out.push_str(&separator(card_x, y, bottom, theme));

    let _ = writeln!(
        out,
        "<g clip-path=\"url(#clip-card)\"><text x=\"{:.2}\" y=\"{:.2}\" class=\"cell-text\">{}</text></g>",
        card_x + config.padding,
        y + row.height / 2.0 + CELL_BASELINE_OFFSET,
        escape_xml(&row.cardinality)
    );
    out.push_str(&separator(type_x, y, bottom, theme));

    out.push_str("<g clip-path=\"url(#clip-type)\">\n");
    for (idx, line) in row.type_lines.iter().enumerate() {
        let line_y = row.baseline_y + idx as f32 * config.line_height;
        let text = format!(
            "<text x=\"{:.2}\" y=\"{line_y:.2}\" class=\"link-text\">{}</text>",
            type_x + config.padding,
            escape_xml(line)
        );
        match row.type_ref.as_deref() {
            Some(href) if idx == 0 => {
                let _ = writeln!(
                    out,
                    "<a xlink:href=\"{}\" target=\"_blank\">{text}</a>",
                    escape_xml(href)
                );
            }
            _ => {
                out.push_str(&text);
                out.push('\n');
            }
        }
    }
    out.push_str("</g>\n");
    out.push_str(&separator(desc_x, y, bottom, theme));

    out.push_str("<g clip-path=\"url(#clip-desc)\">\n");
    text_lines(
        &mut out,
        &row.description_lines,
        desc_x + config.padding,
        row.baseline_y,
        row.description_style,
        config,
    );
    out.push_str("</g>\n");
    out
}

fn text_lines(
    out: &mut String,
    lines: &[String],
    x: f32,
    baseline_y: f32,
    style: TextStyle,
    config: &LayoutConfig,
) {
    for (idx, line) in lines.iter().enumerate() {
        let line_y = baseline_y + idx as f32 * config.line_height;
        let _ = writeln!(
            out,
            "<text x=\"{x:.2}\" y=\"{line_y:.2}\" class=\"{}\">{}</text>",
            style.class_name(),
            escape_xml(line)
        );
    }
}

fn separator(x: f32, y1: f32, y2: f32, theme: &Theme) -> String {
    format!(
        "<line x1=\"{x:.2}\" y1=\"{y1:.2}\" x2=\"{x:.2}\" y2=\"{y2:.2}\" stroke=\"{}\"/>\n",
        theme.border_color
    )
}

fn tree_line(segment: &LineSegment, theme: &Theme, config: &LayoutConfig) -> String {
    format!(
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
        segment.x1,
        segment.y1,
        segment.x2,
        segment.y2,
        theme.tree_line_color,
        config.tree_line_width
    )
}

/// Display text for a flag and whether it is drawn inside a box.
fn flag_glyph(flag: &str) -> (Cow<'_, str>, bool) {
    match flag {
        "S" => (Cow::Borrowed("\u{03A3}"), false),
        "?!" => (Cow::Borrowed("?!\u{03A3}"), false),
        "TU" | "N" => (Cow::Borrowed(flag), true),
        other => (Cow::Borrowed(other), false),
    }
}

/// Flags laid out left to right from the origin of the enclosing group.
fn render_flags(flags: &[String], theme: &Theme, config: &LayoutConfig) -> String {
    let mut out = String::new();
    let mut x = 0.0f32;
    for flag in flags {
        let (text, boxed) = flag_glyph(flag);
        let text_width = text.chars().count() as f32 * config.flag_char_width;
        if boxed {
            let box_width = text_width + config.flag_box_padding;
            let _ = write!(
                out,
                "<rect x=\"{x:.2}\" y=\"{FLAG_BOX_TOP}\" width=\"{box_width:.2}\" height=\"{FLAG_BOX_HEIGHT}\" fill=\"none\" stroke=\"{}\" rx=\"2\"/>",
                theme.border_color
            );
            let _ = write!(
                out,
                "<text x=\"{:.2}\" y=\"{FLAG_BASELINE}\" class=\"flag-box\">{}</text>",
                x + FLAG_TEXT_INSET,
                escape_xml(&text)
            );
            x += box_width + config.flag_gap;
        } else {
            let _ = write!(
                out,
                "<text x=\"{x:.2}\" y=\"{FLAG_BASELINE}\" class=\"flag-box\">{}</text>",
                escape_xml(&text)
            );
            x += text_width + config.flag_gap;
        }
    }
    out
}

fn render_icon(kind: IconKind, x: f32, y: f32, size: f32, theme: &Theme) -> String {
    match kind {
        IconKind::Resource => folder_icon(x, y, size, &theme.resource_icon_color, true),
        IconKind::Backbone => folder_icon(x, y, size, &theme.resource_icon_color, false),
        IconKind::Element => diamond_icon(x, y, size, &theme.element_icon_color),
        IconKind::Extension => extension_icon(x, y, size, &theme.extension_icon_color, theme),
        IconKind::Choice => choice_icon(x, y, size, &theme.choice_icon_color),
        IconKind::Reference => reference_icon(x, y, size, &theme.reference_icon_color),
    }
}

fn folder_icon(x: f32, y: f32, size: f32, color: &str, filled: bool) -> String {
    let w = size * 0.9;
    let h = size * 0.7;
    let tab_w = w * 0.4;
    let tab_h = h * 0.2;
    let fill = if filled { color } else { "#FFFFFF" };
    let mut out = format!(
        "<g transform=\"translate({x:.2},{y:.2})\"><path d=\"M0,{tab_h:.2} L0,{h:.2} L{w:.2},{h:.2} L{w:.2},{tab_h:.2} L{:.2},{tab_h:.2} L{tab_w:.2},0 L0,0 Z\" fill=\"{fill}\" stroke=\"{color}\" stroke-width=\"1\"/>",
        tab_w + 2.0
    );
    if !filled {
        let _ = write!(
            out,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{color}\"/>",
            w / 2.0,
            h * 0.6,
            size * 0.12
        );
    }
    out.push_str("</g>");
    out
}

fn diamond_icon(x: f32, y: f32, size: f32, color: &str) -> String {
    let half = size / 2.0;
    format!(
        "<polygon points=\"{:.2},{y:.2} {:.2},{:.2} {:.2},{:.2} {x:.2},{:.2}\" fill=\"{color}\" stroke=\"{color}\" stroke-width=\"0.5\"/>",
        x + half,
        x + size,
        y + half,
        x + half,
        y + size,
        y + half
    )
}

fn extension_icon(x: f32, y: f32, size: f32, color: &str, theme: &Theme) -> String {
    let r = size / 2.0;
    let (cx, cy) = (x + r, y + r);
    format!(
        "<g><circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" fill=\"{color}\"/><text x=\"{cx:.2}\" y=\"{cy:.2}\" fill=\"white\" font-family=\"{}\" font-size=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-weight=\"bold\">E</text></g>",
        escape_xml(&theme.font_family),
        size * 0.6
    )
}

fn choice_icon(x: f32, y: f32, size: f32, color: &str) -> String {
    let r = size / 2.0;
    let (cx, cy) = (x + r, y + r);
    format!(
        "<g><circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" fill=\"{color}\"/><line x1=\"{cx:.2}\" y1=\"{:.2}\" x2=\"{cx:.2}\" y2=\"{:.2}\" stroke=\"white\" stroke-width=\"1.5\"/></g>",
        cy - r * 0.5,
        cy + r * 0.5
    )
}

fn reference_icon(x: f32, y: f32, size: f32, color: &str) -> String {
    let arrow = size * 0.8;
    let start_x = x + size * 0.1;
    let mid_y = y + size / 2.0;
    format!(
        "<g><line x1=\"{start_x:.2}\" y1=\"{mid_y:.2}\" x2=\"{:.2}\" y2=\"{mid_y:.2}\" stroke=\"{color}\" stroke-width=\"2\"/><polygon points=\"{:.2},{:.2} {:.2},{mid_y:.2} {:.2},{:.2}\" fill=\"{color}\"/></g>",
        start_x + arrow * 0.6,
        start_x + arrow * 0.5,
        mid_y - arrow * 0.3,
        start_x + arrow,
        start_x + arrow * 0.5,
        mid_y + arrow * 0.3
    )
}

fn render_error(layout: &Layout, error: &ErrorLayout, theme: &Theme) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\">\n<text x=\"{:.0}\" y=\"{:.0}\" font-family=\"{}\" font-size=\"{}\">{}</text>\n</svg>",
        layout.width,
        layout.height,
        error.text_x,
        error.text_y,
        escape_xml(&theme.font_family),
        error.font_size,
        escape_xml(&error.message)
    )
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let scale = if render_cfg.scale > 0.0 { render_cfg.scale } else { 1.0 };
    let size = tree.size().to_int_size().scale_by(scale).ok_or_else(|| {
        anyhow::anyhow!("Invalid output size at scale {scale}")
    })?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap_mut,
    );
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    anyhow::bail!("PNG output requires the `png` feature")
}

pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FontSource;
    use crate::layout::compute_layout;
    use crate::model::{ExtensionNode, RecordNode, Usage};

    fn render(resource: &RecordNode) -> String {
        let theme = Theme::standard();
        let config = LayoutConfig::default();
        let layout = compute_layout(resource, &theme, &config);
        render_svg(&layout, &theme, &config)
    }

    #[test]
    fn render_svg_basic() {
        let resource = RecordNode::new("MyResource", "DomainResource");
        let svg = render(&resource);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(">MyResource</text>"));
        assert!(svg.contains(">Structure</text>"));
        assert_eq!(svg.matches("<clipPath ").count(), 5);
        // Root only: no tree guides.
        assert!(!svg.contains("#CCCCCC\" stroke-width=\"1\"/>"));
    }

    #[test]
    fn sections_are_emitted_in_order() {
        let resource = RecordNode::new("MyResource", "DomainResource")
            .with_child(RecordNode::new("id", "id").with_cardinality("0..1"));
        let svg = render(&resource);
        let style = svg.find("<style>").unwrap();
        let clip = svg.find("<clipPath").unwrap();
        let title = svg.find("class=\"title-text\"").unwrap();
        let header = svg.find("class=\"header-text\"").unwrap();
        let child = svg.find(">id</text>").unwrap();
        assert!(style < clip && clip < title && title < header && header < child);
    }

    #[test]
    fn root_declares_canvas_size() {
        let resource = RecordNode::new("MyResource", "DomainResource");
        let theme = Theme::standard();
        let config = LayoutConfig::default();
        let layout = compute_layout(&resource, &theme, &config);
        let svg = render_svg(&layout, &theme, &config);
        assert!(svg.contains(&format!(
            "width=\"{:.2}\" height=\"{:.2}\"",
            layout.width, layout.height
        )));
    }

    #[test]
    fn escapes_reserved_characters() {
        let mut child = RecordNode::new("value<x>", "Quantity & \"Range\"");
        child.description = "Tom's <b>bold</b>".to_string();
        let svg = render(&RecordNode::new("R", "DomainResource").with_child(child));
        assert!(svg.contains("value&lt;x&gt;"));
        assert!(svg.contains("Quantity &amp; &quot;Range&quot;"));
        assert!(svg.contains("Tom&apos;s &lt;b&gt;bold&lt;/b&gt;"));
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn flags_render_symbols_and_boxes() {
        let theme = Theme::standard();
        let config = LayoutConfig::default();
        let flags: Vec<String> = ["S", "?!", "TU", "I"].iter().map(|f| f.to_string()).collect();
        let out = render_flags(&flags, &theme, &config);
        assert!(out.contains(">\u{03A3}</text>"));
        assert!(out.contains(">?!\u{03A3}</text>"));
        assert_eq!(out.matches("<rect").count(), 1);
        assert!(out.contains("width=\"20.00\""));
        // Σ (1 char) then ?!Σ (3 chars) then the boxed TU.
        assert!(out.contains("<rect x=\"36.00\""));
        assert!(out.contains("<text x=\"39.00\" y=\"2\" class=\"flag-box\">TU</text>"));
        assert!(out.contains("<text x=\"60.00\" y=\"2\" class=\"flag-box\">I</text>"));
    }

    #[test]
    fn type_reference_links_first_line_only() {
        let mut child = RecordNode::new("subject", "Reference(Patient | Group)");
        child.type_ref = Some("https://hl7.org/fhir/references.html?a=1&b=2".to_string());
        let svg = render(&RecordNode::new("R", "DomainResource").with_child(child));
        assert_eq!(svg.matches("<a xlink:href=").count(), 1);
        assert!(svg.contains("references.html?a=1&amp;b=2"));
    }

    #[test]
    fn usage_styles_description_text() {
        let mut unused = RecordNode::new("partOf", "Reference(Encounter)");
        unused.usage = Usage::NotUsed;
        let mut todo = RecordNode::new("status", "code");
        todo.usage = Usage::Todo;
        todo.description = "fix this".to_string();
        let svg = render(
            &RecordNode::new("Encounter", "DomainResource")
                .with_child(unused)
                .with_child(todo),
        );
        assert!(svg.contains("class=\"not-used\">Not used</text>"));
        assert!(svg.contains("class=\"todo\">TODO: fix this</text>"));
        assert!(svg.contains(".not-used { font-family: Arial, sans-serif; font-size: 12px; fill: #999999; font-style: italic; }"));
        assert!(svg.contains(".todo { font-family: Arial, sans-serif; font-size: 12px; fill: #FF6600; font-weight: bold; }"));
    }

    #[test]
    fn icons_follow_row_kinds() {
        let resource = RecordNode::new("Encounter", "DomainResource")
            .with_child(RecordNode::new("value[x]", "Quantity"))
            .with_extension(ExtensionNode::new("origin", "http://example.org/origin"));
        let svg = render(&resource);
        assert!(svg.contains("fill=\"#FDB813\" stroke=\"#FDB813\""));
        assert!(svg.contains(">E</text>"));
        assert!(svg.contains("<polygon"));
    }

    #[test]
    fn alternate_rows_are_shaded() {
        let resource = RecordNode::new("Encounter", "DomainResource")
            .with_child(RecordNode::new("status", "code"))
            .with_child(RecordNode::new("class", "Coding"));
        let svg = render(&resource);
        assert_eq!(svg.matches("fill=\"#F8F8F8\"/>").count(), 1);
    }

    #[test]
    fn diagnostic_document_when_font_missing() {
        let theme = Theme::standard();
        let config = LayoutConfig {
            font_source: FontSource::File("/nonexistent/font.ttf".into()),
            ..LayoutConfig::default()
        };
        let layout = compute_layout(&RecordNode::new("R", "DomainResource"), &theme, &config);
        let svg = render_svg(&layout, &theme, &config);
        assert!(svg.contains("width=\"400\" height=\"100\""));
        assert!(svg.contains("Error: Could not load font for text measurement"));
        assert!(!svg.contains("<clipPath"));
    }

    #[test]
    fn rendering_is_byte_identical() {
        let resource = RecordNode::new("Encounter", "DomainResource").with_child(
            RecordNode::new("participant", "BackboneElement")
                .with_child(RecordNode::new("type", "CodeableConcept"))
                .with_extension(ExtensionNode::new("role", "http://example.org/role")),
        );
        assert_eq!(render(&resource), render(&resource));
    }

    #[test]
    fn escape_xml_handles_all_reserved() {
        assert_eq!(escape_xml("&<>\"'"), "&amp;&lt;&gt;&quot;&apos;");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
