mod error;
pub mod flatten;
pub mod icon;
mod text;
pub mod tree_lines;
mod types;

pub use flatten::{FlatRow, RowSource, flatten};
pub use icon::{IconKind, select_icon};
pub use tree_lines::{ConnectorShape, TreeGuides, connector_segments};
pub use types::*;

use crate::config::LayoutConfig;
use crate::model::RecordNode;
use crate::text_metrics::TextMeasurer;
use crate::theme::Theme;

/// Lays out a resource definition. Builds its own measurer; if the font cannot
/// be initialized the result is the diagnostic layout instead of an error.
pub fn compute_layout(resource: &RecordNode, theme: &Theme, config: &LayoutConfig) -> Layout {
    match TextMeasurer::new(&config.font_source, &theme.font_family, theme.font_size) {
        Ok(measurer) => compute_layout_with_measurer(resource, &measurer, theme, config),
        Err(err) => {
            tracing::warn!(error = %err, "font initialization failed, rendering diagnostic");
            error::compute_error_layout(config)
        }
    }
}

pub fn compute_layout_with_measurer(
    resource: &RecordNode,
    measurer: &TextMeasurer,
    theme: &Theme,
    config: &LayoutConfig,
) -> Layout {
    let flat = flatten(resource);
    let columns = ColumnWidths {
        name: name_column_width(&resource.name, &flat, measurer, config),
        flags: config.flags_width,
        cardinality: config.cardinality_width,
        type_name: config.type_width,
        description: config.description_width,
    };

    let header_y = config.title_height;
    let mut y = config.title_height + config.header_height;
    let mut rows = Vec::with_capacity(flat.len());
    for (index, row) in flat.iter().enumerate() {
        let wrapped = wrap_row(row, index, y, columns.name, measurer, theme, config);
        y += wrapped.height;
        rows.push(wrapped);
    }

    let width = columns.total();
    let height = canvas_height(&rows, config);
    tracing::debug!(
        rows = rows.len(),
        name_width = columns.name,
        width,
        height,
        "computed structure layout"
    );

    Layout {
        width,
        height,
        diagram: DiagramData::Structure(StructureLayout {
            title: config.title.clone(),
            columns,
            header_y,
            rows,
            font_line_height: measurer.line_height(),
            font_ascent: measurer.ascent(),
        }),
    }
}

/// Width of the name column, shared by every row: the widest
/// indent + icon + name, padded and clamped to the configured bounds.
/// Inverted bounds are swapped and a NaN bound is ignored.
pub fn name_column_width(
    root_name: &str,
    rows: &[FlatRow<'_>],
    measurer: &TextMeasurer,
    config: &LayoutConfig,
) -> f32 {
    let widest = rows
        .iter()
        .map(|row| {
            row.depth as f32 * config.indent
                + config.icon_size
                + config.icon_measure_allowance
                + measurer.measure(row.source.name())
        })
        .fold(measurer.measure(root_name), f32::max);
    let lower = config.min_name_width.min(config.max_name_width);
    let upper = config.min_name_width.max(config.max_name_width);
    (widest + config.padding * 2.0).max(lower).min(upper)
}

/// Height of a row holding `line_count` text lines, never below the minimum.
pub fn row_height(line_count: usize, config: &LayoutConfig) -> f32 {
    let content = config.row_top_margin
        + line_count as f32 * config.line_height
        + config.row_bottom_margin;
    content.max(config.min_row_height)
}

fn canvas_height(rows: &[WrappedRow], config: &LayoutConfig) -> f32 {
    let content: f32 = rows.iter().map(|row| row.height).sum();
    config.title_height + config.header_height + content + config.bottom_pad
}

fn wrap_row(
    row: &FlatRow<'_>,
    index: usize,
    y: f32,
    name_width: f32,
    measurer: &TextMeasurer,
    theme: &Theme,
    config: &LayoutConfig,
) -> WrappedRow {
    let source = &row.source;
    let indent = row.depth as f32 * config.indent;

    let name_budget = name_width
        - (indent + config.icon_size + config.icon_padding_right)
        - config.padding
        - config.font_rendering_buffer;
    let type_budget = config.type_width - config.padding * 2.0 - config.font_rendering_buffer;
    let description_budget =
        config.description_width - config.padding * 2.0 - config.font_rendering_buffer;
    let cardinality_budget = config.cardinality_width - config.padding * 2.0;

    let name_style = text::name_style(source);
    let name_lines = text::wrap_name(measurer, source.name(), name_budget);
    let type_lines = measurer.wrap(source.type_name(), type_budget);
    let (description, description_style) = text::description_text(source, config);
    let description_lines =
        text::wrap_cell(measurer, &description, description_budget, description_style, config);

    let line_count = name_lines
        .len()
        .max(type_lines.len())
        .max(description_lines.len());
    let height = row_height(line_count, config);

    let baseline_y = y + config.row_top_margin + theme.font_size;
    let first_line_center = y + config.row_top_margin + theme.font_size / 2.0;
    let guides = TreeGuides {
        origin_x: config.padding,
        indent: config.indent,
        icon_gap: config.tree_horizontal_gap,
    };
    let connectors = connector_segments(
        &guides,
        row.depth,
        &row.ancestors,
        row.is_last,
        y,
        height,
        first_line_center,
    );
    let icon_x = config.padding + indent;
    let icon_y = first_line_center - config.icon_size / 2.0;
    let is_root = index == 0;

    WrappedRow {
        path: row.path.clone(),
        depth: row.depth,
        is_last: row.is_last,
        ancestors: row.ancestors.clone(),
        is_root,
        is_alt: index % 2 == 1,
        icon: select_icon(source.type_name(), is_root, source.has_children()),
        name_lines,
        name_style,
        flags: source.flags().to_vec(),
        cardinality: measurer.truncate_with_ellipsis(source.cardinality(), cardinality_budget),
        type_lines,
        type_ref: source.type_ref().map(str::to_string),
        description_lines,
        description_style,
        y,
        height,
        baseline_y,
        icon_x,
        icon_y,
        name_x: icon_x + config.icon_size + config.icon_text_gap,
        connectors,
    }
}
