use crate::layout::{DiagramData, Layout, WrappedRow};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub kind: String,
    pub width: f32,
    pub height: f32,
    pub title: Option<String>,
    pub columns: Option<[f32; 5]>,
    pub font_line_height: Option<f32>,
    pub font_ascent: Option<f32>,
    pub rows: Vec<RowDump>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RowDump {
    pub path: String,
    pub depth: usize,
    pub is_last: bool,
    pub ancestors: Vec<bool>,
    pub icon: String,
    pub y: f32,
    pub height: f32,
    pub name_lines: Vec<String>,
    pub type_lines: Vec<String>,
    pub description_lines: Vec<String>,
    pub style: String,
}

impl RowDump {
    fn from_row(row: &WrappedRow) -> Self {
        RowDump {
            path: row.path.clone(),
            depth: row.depth,
            is_last: row.is_last,
            ancestors: row.ancestors.clone(),
            icon: row.icon.as_str().to_string(),
            y: row.y,
            height: row.height,
            name_lines: row.name_lines.clone(),
            type_lines: row.type_lines.clone(),
            description_lines: row.description_lines.clone(),
            style: row.description_style.class_name().to_string(),
        }
    }
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        match &layout.diagram {
            DiagramData::Structure(structure) => LayoutDump {
                kind: "structure".to_string(),
                width: layout.width,
                height: layout.height,
                title: Some(structure.title.clone()),
                columns: Some(structure.columns.widths()),
                font_line_height: Some(structure.font_line_height),
                font_ascent: Some(structure.font_ascent),
                rows: structure.rows.iter().map(RowDump::from_row).collect(),
                message: None,
            },
            DiagramData::Error(error) => LayoutDump {
                kind: "error".to_string(),
                width: layout.width,
                height: layout.height,
                title: None,
                columns: None,
                font_line_height: None,
                font_ascent: None,
                rows: Vec::new(),
                message: Some(error.message.clone()),
            },
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
