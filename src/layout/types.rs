use super::icon::IconKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl LineSegment {
    pub fn vertical(x: f32, y1: f32, y2: f32) -> Self {
        Self { x1: x, y1, x2: x, y2 }
    }

    pub fn horizontal(y: f32, x1: f32, x2: f32) -> Self {
        Self { x1, y1: y, x2, y2: y }
    }

    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }
}

/// Text class a cell is emitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Plain,
    Link,
    NotUsed,
    Todo,
}

impl TextStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            TextStyle::Plain => "cell-text",
            TextStyle::Link => "link-text",
            TextStyle::NotUsed => "not-used",
            TextStyle::Todo => "todo",
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, TextStyle::Todo)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnWidths {
    pub name: f32,
    pub flags: f32,
    pub cardinality: f32,
    pub type_name: f32,
    pub description: f32,
}

impl ColumnWidths {
    pub fn total(&self) -> f32 {
        self.name + self.flags + self.cardinality + self.type_name + self.description
    }

    /// Widths in display order.
    pub fn widths(&self) -> [f32; 5] {
        [
            self.name,
            self.flags,
            self.cardinality,
            self.type_name,
            self.description,
        ]
    }

    /// Left edge of each column.
    pub fn starts(&self) -> [f32; 5] {
        let mut starts = [0.0; 5];
        let mut x = 0.0;
        for (start, width) in starts.iter_mut().zip(self.widths()) {
            *start = x;
            x += width;
        }
        starts
    }
}

/// A flattened row with its wrapped text and final geometry.
#[derive(Debug, Clone)]
pub struct WrappedRow {
    pub path: String,
    pub depth: usize,
    pub is_last: bool,
    pub ancestors: Vec<bool>,
    pub is_root: bool,
    pub is_alt: bool,
    pub icon: IconKind,
    pub name_lines: Vec<String>,
    pub name_style: TextStyle,
    pub flags: Vec<String>,
    pub cardinality: String,
    pub type_lines: Vec<String>,
    pub type_ref: Option<String>,
    pub description_lines: Vec<String>,
    pub description_style: TextStyle,
    pub y: f32,
    pub height: f32,
    pub baseline_y: f32,
    pub icon_x: f32,
    pub icon_y: f32,
    pub name_x: f32,
    pub connectors: Vec<LineSegment>,
}

impl WrappedRow {
    pub fn line_count(&self) -> usize {
        self.name_lines
            .len()
            .max(self.type_lines.len())
            .max(self.description_lines.len())
    }
}

#[derive(Debug, Clone)]
pub struct StructureLayout {
    pub title: String,
    pub columns: ColumnWidths,
    pub header_y: f32,
    pub rows: Vec<WrappedRow>,
    /// Measured font metrics, reported for inspection only. Row geometry is
    /// driven by the configured line height and the theme's font size.
    pub font_line_height: f32,
    pub font_ascent: f32,
}

#[derive(Debug, Clone)]
pub struct ErrorLayout {
    pub message: String,
    pub text_x: f32,
    pub text_y: f32,
    pub font_size: f32,
}

#[derive(Debug, Clone)]
pub enum DiagramData {
    Structure(StructureLayout),
    Error(ErrorLayout),
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub diagram: DiagramData,
}

impl Layout {
    pub fn structure(&self) -> Option<&StructureLayout> {
        match &self.diagram {
            DiagramData::Structure(structure) => Some(structure),
            DiagramData::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.diagram, DiagramData::Error(_))
    }
}
