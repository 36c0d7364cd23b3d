use super::types::LineSegment;

/// Horizontal placement of the tree guides.
#[derive(Debug, Clone, Copy)]
pub struct TreeGuides {
    /// Left edge of the depth-0 indent column.
    pub origin_x: f32,
    pub indent: f32,
    /// Space left between the horizontal stub and the icon.
    pub icon_gap: f32,
}

impl TreeGuides {
    /// Center of the connector column used by rows at `depth`.
    pub fn column_x(&self, depth: usize) -> f32 {
        debug_assert!(depth > 0);
        self.origin_x + (depth - 1) as f32 * self.indent + self.indent / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorShape {
    /// Last sibling: the vertical stops at the first text line.
    Elbow,
    /// More siblings follow: the vertical spans the whole row.
    Through,
}

impl ConnectorShape {
    pub fn for_row(is_last: bool) -> Self {
        if is_last {
            ConnectorShape::Elbow
        } else {
            ConnectorShape::Through
        }
    }
}

/// Line segments drawn left of a row's icon. The root draws nothing.
pub fn connector_segments(
    guides: &TreeGuides,
    depth: usize,
    ancestors: &[bool],
    is_last: bool,
    y: f32,
    row_height: f32,
    first_line_y: f32,
) -> Vec<LineSegment> {
    if depth == 0 {
        return Vec::new();
    }

    let mut segments: Vec<LineSegment> = ancestors
        .iter()
        .take(depth - 1)
        .enumerate()
        .filter(|(_, was_last)| !**was_last)
        .map(|(idx, _)| LineSegment::vertical(guides.column_x(idx + 1), y, y + row_height))
        .collect();

    let connector_x = guides.column_x(depth);
    let bottom = match ConnectorShape::for_row(is_last) {
        ConnectorShape::Elbow => first_line_y,
        ConnectorShape::Through => y + row_height,
    };
    segments.push(LineSegment::vertical(connector_x, y, bottom));

    let stub_end = guides.origin_x + depth as f32 * guides.indent - guides.icon_gap;
    segments.push(LineSegment::horizontal(first_line_y, connector_x, stub_end));
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUIDES: TreeGuides = TreeGuides {
        origin_x: 8.0,
        indent: 20.0,
        icon_gap: 2.0,
    };

    #[test]
    fn root_has_no_connector() {
        assert!(connector_segments(&GUIDES, 0, &[], true, 60.0, 26.0, 70.0).is_empty());
    }

    #[test]
    fn last_child_draws_elbow() {
        let segments = connector_segments(&GUIDES, 1, &[], true, 60.0, 26.0, 70.0);
        assert_eq!(
            segments,
            vec![
                LineSegment::vertical(18.0, 60.0, 70.0),
                LineSegment::horizontal(70.0, 18.0, 26.0),
            ]
        );
    }

    #[test]
    fn middle_child_draws_through_line() {
        let segments = connector_segments(&GUIDES, 1, &[], false, 60.0, 26.0, 70.0);
        assert_eq!(segments[0], LineSegment::vertical(18.0, 60.0, 86.0));
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn ancestor_lines_continue_only_for_non_last_ancestors() {
        let segments = connector_segments(&GUIDES, 3, &[false, true], true, 0.0, 30.0, 10.0);
        let verticals: Vec<f32> = segments
            .iter()
            .filter(|segment| segment.is_vertical())
            .map(|segment| segment.x1)
            .collect();
        assert_eq!(verticals, vec![18.0, 58.0]);
        assert_eq!(segments[0], LineSegment::vertical(18.0, 0.0, 30.0));
        assert_eq!(segments[2], LineSegment::horizontal(10.0, 58.0, 66.0));
    }

    #[test]
    fn extra_ancestor_bits_are_ignored() {
        let segments = connector_segments(&GUIDES, 1, &[false], true, 0.0, 26.0, 10.0);
        assert_eq!(segments.len(), 2);
    }
}
