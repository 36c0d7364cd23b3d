use crate::config::LayoutConfig;

use super::{DiagramData, ErrorLayout, Layout};

/// Fixed-size layout shown when text cannot be measured.
pub(super) fn compute_error_layout(config: &LayoutConfig) -> Layout {
    let diagnostic = &config.diagnostic;
    Layout {
        width: diagnostic.width.max(1.0),
        height: diagnostic.height.max(1.0),
        diagram: DiagramData::Error(ErrorLayout {
            message: diagnostic.message.clone(),
            text_x: diagnostic.text_x,
            text_y: diagnostic.text_y,
            font_size: diagnostic.font_size,
        }),
    }
}
