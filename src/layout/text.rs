use crate::config::LayoutConfig;
use crate::model::Usage;
use crate::text_metrics::TextMeasurer;

use super::flatten::RowSource;
use super::types::TextStyle;

/// Builds the description cell text and its style from the element's
/// description, usage annotation and notes.
pub(super) fn description_text(source: &RowSource<'_>, config: &LayoutConfig) -> (String, TextStyle) {
    let usage = source.usage();
    let mut text = source.description().to_string();
    let style = match usage {
        Usage::NotUsed => {
            if text.is_empty() {
                text = config.not_used_label.clone();
            }
            TextStyle::NotUsed
        }
        Usage::Todo => {
            if !text.starts_with(&config.todo_marker) {
                text = format!("{}: {}", config.todo_marker, text)
                    .trim_end()
                    .to_string();
            }
            TextStyle::Todo
        }
        Usage::Used | Usage::Optional => TextStyle::Plain,
    };

    let notes = source.notes();
    if !notes.is_empty() && usage != Usage::NotUsed {
        if !text.is_empty() {
            text.push_str(&config.notes_separator);
        }
        text.push_str(notes);
    }

    (text, style)
}

pub(super) fn name_style(source: &RowSource<'_>) -> TextStyle {
    if source.usage() == Usage::NotUsed {
        TextStyle::NotUsed
    } else {
        TextStyle::Link
    }
}

/// Names usually fit on one line; they are only wrapped when they overflow.
pub(super) fn wrap_name(measurer: &TextMeasurer, name: &str, max_width: f32) -> Vec<String> {
    if measurer.measure(name) > max_width {
        measurer.wrap(name, max_width)
    } else {
        vec![name.to_string()]
    }
}

/// Wraps a cell, shrinking the budget for bold text whose glyphs run wider
/// than the regular advances the measurer knows about.
pub(super) fn wrap_cell(
    measurer: &TextMeasurer,
    text: &str,
    max_width: f32,
    style: TextStyle,
    config: &LayoutConfig,
) -> Vec<String> {
    let budget = if style.is_bold() {
        max_width * config.bold_width_factor
    } else {
        max_width
    };
    measurer.wrap(text, budget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FontSource;
    use crate::model::RecordNode;

    fn node(description: &str, usage: Usage, notes: &str) -> RecordNode {
        RecordNode {
            description: description.to_string(),
            usage,
            notes: notes.to_string(),
            ..RecordNode::new("field", "string")
        }
    }

    fn describe(node: &RecordNode) -> (String, TextStyle) {
        description_text(&RowSource::Node(node), &LayoutConfig::default())
    }

    #[test]
    fn plain_description_passes_through() {
        let element = node("Business identifier", Usage::Used, "");
        assert_eq!(
            describe(&element),
            ("Business identifier".to_string(), TextStyle::Plain)
        );
    }

    #[test]
    fn not_used_without_description_gets_placeholder() {
        let element = node("", Usage::NotUsed, "ignored notes");
        assert_eq!(describe(&element), ("Not used".to_string(), TextStyle::NotUsed));
        let element = node("Legacy field", Usage::NotUsed, "");
        assert_eq!(describe(&element).0, "Legacy field");
    }

    #[test]
    fn todo_gets_marker_once() {
        let element = node("fix this", Usage::Todo, "");
        assert_eq!(describe(&element), ("TODO: fix this".to_string(), TextStyle::Todo));
        let element = node("TODO map to local codes", Usage::Todo, "");
        assert_eq!(describe(&element).0, "TODO map to local codes");
        let element = node("", Usage::Todo, "");
        assert_eq!(describe(&element).0, "TODO:");
    }

    #[test]
    fn notes_are_appended_after_separator() {
        let element = node("Status", Usage::Optional, "mapped from HIS");
        assert_eq!(describe(&element).0, "Status - mapped from HIS");
        let element = node("", Usage::Used, "only notes");
        assert_eq!(describe(&element).0, "only notes");
        let element = node("fix", Usage::Todo, "see ticket");
        assert_eq!(describe(&element).0, "TODO: fix - see ticket");
    }

    #[test]
    fn bold_cells_wrap_earlier() {
        let measurer = TextMeasurer::new(&FontSource::Builtin, "Arial", 12.0).unwrap();
        let config = LayoutConfig::default();
        let text = "aaaa bbbb cccc dddd";
        let width = measurer.measure(text);
        assert_eq!(wrap_cell(&measurer, text, width, TextStyle::Plain, &config).len(), 1);
        assert!(wrap_cell(&measurer, text, width, TextStyle::Todo, &config).len() > 1);
    }
}
