//! Presentation of project type labels. Nothing here touches identifiers.

use super::types::{ColorSpec, ProjectType, Rgb};
use colored::Colorize;

/// A run of label text drawn in one color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSegment {
    pub text: String,
    pub color: Option<Rgb>,
}

impl LabelSegment {
    fn new(chars: &[char], color: Option<Rgb>) -> Self {
        Self {
            text: chars.iter().collect(),
            color,
        }
    }
}

/// Split a label into colored segments.
///
/// Ranges are applied in order. Text not covered by any range is kept
/// uncolored, overlaps are trimmed to the part not yet emitted and ranges
/// running past the end are clamped, so the segments always concatenate
/// back to the label.
pub fn label_segments(project_type: &ProjectType) -> Vec<LabelSegment> {
    let label = &project_type.label;
    match &project_type.color {
        ColorSpec::Plain => vec![LabelSegment {
            text: label.clone(),
            color: None,
        }],
        ColorSpec::Single(color) => vec![LabelSegment {
            text: label.clone(),
            color: Some(*color),
        }],
        ColorSpec::Ranges(ranges) => {
            let chars: Vec<char> = label.chars().collect();
            let mut segments = Vec::new();
            let mut cursor = 0;

            for range in ranges {
                if cursor >= chars.len() {
                    break;
                }
                let start = range.start.max(cursor);
                let end = range.end.min(chars.len() - 1);
                if start > end {
                    continue;
                }
                if start > cursor {
                    segments.push(LabelSegment::new(&chars[cursor..start], None));
                }
                segments.push(LabelSegment::new(&chars[start..=end], Some(range.color)));
                cursor = end + 1;
            }

            if cursor < chars.len() {
                segments.push(LabelSegment::new(&chars[cursor..], None));
            }
            segments
        }
    }
}

/// Label with ANSI truecolor escapes
pub fn render_label(project_type: &ProjectType) -> String {
    label_segments(project_type)
        .into_iter()
        .map(|segment| match segment.color {
            Some(Rgb { r, g, b }) => segment.text.truecolor(r, g, b).to_string(),
            None => segment.text,
        })
        .collect()
}

/// Label followed by the gray description line, when there is one
pub fn render_choice(project_type: &ProjectType, indent: &str) -> String {
    let label = render_label(project_type);
    if project_type.has_description() {
        format!(
            "{}\n{}{}",
            label,
            indent,
            project_type.description.bright_black()
        )
    } else {
        label
    }
}
