//! Rendering of analysis results: human-readable report or JSON.
//!
//! The text renderer prints one section per returned feature, with
//! confidence values as percentages.

use crate::types::{Description, ImageAnalysis};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Raw analysis as JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Serialize an item to a JSON string.
pub fn to_json<T: Serialize>(item: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(item)
    } else {
        serde_json::to_string(item)
    }
}

/// Render the description section: every caption with its confidence.
pub fn render_description(description: &Description) -> String {
    let mut out = String::from("Captions:\n");
    if description.captions.is_empty() {
        out.push_str("No captions detected.\n");
    } else {
        for caption in &description.captions {
            let _ = writeln!(
                out,
                "'{}' with confidence {:.2}%",
                caption.text,
                caption.confidence * 100.0
            );
        }
    }
    if !description.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", description.tags.join(", "));
    }
    out
}

/// Render a full analysis report, one section per returned feature.
pub fn render_report(analysis: &ImageAnalysis) -> String {
    let mut out = String::new();

    if let Some(description) = &analysis.description {
        out.push_str(&render_description(description));
    }

    if let Some(tags) = &analysis.tags {
        out.push_str("\nTags:\n");
        if tags.is_empty() {
            out.push_str("No tags detected.\n");
        }
        for tag in tags {
            let _ = write!(out, "'{}' with confidence {:.2}%", tag.name, tag.confidence * 100.0);
            match &tag.hint {
                Some(hint) => {
                    let _ = writeln!(out, " (hint: {hint})");
                }
                None => out.push('\n'),
            }
        }
    }

    if let Some(categories) = &analysis.categories {
        out.push_str("\nCategories:\n");
        if categories.is_empty() {
            out.push_str("No categories detected.\n");
        }
        for category in categories {
            let _ = writeln!(
                out,
                "'{}' with confidence {:.2}%",
                category.name,
                category.score * 100.0
            );
        }
    }

    if let Some(color) = &analysis.color {
        out.push_str("\nColor scheme:\n");
        let _ = writeln!(out, "Dominant foreground color: {}", color.dominant_color_foreground);
        let _ = writeln!(out, "Dominant background color: {}", color.dominant_color_background);
        let _ = writeln!(out, "Dominant colors: {}", color.dominant_colors.join(", "));
        let _ = writeln!(out, "Accent color: #{}", color.accent_color);
        let _ = writeln!(out, "Black and white: {}", color.is_bw_img);
    }

    if let Some(faces) = &analysis.faces {
        out.push_str("\nFaces:\n");
        if faces.is_empty() {
            out.push_str("No faces detected.\n");
        }
        for face in faces {
            let r = &face.face_rectangle;
            let _ = writeln!(
                out,
                "A {} of age {} at location {}, {}, {}, {}",
                face.gender.as_deref().unwrap_or("person"),
                face.age,
                r.left,
                r.top,
                r.left + r.width,
                r.top + r.height
            );
        }
    }

    if let Some(objects) = &analysis.objects {
        out.push_str("\nObjects:\n");
        if objects.is_empty() {
            out.push_str("No objects detected.\n");
        }
        for object in objects {
            let r = &object.rectangle;
            let _ = writeln!(
                out,
                "'{}' with confidence {:.2}% at location {}, {}, {}, {}",
                object.name,
                object.confidence * 100.0,
                r.x,
                r.y,
                r.x + r.w,
                r.y + r.h
            );
        }
    }

    if let Some(brands) = &analysis.brands {
        out.push_str("\nBrands:\n");
        if brands.is_empty() {
            out.push_str("No brands detected.\n");
        }
        for brand in brands {
            let _ = writeln!(
                out,
                "'{}' with confidence {:.2}%",
                brand.name,
                brand.confidence * 100.0
            );
        }
    }

    if let Some(adult) = &analysis.adult {
        out.push_str("\nAdult content:\n");
        let _ = writeln!(
            out,
            "Is adult content: {} with confidence {:.2}%",
            adult.is_adult_content,
            adult.adult_score * 100.0
        );
        let _ = writeln!(
            out,
            "Is racy content: {} with confidence {:.2}%",
            adult.is_racy_content,
            adult.racy_score * 100.0
        );
    }

    if let Some(image_type) = &analysis.image_type {
        out.push_str("\nImage type:\n");
        let _ = writeln!(out, "Clip art type: {}", image_type.clip_art_type);
        let _ = writeln!(out, "Line drawing type: {}", image_type.line_drawing_type);
    }

    if let Some(metadata) = &analysis.metadata {
        let _ = writeln!(
            out,
            "\nImage metadata: {}x{} {}",
            metadata.width, metadata.height, metadata.format
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AdultInfo, Caption, ColorInfo, Tag};

    fn description_with(captions: Vec<Caption>) -> Description {
        Description {
            tags: vec![],
            captions,
        }
    }

    #[test]
    fn test_render_description_with_confidence_percent() {
        let description = description_with(vec![Caption {
            text: "a cat sitting on a chair".to_string(),
            confidence: 0.9637,
        }]);
        let report = render_description(&description);
        assert!(report.contains("'a cat sitting on a chair' with confidence 96.37%"));
    }

    #[test]
    fn test_render_description_empty_captions() {
        let report = render_description(&description_with(vec![]));
        assert!(report.contains("No captions detected."));
    }

    #[test]
    fn test_render_report_sections() {
        let analysis = ImageAnalysis {
            description: Some(description_with(vec![Caption {
                text: "a beach".to_string(),
                confidence: 0.9,
            }])),
            tags: Some(vec![Tag {
                name: "sand".to_string(),
                confidence: 0.995,
                hint: None,
            }]),
            color: Some(ColorInfo {
                dominant_color_foreground: "White".to_string(),
                dominant_color_background: "Blue".to_string(),
                dominant_colors: vec!["Blue".to_string(), "White".to_string()],
                accent_color: "1A6FB5".to_string(),
                is_bw_img: false,
            }),
            adult: Some(AdultInfo {
                is_adult_content: false,
                is_racy_content: false,
                adult_score: 0.0123,
                racy_score: 0.0345,
            }),
            ..Default::default()
        };

        let report = render_report(&analysis);
        assert!(report.contains("'a beach' with confidence 90.00%"));
        assert!(report.contains("'sand' with confidence 99.50%"));
        assert!(report.contains("Accent color: #1A6FB5"));
        assert!(report.contains("Is adult content: false"));
        // Sections the server did not return are not rendered
        assert!(!report.contains("Faces:"));
        assert!(!report.contains("Image type:"));
    }

    #[test]
    fn test_render_report_empty_feature_lists() {
        let analysis = ImageAnalysis {
            tags: Some(vec![]),
            objects: Some(vec![]),
            ..Default::default()
        };
        let report = render_report(&analysis);
        assert!(report.contains("No tags detected."));
        assert!(report.contains("No objects detected."));
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(OutputFormat::parse("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("yaml"), None);
    }

    #[test]
    fn test_to_json_pretty() {
        let description = description_with(vec![]);
        let compact = to_json(&description, false).unwrap();
        let pretty = to_json(&description, true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
    }
}
