//! Wire types for Computer Vision v2.0 analysis responses.
//!
//! Field names follow the service's camelCase JSON. Every feature section is
//! optional so a Description-only response round-trips cleanly; unknown
//! fields the service adds later are ignored.

use crate::error::{VisionError, VisionResult};
use serde::{Deserialize, Serialize};

/// The complete result of an analyze or describe call.
///
/// Which sections are populated depends on the visual features requested;
/// the describe operation fills only `description` plus request metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysis {
    /// Caption candidates and descriptive tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,

    /// Content tags with confidence scores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// Taxonomy categories (e.g., "outdoor_", "people_portrait")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,

    /// Dominant and accent color information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorInfo>,

    /// Detected faces with age, gender, and bounding rectangle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faces: Option<Vec<FaceDescription>>,

    /// Detected objects with bounding rectangles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<DetectedObject>>,

    /// Detected commercial brands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brands: Option<Vec<DetectedBrand>>,

    /// Adult/racy content scores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adult: Option<AdultInfo>,

    /// Clip-art / line-drawing classification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<ImageTypeInfo>,

    /// Server-assigned request identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Source image dimensions and format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ImageMetadata>,
}

impl ImageAnalysis {
    /// Extract the description section, failing if the server omitted it.
    pub fn into_description(self) -> VisionResult<Description> {
        self.description.ok_or_else(|| VisionError::Decode {
            message: "response contained no description section".to_string(),
        })
    }
}

/// The description section: caption candidates plus loose tags.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Description {
    /// Single-word tags related to the image content
    #[serde(default)]
    pub tags: Vec<String>,

    /// Caption candidates, ordered by the server's own confidence ranking
    #[serde(default)]
    pub captions: Vec<Caption>,
}

impl Description {
    /// The highest-confidence caption.
    ///
    /// The server may return zero captions for ambiguous images; that is a
    /// result-shape error, not a panic.
    pub fn top_caption(&self) -> VisionResult<&Caption> {
        self.captions.first().ok_or(VisionError::NoCaptions)
    }
}

/// A generated caption with the server's confidence in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Caption {
    /// Natural-language sentence describing the image
    pub text: String,

    /// Confidence score from 0.0 to 1.0
    pub confidence: f64,
}

/// A content tag with confidence score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub confidence: f64,

    /// Disambiguation hint (e.g., "musical instrument" for "organ")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// A taxonomy category assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub score: f64,
}

/// Color analysis of the image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorInfo {
    pub dominant_color_foreground: String,
    pub dominant_color_background: String,

    #[serde(default)]
    pub dominant_colors: Vec<String>,

    /// Accent color as an RGB hex string without the leading '#'
    pub accent_color: String,

    pub is_bw_img: bool,
}

/// A face detected in the image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceDescription {
    pub age: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    pub face_rectangle: FaceRectangle,
}

/// Face bounding box in pixel coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceRectangle {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// An object detected in the image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedObject {
    pub rectangle: BoundingRect,

    /// Object class label (the wire field is literally "object")
    #[serde(rename = "object")]
    pub name: String,

    pub confidence: f64,
}

/// Object/brand bounding box in pixel coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundingRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// A commercial brand detected in the image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedBrand {
    pub name: String,
    pub confidence: f64,
    pub rectangle: BoundingRect,
}

/// Adult/racy content classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdultInfo {
    pub is_adult_content: bool,
    pub is_racy_content: bool,
    pub adult_score: f64,
    pub racy_score: f64,
}

/// Clip-art / line-drawing classification levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageTypeInfo {
    pub clip_art_type: i32,
    pub line_drawing_type: i32,
}

/// Source image properties reported by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    pub format: String,
}
