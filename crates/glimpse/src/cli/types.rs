//! CLI enum types shared by the describe and analyze commands.

use clap::ValueEnum;
use glimpse_core::VisualFeature;

/// Visual features selectable from the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FeatureArg {
    /// Caption candidates and descriptive tags
    Description,
    /// Content tags with confidence scores
    Tags,
    /// Taxonomy categories
    Categories,
    /// Dominant and accent colors
    Color,
    /// Faces with age and bounding box
    Faces,
    /// Objects with bounding boxes
    Objects,
    /// Commercial brands
    Brands,
    /// Adult/racy content scores
    Adult,
    /// Clip-art / line-drawing classification
    ImageType,
}

impl From<FeatureArg> for VisualFeature {
    fn from(arg: FeatureArg) -> Self {
        match arg {
            FeatureArg::Description => VisualFeature::Description,
            FeatureArg::Tags => VisualFeature::Tags,
            FeatureArg::Categories => VisualFeature::Categories,
            FeatureArg::Color => VisualFeature::Color,
            FeatureArg::Faces => VisualFeature::Faces,
            FeatureArg::Objects => VisualFeature::Objects,
            FeatureArg::Brands => VisualFeature::Brands,
            FeatureArg::Adult => VisualFeature::Adult,
            FeatureArg::ImageType => VisualFeature::ImageType,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_arg_maps_to_wire_name() {
        let feature: VisualFeature = FeatureArg::ImageType.into();
        assert_eq!(feature.as_str(), "ImageType");
    }
}
