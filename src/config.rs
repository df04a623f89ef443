//! Diff configuration.
//!
//! Styling hints are carried through to every output record untouched; the
//! differ never reads them.

use crate::error::{DiffError, Result};
use serde::{Deserialize, Serialize};

/// Rendering hint attached to every record of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Fill color, any CSS color string.
    pub fill_color: String,
    /// Stroke color.
    pub color: String,
    /// Stroke weight.
    pub weight: u32,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
}

impl Style {
    /// Creates a style with the given fill and the default stroke.
    pub fn filled(fill_color: impl Into<String>) -> Self {
        Self {
            fill_color: fill_color.into(),
            color: "black".to_string(),
            weight: 2,
            fill_opacity: 0.8,
        }
    }
}

/// One [`Style`] per output category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStyles {
    pub intersection: Style,
    pub a_minus_b: Style,
    pub b_minus_a: Style,
}

impl Default for CategoryStyles {
    fn default() -> Self {
        Self {
            intersection: Style::filled("#00ff00"),
            a_minus_b: Style::filled("#0000ff"),
            b_minus_a: Style::filled("#ff0000"),
        }
    }
}

/// Configuration for [`diff_clusters`](crate::diff::diff_clusters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Maximum number of clusters per BVH leaf.
    /// Default: 4
    pub max_leaf_size: usize,

    /// Areas must be strictly greater than this to count as an overlap or
    /// to survive output filtering.
    /// Default: 0.0
    pub min_area: f64,

    /// Styles forwarded into the output records.
    pub styles: CategoryStyles,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_leaf_size: 4,
            min_area: 0.0,
            styles: CategoryStyles::default(),
        }
    }
}

impl DiffConfig {
    /// Set the BVH leaf capacity.
    pub fn with_max_leaf_size(mut self, max_leaf_size: usize) -> Self {
        self.max_leaf_size = max_leaf_size;
        self
    }

    /// Set the area threshold.
    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = min_area;
        self
    }

    /// Set the per-category styles.
    pub fn with_styles(mut self, styles: CategoryStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<()> {
        if self.max_leaf_size == 0 {
            return Err(DiffError::InvalidConfig(
                "max_leaf_size must be at least 1".into(),
            ));
        }
        if !self.min_area.is_finite() || self.min_area < 0.0 {
            return Err(DiffError::InvalidConfig(format!(
                "min_area must be finite and non-negative, got {}",
                self.min_area
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DiffConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.styles.intersection.fill_color, "#00ff00");
        assert_eq!(config.styles.a_minus_b.fill_color, "#0000ff");
        assert_eq!(config.styles.b_minus_a.fill_color, "#ff0000");
    }

    #[test]
    fn test_validate_rejects_zero_leaf_size() {
        let err = DiffConfig::default()
            .with_max_leaf_size(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, DiffError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_bad_min_area() {
        assert!(DiffConfig::default().with_min_area(-1.0).validate().is_err());
        assert!(DiffConfig::default()
            .with_min_area(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_style_serializes_camel_case() {
        let json = serde_json::to_value(Style::filled("#123456")).unwrap();
        assert_eq!(json["fillColor"], "#123456");
        assert_eq!(json["color"], "black");
        assert_eq!(json["weight"], 2);
        assert_eq!(json["fillOpacity"], 0.8);
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = DiffConfig::default().with_max_leaf_size(8);
        let json = serde_json::to_string(&config).unwrap();
        let back: DiffConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
