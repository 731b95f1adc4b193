//! Chernoff face layout
//!
//! A face has five features, each driven by one attribute. The level of the
//! attribute's latest observation picks the feature's shape:
//!
//! | Level | Shape    |
//! |-------|----------|
//! | low   | square   |
//! | mid   | circle   |
//! | high  | triangle |

use serde::{Deserialize, Serialize};
use std::fmt;
use visage_io::Table;
use visage_stats::{aggregate_levels, Level};

use crate::attributes::AttributeLabels;
use crate::error::{FaceError, FaceResult};

/// Face feature driven by one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceRole {
    Head,
    Eyes,
    Mouth,
    Nose,
    Ears,
}

impl FaceRole {
    /// Roles in assignment order
    pub const ALL: [FaceRole; 5] = [
        FaceRole::Head,
        FaceRole::Eyes,
        FaceRole::Mouth,
        FaceRole::Nose,
        FaceRole::Ears,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaceRole::Head => "head",
            FaceRole::Eyes => "eyes",
            FaceRole::Mouth => "mouth",
            FaceRole::Nose => "nose",
            FaceRole::Ears => "ears",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape a feature is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphShape {
    Square,
    Circle,
    Triangle,
}

impl GlyphShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlyphShape::Square => "square",
            GlyphShape::Circle => "circle",
            GlyphShape::Triangle => "triangle",
        }
    }
}

impl From<Level> for GlyphShape {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => GlyphShape::Square,
            Level::Mid => GlyphShape::Circle,
            Level::High => GlyphShape::Triangle,
        }
    }
}

impl fmt::Display for GlyphShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One feature of the face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceFeature {
    pub role: FaceRole,
    pub attribute: String,
    pub label: String,
    pub level: Level,
    pub shape: GlyphShape,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub last_value: f64,
}

/// The five features of a face, in role order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceLayout {
    features: Vec<FaceFeature>,
}

impl FaceLayout {
    /// Assign the first five attributes to the face roles
    ///
    /// Fails when fewer than five attributes are given or when one of the
    /// first five has no numeric values.
    pub fn build(table: &Table, attributes: &[String]) -> FaceResult<Self> {
        let required = FaceRole::ALL.len();
        if attributes.len() < required {
            return Err(FaceError::TooFewAttributes {
                required,
                found: attributes.len(),
            });
        }

        let assigned = &attributes[..required];
        let levels = aggregate_levels(&table.rows, assigned);
        let labels = AttributeLabels::from_header(&table.header);

        let mut features = Vec::with_capacity(required);
        for (role, attribute) in FaceRole::ALL.into_iter().zip(assigned) {
            let reading = levels.get(attribute).copied().flatten().ok_or_else(|| {
                FaceError::MissingFeature {
                    role,
                    attribute: attribute.clone(),
                }
            })?;

            features.push(FaceFeature {
                role,
                attribute: attribute.clone(),
                label: labels.label(attribute).to_string(),
                level: reading.level,
                shape: reading.level.into(),
                q1: reading.q1,
                q2: reading.q2,
                q3: reading.q3,
                last_value: reading.last_value,
            });
        }

        tracing::debug!(attributes = ?assigned, "Built face layout");
        Ok(Self { features })
    }

    pub fn feature(&self, role: FaceRole) -> Option<&FaceFeature> {
        self.features.iter().find(|f| f.role == role)
    }

    pub fn features(&self) -> &[FaceFeature] {
        &self.features
    }

    /// Features shown under the given visibility
    pub fn visible_features<'a>(
        &'a self,
        visibility: &'a FaceVisibility,
    ) -> impl Iterator<Item = &'a FaceFeature> + 'a {
        self.features
            .iter()
            .filter(move |f| visibility.is_visible(f.role))
    }
}

/// Per-role visibility toggles; everything is shown by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceVisibility {
    shown: [bool; 5],
}

impl Default for FaceVisibility {
    fn default() -> Self {
        Self { shown: [true; 5] }
    }
}

impl FaceVisibility {
    /// Nothing shown
    pub fn none() -> Self {
        Self { shown: [false; 5] }
    }

    pub fn is_visible(&self, role: FaceRole) -> bool {
        self.shown[role.index()]
    }

    pub fn set(&mut self, role: FaceRole, visible: bool) {
        self.shown[role.index()] = visible;
    }

    pub fn toggle(&mut self, role: FaceRole) {
        self.shown[role.index()] = !self.shown[role.index()];
    }

    /// Show or hide every role at once
    pub fn set_all(&mut self, visible: bool) {
        self.shown = [visible; 5];
    }

    pub fn all_visible(&self) -> bool {
        self.shown.iter().all(|shown| *shown)
    }

    pub fn visible_roles(&self) -> Vec<FaceRole> {
        FaceRole::ALL
            .into_iter()
            .filter(|role| self.is_visible(*role))
            .collect()
    }
}
