use serde::{Deserialize, Serialize};

/// Length class of a tick mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeightClass {
    /// Longest tick; always labeled.
    Major,
    /// Half-subdivision tick (centimeter and inch rulers only).
    Medium,
    /// Shortest, unlabeled tick.
    Minor,
}

/// Horizontal alignment of a label relative to its `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Value of the SVG `text-anchor` attribute.
    pub fn as_svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Number printed next to a major tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickLabel {
    pub text: String,
    /// Anchor x coordinate in px, already shifted away from the tick.
    pub x: f64,
    /// Baseline y coordinate in px, measured from the top edge.
    pub y: f64,
    pub anchor: TextAnchor,
    pub font_size: f64,
}

/// A single graduation on the ruler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickMark {
    pub index: u32,
    /// Distance from the left edge in px.
    pub position_px: f64,
    pub height_class: HeightClass,
    /// Tick runs from the top edge (`y = 0`) down to this value.
    pub height_px: f64,
    pub stroke_width: f64,
    pub label: Option<TickLabel>,
}

impl TickMark {
    pub fn is_major(&self) -> bool {
        self.height_class == HeightClass::Major
    }
}

/// The ruler's custom name, printed bold and centered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
}
