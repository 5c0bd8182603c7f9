//! Rendering options for the Graphviz serializer.

use serde::{Deserialize, Serialize};

/// Direction Graphviz lays out ranks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RankDirection {
    #[default]
    #[serde(rename = "LR")]
    LeftToRight,
    #[serde(rename = "TB")]
    TopToBottom,
    #[serde(rename = "RL")]
    RightToLeft,
    #[serde(rename = "BT")]
    BottomToTop,
}

impl RankDirection {
    pub(crate) fn as_dot(self) -> &'static str {
        match self {
            Self::LeftToRight => "LR",
            Self::TopToBottom => "TB",
            Self::RightToLeft => "RL",
            Self::BottomToTop => "BT",
        }
    }
}

/// How the initial state is told apart from the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialMarker {
    /// An anonymous point node with an edge into the initial state.
    #[default]
    StartArrow,
    /// A double border around the initial state.
    DoubleBorder,
}

/// Options for [`serialize_with`](crate::graph::serialize_with).
///
/// Every field has a default, so a partial JSON object is enough:
///
/// ```rust
/// use switchyard::graph::{DotConfig, InitialMarker, RankDirection};
///
/// let config = DotConfig::from_json(r#"{"rank_direction": "TB", "initial_marker": "double_border"}"#).unwrap();
/// assert_eq!(config.rank_direction, RankDirection::TopToBottom);
/// assert_eq!(config.initial_marker, InitialMarker::DoubleBorder);
/// assert_eq!(config.state_shape, "ellipse");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotConfig {
    /// Graph name; the blueprint's name when unset.
    pub graph_name: Option<String>,
    pub rank_direction: RankDirection,
    /// Graphviz node shape for states.
    pub state_shape: String,
    pub initial_marker: InitialMarker,
    /// Font for graph, node and edge labels; Graphviz's default when unset.
    pub font_name: Option<String>,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            graph_name: None,
            rank_direction: RankDirection::default(),
            state_shape: "ellipse".to_string(),
            initial_marker: InitialMarker::default(),
            font_name: None,
        }
    }
}

impl DotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = Some(name.into());
        self
    }

    pub fn rank_direction(mut self, direction: RankDirection) -> Self {
        self.rank_direction = direction;
        self
    }

    pub fn state_shape(mut self, shape: impl Into<String>) -> Self {
        self.state_shape = shape.into();
        self
    }

    pub fn initial_marker(mut self, marker: InitialMarker) -> Self {
        self.initial_marker = marker;
        self
    }

    pub fn font_name(mut self, font: impl Into<String>) -> Self {
        self.font_name = Some(font.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        assert_eq!(DotConfig::from_json("{}").unwrap(), DotConfig::default());
    }

    #[test]
    fn setters_override_defaults() {
        let config = DotConfig::new()
            .graph_name("g")
            .rank_direction(RankDirection::BottomToTop)
            .state_shape("box")
            .initial_marker(InitialMarker::DoubleBorder)
            .font_name("Helvetica");

        assert_eq!(config.graph_name.as_deref(), Some("g"));
        assert_eq!(config.rank_direction.as_dot(), "BT");
        assert_eq!(config.state_shape, "box");
        assert_eq!(config.font_name.as_deref(), Some("Helvetica"));
    }

    #[test]
    fn config_serializes_with_dot_names() {
        let json = serde_json::to_value(DotConfig::default()).unwrap();
        assert_eq!(json["rank_direction"], "LR");
        assert_eq!(json["initial_marker"], "start_arrow");
    }

    #[test]
    fn unknown_direction_is_an_error() {
        assert!(DotConfig::from_json(r#"{"rank_direction": "sideways"}"#).is_err());
    }
}
