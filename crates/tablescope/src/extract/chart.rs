//! Chart specification recovered from a fenced JSON block.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of chart to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Area,
    Scatter,
    Pie,
}

impl ChartType {
    /// Returns true if this chart plots an x/y pair instead of category/value.
    pub fn is_cartesian(&self) -> bool {
        matches!(self, ChartType::Scatter)
    }

    /// Get the wire name of the chart type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Area => "area",
            ChartType::Scatter => "scatter",
            ChartType::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flat record value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartValue {
    Number(f64),
    Text(String),
}

/// One row of chart data.
pub type ChartRecord = IndexMap<String, ChartValue>;

/// Which record fields to plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartAxes {
    /// Category label and value fields (bar, line, area, pie).
    Category { category_key: String, data_key: String },
    /// X and Y fields (scatter).
    Cartesian { x_key: String, y_key: String },
}

/// Why a chart block was dropped.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Body is not valid JSON or does not have the chart shape.
    #[error("chart JSON could not be parsed: {0}")]
    Syntax(#[from] serde_json::Error),

    /// A field required by the chart type is absent.
    #[error("{chart_type} chart is missing required key '{key}'")]
    MissingAxisKey {
        chart_type: ChartType,
        key: &'static str,
    },
}

/// Wire form of a chart specification, with every axis key optional.
///
/// Callers that want to defer axis checks to render time can deserialize
/// this directly instead of [`ChartSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDocument {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: Vec<ChartRecord>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub x_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub y_key: Option<String>,
}

/// A validated chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChartDocument", into = "ChartDocument")]
pub struct ChartSpec {
    pub chart_type: ChartType,
    pub data: Vec<ChartRecord>,
    pub axes: ChartAxes,
}

impl ChartSpec {
    /// Parse and validate a chart specification.
    ///
    /// Axis keys required by the chart type must be present.
    pub fn from_json(body: &str) -> Result<Self, ChartError> {
        let document: ChartDocument = serde_json::from_str(body)?;
        Self::try_from(document)
    }

    /// Field names referenced by the axes.
    pub fn keys(&self) -> (&str, &str) {
        match &self.axes {
            ChartAxes::Category {
                category_key,
                data_key,
            } => (category_key.as_str(), data_key.as_str()),
            ChartAxes::Cartesian { x_key, y_key } => (x_key.as_str(), y_key.as_str()),
        }
    }
}

fn require(
    value: Option<String>,
    chart_type: ChartType,
    key: &'static str,
) -> Result<String, ChartError> {
    value.ok_or(ChartError::MissingAxisKey { chart_type, key })
}

impl TryFrom<ChartDocument> for ChartSpec {
    type Error = ChartError;

    fn try_from(doc: ChartDocument) -> Result<Self, Self::Error> {
        let chart_type = doc.chart_type;
        let axes = if chart_type.is_cartesian() {
            ChartAxes::Cartesian {
                x_key: require(doc.x_key, chart_type, "xKey")?,
                y_key: require(doc.y_key, chart_type, "yKey")?,
            }
        } else {
            ChartAxes::Category {
                category_key: require(doc.category_key, chart_type, "categoryKey")?,
                data_key: require(doc.data_key, chart_type, "dataKey")?,
            }
        };

        Ok(Self {
            chart_type,
            data: doc.data,
            axes,
        })
    }
}

impl From<ChartSpec> for ChartDocument {
    fn from(spec: ChartSpec) -> Self {
        let mut doc = ChartDocument {
            chart_type: spec.chart_type,
            data: spec.data,
            category_key: None,
            data_key: None,
            x_key: None,
            y_key: None,
        };
        match spec.axes {
            ChartAxes::Category {
                category_key,
                data_key,
            } => {
                doc.category_key = Some(category_key);
                doc.data_key = Some(data_key);
            }
            ChartAxes::Cartesian { x_key, y_key } => {
                doc.x_key = Some(x_key);
                doc.y_key = Some(y_key);
            }
        }
        doc
    }
}
