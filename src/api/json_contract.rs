//! JSON payload contract between the data-fetch collaborator and the engine.
//!
//! Two shapes are accepted:
//! - per-point groups: `{ "<group>": [ {name, data: [{time, value}], color} ] }`
//!   or `{ "<group>": { "mode": "bounded", "series": [...] } }`;
//! - the column-oriented analytics shape `{ "dates": [...], "<column>": [...] }`.
//!
//! Malformed entries are dropped per point; only a payload that is not JSON
//! of the expected outer shape is an error.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{ChartInput, RawPoint, Series, ValueMode};
use crate::error::{ChartError, ChartResult};

/// One series as delivered by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPayload {
    pub name: String,
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default)]
    pub color: Option<String>,
}

impl SeriesPayload {
    /// Normalizes the payload; `palette_index` picks the fallback color.
    #[must_use]
    pub fn to_series(&self, palette_index: usize) -> Series {
        let raw: Vec<RawPoint> = self
            .data
            .iter()
            .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
            .collect();
        let malformed = self.data.len() - raw.len();
        if malformed > 0 {
            warn!(
                series = %self.name,
                malformed,
                "dropped structurally malformed points"
            );
        }
        Series::from_raw(self.name.as_str(), self.color.as_deref(), palette_index, &raw)
    }
}

/// Domain mode tag used in payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadValueMode {
    #[default]
    Linear,
    /// Oscillator-style series on a fixed `[0, 100]` domain.
    Bounded,
}

impl From<PayloadValueMode> for ValueMode {
    fn from(mode: PayloadValueMode) -> Self {
        match mode {
            PayloadValueMode::Linear => Self::Linear,
            PayloadValueMode::Bounded => Self::bounded_percent(),
        }
    }
}

/// One named chart group: either a bare series list (linear mode) or a
/// list with an explicit mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartGroupPayload {
    Series(Vec<SeriesPayload>),
    Configured {
        #[serde(default)]
        mode: PayloadValueMode,
        series: Vec<SeriesPayload>,
    },
}

impl ChartGroupPayload {
    #[must_use]
    pub fn to_chart_input(&self) -> ChartInput {
        let (series, mode) = match self {
            Self::Series(series) => (series, PayloadValueMode::Linear),
            Self::Configured { mode, series } => (series, *mode),
        };
        ChartInput::new(
            series
                .iter()
                .enumerate()
                .map(|(index, payload)| payload.to_series(index))
                .collect(),
            mode.into(),
        )
    }
}

/// Parses a payload of named groups, preserving group order.
pub fn parse_chart_groups(input: &str) -> ChartResult<IndexMap<String, ChartInput>> {
    let groups: IndexMap<String, ChartGroupPayload> = serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse chart payload: {e}")))?;
    let inputs: IndexMap<String, ChartInput> = groups
        .iter()
        .map(|(name, group)| (name.clone(), group.to_chart_input()))
        .collect();
    debug!(groups = inputs.len(), "parsed chart payload");
    Ok(inputs)
}

/// Parses a single group (bare series list or `{mode, series}` object).
pub fn parse_chart_input(input: &str) -> ChartResult<ChartInput> {
    let group: ChartGroupPayload = serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse chart group: {e}")))?;
    Ok(group.to_chart_input())
}

/// Column-oriented payload: one shared `dates` column plus any number of
/// value columns keyed by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnarPayload {
    pub dates: Vec<String>,
    #[serde(flatten)]
    pub columns: IndexMap<String, Value>,
}

impl ColumnarPayload {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse columnar payload: {e}")))
    }

    /// Values of `name`; non-numeric entries read as missing and an absent
    /// or non-array column reads as all-missing.
    #[must_use]
    pub fn column_values(&self, name: &str) -> Vec<Option<f64>> {
        match self.columns.get(name) {
            Some(Value::Array(values)) => values.iter().map(Value::as_f64).collect(),
            Some(_) => {
                warn!(column = name, "column is not an array");
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Builds one series per requested `(column, color token)`.
    #[must_use]
    pub fn to_chart_input(&self, columns: &[(&str, Option<&str>)], mode: ValueMode) -> ChartInput {
        let values: Vec<Vec<Option<f64>>> = columns
            .iter()
            .map(|(name, _)| self.column_values(name))
            .collect();
        let specs: Vec<(&str, &[Option<f64>], Option<&str>)> = columns
            .iter()
            .zip(&values)
            .map(|((name, color), values)| (*name, values.as_slice(), *color))
            .collect();
        ChartInput::from_columns(&self.dates, &specs, mode)
    }
}
