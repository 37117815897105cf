use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Type tag marking the shared time column.
pub const X_COLUMN_TYPE: &str = "x";

/// Series kind used when a column carries no entry in `types`.
pub const DEFAULT_SERIES_KIND: &str = "line";

/// Fallback stroke colors, assigned by series position.
pub const FALLBACK_PALETTE: [Color; 6] = [
    Color::rgb(0.243, 0.761, 0.247),
    Color::rgb(0.910, 0.271, 0.251),
    Color::rgb(0.239, 0.573, 0.859),
    Color::rgb(0.957, 0.682, 0.165),
    Color::rgb(0.592, 0.353, 0.812),
    Color::rgb(0.161, 0.722, 0.722),
];

/// One raw column: `[id, v1, v2, ...]` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<Value>")]
pub struct Column {
    pub id: String,
    pub values: Vec<f64>,
}

impl Column {
    #[must_use]
    pub fn new(id: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }
}

impl TryFrom<Vec<Value>> for Column {
    type Error = String;

    fn try_from(cells: Vec<Value>) -> Result<Self, Self::Error> {
        let mut cells = cells.into_iter();
        let id = match cells.next() {
            Some(Value::String(id)) => id,
            Some(other) => return Err(format!("column header must be a string, got {other}")),
            None => return Err("column must not be empty".to_owned()),
        };
        let values = cells
            .enumerate()
            .map(|(position, cell)| {
                cell.as_f64().ok_or_else(|| {
                    format!(
                        "column `{id}` cell {} must be numeric, got {cell}",
                        position + 1
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { id, values })
    }
}

impl From<Column> for Vec<Value> {
    fn from(column: Column) -> Self {
        std::iter::once(Value::String(column.id))
            .chain(column.values.into_iter().map(Value::from))
            .collect()
    }
}

/// Host-supplied chart input, in the shape of the JSON contest format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: Vec<Column>,
    pub types: IndexMap<String, String>,
    #[serde(default)]
    pub names: Option<IndexMap<String, String>>,
    #[serde(default)]
    pub colors: Option<IndexMap<String, String>>,
}

impl Dataset {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidDataset(format!("failed to parse dataset json: {e}")))
    }

    #[must_use]
    pub fn with_x_column(mut self, id: impl Into<String>, values: Vec<f64>) -> Self {
        let id = id.into();
        self.types.insert(id.clone(), X_COLUMN_TYPE.to_owned());
        self.columns.push(Column::new(id, values));
        self
    }

    #[must_use]
    pub fn with_series(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        values: Vec<f64>,
    ) -> Self {
        let id = id.into();
        self.types.insert(id.clone(), DEFAULT_SERIES_KIND.to_owned());
        self.names
            .get_or_insert_with(IndexMap::new)
            .insert(id.clone(), name.into());
        self.colors
            .get_or_insert_with(IndexMap::new)
            .insert(id.clone(), color.into());
        self.columns.push(Column::new(id, values));
        self
    }
}

/// Validated time axis. Sample indices are 1-based: slot 0 of the raw column
/// held the id, so valid indices are `1..=sample_count()`.
#[derive(Debug, Clone, PartialEq)]
pub struct XAxis {
    id: String,
    values: Vec<f64>,
    interval: f64,
}

impl XAxis {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Step between samples; only the first delta is trusted.
    #[must_use]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn first(&self) -> f64 {
        self.values.first().copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn last(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn value(&self, index: usize) -> Option<f64> {
        index.checked_sub(1).and_then(|i| self.values.get(i)).copied()
    }
}

/// Validated y-series with resolved display name and color.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub color: Color,
    pub kind: String,
    values: Vec<f64>,
    min: f64,
    max: f64,
}

impl SeriesData {
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn value(&self, index: usize) -> Option<f64> {
        index.checked_sub(1).and_then(|i| self.values.get(i)).copied()
    }

    /// Values for the inclusive 1-based index span `[min, max]`.
    #[must_use]
    pub fn span(&self, min: usize, max: usize) -> &[f64] {
        if min == 0 || min > max {
            return &[];
        }
        self.values.get(min - 1..max.min(self.values.len())).unwrap_or(&[])
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Dataset after structural validation; downstream code never branches on
/// missing names, colors or the x column.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    x: XAxis,
    series: Vec<SeriesData>,
    names_provided: bool,
}

impl ChartData {
    pub fn from_dataset(dataset: Dataset) -> ChartResult<Self> {
        let Dataset {
            columns,
            types,
            names,
            colors,
        } = dataset;

        if columns.len() < 2 {
            return Err(ChartError::InvalidDataset(format!(
                "expected at least 2 columns, got {}",
                columns.len()
            )));
        }

        let x_ids: Vec<&String> = types
            .iter()
            .filter(|(_, kind)| kind.as_str() == X_COLUMN_TYPE)
            .map(|(id, _)| id)
            .collect();
        let x_id = match x_ids.as_slice() {
            [id] => (*id).clone(),
            [] => {
                return Err(ChartError::InvalidDataset(
                    "no column is typed `x`".to_owned(),
                ));
            }
            _ => {
                return Err(ChartError::InvalidDataset(
                    "more than one column is typed `x`".to_owned(),
                ));
            }
        };

        let sample_count = columns[0].values.len();
        let mut x_values = None;
        let mut raw_series = Vec::with_capacity(columns.len() - 1);
        for column in columns {
            if column.values.len() < 2 {
                return Err(ChartError::InvalidDataset(format!(
                    "column `{}` must hold at least 2 samples",
                    column.id
                )));
            }
            if column.values.len() != sample_count {
                return Err(ChartError::InvalidDataset(format!(
                    "column `{}` has {} samples, expected {sample_count}",
                    column.id,
                    column.values.len()
                )));
            }
            if column.values.iter().any(|value| !value.is_finite()) {
                return Err(ChartError::InvalidDataset(format!(
                    "column `{}` contains non-finite values",
                    column.id
                )));
            }
            if column.id == x_id {
                if x_values.replace(column.values).is_some() {
                    return Err(ChartError::InvalidDataset(format!(
                        "x column `{x_id}` appears more than once"
                    )));
                }
            } else {
                raw_series.push(column);
            }
        }

        let Some(x_values) = x_values else {
            return Err(ChartError::InvalidDataset(format!(
                "x column `{x_id}` is missing from columns"
            )));
        };
        if x_values.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(ChartError::InvalidDataset(
                "x column must be strictly increasing".to_owned(),
            ));
        }
        let interval = x_values[1] - x_values[0];

        let names_provided = names.is_some();
        let names = names.unwrap_or_default();
        let colors = colors.unwrap_or_default();
        let series = raw_series
            .into_iter()
            .enumerate()
            .map(|(position, column)| {
                let (min, max) = column
                    .values
                    .iter()
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &value| {
                        (lo.min(value), hi.max(value))
                    });
                let color = colors
                    .get(&column.id)
                    .and_then(|hex| Color::from_hex(hex).ok())
                    .unwrap_or(FALLBACK_PALETTE[position % FALLBACK_PALETTE.len()]);
                SeriesData {
                    name: names
                        .get(&column.id)
                        .cloned()
                        .unwrap_or_else(|| column.id.clone()),
                    kind: types
                        .get(&column.id)
                        .cloned()
                        .unwrap_or_else(|| DEFAULT_SERIES_KIND.to_owned()),
                    color,
                    id: column.id,
                    values: column.values,
                    min,
                    max,
                }
            })
            .collect();

        Ok(Self {
            x: XAxis {
                id: x_id,
                values: x_values,
                interval,
            },
            series,
            names_provided,
        })
    }

    #[must_use]
    pub fn x(&self) -> &XAxis {
        &self.x
    }

    #[must_use]
    pub fn series(&self) -> &[SeriesData] {
        &self.series
    }

    #[must_use]
    pub fn names_provided(&self) -> bool {
        self.names_provided
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartData, Column, Dataset, FALLBACK_PALETTE};
    use crate::error::ChartError;
    use crate::render::Color;

    fn sample() -> Dataset {
        Dataset::default()
            .with_x_column("x", vec![0.0, 10.0, 20.0])
            .with_series("y0", "Joined", "#3DC23F", vec![1.0, 5.0, 3.0])
    }

    #[test]
    fn json_columns_parse_header_and_values() {
        let dataset = Dataset::from_json_str(
            r#"{"columns":[["x",1,2,3],["y0",4,5,6]],"types":{"x":"x","y0":"line"}}"#,
        )
        .expect("parse");
        assert_eq!(dataset.columns[1], Column::new("y0", vec![4.0, 5.0, 6.0]));
        assert!(dataset.names.is_none());
    }

    #[test]
    fn json_rejects_non_numeric_cells() {
        let err = Dataset::from_json_str(
            r#"{"columns":[["x",1,"b"],["y0",4,5]],"types":{"x":"x"}}"#,
        )
        .expect_err("string cell");
        assert!(matches!(err, ChartError::InvalidDataset(_)));
    }

    #[test]
    fn validation_resolves_series_extents_and_interval() {
        let data = ChartData::from_dataset(sample()).expect("valid");
        assert_eq!(data.x().interval(), 10.0);
        assert_eq!(data.x().value(1), Some(0.0));
        assert_eq!(data.x().value(0), None);
        let series = &data.series()[0];
        assert_eq!((series.min(), series.max()), (1.0, 5.0));
        assert_eq!(series.color, Color::from_hex("#3DC23F").expect("hex"));
        assert_eq!(series.span(2, 3), &[5.0, 3.0]);
    }

    #[test]
    fn missing_names_and_colors_fall_back() {
        let mut dataset = sample();
        dataset.names = None;
        dataset.colors = None;
        let data = ChartData::from_dataset(dataset).expect("valid");
        assert_eq!(data.series()[0].name, "y0");
        assert_eq!(data.series()[0].color, FALLBACK_PALETTE[0]);
        assert!(!data.names_provided());
    }

    #[test]
    fn structural_violations_are_rejected() {
        let too_few_columns = Dataset::default().with_x_column("x", vec![0.0, 1.0]);
        let too_short = Dataset::default()
            .with_x_column("x", vec![0.0])
            .with_series("y0", "y", "#000000", vec![1.0]);
        let ragged = Dataset::default()
            .with_x_column("x", vec![0.0, 1.0, 2.0])
            .with_series("y0", "y", "#000000", vec![1.0, 2.0]);
        let decreasing = Dataset::default()
            .with_x_column("x", vec![0.0, 2.0, 1.0])
            .with_series("y0", "y", "#000000", vec![1.0, 2.0, 3.0]);
        let mut no_x = sample();
        no_x.types.insert("x".to_owned(), "line".to_owned());

        for dataset in [too_few_columns, too_short, ragged, decreasing, no_x] {
            assert!(matches!(
                ChartData::from_dataset(dataset),
                Err(ChartError::InvalidDataset(_))
            ));
        }
    }
}
