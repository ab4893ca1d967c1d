// File: crates/chart-core/src/series.rs
// Summary: Series model (ordered samples) and the three visual encodings.
// Notes:
// - Insertion order is the x-axis; nothing here sorts or dedups.
// - Values are stored as given. Layout reads them through `sanitized()`.

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, SeriesError};

/// Visual mapping applied to a series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Bar,
    Line,
    Area,
}

impl Encoding {
    pub const ALL: [Encoding; 3] = [Encoding::Bar, Encoding::Line, Encoding::Area];

    pub fn name(self) -> &'static str {
        match self {
            Encoding::Bar => "bar",
            Encoding::Line => "line",
            Encoding::Area => "area",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Encoding::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| ChartError::UnknownEncoding(s.to_string()))
    }
}

/// Ordered numeric samples driving a chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] { &self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Values as the layout sees them: negative and non-finite samples read as 0.
    pub fn sanitized(&self) -> Vec<f64> {
        let mut clamped = 0usize;
        let out: Vec<f64> = self
            .values
            .iter()
            .map(|&v| {
                if v.is_finite() && v >= 0.0 {
                    v
                } else {
                    clamped += 1;
                    0.0
                }
            })
            .collect();
        if clamped > 0 {
            tracing::warn!(clamped, len = out.len(), "series has negative or non-finite samples; drawing them as 0");
        }
        out
    }

    /// Largest sanitized sample, 0 for an empty series.
    pub fn max(&self) -> f64 {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .fold(0.0, f64::max)
    }

    /// Read one numeric column, selected by header name, from CSV input.
    pub fn from_csv_reader<R: Read>(reader: R, column: &str) -> Result<Self, SeriesError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let idx = rdr
            .headers()?
            .iter()
            .position(|h| h.eq_ignore_ascii_case(column))
            .ok_or_else(|| SeriesError::MissingColumn(column.to_string()))?;

        let mut values = Vec::new();
        for (row, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let raw = rec.get(idx).unwrap_or("");
            let v = raw.parse::<f64>().map_err(|_| SeriesError::NotANumber {
                index: row,
                token: raw.to_string(),
            })?;
            values.push(v);
        }
        Ok(Self { values })
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self { Self::new(values) }
}

impl From<&[f64]> for Series {
    fn from(values: &[f64]) -> Self { Self::new(values.to_vec()) }
}

impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Parses `"23, 31 28;35"`: commas, semicolons and whitespace all separate values.
impl FromStr for Series {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .enumerate()
            .map(|(index, token)| {
                token.parse::<f64>().map_err(|_| SeriesError::NotANumber { index, token: token.to_string() })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Series::new)
    }
}
