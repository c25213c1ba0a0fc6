//! Small numeric helpers used by the views.

use std::fmt;

use serde::Serialize;

/// Why a statistic could not be computed.
///
/// This is a reportable state, not an error: views carry it alongside
/// whatever they could compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InsufficientData {
    /// The filtered range holds no rows.
    NoRows,
    /// Fewer data points than the statistic needs.
    TooFewPoints { found: usize, required: usize },
    /// One series is constant.
    ZeroVariance { series: &'static str },
}

impl fmt::Display for InsufficientData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsufficientData::NoRows => write!(f, "no rows in the selected range"),
            InsufficientData::TooFewPoints { found, required } => {
                write!(f, "needs at least {} data points, found {}", required, found)
            }
            InsufficientData::ZeroVariance { series } => {
                write!(f, "{} does not vary in the selected range", series)
            }
        }
    }
}

/// Arithmetic mean, or `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Pearson correlation coefficient of two equally long series.
pub fn pearson(
    xs: &[f64],
    ys: &[f64],
    names: (&'static str, &'static str),
) -> Result<f64, InsufficientData> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return Err(InsufficientData::TooFewPoints {
            found: n,
            required: 2,
        });
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);

    if is_constant(xs) {
        return Err(InsufficientData::ZeroVariance { series: names.0 });
    }
    if is_constant(ys) {
        return Err(InsufficientData::ZeroVariance { series: names.1 });
    }

    // n >= 2 was checked above
    let mx = xs.iter().sum::<f64>() / n as f64;
    let my = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        cov += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }

    Ok((cov / (vx.sqrt() * vy.sqrt())).clamp(-1.0, 1.0))
}

fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|&v| v == values[0])
}
