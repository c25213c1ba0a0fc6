//! Categorical types shared by records and views.

use serde::{Deserialize, Serialize};

/// Boundaries of the temperature buckets on the normalized scale.
///
/// Bucket `i` covers `(TEMPERATURE_BOUNDARIES[i], TEMPERATURE_BOUNDARIES[i + 1]]`;
/// the lowest bucket also includes its lower bound.
pub const TEMPERATURE_BOUNDARIES: [f64; 5] = [-0.10, 0.00, 0.15, 0.25, 0.35];

/// Season of a daily record, decoded from the 1..=4 code in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// All seasons in code order.
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    /// Decode the numeric season code used by the source files.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Season::Winter),
            2 => Some(Season::Spring),
            3 => Some(Season::Summer),
            4 => Some(Season::Fall),
            _ => None,
        }
    }

    /// The numeric code for this season.
    pub fn code(&self) -> u8 {
        match self {
            Season::Winter => 1,
            Season::Spring => 2,
            Season::Summer => 3,
            Season::Fall => 4,
        }
    }

    /// Get a human-readable label for the season.
    pub fn label(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }
}

/// Temperature category for an hourly record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBucket {
    VeryCold,
    Cool,
    Mild,
    Warm,
}

impl TemperatureBucket {
    /// All buckets from coldest to warmest.
    pub const ALL: [TemperatureBucket; 4] = [
        TemperatureBucket::VeryCold,
        TemperatureBucket::Cool,
        TemperatureBucket::Mild,
        TemperatureBucket::Warm,
    ];

    /// Get a human-readable label for the bucket.
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureBucket::VeryCold => "Very Cold",
            TemperatureBucket::Cool => "Cool",
            TemperatureBucket::Mild => "Mild",
            TemperatureBucket::Warm => "Warm",
        }
    }

    fn index(&self) -> usize {
        match self {
            TemperatureBucket::VeryCold => 0,
            TemperatureBucket::Cool => 1,
            TemperatureBucket::Mild => 2,
            TemperatureBucket::Warm => 3,
        }
    }

    /// Nominal `(lower, upper)` bounds of this bucket.
    pub fn bounds(&self) -> (f64, f64) {
        let i = self.index();
        (TEMPERATURE_BOUNDARIES[i], TEMPERATURE_BOUNDARIES[i + 1])
    }

    /// Assign a normalized temperature to a bucket.
    ///
    /// Values below the lowest boundary fall into `VeryCold` and values above
    /// the highest into `Warm`, so every temperature maps to exactly one bucket.
    pub fn classify(temperature: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|bucket| temperature <= bucket.bounds().1)
            .unwrap_or(TemperatureBucket::Warm)
    }

    /// Whether a temperature lies inside the nominal boundary span.
    pub fn is_nominal(temperature: f64) -> bool {
        let lowest = TEMPERATURE_BOUNDARIES[0];
        let highest = TEMPERATURE_BOUNDARIES[TEMPERATURE_BOUNDARIES.len() - 1];
        (lowest..=highest).contains(&temperature)
    }
}

/// Rider segment tracked independently in the daily dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Casual,
    Registered,
}

impl Segment {
    /// Both segments.
    pub const ALL: [Segment; 2] = [Segment::Casual, Segment::Registered];

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Segment::Casual => "Casual",
            Segment::Registered => "Registered",
        }
    }
}

impl std::str::FromStr for Segment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "casual" => Ok(Segment::Casual),
            "registered" => Ok(Segment::Registered),
            _ => Err(format!("Unknown segment: {}. Use casual or registered.", s)),
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Casual => write!(f, "casual"),
            Segment::Registered => write!(f, "registered"),
        }
    }
}
