//! Plain-language sentences derived from the computed views.

use serde::Serialize;

use crate::aggregate::Correlation;
use crate::dashboard::DashboardViews;
use crate::schema::Segment;

/// What an insight sentence is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightTopic {
    TotalRentals,
    Temperature,
    PeakHour,
    Season,
    BestDay,
}

/// One derived sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub topic: InsightTopic,
    pub text: String,
}

impl Insight {
    fn new(topic: InsightTopic, text: String) -> Self {
        Self { topic, text }
    }
}

/// Describe the strength and direction of a correlation coefficient.
pub fn describe_strength(coefficient: f64) -> &'static str {
    let magnitude = coefficient.abs();
    match (magnitude, coefficient >= 0.0) {
        (m, _) if m < 0.1 => "no meaningful",
        (m, true) if m < 0.3 => "a weak positive",
        (m, false) if m < 0.3 => "a weak negative",
        (m, true) if m < 0.7 => "a moderate positive",
        (m, false) if m < 0.7 => "a moderate negative",
        (_, true) => "a strong positive",
        (_, false) => "a strong negative",
    }
}

/// Build the insight sentences for a set of views.
pub fn derive_insights(views: &DashboardViews) -> Vec<Insight> {
    let mut insights = Vec::new();

    insights.push(Insight::new(
        InsightTopic::TotalRentals,
        format!(
            "Total bike rentals from {} to {}: {}",
            views.range.start(),
            views.range.end(),
            views.daily_summary.total_count
        ),
    ));

    let temperature = match views.correlation {
        Correlation::Computed { coefficient, points } => {
            let direction = if coefficient >= 0.0 { "more" } else { "fewer" };
            let mut text = format!(
                "Correlation between temperature and rentals over {} days: {:.2}, {} relationship",
                points,
                coefficient,
                describe_strength(coefficient)
            );
            if coefficient.abs() >= 0.1 {
                text.push_str(&format!("; warmer days see {} rentals", direction));
            }
            text
        }
        Correlation::NotComputable { reason } => {
            format!("Correlation between temperature and rentals is not computable: {}", reason)
        }
    };
    insights.push(Insight::new(InsightTopic::Temperature, temperature));

    if let Some(peak) = views.hourly_totals.peak() {
        insights.push(Insight::new(
            InsightTopic::PeakHour,
            format!(
                "Rentals peak at {:02}:00 with {} rentals",
                peak.hour, peak.total_count
            ),
        ));
    }

    if let Some(busiest) = views.seasonal_totals.busiest() {
        insights.push(Insight::new(
            InsightTopic::Season,
            format!(
                "{} is the busiest season in range with {} rentals",
                busiest.label, busiest.total_count
            ),
        ));
    }

    for segment in Segment::ALL {
        if let Some(best) = views.rfm(segment).best_day() {
            insights.push(Insight::new(
                InsightTopic::BestDay,
                format!(
                    "Best day for {} riders: {} with {} rentals",
                    segment, best.date, best.monetary
                ),
            ));
        }
    }

    insights
}
