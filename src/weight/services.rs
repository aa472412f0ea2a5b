use serde::Serialize;
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

use crate::weight::repo_types::WeightRecord;

/// Smallest denominator the goal percentage divides by, so a target at or
/// above the start weight cannot produce a division by zero or a negative
/// blow-up.
const MIN_WEIGHT_SPAN: f64 = 0.1;

const DISPLAY_DATE: &[FormatItem<'static>] = format_description!("[day]/[month]/[year]");

/// Today's date in the dd/mm/yyyy form the history stores and charts show.
pub fn today_display_date() -> String {
    let today = OffsetDateTime::now_utc().date();
    today
        .format(&DISPLAY_DATE)
        .unwrap_or_else(|_| today.to_string())
}

/// One chart point: the observed weight plus the derived series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressPoint {
    pub date: String,
    pub weight: f64,
    /// Kilograms shed since the start weight, one decimal, signed: a
    /// regain past the start point goes negative, never clamped.
    pub eliminated: f64,
    /// Straight-line target trajectory for this point, floored at the
    /// target weight.
    pub goal: f64,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Resolution order for the progress anchor: the profile's stored start
/// weight, else the first recorded weighing, else the current weight.
pub fn resolve_start_weight(
    profile_start: Option<f64>,
    history: &[WeightRecord],
    current_weight: f64,
) -> f64 {
    profile_start
        .or_else(|| history.first().map(|r| r.weight))
        .unwrap_or(current_weight)
}

/// Derive the chart series from the raw history. Pure; same inputs, same
/// output, no clamping of `eliminated`.
pub fn chart_series(
    history: &[WeightRecord],
    start_weight: f64,
    target_weight: f64,
) -> Vec<ProgressPoint> {
    let n = history.len();
    let step = if n > 1 {
        (start_weight - target_weight) / (n as f64 - 1.0)
    } else {
        0.0
    };
    history
        .iter()
        .enumerate()
        .map(|(i, record)| ProgressPoint {
            date: record.date.clone(),
            weight: record.weight,
            eliminated: round1(start_weight - record.weight),
            goal: (start_weight - step * i as f64).max(target_weight),
        })
        .collect()
}

/// Overall completion in percent, always within [0, 100]. The numerator is
/// the latest record's eliminated value (0 with no history).
pub fn goal_percentage(history: &[WeightRecord], start_weight: f64, target_weight: f64) -> f64 {
    let denominator = (start_weight - target_weight).max(MIN_WEIGHT_SPAN);
    let numerator = history
        .last()
        .map_or(0.0, |record| round1(start_weight - record.weight));
    (numerator / denominator * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn record(weight: f64) -> WeightRecord {
        WeightRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: "01/01/2026".into(),
            weight,
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    fn history(weights: &[f64]) -> Vec<WeightRecord> {
        weights.iter().copied().map(record).collect()
    }

    #[test]
    fn single_record_series() {
        let h = history(&[68.0]);
        let series = chart_series(&h, 75.0, 65.0);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].eliminated, 7.0);
        assert_eq!(series[0].goal, 75.0); // step is 0 for N <= 1
    }

    #[test]
    fn regression_scenario() {
        let h = history(&[75.0, 72.0, 68.0]);
        let series = chart_series(&h, 75.0, 65.0);
        let eliminated: Vec<f64> = series.iter().map(|p| p.eliminated).collect();
        assert_eq!(eliminated, vec![0.0, 3.0, 7.0]);
        assert_eq!(goal_percentage(&h, 75.0, 65.0), 70.0);
    }

    #[test]
    fn goal_series_descends_to_target_and_never_undershoots() {
        let h = history(&[80.0, 78.0, 76.0, 74.0, 72.0]);
        let series = chart_series(&h, 80.0, 72.0);
        for pair in series.windows(2) {
            assert!(pair[1].goal <= pair[0].goal);
        }
        for point in &series {
            assert!(point.goal >= 72.0);
        }
        assert_eq!(series.last().map(|p| p.goal), Some(72.0));
    }

    #[test]
    fn goal_floor_holds_when_line_would_overshoot() {
        // Start below target: the naive line would climb past it, the floor
        // keeps every point at or above the target.
        let h = history(&[60.0, 61.0, 62.0]);
        let series = chart_series(&h, 60.0, 65.0);
        for point in &series {
            assert!(point.goal >= 65.0);
        }
    }

    #[test]
    fn eliminated_goes_negative_on_regain() {
        let h = history(&[75.0, 77.5]);
        let series = chart_series(&h, 75.0, 65.0);
        assert_eq!(series[1].eliminated, -2.5);
    }

    #[test]
    fn eliminated_rounds_to_one_decimal() {
        let h = history(&[74.26]);
        let series = chart_series(&h, 75.0, 65.0);
        assert_eq!(series[0].eliminated, 0.7);
    }

    #[test]
    fn percentage_clamps_to_unit_interval() {
        // Target above start: denominator floored at 0.1, result clamped.
        let gained = history(&[72.0]);
        let pct = goal_percentage(&gained, 70.0, 75.0);
        assert!((0.0..=100.0).contains(&pct));
        assert_eq!(pct, 0.0);

        // Lost far past the target.
        let overshoot = history(&[75.0, 60.0]);
        assert_eq!(goal_percentage(&overshoot, 75.0, 65.0), 100.0);
    }

    #[test]
    fn percentage_with_empty_history_is_zero() {
        assert_eq!(goal_percentage(&[], 75.0, 65.0), 0.0);
    }

    #[test]
    fn calculator_is_idempotent() {
        let h = history(&[75.0, 71.2, 69.9]);
        let a = chart_series(&h, 75.0, 65.0);
        let b = chart_series(&h, 75.0, 65.0);
        assert_eq!(a, b);
        assert_eq!(
            goal_percentage(&h, 75.0, 65.0),
            goal_percentage(&h, 75.0, 65.0)
        );
    }

    #[test]
    fn start_weight_resolution_order() {
        let h = history(&[78.0, 76.0]);
        assert_eq!(resolve_start_weight(Some(80.0), &h, 70.0), 80.0);
        assert_eq!(resolve_start_weight(None, &h, 70.0), 78.0);
        assert_eq!(resolve_start_weight(None, &[], 70.0), 70.0);
    }

    #[test]
    fn display_date_shape() {
        let date = today_display_date();
        assert_eq!(date.len(), 10);
        assert_eq!(&date[2..3], "/");
        assert_eq!(&date[5..6], "/");
    }
}
