use super::domain::AnalysisSummary;

const PARTIAL_WEIGHT: f64 = 0.5;

/// Aggregate compliance percentage with partial fulfillment at half credit.
pub fn score(fulfilled: u32, partial: u32, not_fulfilled: u32) -> f64 {
    let total = u64::from(fulfilled) + u64::from(partial) + u64::from(not_fulfilled);
    if total == 0 {
        return 0.0;
    }

    (f64::from(fulfilled) + PARTIAL_WEIGHT * f64::from(partial)) / total as f64 * 100.0
}

/// One-decimal rendering used by views; the unrounded value stays canonical.
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

impl AnalysisSummary {
    pub fn score(&self) -> f64 {
        score(self.fulfilled, self.partial, self.not_fulfilled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_scores_zero() {
        assert_eq!(score(0, 0, 0), 0.0);
    }

    #[test]
    fn partial_counts_at_half_credit() {
        assert_eq!(score(2, 1, 1), 62.5);
        assert_eq!(score(3, 2, 0), 80.0);
        assert_eq!(score(0, 4, 0), 50.0);
    }

    #[test]
    fn score_stays_within_percentage_bounds() {
        for fulfilled in 0..6 {
            for partial in 0..6 {
                for not_fulfilled in 0..6 {
                    if fulfilled + partial + not_fulfilled == 0 {
                        continue;
                    }
                    let value = score(fulfilled, partial, not_fulfilled);
                    assert!(
                        (0.0..=100.0).contains(&value),
                        "score({fulfilled}, {partial}, {not_fulfilled}) = {value}"
                    );
                }
            }
        }
        assert_eq!(score(u32::MAX, 0, 0), 100.0);
        assert_eq!(score(0, 0, u32::MAX), 0.0);
    }

    #[test]
    fn formatting_rounds_to_one_decimal() {
        assert_eq!(format_score(80.0), "80.0");
        assert_eq!(format_score(200.0 / 3.0), "66.7");
        assert_eq!(format_score(0.0), "0.0");
    }
}
