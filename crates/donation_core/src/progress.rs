/// Funding band used to colour progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTier {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressResult {
    /// Raw raised/goal ratio. Not capped at 1.0.
    pub fraction: f32,
    pub tier: ColorTier,
    /// Rounded whole-number percentage for the "% funded" label. Can exceed
    /// 100 when a campaign overshoots its goal.
    pub percent_label: u32,
}

pub fn compute_progress(raised_minor_units: u64, goal_minor_units: u64) -> ProgressResult {
    if goal_minor_units == 0 {
        return ProgressResult {
            fraction: 0.0,
            tier: ColorTier::Low,
            percent_label: 0,
        };
    }

    let fraction = raised_minor_units as f32 / goal_minor_units as f32;
    let tier = if fraction < 0.3 {
        ColorTier::Low
    } else if fraction < 0.7 {
        ColorTier::Medium
    } else {
        ColorTier::High
    };

    ProgressResult {
        fraction,
        tier,
        percent_label: (fraction * 100.0).round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_funded_campaign_sits_in_the_middle_band() {
        let progress = compute_progress(5_000, 10_000);
        assert_eq!(progress.fraction, 0.5);
        assert_eq!(progress.tier, ColorTier::Medium);
        assert_eq!(progress.percent_label, 50);
    }

    #[test]
    fn lower_band_ends_exactly_at_thirty_percent() {
        assert_eq!(compute_progress(299, 1_000).tier, ColorTier::Low);
        assert_eq!(compute_progress(300, 1_000).tier, ColorTier::Medium);
    }

    #[test]
    fn upper_band_starts_exactly_at_seventy_percent() {
        assert_eq!(compute_progress(699, 1_000).tier, ColorTier::Medium);
        assert_eq!(compute_progress(700, 1_000).tier, ColorTier::High);
    }

    #[test]
    fn overshooting_the_goal_reports_over_one_hundred_percent() {
        let progress = compute_progress(86_400, 80_000);
        assert_eq!(progress.tier, ColorTier::High);
        assert_eq!(progress.percent_label, 108);
        assert!(progress.fraction > 1.0);
    }

    #[test]
    fn percent_label_rounds_to_nearest_whole_number() {
        assert_eq!(compute_progress(345, 1_000).percent_label, 35);
        assert_eq!(compute_progress(344, 1_000).percent_label, 34);
        assert_eq!(compute_progress(1, 3).percent_label, 33);
    }

    #[test]
    fn zero_goal_reports_empty_progress() {
        let progress = compute_progress(500, 0);
        assert_eq!(progress.fraction, 0.0);
        assert_eq!(progress.tier, ColorTier::Low);
        assert_eq!(progress.percent_label, 0);
    }
}
