use super::super::domain::RiskTier;
use super::config::ScoringConfig;

/// Score at the one-decimal precision used by every report.
pub fn round_score(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

/// Tier for a score. A score equal to a boundary belongs to the lower tier.
pub fn classify(score: f64, config: &ScoringConfig) -> RiskTier {
    if score <= config.tiers.low_max {
        RiskTier::Low
    } else if score <= config.tiers.medium_max {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_resolve_to_the_lower_tier() {
        let config = ScoringConfig::default();
        assert_eq!(classify(0.0, &config), RiskTier::Low);
        assert_eq!(classify(20.0, &config), RiskTier::Low);
        assert_eq!(classify(20.000_1, &config), RiskTier::Medium);
        assert_eq!(classify(45.0, &config), RiskTier::Medium);
        assert_eq!(classify(45.5, &config), RiskTier::High);
        assert_eq!(classify(100.0, &config), RiskTier::High);
    }

    #[test]
    fn rounding_keeps_one_decimal() {
        assert_eq!(round_score(20.04), 20.0);
        assert_eq!(round_score(20.06), 20.1);
        assert_eq!(round_score(100.0), 100.0);
    }

    #[test]
    fn tiers_are_contiguous_across_the_score_range() {
        let config = ScoringConfig::default();
        let mut previous = RiskTier::Low;
        for step in 0..=1000 {
            let tier = classify(step as f64 / 10.0, &config);
            assert!(tier >= previous, "tiers must never step back down");
            previous = tier;
        }
        assert_eq!(previous, RiskTier::High);
    }
}
