//! Property tests for scoring, classification and display rounding.

use proptest::prelude::*;

use social_styles_core::display::RoundingMode;
use social_styles_core::{
    score_pairs, score_values, AnswerSheet, AxisScore, DisplayConfig, DisplayScore, SocialStyle,
};

fn answers() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(1i32..=4, 30)
}

fn rounding() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![Just(RoundingMode::HalfUp), Just(RoundingMode::HalfEven)]
}

proptest! {
    #[test]
    fn scores_stay_on_scale(values in answers()) {
        let result = score_values(&values).unwrap();
        for s in [result.assertiveness_score(), result.responsiveness_score()] {
            prop_assert!((1.0..=4.0).contains(&s), "score {} off scale", s);
        }
    }

    #[test]
    fn style_matches_float_cutoff(values in answers()) {
        let result = score_values(&values).unwrap();
        let high_a = result.assertiveness_score() >= 2.5;
        let high_r = result.responsiveness_score() >= 2.5;
        prop_assert_eq!(result.style(), SocialStyle::from_quadrant(high_a, high_r));
    }

    #[test]
    fn scoring_is_deterministic(values in answers()) {
        prop_assert_eq!(score_values(&values).unwrap(), score_values(&values).unwrap());
    }

    #[test]
    fn pair_order_is_irrelevant(values in answers(), seed in any::<u64>()) {
        let mut pairs: Vec<(u32, i32)> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as u32 + 1, v))
            .collect();
        let by_order = score_pairs(pairs.clone()).unwrap();
        let len = pairs.len();
        pairs.rotate_left((seed % len as u64) as usize);
        pairs.reverse();
        prop_assert_eq!(score_pairs(pairs).unwrap(), by_order);
    }

    #[test]
    fn display_rounding_never_changes_style(values in answers(), decimals in 0u8..=6, mode in rounding()) {
        let cfg = DisplayConfig { decimals, rounding: mode };
        let result = score_values(&values).unwrap();
        prop_assert_eq!(result.display(&cfg).style, result.style());
    }

    #[test]
    fn display_is_within_half_step(sum in 15u32..=60, decimals in 0u8..=6, mode in rounding()) {
        let cfg = DisplayConfig { decimals, rounding: mode };
        let shown = DisplayScore::round(sum, 15, &cfg).unwrap();
        let exact = f64::from(sum) / 15.0;
        let half_step = 0.5 / 10f64.powi(i32::from(decimals));
        prop_assert!((shown.value() - exact).abs() <= half_step + 1e-12);
        prop_assert_eq!(shown.decimals(), decimals);
    }

    #[test]
    fn out_of_range_value_is_rejected(values in answers(), slot in 0usize..30, bad in prop_oneof![i32::MIN..1, 5..=i32::MAX]) {
        let mut values = values;
        values[slot] = bad;
        prop_assert!(score_values(&values).is_err());
    }

    #[test]
    fn any_gap_is_incomplete(values in answers(), skip in 1u32..=30) {
        let mut sheet = AnswerSheet::new();
        for (i, &v) in values.iter().enumerate() {
            let index = i as u32 + 1;
            if index != skip {
                sheet.record_raw(index, v).unwrap();
            }
        }
        let err = sheet.to_answer_set().unwrap_err();
        prop_assert!(err.is_incomplete());
        prop_assert_eq!(err.question(), Some(skip as u8));
    }

    #[test]
    fn merge_adds_sums(a in 15u32..=60, b in 15u32..=60) {
        let x = AxisScore::from_parts(a, 15).unwrap();
        let y = AxisScore::from_parts(b, 15).unwrap();
        let merged = x.merge(&y).unwrap();
        prop_assert_eq!(merged.sum(), a + b);
        prop_assert_eq!(merged.count(), 30);
        prop_assert_eq!(merged.is_high(), 2 * (a + b) >= 150);
    }
}
