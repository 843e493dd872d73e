//! SCORE_REPORT round-trip integration tests.
//!
//! Verifies that a scored answer set can be captured as a ScoreReport,
//! serialised to JSON, deserialised back, and rescored to the same result.

#[cfg(feature = "serde")]
mod tests {
    use social_styles_core::display::RoundingMode;
    use social_styles_core::report::{ScoreReport, SCORE_REPORT_VERSION};
    use social_styles_core::{score, AnswerSet, AssessmentError, DisplayConfig, SocialStyle};

    // ── Helpers ──────────────────────────────────────────────────────────────

    /// Assertiveness sum 38, responsiveness sum 34: a borderline driver.
    fn borderline_driver() -> AnswerSet {
        let values = [
            3, 3, 2, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, //
            2, 2, 2, 2, 3, 2, 2, 3, 2, 2, 3, 2, 2, 3, 2,
        ];
        AnswerSet::from_values(&values).expect("fixture answers are valid")
    }

    fn roundtrip(report: &ScoreReport) -> ScoreReport {
        let json = serde_json::to_string(report).expect("serialise");
        serde_json::from_str(&json).expect("deserialise")
    }

    // ── Tests ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_report_version_is_current() {
        let report = ScoreReport::from_answers(&borderline_driver(), &DisplayConfig::default());
        assert_eq!(report.version, SCORE_REPORT_VERSION);
    }

    #[test]
    fn test_report_carries_sums_and_display() {
        let report = ScoreReport::from_answers(&borderline_driver(), &DisplayConfig::default());

        assert_eq!(report.style, SocialStyle::Driver);
        assert_eq!(report.assertiveness.sum, 38);
        assert_eq!(report.assertiveness.count, 15);
        assert_eq!(report.assertiveness.display, "2.5");
        assert_eq!(report.responsiveness.sum, 34);
        assert_eq!(report.responsiveness.display, "2.3");
        assert!((report.assertiveness.mean - 38.0 / 15.0).abs() < 1e-12);
        assert_eq!(report.responses.len(), 30);
    }

    #[test]
    fn test_report_honours_display_config() {
        let cfg = DisplayConfig {
            decimals: 2,
            rounding: RoundingMode::HalfEven,
        };
        let report = ScoreReport::from_answers(&borderline_driver(), &cfg);
        assert_eq!(report.assertiveness.display, "2.53");
        assert_eq!(report.responsiveness.display, "2.27");
    }

    #[test]
    fn test_json_roundtrip_preserves_report() {
        let answers = borderline_driver();
        let result = score(&answers);
        let report = ScoreReport::new(&answers, &result, &DisplayConfig::default());

        let restored = roundtrip(&report);
        assert_eq!(restored, report);
        assert_eq!(restored.rescore().unwrap(), result);
        assert!(restored.is_consistent());
    }

    #[test]
    fn test_json_uses_uppercase_style() {
        let report = ScoreReport::from_answers(&borderline_driver(), &DisplayConfig::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["style"], "DRIVER");
        assert_eq!(json["assertiveness"]["sum"], 38);
        assert_eq!(json["responses"][0], 3);
    }

    #[test]
    fn test_edited_style_is_inconsistent() {
        let mut report = ScoreReport::from_answers(&borderline_driver(), &DisplayConfig::default());
        report.style = SocialStyle::Expressive;
        assert!(!report.is_consistent());
    }

    #[test]
    fn test_edited_sum_is_inconsistent() {
        let mut report = ScoreReport::from_answers(&borderline_driver(), &DisplayConfig::default());
        report.assertiveness.sum = 40;
        assert!(!report.is_consistent());
    }

    #[test]
    fn test_edited_display_mean_or_version_is_inconsistent() {
        let all_ones = AnswerSet::from_values(&[1; 30]).unwrap();
        let report = ScoreReport::from_answers(&all_ones, &DisplayConfig::default());
        assert!(report.is_consistent());

        let mut shown = report.clone();
        shown.assertiveness.display = "4.0".to_string();
        assert!(!shown.is_consistent());

        let mut mean = report.clone();
        mean.assertiveness.mean = 4.0;
        assert!(!mean.is_consistent());

        let mut version = report.clone();
        version.version = 99;
        assert!(!version.is_consistent());

        let mut all = report;
        all.assertiveness.display = "4.0".to_string();
        all.assertiveness.mean = 4.0;
        all.version = 99;
        assert!(!all.is_consistent());
    }

    #[test]
    fn test_display_checked_under_stored_config() {
        let cfg = DisplayConfig {
            decimals: 2,
            rounding: RoundingMode::HalfUp,
        };
        let report = roundtrip(&ScoreReport::from_answers(&borderline_driver(), &cfg));
        assert_eq!(report.display_config, cfg);
        assert!(report.is_consistent());

        // a one-decimal string is wrong for a two-decimal report
        let mut edited = report;
        edited.responsiveness.display = "2.3".to_string();
        assert!(!edited.is_consistent());
    }

    #[test]
    fn test_report_without_config_reads_as_default() {
        let report = ScoreReport::from_answers(&borderline_driver(), &DisplayConfig::default());
        let mut json = serde_json::to_value(&report).unwrap();
        json.as_object_mut().unwrap().remove("display_config");
        let restored: ScoreReport = serde_json::from_value(json).unwrap();
        assert_eq!(restored.display_config, DisplayConfig::default());
        assert!(restored.is_consistent());
    }

    #[test]
    fn test_truncated_responses_fail_rescore() {
        let mut report = ScoreReport::from_answers(&borderline_driver(), &DisplayConfig::default());
        report.responses.truncate(29);
        let err = report.rescore().unwrap_err();
        assert_eq!(
            err,
            AssessmentError::IncompleteAnswerSet {
                first_missing: 30,
                missing_count: 1,
            }
        );
        assert!(!report.is_consistent());
    }

    #[test]
    fn test_out_of_range_response_fails_rescore() {
        let json = serde_json::to_string(&ScoreReport::from_answers(
            &borderline_driver(),
            &DisplayConfig::default(),
        ))
        .unwrap();
        let mut report: ScoreReport = serde_json::from_str(&json).unwrap();
        report.responses[4] = 9;
        assert_eq!(
            report.rescore().unwrap_err(),
            AssessmentError::InvalidResponseValue {
                question: 5,
                value: 9,
            }
        );
    }

    #[test]
    fn test_off_scale_axis_record_has_no_score() {
        let mut report = ScoreReport::from_answers(&borderline_driver(), &DisplayConfig::default());
        report.responsiveness.sum = 100; // above 4 × 15
        assert!(report.responsiveness.to_axis_score().is_none());
    }
}
