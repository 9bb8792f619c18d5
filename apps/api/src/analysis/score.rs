/// Denominator for the résumé completeness score.
///
/// The scored layout in `schema.rs` has 14 leaves (contact 5, skills 1,
/// experience item 4, education item 4), but scores are published against 16.
/// Change both together if the layout changes.
pub const TOTAL_RESUME_FIELDS: usize = 16;

/// Completeness percentage for `empty_count` empty fields out of `total_fields`.
///
/// `round((total - empty) * 100 / total)` with halves rounded up, computed in
/// integer arithmetic. The result is clamped to `0..=100`: under index-suffixed
/// paths a résumé with several partially filled items can report more empty
/// paths than `total_fields`, which scores 0 rather than going negative.
/// A zero `total_fields` means nothing is expected and scores 100.
pub fn completeness_score(empty_count: usize, total_fields: usize) -> u32 {
    if total_fields == 0 {
        return 100;
    }
    if empty_count >= total_fields {
        return 0;
    }
    // u128 so `filled * 200` cannot overflow for any usize
    let filled = (total_fields - empty_count) as u128;
    let total = total_fields as u128;
    // (filled * 100 / total) + 0.5, floored; always <= 100
    ((filled * 200 + total) / (2 * total)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_fields_denominator() {
        assert_eq!(TOTAL_RESUME_FIELDS, 16);
    }

    #[test]
    fn test_reference_scenario_score() {
        assert_eq!(completeness_score(6, TOTAL_RESUME_FIELDS), 63);
    }

    #[test]
    fn test_score_bounds() {
        assert_eq!(completeness_score(0, 16), 100);
        assert_eq!(completeness_score(16, 16), 0);
        assert_eq!(completeness_score(4, 16), 75);
    }

    #[test]
    fn test_score_rounds_half_up() {
        // 10 * 100 / 16 = 62.5
        assert_eq!(completeness_score(6, 16), 63);
        // 15 * 100 / 16 = 93.75
        assert_eq!(completeness_score(1, 16), 94);
        // 11 * 100 / 16 = 68.75
        assert_eq!(completeness_score(5, 16), 69);
        // 2 * 100 / 3 = 66.67
        assert_eq!(completeness_score(1, 3), 67);
        // 1 * 100 / 3 = 33.33
        assert_eq!(completeness_score(2, 3), 33);
    }

    #[test]
    fn test_score_clamped_when_empty_exceeds_total() {
        assert_eq!(completeness_score(17, 16), 0);
        assert_eq!(completeness_score(40, 16), 0);
    }

    #[test]
    fn test_huge_totals_do_not_overflow() {
        assert_eq!(completeness_score(0, usize::MAX), 100);
        assert_eq!(completeness_score(usize::MAX / 2, usize::MAX), 50);
        assert_eq!(completeness_score(usize::MAX - 1, usize::MAX), 0);
    }

    #[test]
    fn test_zero_total_scores_full() {
        assert_eq!(completeness_score(0, 0), 100);
        assert_eq!(completeness_score(3, 0), 100);
    }

    #[test]
    fn test_score_is_monotonic_in_empty_count() {
        let scores: Vec<u32> = (0..=TOTAL_RESUME_FIELDS)
            .map(|e| completeness_score(e, TOTAL_RESUME_FIELDS))
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{scores:?}");
    }
}
