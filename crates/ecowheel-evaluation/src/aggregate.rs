//! Aggregation engine
//!
//! [`calculate_aggregate_evaluation`] is the single bucketing rule; the
//! cascade functions apply it bottom-up according to the checklist's
//! active [`Granularity`]:
//!
//! ```text
//! Detailed:   guideline ──► sub-strategy ──► strategy
//! Normal:                   sub-strategy ──► strategy
//! Simplified:                                strategy (entered)
//! ```
//!
//! Direct-entry sub-strategies are entered by hand in detailed mode; their
//! guideline answers never overwrite them but they still feed their
//! strategy.

use crate::checklist::EvaluationChecklist;
use crate::error::EvaluationError;
use crate::levels::{EvaluationLevel, Granularity};
use ecowheel_catalog::{
    Catalog, CatalogRules, GuidelineId, StrategyId, SubStrategy, SubStrategyId,
};

/// Mean of the applicable scores, `None` if every value is `N/A`
#[must_use]
pub fn mean_score<I>(evaluations: I) -> Option<f64>
where
    I: IntoIterator<Item = EvaluationLevel>,
{
    let (sum, count) = evaluations
        .into_iter()
        .map(EvaluationLevel::score)
        .filter(|score| *score > 0.0)
        .fold((0.0, 0u32), |(sum, count), score| (sum + score, count + 1));

    (count > 0).then(|| sum / f64::from(count))
}

/// Aggregate a list of values into one grade
///
/// `N/A` entries are discarded; if nothing remains the result is `N/A`,
/// otherwise the mean score is bucketed with [`EvaluationLevel::from_mean`].
#[must_use]
pub fn calculate_aggregate_evaluation<I>(evaluations: I) -> EvaluationLevel
where
    I: IntoIterator<Item = EvaluationLevel>,
{
    mean_score(evaluations).map_or(EvaluationLevel::NotApplicable, EvaluationLevel::from_mean)
}

/// Grade of a sub-strategy derived from its guideline answers
fn guideline_grade(checklist: &EvaluationChecklist, sub: &SubStrategy) -> EvaluationLevel {
    calculate_aggregate_evaluation(
        sub.guidelines
            .iter()
            .map(|g| checklist.guideline(g.id.as_str())),
    )
}

/// Check whether any guideline of the sub-strategy has been answered
fn has_guideline_input(checklist: &EvaluationChecklist, sub: &SubStrategy) -> bool {
    sub.guidelines
        .iter()
        .any(|g| checklist.guidelines.contains_key(g.id.as_str()))
}

/// Grade a sub-strategy contributes to its strategy at the active level
///
/// In detailed mode regular sub-strategies contribute their guideline
/// grade, so values left in the map by normal mode are never read.
fn contributing_grade(
    checklist: &EvaluationChecklist,
    rules: &CatalogRules,
    sub: &SubStrategy,
) -> EvaluationLevel {
    if checklist.level == Granularity::Detailed && !rules.is_direct_entry(sub.id.as_str()) {
        guideline_grade(checklist, sub)
    } else {
        checklist.sub_strategy(sub.id.as_str())
    }
}

/// Recompute a sub-strategy grade from its guideline answers
pub fn recompute_sub_strategy(
    checklist: &mut EvaluationChecklist,
    catalog: &Catalog,
    id: &SubStrategyId,
) {
    let Some(sub) = catalog.sub_strategy(id.as_str()) else {
        return;
    };
    let grade = guideline_grade(checklist, sub);
    tracing::debug!("Sub-strategy {} aggregated to {}", id, grade);
    checklist.sub_strategies.insert(id.clone(), grade);
}

/// Recompute a strategy grade from the grades of its sub-strategies
pub fn recompute_strategy(
    checklist: &mut EvaluationChecklist,
    catalog: &Catalog,
    rules: &CatalogRules,
    id: &StrategyId,
) {
    let Some(strategy) = catalog.strategy(id.as_str()) else {
        return;
    };
    let grade = calculate_aggregate_evaluation(
        strategy
            .sub_strategies
            .iter()
            .map(|s| contributing_grade(checklist, rules, s)),
    );
    tracing::debug!("Strategy {} aggregated to {}", id, grade);
    checklist.strategies.insert(id.clone(), grade);
}

/// Re-run the cascade for the checklist's active level
///
/// Only entries with input at the active level are rewritten; values the
/// user left at another level stay in place.
pub fn recalculate(checklist: &mut EvaluationChecklist, catalog: &Catalog, rules: &CatalogRules) {
    let level = checklist.level;
    if level == Granularity::Simplified {
        return;
    }
    for strategy in catalog.strategies() {
        let mut has_input = false;
        for sub in &strategy.sub_strategies {
            let direct = rules.is_direct_entry(sub.id.as_str());
            match level {
                Granularity::Detailed if !direct => {
                    if has_guideline_input(checklist, sub) {
                        recompute_sub_strategy(checklist, catalog, &sub.id);
                        has_input = true;
                    }
                }
                _ => has_input |= checklist.sub_strategies.contains_key(sub.id.as_str()),
            }
        }
        if has_input {
            recompute_strategy(checklist, catalog, rules, &strategy.id);
        }
    }
}

/// Enter a strategy grade (simplified mode only)
///
/// # Errors
/// Returns [`EvaluationError::LevelNotApplicable`] unless the checklist is
/// at [`Granularity::Simplified`].
pub fn set_strategy_evaluation(
    checklist: &mut EvaluationChecklist,
    id: &StrategyId,
    value: EvaluationLevel,
) -> Result<(), EvaluationError> {
    if checklist.level != Granularity::Simplified {
        return Err(EvaluationError::level_not_applicable(id.as_str(), checklist.level));
    }
    checklist.strategies.insert(id.clone(), value);
    Ok(())
}

/// Enter a sub-strategy grade and bubble it into the strategy
///
/// Applicable in normal mode, and in detailed mode for direct-entry
/// sub-strategies.
///
/// # Errors
/// Returns [`EvaluationError::LevelNotApplicable`] otherwise.
pub fn set_sub_strategy_evaluation(
    checklist: &mut EvaluationChecklist,
    catalog: &Catalog,
    rules: &CatalogRules,
    id: &SubStrategyId,
    value: EvaluationLevel,
) -> Result<(), EvaluationError> {
    let applicable = match checklist.level {
        Granularity::Simplified => false,
        Granularity::Normal => true,
        Granularity::Detailed => rules.is_direct_entry(id.as_str()),
    };
    if !applicable {
        return Err(EvaluationError::level_not_applicable(id.as_str(), checklist.level));
    }

    checklist.sub_strategies.insert(id.clone(), value);
    recompute_strategy(checklist, catalog, rules, &id.strategy_id());
    Ok(())
}

/// Enter a guideline answer and run the full cascade above it
///
/// # Errors
/// Returns [`EvaluationError::LevelNotApplicable`] unless the checklist is
/// at [`Granularity::Detailed`].
pub fn set_guideline_evaluation(
    checklist: &mut EvaluationChecklist,
    catalog: &Catalog,
    rules: &CatalogRules,
    id: &GuidelineId,
    value: EvaluationLevel,
) -> Result<(), EvaluationError> {
    if checklist.level != Granularity::Detailed {
        return Err(EvaluationError::level_not_applicable(id.as_str(), checklist.level));
    }

    checklist.guidelines.insert(id.clone(), value);
    let sub = id.sub_strategy_id();
    if !rules.is_direct_entry(sub.as_str()) {
        recompute_sub_strategy(checklist, catalog, &sub);
    }
    recompute_strategy(checklist, catalog, rules, &sub.strategy_id());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::EvaluationLevel::{
        Excellent, Good, Mediocre, No, NotApplicable, Partially, Poor, Yes,
    };
    use ecowheel_catalog::ExclusionTable;
    use proptest::prelude::*;

    const DOC: &str = "\
1.Alpha
1.1.One
g
g
1.2.Two
g
7.Omega
7.1.Regular
g
7.7.Direct
g
g
";

    fn catalog() -> Catalog {
        Catalog::parse(DOC, &ExclusionTable::new())
    }

    #[test]
    fn all_not_applicable_is_not_applicable() {
        assert_eq!(calculate_aggregate_evaluation([NotApplicable]), NotApplicable);
        assert_eq!(
            calculate_aggregate_evaluation([NotApplicable, NotApplicable, NotApplicable]),
            NotApplicable
        );
        assert_eq!(
            calculate_aggregate_evaluation(Vec::<EvaluationLevel>::new()),
            NotApplicable
        );
    }

    #[test]
    fn excellent_excellent_poor_is_good() {
        assert_eq!(calculate_aggregate_evaluation([Excellent, Excellent, Poor]), Good);
    }

    #[test]
    fn yes_no_is_good() {
        assert_eq!(calculate_aggregate_evaluation([Yes, No]), Good);
    }

    #[test]
    fn not_applicable_entries_are_discarded() {
        assert_eq!(calculate_aggregate_evaluation([Poor, NotApplicable, NotApplicable]), Poor);
        assert_eq!(calculate_aggregate_evaluation([Partially, Mediocre]), Mediocre);
        assert_eq!(mean_score([Yes, NotApplicable, Partially]), Some(3.25));
    }

    #[test]
    fn simplified_mode_writes_strategy_only() {
        let mut checklist = EvaluationChecklist::at_level(Granularity::Simplified);
        set_strategy_evaluation(&mut checklist, &"1".into(), Good).unwrap();
        assert_eq!(checklist.strategy("1"), Good);

        let err = set_sub_strategy_evaluation(
            &mut checklist,
            &catalog(),
            &CatalogRules::default(),
            &"1.1".into(),
            Good,
        )
        .unwrap_err();
        assert!(matches!(err, EvaluationError::LevelNotApplicable { .. }));
    }

    #[test]
    fn normal_mode_bubbles_sub_strategies() {
        let catalog = catalog();
        let rules = CatalogRules::default();
        let mut checklist = EvaluationChecklist::at_level(Granularity::Normal);

        set_sub_strategy_evaluation(&mut checklist, &catalog, &rules, &"1.1".into(), Excellent)
            .unwrap();
        assert_eq!(checklist.strategy("1"), Excellent);

        set_sub_strategy_evaluation(&mut checklist, &catalog, &rules, &"1.2".into(), Poor)
            .unwrap();
        // (4 + 1) / 2 = 2.5
        assert_eq!(checklist.strategy("1"), Good);

        assert!(set_strategy_evaluation(&mut checklist, &"1".into(), Poor).is_err());
        assert!(set_guideline_evaluation(&mut checklist, &catalog, &rules, &"1.1.1".into(), Yes)
            .is_err());
    }

    #[test]
    fn detailed_mode_runs_full_cascade() {
        let catalog = catalog();
        let rules = CatalogRules::default();
        let mut checklist = EvaluationChecklist::at_level(Granularity::Detailed);

        set_guideline_evaluation(&mut checklist, &catalog, &rules, &"1.1.1".into(), Yes).unwrap();
        set_guideline_evaluation(&mut checklist, &catalog, &rules, &"1.1.2".into(), No).unwrap();
        assert_eq!(checklist.sub_strategy("1.1"), Good);
        assert_eq!(checklist.strategy("1"), Good);

        set_guideline_evaluation(&mut checklist, &catalog, &rules, &"1.2.1".into(), No).unwrap();
        assert_eq!(checklist.sub_strategy("1.2"), Poor);
        // (3 + 1) / 2 = 2.0
        assert_eq!(checklist.strategy("1"), Mediocre);
    }

    #[test]
    fn direct_entry_sub_strategy_is_not_recomputed_from_guidelines() {
        let catalog = catalog();
        let rules = CatalogRules::default();
        let mut checklist = EvaluationChecklist::at_level(Granularity::Detailed);

        set_sub_strategy_evaluation(&mut checklist, &catalog, &rules, &"7.7".into(), Excellent)
            .unwrap();
        set_guideline_evaluation(&mut checklist, &catalog, &rules, &"7.7.1".into(), No).unwrap();
        assert_eq!(checklist.sub_strategy("7.7"), Excellent);
        assert_eq!(checklist.guideline("7.7.1"), No);

        set_guideline_evaluation(&mut checklist, &catalog, &rules, &"7.1.1".into(), No).unwrap();
        // 7.1 = Poor (1), 7.7 = Excellent (4) → 2.5
        assert_eq!(checklist.strategy("7"), Good);

        let err =
            set_sub_strategy_evaluation(&mut checklist, &catalog, &rules, &"7.1".into(), Good);
        assert!(err.is_err());
    }

    #[test]
    fn unknown_ids_skip_cascade() {
        let catalog = catalog();
        let rules = CatalogRules::default();
        let mut checklist = EvaluationChecklist::at_level(Granularity::Detailed);

        set_guideline_evaluation(&mut checklist, &catalog, &rules, &"9.9.9".into(), Yes).unwrap();
        assert_eq!(checklist.guideline("9.9.9"), Yes);
        assert!(checklist.sub_strategies.is_empty());
        assert!(checklist.strategies.is_empty());
    }

    #[test]
    fn recalculate_matches_incremental_cascade() {
        let catalog = catalog();
        let rules = CatalogRules::default();
        let mut incremental = EvaluationChecklist::at_level(Granularity::Detailed);
        for (id, value) in [("1.1.1", Yes), ("1.1.2", Partially), ("1.2.1", No), ("7.1.1", Yes)] {
            set_guideline_evaluation(&mut incremental, &catalog, &rules, &id.into(), value)
                .unwrap();
        }

        let mut batch = EvaluationChecklist::at_level(Granularity::Detailed);
        batch.guidelines = incremental.guidelines.clone();
        recalculate(&mut batch, &catalog, &rules);

        for id in ["1", "7"] {
            assert_eq!(batch.strategy(id), incremental.strategy(id));
        }
        for id in ["1.1", "1.2", "7.1"] {
            assert_eq!(batch.sub_strategy(id), incremental.sub_strategy(id));
        }
    }

    #[test]
    fn detailed_strategy_ignores_values_left_by_normal_mode() {
        let catalog = catalog();
        let rules = CatalogRules::default();
        let mut checklist = EvaluationChecklist::at_level(Granularity::Normal);
        set_sub_strategy_evaluation(&mut checklist, &catalog, &rules, &"1.2".into(), Excellent)
            .unwrap();

        checklist.level = Granularity::Detailed;
        set_guideline_evaluation(&mut checklist, &catalog, &rules, &"1.1.1".into(), No).unwrap();

        assert_eq!(checklist.sub_strategy("1.1"), Poor);
        assert_eq!(checklist.sub_strategy("1.2"), Excellent);
        assert_eq!(checklist.strategy("1"), Poor);
    }

    #[test]
    fn recalculate_leaves_other_levels_alone() {
        let catalog = catalog();
        let rules = CatalogRules::default();
        let mut checklist = EvaluationChecklist::at_level(Granularity::Detailed);
        checklist.strategies.insert("7".into(), Good);
        checklist.sub_strategies.insert("1.2".into(), Excellent);
        checklist.guidelines.insert("1.1.1".into(), Yes);

        recalculate(&mut checklist, &catalog, &rules);

        assert_eq!(checklist.sub_strategy("1.1"), Excellent);
        assert_eq!(checklist.sub_strategy("1.2"), Excellent);
        assert_eq!(checklist.strategy("1"), Excellent);
        assert_eq!(checklist.strategy("7"), Good);
        assert!(!checklist.sub_strategies.contains_key("7.1"));
    }

    fn any_level() -> impl Strategy<Value = EvaluationLevel> {
        prop_oneof![
            Just(Excellent),
            Just(Good),
            Just(Mediocre),
            Just(Poor),
            Just(Yes),
            Just(Partially),
            Just(No),
            Just(NotApplicable),
        ]
    }

    proptest! {
        #[test]
        fn prop_aggregate_is_na_iff_no_applicable_input(
            values in proptest::collection::vec(any_level(), 0..30)
        ) {
            let result = calculate_aggregate_evaluation(values.iter().copied());
            let any_applicable = values.iter().any(|v| v.is_applicable());
            prop_assert_eq!(result == NotApplicable, !any_applicable);
        }

        #[test]
        fn prop_aggregate_is_a_grade(
            values in proptest::collection::vec(any_level(), 0..30)
        ) {
            let result = calculate_aggregate_evaluation(values);
            prop_assert!(EvaluationLevel::GRADES.contains(&result));
        }

        #[test]
        fn prop_mean_within_scale(
            values in proptest::collection::vec(any_level(), 1..30)
        ) {
            if let Some(mean) = mean_score(values) {
                prop_assert!((1.0..=4.0).contains(&mean));
            }
        }
    }
}
