//! Functional tests for the aggregation cascade.
//!
//! These drive a worksheet through each granularity and check the grades
//! stored back into the checklist maps, the radar averages derived from
//! them and the completion metric.

use ecowheel_catalog::{GuidelineId, StrategyId, SubStrategyId};
use ecowheel_core::{Worksheet, WorksheetError};
use ecowheel_evaluation::EvaluationLevel::{
    Excellent, Good, Mediocre, No, NotApplicable, Partially, Poor, Yes,
};
use ecowheel_evaluation::{
    calculate_aggregate_evaluation, Concept, EvaluationChecklist, EvaluationChecklists,
    EvaluationError, EvaluationLevel, Granularity,
};
use ecowheel_test_utils::{wheel_worksheet, WHEEL_CATALOG, WHEEL_GUIDELINES};
use pretty_assertions::assert_eq;

/// Helper: worksheet with concept A at the given level.
fn worksheet_at(level: Granularity) -> Worksheet {
    let mut worksheet = wheel_worksheet();
    worksheet.set_granularity(Concept::A, level);
    worksheet
}

fn answer(worksheet: &mut Worksheet, id: &str, value: EvaluationLevel) {
    worksheet
        .set_guideline_evaluation(Concept::A, &GuidelineId::new(id), value)
        .unwrap();
}

#[test]
fn only_not_applicable_aggregates_to_not_applicable() {
    for n in 1..=6 {
        assert_eq!(calculate_aggregate_evaluation(vec![NotApplicable; n]), NotApplicable);
    }
}

#[test]
fn excellent_excellent_poor_is_good() {
    assert_eq!(calculate_aggregate_evaluation([Excellent, Excellent, Poor]), Good);
}

#[test]
fn yes_no_is_good() {
    assert_eq!(calculate_aggregate_evaluation([Yes, No]), Good);
}

/// Sub-strategy grades come from the guideline answers, the strategy grade
/// from the sub-strategy grades, while the radar averages the leaves.
#[test]
fn detailed_cascade_and_leaf_average_differ() {
    let mut worksheet = worksheet_at(Granularity::Detailed);
    answer(&mut worksheet, "1.1.1", Yes);
    answer(&mut worksheet, "1.1.2", Partially);
    answer(&mut worksheet, "1.3.1", No);

    let checklist = worksheet.checklist(Concept::A);
    // (4 + 2.5) / 2 = 3.25
    assert_eq!(checklist.sub_strategy("1.1"), Good);
    assert_eq!(checklist.sub_strategy("1.3"), Poor);
    // (3 + 1) / 2 = 2.0
    assert_eq!(checklist.strategy("1"), Mediocre);
    // (4 + 2.5 + 1) / 3 = 2.5
    assert_eq!(worksheet.calculate_strategy_average(Concept::A, "1"), 2.5);
}

/// Guideline answers under a direct-entry sub-strategy never overwrite it,
/// but the sub-strategy still feeds its strategy.
#[test]
fn direct_entry_sub_strategies_are_typed_by_hand() {
    let mut worksheet = worksheet_at(Granularity::Detailed);
    worksheet
        .set_sub_strategy_evaluation(Concept::A, &SubStrategyId::new("7.7"), Excellent)
        .unwrap();
    answer(&mut worksheet, "7.7.1", No);

    let checklist = worksheet.checklist(Concept::A);
    assert_eq!(checklist.sub_strategy("7.7"), Excellent);
    assert_eq!(checklist.guideline("7.7.1"), No);
    assert_eq!(checklist.strategy("7"), Excellent);

    worksheet
        .set_sub_strategy_evaluation(Concept::A, &SubStrategyId::new("7.8"), Poor)
        .unwrap();
    assert_eq!(worksheet.checklist(Concept::A).strategy("7"), Good);

    let err = worksheet
        .set_sub_strategy_evaluation(Concept::A, &SubStrategyId::new("7.1"), Good)
        .unwrap_err();
    assert!(matches!(
        err,
        WorksheetError::Evaluation(EvaluationError::LevelNotApplicable { .. })
    ));
}

#[test]
fn excluded_guidelines_keep_their_positions() {
    let worksheet = wheel_worksheet();
    let catalog = worksheet.catalog();
    let ids: Vec<&str> = catalog
        .sub_strategy("7.7")
        .unwrap()
        .guidelines
        .iter()
        .map(|g| g.id.as_str())
        .collect();
    assert_eq!(ids, vec!["7.7.1", "7.7.3", "7.7.4", "7.7.6", "7.7.10"]);
    assert!(catalog.guideline("7.7.2").is_none());
    assert_eq!(catalog.guideline_count(), WHEEL_GUIDELINES);
}

#[test]
fn normal_cascade_bubbles_sub_strategies() {
    let mut worksheet = worksheet_at(Granularity::Normal);
    for (id, value) in [("2.1", Excellent), ("2.2", Poor)] {
        worksheet
            .set_sub_strategy_evaluation(Concept::A, &SubStrategyId::new(id), value)
            .unwrap();
    }

    assert_eq!(worksheet.checklist(Concept::A).strategy("2"), Good);
    assert_eq!(worksheet.calculate_strategy_average(Concept::A, "2"), 2.5);
    assert_eq!(worksheet.calculate_strategy_average(Concept::B, "2"), 0.0);
}

#[test]
fn writes_outside_active_level_are_rejected() {
    let mut worksheet = worksheet_at(Granularity::Normal);
    let strategy = worksheet
        .set_strategy_evaluation(Concept::A, &StrategyId::new("1"), Good)
        .unwrap_err();
    let guideline = worksheet
        .set_guideline_evaluation(Concept::A, &GuidelineId::new("1.1.1"), Yes)
        .unwrap_err();

    assert_eq!(
        strategy.to_string(),
        "evaluation error: 1 is not scored at Normal granularity"
    );
    assert!(matches!(guideline, WorksheetError::Evaluation(_)));
    assert!(worksheet.checklist(Concept::A).is_blank());
}

/// Detailed completion counts regular guidelines plus the two direct-entry
/// sub-strategies in place of theirs.
#[test]
fn detailed_completion_counts_direct_entries() {
    let mut worksheet = worksheet_at(Granularity::Detailed);
    answer(&mut worksheet, "1.1.1", Yes);
    answer(&mut worksheet, "3.2.1", No);
    worksheet
        .set_sub_strategy_evaluation(Concept::A, &SubStrategyId::new("7.8"), Good)
        .unwrap();

    // 28 regular guidelines + 7.7 + 7.8
    let completion = worksheet.completion(Concept::A);
    assert_eq!(completion.total, 30);
    assert_eq!(completion.filled, 3);
    assert_eq!(completion.percentage(), 10);

    let per_strategy = worksheet.strategy_completion(Concept::A, "7");
    assert_eq!((per_strategy.filled, per_strategy.total), (1, 5));
}

#[test]
fn replacing_checklists_skips_the_cascade() {
    let mut worksheet = wheel_worksheet();
    let mut checklists = EvaluationChecklists::default();
    checklists.a = EvaluationChecklist::at_level(Granularity::Normal);
    checklists.a.sub_strategies.insert("1.1".into(), Excellent);
    checklists.a.strategies.insert("1".into(), Poor);

    worksheet.set_evaluation_checklists(checklists.clone());

    assert_eq!(worksheet.checklists(), &checklists);
    assert_eq!(worksheet.checklist(Concept::A).strategy("1"), Poor);
    assert_eq!(worksheet.calculate_strategy_average(Concept::A, "1"), 4.0);
}

/// Grades entered in normal mode stay inert while detailed mode is active
/// and come back unchanged, even across a catalog reload.
#[test]
fn normal_grades_survive_detailed_mode() {
    let mut worksheet = worksheet_at(Granularity::Normal);
    worksheet
        .set_sub_strategy_evaluation(Concept::A, &SubStrategyId::new("1.2"), Excellent)
        .unwrap();

    worksheet.set_granularity(Concept::A, Granularity::Detailed);
    answer(&mut worksheet, "1.1.1", No);
    assert_eq!(worksheet.checklist(Concept::A).strategy("1"), Poor);

    worksheet.parse_catalog(WHEEL_CATALOG);
    worksheet.set_granularity(Concept::A, Granularity::Normal);
    assert_eq!(worksheet.checklist(Concept::A).sub_strategy("1.2"), Excellent);
}
