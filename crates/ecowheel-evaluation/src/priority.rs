//! Display priority per strategy
//!
//! A pure read over the qualitative store; nothing is cached.

use crate::levels::PriorityLevel;
use crate::qualitative::QualitativeEvaluation;
use ecowheel_catalog::{Catalog, CatalogRules, PriorityRule, Strategy, StrategyId};

/// Effective priority shown for a strategy
///
/// Direct-priority strategies return their own field. Derived strategies
/// return the highest priority among their qualitative rows (combined
/// pairs folded to the primary id); the first row reaching the maximum
/// wins, and the result is `None` when every row is `None`.
#[must_use]
pub fn strategy_priority_for_display(
    strategy: &Strategy,
    qualitative: &QualitativeEvaluation,
    rules: &CatalogRules,
) -> PriorityLevel {
    match rules.priority_rule(strategy.id.as_str()) {
        PriorityRule::Direct => qualitative.strategy_priority(strategy.id.as_str()),
        PriorityRule::Derived => {
            let mut highest = PriorityLevel::None;
            for row in rules.aliases.qualitative_rows(strategy) {
                let priority = qualitative.sub_strategy_priority(row.id.as_str(), &rules.aliases);
                if priority > highest {
                    highest = priority;
                }
            }
            highest
        }
    }
}

/// Display priorities for every strategy, in catalog order
#[must_use]
pub fn display_priorities(
    catalog: &Catalog,
    qualitative: &QualitativeEvaluation,
    rules: &CatalogRules,
) -> Vec<(StrategyId, PriorityLevel)> {
    catalog
        .strategies()
        .iter()
        .map(|s| (s.id.clone(), strategy_priority_for_display(s, qualitative, rules)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qualitative::SubStrategyAnswer;
    use ecowheel_catalog::ExclusionTable;
    use proptest::prelude::*;

    fn catalog() -> Catalog {
        Catalog::parse(
            "1.A\n1.1.a\n1.2.b\n1.3.c\n1.4.d\n1.5.e\n2.B\n2.1.a\n2.2.b\n2.3.c\n5.E\n5.1.a\n",
            &ExclusionTable::new(),
        )
    }

    #[test]
    fn derived_priority_is_maximum_of_rows() {
        let catalog = catalog();
        let rules = CatalogRules::default();
        let mut store = QualitativeEvaluation::new();
        store.set_sub_strategy_priority("1.1", PriorityLevel::Low, &rules.aliases);
        store.set_sub_strategy_priority("1.3", PriorityLevel::Mid, &rules.aliases);

        let strategy = catalog.strategy("1").unwrap();
        assert_eq!(
            strategy_priority_for_display(strategy, &store, &rules),
            PriorityLevel::Mid
        );
    }

    #[test]
    fn derived_priority_defaults_to_none() {
        let catalog = catalog();
        let rules = CatalogRules::default();
        let store = QualitativeEvaluation::new();
        for id in ["1", "2", "5"] {
            let strategy = catalog.strategy(id).unwrap();
            assert_eq!(
                strategy_priority_for_display(strategy, &store, &rules),
                PriorityLevel::None
            );
        }
    }

    #[test]
    fn combined_pair_counts_once_through_primary() {
        let catalog = catalog();
        let rules = CatalogRules::default();
        let mut store = QualitativeEvaluation::new();
        store.set_sub_strategy_priority("2.3", PriorityLevel::High, &rules.aliases);

        let strategy = catalog.strategy("2").unwrap();
        assert_eq!(
            strategy_priority_for_display(strategy, &store, &rules),
            PriorityLevel::High
        );
    }

    #[test]
    fn direct_priority_ignores_rows() {
        let catalog = catalog();
        let rules = CatalogRules::default();
        let mut store = QualitativeEvaluation::new();
        store.set_sub_strategy_priority("5.1", PriorityLevel::High, &rules.aliases);

        let strategy = catalog.strategy("5").unwrap();
        assert_eq!(
            strategy_priority_for_display(strategy, &store, &rules),
            PriorityLevel::None
        );

        store
            .set_strategy_priority(&"5".into(), PriorityLevel::Low, &rules)
            .unwrap();
        assert_eq!(
            strategy_priority_for_display(strategy, &store, &rules),
            PriorityLevel::Low
        );
    }

    #[test]
    fn display_priorities_follow_catalog_order() {
        let catalog = catalog();
        let rules = CatalogRules::default();
        let mut store = QualitativeEvaluation::new();
        store.set_sub_strategy(
            "2.1",
            SubStrategyAnswer {
                priority: PriorityLevel::Mid,
                free_text_answer: String::new(),
            },
            &rules.aliases,
        );

        let priorities = display_priorities(&catalog, &store, &rules);
        let ids: Vec<&str> = priorities.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "5"]);
        assert_eq!(priorities[1].1, PriorityLevel::Mid);
    }

    fn any_priority() -> impl proptest::strategy::Strategy<Value = PriorityLevel> {
        prop_oneof![
            Just(PriorityLevel::None),
            Just(PriorityLevel::Low),
            Just(PriorityLevel::Mid),
            Just(PriorityLevel::High),
        ]
    }

    proptest! {
        #[test]
        fn prop_derived_priority_is_row_maximum(
            rows in proptest::collection::vec(any_priority(), 5)
        ) {
            let catalog = catalog();
            let rules = CatalogRules::default();
            let mut store = QualitativeEvaluation::new();
            for (idx, priority) in rows.iter().enumerate() {
                let id = format!("1.{}", idx + 1);
                store.set_sub_strategy_priority(&id, *priority, &rules.aliases);
            }

            // 1.5 folds into 1.4, so the last write to the pair wins
            let expected = rows[..3]
                .iter()
                .chain(std::iter::once(&rows[4]))
                .copied()
                .max()
                .unwrap_or_default();
            let strategy = catalog.strategy("1").unwrap();
            prop_assert_eq!(strategy_priority_for_display(strategy, &store, &rules), expected);
        }
    }
}
