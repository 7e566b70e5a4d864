//! Worksheet session
//!
//! The single owner of every store. Each mutation entry point commits the
//! primary change and recomputes whatever derives from it before
//! returning, so readers never observe a half-updated state:
//! - evaluation writes run the aggregation cascade of their concept
//! - idea board changes re-synchronize the radar copies
//! - catalog, checklist and resize events advance the layout epoch

use crate::config::WorksheetConfig;
use crate::error::WorksheetResult;
use crate::project::ProjectData;
use crate::snapshot::{ConceptCompletion, ResultsSnapshot, StrategyPriority};
use ecowheel_catalog::{Catalog, GuidelineId, StrategyId, SubStrategy, SubStrategyId};
use ecowheel_evaluation::{
    calculate_strategy_average, checklist_completion, display_priorities, radar_data, recalculate,
    strategy_completion, strategy_priority_for_display, Completion, Concept, EvaluationChecklist,
    EvaluationChecklists, EvaluationLevel, Granularity, PriorityLevel, QualitativeEvaluation,
    RadarData,
};
use ecowheel_geometry::{connector_lines, ArrowLine, ChartLayout, Point, Rect};
use ecowheel_ideas::{synchronize, Idea, IdeaBoard, IdeaId, RadarIdeas};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::sync::Arc;

/// Independently resettable part of the worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Project header
    ProjectData,
    /// Priorities and free-text answers
    QualitativeEvaluation,
    /// Both concept checklists
    EvaluationChecklists,
    /// Idea board and radar copies
    Ideas,
}

impl Section {
    /// Every section
    pub const ALL: [Self; 4] = [
        Self::ProjectData,
        Self::QualitativeEvaluation,
        Self::EvaluationChecklists,
        Self::Ideas,
    ];
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ProjectData => "project data",
            Self::QualitativeEvaluation => "qualitative evaluation",
            Self::EvaluationChecklists => "evaluation checklists",
            Self::Ideas => "ideas",
        };
        f.write_str(s)
    }
}

/// One worksheet session
#[derive(Debug, Clone)]
pub struct Worksheet {
    config: WorksheetConfig,
    catalog: Arc<Catalog>,
    project: ProjectData,
    qualitative: QualitativeEvaluation,
    checklists: EvaluationChecklists,
    board: IdeaBoard,
    radar_ideas: RadarIdeas,
    layout_epoch: u64,
}

impl Default for Worksheet {
    fn default() -> Self {
        Self::new(WorksheetConfig::default())
    }
}

impl Worksheet {
    /// Create a worksheet with an empty catalog
    #[must_use]
    pub fn new(config: WorksheetConfig) -> Self {
        Self {
            board: IdeaBoard::with_placement(config.placement.clone()),
            config,
            catalog: Arc::new(Catalog::empty()),
            project: ProjectData::default(),
            qualitative: QualitativeEvaluation::new(),
            checklists: EvaluationChecklists::default(),
            radar_ideas: RadarIdeas::new(),
            layout_epoch: 0,
        }
    }

    /// With catalog
    #[must_use]
    pub fn with_catalog(mut self, catalog: impl Into<Arc<Catalog>>) -> Self {
        self.set_catalog(catalog);
        self
    }

    /// Replace the catalog and re-run both cascades against it
    pub fn set_catalog(&mut self, catalog: impl Into<Arc<Catalog>>) {
        self.catalog = catalog.into();
        for concept in Concept::ALL {
            recalculate(self.checklists.get_mut(concept), &self.catalog, &self.config.rules);
        }
        tracing::info!(
            "Catalog set: {} strategies, {} guidelines",
            self.catalog.len(),
            self.catalog.guideline_count()
        );
        self.bump_layout();
    }

    /// Parse a catalog document with the configured exclusions
    pub fn parse_catalog(&mut self, text: &str) {
        let catalog = Catalog::parse(text, &self.config.exclusions);
        self.set_catalog(catalog);
    }

    /// Load a catalog file, falling back to an empty catalog on failure
    pub fn load_catalog(&mut self, path: impl AsRef<Path>) {
        let catalog = Catalog::load_or_empty(path, &self.config.exclusions);
        self.set_catalog(catalog);
    }

    /// Load a catalog file, keeping the current catalog on failure
    ///
    /// # Errors
    /// Returns [`crate::WorksheetError::Catalog`] if the file cannot be read.
    pub fn try_load_catalog(&mut self, path: impl AsRef<Path>) -> WorksheetResult<()> {
        let catalog = Catalog::load(path, &self.config.exclusions)?;
        self.set_catalog(catalog);
        Ok(())
    }

    /// Current catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shared handle to the current catalog
    #[inline]
    #[must_use]
    pub fn shared_catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &WorksheetConfig {
        &self.config
    }

    /// Project header
    #[inline]
    #[must_use]
    pub fn project(&self) -> &ProjectData {
        &self.project
    }

    /// Replace the project header
    pub fn set_project_data(&mut self, project: ProjectData) {
        self.project = project;
    }

    /// Qualitative store
    #[inline]
    #[must_use]
    pub fn qualitative(&self) -> &QualitativeEvaluation {
        &self.qualitative
    }

    /// Replace the qualitative store
    pub fn set_qualitative_evaluation(&mut self, qualitative: QualitativeEvaluation) {
        self.qualitative = qualitative;
    }

    /// Set the priority of a direct-priority strategy
    ///
    /// # Errors
    /// Returns [`crate::WorksheetError::Evaluation`] for a strategy whose
    /// priority is derived.
    pub fn set_strategy_priority(
        &mut self,
        id: &StrategyId,
        priority: PriorityLevel,
    ) -> WorksheetResult<()> {
        self.qualitative
            .set_strategy_priority(id, priority, &self.config.rules)?;
        Ok(())
    }

    /// Set the priority of a qualitative row
    pub fn set_sub_strategy_priority(&mut self, id: &str, priority: PriorityLevel) {
        self.qualitative
            .set_sub_strategy_priority(id, priority, &self.config.rules.aliases);
    }

    /// Set the free-text answer of a qualitative row
    pub fn set_sub_strategy_answer(&mut self, id: &str, text: impl Into<String>) {
        self.qualitative
            .set_sub_strategy_answer(id, text, &self.config.rules.aliases);
    }

    /// Qualitative rows of a strategy, combined pairs folded
    #[must_use]
    pub fn qualitative_rows(&self, strategy_id: &str) -> Vec<&SubStrategy> {
        self.catalog
            .strategy(strategy_id)
            .map(|s| self.config.rules.aliases.qualitative_rows(s))
            .unwrap_or_default()
    }

    /// Display priority of a strategy, `None` if unknown
    #[must_use]
    pub fn strategy_priority_for_display(&self, strategy_id: &str) -> PriorityLevel {
        self.catalog
            .strategy(strategy_id)
            .map_or(PriorityLevel::None, |s| {
                strategy_priority_for_display(s, &self.qualitative, &self.config.rules)
            })
    }

    /// Display priorities of every strategy, in catalog order
    #[must_use]
    pub fn display_priorities(&self) -> Vec<(StrategyId, PriorityLevel)> {
        display_priorities(&self.catalog, &self.qualitative, &self.config.rules)
    }

    /// Both checklists
    #[inline]
    #[must_use]
    pub fn checklists(&self) -> &EvaluationChecklists {
        &self.checklists
    }

    /// Checklist of a concept
    #[inline]
    #[must_use]
    pub fn checklist(&self, concept: Concept) -> &EvaluationChecklist {
        self.checklists.get(concept)
    }

    /// Replace both checklists verbatim, without running the cascade
    pub fn set_evaluation_checklists(&mut self, checklists: EvaluationChecklists) {
        self.checklists = checklists;
        self.bump_layout();
    }

    /// Switch the granularity of a concept
    ///
    /// Maps the new level does not read are kept unless the configuration
    /// asks for them to be cleared.
    pub fn set_granularity(&mut self, concept: Concept, level: Granularity) {
        let clear = self.config.clear_inactive_on_level_switch;
        let checklist = self.checklists.get_mut(concept);
        if checklist.level == level {
            return;
        }
        tracing::debug!("Concept {} switched from {} to {}", concept, checklist.level, level);
        checklist.level = level;
        if clear {
            checklist.clear_inactive();
        }
        self.bump_layout();
    }

    /// Enter a strategy grade
    ///
    /// # Errors
    /// Returns [`crate::WorksheetError::Evaluation`] unless the concept is
    /// at [`Granularity::Simplified`].
    pub fn set_strategy_evaluation(
        &mut self,
        concept: Concept,
        id: &StrategyId,
        value: EvaluationLevel,
    ) -> WorksheetResult<()> {
        ecowheel_evaluation::set_strategy_evaluation(self.checklists.get_mut(concept), id, value)?;
        self.bump_layout();
        Ok(())
    }

    /// Enter a sub-strategy grade and bubble it into its strategy
    ///
    /// # Errors
    /// Returns [`crate::WorksheetError::Evaluation`] if sub-strategies are
    /// not entered at the concept's level.
    pub fn set_sub_strategy_evaluation(
        &mut self,
        concept: Concept,
        id: &SubStrategyId,
        value: EvaluationLevel,
    ) -> WorksheetResult<()> {
        ecowheel_evaluation::set_sub_strategy_evaluation(
            self.checklists.get_mut(concept),
            &self.catalog,
            &self.config.rules,
            id,
            value,
        )?;
        self.bump_layout();
        Ok(())
    }

    /// Enter a guideline answer and run the cascade above it
    ///
    /// # Errors
    /// Returns [`crate::WorksheetError::Evaluation`] unless the concept is
    /// at [`Granularity::Detailed`].
    pub fn set_guideline_evaluation(
        &mut self,
        concept: Concept,
        id: &GuidelineId,
        value: EvaluationLevel,
    ) -> WorksheetResult<()> {
        ecowheel_evaluation::set_guideline_evaluation(
            self.checklists.get_mut(concept),
            &self.catalog,
            &self.config.rules,
            id,
            value,
        )?;
        self.bump_layout();
        Ok(())
    }

    /// Radar value of a strategy for a concept, 0 if unknown
    #[must_use]
    pub fn calculate_strategy_average(&self, concept: Concept, strategy_id: &str) -> f64 {
        calculate_strategy_average(&self.checklists, &self.catalog, concept, strategy_id)
    }

    /// Radar axes and both series
    #[must_use]
    pub fn radar_data(&self) -> RadarData {
        radar_data(&self.checklists, &self.catalog)
    }

    /// Completion of a concept's checklist at its active level
    #[must_use]
    pub fn completion(&self, concept: Concept) -> Completion {
        checklist_completion(self.checklists.get(concept), &self.catalog, &self.config.rules)
    }

    /// Completion of one strategy, empty if unknown
    #[must_use]
    pub fn strategy_completion(&self, concept: Concept, strategy_id: &str) -> Completion {
        self.catalog
            .strategy(strategy_id)
            .map(|s| strategy_completion(self.checklists.get(concept), s, &self.config.rules))
            .unwrap_or_default()
    }

    /// Idea board
    #[inline]
    #[must_use]
    pub fn board(&self) -> &IdeaBoard {
        &self.board
    }

    /// Radar copies of the confirmed ideas
    #[inline]
    #[must_use]
    pub fn radar_ideas(&self) -> &RadarIdeas {
        &self.radar_ideas
    }

    /// Select the strategy new ideas attach to
    pub fn select_strategy(&mut self, strategy: Option<StrategyId>) {
        self.board.select_strategy(strategy);
    }

    /// Create an idea for the selected strategy
    ///
    /// # Errors
    /// Returns an advisory [`crate::WorksheetError::Idea`] if no strategy is
    /// selected.
    pub fn add_idea(&mut self, text: impl Into<String>) -> WorksheetResult<IdeaId> {
        let id = self.board.add_idea(text)?;
        self.sync_radar_ideas();
        Ok(id)
    }

    /// Replace the board text of an idea
    ///
    /// # Errors
    /// Returns [`crate::WorksheetError::Idea`] for an unknown id.
    pub fn update_idea_text(&mut self, id: IdeaId, text: impl Into<String>) -> WorksheetResult<()> {
        self.board.update_text(id, text)?;
        self.sync_radar_ideas();
        Ok(())
    }

    /// Move an idea on the board
    ///
    /// # Errors
    /// Returns [`crate::WorksheetError::Idea`] for an unknown id.
    pub fn move_idea(&mut self, id: IdeaId, to: Point) -> WorksheetResult<()> {
        self.board.move_idea(id, to)?;
        self.sync_radar_ideas();
        Ok(())
    }

    /// Delete an idea and its radar copy
    ///
    /// # Errors
    /// Returns [`crate::WorksheetError::Idea`] for an unknown id.
    pub fn delete_idea(&mut self, id: IdeaId) -> WorksheetResult<Idea> {
        let idea = self.board.delete(id)?;
        self.sync_radar_ideas();
        Ok(idea)
    }

    /// Confirm or unconfirm an idea
    ///
    /// # Errors
    /// Returns [`crate::WorksheetError::Idea`] for an unknown id.
    pub fn set_idea_confirmed(&mut self, id: IdeaId, confirmed: bool) -> WorksheetResult<()> {
        self.board.set_confirmed(id, confirmed)?;
        self.sync_radar_ideas();
        Ok(())
    }

    /// Flip the confirmation of an idea, returning the new value
    ///
    /// # Errors
    /// Returns [`crate::WorksheetError::Idea`] for an unknown id.
    pub fn toggle_idea_confirmed(&mut self, id: IdeaId) -> WorksheetResult<bool> {
        let confirmed = self.board.toggle_confirmed(id)?;
        self.sync_radar_ideas();
        Ok(confirmed)
    }

    /// Edit the text of a radar copy only
    ///
    /// # Errors
    /// Returns [`crate::WorksheetError::Idea`] if the idea has no copy.
    pub fn update_radar_idea_text(
        &mut self,
        id: IdeaId,
        text: impl Into<String>,
    ) -> WorksheetResult<()> {
        self.radar_ideas.update_text(id, text)?;
        Ok(())
    }

    /// Move a radar copy on the results view
    ///
    /// # Errors
    /// Returns [`crate::WorksheetError::Idea`] if the idea has no copy.
    pub fn move_radar_idea(&mut self, id: IdeaId, to: Point) -> WorksheetResult<()> {
        self.radar_ideas.move_to(id, to)?;
        Ok(())
    }

    /// Associate a radar copy with a concept
    ///
    /// # Errors
    /// Returns [`crate::WorksheetError::Idea`] if the idea has no copy.
    pub fn set_radar_idea_concept(&mut self, id: IdeaId, concept: Concept) -> WorksheetResult<()> {
        self.radar_ideas.set_concept(id, concept)?;
        Ok(())
    }

    fn sync_radar_ideas(&mut self) {
        self.radar_ideas = synchronize(
            self.board.ideas(),
            &self.radar_ideas,
            self.config.placement.radar_default,
        );
    }

    /// Restore one section to its empty shape
    pub fn reset_section(&mut self, section: Section) {
        match section {
            Section::ProjectData => self.project = ProjectData::default(),
            Section::QualitativeEvaluation => self.qualitative = QualitativeEvaluation::new(),
            Section::EvaluationChecklists => {
                self.checklists = EvaluationChecklists::default();
                self.bump_layout();
            }
            Section::Ideas => {
                self.board.clear();
                self.radar_ideas.clear();
            }
        }
        tracing::info!("Section reset: {}", section);
    }

    /// Restore every section, keeping catalog and configuration
    pub fn reset_all(&mut self) {
        for section in Section::ALL {
            self.reset_section(section);
        }
    }

    /// Counter advanced whenever on-screen rectangles may have moved
    #[inline]
    #[must_use]
    pub fn layout_epoch(&self) -> u64 {
        self.layout_epoch
    }

    /// Record a resize, returning the new epoch
    pub fn notify_resize(&mut self) -> u64 {
        self.bump_layout();
        self.layout_epoch
    }

    fn bump_layout(&mut self) {
        self.layout_epoch = self.layout_epoch.wrapping_add(1);
    }

    /// Connector lines for the current catalog order
    #[must_use]
    pub fn connector_lines(
        &self,
        layout: &ChartLayout,
        boxes: &HashMap<StrategyId, Rect>,
    ) -> Vec<ArrowLine> {
        let strategies: Vec<StrategyId> = self.catalog.strategy_ids().cloned().collect();
        connector_lines(layout, &strategies, boxes, self.config.arrow_offset)
    }

    /// Derive the full results view
    #[must_use]
    pub fn results(&self) -> ResultsSnapshot {
        let priorities = self
            .display_priorities()
            .into_iter()
            .map(|(strategy_id, priority)| StrategyPriority {
                strategy_id,
                priority,
            })
            .collect();

        let completion = Concept::ALL
            .iter()
            .map(|&concept| {
                let completion = self.completion(concept);
                ConceptCompletion {
                    concept,
                    label: self.project.concept_label(concept),
                    level: self.checklists.get(concept).level,
                    completion,
                    percentage: completion.percentage(),
                }
            })
            .collect();

        ResultsSnapshot {
            project: self.project.clone(),
            radar: self.radar_data(),
            priorities,
            completion,
            radar_ideas: self.radar_ideas.to_vec(),
            layout_epoch: self.layout_epoch,
        }
    }
}
