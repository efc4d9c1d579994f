//! View gate: one pure function from session state to a region plan
//!
//! Instead of re-deriving visibility conditions at every render site, a
//! single `RegionPlan::decide` call enumerates what is active this pass.
//! The dispatcher consumes the plan in the fixed order upload prompt →
//! unsubmitted warning → file list → chat/inspector, so warnings always
//! precede content.

use docchat_domain::{SessionState, ViewOption};

/// A renderable UI area, in fixed evaluation/render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    UploadPrompt,
    UnsubmittedWarning,
    FileList,
    Chat,
    Inspector,
}

/// Sub-regions of the chat view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatRegion {
    /// Transcript renders iff the history is non-empty: an existing
    /// conversation stays readable before readiness.
    pub transcript: bool,
    /// Input renders iff the session is ready; new questions cannot be
    /// submitted before ingestion completes.
    pub input: bool,
}

/// The main region. The enum makes "both" and "neither" unrepresentable:
/// whichever view is selected occupies the slot, and the readiness gate is
/// expressed inside the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainRegion {
    Chat(ChatRegion),
    /// `active == false` means the inspector is selected but gated off;
    /// only a locked placeholder renders. There is no degraded read-only
    /// inspector.
    Inspector { active: bool },
}

/// Which regions are active for the current pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPlan {
    pub upload_prompt: bool,
    pub unsubmitted_warning: bool,
    pub file_list: bool,
    pub main: MainRegion,
}

impl RegionPlan {
    /// Derive the plan from a state snapshot. Pure: two calls on an
    /// unmodified snapshot yield identical plans.
    pub fn decide(state: &SessionState) -> Self {
        let main = match state.view() {
            ViewOption::Chat => MainRegion::Chat(ChatRegion {
                transcript: !state.history().is_empty(),
                input: state.chat_ready(),
            }),
            ViewOption::Inspector => MainRegion::Inspector {
                active: state.chat_ready(),
            },
        };

        Self {
            upload_prompt: state.staged_files().is_empty(),
            unsubmitted_warning: state.unsubmitted_files(),
            // Both checks required: readiness and the document list can
            // momentarily disagree while ingestion results land.
            file_list: state.chat_ready() && !state.documents().is_empty(),
            main,
        }
    }

    pub fn chat_input_active(&self) -> bool {
        matches!(self.main, MainRegion::Chat(ChatRegion { input: true, .. }))
    }

    pub fn chat_transcript_active(&self) -> bool {
        matches!(
            self.main,
            MainRegion::Chat(ChatRegion {
                transcript: true,
                ..
            })
        )
    }

    pub fn inspector_active(&self) -> bool {
        matches!(self.main, MainRegion::Inspector { active: true })
    }

    /// Active regions in fixed render order.
    pub fn active_regions(&self) -> Vec<Region> {
        let mut regions = Vec::new();
        if self.upload_prompt {
            regions.push(Region::UploadPrompt);
        }
        if self.unsubmitted_warning {
            regions.push(Region::UnsubmittedWarning);
        }
        if self.file_list {
            regions.push(Region::FileList);
        }
        match self.main {
            MainRegion::Chat(_) => regions.push(Region::Chat),
            MainRegion::Inspector { active: true } => regions.push(Region::Inspector),
            MainRegion::Inspector { active: false } => {}
        }
        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docchat_domain::{ChatMessage, DocumentInfo, StagedFile};

    fn ingested(state: &mut SessionState, n: usize) {
        let docs = (0..n)
            .map(|i| DocumentInfo::new(format!("doc-{i}.pdf"), 8))
            .collect();
        state.complete_ingestion(docs, "openai").unwrap();
    }

    #[test]
    fn test_scenario_a_fresh_session() {
        let state = SessionState::new();
        let plan = RegionPlan::decide(&state);

        assert!(plan.upload_prompt);
        assert!(!plan.unsubmitted_warning);
        assert!(!plan.file_list);
        assert_eq!(
            plan.main,
            MainRegion::Chat(ChatRegion {
                transcript: false,
                input: false,
            })
        );
        assert_eq!(plan.active_regions(), vec![Region::UploadPrompt, Region::Chat]);
    }

    #[test]
    fn test_scenario_b_staged_but_unsubmitted() {
        let mut state = SessionState::new();
        state.stage_file(StagedFile::new("/docs/a.pdf"));
        state.stage_file(StagedFile::new("/docs/b.pdf"));

        let plan = RegionPlan::decide(&state);
        assert!(!plan.upload_prompt);
        assert!(plan.unsubmitted_warning);
        assert!(!plan.chat_input_active());
    }

    #[test]
    fn test_scenario_c_after_ingestion() {
        let mut state = SessionState::new();
        state.stage_file(StagedFile::new("/docs/a.pdf"));
        state.stage_file(StagedFile::new("/docs/b.pdf"));
        ingested(&mut state, 2);

        let plan = RegionPlan::decide(&state);
        assert!(plan.file_list);
        assert!(plan.chat_input_active());
        assert!(!plan.unsubmitted_warning);
        // Staging generation rotated, so the prompt to upload returns
        assert!(plan.upload_prompt);
    }

    #[test]
    fn test_scenario_d_inspector_before_readiness() {
        let mut state = SessionState::new();
        state.set_view(ViewOption::Inspector);
        let plan = RegionPlan::decide(&state);
        assert!(!plan.inspector_active());
        assert!(!plan.active_regions().contains(&Region::Inspector));
    }

    #[test]
    fn test_upload_prompt_independent_of_other_fields() {
        let mut state = SessionState::new();
        state.push_message(ChatMessage::user("hi"));
        state.set_view(ViewOption::Inspector);
        assert!(RegionPlan::decide(&state).upload_prompt);

        state.stage_file(StagedFile::new("/docs/a.pdf"));
        assert!(!RegionPlan::decide(&state).upload_prompt);
    }

    #[test]
    fn test_warning_independent_of_readiness_and_view() {
        let mut state = SessionState::new();
        ingested(&mut state, 1);
        state.stage_file(StagedFile::new("/docs/more.pdf"));
        state.set_view(ViewOption::Inspector);

        let plan = RegionPlan::decide(&state);
        assert!(plan.unsubmitted_warning);
        assert!(plan.inspector_active());
    }

    #[test]
    fn test_file_list_requires_both_checks() {
        // Race window: documents listed but readiness not yet flipped
        let mut state = SessionState::new();
        ingested(&mut state, 2);
        state.invalidate_readiness();
        assert!(!state.documents().is_empty());

        let plan = RegionPlan::decide(&state);
        assert!(!plan.file_list);
    }

    #[test]
    fn test_chat_and_inspector_never_both_active() {
        let mut state = SessionState::new();
        ingested(&mut state, 1);

        for view in [ViewOption::Chat, ViewOption::Inspector] {
            state.set_view(view);
            let plan = RegionPlan::decide(&state);
            assert!(!(plan.chat_input_active() && plan.inspector_active()));
            let regions = plan.active_regions();
            assert!(
                !(regions.contains(&Region::Chat) && regions.contains(&Region::Inspector))
            );
        }
    }

    #[test]
    fn test_transcript_readable_before_readiness() {
        let mut state = SessionState::new();
        state.push_message(ChatMessage::user("earlier question"));
        let plan = RegionPlan::decide(&state);
        assert!(plan.chat_transcript_active());
        assert!(!plan.chat_input_active());
    }

    #[test]
    fn test_decide_is_idempotent() {
        let mut state = SessionState::new();
        state.stage_file(StagedFile::new("/docs/a.pdf"));
        ingested(&mut state, 1);
        state.push_message(ChatMessage::user("q"));

        let first = RegionPlan::decide(&state);
        let second = RegionPlan::decide(&state);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_region_order() {
        let mut state = SessionState::new();
        ingested(&mut state, 1);
        state.stage_file(StagedFile::new("/docs/next.pdf"));
        state.push_message(ChatMessage::user("q"));
        // Everything active at once: prompt is off (staged non-empty) but
        // warning, file list, and chat are on.
        let regions = RegionPlan::decide(&state).active_regions();
        assert_eq!(
            regions,
            vec![Region::UnsubmittedWarning, Region::FileList, Region::Chat]
        );
    }
}
