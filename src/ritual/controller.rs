//! Screen controller
//!
//! Owns the session and drives every transition:
//!
//! ```text
//! Landing -> Steps (x6) -> CollectNumber -> CollectInfo -> Animating -> Reveal
//!    ^                                                                    |
//!    +---------------------------- restart -------------------------------+
//! ```
//!
//! `Animating` only ends through `tick`/`advance`, so the reveal can never
//! run ahead of the progress animation.

use super::decode::decode;
use super::profile::PersonalityProfile;
use super::progress::{AnimatorConfig, ProgressAnimator, ProgressFrame};
use super::state::{
    Action, EMAIL_FOLLOW_UP, RevealView, RitualError, RitualSession, STEPS, Screen,
};
use crate::consts::MIN_FINAL_NUMBER;
use crate::persistence::{
    self, LAST_RESULT_KEY, PersistedRecord, PersistenceStore, SAVED_NAME_KEY,
};
use crate::submit::{SubmissionForm, SubmitOutcome, Submitter};

pub struct ScreenController<S: PersistenceStore> {
    screen: Screen,
    session: RitualSession,
    store: S,
    submitter: Box<dyn Submitter>,
    animator_config: AnimatorConfig,
    animator: Option<ProgressAnimator>,
    reveal: Option<RevealView>,
    /// Id of the ritual currently on the reveal screen, if it was submitted
    revealed_ritual: Option<u64>,
    /// Last id handed out with a submission
    last_ritual_id: u64,
    returning: Option<PersistedRecord>,
}

impl<S: PersistenceStore> ScreenController<S> {
    /// Create a controller on the landing screen, pre-filling the user's
    /// name from a previous visit when one was saved.
    pub fn new(store: S, submitter: Box<dyn Submitter>) -> Self {
        Self::with_config(store, submitter, AnimatorConfig::default())
    }

    pub fn with_config(
        store: S,
        submitter: Box<dyn Submitter>,
        animator_config: AnimatorConfig,
    ) -> Self {
        let session = match persistence::load_saved_name(&store) {
            Some(name) => RitualSession::with_name(name),
            None => RitualSession::new(),
        };
        let returning = persistence::load_last_result(&store);
        if returning.is_some() {
            log::info!("Welcome back, seeker. Your last ritual was successful.");
        }

        Self {
            screen: Screen::Landing,
            session,
            store,
            submitter,
            animator_config,
            animator: None,
            reveal: None,
            revealed_ritual: None,
            last_ritual_id: 0,
            returning,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &RitualSession {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Result from a previous visit, read once at startup
    pub fn returning_record(&self) -> Option<&PersistedRecord> {
        self.returning.as_ref()
    }

    /// Current reveal; `Some` only on the reveal screen
    pub fn reveal(&self) -> Option<&RevealView> {
        self.reveal.as_ref()
    }

    /// Animation snapshot; `Some` only while animating
    pub fn progress(&self) -> Option<ProgressFrame> {
        self.animator.as_ref().map(ProgressAnimator::frame)
    }

    pub fn step_count(&self) -> usize {
        STEPS.len()
    }

    /// `"Step N"`, 1-based
    pub fn step_title(&self) -> String {
        format!("Step {}", self.session.current_step + 1)
    }

    pub fn current_instruction(&self) -> &'static str {
        STEPS[self.session.current_step]
    }

    /// Run a user action
    pub fn dispatch(&mut self, action: Action) -> Result<(), RitualError> {
        log::debug!("{} on {:?}", action.name(), self.screen);
        match action {
            Action::Start => self.start(),
            Action::NextStep => self.advance_step(),
            Action::SubmitNumber(raw) => self.submit_number(&raw),
            Action::SubmitInfo { name, email } => self.submit_info(&name, &email),
            Action::Restart => {
                self.restart();
                Ok(())
            }
        }
    }

    fn expect_screen(&self, expected: Screen, action: &'static str) -> Result<(), RitualError> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(RitualError::UnexpectedAction {
                action,
                screen: self.screen,
            })
        }
    }

    pub fn start(&mut self) -> Result<(), RitualError> {
        self.expect_screen(Screen::Landing, "start")?;
        self.session.current_step = 0;
        self.screen = Screen::Steps;
        Ok(())
    }

    pub fn advance_step(&mut self) -> Result<(), RitualError> {
        self.expect_screen(Screen::Steps, "next step")?;
        if self.session.current_step < STEPS.len() - 1 {
            self.session.current_step += 1;
        } else {
            self.screen = Screen::CollectNumber;
        }
        Ok(())
    }

    pub fn submit_number(&mut self, raw: &str) -> Result<(), RitualError> {
        self.expect_screen(Screen::CollectNumber, "submit number")?;
        let value = parse_leading_integer(raw)
            .filter(|n| *n >= MIN_FINAL_NUMBER)
            .ok_or(RitualError::InvalidInput)?;

        self.session.final_number = Some(value);
        self.screen = Screen::CollectInfo;
        Ok(())
    }

    /// Accept the user's details and start the progress animation
    pub fn submit_info(&mut self, name: &str, email: &str) -> Result<(), RitualError> {
        self.expect_screen(Screen::CollectInfo, "submit info")?;
        let name = name.trim();
        if name.is_empty() {
            return Err(RitualError::MissingName);
        }
        let email = email.trim();

        self.session.user_name = name.to_string();
        self.session.user_email = (!email.is_empty()).then(|| email.to_string());

        if let Err(e) = self.store.set(SAVED_NAME_KEY, name) {
            log::warn!("Could not remember name: {}", e);
        }

        self.animator = Some(ProgressAnimator::new(self.animator_config));
        self.screen = Screen::Animating;
        Ok(())
    }

    /// Back to the landing screen. Cancels a running animation; the pending
    /// reveal is dropped without decoding, persisting or submitting.
    pub fn restart(&mut self) {
        if self.animator.take().is_some() {
            log::info!("Ritual abandoned mid-animation");
        }
        self.session.reset_progress();
        self.reveal = None;
        self.revealed_ritual = None;
        self.screen = Screen::Landing;
    }

    /// One animation tick. Returns the frame while animating, `None` on any
    /// other screen. The tick that completes the animation also performs
    /// the reveal.
    pub fn tick(&mut self) -> Option<ProgressFrame> {
        let frame = self.animator.as_mut()?.tick();
        if frame.finished {
            self.complete();
        }
        Some(frame)
    }

    /// Feed elapsed wall-clock milliseconds to the animation
    pub fn advance(&mut self, elapsed_ms: f64) -> Option<ProgressFrame> {
        let frame = self.animator.as_mut()?.advance(elapsed_ms);
        if frame.finished {
            self.complete();
        }
        Some(frame)
    }

    fn complete(&mut self) {
        self.animator = None;

        let decoded = self.session.final_number.map(|n| (n, decode(n)));
        let view = match decoded {
            Some((final_number, Ok(date))) => {
                let profile = PersonalityProfile::for_date(&date);

                let record = PersistedRecord::new(&date, persistence::today_stamp());
                if let Err(e) = persistence::save_json(&mut self.store, LAST_RESULT_KEY, &record) {
                    log::warn!("Could not save result: {}", e);
                }

                self.last_ritual_id += 1;
                self.revealed_ritual = Some(self.last_ritual_id);
                self.submitter.submit(SubmissionForm {
                    ritual_id: self.last_ritual_id,
                    name: self.session.user_name.clone(),
                    email: self.session.user_email.clone(),
                    final_number,
                    date,
                });

                log::info!("Revealed {}", date);
                RevealView::Revealed {
                    date,
                    profile,
                    follow_up: None,
                }
            }
            Some((_, Err(e))) => {
                log::info!("Ritual clouded: {}", e);
                RevealView::Clouded
            }
            None => {
                log::warn!("Animation finished without a final number");
                RevealView::Clouded
            }
        };

        self.reveal = Some(view);
        self.screen = Screen::Reveal;
    }

    /// Outcome of the submission started at reveal time for `ritual_id`.
    /// Only affects the follow-up line; ignored unless that ritual's reveal
    /// is still showing.
    pub fn record_submission(&mut self, ritual_id: u64, outcome: SubmitOutcome) {
        match &outcome {
            SubmitOutcome::Recorded => {
                log::info!("Your energy has been recorded in the universe.")
            }
            SubmitOutcome::Rejected { status } => {
                log::error!("The universe was unable to record your energy (status {}).", status)
            }
            SubmitOutcome::Failed(e) => {
                log::error!("The ritual connection was interrupted: {}", e)
            }
        }

        if !outcome.is_success()
            || self.revealed_ritual != Some(ritual_id)
            || self.session.user_email.is_none()
        {
            return;
        }
        if let Some(RevealView::Revealed { follow_up, .. }) = self.reveal.as_mut() {
            *follow_up = Some(EMAIL_FOLLOW_UP);
        }
    }
}

/// Integer prefix of `raw`, ignoring leading whitespace: `"3521"`,
/// `" 3521 "` and `"3521abc"` all give 3521. `None` when there are no
/// leading digits. Digit runs too long for `i64` saturate.
pub fn parse_leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].bytes().try_fold(0_i64, |acc, b| {
        acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
    });
    Some(match (magnitude, negative) {
        (Some(value), false) => value,
        (Some(value), true) => -value,
        (None, false) => i64::MAX,
        (None, true) => i64::MIN,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::persistence::{MemoryStore, StorageError, load_last_result};
    use crate::ritual::profile::{ADVICE, TRAITS};
    use crate::ritual::progress::LOADING_MESSAGES;
    use crate::ritual::state::{CLOUDED_HEADLINE, CLOUDED_MESSAGE};

    #[derive(Clone, Default)]
    struct RecordingSubmitter {
        forms: Rc<RefCell<Vec<SubmissionForm>>>,
    }

    impl Submitter for RecordingSubmitter {
        fn submit(&self, form: SubmissionForm) {
            self.forms.borrow_mut().push(form);
        }
    }

    struct BrokenStore;

    impl PersistenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Backend("quota exceeded".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("quota exceeded".to_string()))
        }
    }

    fn controller() -> (ScreenController<MemoryStore>, RecordingSubmitter) {
        let submitter = RecordingSubmitter::default();
        let ctl = ScreenController::new(MemoryStore::new(), Box::new(submitter.clone()));
        (ctl, submitter)
    }

    fn walk_steps<S: PersistenceStore>(ctl: &mut ScreenController<S>) {
        ctl.start().unwrap();
        for _ in 0..STEPS.len() {
            ctl.advance_step().unwrap();
        }
        assert_eq!(ctl.screen(), Screen::CollectNumber);
    }

    fn run_animation<S: PersistenceStore>(ctl: &mut ScreenController<S>) -> u32 {
        let mut ticks = 0;
        while ctl.screen() == Screen::Animating {
            ctl.tick().unwrap();
            ticks += 1;
            assert!(ticks <= 80);
        }
        ticks
    }

    #[test]
    fn test_step_walkthrough() {
        let (mut ctl, _) = controller();
        assert_eq!(ctl.screen(), Screen::Landing);
        ctl.start().unwrap();
        assert_eq!(ctl.screen(), Screen::Steps);
        assert_eq!(ctl.step_title(), "Step 1");
        assert_eq!(ctl.current_instruction(), "Think about your birth day.");

        for expected in 1..STEPS.len() {
            ctl.advance_step().unwrap();
            assert_eq!(ctl.session().current_step, expected);
            assert_eq!(ctl.screen(), Screen::Steps);
        }
        assert_eq!(ctl.step_title(), "Step 6");
        assert_eq!(ctl.current_instruction(), "Finally, add 1765.");

        ctl.advance_step().unwrap();
        assert_eq!(ctl.screen(), Screen::CollectNumber);
    }

    #[test]
    fn test_number_threshold() {
        let (mut ctl, _) = controller();
        walk_steps(&mut ctl);

        assert_eq!(ctl.submit_number("2015"), Err(RitualError::InvalidInput));
        assert_eq!(ctl.screen(), Screen::CollectNumber);
        assert_eq!(ctl.session().final_number, None);

        ctl.submit_number("2016").unwrap();
        assert_eq!(ctl.screen(), Screen::CollectInfo);
        assert_eq!(ctl.session().final_number, Some(2016));
    }

    #[test]
    fn test_non_numeric_rejected() {
        let (mut ctl, _) = controller();
        walk_steps(&mut ctl);
        for raw in ["", "   ", "abc", "-", "x3521", "-99999999999999999999999"] {
            assert_eq!(ctl.submit_number(raw), Err(RitualError::InvalidInput), "{raw:?}");
        }
        assert_eq!(ctl.screen(), Screen::CollectNumber);
    }

    #[test]
    fn test_oversized_number_reaches_clouded_reveal() {
        let (mut ctl, submitter) = controller();
        walk_steps(&mut ctl);
        ctl.submit_number("99999999999999999999").unwrap();
        assert_eq!(ctl.screen(), Screen::CollectInfo);
        assert_eq!(ctl.session().final_number, Some(i64::MAX));

        ctl.submit_info("Ada", "").unwrap();
        run_animation(&mut ctl);
        assert_eq!(ctl.reveal(), Some(&RevealView::Clouded));
        assert!(!ctl.store().contains_key(LAST_RESULT_KEY));
        assert!(submitter.forms.borrow().is_empty());
    }

    #[test]
    fn test_missing_name_keeps_state() {
        let (mut ctl, _) = controller();
        walk_steps(&mut ctl);
        ctl.submit_number("3521").unwrap();

        assert_eq!(ctl.submit_info("   ", "a@b.test"), Err(RitualError::MissingName));
        assert_eq!(ctl.screen(), Screen::CollectInfo);
        assert_eq!(ctl.session().user_name, "");
        assert_eq!(ctl.session().user_email, None);
        assert!(!ctl.store().contains_key(SAVED_NAME_KEY));
    }

    #[test]
    fn test_full_ritual_reveals_mid_june() {
        let (mut ctl, submitter) = controller();
        walk_steps(&mut ctl);
        ctl.submit_number("3521").unwrap();
        ctl.submit_info("  Ada  ", "").unwrap();

        assert_eq!(ctl.screen(), Screen::Animating);
        assert_eq!(ctl.session().user_name, "Ada");
        assert_eq!(ctl.store().get(SAVED_NAME_KEY).unwrap().as_deref(), Some("Ada"));
        // Nothing revealed, persisted or submitted before the animation ends
        assert!(ctl.reveal().is_none());
        assert!(load_last_result(ctl.store()).is_none());
        assert!(submitter.forms.borrow().is_empty());

        assert_eq!(run_animation(&mut ctl), 80);
        assert_eq!(ctl.screen(), Screen::Reveal);
        assert!(ctl.progress().is_none());

        let reveal = ctl.reveal().unwrap();
        assert_eq!(reveal.headline(), "15 / Jun");
        assert_eq!(reveal.trait_text(), TRAITS[5]);
        assert_eq!(reveal.lucky_number(), Some(1));
        assert_eq!(reveal.advice_text(), Some(ADVICE[1]));

        let record = load_last_result(ctl.store()).unwrap();
        assert_eq!((record.day, record.month), (15, 6));

        let forms = submitter.forms.borrow();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].name, "Ada");
        assert_eq!(forms[0].email, None);
        assert_eq!(forms[0].final_number, 3521);
    }

    #[test]
    fn test_upper_boundary_reveal() {
        let (mut ctl, _) = controller();
        walk_steps(&mut ctl);
        ctl.submit_number("5127").unwrap();
        ctl.submit_info("Grace", "grace@example.test").unwrap();
        run_animation(&mut ctl);
        assert_eq!(ctl.reveal().unwrap().headline(), "31 / Dec");
    }

    #[test]
    fn test_clouded_reveal_writes_nothing() {
        let (mut ctl, submitter) = controller();
        walk_steps(&mut ctl);
        ctl.submit_number("2016").unwrap();
        ctl.submit_info("Ada", "").unwrap();
        run_animation(&mut ctl);

        assert_eq!(ctl.screen(), Screen::Reveal);
        let reveal = ctl.reveal().unwrap();
        assert_eq!(reveal, &RevealView::Clouded);
        assert_eq!(reveal.headline(), CLOUDED_HEADLINE);
        assert_eq!(reveal.trait_text(), CLOUDED_MESSAGE);
        assert_eq!(reveal.lucky_number(), None);
        assert!(!ctl.store().contains_key(LAST_RESULT_KEY));
        assert!(submitter.forms.borrow().is_empty());
    }

    #[test]
    fn test_progress_frames_while_animating() {
        let (mut ctl, _) = controller();
        walk_steps(&mut ctl);
        ctl.submit_number("3521").unwrap();
        ctl.submit_info("Ada", "").unwrap();

        let first = ctl.progress().unwrap();
        assert_eq!(first.progress, 0.0);
        assert_eq!(first.message, LOADING_MESSAGES[0]);

        let frame = ctl.tick().unwrap();
        assert!((frame.progress - 1.25).abs() < 1e-4);
        assert!(!frame.finished);
    }

    #[test]
    fn test_advance_drives_reveal() {
        let (mut ctl, _) = controller();
        walk_steps(&mut ctl);
        ctl.submit_number("3521").unwrap();
        ctl.submit_info("Ada", "").unwrap();

        let mut frames = 0;
        while ctl.screen() == Screen::Animating {
            ctl.advance(16.7).unwrap();
            frames += 1;
            assert!(frames < 1_000);
        }
        assert_eq!(ctl.reveal().unwrap().headline(), "15 / Jun");
        assert!(ctl.advance(16.7).is_none());
    }

    #[test]
    fn test_restart_cancels_animation() {
        let (mut ctl, submitter) = controller();
        walk_steps(&mut ctl);
        ctl.submit_number("3521").unwrap();
        ctl.submit_info("Ada", "ada@example.test").unwrap();
        for _ in 0..40 {
            ctl.tick();
        }

        ctl.restart();
        assert_eq!(ctl.screen(), Screen::Landing);
        assert!(ctl.tick().is_none());
        assert!(ctl.reveal().is_none());
        assert!(!ctl.store().contains_key(LAST_RESULT_KEY));
        assert!(submitter.forms.borrow().is_empty());
    }

    #[test]
    fn test_restart_keeps_identity() {
        let (mut ctl, _) = controller();
        walk_steps(&mut ctl);
        ctl.submit_number("3521").unwrap();
        ctl.submit_info("Ada", "ada@example.test").unwrap();
        run_animation(&mut ctl);

        ctl.dispatch(Action::Restart).unwrap();
        assert_eq!(ctl.screen(), Screen::Landing);
        assert_eq!(ctl.session().current_step, 0);
        assert_eq!(ctl.session().final_number, None);
        assert_eq!(ctl.session().user_name, "Ada");
        assert_eq!(ctl.session().user_email.as_deref(), Some("ada@example.test"));
        assert!(ctl.reveal().is_none());
    }

    #[test]
    fn test_returning_user_prefilled() {
        let mut store = MemoryStore::new();
        store.set(SAVED_NAME_KEY, "Ada").unwrap();
        store
            .set(LAST_RESULT_KEY, r#"{"day":15,"month":6,"date":"6/1/2026"}"#)
            .unwrap();

        let ctl = ScreenController::new(store, Box::new(RecordingSubmitter::default()));
        assert_eq!(ctl.session().user_name, "Ada");
        assert_eq!(ctl.returning_record().map(|r| r.day), Some(15));
    }

    #[test]
    fn test_storage_failure_never_blocks() {
        let submitter = RecordingSubmitter::default();
        let mut ctl = ScreenController::new(BrokenStore, Box::new(submitter.clone()));
        assert!(ctl.returning_record().is_none());
        assert_eq!(ctl.session().user_name, "");

        walk_steps(&mut ctl);
        ctl.submit_number("3521").unwrap();
        ctl.submit_info("Ada", "").unwrap();
        run_animation(&mut ctl);

        assert_eq!(ctl.reveal().unwrap().headline(), "15 / Jun");
        assert_eq!(submitter.forms.borrow().len(), 1);
    }

    #[test]
    fn test_wrong_screen_actions_rejected() {
        let (mut ctl, _) = controller();
        assert_eq!(
            ctl.advance_step(),
            Err(RitualError::UnexpectedAction {
                action: "next step",
                screen: Screen::Landing
            })
        );
        assert!(ctl.submit_number("3521").is_err());
        assert!(ctl.submit_info("Ada", "").is_err());
        assert_eq!(ctl.screen(), Screen::Landing);

        ctl.start().unwrap();
        assert!(ctl.start().is_err());
        assert_eq!(ctl.screen(), Screen::Steps);
        assert!(ctl.tick().is_none());
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let (mut ctl, _) = controller();
        ctl.dispatch(Action::Start).unwrap();
        for _ in 0..STEPS.len() {
            ctl.dispatch(Action::NextStep).unwrap();
        }
        ctl.dispatch(Action::SubmitNumber("3521".to_string())).unwrap();
        ctl.dispatch(Action::SubmitInfo {
            name: "Ada".to_string(),
            email: String::new(),
        })
        .unwrap();
        assert_eq!(ctl.screen(), Screen::Animating);
    }

    /// Walk a full ritual and return the id of the submission it sent
    fn reveal_ritual(
        ctl: &mut ScreenController<MemoryStore>,
        submitter: &RecordingSubmitter,
        email: &str,
    ) -> u64 {
        walk_steps(ctl);
        ctl.submit_number("3521").unwrap();
        ctl.submit_info("Ada", email).unwrap();
        run_animation(ctl);
        submitter.forms.borrow().last().unwrap().ritual_id
    }

    #[test]
    fn test_submission_follow_up_needs_email() {
        let (mut ctl, submitter) = controller();
        let id = reveal_ritual(&mut ctl, &submitter, "");

        ctl.record_submission(id, SubmitOutcome::Recorded);
        assert_eq!(ctl.reveal().unwrap().trait_text(), TRAITS[5]);
    }

    #[test]
    fn test_submission_follow_up_appended() {
        let (mut ctl, submitter) = controller();
        let id = reveal_ritual(&mut ctl, &submitter, "ada@example.test");

        ctl.record_submission(id, SubmitOutcome::Failed("offline".to_string()));
        assert_eq!(ctl.reveal().unwrap().trait_text(), TRAITS[5]);

        ctl.record_submission(id, SubmitOutcome::Rejected { status: 500 });
        assert_eq!(ctl.reveal().unwrap().trait_text(), TRAITS[5]);

        ctl.record_submission(id, SubmitOutcome::Recorded);
        assert_eq!(
            ctl.reveal().unwrap().trait_text(),
            format!("{}\n\n{}", TRAITS[5], EMAIL_FOLLOW_UP)
        );
    }

    #[test]
    fn test_stale_submission_outcome_ignored() {
        let (mut ctl, submitter) = controller();
        let first = reveal_ritual(&mut ctl, &submitter, "ada@example.test");
        ctl.restart();
        let second = reveal_ritual(&mut ctl, &submitter, "ada@example.test");
        assert_ne!(first, second);

        // The first ritual's fetch settles late; it must not touch the second reveal
        ctl.record_submission(first, SubmitOutcome::Recorded);
        assert_eq!(ctl.reveal().unwrap().trait_text(), TRAITS[5]);

        ctl.record_submission(second, SubmitOutcome::Recorded);
        assert!(ctl.reveal().unwrap().trait_text().ends_with(EMAIL_FOLLOW_UP));

        // Outcomes arriving after a restart are dropped too
        ctl.restart();
        ctl.record_submission(second, SubmitOutcome::Recorded);
        assert!(ctl.reveal().is_none());
    }

    #[test]
    fn test_parse_leading_integer() {
        assert_eq!(parse_leading_integer("3521"), Some(3521));
        assert_eq!(parse_leading_integer("  3521  "), Some(3521));
        assert_eq!(parse_leading_integer("3521abc"), Some(3521));
        assert_eq!(parse_leading_integer("12.9"), Some(12));
        assert_eq!(parse_leading_integer("+7"), Some(7));
        assert_eq!(parse_leading_integer("-7"), Some(-7));
        assert_eq!(parse_leading_integer("abc"), None);
        assert_eq!(parse_leading_integer("+"), None);
        assert_eq!(parse_leading_integer(""), None);
        assert_eq!(parse_leading_integer("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_integer("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_leading_integer("9223372036854775807"), Some(i64::MAX));
    }
}
