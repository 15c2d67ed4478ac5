use crate::app::event::SequenceId;
use crate::config::AppConfig;
use crate::form::budget::BudgetSlider;
use crate::form::field::TextField;
use crate::form::submission::Submission;
use crate::i18n;
use std::time::Instant;
use tracing::{debug, warn};

/// Where a submission run currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Valid,
    Submitted,
    Failed(String),
}

impl Phase {
    /// A new run may only start when nothing is in flight.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, Phase::Idle | Phase::Failed(_))
    }

    /// Forward-only transitions. `Failed` may start over with a fresh run.
    pub fn can_advance_to(&self, next: &Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Idle, Phase::Loading)
                | (Phase::Failed(_), Phase::Loading)
                | (Phase::Loading, Phase::Valid)
                | (Phase::Valid, Phase::Submitted)
                | (Phase::Valid, Phase::Failed(_))
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Valid => "valid",
            Phase::Submitted => "submitted",
            Phase::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    Name,
    Company,
    Contact,
    About,
    Budget,
    Send,
}

impl FocusField {
    pub fn next(self) -> Self {
        match self {
            FocusField::Name => FocusField::Company,
            FocusField::Company => FocusField::Contact,
            FocusField::Contact => FocusField::About,
            FocusField::About => FocusField::Budget,
            FocusField::Budget => FocusField::Send,
            FocusField::Send => FocusField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusField::Name => FocusField::Send,
            FocusField::Company => FocusField::Name,
            FocusField::Contact => FocusField::Company,
            FocusField::About => FocusField::Contact,
            FocusField::Budget => FocusField::About,
            FocusField::Send => FocusField::Budget,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FocusField::Name => "NAME",
            FocusField::Company => "COMPANY",
            FocusField::Contact => "EMAIL",
            FocusField::About => "PROJECT",
            FocusField::Budget => "BUDGET",
            FocusField::Send => "SEND",
        }
    }
}

/// Which panel is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Form,
    ThankYou,
}

#[derive(Debug)]
pub struct FormState {
    pub name: TextField,
    pub company: TextField,
    pub contact: TextField,
    pub about: TextField,
    pub budget: BudgetSlider,
    pub contact_error: bool,
    pub phase: Phase,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: TextField::new(),
            company: TextField::new(),
            contact: TextField::new(),
            about: TextField::multiline(),
            budget: BudgetSlider::default(),
            contact_error: false,
            phase: Phase::Idle,
        }
    }

    pub fn field(&self, focus: FocusField) -> Option<&TextField> {
        match focus {
            FocusField::Name => Some(&self.name),
            FocusField::Company => Some(&self.company),
            FocusField::Contact => Some(&self.contact),
            FocusField::About => Some(&self.about),
            FocusField::Budget | FocusField::Send => None,
        }
    }

    pub fn field_mut(&mut self, focus: FocusField) -> Option<&mut TextField> {
        match focus {
            FocusField::Name => Some(&mut self.name),
            FocusField::Company => Some(&mut self.company),
            FocusField::Contact => Some(&mut self.contact),
            FocusField::About => Some(&mut self.about),
            FocusField::Budget | FocusField::Send => None,
        }
    }

    pub fn snapshot(&self) -> Submission {
        Submission {
            name: self.name.text.clone(),
            company: self.company.text.clone(),
            contact: self.contact.text.clone(),
            about: self.about.text.clone(),
            budget: self.budget.value(),
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub form: FormState,
    pub focus: FocusField,
    pub sequence: SequenceId,
    /// Start of the current panel fade (mount, or the switch to the thank-you panel).
    pub transition_started: Option<Instant>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            form: FormState::new(),
            focus: FocusField::Name,
            sequence: 0,
            transition_started: Some(Instant::now()),
            tick_count: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    pub fn t<'a>(&self, namespace: &str, key: &'a str) -> &'a str {
        i18n::translate(self.config.language, namespace, key)
    }

    /// Start a new submission run and return its id.
    pub fn begin_sequence(&mut self) -> SequenceId {
        self.sequence += 1;
        self.sequence
    }

    pub fn is_current(&self, sequence: SequenceId) -> bool {
        sequence == self.sequence
    }

    /// Move to `next` if the transition is allowed. Returns whether it happened.
    pub fn set_phase(&mut self, next: Phase) -> bool {
        if !self.form.phase.can_advance_to(&next) {
            warn!(
                from = self.form.phase.name(),
                to = next.name(),
                "rejected phase transition"
            );
            return false;
        }
        debug!(from = self.form.phase.name(), to = next.name(), sequence = self.sequence, "phase");
        self.form.phase = next;
        self.dirty = true;
        true
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        self.focus = if forward {
            self.focus.next()
        } else {
            self.focus.prev()
        };
        self.dirty = true;
    }

    /// Which panel to draw at `now`, and whether it is mid-fade.
    ///
    /// The form fades out completely before the thank-you panel fades in.
    pub fn presentation(&self, now: Instant) -> (Scene, bool) {
        let fade = self.config.timing.fade();
        let elapsed = self
            .transition_started
            .map(|t| now.saturating_duration_since(t));
        match (&self.form.phase, elapsed) {
            (Phase::Submitted, Some(e)) if e < fade => (Scene::Form, true),
            (Phase::Submitted, Some(e)) => (Scene::ThankYou, e < fade * 2),
            (Phase::Submitted, None) => (Scene::ThankYou, false),
            (_, Some(e)) => (Scene::Form, e < fade),
            (_, None) => (Scene::Form, false),
        }
    }

    /// Whether anything on screen changes from tick to tick.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.form.phase == Phase::Loading || self.presentation(now).1
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let namespace = if self.form.phase == Phase::Submitted {
            "thankyou"
        } else {
            "form"
        };
        self.t(namespace, "key_hints").to_string()
    }
}
