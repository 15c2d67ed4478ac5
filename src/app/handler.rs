use crate::app::action::Action;
use crate::app::event::{AppEvent, SequenceId};
use crate::app::state::*;
use crate::form::field::TextField;
use crate::form::validate;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;
use tracing::{debug, info};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::LoadingElapsed { sequence } => handle_loading_elapsed(state, sequence),
        AppEvent::SubmissionSent { sequence } => {
            if stale(state, sequence, &Phase::Valid) {
                return vec![];
            }
            if state.set_phase(Phase::Submitted) {
                state.transition_started = Some(Instant::now());
                state.status_message = None;
            }
            vec![]
        }
        AppEvent::SubmissionFailed { sequence, error } => {
            if stale(state, sequence, &Phase::Valid) {
                return vec![];
            }
            let summary = state.t("form", "submit_failed");
            let message = format!("{}: {}", summary, error);
            if state.set_phase(Phase::Failed(error)) {
                state.status_message = Some(message);
            }
            vec![]
        }
        AppEvent::Tick => handle_tick(state),
    }
}

/// Timer and delivery results only count for the run that is still going
/// and the phase that is waiting for them.
fn stale(state: &AppState, sequence: SequenceId, expected: &Phase) -> bool {
    if !state.is_current(sequence) || &state.form.phase != expected {
        debug!(
            sequence,
            current = state.sequence,
            phase = state.form.phase.name(),
            "dropping stale sequencer event"
        );
        return true;
    }
    false
}

fn handle_loading_elapsed(state: &mut AppState, sequence: SequenceId) -> Vec<Action> {
    if stale(state, sequence, &Phase::Loading) || !state.set_phase(Phase::Valid) {
        return vec![];
    }
    // Values are frozen here; edits made while the check mark shows are not sent.
    let submission = state.form.snapshot();
    vec![Action::DeliverSubmission {
        sequence,
        delay: state.config.timing.submit_delay(),
        submission,
    }]
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    if state.is_animating(Instant::now()) {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Paste(text) => {
            edit_focused(state, |field| field.insert_str(&text));
            vec![]
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keybindings
    if (ctrl && key.code == KeyCode::Char('c')) || key.code == KeyCode::Esc {
        return vec![Action::Quit];
    }

    if state.form.phase == Phase::Submitted {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('q') => vec![Action::Quit],
            _ => vec![],
        };
    }

    if ctrl && key.code == KeyCode::Char('s') {
        return submit(state);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.cycle_focus(true);
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.cycle_focus(false);
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusField::Send => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => submit(state),
            _ => vec![],
        },
        FocusField::Budget => {
            handle_budget_key(state, key);
            vec![]
        }
        _ => {
            handle_text_key(state, key);
            vec![]
        }
    }
}

fn handle_budget_key(state: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        state.cycle_focus(true);
        return;
    }
    let budget = &mut state.form.budget;
    match key.code {
        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => budget.step_by(-1),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('l') => budget.step_by(1),
        KeyCode::PageDown => budget.step_by(-10),
        KeyCode::PageUp => budget.step_by(10),
        KeyCode::Home => budget.to_min(),
        KeyCode::End => budget.to_max(),
        _ => {}
    }
}

fn handle_text_key(state: &mut AppState, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt_gr = key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('w') if ctrl => edit_focused(state, |f| f.delete_word_back()),
        KeyCode::Char('u') if ctrl => edit_focused(state, |f| f.set_text("")),
        // AltGr arrives as Ctrl+Alt on Windows.
        KeyCode::Char(c) if !ctrl || alt_gr => edit_focused(state, |f| f.insert_char(c)),
        KeyCode::Backspace => edit_focused(state, |f| f.delete_back()),
        KeyCode::Delete => edit_focused(state, |f| f.delete_forward()),
        KeyCode::Left => edit_focused(state, |f| f.move_left()),
        KeyCode::Right => edit_focused(state, |f| f.move_right()),
        KeyCode::Home => edit_focused(state, |f| f.move_home()),
        KeyCode::End => edit_focused(state, |f| f.move_end()),
        KeyCode::Enter if state.focus == FocusField::About => {
            edit_focused(state, |f| f.insert_char('\n'))
        }
        KeyCode::Enter => state.cycle_focus(true),
        _ => {}
    }
}

/// Apply `edit` to the focused text field. Any change to the contact value
/// clears a pending contact error, whether or not the new value is valid.
fn edit_focused(state: &mut AppState, edit: impl FnOnce(&mut TextField)) {
    let focus = state.focus;
    let Some(field) = state.form.field_mut(focus) else {
        return;
    };
    let old = field.text.clone();
    edit(&mut *field);
    let changed = field.text != old;
    if changed && focus == FocusField::Contact && state.form.contact_error {
        debug!("contact edited, clearing error");
        state.form.contact_error = false;
    }
    state.dirty = true;
}

fn submit(state: &mut AppState) -> Vec<Action> {
    if !state.form.phase.accepts_submit() {
        debug!(phase = state.form.phase.name(), "submit ignored, run in progress");
        return vec![];
    }

    if !validate::is_valid_contact(state.form.contact.value()) {
        info!("contact failed validation");
        state.form.contact_error = true;
        state.focus = FocusField::Contact;
        return vec![];
    }

    let sequence = state.begin_sequence();
    state.form.contact_error = false;
    state.status_message = None;
    if !state.set_phase(Phase::Loading) {
        return vec![];
    }
    info!(sequence, budget = state.form.budget.value(), "submission started");
    vec![Action::ArmLoadingTimer {
        sequence,
        delay: state.config.timing.loading(),
    }]
}
