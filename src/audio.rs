//! Audio collaborator: turns game notifications into sound cues.

use crate::core::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Rotate,
    Clear,
}

/// Sound cue for a notification, if it has one
pub fn cue_for(event: &GameEvent) -> Option<Cue> {
    match event {
        GameEvent::RotateAccepted => Some(Cue::Rotate),
        GameEvent::RowsCleared { .. } => Some(Cue::Clear),
        GameEvent::Locked { .. } | GameEvent::GameOver => None,
    }
}

/// Something that can play a cue. Playback is fire-and-forget.
pub trait Audio {
    fn play(&mut self, cue: Cue);
}

/// Terminal audio: the bell for cleared rows, nothing for rotations.
pub struct TerminalBell<F: FnMut()> {
    enabled: bool,
    ring: F,
}

impl<F: FnMut()> TerminalBell<F> {
    pub fn new(enabled: bool, ring: F) -> Self {
        Self { enabled, ring }
    }
}

impl<F: FnMut()> Audio for TerminalBell<F> {
    fn play(&mut self, cue: Cue) {
        if self.enabled && cue == Cue::Clear {
            (self.ring)();
        }
    }
}
