//! Events queued for the JS side (UI text, audio, effects)
//!
//! The core never touches the DOM. It queues events during a frame and the
//! page drains them as JSON after calling `frame()`.

use serde::Serialize;

use super::feedback::{FeedbackTier, SoundCue};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    #[serde(rename_all = "camelCase")]
    LevelReady {
        pins: u32,
        pin_model: bool,
        ball_model: bool,
    },
    #[serde(rename_all = "camelCase")]
    AimChanged { angle: f32 },
    #[serde(rename_all = "camelCase")]
    BallThrown {
        angle: f32,
        impulse: [f32; 3],
        sound: SoundCue,
    },
    #[serde(rename_all = "camelCase")]
    OutcomeReady {
        score: u32,
        tier: FeedbackTier,
        message: String,
        color: String,
        sound: SoundCue,
        speech: String,
        fallen: Vec<bool>,
    },
    LevelReset,
}

/// Per-frame event buffer
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn send(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drain as a JSON array
    pub fn drain_json(&mut self) -> String {
        let events = self.drain();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_json_tags_events_and_empties_queue() {
        let mut queue = EventQueue::new();
        queue.send(GameEvent::AimChanged { angle: 0.5 });
        queue.send(GameEvent::LevelReset);

        let json = queue.drain_json();
        assert!(json.contains(r#""type":"aimChanged""#), "{}", json);
        assert!(json.contains(r#""type":"levelReset""#), "{}", json);
        assert!(queue.is_empty());
        assert_eq!(queue.drain_json(), "[]");
    }

    #[test]
    fn outcome_fields_are_camel_case() {
        let mut queue = EventQueue::new();
        queue.send(GameEvent::LevelReady { pins: 10, pin_model: true, ball_model: false });
        let json = queue.drain_json();
        assert!(json.contains(r#""pinModel":true"#), "{}", json);
        assert!(json.contains(r#""ballModel":false"#), "{}", json);
    }
}
