use bevy::input::keyboard::Key;
use bevy::prelude::*;
use nalgebra::Vector2;
use std::collections::HashSet;

/// Normalise a raw key identifier.
///
/// Identifiers are lower-cased and a few platform spellings are folded onto a
/// single name, so `"ArrowUp"`, `"arrowup"` and `"up"` all become `"up"`.
pub fn normalize_key(key: &str) -> String {
    let key = key.to_lowercase();
    match key.as_str() {
        "arrowup" => "up".to_string(),
        "arrowdown" => "down".to_string(),
        "arrowleft" => "left".to_string(),
        "arrowright" => "right".to_string(),
        "space" | "spacebar" => " ".to_string(),
        "ctrl" => "control".to_string(),
        _ => key,
    }
}

/// Identifier for a bevy logical key, or `None` for keys the controller never binds.
pub fn key_id(key: &Key) -> Option<String> {
    let id = match key {
        Key::Character(c) => return Some(normalize_key(c.as_str())),
        Key::Space => " ",
        Key::Shift => "shift",
        Key::Control => "control",
        Key::ArrowUp => "up",
        Key::ArrowDown => "down",
        Key::ArrowLeft => "left",
        Key::ArrowRight => "right",
        Key::Escape => "escape",
        Key::Enter => "enter",
        Key::Tab => "tab",
        _ => return None,
    };
    Some(id.to_string())
}

/// Result of a key-down event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Normalised identifier.
    pub key: String,
    /// True when the key was not already held (a fresh down-edge, not a repeat).
    pub first_press: bool,
}

/// Live record of what the pilot is doing, fed by event callbacks and
/// sampled once per tick.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    held_keys: HashSet<String>,
    mouse_delta: Vector2<f64>,
    cursor_captured: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key_down(&mut self, key: &str) -> KeyPress {
        let key = normalize_key(key);
        let first_press = self.held_keys.insert(key.clone());
        KeyPress { key, first_press }
    }

    /// Returns whether the key was held.
    pub fn on_key_up(&mut self, key: &str) -> bool {
        self.held_keys.remove(&normalize_key(key))
    }

    /// Accumulate relative motion. Ignored unless the cursor is captured.
    pub fn on_mouse_motion(&mut self, dx: f64, dy: f64) {
        if !self.cursor_captured || !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.mouse_delta += Vector2::new(dx, dy);
    }

    pub fn on_capture_change(&mut self, captured: bool) {
        if self.cursor_captured != captured {
            debug!("Cursor capture changed: {}", captured);
        }
        self.cursor_captured = captured;
        if !captured {
            self.mouse_delta = Vector2::zeros();
        }
    }

    /// Gate a wheel delta on capture. Returns the delta to forward to the
    /// throttle, or `None` while the cursor is free.
    pub fn on_wheel(&self, delta_y: f64) -> Option<f64> {
        (self.cursor_captured && delta_y.is_finite()).then_some(delta_y)
    }

    pub fn on_focus_lost(&mut self) {
        if !self.held_keys.is_empty() {
            debug!("Focus lost, releasing {} held keys", self.held_keys.len());
        }
        self.held_keys.clear();
    }

    /// Return the accumulated mouse motion and reset it.
    pub fn consume_mouse_delta(&mut self) -> Vector2<f64> {
        std::mem::replace(&mut self.mouse_delta, Vector2::zeros())
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held_keys.contains(key)
    }

    pub fn any_held(&self, keys: &[&str]) -> bool {
        keys.iter().any(|key| self.is_held(key))
    }

    pub fn held_count(&self) -> usize {
        self.held_keys.len()
    }

    pub fn is_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Drop every held key, pending delta and the capture flag.
    pub fn clear(&mut self) {
        self.held_keys.clear();
        self.mouse_delta = Vector2::zeros();
        self.cursor_captured = false;
    }
}
