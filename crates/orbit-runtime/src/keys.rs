//! Keyboard state and action bindings

use orbit_core::{OrbitError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use winit::keyboard::KeyCode;

/// Movement intents the player can bind keys to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
    Run,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Forward,
        Action::Backward,
        Action::Left,
        Action::Right,
        Action::Jump,
        Action::Run,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::Forward => "forward",
            Action::Backward => "backward",
            Action::Left => "left",
            Action::Right => "right",
            Action::Jump => "jump",
            Action::Run => "run",
        }
    }
}

/// Map a browser-style key name (`"w"`, `"arrowup"`, `" "`, `"shift"`) to key codes.
///
/// Names are case-insensitive. Modifier names cover both the left and right key.
pub fn parse_key(name: &str) -> Result<Vec<KeyCode>> {
    let lower = name.to_lowercase();
    let codes = match lower.as_str() {
        " " | "space" => vec![KeyCode::Space],
        "shift" => vec![KeyCode::ShiftLeft, KeyCode::ShiftRight],
        "control" | "ctrl" => vec![KeyCode::ControlLeft, KeyCode::ControlRight],
        "alt" => vec![KeyCode::AltLeft, KeyCode::AltRight],
        "arrowup" => vec![KeyCode::ArrowUp],
        "arrowdown" => vec![KeyCode::ArrowDown],
        "arrowleft" => vec![KeyCode::ArrowLeft],
        "arrowright" => vec![KeyCode::ArrowRight],
        "enter" => vec![KeyCode::Enter],
        "escape" => vec![KeyCode::Escape],
        "tab" => vec![KeyCode::Tab],
        other => match letter_key(other) {
            Some(code) => vec![code],
            None => return Err(OrbitError::UnknownKey(name.to_string())),
        },
    };
    Ok(codes)
}

fn letter_key(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let code = match c {
        'a' => KeyCode::KeyA,
        'b' => KeyCode::KeyB,
        'c' => KeyCode::KeyC,
        'd' => KeyCode::KeyD,
        'e' => KeyCode::KeyE,
        'f' => KeyCode::KeyF,
        'g' => KeyCode::KeyG,
        'h' => KeyCode::KeyH,
        'i' => KeyCode::KeyI,
        'j' => KeyCode::KeyJ,
        'k' => KeyCode::KeyK,
        'l' => KeyCode::KeyL,
        'm' => KeyCode::KeyM,
        'n' => KeyCode::KeyN,
        'o' => KeyCode::KeyO,
        'p' => KeyCode::KeyP,
        'q' => KeyCode::KeyQ,
        'r' => KeyCode::KeyR,
        's' => KeyCode::KeyS,
        't' => KeyCode::KeyT,
        'u' => KeyCode::KeyU,
        'v' => KeyCode::KeyV,
        'w' => KeyCode::KeyW,
        'x' => KeyCode::KeyX,
        'y' => KeyCode::KeyY,
        'z' => KeyCode::KeyZ,
        '0' => KeyCode::Digit0,
        '1' => KeyCode::Digit1,
        '2' => KeyCode::Digit2,
        '3' => KeyCode::Digit3,
        '4' => KeyCode::Digit4,
        '5' => KeyCode::Digit5,
        '6' => KeyCode::Digit6,
        '7' => KeyCode::Digit7,
        '8' => KeyCode::Digit8,
        '9' => KeyCode::Digit9,
        _ => return None,
    };
    Some(code)
}

/// Held keys and the actions they are bound to
pub struct KeyState {
    held: HashSet<KeyCode>,
    bindings: HashMap<Action, Vec<KeyCode>>,
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyState {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            bindings: Self::default_bindings(),
        }
    }

    /// Build a key state from named bindings (`forward = ["w", "arrowup"]`)
    pub fn with_bindings<'a>(
        bindings: impl IntoIterator<Item = (Action, &'a [String])>,
    ) -> Result<Self> {
        let mut state = Self::new();
        for (action, names) in bindings {
            let mut keys = Vec::new();
            for name in names {
                keys.extend(parse_key(name)?);
            }
            state.bind_action(action, keys);
        }
        Ok(state)
    }

    fn default_bindings() -> HashMap<Action, Vec<KeyCode>> {
        HashMap::from([
            (Action::Forward, vec![KeyCode::KeyW, KeyCode::ArrowUp]),
            (Action::Backward, vec![KeyCode::KeyS, KeyCode::ArrowDown]),
            (Action::Left, vec![KeyCode::KeyA, KeyCode::ArrowLeft]),
            (Action::Right, vec![KeyCode::KeyD, KeyCode::ArrowRight]),
            (Action::Jump, vec![KeyCode::Space]),
            (Action::Run, vec![KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        ])
    }

    /// Replace the keys bound to `action`
    pub fn bind_action(&mut self, action: Action, keys: Vec<KeyCode>) {
        self.bindings.insert(action, keys);
    }

    pub fn bindings(&self, action: Action) -> &[KeyCode] {
        self.bindings
            .get(&action)
            .map(|keys| keys.as_slice())
            .unwrap_or(&[])
    }

    pub fn process_key_down(&mut self, key: KeyCode) {
        self.held.insert(key);
    }

    pub fn process_key_up(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Is any key bound to `action` held?
    pub fn is_action_down(&self, action: Action) -> bool {
        self.bindings(action).iter().any(|k| self.held.contains(k))
    }
}
