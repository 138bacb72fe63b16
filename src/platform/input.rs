//! Input mapping
//!
//! Every device collapses to a handful of actions. The same trigger starts a
//! run or jumps depending on the run phase; that decision belongs to the sim.

use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Start / jump (space, up arrow, tap, click, start button)
    Trigger,
    /// Start a new run if none is in progress
    Restart,
    /// Flip the mute preference
    ToggleMute,
    /// Toggle demo mode
    ToggleAutopilot,
}

/// Map a `KeyboardEvent.code` to an action
pub fn action_for_key(code: &str) -> Option<InputAction> {
    match code {
        "Space" | "ArrowUp" => Some(InputAction::Trigger),
        "KeyR" => Some(InputAction::Restart),
        "KeyM" => Some(InputAction::ToggleMute),
        "KeyI" => Some(InputAction::ToggleAutopilot),
        _ => None,
    }
}

impl TickInput {
    /// Queue an action for the next tick
    pub fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::Trigger => self.trigger = true,
            InputAction::Restart => self.restart = true,
            InputAction::ToggleMute => self.toggle_mute = true,
            InputAction::ToggleAutopilot => self.autopilot = !self.autopilot,
        }
    }

    /// Clear one-shot actions after a tick consumed them
    pub fn clear_one_shots(&mut self) {
        self.trigger = false;
        self.restart = false;
        self.toggle_mute = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(action_for_key("Space"), Some(InputAction::Trigger));
        assert_eq!(action_for_key("ArrowUp"), Some(InputAction::Trigger));
        assert_eq!(action_for_key("KeyR"), Some(InputAction::Restart));
        assert_eq!(action_for_key("KeyM"), Some(InputAction::ToggleMute));
        assert_eq!(action_for_key("KeyI"), Some(InputAction::ToggleAutopilot));
        assert_eq!(action_for_key("ArrowDown"), None);
        assert_eq!(action_for_key("Enter"), None);
    }

    #[test]
    fn test_one_shots_clear_but_autopilot_sticks() {
        let mut input = TickInput::default();
        input.apply(InputAction::Trigger);
        input.apply(InputAction::ToggleMute);
        input.apply(InputAction::ToggleAutopilot);
        assert!(input.trigger && input.toggle_mute && input.autopilot);

        input.clear_one_shots();
        assert!(!input.trigger && !input.toggle_mute && !input.restart);
        assert!(input.autopilot);
    }
}
