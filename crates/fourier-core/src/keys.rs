use crate::controls::Control;
use crate::demos::DemoKind;

/// What a key press asks the host to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    SelectDemo(DemoKind),
    Apply(Control),
}

/// Map a key name (`KeyboardEvent.key` on the web, the character or named
/// key on desktop) to an action.
///
/// `1`–`8` pick a panel, `r` resets, space toggles drawing, `c` clears,
/// `+`/`=` and `-` nudge the term count and `o` toggles the overlay.
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    let action = match key {
        " " | "Space" | "Spacebar" => KeyAction::Apply(Control::ToggleDrawing),
        "r" | "R" => KeyAction::Apply(Control::Reset),
        "c" | "C" => KeyAction::Apply(Control::Clear),
        "o" | "O" => KeyAction::Apply(Control::ToggleOverlay),
        "+" | "=" => KeyAction::Apply(Control::NudgeTerms(1)),
        "-" | "_" => KeyAction::Apply(Control::NudgeTerms(-1)),
        _ => {
            let digit = key.parse::<usize>().ok().filter(|d| (1..=8).contains(d))?;
            KeyAction::SelectDemo(DemoKind::from_index(digit - 1).ok()?)
        }
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_select_panels() {
        assert_eq!(
            action_for_key("1"),
            Some(KeyAction::SelectDemo(DemoKind::Intro))
        );
        assert_eq!(
            action_for_key("8"),
            Some(KeyAction::SelectDemo(DemoKind::Spirograph))
        );
        assert_eq!(action_for_key("0"), None);
        assert_eq!(action_for_key("9"), None);
    }

    #[test]
    fn letters_and_symbols() {
        assert_eq!(action_for_key("r"), Some(KeyAction::Apply(Control::Reset)));
        assert_eq!(
            action_for_key(" "),
            Some(KeyAction::Apply(Control::ToggleDrawing))
        );
        assert_eq!(
            action_for_key("="),
            Some(KeyAction::Apply(Control::NudgeTerms(1)))
        );
        assert_eq!(
            action_for_key("-"),
            Some(KeyAction::Apply(Control::NudgeTerms(-1)))
        );
        assert_eq!(action_for_key("x"), None);
        assert_eq!(action_for_key("Shift"), None);
    }
}
