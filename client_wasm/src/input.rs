//! Keyboard and pointer input handling

/// What a user input asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Flap,
    Restart,
}

/// Map a physical key code (`KeyboardEvent.code`) to a command
pub fn command_for_key(code: &str) -> Option<Command> {
    match code {
        "Space" => Some(Command::Flap),
        "Enter" | "KeyR" => Some(Command::Restart),
        _ => None,
    }
}

/// Whether the browser's default action for this key should be suppressed.
/// Space would otherwise scroll the page.
pub fn should_prevent_default(code: &str) -> bool {
    code == "Space"
}

/// Extract the physical key code from a keyboard event
#[cfg(target_arch = "wasm32")]
pub fn get_code_from_event(event: &web_sys::KeyboardEvent) -> String {
    event.code()
}
