//! Key identifiers

/// Identifier for a keyboard key, as reported by the game backend
pub type KeyCode = u32;

/// Key codes for the keys most commonly driven by players
pub mod key_codes {
    use super::KeyCode;

    pub const BACKSPACE: KeyCode = 8;
    pub const RETURN: KeyCode = 13;
    pub const ESCAPE: KeyCode = 27;
    pub const SPACE: KeyCode = 32;

    pub const RIGHT: KeyCode = 1073741903;
    pub const LEFT: KeyCode = 1073741904;
    pub const DOWN: KeyCode = 1073741905;
    pub const UP: KeyCode = 1073741906;
}
