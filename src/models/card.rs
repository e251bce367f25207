use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref WEAPON_ALIASES: HashMap<&'static str, &'static str> = HashMap::from([
        ("dagger", "D5"),
        ("sword", "S10"),
        ("horse", "H10"),
        ("battle-axe", "B15"),
        ("axe", "B15"),
        ("lance", "L20"),
        ("excalibur", "E30"),
    ]);
}

/// Maps a weapon name to the card id shown in the selection menu.
/// Anything that isn't a known weapon name is returned as-is.
pub fn normalize_card_id(name: &str) -> String {
    let name = name.trim();
    WEAPON_ALIASES
        .get(name.to_lowercase().as_str())
        .map(|id| id.to_string())
        .unwrap_or_else(|| name.to_string())
}
