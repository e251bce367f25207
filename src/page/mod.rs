use crate::models::game_state::GameState;
use crate::opt::*;

pub mod console;
pub mod table;

use console::Console;
use table::{card_selection_table, init_player_info_table, player_info_table, Table};

pub const SEND_LABEL: &str = "Send";
pub const IDLE_LABEL: &str = "Start a game first";
const NO_ACTIVE_GAME: &str = "\nThere is no active game.";

const LOGGED_STATE_CHARS: usize = 100;

fn log(s: String) {
    log_if(s.as_str(), DbgFlg::Render);
}

/// Everything the player sees: console, both tables and the input controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub console: Console,
    pub player_info: Table,
    pub card_selection: Table,
    pub input_enabled: bool,
    pub send_label: String,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            console: Console::new(),
            player_info: init_player_info_table(),
            card_selection: card_selection_table(&[]),
            input_enabled: false,
            send_label: IDLE_LABEL.to_string(),
        }
    }
}

impl Page {
    pub fn new() -> Self {
        Page::default()
    }

    /// Rebuilds the page from one server response. `None` leaves the page untouched.
    pub fn update(&mut self, state: Option<&GameState>) {
        let Some(state) = state else {
            log_err("Invalid game state object!");
            return;
        };

        log(format!(
            "Received response object: '{}(...)'",
            summarize_state(state)
        ));

        if !state.game_started {
            self.console.append(NO_ACTIVE_GAME);
            return;
        }

        self.input_enabled = true;
        self.send_label = SEND_LABEL.to_string();

        self.console.append(&state.game_text);
        self.card_selection = card_selection_table(&state.curr_selection_menu);
        self.player_info = player_info_table(state);
    }

    /// Plain-text servers answer with the whole narration at once.
    pub fn replace_console(&mut self, text: &str) {
        self.console.replace(text);
    }
}

fn summarize_state(state: &GameState) -> String {
    let json = serde_json::to_string(state).unwrap_or_default();
    first_line(&json).chars().take(LOGGED_STATE_CHARS).collect()
}

fn first_line(input: &str) -> &str {
    input.lines().next().unwrap_or("")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::models::game_state::PlayerInfo;
    use std::collections::BTreeMap;

    fn started_state(text: &str) -> GameState {
        GameState {
            game_started: true,
            game_text: text.to_string(),
            curr_selection_menu: vec!["F5".to_string(), "L20".to_string()],
            players: BTreeMap::from([(
                "P1".to_string(),
                PlayerInfo {
                    shields: "0".to_string(),
                    hand_size: "2".to_string(),
                    hand: "F5 L20".to_string(),
                },
            )]),
        }
    }

    #[test]
    fn test_initial_page() {
        let page = Page::new();
        assert!(!page.input_enabled);
        assert_eq!(page.send_label, IDLE_LABEL);
        assert!(page.console.is_empty());
        assert!(page.card_selection.is_empty());
        assert!(page.player_info.rows.is_empty());
    }

    #[test]
    fn test_update_started_game() {
        let mut page = Page::new();
        page.update(Some(&started_state("P1's turn\n")));

        assert!(page.input_enabled);
        assert_eq!(page.send_label, SEND_LABEL);
        assert_eq!(page.console.text(), "P1's turn\n");
        assert_eq!(page.card_selection.header, vec!["1", "2"]);
        assert_eq!(page.player_info.rows.len(), 1);
    }

    #[test]
    fn test_console_accumulates() {
        let mut page = Page::new();
        page.update(Some(&started_state("one\n")));
        page.update(Some(&started_state("two\n")));
        assert_eq!(page.console.text(), "one\ntwo\n");
    }

    #[test]
    fn test_none_leaves_page_untouched() {
        let mut page = Page::new();
        page.update(Some(&started_state("one\n")));
        let before = page.clone();

        page.update(None);
        assert_eq!(page, before);
    }

    #[test]
    fn test_game_not_started() {
        let mut page = Page::new();
        page.update(Some(&GameState::default()));

        assert_eq!(page.console.text(), "\nThere is no active game.");
        assert!(!page.input_enabled);
        assert!(page.player_info.rows.is_empty());
    }

    #[test]
    fn test_selection_cleared_when_menu_empty() {
        let mut page = Page::new();
        page.update(Some(&started_state("")));
        assert!(!page.card_selection.is_empty());

        let mut state = started_state("");
        state.curr_selection_menu.clear();
        page.update(Some(&state));
        assert!(page.card_selection.is_empty());
    }

    #[test]
    fn test_summarize_state_truncates() {
        let mut state = started_state(&"x".repeat(500));
        state.game_text.push('\n');
        let summary = summarize_state(&state);
        assert_eq!(summary.chars().count(), LOGGED_STATE_CHARS);
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("abc\ndef"), "abc");
        assert_eq!(first_line("abc"), "abc");
        assert_eq!(first_line(""), "");
    }
}
