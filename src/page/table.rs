use serde::Serialize;

use crate::models::game_state::GameState;

pub const PLAYER_INFO_TABLE_ID: &str = "playerInfoTable";
pub const CARD_SELECTION_TABLE_ID: &str = "cardSelectionTable";
pub const SELECTION_ROW_ID: &str = "selectionRow";

/// Hand columns shown even when every hand is smaller.
pub const MIN_HAND_COLUMNS: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub id: Option<String>,
    pub text: String,
}

impl Cell {
    pub fn plain(text: &str) -> Self {
        Cell {
            id: None,
            text: text.to_string(),
        }
    }

    pub fn with_id(id: String, text: &str) -> Self {
        Cell {
            id: Some(id),
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: Option<String>,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub id: &'static str,
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(id: &'static str) -> Self {
        Table {
            id,
            header: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }

    #[cfg(test)]
    pub fn find_cell(&self, id: &str) -> Option<&Cell> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .find(|cell| cell.id.as_deref() == Some(id))
    }
}

fn numbered_header(from: usize, to: usize) -> impl Iterator<Item = String> {
    (from..=to).map(|n| n.to_string())
}

/// Header of a freshly wiped player table.
pub fn init_player_info_table() -> Table {
    let mut table = Table::new(PLAYER_INFO_TABLE_ID);
    table.header = vec!["Player".to_string(), "Shields".to_string(), "Card#".to_string()];
    table.header.extend(numbered_header(1, MIN_HAND_COLUMNS));
    table
}

/// One row per player, ascending by player id, each hand card in its own cell.
pub fn player_info_table(state: &GameState) -> Table {
    let mut table = init_player_info_table();

    for (player_id, info) in state.players.iter() {
        let mut cells = vec![
            Cell::plain(player_id),
            Cell::with_id(format!("{}_shields", player_id), &info.shields),
            Cell::with_id(format!("{}_handSize", player_id), &info.hand_size),
        ];
        cells.extend(
            info.cards()
                .into_iter()
                .enumerate()
                .map(|(i, card)| Cell::with_id(format!("{}_card_{}", player_id, i + 1), card)),
        );
        table.rows.push(Row { id: None, cells });
    }

    let longest_hand = state
        .players
        .values()
        .map(|info| info.cards().len())
        .max()
        .unwrap_or(0);
    if longest_hand > MIN_HAND_COLUMNS {
        table
            .header
            .extend(numbered_header(MIN_HAND_COLUMNS + 1, longest_hand));
    }

    table
}

/// Selectable cards numbered from 1. Empty menu, empty table.
pub fn card_selection_table(menu: &[String]) -> Table {
    let mut table = Table::new(CARD_SELECTION_TABLE_ID);
    if menu.is_empty() {
        return table;
    }

    table.header = numbered_header(1, menu.len()).collect();
    table.rows.push(Row {
        id: Some(SELECTION_ROW_ID.to_string()),
        cells: menu
            .iter()
            .enumerate()
            .map(|(i, card)| Cell::with_id(format!("selection_{}", i + 1), card))
            .collect(),
    });
    table
}

/// 1-based position of the first selection cell holding `card_id`.
pub fn selection_number(table: &Table, card_id: &str) -> Option<usize> {
    table
        .rows
        .first()?
        .cells
        .iter()
        .position(|cell| cell.text == card_id)
        .map(|i| i + 1)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::models::game_state::PlayerInfo;

    fn player(shields: &str, hand: &str) -> PlayerInfo {
        PlayerInfo {
            shields: shields.to_string(),
            hand_size: hand.split_whitespace().count().to_string(),
            hand: hand.to_string(),
        }
    }

    fn state_with(players: Vec<(&str, PlayerInfo)>) -> GameState {
        GameState {
            game_started: true,
            players: players
                .into_iter()
                .map(|(id, info)| (id.to_string(), info))
                .collect(),
            ..GameState::default()
        }
    }

    #[test]
    fn test_init_player_info_header() {
        let table = init_player_info_table();
        assert_eq!(table.header.len(), 3 + MIN_HAND_COLUMNS);
        assert_eq!(table.header[0], "Player");
        assert_eq!(table.header[2], "Card#");
        assert_eq!(table.header[3], "1");
        assert_eq!(table.header.last().unwrap(), "12");
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_player_rows_sorted() {
        let state = state_with(vec![
            ("P3", player("0", "F5")),
            ("P1", player("2", "F5 S10")),
            ("P2", player("1", "")),
        ]);
        let table = player_info_table(&state);

        let ids = table
            .rows
            .iter()
            .map(|row| row.cells[0].text.clone())
            .collect::<Vec<String>>();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_player_cells() {
        let state = state_with(vec![("P1", player("2", "F5 S10 H10"))]);
        let table = player_info_table(&state);
        let row = &table.rows[0];

        assert_eq!(row.cells.len(), 6);
        assert_eq!(table.find_cell("P1_shields").unwrap().text, "2");
        assert_eq!(table.find_cell("P1_handSize").unwrap().text, "3");
        assert_eq!(table.find_cell("P1_card_1").unwrap().text, "F5");
        assert_eq!(table.find_cell("P1_card_3").unwrap().text, "H10");
        assert!(table.find_cell("P1_card_4").is_none());
    }

    #[test]
    fn test_empty_hand_has_no_card_cells() {
        let state = state_with(vec![("P1", player("0", "")), ("P2", player("1", "  "))]);
        let table = player_info_table(&state);

        assert_eq!(table.rows[0].cells.len(), 3);
        assert_eq!(table.rows[1].cells.len(), 3);
        assert_eq!(table.find_cell("P1_handSize").unwrap().text, "0");
        assert!(table.find_cell("P1_card_1").is_none());
        assert!(table.find_cell("P2_card_1").is_none());
        assert_eq!(table.header.len(), 3 + MIN_HAND_COLUMNS);
    }

    #[test]
    fn test_long_hand_extends_header_once() {
        let long_hand = "F5 F5 F10 F10 F15 F15 F20 F20 D5 D5 S10 S10 H10 H10";
        let state = state_with(vec![
            ("P1", player("0", long_hand)),
            ("P2", player("0", long_hand)),
        ]);
        let table = player_info_table(&state);

        assert_eq!(table.header.len(), 3 + 14);
        assert_eq!(table.header[3 + 12], "13");
        assert_eq!(table.header[3 + 13], "14");
        assert_eq!(table.find_cell("P2_card_14").unwrap().text, "H10");
    }

    #[test]
    fn test_card_selection_columns() {
        let menu = vec!["F5".to_string(), "S10".to_string(), "F5".to_string()];
        let table = card_selection_table(&menu);

        assert_eq!(table.header, vec!["1", "2", "3"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].id.as_deref(), Some(SELECTION_ROW_ID));
        assert_eq!(table.find_cell("selection_2").unwrap().text, "S10");
        assert_eq!(selection_number(&table, "F5"), Some(1));
        assert_eq!(selection_number(&table, "S10"), Some(2));
        assert_eq!(selection_number(&table, "E30"), None);
    }

    #[test]
    fn test_empty_selection() {
        let table = card_selection_table(&[]);
        assert!(table.is_empty());
        assert_eq!(selection_number(&table, "F5"), None);
    }
}
