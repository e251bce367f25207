#![cfg_attr(not(feature = "interactive"), allow(dead_code, unused_imports))]

use crate::models::scenario::{Scenario, KNOWN_SCENARIOS};

const APP_NAME: &str = "Quest Game";
const LABEL_CANCEL: &str = "Cancel";

fn menu_item_name(scenario: &Scenario) -> String {
    format!("{}: {}", scenario.id(), scenario.label())
}

fn scenario_from_item_name(name: &str) -> Option<Scenario> {
    name.split(':').next()?.parse::<Scenario>().ok()
}

/// Lets the player pick a rigged deck. `None` when the menu is cancelled.
#[cfg(feature = "interactive")]
pub fn choose_scenario() -> Option<Scenario> {
    let mut items = vec![
        terminal_menu::label("-".repeat(APP_NAME.len())),
        terminal_menu::label(APP_NAME),
        terminal_menu::label("-".repeat(APP_NAME.len())),
    ];
    items.extend(
        KNOWN_SCENARIOS
            .iter()
            .map(|scenario| terminal_menu::button(menu_item_name(scenario))),
    );
    items.push(terminal_menu::back_button(LABEL_CANCEL));

    let scenario_menu = terminal_menu::menu(items);
    terminal_menu::run(&scenario_menu);

    let selection = terminal_menu::mut_menu(&scenario_menu);
    if selection.canceled() {
        return None;
    }
    scenario_from_item_name(selection.selected_item_name())
}

#[cfg(not(feature = "interactive"))]
pub fn choose_scenario() -> Option<Scenario> {
    Some(Scenario::Random)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_item_names_round_trip_to_scenarios() {
        for scenario in KNOWN_SCENARIOS.iter() {
            let name = menu_item_name(scenario);
            assert_eq!(scenario_from_item_name(&name), Some(*scenario));
        }
    }

    #[test]
    fn test_cancel_item_is_not_a_scenario() {
        assert_eq!(scenario_from_item_name(LABEL_CANCEL), None);
    }
}
