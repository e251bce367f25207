use std::path::Path;

use serde::Serialize;
use tera::Tera;

use crate::models::scenario::KNOWN_SCENARIOS;
use crate::opt::*;
use crate::page::Page;

static PAGE_HTML: &str = include_str!("../templates/page.html");

#[derive(Serialize)]
struct ScenarioButton {
    id: u32,
    label: String,
}

fn scenario_buttons() -> Vec<ScenarioButton> {
    KNOWN_SCENARIOS
        .iter()
        .map(|scenario| ScenarioButton {
            id: scenario.id(),
            label: scenario.label(),
        })
        .collect()
}

pub fn render_page(page: &Page) -> Res<String> {
    let mut context = tera::Context::new();

    context.insert("console", page.console.text());
    context.insert("card_selection", &page.card_selection);
    context.insert("player_info", &page.player_info);
    context.insert("input_enabled", &page.input_enabled);
    context.insert("send_label", &page.send_label);
    context.insert("scenarios", &scenario_buttons());

    Tera::one_off(PAGE_HTML, &context, true).err_to_str()
}

pub fn write_page(page: &Page, path: &Path) -> Res<()> {
    let html = render_page(page)?;
    std::fs::write(path, html).map_err(|err| format!("unable to write {}: {}", path.display(), err))
}
