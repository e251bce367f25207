use crate::api::{GameApi, Reply};
use crate::models::card::normalize_card_id;
use crate::models::scenario::Scenario;
use crate::opt::*;
use crate::page::table::selection_number;
use crate::page::Page;

const SENT_PREVIEW_CHARS: usize = 10;

fn log(s: String) {
    log_if(s.as_str(), DbgFlg::Net);
}

/// One player's view of one server: every request ends in a render pass on `page`.
pub struct Session<A: GameApi> {
    api: A,
    pub page: Page,
    last_scenario: Scenario,
}

impl<A: GameApi> Session<A> {
    pub fn new(api: A) -> Self {
        Session {
            api,
            page: Page::new(),
            last_scenario: Scenario::Random,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn last_scenario(&self) -> Scenario {
        self.last_scenario
    }

    pub fn set_last_scenario(&mut self, scenario: Scenario) {
        self.last_scenario = scenario;
    }

    pub async fn start_game(&mut self, scenario: Scenario) {
        self.last_scenario = scenario;
        self.page.console.clear();
        self.page.console.append(&scenario.start_message());

        match self.api.start(scenario).await {
            Ok(reply) => self.render(reply),
            Err(err) => self.report(format!("start_game failed: {}", err)),
        }
    }

    pub async fn restart(&mut self) {
        self.start_game(self.last_scenario()).await;
    }

    pub async fn send_text(&mut self, text: &str) {
        log(format!("Sending '{}'...", text));

        match self.api.submit(text).await {
            Ok(reply) => self.render(reply),
            Err(err) => self.report(format!(
                "send_text failed to send message '{}': {}",
                sent_preview(text),
                err
            )),
        }
    }

    /// Submits the selection number of each named card, stopping at the first
    /// card missing from the current menu.
    pub async fn pick_cards(&mut self, names: &[String]) {
        for name in names {
            let card_id = normalize_card_id(name);
            match selection_number(&self.page.card_selection, &card_id) {
                Some(number) => self.send_text(&number.to_string()).await,
                None => {
                    self.report(format!("'{}' not found in selection!", card_id));
                    return;
                }
            }
        }
    }

    fn render(&mut self, reply: Reply) {
        match reply {
            Reply::State(state) => self.page.update(state.as_ref()),
            Reply::Text(text) => self.page.replace_console(&text),
        }
    }

    fn report(&mut self, error_text: String) {
        log_err(&error_text);
        self.page.console.append(&error_text);
        self.page.console.append("\n");
    }
}

fn sent_preview(text: &str) -> String {
    if text.is_empty() {
        "(blank message)".to_string()
    } else {
        text.chars().take(SENT_PREVIEW_CHARS).collect()
    }
}
