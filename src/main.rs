use dotenv::dotenv;

mod api;
mod app;
mod cli;
mod context;
mod menu;
mod models;
mod opt;
mod page;
mod render;

use api::HttpGameApi;
use app::Session;
use context::{ClientConfig, LAST_SCENARIO_KEY};
use models::scenario::Scenario;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();

    if let Err(err) = run().await {
        opt::log_err(&err.to_string());
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let context = context::create_context()?;
    let config = ClientConfig::resolve(&context)?;
    let mut session = Session::new(HttpGameApi::new(&config));
    println!("Game server: {} ({})", session.api().base_url(), config.api_variant);

    if let Some(scenario) = context
        .read_data(LAST_SCENARIO_KEY)
        .and_then(|id| id.parse::<Scenario>().ok())
    {
        session.set_last_scenario(scenario);
    }

    cli::main(&context, &mut session).await
}
