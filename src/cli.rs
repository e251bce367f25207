use clap::{Arg, ArgMatches, Command};
use std::error::Error;
use std::io::Write;
use std::io::{stdin, stdout};
use std::path::PathBuf;

use crate::api::GameApi;
use crate::app::Session;
use crate::context::*;
use crate::menu;
use crate::models::scenario::Scenario;
use crate::opt::*;
use crate::render::{html, text};

const COMMAND_PREFIX: char = '/';

fn log(s: String) {
    log_if(s.as_str(), DbgFlg::Cli);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Start(Option<Scenario>),
    Restart,
    Pick(Vec<String>),
    Page,
    Html(PathBuf),
    Server(Option<String>),
    Quit,
    Submit(String),
}

/// Tracks how much of the console has already reached the terminal.
struct Screen {
    printed: usize,
}

impl Screen {
    fn show<A: GameApi>(&mut self, session: &Session<A>) -> std::io::Result<()> {
        let page = &session.page;
        let mut out = stdout();
        let delta = text::console_delta(page, self.printed);
        write!(out, "{}", delta)?;
        if !delta.is_empty() && !delta.ends_with('\n') {
            writeln!(out)?;
        }
        self.printed = page.console.len();

        writeln!(out)?;
        write!(out, "{}", text::render_tables(page))?;
        out.flush()
    }

    fn show_all<A: GameApi>(&mut self, session: &Session<A>) -> std::io::Result<()> {
        self.printed = 0;
        self.show(session)
    }
}

pub async fn main<A: GameApi>(
    context: &AppContext,
    session: &mut Session<A>,
) -> Result<(), Box<dyn Error>> {
    let mut screen = Screen { printed: 0 };

    writeln!(
        stdout(),
        "Type /start to begin a game, /help for commands. Anything else is sent to the game."
    )?;

    loop {
        let Some(line) = readline(&text::render_prompt(&session.page))? else {
            break;
        };

        let input = match parse_line(&line) {
            Ok(input) => input,
            Err(err) => {
                write!(stdout(), "{err}")?;
                stdout().flush()?;
                continue;
            }
        };
        log(format!("Input: {:?}", input));

        if respond(context, session, &mut screen, input).await? {
            break;
        }
    }

    Ok(())
}

async fn respond<A: GameApi>(
    context: &AppContext,
    session: &mut Session<A>,
    screen: &mut Screen,
    input: Input,
) -> Result<bool, Box<dyn Error>> {
    match input {
        Input::Start(scenario) => {
            let Some(scenario) = scenario.or_else(menu::choose_scenario) else {
                return Ok(false);
            };
            session.start_game(scenario).await;
            remember_scenario(context, scenario);
            screen.show_all(session)?;
        }
        Input::Restart => {
            session.restart().await;
            screen.show_all(session)?;
        }
        Input::Pick(cards) => {
            session.pick_cards(&cards).await;
            screen.show(session)?;
        }
        Input::Page => {
            screen.show_all(session)?;
        }
        Input::Html(path) => {
            match html::write_page(&session.page, &path) {
                Ok(()) => writeln!(stdout(), "Page written to {}", path.display())?,
                Err(err) => log_err(&err),
            }
        }
        Input::Server(None) => {
            let url = context
                .read_data(API_BASE_URL_KEY)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
            writeln!(stdout(), "Saved server: {}", url)?;
        }
        Input::Server(Some(url)) => {
            let url = normalize_base_url(&url);
            match context.write_data(API_BASE_URL_KEY, &url) {
                Ok(()) => writeln!(
                    stdout(),
                    "Server saved as {}; it is used from the next launch.",
                    url
                )?,
                Err(err) => log_err(&format!("unable to save the server URL: {}", err)),
            }
        }
        Input::Quit => {
            writeln!(stdout(), "Exiting ...")?;
            stdout().flush()?;
            return Ok(true);
        }
        Input::Submit(text) => {
            session.send_text(&text).await;
            screen.show(session)?;
        }
    }

    Ok(false)
}

fn remember_scenario(context: &AppContext, scenario: Scenario) {
    if let Err(err) = context.write_data(LAST_SCENARIO_KEY, &scenario.to_string()) {
        log_err(&format!("unable to save the last scenario: {}", err));
    }
}

/// Lines starting with `/` are client commands, everything else is game input.
pub fn parse_line(line: &str) -> Res<Input> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command_line) = line.strip_prefix(COMMAND_PREFIX) else {
        return Ok(Input::Submit(line.to_string()));
    };

    let args = shlex::split(command_line).ok_or("error: Invalid quoting")?;
    if args.is_empty() {
        return Err("error: Missing command\n".to_string());
    }
    let matches = cli().try_get_matches_from(args).err_to_str()?;
    input_from_matches(&matches)
}

fn input_from_matches(matches: &ArgMatches) -> Res<Input> {
    match matches.subcommand() {
        Some(("start", matches)) => {
            let scenario = matches
                .get_one::<String>("scenario")
                .map(|s| s.parse::<Scenario>())
                .transpose()?;
            Ok(Input::Start(scenario))
        }
        Some(("restart", _matches)) => Ok(Input::Restart),
        Some(("pick", matches)) => Ok(Input::Pick(
            matches
                .get_many::<String>("cards")
                .map(|cards| cards.cloned().collect())
                .unwrap_or_default(),
        )),
        Some(("page", _matches)) => Ok(Input::Page),
        Some(("html", matches)) => {
            let path = matches
                .get_one::<String>("path")
                .ok_or("error: Missing path")?;
            Ok(Input::Html(PathBuf::from(path)))
        }
        Some(("server", matches)) => Ok(Input::Server(matches.get_one::<String>("url").cloned())),
        Some(("quit", _matches)) => Ok(Input::Quit),
        Some((name, _matches)) => Err(format!("error: Invalid command '{}'", name)),
        None => Err("error: Missing command".to_string()),
    }
}

fn cli() -> Command {
    // strip out usage
    const PARSER_TEMPLATE: &str = "\
        {all-args}
    ";
    // strip out name/version
    const COMMAND_TEMPLATE: &str = "\
        {about-with-newline}\n\
        {usage-heading}\n    {usage}\n\
        \n\
        {all-args}{after-help}\
    ";

    Command::new("repl")
        .multicall(true)
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand_value_name("COMMAND")
        .subcommand_help_heading("COMMANDS")
        .help_template(PARSER_TEMPLATE)
        .subcommand(
            Command::new("start")
                .about("Start a new game, optionally with a rigged scenario")
                .arg(Arg::new("scenario").help("Scenario number, 0 for a random game"))
                .help_template(COMMAND_TEMPLATE),
        )
        .subcommand(
            Command::new("restart")
                .about("Start again with the last scenario")
                .help_template(COMMAND_TEMPLATE),
        )
        .subcommand(
            Command::new("pick")
                .about("Pick cards from the selection menu by id or weapon name")
                .arg(Arg::new("cards").num_args(1..).required(true))
                .help_template(COMMAND_TEMPLATE),
        )
        .subcommand(
            Command::new("page")
                .about("Show the whole console and both tables")
                .help_template(COMMAND_TEMPLATE),
        )
        .subcommand(
            Command::new("html")
                .about("Write the page as an HTML file")
                .arg(Arg::new("path").required(true))
                .help_template(COMMAND_TEMPLATE),
        )
        .subcommand(
            Command::new("server")
                .about("Show or save the game server base URL")
                .arg(Arg::new("url"))
                .help_template(COMMAND_TEMPLATE),
        )
        .subcommand(
            Command::new("quit")
                .alias("exit")
                .alias("q")
                .about("Quit the client")
                .help_template(COMMAND_TEMPLATE),
        )
}

fn readline(prompt: &str) -> Result<Option<String>, Box<dyn Error>> {
    write!(stdout(), "{}", prompt)?;
    stdout().flush()?;
    let mut buffer = String::new();
    if stdin().read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer))
}
