use std::collections::HashMap;
use std::fmt::Display;
use std::{env, result};

use lazy_static::lazy_static;

pub type Res<T> = Result<T, String>;

pub trait ErrToStr<T, E: Display> {
    fn err_to_str(self) -> Res<T>;
}

impl<T, E: Display> ErrToStr<T, E> for result::Result<T, E> {
    fn err_to_str(self) -> Res<T> {
        self.map_err(|err| err.to_string())
    }
}

#[derive(strum_macros::Display, Eq, PartialEq, Debug, Hash, Clone, Copy)]
pub enum DbgFlg {
    #[strum(serialize = "DBG_FLG_NET")]
    Net,
    #[strum(serialize = "DBG_FLG_RENDER")]
    Render,
    #[strum(serialize = "DBG_FLG_CLI")]
    Cli,
}

lazy_static! {
    pub static ref DBG_FLG_DEFAULTS: HashMap<DbgFlg, bool> = HashMap::from([
        (DbgFlg::Net, false),
        (DbgFlg::Render, false),
        (DbgFlg::Cli, false),
    ]);
}

pub fn log_if(s: &str, flg: DbgFlg) {
    if checkflag(&flg) {
        println!("{} {}", utc_now(), s);
    }
}

/// Errors are always reported, on stderr so they don't interleave with the console.
pub fn log_err(s: &str) {
    eprintln!("{} ERROR {}", utc_now(), s);
}

fn utc_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

fn checkflag(flg: &DbgFlg) -> bool {
    env::var(flg.to_string()).ok().map_or_else(
        || DBG_FLG_DEFAULTS.get(flg).copied().unwrap_or(false),
        |s| flag_value(&s),
    )
}

fn flag_value(s: &str) -> bool {
    s == "1" || s.eq_ignore_ascii_case("true")
}
