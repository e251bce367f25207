use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::str::FromStr;
use std::sync::{Arc, RwLock};
use std::{collections::HashMap, env, fs::File, path::Path};

use directories::ProjectDirs;

use crate::opt::*;

const APP_NAME: &str = "quest-client";
const APP_AUTHOR: &str = "a3";
const APP_QUALIFIER: &str = "com";

const RUNTIME_DATA_FILE_NAME: &str = "runtime_data.json";

pub const API_BASE_URL_KEY: &str = "api_base_url";
pub const LAST_SCENARIO_KEY: &str = "last_scenario";

const API_BASE_URL_ENV: &str = "QUEST_API_BASE_URL";
const API_VARIANT_ENV: &str = "QUEST_API_VARIANT";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

fn log(s: String) {
    log_if(s.as_str(), DbgFlg::Cli);
}

pub struct AppContext {
    pub data: Arc<RwLock<HashMap<String, String>>>,
    runtime_data_path: String,
}

pub fn create_context() -> Res<AppContext> {
    let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_AUTHOR, APP_NAME)
        .ok_or("unable to resolve the project directory")?;

    let runtime_dir = project_dirs.data_local_dir();
    log(format!("Runtime directory: {:?}", runtime_dir));

    std::fs::create_dir_all(runtime_dir).err_to_str()?;

    let runtime_data_path = runtime_dir.join(RUNTIME_DATA_FILE_NAME);
    let runtime_data_path = runtime_data_path
        .to_str()
        .ok_or("runtime directory is not valid UTF-8")?;
    load_data_from_file(runtime_data_path)
}

pub fn load_data_from_file(runtime_data_path: &str) -> Res<AppContext> {
    let path = Path::new(runtime_data_path);
    let data = if path.exists() {
        let mut file = File::open(path).err_to_str()?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).err_to_str()?;
        if contents.trim().is_empty() {
            HashMap::new()
        } else {
            serde_json::from_str::<HashMap<String, String>>(&contents)
                .map_err(|err| format!("unable to parse {}: {}", runtime_data_path, err))?
        }
    } else {
        HashMap::new()
    };

    Ok(AppContext {
        data: Arc::new(RwLock::new(data)),
        runtime_data_path: runtime_data_path.to_string(),
    })
}

impl AppContext {
    pub fn read_data(&self, key: &str) -> Option<String> {
        let data_read = self.data.read().ok()?;
        data_read.get(key).map(|s| s.to_string())
    }

    pub fn write_data(&self, key: &str, value: &str) -> Res<()> {
        let mut data_write = self.data.write().err_to_str()?;
        data_write.insert(key.to_string(), value.to_string());
        save_data(&self.runtime_data_path, &data_write)
    }
}

fn save_data(runtime_data_path: &str, data: &HashMap<String, String>) -> Res<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(runtime_data_path)
        .err_to_str()?;
    let content = serde_json::to_string(data).err_to_str()?;
    file.write_all(content.as_bytes()).err_to_str()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumString, strum_macros::Display)]
#[strum(ascii_case_insensitive)]
pub enum ApiVariant {
    #[strum(serialize = "json")]
    Json,
    #[strum(serialize = "text")]
    PlainText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub api_variant: ApiVariant,
}

impl ClientConfig {
    /// Environment first, then runtime data, then the built-in default.
    pub fn resolve(context: &AppContext) -> Res<Self> {
        let api_base_url = env::var(API_BASE_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .or_else(|| context.read_data(API_BASE_URL_KEY))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let api_variant = match env::var(API_VARIANT_ENV) {
            Ok(variant) if !variant.is_empty() => ApiVariant::from_str(&variant)
                .map_err(|_| format!("{} must be 'json' or 'text', got '{}'", API_VARIANT_ENV, variant))?,
            _ => ApiVariant::Json,
        };

        Ok(ClientConfig {
            api_base_url: normalize_base_url(&api_base_url),
            api_variant,
        })
    }
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
