use reqwest::{Client, Method, RequestBuilder};

use crate::context::{ApiVariant, ClientConfig};
use crate::models::game_state::GameState;
use crate::models::scenario::Scenario;
use crate::opt::*;

fn log(s: String) {
    log_if(s.as_str(), DbgFlg::Net);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    State(Option<GameState>),
    Text(String),
}

#[allow(async_fn_in_trait)]
pub trait GameApi {
    async fn start(&self, scenario: Scenario) -> Res<Reply>;
    async fn submit(&self, text: &str) -> Res<Reply>;
}

pub struct HttpGameApi {
    client: Client,
    base_url: String,
    variant: ApiVariant,
}

impl HttpGameApi {
    pub fn new(config: &ClientConfig) -> Self {
        HttpGameApi {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
            variant: config.api_variant,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        log(format!("{} {}", method, url));
        self.client.request(method, url)
    }

    async fn read_body(request: RequestBuilder) -> Res<String> {
        let response = request.send().await.err_to_str()?;
        let status = response.status();
        let body = response.text().await.err_to_str()?;
        log(format!("{} ({} bytes)", status, body.len()));

        if !status.is_success() {
            return Err(format!("server responded with {}", status));
        }
        Ok(body)
    }

    async fn read_state(request: RequestBuilder) -> Res<Reply> {
        let body = Self::read_body(request).await?;
        let state = GameState::from_body(&body)
            .map_err(|err| format!("unable to parse game state: {}", err))?;
        Ok(Reply::State(state))
    }
}

impl GameApi for HttpGameApi {
    async fn start(&self, scenario: Scenario) -> Res<Reply> {
        match self.variant {
            ApiVariant::Json => {
                let request = self
                    .request(Method::POST, "/start")
                    .query(&[("scenario", scenario.id())]);
                Self::read_state(request).await
            }
            ApiVariant::PlainText => {
                let body = Self::read_body(self.request(Method::GET, "/start")).await?;
                Ok(Reply::Text(body))
            }
        }
    }

    async fn submit(&self, text: &str) -> Res<Reply> {
        match self.variant {
            ApiVariant::Json => {
                let request = self
                    .request(Method::POST, "/submit")
                    .query(&[("submittedText", text)]);
                Self::read_state(request).await
            }
            ApiVariant::PlainText => {
                Err("the plain-text server does not accept input".to_string())
            }
        }
    }
}
