//! The API token and the state derived from it.
//!
//! The decoding core never looks at the store: a [`WaniKaniAPIClient`] is built from the
//! token it holds at that moment. Anything that must follow token changes subscribes to
//! the store instead.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::User;
use crate::schema::Resource;
use crate::wanikani::WaniKaniAPIClient;

/// A WaniKani v2 API token.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(Error::Configuration("the WaniKani API key is empty".to_string()));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

/// Holds the current token and notifies subscribers when it is set or cleared.
pub struct CredentialStore {
    sender: watch::Sender<Option<Token>>,
}

impl CredentialStore {
    pub fn new(token: Option<Token>) -> Self {
        let (sender, _) = watch::channel(token);
        Self { sender }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config
            .wanikani_api_key
            .as_deref()
            .map(Token::new)
            .transpose()?;

        Ok(Self::new(token))
    }

    pub fn token(&self) -> Option<Token> {
        self.sender.borrow().clone()
    }

    pub fn set_token(&self, token: Token) {
        self.sender.send_replace(Some(token));
        info!("API token set");
    }

    pub fn clear_token(&self) {
        self.sender.send_replace(None);
        info!("API token cleared");
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Token>> {
        self.sender.subscribe()
    }

    /// Builds a client for the current token.
    pub fn client(&self, base_url: &str) -> Result<WaniKaniAPIClient> {
        match self.token() {
            Some(token) => WaniKaniAPIClient::with_base_url(token.as_str(), base_url),
            None => Err(Error::Configuration("no WaniKani API key is set".to_string())),
        }
    }
}

/// The user behind the current token, as last observed.
#[derive(Debug, Clone)]
pub enum CurrentUser {
    SignedOut,
    Loading,
    Loaded(Arc<Resource<User>>),
    Failed(Arc<Error>),
}

/// Keeps a [`CurrentUser`] in sync with the token in `tokens`.
///
/// The user is fetched again every time the token changes. A fetch still running when the
/// token changes is dropped, so only the user behind the newest token is ever published.
/// The task ends when the credential store is dropped or nobody is watching the result
/// any more.
pub fn watch_current_user(
    mut tokens: watch::Receiver<Option<Token>>,
    base_url: String,
) -> (watch::Receiver<CurrentUser>, JoinHandle<()>) {
    let (sender, receiver) = watch::channel(CurrentUser::SignedOut);

    let handle = tokio::spawn(async move {
        loop {
            let token = tokens.borrow_and_update().clone();
            let state = match token {
                None => CurrentUser::SignedOut,
                Some(token) => {
                    sender.send_replace(CurrentUser::Loading);
                    tokio::select! {
                        result = fetch_user(&token, &base_url) => match result {
                            Ok(user) => CurrentUser::Loaded(Arc::new(user)),
                            Err(err) => {
                                warn!(error = %err, "failed to load current user");
                                CurrentUser::Failed(Arc::new(err))
                            }
                        },
                        // A newer token replaces this fetch before it is published.
                        changed = tokens.changed() => match changed {
                            Ok(()) => {
                                debug!("API token changed while loading the current user");
                                continue;
                            }
                            Err(_) => break,
                        },
                    }
                }
            };
            sender.send_replace(state);

            if sender.is_closed() || tokens.changed().await.is_err() {
                break;
            }
        }
    });

    (receiver, handle)
}

async fn fetch_user(token: &Token, base_url: &str) -> Result<Resource<User>> {
    WaniKaniAPIClient::with_base_url(token.as_str(), base_url)?
        .user()
        .get()
        .await
}
