use reqwest::{Client, StatusCode, Url};

use crate::data::models::{DictionaryEntry, LookupResult};
use crate::features::dictionary::{reshape::reshape_entries, validate_word, ClientError, LookupError};

pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Relay to the upstream dictionary API.
///
/// Holds one pooled [`Client`]; every lookup runs inside a
/// [`DictionarySession`] that borrows a handle to that pool.
#[derive(Debug, Clone)]
pub struct DictionaryApi {
    base_url: Url,
    client: Client,
}

impl DictionaryApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ClientError::InvalidBaseUrl(base_url.to_string()))?;

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Opens a session; the pooled handle is released when it is dropped.
    pub fn session(&self) -> DictionarySession<'_> {
        log::debug!("dictionary session opened for {}", self.base_url);
        DictionarySession {
            api: self,
            client: self.client.clone(),
            lookups: 0,
        }
    }

    pub async fn lookup(&self, word: &str) -> LookupResult {
        self.session().lookup(word).await
    }
}

pub struct DictionarySession<'a> {
    api: &'a DictionaryApi,
    client: Client,
    lookups: usize,
}

impl DictionarySession<'_> {
    /// Validates `word`, fetches it and reshapes the answer. Failures never
    /// escape: they are folded into a `found: false` result.
    pub async fn lookup(&mut self, word: &str) -> LookupResult {
        let word_ok = match validate_word(word) {
            Ok(w) => w,
            Err(e) => {
                log::debug!("rejected lookup for {:?}: {}", word, e);
                return LookupResult::failed(word, e);
            }
        };

        self.lookups += 1;
        match self.fetch(&word_ok).await {
            Ok(entries) => {
                log::debug!("found {} entries for {:?}", entries.len(), word_ok);
                LookupResult::found(word_ok, entries)
            }
            Err(LookupError::NotFound) => {
                log::debug!("no dictionary entry for {:?}", word_ok);
                LookupResult::failed(word_ok, LookupError::NotFound)
            }
            Err(e) => {
                log::warn!("lookup for {:?} failed: {}", word_ok, e);
                LookupResult::failed(word_ok, e)
            }
        }
    }

    async fn fetch(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        let url = self.entry_url(word)?;
        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound),
            other => return Err(LookupError::UpstreamStatus(other.as_u16())),
        }

        let body = response.bytes().await?;
        let json: serde_json::Value = serde_json::from_slice(&body)?;
        reshape_entries(&json)
    }

    fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = self.api.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::Unexpected(format!("cannot extend {}", self.api.base_url)))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }
}

impl Drop for DictionarySession<'_> {
    fn drop(&mut self) {
        log::debug!("dictionary session released after {} lookup(s)", self.lookups);
    }
}
