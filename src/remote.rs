use crate::config::RemoteConfig;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, time::Duration};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// An error talking to an external collaborator.
///
/// All of these are recoverable: callers surface a transient notification and
/// leave local state untouched. Nothing is retried automatically.
#[derive(thiserror::Error, Debug)]
pub enum RemoteError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("no custom template server configured")]
    NotConfigured,
}

/// A user-saved template: a named style summary, not a generated catalog
/// entry.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CustomTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub template_data: TemplateData,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TemplateData {
    #[serde(default)]
    pub styles: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct ListResponse {
    templates: Vec<CustomTemplate>,
}

#[derive(Deserialize)]
struct CreateResponse {
    template: CustomTemplate,
}

#[derive(Serialize)]
struct CreateRequest<'a> {
    user_id: &'a str,
    name: &'a str,
    description: &'a str,
    template_data: &'a TemplateData,
}

/// Client for the custom-template persistence API.
///
/// The request timeout is fixed at construction so a dead server can never
/// wedge the caller indefinitely.
#[derive(Debug)]
pub struct CustomTemplateClient {
    client: Client,
    base_url: String,
    user_id: String,
    authorization: String,
}

impl CustomTemplateClient {
    pub fn new(base_url: &str, user_id: &str, authorization: &str) -> Result<Self, RemoteError> {
        Self::with_timeout(base_url, user_id, authorization, DEFAULT_TIMEOUT)
    }

    /// Build the client from the `remote` config section.
    pub fn from_config(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let base_url = config.base_url.as_deref().ok_or(RemoteError::NotConfigured)?;
        Self::with_timeout(
            base_url,
            &config.user_id,
            config.authorization.as_deref().unwrap_or_default(),
            Duration::from_millis(config.timeout_ms),
        )
    }

    pub fn with_timeout(
        base_url: &str,
        user_id: &str,
        authorization: &str,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.into(),
            authorization: authorization.into(),
        })
    }

    /// List the user's saved templates.
    pub fn list(&self) -> Result<Vec<CustomTemplate>, RemoteError> {
        let url = format!("{}/api/templates/custom?user_id={}", self.base_url, self.user_id);
        let response = self
            .client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .send()?;
        let response = check_status(response)?;
        let body: ListResponse = response.json()?;
        Ok(body.templates)
    }

    /// Save a style summary under a name.
    pub fn create(
        &self,
        name: &str,
        description: &str,
        template_data: &TemplateData,
    ) -> Result<CustomTemplate, RemoteError> {
        let url = format!("{}/api/templates/custom", self.base_url);
        let request = CreateRequest { user_id: &self.user_id, name, description, template_data };
        let response = self
            .client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .json(&request)
            .send()?;
        let response = check_status(response)?;
        let body: CreateResponse = response.json()?;
        Ok(body.template)
    }

    /// Delete a saved template.
    pub fn delete(&self, template_id: &str) -> Result<(), RemoteError> {
        let url =
            format!("{}/api/templates/custom/{}?user_id={}", self.base_url, template_id, self.user_id);
        let response = self
            .client
            .delete(url)
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .send()?;
        check_status(response)?;
        Ok(())
    }
}

fn check_status(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, RemoteError> {
    let status = response.status();
    if status.is_success() { Ok(response) } else { Err(RemoteError::Status(status.as_u16())) }
}

/// The photo source a search result came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoSource {
    Unsplash,
    Pexels,
    Pixabay,
}

/// A stock photo search result, normalized across providers.
///
/// This record is the only stock-photo surface the core knows about; the
/// provider-specific search calls live outside the crate.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StockPhoto {
    pub id: String,
    pub url: String,
    pub thumb: String,
    pub photographer: String,
    pub source: PhotoSource,
}
