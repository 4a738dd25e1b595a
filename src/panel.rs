//! The recipe panel controller.
//!
//! Two operations, both rendering into the injected viewer surface:
//! showing a recipe partial and deleting a recipe. Every invocation ends in
//! exactly one overwrite of the surface; callers never see an error.
//! Overlapping invocations are not serialized, so whichever response
//! arrives last owns the surface.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, COOKIE};
use reqwest::Method;

use crate::config::PanelConfig;
use crate::error::PanelError;
use crate::messages::Messages;
use crate::recipe::{RecipeApi, RecipeId};
use crate::reload::{schedule_reload, PageReloader};
use crate::surface::ViewerSurface;

/// Result of a single HTTP call, consumed by the render step.
///
/// Status codes, transport errors and unreadable bodies all collapse into
/// `Failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success(String),
    Failure,
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success(_))
    }
}

/// Which branch an invocation rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    Success,
    Failure,
}

pub struct RecipePanel {
    client: reqwest::Client,
    api: RecipeApi,
    surface: Arc<dyn ViewerSurface>,
    reloader: Arc<dyn PageReloader>,
    messages: Messages,
    reload_delay: Duration,
    page_path: String,
    access_token: Option<String>,
}

impl RecipePanel {
    pub fn new(
        config: &PanelConfig,
        surface: Arc<dyn ViewerSurface>,
        reloader: Arc<dyn PageReloader>,
    ) -> Result<Self, PanelError> {
        let api = RecipeApi::new(&config.base_url)?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            api,
            surface,
            reloader,
            messages: config.messages.clone(),
            reload_delay: config.reload_delay(),
            page_path: config.page_path.clone(),
            access_token: config.access_token.clone(),
        })
    }

    /// Load the recipe's HTML partial into the viewer.
    ///
    /// Any 2xx response body is written verbatim; anything else writes the
    /// load-failure message.
    #[tracing::instrument(skip_all, fields(recipe_id = %id, viewer = self.surface.id()))]
    pub async fn fetch_and_render_recipe(&self, id: &RecipeId) -> Rendered {
        let outcome = self.send(Method::GET, self.api.partial_url(id)).await;
        match outcome {
            RequestOutcome::Success(fragment) => {
                self.surface.replace_content(&fragment);
                tracing::debug!(bytes = fragment.len(), "recipe rendered");
                Rendered::Success
            }
            RequestOutcome::Failure => {
                self.surface.replace_content(&self.messages.load_failed);
                Rendered::Failure
            }
        }
    }

    /// Delete the recipe, then reload the page after the configured delay.
    ///
    /// The reload only happens on success and cannot be called off once
    /// scheduled.
    #[tracing::instrument(skip_all, fields(recipe_id = %id, viewer = self.surface.id()))]
    pub async fn delete_recipe_and_reload(&self, id: &RecipeId) -> Rendered {
        let outcome = self.send(Method::DELETE, self.api.delete_url(id)).await;
        if outcome.is_success() {
            self.surface.replace_content(&self.messages.delete_succeeded);
            tracing::info!("recipe deleted");
            schedule_reload(self.reloader.clone(), self.reload_delay);
            Rendered::Success
        } else {
            self.surface.replace_content(&self.messages.delete_failed);
            Rendered::Failure
        }
    }

    /// Fetch the host page, as a reload would.
    pub async fn fetch_page(&self) -> RequestOutcome {
        self.send(Method::GET, self.api.page_url(&self.page_path)).await
    }

    async fn send(&self, method: Method, url: String) -> RequestOutcome {
        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(ACCEPT, mime::TEXT_HTML.as_ref());
        if let Some(token) = &self.access_token {
            request = request.header(COOKIE, format!("access_token={token}"));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%method, %url, error = %e, "request failed");
                return RequestOutcome::Failure;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%method, %url, %status, "request returned non-success status");
            return RequestOutcome::Failure;
        }

        match response.text().await {
            Ok(body) => RequestOutcome::Success(body),
            Err(e) => {
                tracing::warn!(%method, %url, error = %e, "reading response body failed");
                RequestOutcome::Failure
            }
        }
    }
}
