// recipe.rs

use std::fmt;

use reqwest::Url;

use crate::error::PanelError;

/// Opaque recipe identifier as handed in by the caller.
///
/// Not validated or escaped: it lands in the resource path exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Resource paths of the remote recipe service.
#[derive(Debug, Clone)]
pub struct RecipeApi {
    base: String,
}

impl RecipeApi {
    /// Checks that `base_url` is an absolute http(s) URL and keeps it
    /// without a trailing slash.
    pub fn new(base_url: &str) -> Result<Self, PanelError> {
        let parsed = Url::parse(base_url).map_err(|e| PanelError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PanelError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET target returning the recipe's HTML partial.
    pub fn partial_url(&self, id: &RecipeId) -> String {
        format!("{}/api/recipe/get-partial/{}", self.base, id)
    }

    /// DELETE target for the recipe.
    pub fn delete_url(&self, id: &RecipeId) -> String {
        format!("{}/api/recipe/delete/{}", self.base, id)
    }

    /// Absolute URL of a page on the same host, used for reloads.
    pub fn page_url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_resource_paths_from_base() {
        let api = RecipeApi::new("http://localhost:8000/").unwrap();
        let id = RecipeId::from("42");
        assert_eq!(
            api.partial_url(&id),
            "http://localhost:8000/api/recipe/get-partial/42"
        );
        assert_eq!(api.delete_url(&id), "http://localhost:8000/api/recipe/delete/42");
        assert_eq!(api.page_url("/"), "http://localhost:8000/");
    }

    #[test]
    fn id_is_inserted_verbatim() {
        let api = RecipeApi::new("http://localhost:8000").unwrap();
        let id = RecipeId::from("abc-7_x");
        assert!(api.partial_url(&id).ends_with("/get-partial/abc-7_x"));
    }

    #[test]
    fn rejects_bad_base_urls() {
        assert!(matches!(
            RecipeApi::new("not a url"),
            Err(PanelError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            RecipeApi::new("ftp://example.org"),
            Err(PanelError::InvalidBaseUrl { .. })
        ));
    }
}
