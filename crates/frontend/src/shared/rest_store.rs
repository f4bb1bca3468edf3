use std::marker::PhantomData;

use async_trait::async_trait;
use browser::{BrowserConfig, BrowserError, FacetSource, ResourceQuery, ResourceStore};
use contracts::{FacetOption, ListPage, ServerErrorBody};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::api_utils::api_url;

/// REST adapter behind a browser instance.
///
/// Issues the browser's query verbatim — `page`, `per_page`, `search`,
/// `archived` and one parameter per facet — and unwraps the
/// `{"<resourceKey>": [...], "pages": n}` envelope of the list endpoint.
pub struct RestStore<R> {
    endpoint: String,
    resource_key: &'static str,
    _marker: PhantomData<R>,
}

impl<R> RestStore<R> {
    pub fn new(config: &BrowserConfig) -> Self {
        Self {
            endpoint: api_url(config.endpoint),
            resource_key: config.resource_key,
            _marker: PhantomData,
        }
    }

    fn list_url(&self, query: &ResourceQuery) -> String {
        let mut url = format!(
            "{}?page={}&per_page={}&search={}&archived={}",
            self.endpoint,
            query.page,
            query.page_size,
            urlencoding::encode(&query.search_term),
            query.archived,
        );
        for (key, value) in &query.facets {
            url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
        }
        url
    }
}

fn network(err: gloo_net::Error) -> BrowserError {
    BrowserError::Network(err.to_string())
}

/// Turn a non-success mutation response into a `Server` error, preferring
/// the `{"error": "..."}` message when the body carries one.
async fn server_error(response: Response) -> BrowserError {
    let status = response.status();
    match response.json::<ServerErrorBody>().await {
        Ok(body) => BrowserError::Server(body.error),
        Err(_) => BrowserError::Server(format!("HTTP {status}")),
    }
}

#[async_trait(?Send)]
impl<R: DeserializeOwned + 'static> ResourceStore<R> for RestStore<R> {
    async fn fetch_page(&self, query: &ResourceQuery) -> Result<ListPage<R>, BrowserError> {
        let response = Request::get(&self.list_url(query))
            .send()
            .await
            .map_err(network)?;
        if !response.ok() {
            return Err(BrowserError::Network(format!("HTTP {}", response.status())));
        }
        let body: Value = response.json().await.map_err(network)?;
        let records = match body.get(self.resource_key) {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| BrowserError::Network(format!("malformed response: {e}")))?,
            None => Vec::new(),
        };
        let pages = body.get("pages").and_then(Value::as_u64).unwrap_or(0) as u32;
        Ok(ListPage { records, pages })
    }

    async fn archive(&self, id: &str) -> Result<(), BrowserError> {
        let response = Request::put(&format!("{}/{}/arquivar", self.endpoint, id))
            .send()
            .await
            .map_err(network)?;
        if response.ok() {
            Ok(())
        } else {
            Err(server_error(response).await)
        }
    }

    async fn unarchive(&self, id: &str) -> Result<(), BrowserError> {
        let response = Request::put(&format!("{}/{}/desarquivar", self.endpoint, id))
            .send()
            .await
            .map_err(network)?;
        if response.ok() {
            Ok(())
        } else {
            Err(server_error(response).await)
        }
    }

    async fn delete(&self, id: &str) -> Result<(), BrowserError> {
        let response = Request::delete(&format!("{}/{}", self.endpoint, id))
            .send()
            .await
            .map_err(network)?;
        if response.ok() {
            Ok(())
        } else {
            Err(server_error(response).await)
        }
    }

    async fn save(&self, id: Option<&str>, fields: &Value) -> Result<Value, BrowserError> {
        save_fields(&self.endpoint, id, fields).await
    }
}

/// Create (`id == None`) or update a record from a field map. Forms call
/// this directly; the store trait delegates here.
pub async fn save_fields(
    endpoint: &str,
    id: Option<&str>,
    fields: &Value,
) -> Result<Value, BrowserError> {
    let builder = match id {
        Some(id) => Request::put(&format!("{endpoint}/{id}")),
        None => Request::post(endpoint),
    };
    let response = builder
        .json(fields)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    if response.ok() {
        response.json().await.map_err(network)
    } else {
        Err(server_error(response).await)
    }
}

/// Load the selectable options for one facet.
pub async fn fetch_facet_options(source: &FacetSource) -> Result<Vec<FacetOption>, BrowserError> {
    match source {
        FacetSource::Static(options) => Ok(options.clone()),
        FacetSource::Remote {
            endpoint,
            list_key,
            kind,
        } => {
            let mut url = api_url(endpoint);
            if let Some(kind) = kind {
                url.push_str(&format!("?kind={kind}"));
            }
            let response = Request::get(&url).send().await.map_err(network)?;
            if !response.ok() {
                return Err(BrowserError::Network(format!("HTTP {}", response.status())));
            }
            let body: Value = response.json().await.map_err(network)?;
            let options = body
                .get(*list_key)
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(FacetOption::from_value).collect())
                .unwrap_or_default();
            Ok(options)
        }
    }
}
