//! HTTP client for the content service REST API

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use shared::{RawRecord, SelectQuery};

use crate::{ClientConfig, ClientError, ClientResult, ContentSource};

/// One page of a list response
#[derive(Debug, Deserialize)]
struct ListPage {
    #[serde(default)]
    records: Vec<RawRecord>,
    /// Cursor for the next page; absent on the last one
    offset: Option<String>,
}

/// HTTP client listing records from the content service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_key: String,
    base_id: String,
    page_size: u32,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let (Some(api_key), Some(base_id)) = (config.api_key.clone(), config.base_id.clone()) else {
            return Err(ClientError::Unconfigured);
        };
        if !config.is_configured() {
            return Err(ClientError::Unconfigured);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
            base_id,
            page_size: config.page_size,
        })
    }

    /// `{base_url}/{base_id}/{table}`, with the table name path-encoded
    fn table_url(&self, table: &str) -> ClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidResponse(format!("invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidResponse("base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push(&self.base_id)
            .push(table);
        Ok(url)
    }

    /// Fetch a single page
    async fn list_page(&self, query: &SelectQuery, offset: Option<&str>) -> ClientResult<ListPage> {
        let url = self.table_url(&query.table)?;
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .query(&query_params(query, self.page_size, offset))
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response(response: reqwest::Response) -> ClientResult<ListPage> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::TOO_MANY_REQUESTS => Err(ClientError::RateLimited),
                _ => Err(ClientError::Api {
                    status: status.as_u16(),
                    message: text,
                }),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl ContentSource for HttpClient {
    /// Follow the offset cursor until every page is read
    async fn select(&self, query: &SelectQuery) -> ClientResult<Vec<RawRecord>> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let page = self.list_page(query, offset.as_deref()).await?;
            tracing::debug!(
                table = %query.table,
                count = page.records.len(),
                more = page.offset.is_some(),
                "Fetched page"
            );
            records.extend(page.records);

            match page.offset {
                Some(next) if offset.as_deref() != Some(next.as_str()) => offset = Some(next),
                Some(next) => {
                    return Err(ClientError::InvalidResponse(format!(
                        "pagination cursor '{}' repeated for table {}",
                        next, query.table
                    )));
                }
                None => break,
            }
        }

        Ok(records)
    }
}

/// Query-string parameters for one list request
fn query_params(query: &SelectQuery, page_size: u32, offset: Option<&str>) -> Vec<(String, String)> {
    let mut params = Vec::new();

    if let Some(filter) = &query.filter {
        params.push(("filterByFormula".to_string(), filter.formula()));
    }
    for (i, sort) in query.sort.iter().enumerate() {
        params.push((format!("sort[{}][field]", i), sort.field.clone()));
        params.push((format!("sort[{}][direction]", i), sort.direction.as_str().to_string()));
    }
    if let Some(view) = &query.view {
        params.push(("view".to_string(), view.clone()));
    }
    params.push(("pageSize".to_string(), page_size.to_string()));
    if let Some(offset) = offset {
        params.push(("offset".to_string(), offset.to_string()));
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpClient {
        let config = ClientConfig::new()
            .with_base_url("https://api.example.com/v0/")
            .with_credentials("key", "appBase");
        HttpClient::new(&config).unwrap()
    }

    #[test]
    fn test_requires_credentials() {
        let err = HttpClient::new(&ClientConfig::new()).unwrap_err();
        assert!(matches!(err, ClientError::Unconfigured));
    }

    #[test]
    fn test_table_url_encodes_name() {
        let url = client().table_url("Restaurant Ambiance").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v0/appBase/Restaurant%20Ambiance"
        );
    }

    #[test]
    fn test_query_params() {
        let query = SelectQuery::table("Locations")
            .where_true("Is_Active")
            .order_by_asc("Display_Order")
            .view("Grid view");

        let params = query_params(&query, 50, Some("itrNext"));
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("filterByFormula"), Some("{Is_Active} = TRUE()"));
        assert_eq!(get("sort[0][field]"), Some("Display_Order"));
        assert_eq!(get("sort[0][direction]"), Some("asc"));
        assert_eq!(get("view"), Some("Grid view"));
        assert_eq!(get("pageSize"), Some("50"));
        assert_eq!(get("offset"), Some("itrNext"));
    }

    #[test]
    fn test_query_params_minimal() {
        let params = query_params(&SelectQuery::table("Menu_Items"), 100, None);
        assert_eq!(params, vec![("pageSize".to_string(), "100".to_string())]);
    }

    #[test]
    fn test_list_page_decodes() {
        let page: ListPage = serde_json::from_str(
            r#"{"records":[{"id":"rec1","createdTime":"2024-01-01T00:00:00.000Z","fields":{"Name":"Kulfi"}}],"offset":"itr1"}"#,
        )
        .unwrap();
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.offset.as_deref(), Some("itr1"));
    }

    /// Serve canned `(status, body)` responses, one connection each; yields
    /// the request lines seen
    async fn serve(responses: Vec<(u16, &'static str)>) -> (String, tokio::task::JoinHandle<Vec<String>>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/v0", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let mut seen = Vec::new();
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = socket.read(&mut buf).await.unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                let request = String::from_utf8_lossy(&request).to_string();
                seen.push(request.lines().next().unwrap_or_default().to_string());

                let response = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
            }
            seen
        });

        (base_url, handle)
    }

    fn local_client(base_url: &str) -> HttpClient {
        let config = ClientConfig::new()
            .with_base_url(base_url)
            .with_credentials("key", "appBase");
        HttpClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_select_follows_offset_pages() {
        let (base_url, server) = serve(vec![
            (200, r#"{"records":[{"id":"rec1","fields":{"Name":"Kulfi"}}],"offset":"itr1"}"#),
            (200, r#"{"records":[{"id":"rec2","fields":{"Name":"Payasam"}}]}"#),
        ])
        .await;

        let records = local_client(&base_url)
            .select(&SelectQuery::table("Menu_Items"))
            .await
            .unwrap();

        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["rec1", "rec2"]);

        let requests = server.await.unwrap();
        assert!(requests[0].starts_with("GET /v0/appBase/Menu_Items?pageSize=100 "));
        assert!(requests[1].contains("offset=itr1"));
    }

    #[tokio::test]
    async fn test_select_maps_status_and_bad_body() {
        let (base_url, _server) = serve(vec![
            (401, r#"{"error":"AUTHENTICATION_REQUIRED"}"#),
            (200, "not json"),
        ])
        .await;
        let client = local_client(&base_url);
        let query = SelectQuery::table("Locations");

        let err = client.select(&query).await.unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized));

        let err = client.select(&query).await.unwrap_err();
        assert!(matches!(err, ClientError::Http(ref e) if e.is_decode()), "{err:?}");
    }
}
