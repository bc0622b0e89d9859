//! Apple CMS V10 provider: the `videolist` JSON search endpoint.
//!
//! Queries `{api_url}?ac=videolist&wd={query}` and maps the wire
//! records onto [`VideoItem`], stamping the provider's name and code
//! onto every item. The wire format is loose — `vod_id` arrives as a
//! number or a string depending on the site, optional fields come and
//! go — so deserialization is deliberately tolerant.

use serde::{Deserialize, Deserializer};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::ProviderTrait;
use crate::types::{ProviderSite, VideoItem};

/// One configured CMS V10 source.
pub struct CmsProvider {
    site: ProviderSite,
}

impl CmsProvider {
    /// Wrap a provider site entry.
    pub fn new(site: ProviderSite) -> Self {
        Self { site }
    }

    /// Build one provider per site configured in `config.providers`.
    pub fn from_config(config: &SearchConfig) -> Vec<CmsProvider> {
        config
            .providers
            .iter()
            .cloned()
            .map(CmsProvider::new)
            .collect()
    }

    /// The site entry backing this provider.
    pub fn site(&self) -> &ProviderSite {
        &self.site
    }
}

impl ProviderTrait for CmsProvider {
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<VideoItem>, SearchError> {
        tracing::trace!(provider = %self.site.code, "CMS search");

        http::jitter(config).await;
        let client = http::build_client(config)?;

        let mut endpoint = url::Url::parse(&self.site.api_url).map_err(|e| {
            SearchError::Config(format!("{}: invalid api_url: {e}", self.site.code))
        })?;
        endpoint
            .query_pairs_mut()
            .append_pair("ac", "videolist")
            .append_pair("wd", query);

        let response = client
            .get(endpoint)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| classify(&self.site.code, e))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("{}: HTTP error: {e}", self.site.code)))?;

        let body = response
            .text()
            .await
            .map_err(|e| classify(&self.site.code, e))?;

        tracing::trace!(provider = %self.site.code, bytes = body.len(), "CMS response received");

        parse_cms_response(&body, &self.site)
    }

    fn code(&self) -> &str {
        &self.site.code
    }

    fn name(&self) -> &str {
        &self.site.name
    }
}

/// Map a reqwest failure onto the crate taxonomy, keeping timeouts
/// distinct so the UI can show its dedicated message.
fn classify(code: &str, err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        SearchError::Timeout(format!("{code}: request timed out"))
    } else {
        SearchError::Http(format!("{code}: request failed: {err}"))
    }
}

#[derive(Debug, Deserialize)]
struct CmsResponse {
    #[serde(default)]
    list: Vec<CmsItem>,
}

#[derive(Debug, Deserialize)]
struct CmsItem {
    #[serde(default, deserialize_with = "string_or_number")]
    vod_id: String,
    #[serde(default)]
    vod_name: String,
    #[serde(default)]
    type_name: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    vod_year: Option<String>,
    #[serde(default)]
    vod_remarks: Option<String>,
    #[serde(default)]
    vod_pic: Option<String>,
}

/// Parse a CMS V10 `videolist` response body into stamped items.
///
/// Split out from the HTTP path for testability with canned payloads.
/// Records without a usable title are skipped rather than failing the
/// whole batch.
pub(crate) fn parse_cms_response(
    body: &str,
    site: &ProviderSite,
) -> Result<Vec<VideoItem>, SearchError> {
    let parsed: CmsResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("{}: invalid JSON: {e}", site.code)))?;

    let items = parsed
        .list
        .into_iter()
        .filter_map(|raw| {
            let title = raw.vod_name.trim().to_string();
            if title.is_empty() {
                return None;
            }
            Some(VideoItem {
                id: raw.vod_id,
                title,
                type_name: raw.type_name,
                year: none_if_blank(raw.vod_year),
                remarks: none_if_blank(raw.vod_remarks),
                cover_url: raw
                    .vod_pic
                    .filter(|pic| pic.starts_with("http")),
                source_name: site.name.clone(),
                source_code: site.code.clone(),
                api_url: Some(site.api_url.clone()),
            })
        })
        .collect::<Vec<_>>();

    tracing::debug!(provider = %site.code, count = items.len(), "CMS results parsed");
    Ok(items)
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// CMS sites disagree on whether ids and years are JSON numbers or
/// strings; accept both.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_site() -> ProviderSite {
        ProviderSite::new("test", "测试资源", "https://cms.example.com/api.php/provide/vod")
    }

    const MOCK_CMS_JSON: &str = r#"{
        "code": 1,
        "msg": "数据列表",
        "page": 1,
        "pagecount": 1,
        "total": 3,
        "list": [
            {
                "vod_id": 21,
                "vod_name": "流浪地球2",
                "type_name": "科幻片",
                "vod_year": 2023,
                "vod_remarks": "HD国语",
                "vod_pic": "https://img.example.com/21.jpg"
            },
            {
                "vod_id": "ab-99",
                "vod_name": "三体",
                "type_name": "国产剧",
                "vod_year": "2023",
                "vod_remarks": "更新至30集"
            },
            {
                "vod_id": 7,
                "vod_name": "狂飙",
                "type_name": "国产剧",
                "vod_pic": "/uploads/7.jpg"
            }
        ]
    }"#;

    #[test]
    fn parse_mock_json_returns_stamped_items() {
        let items = parse_cms_response(MOCK_CMS_JSON, &test_site()).expect("should parse");
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].id, "21");
        assert_eq!(items[0].title, "流浪地球2");
        assert_eq!(items[0].year.as_deref(), Some("2023"));
        assert_eq!(items[0].source_name, "测试资源");
        assert_eq!(items[0].source_code, "test");
        assert_eq!(
            items[0].api_url.as_deref(),
            Some("https://cms.example.com/api.php/provide/vod")
        );

        // String id preserved verbatim.
        assert_eq!(items[1].id, "ab-99");
        assert_eq!(items[1].remarks.as_deref(), Some("更新至30集"));
    }

    #[test]
    fn relative_cover_url_dropped() {
        let items = parse_cms_response(MOCK_CMS_JSON, &test_site()).expect("should parse");
        assert_eq!(
            items[0].cover_url.as_deref(),
            Some("https://img.example.com/21.jpg")
        );
        // "/uploads/7.jpg" is not absolute, so it is dropped.
        assert!(items[2].cover_url.is_none());
    }

    #[test]
    fn untitled_records_skipped() {
        let body = r#"{"list": [
            {"vod_id": 1, "vod_name": "  ", "type_name": "剧情片"},
            {"vod_id": 2, "vod_name": "有名字", "type_name": "剧情片"}
        ]}"#;
        let items = parse_cms_response(body, &test_site()).expect("should parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "有名字");
    }

    #[test]
    fn missing_list_field_yields_empty() {
        let items = parse_cms_response(r#"{"code": 1, "msg": "ok"}"#, &test_site())
            .expect("should parse");
        assert!(items.is_empty());
    }

    #[test]
    fn empty_list_yields_empty() {
        let items =
            parse_cms_response(r#"{"code": 1, "list": []}"#, &test_site()).expect("should parse");
        assert!(items.is_empty());
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let result = parse_cms_response("<html>gateway error</html>", &test_site());
        assert!(matches!(result, Err(SearchError::Parse(_))));
    }

    #[test]
    fn blank_optionals_become_none() {
        let body = r#"{"list": [
            {"vod_id": 1, "vod_name": "某片", "type_name": "剧情片", "vod_remarks": "   "}
        ]}"#;
        let items = parse_cms_response(body, &test_site()).expect("should parse");
        assert!(items[0].remarks.is_none());
        assert!(items[0].year.is_none());
    }

    #[test]
    fn provider_accessors_expose_site_identity() {
        let provider = CmsProvider::new(test_site());
        assert_eq!(provider.code(), "test");
        assert_eq!(provider.name(), "测试资源");
        assert_eq!(provider.site().api_url, test_site().api_url);
    }

    #[test]
    fn from_config_builds_one_provider_per_site() {
        let config = SearchConfig::default();
        let providers = CmsProvider::from_config(&config);
        assert_eq!(providers.len(), config.providers.len());
        assert_eq!(providers[0].code(), config.providers[0].code);
    }

    #[test]
    fn provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CmsProvider>();
    }
}
