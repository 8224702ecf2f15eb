use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::core::{InterestSeries, TrendPoint};
use crate::error::{Result, TrendRankError};
use crate::providers::TrendProvider;

/// Google Trends category for MMOs
pub const MMO_CATEGORY: u32 = 935;

/// Default comparison window: the last three months
pub const DEFAULT_TIMEFRAME: &str = "today 3-m";

const API_BASE: &str = "https://trends.google.com/trends/api";
const HOST_LANGUAGE: &str = "en-US";
const TIMEZONE_OFFSET: i32 = 360;

/// Google Trends provider
///
/// Talks the same two-step protocol the official frontend does: an explore
/// request that hands back per-widget tokens, then a widgetdata request for
/// the interest-over-time series resolved with the TIMESERIES token.
pub struct GoogleTrendsProvider {
    client: Client,
    category: u32,
    timeframe: String,
}

#[derive(Debug, Deserialize)]
struct ExploreResponse {
    widgets: Vec<Widget>,
}

#[derive(Debug, Deserialize)]
struct Widget {
    id: String,
    #[serde(default)]
    token: String,
    #[serde(default)]
    request: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct MultilineResponse {
    default: TimelineBlock,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelineBlock {
    #[serde(default)]
    timeline_data: Vec<TimelinePoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelinePoint {
    /// Unix seconds, as a decimal string
    time: String,
    #[serde(default)]
    value: Vec<f64>,
}

impl GoogleTrendsProvider {
    /// Create new provider with the MMO category and three-month window
    pub fn new() -> Self {
        Self::with_config(MMO_CATEGORY, DEFAULT_TIMEFRAME)
    }

    /// Create a provider for a specific category and timeframe
    pub fn with_config(category: u32, timeframe: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            category,
            timeframe: timeframe.into(),
        }
    }

    /// Fetch a raw API body, mapping throttling to its own error
    async fn get_api_body(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TrendRankError::Provider {
                provider: "google-trends".to_string(),
                message: format!("Request failed: {}", e),
            })?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TrendRankError::Throttled("google-trends".to_string()));
        }

        if !response.status().is_success() {
            return Err(TrendRankError::Provider {
                provider: "google-trends".to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        response.text().await.map_err(|e| TrendRankError::Provider {
            provider: "google-trends".to_string(),
            message: format!("Failed to read body: {}", e),
        })
    }

    /// Resolve the TIMESERIES widget (token + inner request) for a batch
    async fn explore(&self, names: &[String]) -> Result<Widget> {
        let comparison_items: Vec<serde_json::Value> = names
            .iter()
            .map(|name| {
                json!({
                    "keyword": name,
                    "geo": "",
                    "time": self.timeframe,
                })
            })
            .collect();

        let req = json!({
            "comparisonItem": comparison_items,
            "category": self.category,
            "property": "",
        });

        let url = format!(
            "{}/explore?hl={}&tz={}&req={}",
            API_BASE,
            HOST_LANGUAGE,
            TIMEZONE_OFFSET,
            urlencoding::encode(&req.to_string())
        );

        let body = self.get_api_body(&url).await?;

        let explore: ExploreResponse = serde_json::from_str(strip_antijson_prefix(&body))
            .map_err(|e| TrendRankError::Provider {
                provider: "google-trends".to_string(),
                message: format!("Invalid explore JSON: {}", e),
            })?;

        explore
            .widgets
            .into_iter()
            .find(|w| w.id == "TIMESERIES")
            .ok_or_else(|| TrendRankError::Provider {
                provider: "google-trends".to_string(),
                message: "No TIMESERIES widget in explore response".to_string(),
            })
    }

    /// Fetch the multiline series behind a resolved widget
    async fn widget_timeline(&self, widget: &Widget) -> Result<Vec<TimelinePoint>> {
        let url = format!(
            "{}/widgetdata/multiline?hl={}&tz={}&req={}&token={}",
            API_BASE,
            HOST_LANGUAGE,
            TIMEZONE_OFFSET,
            urlencoding::encode(&widget.request.to_string()),
            urlencoding::encode(&widget.token)
        );

        let body = self.get_api_body(&url).await?;

        let multiline: MultilineResponse = serde_json::from_str(strip_antijson_prefix(&body))
            .map_err(|e| TrendRankError::Provider {
                provider: "google-trends".to_string(),
                message: format!("Invalid widgetdata JSON: {}", e),
            })?;

        Ok(multiline.default.timeline_data)
    }
}

impl Default for GoogleTrendsProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip the `)]}'` anti-hijacking prefix Google puts before API JSON
fn strip_antijson_prefix(body: &str) -> &str {
    match body.find(['{', '[']) {
        Some(idx) => &body[idx..],
        None => body,
    }
}

#[async_trait]
impl TrendProvider for GoogleTrendsProvider {
    async fn interest_over_time(&self, names: &[String]) -> Result<HashMap<String, InterestSeries>> {
        let widget = self.explore(names).await?;
        let timeline = self.widget_timeline(&widget).await?;

        let mut result: HashMap<String, InterestSeries> = HashMap::new();

        for (idx, name) in names.iter().enumerate() {
            // Column order matches the comparison-item order of the request.
            // A name the provider dropped has no column at all.
            let mut series = InterestSeries::new(name.clone());
            for point in &timeline {
                let Some(&value) = point.value.get(idx) else {
                    continue;
                };
                let secs: i64 = point.time.parse().unwrap_or(0);
                if let Some(time) = DateTime::from_timestamp(secs, 0) {
                    series.points.push(TrendPoint::new(time, value));
                }
            }

            if !series.is_empty() {
                result.insert(name.clone(), series);
            } else {
                tracing::warn!("Google Trends returned no data for '{}'", name);
            }
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "google-trends"
    }

    async fn is_available(&self) -> bool {
        // Resolve a widget for a keyword that always has data
        self.explore(&["RuneScape".to_string()]).await.is_ok()
    }
}
