//! Rust client for the skincare fridge API.
//!
//! Thin wrapper over `reqwest` with typed methods for the routine endpoints.
//! Rules come back raw from [`FridgeClient::rules`]; [`FridgeClient::issues`]
//! returns them deduplicated and ready to display.
//!
//! # Example
//! ```rust,no_run
//! use fridge_client::{ClientConfig, FridgeClient};
//! use fridge_core::DayContext;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = FridgeClient::new(
//!         ClientConfig::new().with_api_url("http://localhost:8000"),
//!     )?;
//!
//!     let issues = client.issues(DayContext::AM).await?;
//!     println!("{} issues", issues.issue_count());
//!     Ok(())
//! }
//! ```
mod config;

pub use config::ClientConfig;

use anyhow::Context;
use async_trait::async_trait;
use fridge_core::{
    dedupe, AddProductOutcome, DayContext, FridgeError, IssueSet, Product, ProductRef, Rating,
    RulesSource, TagGlossary,
};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

/// Message the API answers with when a product is already in the routine.
const ALREADY_TRACKED: &str = "Product already in user's products list";

/// Shown when the API has no skin type on record.
pub const UNSPECIFIED_SKIN_TYPE: &str = "Not Specified";

#[derive(Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct RatingBody {
    #[serde(default)]
    rating: Option<Rating>,
}

#[derive(Deserialize)]
struct SkinTypeBody {
    #[serde(default)]
    skin_type: Option<String>,
}

/// Products and issues of one routine, fetched side by side.
///
/// Each half fails independently.
#[derive(Debug)]
pub struct RoutineSnapshot {
    pub day: DayContext,
    pub products: anyhow::Result<Vec<Product>>,
    pub issues: anyhow::Result<IssueSet>,
}

/// A client for one fridge API deployment.
#[derive(Debug, Clone)]
pub struct FridgeClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl FridgeClient {
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn api(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }

    fn product_path(day: DayContext, id: &ProductRef) -> String {
        format!("/{}/products/{}", day, urlencoding::encode(&id.to_string()))
    }

    /// Send a request and turn non-2xx statuses into errors.
    async fn send(
        &self,
        method: Method,
        url: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> anyhow::Result<Response> {
        debug!("{} {}", method, url);
        let resp = build(self.http.request(method.clone(), url))
            .send()
            .await
            .with_context(|| format!("HTTP request failed: {} {}", method, url))?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("{} {} returned {}", method, url, status);
        }
        Ok(resp)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> anyhow::Result<T> {
        let resp = self.send(Method::GET, url, |r| r).await?;
        resp.json::<T>()
            .await
            .with_context(|| format!("unexpected response body from {}", url))
    }

    /// Raw rules for a routine, exactly as the API reports them.
    pub async fn rules(&self, day: DayContext) -> anyhow::Result<IssueSet> {
        self.get_json(&self.api(&format!("/{}/rules/", day))).await
    }

    /// Rules for a routine with avoid-conflicts deduplicated.
    pub async fn issues(&self, day: DayContext) -> anyhow::Result<IssueSet> {
        Ok(dedupe(self.rules(day).await?))
    }

    pub async fn products(&self, day: DayContext) -> anyhow::Result<Vec<Product>> {
        self.get_json(&self.api(&format!("/{}/products/", day))).await
    }

    /// Fetch products and issues concurrently.
    pub async fn snapshot(&self, day: DayContext) -> RoutineSnapshot {
        let (products, issues) = futures::join!(self.products(day), self.issues(day));
        if let Err(e) = &products {
            warn!("Error fetching products: {:#}", e);
        }
        if let Err(e) = &issues {
            warn!("Error fetching rules: {:#}", e);
        }
        RoutineSnapshot {
            day,
            products,
            issues,
        }
    }

    /// Add a product to a routine by free-text name.
    pub async fn add_product(
        &self,
        day: DayContext,
        query: &str,
    ) -> anyhow::Result<AddProductOutcome> {
        let query = query.trim();
        if query.is_empty() {
            anyhow::bail!("Please enter a product name.");
        }

        let url = self.api(&format!("/{}/products/", day));
        let resp = self
            .send(Method::POST, &url, |r| r.json(&json!({ "user_input": query })))
            .await
            .with_context(|| {
                format!("could not add '{}'; it may not exist in the product database", query)
            })?;

        let body: MessageBody = resp
            .json()
            .await
            .with_context(|| format!("unexpected response body from {}", url))?;
        match body.message.as_deref() {
            Some(ALREADY_TRACKED) => Ok(AddProductOutcome::AlreadyTracked),
            _ => Ok(AddProductOutcome::Added),
        }
    }

    pub async fn delete_product(&self, day: DayContext, id: &ProductRef) -> anyhow::Result<()> {
        let url = self.api(&format!("{}/", Self::product_path(day, id)));
        self.send(Method::DELETE, &url, |r| r).await?;
        Ok(())
    }

    /// The user's rating for a product. Unrated products read as zero stars.
    pub async fn rating(&self, day: DayContext, id: &ProductRef) -> anyhow::Result<Rating> {
        let url = self.api(&format!("{}/rating", Self::product_path(day, id)));
        let body: RatingBody = self.get_json(&url).await?;
        Ok(body.rating.unwrap_or_default())
    }

    pub async fn set_rating(
        &self,
        day: DayContext,
        id: &ProductRef,
        rating: Rating,
    ) -> anyhow::Result<()> {
        let url = self.api(&format!("{}/{}", Self::product_path(day, id), rating.stars()));
        self.send(Method::PATCH, &url, |r| r.json(&json!({ "rating": rating.stars() })))
            .await?;
        Ok(())
    }

    pub async fn skin_type(&self) -> anyhow::Result<String> {
        let body: SkinTypeBody = self.get_json(&self.api("/skintype")).await?;
        Ok(body
            .skin_type
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNSPECIFIED_SKIN_TYPE.to_string()))
    }

    pub async fn set_skin_type(&self, skin_type: &str) -> anyhow::Result<()> {
        let skin_type = skin_type.trim();
        if skin_type.is_empty() {
            anyhow::bail!("skin type must not be empty");
        }
        let url = self.api(&format!("/{}/", urlencoding::encode(skin_type)));
        self.send(Method::POST, &url, |r| r.json(&json!({ "skinType": skin_type })))
            .await?;
        Ok(())
    }

    /// The static tag glossary served by the frontend.
    pub async fn tag_glossary(&self) -> anyhow::Result<TagGlossary> {
        let url = format!("{}/data/tags.json", self.config.frontend_url);
        self.get_json(&url).await
    }
}

#[async_trait]
impl RulesSource for FridgeClient {
    fn name(&self) -> &str {
        &self.config.api_url
    }

    async fn fetch_rules(&self, day: DayContext) -> fridge_core::Result<IssueSet> {
        self.rules(day)
            .await
            .map_err(|e| FridgeError::Source(format!("{:#}", e)))
    }

    async fn fetch_glossary(&self) -> fridge_core::Result<TagGlossary> {
        self.tag_glossary()
            .await
            .map_err(|e| FridgeError::Source(format!("{:#}", e)))
    }
}
