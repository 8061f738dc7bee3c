use crate::error::{FridgeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a tracked product as it appears in API payloads.
///
/// The API sends either a numeric id or the product name. Both are kept in
/// the form received so pass-through data serialises back unchanged.
/// Integers order before names, which gives pairs a total order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
    Id(i64),
    Name(String),
}

impl fmt::Display for ProductRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductRef::Id(id) => write!(f, "{}", id),
            ProductRef::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for ProductRef {
    fn from(s: &str) -> Self {
        ProductRef::Name(s.to_string())
    }
}

impl From<String> for ProductRef {
    fn from(s: String) -> Self {
        ProductRef::Name(s)
    }
}

impl From<i64> for ProductRef {
    fn from(id: i64) -> Self {
        ProductRef::Id(id)
    }
}

/// Why a product pairing was flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Human-readable sentence. The last word names an effect category
    /// (e.g. "...breakouts").
    pub message: String,

    /// Primary ingredient or category flagged.
    pub tag: String,

    /// Effect-category words merged in from duplicate reports of the same
    /// conflict. Absent on raw API payloads.
    #[serde(
        rename = "additionalTags",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub additional_tags: Vec<String>,
}

impl Rule {
    pub fn new(tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tag: tag.into(),
            additional_tags: Vec::new(),
        }
    }
}

/// `comp` contains an ingredient tagged `rule.tag` that conflicts with `source`.
///
/// The pair is unordered: (A, B) and (B, A) describe the same conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvoidIssue {
    pub comp: ProductRef,
    pub source: ProductRef,
    pub rule: Rule,
}

impl AvoidIssue {
    pub fn new(comp: impl Into<ProductRef>, source: impl Into<ProductRef>, rule: Rule) -> Self {
        Self {
            comp: comp.into(),
            source: source.into(),
            rule,
        }
    }
}

/// A unary advisory tied to a single product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryIssue {
    pub source: ProductRef,
    pub rule: Rule,
}

impl AdvisoryIssue {
    pub fn new(source: impl Into<ProductRef>, rule: Rule) -> Self {
        Self {
            source: source.into(),
            rule,
        }
    }
}

/// "Use with" advisory.
pub type UseWithIssue = AdvisoryIssue;

/// "Use when" advisory.
pub type UseWhenIssue = AdvisoryIssue;

/// The three categories of issues for one day context.
///
/// Any key may be missing from the payload; missing keys read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSet {
    #[serde(default)]
    pub avoid: Vec<AvoidIssue>,
    #[serde(default)]
    pub usewith: Vec<UseWithIssue>,
    #[serde(default)]
    pub usewhen: Vec<UseWhenIssue>,
}

impl IssueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a rules payload as served by `GET /{day}/rules/`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of issues shown to the user.
    pub fn issue_count(&self) -> usize {
        self.avoid.len() + self.usewith.len() + self.usewhen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issue_count() == 0
    }
}

/// Morning or evening routine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayContext {
    #[default]
    AM,
    PM,
}

impl DayContext {
    pub fn as_str(self) -> &'static str {
        match self {
            DayContext::AM => "AM",
            DayContext::PM => "PM",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            DayContext::AM => DayContext::PM,
            DayContext::PM => DayContext::AM,
        }
    }
}

impl fmt::Display for DayContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayContext {
    type Err = FridgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(DayContext::AM),
            "PM" => Ok(DayContext::PM),
            _ => Err(FridgeError::InvalidDay(s.to_string())),
        }
    }
}

/// A product in the user's fridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductRef,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// A 0-5 star product rating. Zero means "not rated yet".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Result<Self> {
        if stars > Self::MAX {
            return Err(FridgeError::Validation(format!(
                "rating must be between 0 and {}, got {}",
                Self::MAX,
                stars
            )));
        }
        Ok(Self(stars))
    }

    pub fn stars(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "No Rating",
            1 => "Horrible",
            2 => "Poor",
            3 => "Ok",
            4 => "Good",
            _ => "Excellent",
        }
    }

    /// e.g. "1 Star, Horrible" or "4 Stars, Good".
    pub fn describe(self) -> String {
        let plural = if self.0 == 1 { "" } else { "s" };
        format!("{} Star{}, {}", self.0, plural, self.label())
    }
}

impl TryFrom<u8> for Rating {
    type Error = FridgeError;

    fn try_from(value: u8) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

/// Result of asking the API to add a product to a routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddProductOutcome {
    Added,
    /// The product was already in this routine.
    AlreadyTracked,
}
