use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five fixed news categories the UI can browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NewsCategory {
    SustainableTech,
    GreenEnergy,
    ClimateSolutions,
    EcoInnovations,
    EnvironmentalPolicy,
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 5] = [
        NewsCategory::SustainableTech,
        NewsCategory::GreenEnergy,
        NewsCategory::ClimateSolutions,
        NewsCategory::EcoInnovations,
        NewsCategory::EnvironmentalPolicy,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            NewsCategory::SustainableTech => "sustainable-tech",
            NewsCategory::GreenEnergy => "green-energy",
            NewsCategory::ClimateSolutions => "climate-solutions",
            NewsCategory::EcoInnovations => "eco-innovations",
            NewsCategory::EnvironmentalPolicy => "environmental-policy",
        }
    }

    /// Human-readable name used inside prompts and page headings.
    pub fn display_name(&self) -> &'static str {
        match self {
            NewsCategory::SustainableTech => "Sustainable Technology",
            NewsCategory::GreenEnergy => "Green Energy",
            NewsCategory::ClimateSolutions => "Climate Solutions",
            NewsCategory::EcoInnovations => "Eco-Innovations",
            NewsCategory::EnvironmentalPolicy => "Environmental Policy",
        }
    }
}

impl Default for NewsCategory {
    fn default() -> Self {
        NewsCategory::SustainableTech
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for NewsCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NewsCategory::ALL
            .iter()
            .find(|c| c.slug() == s)
            .copied()
            .ok_or(())
    }
}

/// An AI-generated headline. Never persisted; `full_content` is filled in
/// lazily when the reader opens the item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub headline: String,
    pub summary: String,
    pub category: NewsCategory,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    #[serde(rename = "fullContent")]
    pub full_content: Option<String>,
}

impl NewsItem {
    /// Build a fresh item from parsed headline fields. The id encodes the
    /// category, generation time and position in the batch; the published
    /// date is synthetic, somewhere in the last two weeks.
    pub fn new(category: NewsCategory, ordinal: usize, headline: String, summary: String) -> Self {
        let now = Utc::now();
        let offset_secs = rand::thread_rng().gen_range(0..14 * 24 * 60 * 60);
        NewsItem {
            id: format!("{}-{}-{}", category.slug(), now.timestamp_millis(), ordinal),
            headline,
            summary,
            category,
            published_at: now - Duration::seconds(offset_secs),
            full_content: None,
        }
    }
}

/// One question/answer turn tied to the article the reader currently has open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaExchange {
    pub question: String,
    pub answer: String,
    pub timestamp: DateTime<Utc>,
}
