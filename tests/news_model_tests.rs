use std::str::FromStr;

use chrono::{Duration, Utc};
use greeniq_backend::models::news::{NewsCategory, NewsItem};

#[test]
fn category_slugs_round_trip() {
    for category in NewsCategory::ALL {
        assert_eq!(NewsCategory::from_str(category.slug()), Ok(category));
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, format!("\"{}\"", category.slug()));
        let back: NewsCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, category);
    }
}

#[test]
fn unknown_category_slug_is_rejected() {
    assert!(NewsCategory::from_str("crypto").is_err());
    assert_eq!(NewsCategory::default(), NewsCategory::SustainableTech);
}

#[test]
fn news_item_id_encodes_category_and_ordinal() {
    let item = NewsItem::new(
        NewsCategory::ClimateSolutions,
        3,
        "Headline".to_string(),
        "Summary".to_string(),
    );
    assert!(item.id.starts_with("climate-solutions-"));
    assert!(item.id.ends_with("-3"));
    assert!(item.full_content.is_none());
}

#[test]
fn published_date_falls_in_the_last_two_weeks() {
    let now = Utc::now();
    for i in 0..20 {
        let item = NewsItem::new(
            NewsCategory::EcoInnovations,
            i,
            "H".to_string(),
            "S".to_string(),
        );
        assert!(item.published_at <= now + Duration::seconds(1));
        assert!(item.published_at > now - Duration::days(14) - Duration::seconds(1));
    }
}
