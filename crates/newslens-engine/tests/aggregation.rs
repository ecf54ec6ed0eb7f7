//! End-to-end checks of the aggregation pipeline on small fixed datasets.

use chrono::NaiveDate;
use newslens_core::{Article, Genre};
use newslens_engine::{
    country_rollup, filter_articles, genre_pivot, pick_random_article, sentiment_totals,
    EngineError, FilterSelection, SentimentTotals,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn article(
    title: &str,
    country: &str,
    key: &str,
    scrape_date: NaiveDate,
    positive: bool,
    genres: Vec<Genre>,
) -> Article {
    Article {
        title: title.to_string(),
        newspaper: "Test Daily".to_string(),
        country: country.to_string(),
        country_key: key.to_string(),
        scrape_date,
        link: format!("https://example.com/{title}"),
        positive,
        genres,
    }
}

/// Three Argentina articles on one day: A positive tech, B negative
/// tech+sports, C positive with no genre.
fn argentina_day() -> Vec<Article> {
    let d = date(2024, 1, 1);
    vec![
        article("A", "Argentina", "ARG", d, true, vec![Genre::Tech]),
        article(
            "B",
            "Argentina",
            "ARG",
            d,
            false,
            vec![Genre::Tech, Genre::Sports],
        ),
        article("C", "Argentina", "ARG", d, true, vec![]),
    ]
}

#[test]
fn argentina_scenario_filters_all_three_articles() {
    let dataset = argentina_day();
    let matched = filter_articles(&dataset, date(2024, 1, 1), "Argentina");
    let titles: Vec<&str> = matched.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[test]
fn argentina_scenario_totals_and_pivot() {
    let dataset = argentina_day();
    let matched = filter_articles(&dataset, date(2024, 1, 1), "Argentina");

    assert_eq!(
        sentiment_totals(&matched),
        SentimentTotals {
            positive: 2,
            negative: 1
        }
    );

    let pivot = genre_pivot(&matched);
    for (i, genre) in pivot.genres.iter().enumerate() {
        let expected = match genre {
            Genre::Tech => (1, 1),
            Genre::Sports => (1, 0),
            _ => (0, 0),
        };
        assert_eq!(
            (pivot.negative[i], pivot.positive[i]),
            expected,
            "unexpected counts for {genre}"
        );
    }
}

#[test]
fn unmatched_filter_yields_zero_counts_everywhere() {
    let dataset = argentina_day();
    let matched = filter_articles(&dataset, date(2024, 1, 2), "Argentina");
    assert!(matched.is_empty());

    let pivot = genre_pivot(&matched);
    assert!(pivot.negative.iter().all(|&n| n == 0));
    assert!(pivot.positive.iter().all(|&n| n == 0));
    assert_eq!(
        sentiment_totals(&matched),
        SentimentTotals {
            positive: 0,
            negative: 0
        }
    );
}

#[test]
fn rollup_is_computed_over_the_whole_dataset_not_the_filtered_view() {
    let mut dataset = argentina_day();
    dataset.push(article(
        "D",
        "Brazil",
        "BRA",
        date(2024, 1, 2),
        false,
        vec![Genre::War],
    ));

    let rollup = country_rollup(&dataset);
    assert_eq!(rollup.len(), 2);

    let argentina = &rollup[0];
    assert_eq!(argentina.country, "Argentina");
    assert_eq!(argentina.country_key, "ARG");
    assert_eq!(argentina.total_news, 3);
    assert_eq!(argentina.positive_count, 2);
    assert_eq!(argentina.negative_count, 1);
    assert_eq!(argentina.positivity_rate_per100, Some(67));

    let brazil = &rollup[1];
    assert_eq!(brazil.total_news, 1);
    assert_eq!(brazil.positivity_rate, Some(0.0));

    let total: u64 = rollup.iter().map(|r| r.total_news).sum();
    assert_eq!(total, dataset.len() as u64);
}

#[test]
fn pivot_flag_sum_matches_bits_set_not_article_count() {
    let dataset = argentina_day();
    let matched = filter_articles(&dataset, date(2024, 1, 1), "Argentina");
    let pivot = genre_pivot(&matched);

    let pivot_sum: u64 =
        pivot.negative.iter().sum::<u64>() + pivot.positive.iter().sum::<u64>();
    let bits_set: usize = matched.iter().map(|a| a.genres.len()).sum();
    assert_eq!(pivot_sum, bits_set as u64);
    assert_eq!(pivot_sum, 3); // A:1 + B:2 + C:0
}

#[test]
fn partial_selection_never_reaches_the_pivot() {
    let selection = FilterSelection::new(None, Some("Argentina".to_string()));
    assert!(selection.selection().is_none());
}

#[test]
fn random_pick_on_empty_dataset_is_an_error_not_a_panic() {
    assert_eq!(pick_random_article(&[]), Err(EngineError::EmptyDataset));
}

#[test]
fn derived_summaries_serialize_to_row_oriented_json() {
    let dataset = argentina_day();
    let rollup = country_rollup(&dataset);
    let json: serde_json::Value = serde_json::to_value(&rollup).expect("serialize rollup");
    assert_eq!(json[0]["country"], "Argentina");
    assert_eq!(json[0]["total_news"], 3);
    assert_eq!(json[0]["positivity_rate_per100"], 67);

    let pivot = genre_pivot(&dataset);
    let json: serde_json::Value = serde_json::to_value(&pivot).expect("serialize pivot");
    assert_eq!(json["genres"].as_array().map(Vec::len), Some(12));
}
