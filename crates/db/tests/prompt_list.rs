//! Integration tests for the prompt list query: search, favorite filter and
//! ordering, alone and combined.

use std::collections::BTreeSet;

use promptbase_core::query::{FavoriteFilter, PromptQuery, SortField};
use promptbase_db::models::prompt::{CreatePrompt, Prompt};
use promptbase_db::repositories::PromptRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed(pool: &PgPool, rows: &[(&str, &str, bool)]) -> Vec<Prompt> {
    promptbase_db::bootstrap_schema(pool).await.unwrap();
    let mut created = Vec::new();
    for (title, body, is_favorite) in rows {
        let input = CreatePrompt {
            title: title.to_string(),
            prompt: body.to_string(),
            is_favorite: *is_favorite,
        };
        created.push(PromptRepo::create(pool, &input).await.unwrap());
    }
    created
}

fn query(search: &str, sort: SortField, descending: bool, favorites: FavoriteFilter) -> PromptQuery {
    PromptQuery {
        search: search.to_string(),
        sort,
        descending,
        favorites,
    }
}

async fn list_filtered(pool: &PgPool, favorites: FavoriteFilter) -> Vec<Prompt> {
    PromptRepo::list(pool, &query("", SortField::CreatedAt, true, favorites))
        .await
        .unwrap()
}

fn titles(prompts: &[Prompt]) -> Vec<&str> {
    prompts.iter().map(|p| p.title.as_str()).collect()
}

fn ids(prompts: &[Prompt]) -> BTreeSet<i64> {
    prompts.iter().map(|p| p.id).collect()
}

const MIXED: &[(&str, &str, bool)] = &[
    ("Haiku Prompt", "Write a haiku about rain", true),
    ("Limerick", "A limerick about a HAIKU poet", false),
    ("Essay outline", "Five paragraphs on rivers", true),
    ("Code review", "Review this diff for bugs", false),
];

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_scenario_haiku_favorites(pool: PgPool) {
    let created = seed(&pool, &[("Haiku Prompt", "Write a haiku about rain", true)]).await;

    let favorites = PromptRepo::list(
        &pool,
        &query("haiku", SortField::CreatedAt, true, FavoriteFilter::Favorites),
    )
    .await
    .unwrap();
    assert_eq!(favorites, created);

    let non_favorites = PromptRepo::list(
        &pool,
        &query("haiku", SortField::CreatedAt, true, FavoriteFilter::NonFavorites),
    )
    .await
    .unwrap();
    assert!(non_favorites.is_empty());
}

#[sqlx::test(migrations = false)]
async fn test_search_is_case_insensitive_over_title_and_body(pool: PgPool) {
    seed(&pool, MIXED).await;

    let result = PromptRepo::list(
        &pool,
        &query("hAiKu", SortField::Title, false, FavoriteFilter::All),
    )
    .await
    .unwrap();

    assert_eq!(titles(&result), ["Haiku Prompt", "Limerick"]);
    for p in &result {
        let needle = "haiku";
        assert!(
            p.title.to_lowercase().contains(needle) || p.prompt.to_lowercase().contains(needle)
        );
    }
}

#[sqlx::test(migrations = false)]
async fn test_empty_search_matches_everything(pool: PgPool) {
    let created = seed(&pool, MIXED).await;

    let result = PromptRepo::list(&pool, &PromptQuery::default()).await.unwrap();
    assert_eq!(ids(&result), ids(&created));
}

#[sqlx::test(migrations = false)]
async fn test_search_without_matches_is_empty(pool: PgPool) {
    seed(&pool, MIXED).await;

    let result = PromptRepo::list(
        &pool,
        &query("sonnet", SortField::CreatedAt, true, FavoriteFilter::All),
    )
    .await
    .unwrap();
    assert!(result.is_empty());
}

#[sqlx::test(migrations = false)]
async fn test_search_wildcards_match_literally(pool: PgPool) {
    seed(
        &pool,
        &[
            ("Discount", "Take 100% off", false),
            ("Plain", "Take 100 off", false),
            ("snake_case", "naming", false),
            ("snakeXcase", "naming", false),
        ],
    )
    .await;

    let percent = PromptRepo::list(
        &pool,
        &query("100%", SortField::Title, false, FavoriteFilter::All),
    )
    .await
    .unwrap();
    assert_eq!(titles(&percent), ["Discount"]);

    let underscore = PromptRepo::list(
        &pool,
        &query("snake_", SortField::Title, false, FavoriteFilter::All),
    )
    .await
    .unwrap();
    assert_eq!(titles(&underscore), ["snake_case"]);
}

// ---------------------------------------------------------------------------
// Favorite filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_favorite_filters_partition_all(pool: PgPool) {
    seed(&pool, MIXED).await;

    let all = list_filtered(&pool, FavoriteFilter::All).await;
    let favorites = list_filtered(&pool, FavoriteFilter::Favorites).await;
    let non_favorites = list_filtered(&pool, FavoriteFilter::NonFavorites).await;

    assert!(favorites.iter().all(|p| p.is_favorite));
    assert!(non_favorites.iter().all(|p| !p.is_favorite));
    assert!(ids(&favorites).is_disjoint(&ids(&non_favorites)));

    let union: BTreeSet<i64> = ids(&favorites).union(&ids(&non_favorites)).copied().collect();
    assert_eq!(union, ids(&all));
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_scenario_alpha_beta_title_order(pool: PgPool) {
    seed(&pool, &[("Beta", "second", false), ("Alpha", "first", false)]).await;

    let ascending = PromptRepo::list(
        &pool,
        &query("", SortField::Title, false, FavoriteFilter::All),
    )
    .await
    .unwrap();
    assert_eq!(titles(&ascending), ["Alpha", "Beta"]);

    let descending = PromptRepo::list(
        &pool,
        &query("", SortField::Title, true, FavoriteFilter::All),
    )
    .await
    .unwrap();
    assert_eq!(titles(&descending), ["Beta", "Alpha"]);
}

#[sqlx::test(migrations = false)]
async fn test_created_at_order_follows_insertion(pool: PgPool) {
    seed(&pool, &[("First", "1", false), ("Second", "2", false), ("Third", "3", false)]).await;

    let newest_first = PromptRepo::list(&pool, &PromptQuery::default()).await.unwrap();
    assert_eq!(titles(&newest_first), ["Third", "Second", "First"]);
}

#[sqlx::test(migrations = false)]
async fn test_reversing_direction_reverses_result(pool: PgPool) {
    seed(
        &pool,
        &[
            ("Same", "tie one", false),
            ("Other", "x", true),
            ("Same", "tie two", true),
            ("Another", "y", false),
        ],
    )
    .await;

    for sort in [SortField::Title, SortField::CreatedAt] {
        let mut ascending = PromptRepo::list(&pool, &query("", sort, false, FavoriteFilter::All))
            .await
            .unwrap();
        let descending = PromptRepo::list(&pool, &query("", sort, true, FavoriteFilter::All))
            .await
            .unwrap();
        ascending.reverse();
        assert_eq!(ascending, descending);
    }
}

// ---------------------------------------------------------------------------
// Combined
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_search_filter_and_sort_apply_together(pool: PgPool) {
    seed(
        &pool,
        &[
            ("Rain haiku", "about rain", true),
            ("Another rain poem", "rain again", true),
            ("Rain checklist", "umbrella", false),
            ("Sunshine", "no match here", true),
        ],
    )
    .await;

    let result = PromptRepo::list(
        &pool,
        &query("RAIN", SortField::Title, false, FavoriteFilter::Favorites),
    )
    .await
    .unwrap();

    assert_eq!(titles(&result), ["Another rain poem", "Rain haiku"]);
}
