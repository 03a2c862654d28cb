use recipe_site::RecipeStore;
use tempfile::TempDir;

async fn write_doc(dir: &TempDir, name: &str, contents: &str) {
    tokio::fs::write(dir.path().join(name), contents)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_dated_recipes_precede_undated() {
    let dir = TempDir::new().unwrap();
    write_doc(
        &dir,
        "dated.mdx",
        "---\ntitle: Zucchini Chicken\npublishedAt: \"2024-01-01\"\n---\nbody",
    )
    .await;
    write_doc(&dir, "undated.mdx", "---\ntitle: Apple Chicken\n---\nbody").await;

    let store = RecipeStore::new(dir.path());
    let recipes = store.all_recipes().await.unwrap();

    let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Zucchini Chicken", "Apple Chicken"]);
}

#[tokio::test]
async fn test_dated_recipes_sort_newest_first() {
    let dir = TempDir::new().unwrap();
    write_doc(
        &dir,
        "january.mdx",
        "---\ntitle: January Special\npublishedAt: \"2024-01-15\"\n---\nbody",
    )
    .await;
    write_doc(
        &dir,
        "march.mdx",
        "---\ntitle: March Special\npublishedAt: \"2024-03-15\"\n---\nbody",
    )
    .await;

    let store = RecipeStore::new(dir.path());
    let recipes = store.all_recipes().await.unwrap();

    let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["March Special", "January Special"]);
}

#[tokio::test]
async fn test_undated_recipes_sort_by_title() {
    let dir = TempDir::new().unwrap();
    write_doc(&dir, "b.mdx", "---\ntitle: Basil Chicken\n---\nbody").await;
    write_doc(&dir, "a.mdx", "---\ntitle: Apple Chicken\n---\nbody").await;
    write_doc(&dir, "c.mdx", "---\ntitle: Cashew Chicken\n---\nbody").await;

    let store = RecipeStore::new(dir.path());
    let recipes = store.all_recipes().await.unwrap();

    let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Apple Chicken", "Basil Chicken", "Cashew Chicken"]
    );
}

#[tokio::test]
async fn test_unparseable_date_counts_as_undated() {
    let dir = TempDir::new().unwrap();
    write_doc(
        &dir,
        "garbled.mdx",
        "---\ntitle: Garbled Date\npublishedAt: someday\n---\nbody",
    )
    .await;
    write_doc(
        &dir,
        "dated.mdx",
        "---\ntitle: Really Dated\npublishedAt: \"2023-06-01\"\n---\nbody",
    )
    .await;

    let store = RecipeStore::new(dir.path());
    let recipes = store.all_recipes().await.unwrap();

    let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Really Dated", "Garbled Date"]);
}
