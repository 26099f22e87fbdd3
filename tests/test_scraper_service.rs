use recipe_scraper::{RecipeResult, RecipeScraper};

#[tokio::test]
async fn test_service_result_wins_and_page_is_never_fetched() {
    let mut service = mockito::Server::new_async().await;
    let mut pages = mockito::Server::new_async().await;

    let _scrape = service
        .mock("POST", "/scrape")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"title": "Service Cake", "ingredients": ["flour", "sugar"]}"#)
        .create();

    let page = pages
        .mock("GET", "/recipe")
        .with_status(200)
        .with_body("<html><body>should not be requested</body></html>")
        .expect(0)
        .create();

    let url = format!("{}/recipe", pages.url());
    let result = RecipeScraper::builder()
        .scraper_service(format!("{}/scrape", service.url()))
        .scrape(&url)
        .await
        .unwrap();

    assert_eq!(result.source(), "recipe-scrapers");
    assert_eq!(result.url(), url);
    match result {
        RecipeResult::Library { data, .. } => {
            assert_eq!(data["title"], "Service Cake");
            assert_eq!(data["ingredients"][0], "flour");
        }
        other => panic!("expected library result, got {other:?}"),
    }

    page.assert();
}

#[tokio::test]
async fn test_service_failure_falls_back_to_page_extraction() {
    let mut service = mockito::Server::new_async().await;
    let mut pages = mockito::Server::new_async().await;

    let _scrape = service
        .mock("POST", "/scrape")
        .with_status(500)
        .create();

    let _page = pages
        .mock("GET", "/recipe")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(
            r#"<html><head><script type="application/ld+json">
            {"@type": "Recipe", "name": "Fallback Soup", "recipeIngredient": ["water"], "recipeInstructions": ["Boil."]}
            </script></head><body></body></html>"#,
        )
        .create();

    let url = format!("{}/recipe", pages.url());
    let result = RecipeScraper::builder()
        .scraper_service(format!("{}/scrape", service.url()))
        .scrape(&url)
        .await
        .unwrap();

    assert_eq!(result.source(), "json-ld");
    match result {
        RecipeResult::Structured { data, .. } => assert_eq!(data["name"], "Fallback Soup"),
        other => panic!("expected structured result, got {other:?}"),
    }
}

#[tokio::test]
async fn test_service_non_object_body_counts_as_decline() {
    let mut service = mockito::Server::new_async().await;
    let mut pages = mockito::Server::new_async().await;

    let _scrape = service
        .mock("POST", "/scrape")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#""just a string""#)
        .create();

    let _page = pages
        .mock("GET", "/recipe")
        .with_status(200)
        .with_body("<html><body><p>page text wins</p></body></html>")
        .create();

    let url = format!("{}/recipe", pages.url());
    let result = RecipeScraper::builder()
        .scraper_service(format!("{}/scrape", service.url()))
        .scrape(&url)
        .await
        .unwrap();

    assert_eq!(result.source(), "html");
}

#[tokio::test]
async fn test_empty_service_object_falls_through() {
    let mut service = mockito::Server::new_async().await;
    let mut pages = mockito::Server::new_async().await;

    let _scrape = service
        .mock("POST", "/scrape")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create();

    let _page = pages
        .mock("GET", "/recipe")
        .with_status(200)
        .with_body("<html><body><p>still extracted</p></body></html>")
        .create();

    let url = format!("{}/recipe", pages.url());
    let result = RecipeScraper::builder()
        .scraper_service(format!("{}/scrape", service.url()))
        .scrape(&url)
        .await
        .unwrap();

    assert_eq!(result.source(), "html");
}
