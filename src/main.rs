use std::env;

use recipe_scraper::scrape_recipe;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or("Please provide a URL as an argument")?;

    let result = scrape_recipe(url).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
