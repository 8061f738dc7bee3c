use super::{cell, parse_product_ref, ProductCommands};
use anyhow::Result;
use fridge_client::FridgeClient;
use fridge_core::{AddProductOutcome, DayContext, Rating};

pub async fn run(cmd: ProductCommands, client: &FridgeClient, day: DayContext) -> Result<()> {
    match cmd {
        ProductCommands::List => list(client, day).await,
        ProductCommands::Add { query } => add(client, day, &query).await,
        ProductCommands::Remove { id } => remove(client, day, &id).await,
        ProductCommands::Rating { id } => rating(client, day, &id).await,
        ProductCommands::Rate { id, stars } => rate(client, day, &id, stars).await,
    }
}

async fn list(client: &FridgeClient, day: DayContext) -> Result<()> {
    let snapshot = client.snapshot(day).await;
    let products = snapshot.products?;

    if products.is_empty() {
        println!("(no {} products; add one with `fridge products add <name>`)", day);
        return Ok(());
    }

    println!("{} routine, {} product(s)", day, products.len());
    println!("{}  {}  {}  INGREDIENTS", cell("ID", 8), cell("NAME", 30), cell("BRAND", 20));
    for p in &products {
        println!(
            "{}  {}  {}  {}",
            cell(&p.id.to_string(), 8),
            cell(&p.name, 30),
            cell(p.brand.as_deref().unwrap_or("-"), 20),
            p.ingredients.len(),
        );
    }

    // Rules failing doesn't hide the product list.
    if let Ok(issues) = snapshot.issues {
        let count = issues.issue_count();
        if count > 0 {
            println!();
            println!("⚠️  {} issues (see `fridge issues`)", count);
        }
    }
    Ok(())
}

async fn add(client: &FridgeClient, day: DayContext, query: &str) -> Result<()> {
    match client.add_product(day, query).await? {
        AddProductOutcome::Added => println!("Product added successfully!"),
        AddProductOutcome::AlreadyTracked => {
            println!("You already have this product in your {} routine.", day)
        }
    }
    Ok(())
}

async fn remove(client: &FridgeClient, day: DayContext, id: &str) -> Result<()> {
    let product = parse_product_ref(id);
    client.delete_product(day, &product).await?;
    println!("Removed product {} from {}.", product, day);
    Ok(())
}

async fn rating(client: &FridgeClient, day: DayContext, id: &str) -> Result<()> {
    let rating = client.rating(day, &parse_product_ref(id)).await?;
    println!("{}", rating.describe());
    Ok(())
}

async fn rate(client: &FridgeClient, day: DayContext, id: &str, stars: u8) -> Result<()> {
    let rating = Rating::new(stars)?;
    client.set_rating(day, &parse_product_ref(id), rating).await?;
    println!("Updated rating: {}", rating.describe());
    Ok(())
}
