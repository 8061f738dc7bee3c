use super::TagArgs;
use anyhow::Result;
use fridge_client::FridgeClient;
use fridge_core::FridgeError;

pub async fn run(args: TagArgs, client: &FridgeClient) -> Result<()> {
    let glossary = client.tag_glossary().await?;
    match glossary.describe(&args.name) {
        Ok(description) => println!("{}: {}", args.name, description),
        Err(FridgeError::TagNotFound(_)) => println!("(no description for '{}')", args.name),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
