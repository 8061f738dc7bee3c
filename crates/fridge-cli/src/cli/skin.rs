use super::SkinTypeCommands;
use anyhow::Result;
use fridge_client::FridgeClient;

pub async fn run(cmd: SkinTypeCommands, client: &FridgeClient) -> Result<()> {
    match cmd {
        SkinTypeCommands::Show => {
            println!("{}", client.skin_type().await?);
        }
        SkinTypeCommands::Set { value } => {
            let previous = client.skin_type().await?;
            if previous == value.trim() {
                println!("Skin type is already {}.", previous);
                return Ok(());
            }
            client.set_skin_type(&value).await?;
            println!("Skin type updated successfully!");
        }
    }
    Ok(())
}
