use df_api::ErpClient;

pub async fn run(client: &ErpClient, database: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let out = df_tools::sizes::list_sizes(client, database).await?;
    println!("{}", out);
    Ok(())
}
