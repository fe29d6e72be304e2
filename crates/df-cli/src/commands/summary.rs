use df_api::ErpClient;

pub async fn run(client: &ErpClient, database: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let out = df_tools::taxonomies::taxonomy_summary(client, database).await?;
    println!("{}", out);
    Ok(())
}
