use df_api::ErpClient;

pub async fn run(
    client: &ErpClient,
    limit: Option<u32>,
    database: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = df_tools::articles::list_articles(client, limit, database).await?;
    println!("{}", out);
    Ok(())
}
