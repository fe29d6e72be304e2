use df_api::{ErpClient, Taxonomy};

pub async fn run(
    client: &ErpClient,
    kind: &str,
    database: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let kind: Taxonomy = kind.parse().map_err(|e: String| e)?;
    let out = df_tools::taxonomies::list_taxonomy(client, kind, database).await?;
    println!("{}", out);
    Ok(())
}
