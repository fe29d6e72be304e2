use df_api::{ErpClient, StockQuery};

pub async fn run(
    client: &ErpClient,
    query: &StockQuery,
    database: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = df_tools::stock::stock_and_prices(client, query, database).await?;
    println!("{}", out);
    Ok(())
}
