use df_api::ErpClient;

pub fn run(client: &ErpClient) -> Result<(), Box<dyn std::error::Error>> {
    // Print as YAML for readability; the token serializes redacted.
    let yaml = serde_yaml::to_string(client.config())?;
    println!("{}", yaml);

    Ok(())
}
