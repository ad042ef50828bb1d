use anyhow::Result;

// Print the OpenAPI document for the HTTP API.
fn main() -> Result<()> {
    let doc = signet::signet::openapi();
    println!("{}", doc.to_pretty_json()?);

    Ok(())
}
