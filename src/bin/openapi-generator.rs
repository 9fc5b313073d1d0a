//! Print the documentation descriptor built from the default configuration as pretty JSON.

use anyhow::Context;
use cbioportal_api_docs::{config::AppConfig, routes};

fn main() -> anyhow::Result<()> {
    let doc = AppConfig::default().documentation().build(&routes::handlers());
    let json = doc
        .to_pretty_json()
        .context("serializing documentation descriptor")?;
    println!("{json}");
    Ok(())
}
