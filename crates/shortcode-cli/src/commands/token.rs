//! Token command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use shortcode_core::FieldKey;

use crate::app::Context;

#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Shortcode tag
    #[arg(long)]
    pub shortcode: String,

    /// Attribute name
    #[arg(long)]
    pub attr: String,
}

pub async fn run(args: TokenArgs, context: &Context) -> Result<()> {
    let config = context.config()?;
    let authority = context.authority()?;
    let registry = context.registry(&config, &authority)?;

    let key = FieldKey::new(args.shortcode, args.attr);
    let token = registry
        .field_token(&key)
        .with_context(|| format!("{} is not a registered post field", key))?;

    println!("{}", token.as_str());
    Ok(())
}
