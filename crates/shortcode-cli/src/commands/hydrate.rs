//! Hydrate command implementation.

use anyhow::Result;
use clap::Args;

use shortcode_core::{FieldKey, TokenAuthority};
use shortcode_ui::gateway::sanitize_text;
use shortcode_ui::HydrateRequest;

use crate::app::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct HydrateArgs {
    /// Shortcode tag
    #[arg(long)]
    pub shortcode: String,

    /// Attribute name
    #[arg(long)]
    pub attr: String,

    /// Comma-separated post ids, as stored in the attribute
    pub value: String,

    /// Token to send (defaults to the field's derived token)
    #[arg(long)]
    pub nonce: Option<String>,

    /// Print the response envelope as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: HydrateArgs, context: &Context) -> Result<()> {
    let config = context.config()?;
    let gateway = context.gateway(&config)?;

    let nonce = match args.nonce {
        Some(nonce) => nonce,
        None => context
            .authority()?
            .derive(&FieldKey::new(
                sanitize_text(&args.shortcode),
                sanitize_text(&args.attr),
            ))
            .as_str()
            .to_string(),
    };

    let response = gateway
        .hydrate_values(&HydrateRequest {
            nonce: Some(nonce),
            shortcode: Some(args.shortcode),
            attr: Some(args.attr),
            value: Some(args.value),
        })
        .await?;

    if args.json {
        return output::json(&response);
    }

    if let Some(rejection) = &response.rejection {
        output::error(&format!("Request refused: {}", rejection));
        anyhow::bail!("hydrate failed");
    }

    output::options(&response.data.posts);
    Ok(())
}
