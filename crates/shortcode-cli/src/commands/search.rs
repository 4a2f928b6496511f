//! Search command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use shortcode_core::{FieldKey, TokenAuthority};
use shortcode_ui::gateway::sanitize_text;
use shortcode_ui::SearchRequest;

use crate::app::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Shortcode tag
    #[arg(long)]
    pub shortcode: String,

    /// Attribute name
    #[arg(long)]
    pub attr: String,

    /// Search text
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<String>,

    /// Token to send (defaults to the field's derived token)
    #[arg(long)]
    pub nonce: Option<String>,

    /// Print the response envelope as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SearchArgs, context: &Context) -> Result<()> {
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
        .search_posts(&SearchRequest {
            nonce: Some(nonce),
            shortcode: Some(args.shortcode),
            attr: Some(args.attr),
            page: args.page,
            s: args.search,
        })
        .await?;

    if args.json {
        return output::json(&response);
    }

    if let Some(rejection) = &response.rejection {
        output::error(&format!("Request refused: {}", rejection));
        anyhow::bail!("search failed");
    }

    let data = &response.data;
    if data.posts.is_empty() {
        eprintln!("{}", "No posts found.".dimmed());
    } else {
        output::options(&data.posts);
    }

    eprintln!();
    output::field("Found", &data.found_posts.to_string());
    output::field("Per page", &data.posts_per_page.to_string());

    Ok(())
}
