//! Add post command implementation.

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use clap::Args;

use shortcode_file::NewPost;

use crate::app::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct AddPostArgs {
    /// Post title (HTML entities are kept as written)
    pub title: String,

    /// Post body
    #[arg(long, default_value = "")]
    pub content: String,

    /// Post type
    #[arg(long = "type", short = 't', default_value = "post")]
    pub post_type: String,

    /// Post status
    #[arg(long, default_value = "publish")]
    pub status: String,

    /// Publication date (RFC 3339, defaults to now)
    #[arg(long)]
    pub date: Option<DateTime<Utc>>,
}

pub async fn run(args: AddPostArgs, context: &Context) -> Result<()> {
    let config = context.config()?;
    let store = context.store(&config)?;

    let mut post = NewPost::new(args.title)
        .content(args.content)
        .post_type(args.post_type)
        .post_status(args.status);
    if let Some(date) = args.date {
        post = post.date(date);
    }

    let created = store.create_post(post).context("Failed to create post")?;

    println!("{}", created.id);
    output::success(&format!(
        "Created {} {} in {}",
        created.post_type,
        created.id,
        store.root().display()
    ));

    Ok(())
}
