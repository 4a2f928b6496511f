//! Subcommand implementations.

mod add_post;
mod fields;
mod hydrate;
mod search;
mod serve;
mod token;

use anyhow::Result;
use clap::Subcommand;

use crate::app::Context;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the post field AJAX endpoints
    Serve(serve::ServeArgs),

    /// Print the client data for the editor (field types and post fields)
    Fields(fields::FieldsArgs),

    /// Print the access token for one post field
    Token(token::TokenArgs),

    /// Run a post search for a field against the local store
    Search(search::SearchArgs),

    /// Label a stored id list for a field against the local store
    Hydrate(hydrate::HydrateArgs),

    /// Add a post to the local store
    AddPost(add_post::AddPostArgs),
}

pub async fn handle(command: Commands, context: &Context) -> Result<()> {
    match command {
        Commands::Serve(args) => serve::run(args, context).await,
        Commands::Fields(args) => fields::run(args, context).await,
        Commands::Token(args) => token::run(args, context).await,
        Commands::Search(args) => search::run(args, context).await,
        Commands::Hydrate(args) => hydrate::run(args, context).await,
        Commands::AddPost(args) => add_post::run(args, context).await,
    }
}
