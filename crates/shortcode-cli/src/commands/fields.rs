//! Fields command implementation.

use anyhow::Result;
use clap::Args;

use crate::app::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct FieldsArgs {
    /// Print compact JSON
    #[arg(long)]
    pub compact: bool,
}

pub async fn run(args: FieldsArgs, context: &Context) -> Result<()> {
    let config = context.config()?;
    let authority = context.authority()?;
    let registry = context.registry(&config, &authority)?;

    let data = registry.client_data();
    if args.compact {
        output::json(&data)
    } else {
        output::json_pretty(&data)
    }
}
