//! Application configuration initialization command.
//!
//! Interactive setup wizard for first-time use, currently covering the AI
//! coach integration. `--delete` removes the existing configuration.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::delete()?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    // Run the interactive wizard and persist whatever the user selected
    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
