use clap::Parser;

use crate::threads::InventoryArgs;

#[derive(Parser)]
#[command(
    name = "pr-threads",
    version,
    about,
    long_about = "Print the open review threads of a pull request from a GraphQL JSON export.\n\
                  Resolved and outdated threads are left out."
)]
pub struct Cli {
    #[command(flatten)]
    pub inventory: InventoryArgs,
}
