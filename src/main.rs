use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod icon_gen;
mod manifest_json;

#[derive(Debug, Parser)]
#[clap(
    name = "icon-stub",
    about = "Stamp out solid-color placeholder icons for a browser extension"
)]
pub(crate) struct Args {
    /// Output directory receiving the icons. Must already exist.
    #[clap(short, long, value_name = "DIR", default_value = "icons")]
    output: PathBuf,

    /// Custom icon edge lengths to generate. When set, only these sizes are generated.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    sizes: Option<Vec<u32>>,

    /// Also write an icons.json manifest stanza next to the generated files.
    #[clap(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(args)
}
