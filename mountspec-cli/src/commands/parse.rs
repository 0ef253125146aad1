use anyhow::Context;
use clap::Args;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Print the parsed volume as JSON
    #[arg(long)]
    pub json: bool,

    /// Volume string, e.g. /host:/container:ro
    pub spec: String,
}

pub fn execute(args: ParseArgs, global: &crate::cli::GlobalFlags) -> anyhow::Result<()> {
    let volume = global.runtime.parse_volume(&args.spec)?;

    if args.json {
        let json = serde_json::to_string(&volume).context("Failed to serialize volume")?;
        println!("{}", json);
        return Ok(());
    }

    println!("host_path={}", volume.host_path().unwrap_or(""));
    println!("path={}", volume.path());
    println!("mode={}", volume.mode().map(|m| m.as_str()).unwrap_or(""));
    Ok(())
}
