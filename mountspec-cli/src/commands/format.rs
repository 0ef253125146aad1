use clap::Args;
use mountspec::Mode;

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Mount point inside the container
    #[arg(long)]
    pub path: String,

    /// Host path to mount; omit for an anonymous volume
    #[arg(long)]
    pub host_path: Option<String>,

    /// Access mode (see `mountspec modes`)
    #[arg(long)]
    pub mode: Option<Mode>,
}

pub fn execute(args: FormatArgs, global: &crate::cli::GlobalFlags) -> anyhow::Result<()> {
    if args.host_path.is_none() && args.mode.is_some() {
        anyhow::bail!(
            "--mode requires --host-path, otherwise the mode reads back as the container path"
        );
    }

    let volume = global
        .runtime
        .volume(args.path, args.host_path, args.mode)?;
    println!("{}", volume);
    Ok(())
}
