use mountspec::Mode;

pub fn execute() -> anyhow::Result<()> {
    for mode in Mode::ALL {
        let access = if mode.is_read_only() { "read-only" } else { "read-write" };
        println!("{}\t{}", mode, access);
    }
    Ok(())
}
