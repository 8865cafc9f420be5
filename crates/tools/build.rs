fn main() -> anyhow::Result<()> {
    buildstamp_build_helpers::stamp_from_build_script()?;
    Ok(())
}
