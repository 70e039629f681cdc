use crate::core::error::PmanError;
use crate::core::markdown;
use crate::core::resolve;
use crate::core::store::Store;

#[derive(clap::Args, Debug)]
pub struct InfoCli {
    /// Project name or alias
    pub project: String,
}

pub fn run_info_cli(store: &Store, cli: InfoCli) -> Result<(), PmanError> {
    let data = resolve::read_readme(store, &cli.project)?;
    let out = markdown::beautify_md(&data)?;
    print!("{}", out);
    Ok(())
}
