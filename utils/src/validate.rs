use anyhow::{bail, Context};
use sigmoid_lut::{check_table, logger::heading, LookupTable, Variant};
use structopt::StructOpt;

use std::path::PathBuf;

#[derive(StructOpt)]
pub struct ValidateOptions {
    /// Table variant to check against: 'counting' or 'range'
    #[structopt(short, long, default_value = "range")]
    variant: Variant,
    /// Case table to reload, defaults to the variant's table file
    #[structopt(short, long, parse(from_os_str))]
    input: Option<PathBuf>,
}

impl ValidateOptions {
    pub fn run(&self) -> anyhow::Result<()> {
        let input = self.input.clone().unwrap_or_else(|| PathBuf::from(self.variant.default_table_path()));

        let table = LookupTable::load(&input)
            .with_context(|| format!("Failed to reload table {}.", input.display()))?;

        let report = check_table(&table, &self.variant.config()).with_context(|| "Invalid generator config.")?;

        println!("{}", heading("SUMMARY:"));
        report.display();

        if !report.is_valid() {
            bail!("{} failed validation against the {} variant.", input.display(), self.variant);
        }

        Ok(())
    }
}
