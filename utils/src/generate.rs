use anyhow::Context;
use sigmoid_lut::{
    create_sigmoid_lookup_table,
    logger::{ansi, heading},
    Variant,
};
use structopt::StructOpt;

use std::{path::PathBuf, time::Instant};

use crate::plot::plot_sigmoid_lookup_table;

#[derive(StructOpt)]
pub struct GenerateOptions {
    /// Table variant to generate: 'counting' or 'range'
    #[structopt(short, long, default_value = "range")]
    variant: Variant,
    /// Case table to write, defaults to the variant's table file
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
    /// Image to write, defaults to the variant's plot file
    #[structopt(short, long, parse(from_os_str))]
    plot: Option<PathBuf>,
    /// Only write the case table
    #[structopt(long)]
    no_plot: bool,
}

impl GenerateOptions {
    pub fn run(&self) -> anyhow::Result<()> {
        let timer = Instant::now();
        let config = self.variant.config();
        let output = self.output.clone().unwrap_or_else(|| PathBuf::from(self.variant.default_table_path()));

        println!("{}", heading("Generating Sigmoid Table"));
        println!("Variant                : {}", ansi(self.variant, "32;1"));
        config.display();

        let table = create_sigmoid_lookup_table(&config, &output)
            .with_context(|| format!("Failed to write table {}.", output.display()))?;

        println!("Entries                : {}", ansi(table.len(), 31));
        println!("Table Path             : {}", ansi(output.display(), "32;1"));

        if !self.no_plot {
            let plot = self.plot.clone().unwrap_or_else(|| PathBuf::from(self.variant.default_plot_path()));
            plot_sigmoid_lookup_table(&table, &config, &plot)?;
            println!("Plot Path              : {}", ansi(plot.display(), "32;1"));
        }

        println!("Finished in {:.2} seconds", timer.elapsed().as_secs_f32());

        Ok(())
    }
}
