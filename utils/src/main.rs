mod generate;
mod plot;
mod validate;

use structopt::StructOpt;

#[derive(StructOpt)]
pub enum Options {
    Generate(generate::GenerateOptions),
    Plot(plot::PlotOptions),
    Validate(validate::ValidateOptions),
}

fn main() -> anyhow::Result<()> {
    match Options::from_args() {
        Options::Generate(options) => options.run(),
        Options::Plot(options) => options.run(),
        Options::Validate(options) => options.run(),
    }
}
