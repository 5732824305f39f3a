use clap::Parser;
use lib::{ setup_logging, CommonArgs };
use stairpot::pipeline;

// compare the potential summed over a full neighborhood with a truncated one

#[derive(Parser, Debug)]
#[command(version, about = "Compare lattice potentials for two neighborhood sizes")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Neighborhood size to compare against
    #[arg(long, default_value_t = 1, value_name = "NUM")]
    against: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.common.verbose, cli.common.quiet)?;
    let config = cli.common.config()?;

    let (base, alt) = pipeline::compare_neighborhoods(&config, cli.against)?;
    let unit = config.unit;
    for (label, curve) in [
        (config.neighborhood(), &base),
        (cli.against, &alt),
    ] {
        let (vmin, vmax) = curve.range();
        println!(
            "neighborhood {:>3}: V_min = {:.3e} {}, V_max = {:.3e} {}",
            label, vmin, unit, vmax, unit,
        );
    }
    println!("max deviation = {:.3e} {}", base.max_deviation(&alt)?, unit);
    Ok(())
}
