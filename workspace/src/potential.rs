use clap::Parser;
use lib::{ setup_logging, CommonArgs };
use stairpot::pipeline;
use tracing::info;

// build a lattice potential, reduce it to steps, and report its range

#[derive(Parser, Debug)]
#[command(version, about = "Discretize the softened-Coulomb potential of a charge lattice")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.common.verbose, cli.common.quiet)?;
    let config = cli.common.config()?;
    info!(?config, "running pipeline");

    let out = pipeline::run(&config)?;
    let lattice = config.lattice()?;
    let unit = config.unit;
    println!(
        "{} charges of {} e, spacing {:.3e}, softening {:.3e}, neighborhood {}",
        lattice.len(),
        lattice.charge(),
        lattice.spacing(),
        lattice.softening(),
        config.neighborhood(),
    );
    println!("1 {} = {:.9e} J", unit, unit.joules());
    let (vmin, vmax) = out.continuous.range();
    println!("V_min = {:.3e} {}, V_max = {:.3e} {}", vmin, unit, vmax, unit);

    let (hmin, hmax) = out.steps.height_range();
    println!(
        "{} steps of width {:.3e}: min = {:.3e} {}, max = {:.3e} {}",
        out.steps.len(),
        out.steps.width()?,
        hmin,
        unit,
        hmax,
        unit,
    );
    let (qmin, qmax) = out.piecewise.range();
    println!(
        "{} query points: min = {:.3e} {}, max = {:.3e} {}",
        out.piecewise.x.len(), qmin, unit, qmax, unit,
    );
    Ok(())
}
