use ndarray as nd;
use stairpot::{ discretize::{ discretize, EmptyBin }, lattice::Lattice };

// discretize the potential of a short lattice by hand and print the staircase

fn main() {
    const CHARGES: usize = 4;
    const SPACING: f64 = 0.05; // m
    const SOFTENING: f64 = 0.01; // m
    const STEPS: usize = 12;

    let lattice = Lattice::new(1.0, SOFTENING, SPACING, CHARGES).unwrap();

    // sample with every charge included and zeroed edges
    let (x, v) = lattice.sample_linspace(600, CHARGES, true);
    let steps = discretize(&x, &v, STEPS, EmptyBin::Error).unwrap();

    // compare the staircase against the continuous curve at each bin center
    let vc: nd::Array1<f64>
        = steps.centers().mapv(|xk| lattice.potential_all(xk));
    for ((c, h), v) in steps.centers().iter().zip(steps.heights()).zip(&vc) {
        println!("{:8.4} {:+.4e} {:+.4e}", c, h, v);
    }
}
