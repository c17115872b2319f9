use ncuber::config::Config;
use ncuber::cube_layout::CubeLayout;
use ncuber::model::Cube;
use ncuber::operator::Operator;
use ncuber::orchestrator::{self, SolveStep};

fn main() {
    let config = Config::default();
    let cube = Cube::new(config.cube_size, CubeLayout::boy(), config.enable_cube_cache).expect("valid cube size");
    let mut op = Operator::new(cube);

    let alg = ncuber::scramble(config.cube_size, 30);
    println!("scramble: {}", alg.atomic_str());
    op.play(&alg, false).expect("scramble moves always apply cleanly");

    #[cfg(feature = "term")]
    ncuber::printer::print_cube(op.cube()).expect("stdout is writable");

    match orchestrator::solve(&mut op, &config, SolveStep::All) {
        Ok(()) => println!("solved in {} moves", op.count()),
        Err(e) => println!("solve failed: {e}"),
    }

    #[cfg(feature = "term")]
    ncuber::printer::print_cube(op.cube()).expect("stdout is writable");
}
