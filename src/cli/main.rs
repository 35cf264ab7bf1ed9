use std::{fs::File, io::BufReader, path::PathBuf};

use clap::{value_parser, Arg, Command};

use cavity_sat::{
    config::Config,
    context::{Context, ContextState},
    reports::Report,
};

fn cli() -> Command {
    Command::new("cavity_sat")
        .about("Attempts to satisfy a CNF formula by survey propagation with decimation")

        .arg(Arg::new("path")
            .required(false)
            .value_parser(value_parser!(PathBuf))
            .help("A DIMACS form CNF file to solve. Without a file, a random formula is generated."))

        .arg(Arg::new("variables")
            .short('n')
            .long("variables")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("The variable count of a generated formula. Default: 1000"))

        .arg(Arg::new("alpha")
            .short('a')
            .long("alpha")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help("The clause-to-variable ratio of a generated formula. Default: 4.2"))

        .arg(Arg::new("k")
            .short('k')
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("The clause width of a generated formula. Default: 3"))

        .arg(Arg::new("seed")
            .short('s')
            .long("seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("The rng seed. 0, the default, draws a seed from entropy and reports it."))

        .arg(Arg::new("fraction")
            .short('f')
            .long("fraction")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help("The fraction of unassigned variables fixed per decimation round."))

        .arg(Arg::new("flips")
            .long("flips")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("The local search flip budget. Default: 100 times the variable count."))

        .arg(Arg::new("noise")
            .long("noise")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help("The local search noise probability."))
}

fn main() {
    env_logger::init();

    let matches = cli().get_matches();

    let mut config = Config::default();
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = *seed;
    }
    if let Some(fraction) = matches.get_one::<f64>("fraction") {
        config.fraction = *fraction;
    }
    if let Some(flips) = matches.get_one::<usize>("flips") {
        config.walksat_max_flips = Some(*flips);
    }
    if let Some(noise) = matches.get_one::<f64>("noise") {
        config.walksat_noise = *noise;
    }

    let mut the_context = Context::from_config(config);

    match matches.get_one::<PathBuf>("path") {
        Some(path) => {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(e) => {
                    println!("c Error opening {path:?}: {e}");
                    std::process::exit(1);
                }
            };

            if let Err(e) = the_context.read_dimacs(BufReader::new(file)) {
                println!("c Error loading DIMACS: {e:?}");
                std::process::exit(1);
            }
        }

        None => {
            let variables = *matches.get_one::<usize>("variables").unwrap_or(&1000);
            let alpha = *matches.get_one::<f64>("alpha").unwrap_or(&4.2);
            let k = *matches.get_one::<usize>("k").unwrap_or(&3);

            the_context.random_ksat(variables, alpha, k);
        }
    }

    println!("c seed {}", the_context.config.seed);

    let report = the_context.solve();

    println!(
        "c {} sweeps, {} decimation rounds, {} flips",
        the_context.counters.survey_sweeps,
        the_context.counters.decimation_rounds,
        the_context.counters.walksat_flips,
    );

    match report {
        Report::Satisfiable => {
            println!("s SATISFIABLE");

            // Variables left unassigned are unconstrained; report them true.
            let literals: Vec<String> = (0..the_context.graph.variable_count())
                .map(|v| match the_context.graph.value_of(v as u32).unwrap_or(true) {
                    true => format!("{}", v + 1),
                    false => format!("-{}", v + 1),
                })
                .collect();
            println!("v {} 0", literals.join(" "));

            std::process::exit(10);
        }

        Report::Contradiction if the_context.state == ContextState::Unsatisfiable => {
            println!("s UNSATISFIABLE");
            std::process::exit(20);
        }

        _ => {
            println!("s UNKNOWN ({report})");
        }
    }
}
