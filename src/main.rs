// vim: set ai et ts=4 sts=4 sw=4:
use std::fs;
use std::io;
use std::process;
use clap::{App, Arg, ArgMatches};
use log::{error, info, LevelFilter};

use nonogram::util::is_a_tty;
use nonogram::{Grid, Puzzle, Result, Solver};

const SAMPLE: &str = "
rows:
    - 5
    - 1 4
    - 1 1 1
    - 1 1 1 1
    - 1 1 1 1
    - 1 1 3 1
    - 1 1 1
    - 1 1 1
    - 3 4 1
    - 3 3
cols:
    - 8
    - 1 1
    - 1 1 5
    - 1 1
    - 1 2 2
    - 2 1 1
    - 5 1
    - 1 2
    - 1 1
    - 8
";

pub struct Args {
    pub puzzle_file: Option<String>,
    pub visual_groups: Option<usize>,
    pub invert: bool,
    pub emit_color: bool,
    pub verbosity: u64,
}
impl Args {
    fn from_matches(matches: &ArgMatches) -> std::result::Result<Self, String> {
        let visual_groups = match matches.value_of("visual-groups") {
            None    => None,
            Some(s) => match s.parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _              => return Err(format!("invalid group size '{}'", s)),
            },
        };
        Ok(Args {
            puzzle_file:   matches.value_of("FILE").map(String::from),
            visual_groups,
            invert:        matches.is_present("invert"),
            emit_color:    !matches.is_present("no-color") && is_a_tty(io::stdout()),
            verbosity:     matches.occurrences_of("verbose"),
        })
    }
}

fn parse_args() -> std::result::Result<Args, String> {
    let matches = App::new("nonogram")
        .about("Solves nonogram puzzles by backtracking over candidate rows")
        .arg(Arg::with_name("FILE")
                 .help("YAML puzzle with 'rows' and 'cols' lists; a built-in sample is solved if omitted")
                 .index(1))
        .arg(Arg::with_name("visual-groups")
                 .short("g")
                 .long("visual-groups")
                 .takes_value(true)
                 .default_value("5")
                 .help("Draw separator lines every N rows and columns"))
        .arg(Arg::with_name("invert")
                 .short("i")
                 .long("invert")
                 .help("Also print the inverted solution with its re-derived clues"))
        .arg(Arg::with_name("no-color")
                 .long("no-color")
                 .help("Never emit ANSI colors"))
        .arg(Arg::with_name("verbose")
                 .short("v")
                 .multiple(true)
                 .help("Log more (repeat for debug and trace output)"))
        .get_matches();
    Args::from_matches(&matches)
}

fn setup_logging(verbosity: u64) -> std::result::Result<(), fern::InitError> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}][{}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()?;
    Ok(())
}

fn load_puzzle(args: &Args) -> Result<Puzzle> {
    match &args.puzzle_file {
        Some(path) => {
            info!("loading puzzle from {}", path);
            Puzzle::from_yaml_str(&fs::read_to_string(path)?)
        }
        None => {
            info!("no puzzle file given, using the built-in sample");
            Puzzle::from_yaml_str(SAMPLE)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let puzzle = load_puzzle(args)?;
    let grid: Grid = Solver::new(&puzzle).solve()?;
    println!("{}", puzzle.render(&grid, args.visual_groups, args.emit_color));

    if args.invert {
        let inverted = grid.inverted();
        let inverted_puzzle = Puzzle::from_grid(&inverted);
        info!("inverted grid has {} of {} squares filled",
              inverted.filled_count(), inverted.width() * inverted.height());
        println!("{}", inverted_puzzle.render(&inverted, args.visual_groups, args.emit_color));
    }
    Ok(())
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("error: {}", msg);
            process::exit(2);
        }
    };
    if let Err(e) = setup_logging(args.verbosity) {
        eprintln!("could not set up logging: {}", e);
    }
    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}
