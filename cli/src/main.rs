extern crate clap;
extern crate pathmask;

mod commands;
mod render;
mod show;

use clap::{App, Arg, ArgMatches, SubCommand};
use commands::*;
use pathmask::path::{parse_path_with_options, ParserOptions};

use std::fs::File;
use std::io::prelude::*;
use std::io::stdout;
use std::process;

fn main() {
    env_logger::init();

    let matches = App::new("pathmask command-line interface")
        .version("0.1")
        .author("Nicolas Silva <nical@fastmail.com>")
        .about("Parses SVG path data and renders it into coverage masks")
        .subcommand(SubCommand::with_name("bounds")
            .about("Prints the bounding rectangle of the path (min x, min y, max x, max y)")
        )
        .subcommand(SubCommand::with_name("normalize")
            .about("Prints the path using absolute commands only")
            .arg(Arg::with_name("APPROXIMATE_ARCS")
                .long("approximate-arcs")
                .help("Replaces arcs with quadratic bézier curves")
            )
        )
        .subcommand(SubCommand::with_name("render")
            .about("Renders the path so that its bounds fill the mask")
            .arg(Arg::with_name("WIDTH")
                .long("width")
                .help("Width of the mask in pixels (derived from the height by default)")
                .value_name("WIDTH")
                .takes_value(true)
            )
            .arg(Arg::with_name("HEIGHT")
                .long("height")
                .help("Height of the mask in pixels (derived from the width by default)")
                .value_name("HEIGHT")
                .takes_value(true)
            )
            .arg(Arg::with_name("ALIASED")
                .long("aliased")
                .help("Disables antialiasing, pixels are either covered or empty")
            )
            .arg(Arg::with_name("APPROXIMATE_ARCS")
                .long("approximate-arcs")
                .help("Renders arcs as curves instead of straight lines")
            )
            .arg(Arg::with_name("PGM")
                .long("pgm")
                .help("Writes a binary PGM image instead of ASCII art")
            )
        )
        .arg(Arg::with_name("PATH")
            .value_name("PATH")
            .help("An SVG path")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("INPUT")
            .help("Sets the input file to use")
            .short("i")
            .long("input")
            .value_name("FILE")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("OUTPUT")
            .help("Sets the output file to use")
            .value_name("FILE")
            .short("o")
            .long("output")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("IMPLICIT_LINE")
            .long("implicit-line-after-move")
            .help("Treats coordinates repeated after a move command as lines")
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let input = read_input(matches)?;
    let options = ParserOptions::DEFAULT
        .with_implicit_line_after_move(matches.is_present("IMPLICIT_LINE"));
    let segments = parse_path_with_options(&input, &options)?;

    let mut output: Box<dyn Write> = match matches.value_of("OUTPUT") {
        Some(output_file) => Box::new(File::create(output_file)?),
        None => Box::new(stdout()),
    };

    if matches.subcommand_matches("bounds").is_some() {
        show::bounds(BoundsCmd { segments }, &mut *output)?;
    } else if let Some(normalize_matches) = matches.subcommand_matches("normalize") {
        let cmd = NormalizeCmd {
            segments,
            approximate_arcs: normalize_matches.is_present("APPROXIMATE_ARCS"),
        };
        show::normalize(cmd, &mut *output)?;
    } else if let Some(render_matches) = matches.subcommand_matches("render") {
        let cmd = RenderCmd {
            segments,
            width: get_number(render_matches, "WIDTH", "width")?,
            height: get_number(render_matches, "HEIGHT", "height")?,
            anti_alias: !render_matches.is_present("ALIASED"),
            approximate_arcs: render_matches.is_present("APPROXIMATE_ARCS"),
            format: if render_matches.is_present("PGM") {
                OutputFormat::Pgm
            } else {
                OutputFormat::Ascii
            },
        };
        render::render(cmd, &mut *output)?;
    } else {
        eprintln!("{}", matches.usage());
    }

    output.flush()?;

    Ok(())
}

fn read_input(matches: &ArgMatches) -> Result<String, CliError> {
    if let Some(input_file) = matches.value_of("INPUT") {
        let mut input = String::new();
        File::open(input_file)
            .and_then(|mut file| file.read_to_string(&mut input))
            .map_err(|source| CliError::Input {
                path: input_file.to_string(),
                source,
            })?;
        return Ok(input);
    }

    match matches.value_of("PATH") {
        Some(path) => Ok(path.to_string()),
        None => Err(CliError::NoInput),
    }
}

fn get_number<T: std::str::FromStr>(
    matches: &ArgMatches,
    arg: &str,
    name: &'static str,
) -> Result<Option<T>, CliError> {
    match matches.value_of(arg) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| CliError::InvalidArgument {
                name,
                value: value.to_string(),
            }),
        None => Ok(None),
    }
}
