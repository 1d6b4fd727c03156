use clap::*;
use std::io::Write;
use sweeptree::libs::elbow::{elbow, parse_links};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("elbow")
        .about("Converts links to elbow connector paths")
        .after_help(
            r###"
Each link from (x0, y0) to (x1, y1) becomes an SVG path
    M x0,y0 H midX V y1 H x1
with midX halfway between x0 and x1, written without spaces.

Input format:
* Four columns per line: x0 y0 x1 y1
* Or JSON: [{"source": {"x": .., "y": ..}, "target": {"x": .., "y": ..}}, ...]

Examples:
1. Paths from a TSV file:
   sweeptree elbow tests/elbow/links.tsv

2. Paths from JSON on stdin:
   cat tests/elbow/links.json | sweeptree elbow stdin
"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .num_args(1)
                .index(1)
                .help("Input links. [stdin] for standard input"),
        )
        .arg(
            Arg::new("outfile")
                .short('o')
                .long("outfile")
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = sweeptree::writer(args.get_one::<String>("outfile").unwrap())?;
    let infile = args.get_one::<String>("infile").unwrap();

    let text = sweeptree::read_to_string(infile)?;
    for link in parse_links(&text)? {
        writer.write_fmt(format_args!("{}\n", elbow(&link)))?;
    }

    Ok(())
}
