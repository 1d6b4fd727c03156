use clap::*;
use itertools::Itertools;
use std::io::Write;
use sweeptree::libs::layout::{emergent_ancestors, TimepointLayout};
use sweeptree::libs::phylo::Tree;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("emerge")
        .about("Finds ancestors that emerge at a time point")
        .after_help(
            r###"
For each selected genotype and time point, prints the ancestors of the
genotype whose layout state at that time point is exactly `emerges`.

The layout is a JSON object:
  {"T1": {"Root": {"state": "emerges"}, "A": {"state": "present"}}, ...}

Notes:
* Without `-n`, every genotype of the tree is reported.
* Without `-t`, every time point of the layout is reported.
* Ancestors missing from the layout at a time point do not emerge.
* `--nonempty` drops rows without emergent ancestors.

Output format:
* TSV: timepoint	genotype	ancestors (joined by commas)

Examples:
1. Ancestors of C emerging at t5:
   sweeptree emerge tests/edges/example.tsv tests/layout/example.json -n C -t t5

2. Every genotype and time point with at least one emergent ancestor:
   sweeptree emerge tests/edges/example.tsv tests/layout/example.json --nonempty
"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .num_args(1)
                .index(1)
                .help("Input edge list. [stdin] for standard input"),
        )
        .arg(
            Arg::new("layout")
                .required(true)
                .num_args(1)
                .index(2)
                .help("Time point layout in JSON"),
        )
        .arg(
            Arg::new("node")
                .long("node")
                .short('n')
                .num_args(1)
                .action(ArgAction::Append)
                .help("Genotype of interest"),
        )
        .arg(
            Arg::new("timepoint")
                .long("timepoint")
                .short('t')
                .num_args(1)
                .action(ArgAction::Append)
                .help("Time point of interest"),
        )
        .arg(
            Arg::new("nonempty")
                .long("nonempty")
                .action(ArgAction::SetTrue)
                .help("Only print rows with emergent ancestors"),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .num_args(1)
                .default_value("Root")
                .help("Label of the root genotype"),
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
    let root = args.get_one::<String>("root").unwrap();
    let is_nonempty = args.get_flag("nonempty");

    let tree = Tree::from_file(infile, root)?;
    let index = tree.index()?;
    let layout = TimepointLayout::from_file(args.get_one::<String>("layout").unwrap())?;

    let genotypes: Vec<&str> = match args.get_many::<String>("node") {
        Some(nodes) => nodes.map(String::as_str).collect(),
        None => tree.node_ids().iter().map(String::as_str).collect(),
    };
    let timepoints: Vec<&str> = match args.get_many::<String>("timepoint") {
        Some(tps) => tps.map(String::as_str).collect(),
        None => layout.timepoints().collect(),
    };

    for tp in &timepoints {
        for gtype in &genotypes {
            let ancestors = emergent_ancestors(&layout, &index, gtype, tp);
            if is_nonempty && ancestors.is_empty() {
                continue;
            }
            writer.write_fmt(format_args!(
                "{}\t{}\t{}\n",
                tp,
                gtype,
                ancestors.iter().join(",")
            ))?;
        }
    }

    Ok(())
}
