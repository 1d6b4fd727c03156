use clap::*;
use itertools::Itertools;
use std::io::Write;
use sweeptree::libs::phylo::Tree;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("chains")
        .about("Splits a genotype tree into linear segments")
        .after_help(
            r###"
A linear segment starts at the root or at a child of a branching node, and
follows single-child links down to the first genotype that branches or is a
leaf. Every genotype reachable from the root belongs to exactly one segment.

Output format:
* TSV, one row per segment, in preorder of the start genotypes:
  start	length	members
  `length` counts the start genotype, `members` lists the following ones.

Examples:
1. Segments of a clonal tree:
   sweeptree chains tests/edges/clonal.tsv

2. Only segments longer than one genotype:
   sweeptree chains tests/edges/clonal.tsv --min 2
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
            Arg::new("root")
                .long("root")
                .num_args(1)
                .default_value("Root")
                .help("Label of the root genotype"),
        )
        .arg(
            Arg::new("min")
                .long("min")
                .num_args(1)
                .default_value("1")
                .value_parser(value_parser!(usize))
                .help("Skip segments with fewer genotypes"),
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
    let opt_min = *args.get_one::<usize>("min").unwrap();

    let tree = Tree::from_file(infile, root)?;
    let index = tree.index()?;

    for (start, members) in index.chain_map() {
        let length = members.len() + 1;
        if length < opt_min {
            continue;
        }
        writer.write_fmt(format_args!(
            "{}\t{}\t{}\n",
            start,
            length,
            members.iter().join(",")
        ))?;
    }

    Ok(())
}
