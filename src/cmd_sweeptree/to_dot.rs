use clap::*;
use std::io::Write;
use sweeptree::libs::phylo::Tree;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("to-dot")
        .about("Convert a genotype tree to Graphviz DOT format")
        .after_help(
            r###"
Convert the tree built from an edge list to Graphviz DOT format.
Genotypes not reachable from the root are left out.

Examples:
1. Convert to DOT:
   sweeptree to-dot tests/edges/clonal.tsv

2. Create an image (requires Graphviz installed):
   sweeptree to-dot tests/edges/clonal.tsv | dot -Tpng -o tree.png
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

    let tree = Tree::from_file(infile, root)?;
    writer.write_all(tree.to_dot().as_ref())?;

    Ok(())
}
