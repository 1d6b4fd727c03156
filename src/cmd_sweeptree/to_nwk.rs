use clap::*;
use std::io::Write;
use sweeptree::libs::phylo::Tree;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("to-nwk")
        .about("Convert a genotype tree to Newick format")
        .after_help(
            r###"
Convert the tree built from an edge list to a Newick string. Every genotype,
internal or leaf, keeps its label. Labels with Newick punctuation or spaces
are single quoted.

Examples:
1. Single line:
   sweeptree to-nwk tests/edges/example.tsv

2. Indented with two spaces:
   sweeptree to-nwk tests/edges/example.tsv --indent "  "
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
            Arg::new("indent")
                .long("indent")
                .num_args(1)
                .help("Indentation text. Omit for a single line"),
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
    let indent = args
        .get_one::<String>("indent")
        .map(String::as_str)
        .unwrap_or("");

    let tree = Tree::from_file(infile, root)?;
    let out_string = tree.to_newick_with_format(indent);
    writer.write_all((out_string + "\n").as_ref())?;

    Ok(())
}
