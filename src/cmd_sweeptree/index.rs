use clap::*;
use indexmap::IndexSet;
use itertools::Itertools;
use serde::Serialize;
use std::io::Write;
use sweeptree::libs::phylo::{Edge, Tree, TreeIndex};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("index")
        .about("Prints every derived relation of every genotype")
        .after_help(
            r###"
Builds the tree from an edge list and prints, for every genotype, its parent,
children, siblings, ancestors, descendants and the chain it starts.

Output format:
* TSV (default), one row per genotype, lists joined by commas:
  genotype	parent	children	siblings	ancestors	descendants	chain
  `-` marks a missing entry (parent of the root, a genotype without siblings,
  a genotype that does not start a chain). An empty list is an empty field.

* JSON (--format json): an object with `nodes`, `edges` and one map per
  relation (`descendants`, `ancestors`, `direct_children`, `direct_parent`,
  `siblings`, `chains`).

Examples:
1. TSV:
   sweeptree index tests/edges/example.tsv

2. JSON:
   sweeptree index tests/edges/example.json --format json
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
            Arg::new("format")
                .long("format")
                .value_parser(["tsv", "json"])
                .default_value("tsv")
                .help("Output format"),
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

#[derive(Serialize)]
struct IndexOutput<'a> {
    nodes: &'a IndexSet<String>,
    edges: &'a [Edge],
    #[serde(flatten)]
    index: &'a TreeIndex,
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = sweeptree::writer(args.get_one::<String>("outfile").unwrap())?;
    let infile = args.get_one::<String>("infile").unwrap();
    let root = args.get_one::<String>("root").unwrap();
    let format = args.get_one::<String>("format").unwrap();

    let tree = Tree::from_file(infile, root)?;
    let index = tree.index()?;

    if format == "json" {
        let output = IndexOutput {
            nodes: tree.node_ids(),
            edges: tree.edges(),
            index: &index,
        };
        serde_json::to_writer_pretty(&mut writer, &output)?;
        writer.write_all(b"\n")?;
        return Ok(());
    }

    writer.write_fmt(format_args!(
        "genotype\tparent\tchildren\tsiblings\tancestors\tdescendants\tchain\n"
    ))?;
    for name in tree.node_ids() {
        writer.write_fmt(format_args!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            name,
            index.direct_parent(name).unwrap_or("-"),
            index.direct_children(name).iter().join(","),
            index
                .siblings(name)
                .map_or("-".to_string(), |s| s.iter().join(",")),
            index.ancestors(name).iter().join(","),
            index.descendants(name).iter().join(","),
            index
                .chain(name)
                .map_or("-".to_string(), |c| c.iter().join(",")),
        ))?;
    }

    Ok(())
}
