use clap::*;
use std::io::Write;
use sweeptree::libs::phylo::Tree;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("stat")
        .about("Prints statistics about a genotype tree")
        .after_help(
            r###"
Prints information about the tree built from an edge list.

Output format:
* Key-value pairs (TSV, default):
  nodes	10
  edges	9
  leaves	4
  ...

* Tab-separated values (--style line):
  nodes	edges	leaves	branchings	chains	depth	detached
  10	9	4	2	6	5	0

`detached` counts genotypes that are not reachable from the root.

Examples:
1. Default statistics:
   sweeptree stat tests/edges/clonal.tsv

2. Single line:
   sweeptree stat tests/edges/clonal.tsv --style line
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
            Arg::new("style")
                .long("style")
                .value_parser(["col", "line"])
                .default_value("col")
                .help("Output style. [col] for key-value pairs, [line] for TSV"),
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
    let style = args.get_one::<String>("style").unwrap();

    let tree = Tree::from_file(infile, root)?;
    let index = tree.index()?;

    let n_node = tree.len();
    let n_edge = tree.edges().len();
    let n_leaf = tree.get_leaves()?.len();
    let n_branching = tree.count_branchings();
    let n_chain = index.chain_map().len();
    let depth = tree.max_depth()?;
    let n_detached = n_node - tree.preorder(tree.get_root())?.len();

    if style == "line" {
        writer.write_fmt(format_args!(
            "nodes\tedges\tleaves\tbranchings\tchains\tdepth\tdetached\n"
        ))?;
        writer.write_fmt(format_args!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            n_node, n_edge, n_leaf, n_branching, n_chain, depth, n_detached
        ))?;
    } else {
        writer.write_fmt(format_args!("nodes\t{}\n", n_node))?;
        writer.write_fmt(format_args!("edges\t{}\n", n_edge))?;
        writer.write_fmt(format_args!("leaves\t{}\n", n_leaf))?;
        writer.write_fmt(format_args!("branchings\t{}\n", n_branching))?;
        writer.write_fmt(format_args!("chains\t{}\n", n_chain))?;
        writer.write_fmt(format_args!("depth\t{}\n", depth))?;
        writer.write_fmt(format_args!("detached\t{}\n", n_detached))?;
    }

    Ok(())
}
