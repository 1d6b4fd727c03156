use clap::*;
use std::io::Write;
use sweeptree::libs::phylo::Tree;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("query")
        .about("Prints one relation of selected genotypes")
        .after_help(
            r###"
Prints the genotypes related to each selected genotype, one per line.

Relations:
* descendants: all genotypes below, in preorder
* ancestors:   all genotypes above
* children:    immediate children, in edge order
* parent:      immediate parent (nothing for the root)
* siblings:    other children of the same parent
* chain:       genotypes following it in the linear segment it starts

Unknown genotypes print nothing.

Examples:
1. Descendants of A:
   sweeptree query tests/edges/example.tsv -n A

2. Siblings of C:
   sweeptree query tests/edges/example.tsv -n C --relation siblings
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
            Arg::new("node")
                .long("node")
                .short('n')
                .num_args(1)
                .required(true)
                .action(ArgAction::Append)
                .help("Genotype to query"),
        )
        .arg(
            Arg::new("relation")
                .long("relation")
                .short('r')
                .value_parser([
                    "descendants",
                    "ancestors",
                    "children",
                    "parent",
                    "siblings",
                    "chain",
                ])
                .default_value("descendants")
                .help("Relation to print"),
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
    let relation = args.get_one::<String>("relation").unwrap();

    let tree = Tree::from_file(infile, root)?;
    let index = tree.index()?;

    for name in args.get_many::<String>("node").unwrap() {
        if tree.get_node_by_name(name).is_none() {
            tracing::warn!(genotype = %name, "unknown genotype");
            continue;
        }

        let related: Vec<&str> = match relation.as_str() {
            "descendants" => index.descendants(name).iter().map(String::as_str).collect(),
            "ancestors" => index.ancestors(name).iter().map(String::as_str).collect(),
            "children" => index.direct_children(name).iter().map(String::as_str).collect(),
            "parent" => index.direct_parent(name).into_iter().collect(),
            "siblings" => index
                .siblings(name)
                .unwrap_or_default()
                .iter()
                .map(String::as_str)
                .collect(),
            "chain" => index
                .chain(name)
                .unwrap_or_default()
                .iter()
                .map(String::as_str)
                .collect(),
            _ => unreachable!(),
        };

        for r in related {
            writer.write_fmt(format_args!("{}\n", r))?;
        }
    }

    Ok(())
}
