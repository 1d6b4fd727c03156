extern crate clap;
use clap::*;

mod cmd_sweeptree;

fn main() -> anyhow::Result<()> {
    let app = Command::new("sweeptree")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`sweeptree` - Genotype lineage indices for clonal sweep plots")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true)
                .help("Log more to stderr (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(cmd_sweeptree::stat::make_subcommand())
        .subcommand(cmd_sweeptree::index::make_subcommand())
        .subcommand(cmd_sweeptree::query::make_subcommand())
        .subcommand(cmd_sweeptree::chains::make_subcommand())
        .subcommand(cmd_sweeptree::emerge::make_subcommand())
        .subcommand(cmd_sweeptree::elbow::make_subcommand())
        .subcommand(cmd_sweeptree::to_dot::make_subcommand())
        .subcommand(cmd_sweeptree::to_nwk::make_subcommand())
        .after_help(
            r###"Subcommand groups:

* Tree info:
    * stat    - Counts of nodes, leaves, chains
    * index   - Every derived relation of every genotype
    * query   - One relation of one genotype
    * chains  - Linear segments of the tree

* Layout helpers:
    * emerge  - Ancestors emerging at a time point
    * elbow   - Orthogonal connector paths

* Export:
    * to-dot  - Graphviz DOT
    * to-nwk  - Newick

Input edge lists are two-column TSV (source, target) or JSON.

"###,
        );

    let matches = app.get_matches();
    init_logging(matches.get_count("verbose"));

    // Check which subcomamnd the user ran...
    match matches.subcommand() {
        Some(("stat", sub_matches)) => cmd_sweeptree::stat::execute(sub_matches),
        Some(("index", sub_matches)) => cmd_sweeptree::index::execute(sub_matches),
        Some(("query", sub_matches)) => cmd_sweeptree::query::execute(sub_matches),
        Some(("chains", sub_matches)) => cmd_sweeptree::chains::execute(sub_matches),
        Some(("emerge", sub_matches)) => cmd_sweeptree::emerge::execute(sub_matches),
        Some(("elbow", sub_matches)) => cmd_sweeptree::elbow::execute(sub_matches),
        Some(("to-dot", sub_matches)) => cmd_sweeptree::to_dot::execute(sub_matches),
        Some(("to-nwk", sub_matches)) => cmd_sweeptree::to_nwk::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(level)
        .init();
}
