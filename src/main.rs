use clap::Parser;
use colored::Colorize;

fn main() {
    let cli = transition_pathway_search::Cli::parse();
    if let Err(err) = transition_pathway_search::run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
