//! The `check` command: validate without writing.

use crate::cli::{CheckArgs, OutputFormat};
use crate::{load_config, read_graph, CliError};

use super::{plural_s, report, Exit};

pub fn check(args: &CheckArgs) -> Result<Exit, CliError> {
    let config = load_config(args.report.config.as_deref())?;
    let graph = read_graph(&args.graph)?;

    let outcome = epi_gen::check(&graph, &config);
    report(&outcome, &args.report);

    if args.report.format == OutputFormat::Terminal && !outcome.has_errors() {
        let roots = epi_gen::collect_roots(&graph).len();
        println!("OK: {} ({roots} logged type{})", args.graph.display(), plural_s(roots));
    }
    Ok(Exit::from_outcome(&outcome))
}
