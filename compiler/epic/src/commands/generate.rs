//! The `generate` command: run a full pass and write every unit to disk.

use crate::cli::{GenerateArgs, OutputFormat};
use crate::{load_config, read_graph, CliError, DirectorySink};

use super::{plural_s, report, Exit};

pub fn generate(args: &GenerateArgs) -> Result<Exit, CliError> {
    let config = load_config(args.report.config.as_deref())?;
    let graph = read_graph(&args.graph)?;

    let mut sink = DirectorySink::new(&args.out);
    let outcome = epi_gen::generate(&graph, &config, &mut sink);
    report(&outcome, &args.report);

    if args.report.format == OutputFormat::Terminal && !outcome.halted {
        let count = outcome.units_written.len();
        println!(
            "wrote {count} unit{} to {}",
            plural_s(count),
            args.out.display()
        );
    }
    Ok(Exit::from_outcome(&outcome))
}
