use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Batch, BatchPaths, RunContext};
use crate::errors::AppResult;
use crate::export::{print_summary, write_summary_json};
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `run` command
pub fn handle(cmd: &Commands, cfg: Config) -> AppResult<()> {
    if let Commands::Run {
        input,
        template,
        output,
        summary,
        dry_run,
    } = cmd
    {
        // CLI paths win over the `paths` section of the config
        let paths = BatchPaths {
            input: expand_tilde(input.as_deref().unwrap_or(&cfg.paths.input)),
            template: expand_tilde(template.as_deref().unwrap_or(&cfg.paths.template)),
            output_dir: expand_tilde(output.as_deref().unwrap_or(&cfg.paths.output_dir)),
        };

        info(format!(
            "Processing {} with template {}",
            paths.input.display(),
            paths.template.display()
        ));

        let mut ctx = RunContext::new(cfg);
        let result = Batch::new(paths).dry_run(*dry_run).run(&mut ctx)?;

        print_summary(&result);

        if let Some(file) = summary {
            let path = expand_tilde(file);
            write_summary_json(&result, &path)?;
            success(format!("Summary written to {}", path.display()));
        }
    }
    Ok(())
}
