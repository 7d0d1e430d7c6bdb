use clap::Parser;
use testrun_report::cli::commands::cmd_render;
use testrun_report::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Render {
            run,
            format,
            output_dir,
        } => {
            // Resolve settings: CLI > config > defaults
            let format = format.as_deref().unwrap_or(&config.render.format);
            let output_dir = output_dir.as_deref().unwrap_or(&config.render.output_dir);

            let no_failures = cmd_render(&run, format, output_dir, cli.verbose)?;
            if !no_failures {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
