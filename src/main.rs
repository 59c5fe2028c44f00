// qsim main: parse flags, merge config, dispatch subcommands.
use clap::Parser; // trait import enables QsimCli::parse()

use qsim::cli::{Command, QsimCli};
use qsim::commands;
use qsim::config::{resolve_config_path, Settings};
use qsim::core::debug;
use qsim::debug_log;

fn main() -> anyhow::Result<()> {
    let args = QsimCli::parse();

    if args.debug {
        debug::enable();
    }

    match args.cmd {
        Some(Command::Simulate { input, format, out, bloch, strategy, precision }) => {
            debug_log!("[config] using {:?}", resolve_config_path(&args.config));
            let mut settings = Settings::load(&args.config)?;
            if let Some(f) = format {
                settings.format = f.into();
            }
            if let Some(s) = strategy {
                settings.strategy = s.into();
            }
            if let Some(p) = precision {
                settings.precision = p;
            }
            settings.bloch |= bloch;
            commands::simulate::main(input, out, &settings)
        }

        Some(Command::Gates) => commands::gates::main(),

        None => {
            use clap::CommandFactory;
            QsimCli::command().print_help().ok();
            println!();
            Ok(())
        }
    }
}
