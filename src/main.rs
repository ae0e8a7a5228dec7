use clap::Parser;

mod commands;
mod output;

use commands::{migrate, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "forui-migrate")]
#[command(version = VERSION)]
#[command(about = "Rewrite lib/features Dart sources for the ForUI 0.15 API")]
struct Cli {
    #[command(flatten)]
    migrate: migrate::MigrateArgs,

    /// Print the report as a JSON envelope instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let result = migrate::run(cli.migrate, &global);
    let exit_code = output::exit_code(&result);

    let printed = match (cli.json, result) {
        (true, result) => output::print_json(result.map(|(report, _)| report)),
        (false, Ok((report, _))) => {
            output::print_text(&forui_migrate::migrate::render(&report))
        }
        (false, Err(err)) => {
            output::print_error(&err);
            Ok(())
        }
    };
    if let Err(err) = printed {
        output::print_error(&err);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
