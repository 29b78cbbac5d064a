//! encdec 命令行入口
//!
//! 用法：
//!   encdec [--report generic|detailed] [--exit-code] -mode enc -key 3 -data "Hello"
//!   encdec -mode dec -alg unicode -in input.txt -out output.txt
//!
//! 双横线选项由 clap 解析，必须写在最前面；
//! 其余 `-flag value` 参数（包括 `-h`）原样交给 `Params::resolve`。

use std::process::ExitCode;

use clap::{ArgAction, Parser};

use encdec::{ReportMode, Reporter};

#[derive(Parser, Debug)]
#[command(
    about = "Shift / unicode substitution cipher for text",
    disable_help_flag = true
)]
struct Cli {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// How failures are reported
    #[arg(long, value_enum, default_value_t = ReportMode::Generic)]
    report: ReportMode,

    /// Exit with status 1 on failure
    #[arg(long)]
    exit_code: bool,

    /// Cipher flags: -mode, -key, -data, -in, -out, -alg
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    params: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let reporter = Reporter::new(cli.report, cli.exit_code);

    match encdec::run(&cli.params) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("run failed: {err:?}");
            reporter.report(
                err.into(),
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
            )
        }
    }
}
