use anyhow::Context;
use clap::{ArgAction, Parser};
use gbranch::config::GbranchConfig;
use gbranch::git::exit_code;
use gbranch::styling::eprintln;
use std::process;

mod commands;

use commands::{handle_list, handle_passthrough};

#[derive(Parser)]
#[command(name = "gbranch")]
#[command(about = "Aligned, width-aware `git branch -vv`", long_about = None)]
#[command(version)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(after_help = "\
With no arguments, lists local branches as aligned columns:
  marker  name  subject - upstream

The checked-out branch is highlighted. Any other arguments are passed to
`git branch` unchanged, so `gbranch -d old` deletes a branch as usual.

CONFIGURATION:
  GBRANCH_SYMBOL  Glyph for the checked-out branch (default: ⭕️)
  GBRANCH_FG      Highlight color: red (default), hired, blue, hiblue,
                  yellow, hiyellow, black, hiblack
  Both may also be set as `symbol` and `fg` in ~/.config/gbranch/config.toml")]
struct Cli {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Arguments forwarded to `git branch`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    git_args: Vec<String>,
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format(|buf, record| {
            use anstyle::Style;
            use std::io::Write;

            let msg = record.args().to_string();
            let dim = Style::new().dimmed();

            // Commands start with $, make only the command bold
            if let Some(command) = msg.strip_prefix("$ ") {
                let bold = Style::new().bold();
                writeln!(buf, "{dim}[gbranch]{dim:#} $ {bold}{command}{bold:#}")
            } else {
                writeln!(buf, "{dim}[gbranch]{dim:#} {msg}")
            }
        })
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if !cli.git_args.is_empty() {
        return handle_passthrough(&cli.git_args);
    }

    let config = GbranchConfig::load().context("Failed to load config")?;
    handle_list(&config.display())?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = run(cli) {
        // GitError and GbranchError render their own emoji and colors
        eprintln!("{e:#}");

        // Preserve git's exit code in passthrough mode
        process::exit(exit_code(&e).unwrap_or(1));
    }
}
