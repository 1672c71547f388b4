//! design-preflight CLI entry point
//!
//! Design-system compliance checks for the contest platform front-end.

use clap::Parser;
use log::{debug, error};

use design_preflight::cli::args::{CheckArgs, Cli, Command, ContrastArgs, OutputFormat, StatusArgs};
use design_preflight::cli::output::{format_comparison, format_contrast, format_status, get_formatter, Palette};
use design_preflight::engine::orchestrator::create_all_checks;
use design_preflight::engine::result::{compare_to_baseline, load_baseline, save_as_baseline};
use design_preflight::status::platform_status;
use design_preflight::validation::validate_contrast_ratio;
use design_preflight::version::get_build_info;
use design_preflight::{run_audit, AuditConfig, CheckCategory, DesignPreflightError};

use std::process::ExitCode;

const RUNTIME_ERROR: u8 = 3;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version go to stdout and succeed
            let code = if e.use_stderr() { RUNTIME_ERROR } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };
    let command = cli.into_command();

    let verbose = matches!(&command, Command::Check(args) if args.output.verbose);
    init_logging(verbose);

    let result = match command {
        Command::Check(args) => run_checks(&args),
        Command::Status(args) => Ok(print_status(&args)),
        Command::Contrast(args) => print_contrast(&args),
        Command::List => {
            print_check_list();
            Ok(0)
        }
        Command::Version => {
            println!("{}", get_build_info());
            Ok(0)
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(RUNTIME_ERROR)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn print_check_list() {
    let checks = create_all_checks();
    println!("Available checks:");

    for category in CheckCategory::ALL {
        println!();
        println!("{} CHECKS:", category.to_string().to_uppercase());
        for check in checks.iter().filter(|c| c.category == category) {
            println!("  {:<12} {}", check.id, check.name);
        }
    }
}

fn run_checks(args: &CheckArgs) -> Result<u8, DesignPreflightError> {
    let config = AuditConfig::from_args(args)?;
    debug!("running audit with theme {}", config.design.theme);

    let report = run_audit(&config);

    let output = &args.output;
    let color = output.color_enabled();
    let formatter = get_formatter(&output.format, color, output.verbose, output.quiet);
    println!("{}", formatter.format(&report));

    if let Some(ref path) = args.baseline {
        let baseline = load_baseline(path)?;
        let comparison = compare_to_baseline(&report, &baseline);
        let rendered = format_comparison(&comparison, Palette::new(color));
        if output.format == OutputFormat::Text {
            println!("\n{}", rendered);
        } else {
            eprintln!("{}", rendered);
        }
    }

    if let Some(ref path) = args.save_baseline {
        save_as_baseline(&report, path)?;
        debug!("baseline written to {}", path);
    }

    Ok(report.summary().exit_code())
}

fn print_status(args: &StatusArgs) -> u8 {
    let status = platform_status(args.active_theme());
    let color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
    println!("{}", format_status(&status, args.json, Palette::new(color)));

    if status.is_valid() {
        0
    } else {
        1
    }
}

fn print_contrast(args: &ContrastArgs) -> Result<u8, DesignPreflightError> {
    let result = validate_contrast_ratio(&args.foreground, &args.background)?;
    let color = std::env::var_os("NO_COLOR").is_none();
    println!(
        "{}",
        format_contrast(&args.foreground, &args.background, &result, args.json, Palette::new(color))
    );

    Ok(if result.is_valid_normal { 0 } else { 1 })
}
