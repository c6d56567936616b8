// command-line interface for svghit

use clap::crate_version;

use svghit::svghit_cli_only::LOG_ENV_VAR;
use svghit::{CurveHandling, Point};

use std::path::PathBuf;

pub fn build_cli() -> clap::Command {
    clap::Command::new("svghit")
        .version(concat!("version ", crate_version!()))
        .about("Test points against regions described by SVG path data")
        .disable_version_flag(true)
        .arg(
            clap::Arg::new("version")
                .short('v')
                .long("version")
                .help("Display the version information")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("point")
                .long("point")
                .num_args(1)
                .value_name("x,y")
                .allow_hyphen_values(true)
                .value_parser(parse_point)
                .help("Point to test; may be given more than once")
                .action(clap::ArgAction::Append),
        )
        .arg(
            clap::Arg::new("path")
                .short('p')
                .long("path")
                .num_args(1)
                .value_name("data")
                .allow_hyphen_values(true)
                .conflicts_with("regions")
                .help("SVG path data to test the points against")
                .action(clap::ArgAction::Set),
        )
        .arg(
            clap::Arg::new("regions")
                .short('r')
                .long("regions")
                .num_args(1)
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("JSON file that maps region ids to path data")
                .action(clap::ArgAction::Set),
        )
        .arg(
            clap::Arg::new("tolerance")
                .short('t')
                .long("tolerance")
                .num_args(1)
                .value_name("distance")
                .default_value("0")
                .value_parser(parse_tolerance)
                .help("Select the nearest region if a point misses all of them by at most this much")
                .action(clap::ArgAction::Set),
        )
        .arg(
            clap::Arg::new("curves")
                .long("curves")
                .num_args(1)
                .value_name("mode")
                .default_value("skip")
                .value_parser(parse_curve_handling)
                .help("How to treat curve commands [legacy, skip, chord]")
                .action(clap::ArgAction::Set),
        )
        .arg(
            clap::Arg::new("all")
                .short('a')
                .long("all")
                .requires("regions")
                .help("Report every region instead of only the selected one")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("json")
                .long("json")
                .help("Print results as JSON, one document per point")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("log")
                .long("log")
                .help(format!(
                    "Print diagnostics while loading regions (same as setting {LOG_ENV_VAR})"
                ))
                .action(clap::ArgAction::SetTrue),
        )
}

pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("Invalid value: '{s}' is not of the form x,y"))?;

    let coordinate = |c: &str| match c.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("Invalid value: '{c}' is not a finite number")),
    };

    Ok(Point::new(coordinate(x)?, coordinate(y)?))
}

fn parse_tolerance(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(t) if t >= 0.0 => Ok(t),
        _ => Err(format!(
            "Invalid value: The argument '{s}' is not a non-negative number"
        )),
    }
}

fn parse_curve_handling(s: &str) -> Result<CurveHandling, String> {
    match s.to_ascii_lowercase().as_str() {
        "legacy" => Ok(CurveHandling::Legacy),
        "skip" => Ok(CurveHandling::SkipOperands),
        "chord" => Ok(CurveHandling::Chord),
        _ => Err(format!(
            "Invalid value: '{s}' is not one of legacy, skip, chord"
        )),
    }
}
