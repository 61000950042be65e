use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use coloc_cli::{consts, parse, schema};

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("FinnGen")
        .about("Parse, validate and describe genomic colocalization tables.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log per-row detail (RUST_LOG overrides)"),
        )
        .subcommand(parse::cli::create_parse_cli())
        .subcommand(schema::cli::create_schema_cli())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        //
        // PARSE
        //
        Some((parse::cli::PARSE_CMD, matches)) => {
            parse::handlers::run_parse(matches)?;
        }

        //
        // SCHEMA
        //
        Some((schema::cli::SCHEMA_CMD, matches)) => {
            schema::handlers::run_schema(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_parse_flags() {
        let matches = build_parser()
            .try_get_matches_from(["coloc", "-v", "parse", "in.tsv", "--header"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, parse::cli::PARSE_CMD);
        assert!(sub.get_flag("header"));
        assert!(!sub.get_flag("skip-malformed"));
    }
}
