use clap::{Arg, Command};

pub const SCHEMA_CMD: &str = "schema";

pub fn create_schema_cli() -> Command {
    Command::new(SCHEMA_CMD)
        .author("FinnGen")
        .about("Print the storage column layout of a table")
        .arg(
            Arg::new("table")
                .short('t')
                .long("table")
                .value_parser(["colocalization", "causal_variant"])
                .default_value("colocalization")
                .help("Which table to describe"),
        )
        .arg(
            Arg::new("prefix")
                .short('p')
                .long("prefix")
                .help("Prefix prepended to every column name"),
        )
}
