use clap::{Arg, ArgAction, Command, arg};

pub const PARSE_CMD: &str = "parse";

pub fn create_parse_cli() -> Command {
    Command::new(PARSE_CMD)
        .author("FinnGen")
        .about("Parse a colocalization table and print one JSON record per line")
        .arg_required_else_help(true)
        .arg(arg!(<input> "Tab-delimited input (.gz allowed), or - for stdin"))
        .arg(
            Arg::new("header")
                .long("header")
                .action(ArgAction::SetTrue)
                .help("Skip the first line of the input"),
        )
        .arg(
            Arg::new("skip-malformed")
                .long("skip-malformed")
                .action(ArgAction::SetTrue)
                .help("Log and skip malformed rows instead of stopping at the first one"),
        )
}
