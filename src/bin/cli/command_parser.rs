use clap::{value_parser, Arg, ArgAction, Command};

pub fn arg_parser() -> Command {
    Command::new("bookscout")
        .about("Find your next book on Open Library")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Log more (repeat for more detail)"),
        )
        .arg(
            Arg::new("shelf")
                .long("shelf")
                .global(true)
                .value_name("PATH")
                .help("Shelf file to use instead of the configured one"),
        )
        .subcommand(
            Command::new("search")
                .about("Search books by title, author or anything else")
                .arg(Arg::new("query").required(true).num_args(1..))
                .arg(
                    Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("work")
                .about("Show details of a work, with its author")
                .arg(Arg::new("key").required(true)),
        )
        .subcommand(
            Command::new("subject")
                .about("List books about a subject")
                .arg(Arg::new("name").required(true).num_args(1..))
                .arg(
                    Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(Command::new("home").about("Browse the configured home subjects"))
        .subcommand(
            Command::new("shelf")
                .about("Manage saved books")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("List saved books, newest first"))
                .subcommand(
                    Command::new("toggle")
                        .about("Save a work, or remove it if it is already saved")
                        .arg(Arg::new("key").required(true)),
                ),
        )
        .subcommand(Command::new("config").about("Print the default configuration"))
}

/// Words of a multi-word positional argument joined back together.
pub fn joined(matches: &clap::ArgMatches, id: &str) -> String {
    matches
        .get_many::<String>(id)
        .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}
