use std::{path::PathBuf, process::exit};

use anyhow::Result;
use clap::ArgMatches;
use dotenvy::dotenv;
use tracing::{error, warn, Level};

mod command_parser;

use bookscout::{
    config::Config,
    display::{
        shelf_marker, BookDetail, DisplayTerminal, NO_RESULTS, SEARCH_FAILED, SHELF_EMPTY,
    },
    normalize,
    openlibrary::{prepare_query, OpenLibrary},
    shelf::{FileSlot, ShelfStore},
    types::{AuthorRecord, Book, WorkDetail},
    wikipedia::Wikipedia,
};
use command_parser::joined;

type Shelf = ShelfStore<FileSlot>;

fn init_tracing(config: &Config, verbose: u8) {
    let level = match verbose {
        0 => config.tracing_level(),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn open_shelf(matches: &ArgMatches, config: &Config) -> Shelf {
    let path = matches
        .get_one::<String>("shelf")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.shelf_path());
    ShelfStore::open(FileSlot::new(path))
}

fn print_status(message: impl ToString, config: &Config) {
    println!("{}", config.output_status.format_str(message));
}

fn print_books(books: &[Book], shelf: &Shelf, config: &Config) {
    if books.is_empty() {
        print_status(NO_RESULTS, config);
        return;
    }
    for book in books {
        println!(
            "{} {}",
            shelf_marker(shelf.contains(&book.work_key), config),
            book.fmt_to_string(config)
        );
    }
}

/// Work, author record and book for a work key. A failed author lookup only costs the author
/// details.
async fn lookup_work(
    ol: &OpenLibrary,
    key: &str,
) -> Result<(Book, WorkDetail, Option<AuthorRecord>)> {
    let work = ol.get_work(key).await?;
    let author = match work.first_author_ref() {
        Some(author_ref) => match ol.get_author(author_ref).await {
            Ok(author) => Some(author),
            Err(e) => {
                warn!("Author lookup failed: {e:#}");
                None
            }
        },
        None => None,
    };
    let book = work.to_book(author.as_ref().and_then(|a| a.name.clone()));
    Ok((book, work, author))
}

async fn handle_command(matches: &ArgMatches, config: &Config) -> Result<()> {
    let ol = OpenLibrary::from_config(config);
    match matches.subcommand() {
        Some(("search", sub)) => {
            let query = joined(sub, "query");
            let query = match prepare_query(&query) {
                Ok(query) => query,
                Err(e) => {
                    print_status(e, config);
                    return Ok(());
                }
            };
            let limit = sub
                .get_one::<u32>("limit")
                .copied()
                .unwrap_or(config.search_limit);
            let books = ol.search_books(query, limit).await?;
            print_books(&books, &open_shelf(matches, config), config);
        }
        Some(("subject", sub)) => {
            let subject = joined(sub, "name");
            let limit = sub
                .get_one::<u32>("limit")
                .copied()
                .unwrap_or(config.subject_limit);
            let books = ol.get_by_subject(&subject, limit).await?;
            print_books(&books, &open_shelf(matches, config), config);
        }
        Some(("home", _)) => {
            let shelf = open_shelf(matches, config);
            for subject in &config.home_subjects {
                println!("{}", config.output_heading.format_str(subject));
                match ol.get_by_subject(subject, config.subject_limit).await {
                    Ok(books) => print_books(&books, &shelf, config),
                    Err(e) => {
                        error!("{e:#}");
                        print_status(SEARCH_FAILED, config);
                    }
                }
                println!();
            }
        }
        Some(("work", sub)) => {
            let key = sub.get_one::<String>("key").map(String::as_str).unwrap_or_default();
            let (book, work, author) = lookup_work(&ol, key).await?;
            let wiki = Wikipedia::from_config(config);
            let author_name = author
                .as_ref()
                .and_then(|a| a.name.clone())
                .or_else(|| book.author.clone())
                .unwrap_or_default();
            let summary = wiki.get_author_summary(&author_name).await;
            let shelf = open_shelf(matches, config);
            let detail = BookDetail {
                book:     &book,
                work:     Some(&work),
                author:   author.as_ref(),
                wiki:     summary.as_ref(),
                on_shelf: shelf.contains(&book.work_key),
            };
            println!("{}", detail.fmt_to_string(config));
        }
        Some(("shelf", sub)) => {
            let mut shelf = open_shelf(matches, config);
            match sub.subcommand() {
                Some(("list", _)) => {
                    if shelf.is_empty() {
                        print_status(SHELF_EMPTY, config);
                    }
                    for entry in shelf.list() {
                        println!("{}", entry.fmt_to_string(config));
                    }
                }
                Some(("toggle", sub)) => {
                    let key = sub.get_one::<String>("key").map(String::as_str).unwrap_or_default();
                    let key = normalize::work_key(key);
                    // Removing needs nothing but the key.
                    let book = if shelf.contains(key) {
                        Book {
                            work_key: key.to_string(),
                            ..Book::default()
                        }
                    } else {
                        lookup_work(&ol, key).await?.0
                    };
                    if !book.is_usable() {
                        print_status(format!("No work found for \"{key}\"."), config);
                        return Ok(());
                    }
                    let added = shelf.toggle(&book);
                    let status = shelf.save();
                    let title = book.title.as_deref().unwrap_or(book.work_key.as_str());
                    if added {
                        print_status(format!("Added \"{title}\" to your shelf."), config);
                    } else {
                        print_status(format!("Removed \"{title}\" from your shelf."), config);
                    }
                    if !status.is_saved() {
                        print_status("The shelf could not be saved.", config);
                    }
                }
                Some((name, _)) => unreachable!("unknown shelf subcommand {}", name),
                None => unreachable!("subcommand required"),
            }
        }
        Some(("config", _)) => {
            print!("{}", Config::default_as_string()?);
        }
        Some((name, _)) => unreachable!("unknown subcommand {}", name),
        None => unreachable!("subcommand required"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let matches = command_parser::arg_parser().get_matches();
    let config = Config::read_config()?;
    init_tracing(&config, matches.get_count("verbose"));

    if let Err(e) = handle_command(&matches, &config).await {
        error!("{e:#}");
        eprintln!("{}", config.output_error.format_str(SEARCH_FAILED));
        exit(1);
    }
    Ok(())
}
