//! Terminal rendering of books, shelf entries and the book detail view.

use crate::{
    config::{Config, Styleable},
    openlibrary::work_page_url,
    types::{
        build_cover_url, AuthorRecord, AuthorSummary, Book, CoverSize, ShelfEntry, WorkDetail,
    },
};

pub const SEARCH_FAILED: &str = "Something went wrong. Please try again.";
pub const NO_RESULTS: &str = "No results found.";
pub const SHELF_EMPTY: &str = "Your shelf is empty.";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

pub trait DisplayTerminal {
    fn fmt_to_string(&self, config: &Config) -> String;
}

fn title_line(
    title: Option<&str>,
    author: Option<&str>,
    year: Option<i64>,
    work_key: &str,
    config: &Config,
) -> String {
    let mut parts = vec![config
        .output_book
        .format_str(title.filter(|t| !t.is_empty()).unwrap_or("Untitled"))];
    if let Some(author) = author.filter(|a| !a.is_empty()) {
        parts.push(config.output_author.format_str(author));
    }
    if let Some(year) = year {
        parts.push(config.output_year.format_str(year));
    }
    parts.push(config.output_work_key.format_str(work_key));
    parts.join(" ")
}

impl DisplayTerminal for Book {
    fn fmt_to_string(&self, config: &Config) -> String {
        let mut s = title_line(
            self.title.as_deref(),
            self.author.as_deref(),
            self.year,
            &self.work_key,
            config,
        );
        if let Some(count) = self.edition_count.filter(|c| *c > 0) {
            s.push(' ');
            s.push_str(&config.output_editions.format_str(count));
        }
        if !self.subjects.is_empty() {
            s.push(' ');
            s.push_str(&config.output_subjects.format_vec(&self.subjects));
        }
        s
    }
}

impl DisplayTerminal for ShelfEntry {
    fn fmt_to_string(&self, config: &Config) -> String {
        title_line(
            self.title.as_deref(),
            self.author.as_deref(),
            self.year,
            &self.work_key,
            config,
        )
    }
}

/// Marker shown in front of books that are on the shelf.
pub fn shelf_marker(on_shelf: bool, config: &Config) -> String {
    if on_shelf {
        config.output_shelf.format_str("*")
    } else {
        "   ".to_string()
    }
}

/// Everything known about one book, as shown by the detail view. The work, author record and
/// encyclopedia summary are each optional since their lookups may fail independently.
#[derive(Debug, Clone, Copy)]
pub struct BookDetail<'a> {
    pub book:     &'a Book,
    pub work:     Option<&'a WorkDetail>,
    pub author:   Option<&'a AuthorRecord>,
    pub wiki:     Option<&'a AuthorSummary>,
    pub on_shelf: bool,
}

impl<'a> BookDetail<'a> {
    pub fn title(&self) -> &'a str {
        self.book
            .title
            .as_deref()
            .or_else(|| self.work.and_then(|w| w.title.as_deref()))
            .unwrap_or("Book")
    }

    pub fn description(&self) -> &'a str {
        self.work
            .map(|w| w.description.as_str())
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DESCRIPTION)
    }

    /// Work subjects up to `limit`, or the book's own subjects when the work has none.
    pub fn subjects(&self, limit: usize) -> Vec<&'a str> {
        match self.work.filter(|w| !w.subjects.is_empty()) {
            Some(work) => work.subjects.iter().take(limit).map(String::as_str).collect(),
            None => self.book.subjects.iter().map(String::as_str).collect(),
        }
    }

    /// Empty when no source knows the author.
    pub fn author_name(&self) -> &'a str {
        self.author
            .and_then(|a| a.name.as_deref())
            .or(self.book.author.as_deref())
            .unwrap_or("")
    }

    pub fn cover_url(&self) -> String {
        build_cover_url(self.book.cover.as_ref(), CoverSize::L)
    }

    pub fn page_url(&self) -> String {
        match self.work.filter(|w| !w.key.is_empty()) {
            Some(work) => work_page_url(&work.key),
            None => work_page_url(&self.book.work_key),
        }
    }

    pub fn shelf_action(&self) -> &'static str {
        if self.on_shelf {
            "Remove from shelf"
        } else {
            "Add to shelf"
        }
    }
}

impl DisplayTerminal for BookDetail<'_> {
    fn fmt_to_string(&self, config: &Config) -> String {
        let mut lines = vec![config.output_heading.format_str(self.title())];
        let author = self.author_name();
        lines.push(
            config
                .output_author
                .format_str(if author.is_empty() { UNKNOWN_AUTHOR } else { author }),
        );
        if let Some(year) = self.book.year {
            let year = year.style(&config.output_year.style_content);
            lines.push(format!("First published: {year}"));
        }
        if let Some(count) = self.book.edition_count.filter(|c| *c > 0) {
            lines.push(config.output_editions.format_str(count));
        }
        lines.push(format!("Cover: {}", config.output_link.format_str(self.cover_url())));
        lines.push(String::new());
        lines.push(config.output_description.format_str(self.description()));
        let subjects = self.subjects(config.subject_detail_limit);
        if !subjects.is_empty() {
            lines.push(String::new());
            lines.push(config.output_subjects.format_vec(&subjects));
        }
        lines.push(String::new());
        let heading = if author.is_empty() { "Author" } else { author };
        lines.push(config.output_heading.format_str(heading));
        if let Some(wiki) = self.wiki {
            for field in [&wiki.short_description, &wiki.extract, &wiki.image_url] {
                if let Some(value) = field.as_deref().filter(|v| !v.is_empty()) {
                    lines.push(value.to_string());
                }
            }
        } else if let Some(author) = self.author.filter(|a| !a.bio.is_empty()) {
            lines.push(author.bio.clone());
        }
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            config.output_status.format_str(self.shelf_action()),
            config.output_link.format_str(self.page_url())
        ));
        lines.join("\n")
    }
}
