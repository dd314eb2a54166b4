use std::path::PathBuf;

use anyhow::Result;
use crossterm::style::Stylize;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::{default_colors::*, openlibrary::DEFAULT_SUBJECT_LIMIT};

pub const OPEN_LIBRARY_URL: &str = "https://openlibrary.org";
pub const WIKIPEDIA_SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    bold:   bool,
    italic: bool,
    color:  crossterm::style::Color,
}

impl StyleConfig {
    fn style(&self, s: impl ToString) -> String {
        let mut s = s.to_string().with(self.color);
        if self.bold {
            s = s.bold();
        }
        if self.italic {
            s = s.italic();
        }
        s.to_string()
    }
}

pub trait Styleable {
    fn style(&self, c: &StyleConfig) -> String;
}

impl<T> Styleable for T
where
    T: ToString + std::fmt::Display,
{
    fn style(&self, c: &StyleConfig) -> String {
        c.style(self)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color:  COLOR_WHITE,
            bold:   false,
            italic: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub prefix:            String,
    pub suffix:            String,
    pub description:       String,
    pub separator:         String,
    pub style_prefix:      StyleConfig,
    pub style_suffix:      StyleConfig,
    pub style_description: StyleConfig,
    pub style_separator:   StyleConfig,
    pub style_content:     StyleConfig,
}

impl OutputConfig {
    pub fn format_str(&self, content: impl ToString) -> String {
        let prefix = self.prefix.style(&self.style_prefix);
        let suffix = self.suffix.style(&self.style_suffix);
        let content = content.to_string().style(&self.style_content);
        if self.description.is_empty() {
            return format!("{prefix}{content}{suffix}");
        }
        let description = self.description.style(&self.style_description);
        format!("{prefix}{description} {content}{suffix}")
    }

    pub fn format_vec(&self, content: &[impl ToString]) -> String {
        let separator = self.separator.style(&self.style_separator);
        let joined = content
            .iter()
            .map(|x| x.to_string().style(&self.style_content))
            .collect::<Vec<_>>()
            .join(&separator);
        let prefix = self.prefix.style(&self.style_prefix);
        let suffix = self.suffix.style(&self.style_suffix);
        if self.description.is_empty() {
            return format!("{prefix}{joined}{suffix}");
        }
        let description = self.description.style(&self.style_description);
        format!("{prefix}{description} {joined}{suffix}")
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix:            "[".into(),
            suffix:            "]".into(),
            description:       "".into(),
            separator:         ", ".into(),
            style_prefix:      StyleConfig::default(),
            style_suffix:      StyleConfig::default(),
            style_description: StyleConfig {
                italic: true,
                ..StyleConfig::default()
            },
            style_separator:   StyleConfig::default(),
            style_content:     StyleConfig::default(),
        }
    }
}

impl OutputConfig {
    fn plain(color: crossterm::style::Color) -> Self {
        Self {
            prefix: "".into(),
            suffix: "".into(),
            style_content: StyleConfig {
                color,
                ..StyleConfig::default()
            },
            ..OutputConfig::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub shelf_location:       PathBuf,
    pub log_level:            String,
    pub open_library_url:     String,
    pub wikipedia_url:        String,
    pub search_limit:         u32,
    pub subject_limit:        u32,
    pub subject_detail_limit: usize,
    pub home_subjects:        Vec<String>,
    pub output_book:          OutputConfig,
    pub output_author:        OutputConfig,
    pub output_year:          OutputConfig,
    pub output_editions:      OutputConfig,
    pub output_subjects:      OutputConfig,
    pub output_description:   OutputConfig,
    pub output_shelf:         OutputConfig,
    pub output_link:          OutputConfig,
    pub output_work_key:      OutputConfig,
    pub output_heading:       OutputConfig,
    pub output_status:        OutputConfig,
    pub output_error:         OutputConfig,
}

impl Config {
    pub fn default_as_string() -> Result<String> {
        Ok(toml::to_string(&Self::default())?)
    }

    pub fn read_config() -> Result<Self> {
        Self::figment().extract().map_err(anyhow::Error::from)
    }

    /// Defaults, then `config.toml`, then `BOOKSCOUT_` environment variables.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("BOOKSCOUT_"))
    }

    /// Shelf location with `~` expanded.
    pub fn shelf_path(&self) -> PathBuf {
        shellexpand::path::tilde(&self.shelf_location).into_owned()
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::WARN)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shelf_location:       PathBuf::from("~/.local/share/bookscout/shelf.json"),
            log_level:            "warn".into(),
            open_library_url:     OPEN_LIBRARY_URL.into(),
            wikipedia_url:        WIKIPEDIA_SUMMARY_URL.into(),
            search_limit:         24,
            subject_limit:        DEFAULT_SUBJECT_LIMIT,
            subject_detail_limit: 12,
            home_subjects:        ["Fantasy", "Mystery", "Romance", "Science Fiction", "History"]
                .into_iter()
                .map(String::from)
                .collect(),
            output_book:          OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_BOOK,
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::plain(COLOR_BOOK)
            },
            output_author:        OutputConfig {
                description: "by".into(),
                ..OutputConfig::plain(COLOR_AUTHOR)
            },
            output_year:          OutputConfig {
                prefix: "(".into(),
                suffix: ")".into(),
                ..OutputConfig::plain(COLOR_YEAR)
            },
            output_editions:      OutputConfig {
                description: "Editions:".into(),
                ..OutputConfig::plain(COLOR_EDITIONS)
            },
            output_subjects:      OutputConfig {
                description: "Subjects:".into(),
                ..OutputConfig::plain(COLOR_SUBJECT)
            },
            output_description:   OutputConfig::plain(COLOR_WHITE),
            output_shelf:         OutputConfig::default(),
            output_link:          OutputConfig::plain(COLOR_LINK),
            output_work_key:      OutputConfig {
                prefix: "(".into(),
                suffix: ")".into(),
                ..OutputConfig::plain(COLOR_DIMMED)
            },
            output_heading:       OutputConfig {
                prefix: "== ".into(),
                suffix: " ==".into(),
                style_content: StyleConfig {
                    color: COLOR_SHELF,
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_status:        OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_DIMMED,
                    italic: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::plain(COLOR_DIMMED)
            },
            output_error:         OutputConfig {
                description: "Error".into(),
                ..OutputConfig::plain(COLOR_ERROR)
            },
        }
    }
}
