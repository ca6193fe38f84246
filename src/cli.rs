use clap::{Parser, Subcommand, ValueEnum};

use atelier::content::Lang;

/// CLI over the portfolio content engine, for debugging and development
#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "Query the bilingual portfolio content tree", long_about = None)]
pub struct Cli {
    /// Content language
    #[arg(long, global = true, value_enum, default_value_t = LangArg::En)]
    pub lang: LangArg,

    /// Base URL that remote documents and media indexes resolve against
    #[arg(long, global = true, default_value = "http://127.0.0.1:3000/")]
    pub base_url: String,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LangArg {
    En,
    Zh,
}

impl From<LangArg> for Lang {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Lang::En,
            LangArg::Zh => Lang::Zh,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the three themes
    Themes,
    /// List projects, optionally for one theme
    Projects {
        /// Filter by theme id (tian, ren, di)
        #[arg(short, long)]
        theme: Option<String>,
    },
    /// Search the content tree
    Search {
        /// Free-text query
        query: String,
    },
    /// Print normalized media groups for a project
    Media { slug: String },
    /// Fetch and print a project's brief
    Brief { slug: String },
    /// Fetch and print a project's overview document
    Overview { slug: String },
    /// Fetch and print a project's remote updates log
    Updates { slug: String },
    /// Content and cache statistics
    Stats,
}
