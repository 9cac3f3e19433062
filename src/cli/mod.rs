pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "folio")]
#[command(author = "Folio Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract résumé and portfolio assets for a static portfolio site", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./folio.toml, then the user config dir)
    #[arg(short, long, global = true, env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default folio.toml into the current directory
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long, default_value = "false")]
        force: bool,
    },

    /// Extract a structured résumé record from a PDF or text file
    #[command(long_about = "Extract a structured résumé record from a PDF or text file.\n\n\
        The document text is split into sections (Summary, Experience, Skills,\n\
        Education, Certificates, Projects; English and Vietnamese headers) and\n\
        each field is filled best-effort. Fields that cannot be found are left\n\
        empty. The record is written as indented JSON, replacing the output\n\
        file in one step. A missing or unreadable source aborts without\n\
        touching the output.")]
    Resume {
        /// Résumé document (.pdf or .txt); defaults to resume.source
        source: Option<PathBuf>,

        /// Output JSON file; defaults to resume.output
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the detected sections before writing
        #[arg(long, default_value = "false")]
        sections: bool,

        /// Print the record to stdout instead of writing a file
        #[arg(long, default_value = "false")]
        stdout: bool,
    },

    /// Group the skills of a résumé record into display columns
    Skills {
        /// Résumé record JSON; defaults to resume.output
        record: Option<PathBuf>,

        /// Classify these skills instead of reading a record
        #[arg(short, long = "skill", value_name = "SKILL")]
        skills: Vec<String>,

        /// Print the classification as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Extract embedded images from the portfolio DOCX
    Portfolio {
        /// Portfolio document; defaults to portfolio.source
        docx: Option<PathBuf>,

        /// Directory for the images and manifest.json; defaults to portfolio.output_dir
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List certificate files with their display titles
    Certificates {
        /// Certificate directory; defaults to certificates.dir
        dir: Option<PathBuf>,

        /// Print the list as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// List product screenshots grouped by topic
    Gallery {
        /// Product image directory; defaults to gallery.dir
        dir: Option<PathBuf>,

        /// Print the groups as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Check configuration and configured inputs
    Doctor,
}
