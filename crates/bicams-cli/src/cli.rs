use std::path::PathBuf;

use bicams_core::models::locale::Locale;
use bicams_core::models::result::RawScores;
use bicams_core::models::subject::{Sex, Subject};
use bicams_export::ExportFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "bicams")]
#[command(about = "BICAMS normative calculator: demographically adjusted z-scores and reports")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Replacement norms table (JSON); overrides the config file
    #[arg(long, global = true)]
    pub norms: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score raw test results and print them
    Score(ScoreArgs),
    /// Score raw test results and write a report file
    Report(ReportArgs),
    /// Print the active norms table as JSON
    Norms,
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SubjectArgs {
    /// Age in years
    #[arg(long, value_parser = clap::value_parser!(u32).range(18..=100))]
    pub age: u32,

    /// male / female (masculino / feminino also accepted)
    #[arg(long)]
    pub sex: Sex,

    /// Years of formal education
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=20))]
    pub education: u32,

    /// CVLT total correct; omit if not administered
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..=80))]
    pub cvlt: Option<i32>,

    /// BVMT total; omit if not administered
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..=36))]
    pub bvmt: Option<i32>,

    /// SDMT correct; omit if not administered
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..=120))]
    pub sdmt: Option<i32>,

    /// Label language (en, pt-br); defaults to the config file
    #[arg(long)]
    pub locale: Option<Locale>,
}

impl SubjectArgs {
    pub fn subject(&self, name: &str) -> Subject {
        Subject {
            name: name.to_string(),
            age: self.age,
            sex: self.sex,
            education_years: self.education,
        }
    }

    pub fn raw_scores(&self) -> RawScores {
        RawScores {
            cvlt: self.cvlt,
            bvmt: self.bvmt,
            sdmt: self.sdmt,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ScoreOutput {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub subject: SubjectArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ScoreOutput,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Pdf,
    Docx,
    Markdown,
}

impl From<ReportFormat> for ExportFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Pdf => ExportFormat::Pdf,
            ReportFormat::Docx => ExportFormat::Docx,
            ReportFormat::Markdown => ExportFormat::Markdown,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Patient name or code
    #[arg(long)]
    pub name: String,

    /// Test date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<jiff::civil::Date>,

    #[command(flatten)]
    pub subject: SubjectArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "pdf")]
    pub format: ReportFormat,

    /// Directory to write the report into; defaults to the config file,
    /// then the current directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}
