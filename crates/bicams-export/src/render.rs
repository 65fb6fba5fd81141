use bicams_core::models::locale::Locale;
use bicams_core::models::report::Report;
use bicams_core::models::subject::Sex;
use bicams_norms::bands::band;
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};

use crate::error::ExportError;

/// The built-in report template.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/report.md.tera");

const TEMPLATE_NAME: &str = "report.md";

pub const DEFAULT_CITATION: &str = "Normative values: regression-based norms for the Brief International \
Cognitive Assessment for Multiple Sclerosis (BICAMS) in the Brazilian population. Scores are \
adjusted for age, sex and years of education.";

pub const DEFAULT_LINK: &str = "https://www.bicams.net";

/// Text that is the same on every report produced with one configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    pub locale: Locale,
    pub citation: String,
    pub link: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            citation: DEFAULT_CITATION.to_string(),
            link: DEFAULT_LINK.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Labels {
    title: &'static str,
    patient: &'static str,
    age: &'static str,
    sex: &'static str,
    education: &'static str,
    test_date: &'static str,
    test: &'static str,
    percentile: &'static str,
    classification: &'static str,
}

impl Labels {
    fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Labels {
                title: "BICAMS Report",
                patient: "Patient",
                age: "Age",
                sex: "Sex",
                education: "Education",
                test_date: "Test Date",
                test: "Test",
                percentile: "Percentile",
                classification: "Classification",
            },
            Locale::PtBr => Labels {
                title: "Relatório BICAMS",
                patient: "Paciente",
                age: "Idade",
                sex: "Sexo",
                education: "Escolaridade",
                test_date: "Data do Teste",
                test: "Teste",
                percentile: "Percentil",
                classification: "Classificação",
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct ResultView {
    name: &'static str,
    z_score: String,
    percentile: String,
    classification: &'static str,
}

#[derive(Debug, Serialize)]
struct ReportView<'a> {
    labels: Labels,
    patient: &'a str,
    age: String,
    sex: &'static str,
    education: String,
    test_date: String,
    results: Vec<ResultView>,
    citation: &'a str,
    link: &'a str,
}

fn sex_label(sex: Sex, locale: Locale) -> &'static str {
    match (sex, locale) {
        (Sex::Male, Locale::En) => "Male",
        (Sex::Female, Locale::En) => "Female",
        (Sex::Male, Locale::PtBr) => "Masculino",
        (Sex::Female, Locale::PtBr) => "Feminino",
    }
}

fn view<'a>(report: &'a Report, options: &'a RenderOptions) -> ReportView<'a> {
    let locale = options.locale;
    let subject = &report.subject;
    let years = match locale {
        Locale::En => "years",
        Locale::PtBr => "anos",
    };

    ReportView {
        labels: Labels::for_locale(locale),
        patient: &subject.name,
        age: format!("{} {years}", subject.age),
        sex: sex_label(subject.sex, locale),
        education: format!("{} {years}", subject.education_years),
        test_date: report.test_date_display(),
        results: report
            .results
            .iter()
            .map(|r| ResultView {
                name: r.measure.display_name(locale),
                z_score: r.z_display(),
                percentile: r.percentile_display(),
                classification: band(r.classification).long_label(locale),
            })
            .collect(),
        citation: &options.citation,
        link: &options.link,
    }
}

/// Render a report to Markdown with the built-in template.
pub fn render_report(report: &Report, options: &RenderOptions) -> Result<String, ExportError> {
    render_with_template(DEFAULT_TEMPLATE, report, options)
}

/// Render a report with a caller-supplied Tera template.
///
/// Figures are referenced as `![caption](figure:N)`, where N indexes
/// `report.results`.
pub fn render_with_template(
    template_content: &str,
    report: &Report,
    options: &RenderOptions,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(view(report, options))?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    Ok(rendered)
}

/// Drop the `![caption](figure:N)` lines, which only the PDF and DOCX
/// writers can resolve.
pub fn strip_figures(rendered: &str) -> String {
    let mut out = String::with_capacity(rendered.len());
    for line in rendered.lines() {
        if !matches!(parse_line(line.trim()), Block::Figure { .. }) {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// One line of rendered report Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Title(&'a str),
    Heading(&'a str),
    Text(&'a str),
    Figure { caption: &'a str, index: usize },
    Link { text: &'a str, url: &'a str },
    PageBreak,
    Blank,
}

/// Split rendered Markdown into the small subset the writers understand:
/// `# `, `## `, `![caption](figure:N)`, `[text](url)`, `---` and plain text.
pub fn parse_blocks(rendered: &str) -> Vec<Block<'_>> {
    rendered.lines().map(|line| parse_line(line.trim())).collect()
}

fn parse_line(line: &str) -> Block<'_> {
    if line.is_empty() {
        return Block::Blank;
    }
    if line == "---" || line == "***" {
        return Block::PageBreak;
    }
    if let Some(text) = line.strip_prefix("## ") {
        return Block::Heading(text);
    }
    if let Some(text) = line.strip_prefix("# ") {
        return Block::Title(text);
    }
    if let Some(rest) = line.strip_prefix("![")
        && let Some((caption, target)) = split_link(rest)
        && let Some(index) = target.strip_prefix("figure:").and_then(|i| i.parse().ok())
    {
        return Block::Figure { caption, index };
    }
    if let Some(rest) = line.strip_prefix('[')
        && let Some((text, url)) = split_link(rest)
    {
        return Block::Link { text, url };
    }
    Block::Text(line)
}

/// `text](target)` → `(text, target)`.
fn split_link(rest: &str) -> Option<(&str, &str)> {
    let (text, tail) = rest.split_once("](")?;
    let target = tail.strip_suffix(')')?;
    Some((text, target))
}
