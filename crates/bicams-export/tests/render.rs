mod common;

use bicams_core::models::locale::Locale;
use bicams_export::render::{
    Block, RenderOptions, parse_blocks, render_report, render_with_template, strip_figures,
};

#[test]
fn english_report_has_title_demographics_and_sections() {
    let rendered = render_report(&common::full_report(), &RenderOptions::default()).unwrap();

    assert!(rendered.starts_with("# BICAMS Report\n"));
    assert!(rendered.contains("Patient: Maria da Silva"));
    assert!(rendered.contains("Age: 40 years"));
    assert!(rendered.contains("Sex: Female"));
    assert!(rendered.contains("Education: 12 years"));
    assert!(rendered.contains("Test Date: 07/03/2024"));
    assert!(rendered.contains("## Test: CVLT (total correct)"));
    assert!(rendered.contains("## Test: BVMT (total)"));
    assert!(rendered.contains("## Test: SDMT"));
    assert!(rendered.contains("![SDMT](figure:2)"));
    assert!(rendered.contains("[https://www.bicams.net](https://www.bicams.net)"));
}

#[test]
fn sections_use_display_rounding() {
    let report = common::full_report();
    let rendered = render_report(&report, &RenderOptions::default()).unwrap();
    for result in &report.results {
        assert!(rendered.contains(&format!("Z-score: {:.2}", result.z_score)));
        assert!(rendered.contains(&format!("Percentile: {:.1}%", result.percentile)));
    }
}

#[test]
fn portuguese_labels() {
    let options = RenderOptions {
        locale: Locale::PtBr,
        ..RenderOptions::default()
    };
    let rendered = render_report(&common::sdmt_only(), &options).unwrap();
    assert!(rendered.starts_with("# Relatório BICAMS\n"));
    assert!(rendered.contains("Paciente: Maria da Silva"));
    assert!(rendered.contains("Sexo: Feminino"));
    assert!(rendered.contains("Data do Teste: 07/03/2024"));
    assert!(rendered.contains("## Teste: SDMT"));
    assert!(rendered.contains("Classificação: Pontuação"));
}

#[test]
fn omitted_measures_have_no_section() {
    let rendered = render_report(&common::sdmt_only(), &RenderOptions::default()).unwrap();
    assert!(!rendered.contains("CVLT"));
    assert!(!rendered.contains("BVMT"));
    assert!(rendered.contains("![SDMT](figure:0)"));
}

#[test]
fn citation_is_configurable() {
    let options = RenderOptions {
        citation: "Custom citation.".to_string(),
        link: "https://example.org/norms".to_string(),
        ..RenderOptions::default()
    };
    let rendered = render_report(&common::sdmt_only(), &options).unwrap();
    assert!(rendered.contains("Custom citation."));
    assert!(rendered.contains("[https://example.org/norms](https://example.org/norms)"));
}

#[test]
fn custom_template() {
    let rendered = render_with_template(
        "{{ patient }}{% for r in results %}|{{ r.name }}{% endfor %}",
        &common::full_report(),
        &RenderOptions::default(),
    )
    .unwrap();
    assert_eq!(rendered, "Maria da Silva|CVLT (total correct)|BVMT (total)|SDMT");
}

#[test]
fn broken_template_is_a_parse_error() {
    let err = render_with_template("{% for %}", &common::full_report(), &RenderOptions::default())
        .unwrap_err();
    assert!(err.to_string().starts_with("template parse error"));
}

#[test]
fn block_parsing() {
    let blocks = parse_blocks(
        "# Title\n\n## Section\nplain line\n![cap](figure:3)\n[site](https://x.y)\n---\n![bad](elsewhere)",
    );
    assert_eq!(
        blocks,
        vec![
            Block::Title("Title"),
            Block::Blank,
            Block::Heading("Section"),
            Block::Text("plain line"),
            Block::Figure {
                caption: "cap",
                index: 3
            },
            Block::Link {
                text: "site",
                url: "https://x.y"
            },
            Block::PageBreak,
            Block::Text("![bad](elsewhere)"),
        ]
    );
}

#[test]
fn strip_figures_keeps_everything_else() {
    let stripped = strip_figures("# Title\n![cap](figure:0)\ntext\n![bad](elsewhere)\n");
    assert_eq!(stripped, "# Title\ntext\n![bad](elsewhere)\n");
}
