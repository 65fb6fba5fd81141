use std::mem;

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};

use crate::error::ExportError;
use crate::plot::Figure;
use crate::render::{Block, parse_blocks};
use crate::styles::DocumentStyles;

/// Points per millimetre.
const MM: f32 = 72.0 / 25.4;
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;

const REGULAR: &str = "F1";
const BOLD: &str = "F2";

/// Generate an A4 PDF from rendered report Markdown.
///
/// `![caption](figure:N)` lines embed `figures[N]`; `[text](url)` lines
/// become clickable links. Text uses the standard Helvetica faces, so
/// characters outside Windows-1252 are replaced with `?`.
pub fn generate_pdf(
    rendered: &str,
    figures: &[Figure],
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let blocks = parse_blocks(rendered);
    let mut layout = Layout::new(styles);
    let mut title = None;

    for block in &blocks {
        match *block {
            Block::Title(text) => {
                title.get_or_insert(text);
                layout.text_row(text, BOLD, styles.heading1_size as f32, Align::Center, None);
            }
            Block::Heading(text) => {
                layout.text_row(text, BOLD, styles.heading2_size as f32, Align::Left, None);
            }
            Block::Text(text) => layout.paragraph(text, styles.body_size as f32),
            Block::Link { text, url } => {
                layout.text_row(text, REGULAR, styles.body_size as f32, Align::Left, Some(url));
            }
            Block::Figure { index, .. } => {
                let figure = figures.get(index).ok_or(ExportError::MissingFigure {
                    index,
                    available: figures.len(),
                })?;
                layout.figure(index, figure);
            }
            Block::PageBreak => layout.new_page(),
            Block::Blank => layout.blank_row(),
        }
    }

    let pages = layout.finish();
    write_document(&pages, figures, title.unwrap_or("Report"))
}

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
}

#[derive(Default)]
struct Page {
    ops: Vec<Operation>,
    annots: Vec<Dictionary>,
}

/// Top-down cursor over A4 pages, in millimetres from the top edge.
struct Layout<'s> {
    styles: &'s DocumentStyles,
    done: Vec<Page>,
    current: Page,
    y: f32,
}

impl<'s> Layout<'s> {
    fn new(styles: &'s DocumentStyles) -> Self {
        Self {
            styles,
            done: Vec::new(),
            current: Page::default(),
            y: styles.margin_mm,
        }
    }

    fn new_page(&mut self) {
        self.done.push(mem::take(&mut self.current));
        self.y = self.styles.margin_mm;
    }

    /// Break before a block of `height` mm that would cross the bottom margin.
    fn reserve(&mut self, height: f32) {
        let limit = PAGE_HEIGHT_MM - self.styles.page_break_margin_mm;
        if self.y + height > limit && self.y > self.styles.margin_mm {
            self.new_page();
        }
    }

    fn content_width_mm(&self) -> f32 {
        PAGE_WIDTH_MM - 2.0 * self.styles.margin_mm
    }

    fn blank_row(&mut self) {
        self.reserve(self.styles.row_height_mm);
        self.y += self.styles.row_height_mm;
    }

    /// Body text, wrapped to the content width.
    fn paragraph(&mut self, text: &str, size: f32) {
        let max_chars = (self.content_width_mm() * MM / (size * CHAR_WIDTH_EM)) as usize;
        for line in wrap(text, max_chars.max(1)) {
            self.text_row(&line, REGULAR, size, Align::Left, None);
        }
    }

    fn text_row(&mut self, text: &str, font: &str, size: f32, align: Align, link: Option<&str>) {
        let row = self.styles.row_height_mm;
        self.reserve(row);

        let width_pt = text_width_pt(text, size);
        let x_pt = match align {
            Align::Left => self.styles.margin_mm * MM,
            Align::Center => ((PAGE_WIDTH_MM * MM - width_pt) / 2.0).max(0.0),
        };
        // Vertically centred in the row, like a fixed-height table cell.
        let baseline_pt = (PAGE_HEIGHT_MM - (self.y + row / 2.0)) * MM - size * 0.35;

        let ops = &mut self.current.ops;
        if link.is_some() {
            ops.push(Operation::new("rg", vec![0.0f32.into(), 0.0f32.into(), 0.8f32.into()]));
        }
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
        ops.push(Operation::new("Td", vec![x_pt.into(), baseline_pt.into()]));
        ops.push(Operation::new("Tj", vec![Object::string_literal(win_ansi(text))]));
        ops.push(Operation::new("ET", vec![]));
        if let Some(url) = link {
            ops.push(Operation::new("rg", vec![0.0f32.into(), 0.0f32.into(), 0.0f32.into()]));
            self.current.annots.push(link_annotation(
                [x_pt, baseline_pt - 2.0, x_pt + width_pt, baseline_pt + size],
                url,
            ));
        }

        self.y += row;
    }

    fn figure(&mut self, index: usize, figure: &Figure) {
        let width_mm = self.styles.figure_width_mm.min(self.content_width_mm());
        let height_mm = width_mm * figure.height as f32 / figure.width.max(1) as f32;
        self.reserve(height_mm);

        let x_pt = self.styles.margin_mm * MM;
        let y_pt = (PAGE_HEIGHT_MM - (self.y + height_mm)) * MM;
        let ops = &mut self.current.ops;
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new(
            "cm",
            vec![
                (width_mm * MM).into(),
                0.0f32.into(),
                0.0f32.into(),
                (height_mm * MM).into(),
                x_pt.into(),
                y_pt.into(),
            ],
        ));
        ops.push(Operation::new("Do", vec![image_name(index).as_str().into()]));
        ops.push(Operation::new("Q", vec![]));

        self.y += height_mm;
    }

    fn finish(mut self) -> Vec<Page> {
        self.done.push(self.current);
        self.done
    }
}

/// Average Helvetica advance width as a fraction of the font size.
const CHAR_WIDTH_EM: f32 = 0.52;

fn text_width_pt(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * CHAR_WIDTH_EM
}

fn image_name(index: usize) -> String {
    format!("Im{index}")
}

/// Greedy word wrap on character count.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !line.is_empty() {
            lines.push(mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Encode for the standard fonts' WinAnsiEncoding.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '€' => 0x80,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

fn link_annotation(rect: [f32; 4], url: &str) -> Dictionary {
    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => rect.iter().map(|&v| v.into()).collect::<Vec<Object>>(),
        "Border" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(0)],
        "A" => dictionary! {
            "S" => "URI",
            "URI" => Object::string_literal(url),
        },
    }
}

fn font(base: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn write_document(pages: &[Page], figures: &[Figure], title: &str) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font("Helvetica"));
    let bold_id = doc.add_object(font("Helvetica-Bold"));

    let mut xobjects = Dictionary::new();
    for (index, figure) in figures.iter().enumerate() {
        let image = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(figure.width),
                "Height" => i64::from(figure.height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            figure.rgb.clone(),
        );
        let image_id = doc.add_object(image);
        xobjects.set(image_name(index), image_id);
    }

    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR => regular_id,
            BOLD => bold_id,
        },
        "XObject" => xobjects,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = Content {
            operations: page.ops.clone(),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        };
        if !page.annots.is_empty() {
            let annots: Vec<Object> = page
                .annots
                .iter()
                .map(|a| doc.add_object(a.clone()).into())
                .collect();
            page_dict.set("Annots", annots);
        }
        kids.push(doc.add_object(page_dict).into());
    }

    let count = kids.len() as i64;
    let media_box: Vec<Object> = vec![
        0.into(),
        0.into(),
        (PAGE_WIDTH_MM * MM).into(),
        (PAGE_HEIGHT_MM * MM).into(),
    ];
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => media_box,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(win_ansi(title)),
        "Producer" => Object::string_literal("bicams"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    tracing::debug!(pages = pages.len(), figures = figures.len(), size = bytes.len(), "pdf written");
    Ok(bytes)
}
