use super::DocumentSink;
use docx_rs::{Docx, Paragraph, Run, RunFonts, Style, StyleType};
use std::fs::File;
use std::io;
use std::path::Path;

const HEADING_STYLE_ID: &str = "Heading1";
// docx sizes are in half-points
const HEADING_SIZE: usize = 32;

#[derive(Debug, Clone)]
enum Block {
    Heading(String),
    Paragraph(String),
}

/// Word (.docx) backend built on `docx-rs`.
///
/// Blocks are buffered and the package is assembled on [`DocumentSink::save`].
#[derive(Debug, Clone, Default)]
pub struct DocxSink {
    font: Option<(String, usize)>,
    blocks: Vec<Block>,
}

impl DocxSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn to_docx(&self) -> Docx {
        let mut docx = Docx::new().add_style(
            Style::new(HEADING_STYLE_ID, StyleType::Paragraph)
                .name("Heading 1")
                .size(HEADING_SIZE)
                .bold(),
        );

        if let Some((family, size_pt)) = &self.font {
            docx = docx
                .default_fonts(
                    RunFonts::new()
                        .ascii(family.as_str())
                        .hi_ansi(family.as_str())
                        .east_asia(family.as_str())
                        .cs(family.as_str()),
                )
                .default_size(size_pt * 2);
        }

        for block in &self.blocks {
            let paragraph = match block {
                Block::Heading(text) => Paragraph::new()
                    .add_run(Run::new().add_text(text.as_str()))
                    .style(HEADING_STYLE_ID),
                Block::Paragraph(text) => {
                    Paragraph::new().add_run(Run::new().add_text(text.as_str()))
                }
            };
            docx = docx.add_paragraph(paragraph);
        }

        docx
    }
}

impl DocumentSink for DocxSink {
    fn set_default_font(&mut self, family: &str, size_pt: usize) {
        self.font = Some((family.to_string(), size_pt));
    }

    fn add_heading(&mut self, text: &str) {
        self.blocks.push(Block::Heading(text.to_string()));
    }

    fn add_numbered_paragraph(&mut self, number: usize, text: &str) {
        self.blocks
            .push(Block::Paragraph(format!("{}. {}", number, text)));
    }

    fn save(&mut self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        self.to_docx().build().pack(file).map_err(io::Error::other)
    }
}
