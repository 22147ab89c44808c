use std::fs::File;
use std::path::{Path, PathBuf};

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts};
use tracing::{debug, instrument};

use crate::error::{Result, ToolError};
use crate::letter::{self, Alignment, LetterDocument};

const FONT_NAME: &str = "Times New Roman";
/// 12 pt, expressed in half-points.
const FONT_SIZE: usize = 24;

/// Saves `document` as `dir/file_name` and returns the written path.
#[instrument(level = "info", skip_all, fields(dir = %dir.display(), file_name))]
pub fn write_letter(dir: &Path, document: &LetterDocument, file_name: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    let write_error = |message: String| ToolError::DocumentWrite {
        path: path.clone(),
        message,
    };

    let docx = document
        .paragraphs()
        .iter()
        .fold(base_document(), |docx, paragraph| {
            docx.add_paragraph(render_paragraph(paragraph))
        });

    let file = File::create(&path).map_err(|err| write_error(err.to_string()))?;
    docx.build()
        .pack(file)
        .map_err(|err| write_error(err.to_string()))?;

    debug!(paragraphs = document.paragraphs().len(), "letter saved");
    Ok(path)
}

fn base_document() -> Docx {
    Docx::new()
        .default_fonts(letter_fonts())
        .default_size(FONT_SIZE)
}

fn letter_fonts() -> RunFonts {
    RunFonts::new()
        .ascii(FONT_NAME)
        .hi_ansi(FONT_NAME)
        .cs(FONT_NAME)
}

fn render_paragraph(paragraph: &letter::Paragraph) -> Paragraph {
    let mut run = text_run(&paragraph.text)
        .size(FONT_SIZE)
        .fonts(letter_fonts());
    if paragraph.bold {
        run = run.bold();
    }

    let rendered = Paragraph::new().add_run(run);
    match paragraph.alignment {
        Alignment::Left => rendered,
        Alignment::Right => rendered.align(AlignmentType::Right),
    }
}

/// Turns `\n` into line breaks and `\t` into tab stops.
fn text_run(text: &str) -> Run {
    let mut run = Run::new();
    for (line_idx, line) in text.split('\n').enumerate() {
        if line_idx > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        for (chunk_idx, chunk) in line.split('\t').enumerate() {
            if chunk_idx > 0 {
                run = run.add_tab();
            }
            if !chunk.is_empty() {
                run = run.add_text(chunk);
            }
        }
    }
    run
}
