use crate::models::SourceFile;
use crate::utils::truncate_string;
use crossterm::style::Stylize;
use std::io::{self, Write};

pub fn draw_banner<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", "O/X Quiz Generator".cyan().bold())?;
    writeln!(output, "Turns study notes into true/false prompts.")
}

/// Prints the catalog as a numbered list, one file per line.
pub fn draw_catalog<W: Write>(output: &mut W, files: &[SourceFile], width: usize) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", "Available files:".bold())?;
    for (i, file) in files.iter().enumerate() {
        let prefix = format!("{}. ", i + 1);
        let name = truncate_string(&file.name, width.saturating_sub(prefix.len()));
        writeln!(output, "{}{}", prefix, name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_draw_catalog_numbers_from_one() {
        let files = vec![
            SourceFile::from_path(PathBuf::from("study_files/bio.txt")),
            SourceFile::from_path(PathBuf::from("study_files/chem.md")),
        ];
        let mut output = Vec::new();
        draw_catalog(&mut output, &files, 80).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("1. bio.txt\n"));
        assert!(text.contains("2. chem.md\n"));
    }

    #[test]
    fn test_draw_catalog_truncates_long_names() {
        let files = vec![SourceFile::from_path(PathBuf::from(
            "study_files/a_really_long_file_name_for_notes.txt",
        ))];
        let mut output = Vec::new();
        draw_catalog(&mut output, &files, 20).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("1. a_really_long_...\n"));
    }
}
