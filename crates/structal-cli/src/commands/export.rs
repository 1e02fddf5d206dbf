use crate::cli::ExportArgs;
use crate::error::{CliError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use structal::core::io::fasta::{FastaWriter, GenericHeaderFormat};
use structal::core::models::sequence::SequenceRecord;
use tracing::{debug, info};

pub fn run(args: ExportArgs) -> Result<()> {
    let records = match &args.input {
        Some(path) => {
            let file = File::open(path)?;
            read_records(BufReader::new(file), path)?
        }
        None => read_records(BufReader::new(std::io::stdin()), Path::new("<stdin>"))?,
    };
    debug!("Read {} sequence records", records.len());

    let mut writer = FastaWriter::new(GenericHeaderFormat);
    writer.set_line_length(args.line_length)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            let mut sink = BufWriter::new(file);
            writer.process(&mut sink, &records)?;
            sink.flush()?;
            info!("Wrote {} records to {}", records.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut sink = stdout.lock();
            writer.process(&mut sink, &records)?;
        }
    }
    Ok(())
}

/// Reads `id<TAB>residues` lines. Blank lines are skipped; a line without a
/// tab is a hard error. This deliberately is not a FASTA parser.
fn read_records(reader: impl BufRead, source: &Path) -> Result<Vec<SequenceRecord>> {
    let mut records = Vec::new();
    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        if line.trim().is_empty() {
            continue;
        }
        let (id, residues) = line.split_once('\t').ok_or_else(|| CliError::InputParsing {
            path: source.to_path_buf(),
            line: line_num + 1,
            message: "expected 'id<TAB>residues'".to_string(),
        })?;
        records.push(SequenceRecord::new(id, residues));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records_from(input: &str) -> Result<Vec<SequenceRecord>> {
        read_records(input.as_bytes(), Path::new("test.tsv"))
    }

    #[test]
    fn records_are_read_in_input_order() {
        let records = records_from("a\tMK\nb\tTA\n").unwrap();
        assert_eq!(
            records,
            vec![SequenceRecord::new("a", "MK"), SequenceRecord::new("b", "TA")]
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let records = records_from("a\tMK\n\n\nb\tTA\n").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn line_without_tab_reports_its_line_number() {
        let err = records_from("a\tMK\nnotab\n").unwrap_err();
        match err {
            CliError::InputParsing { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn export_writes_wrapped_fasta_to_the_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.tsv");
        let output = dir.path().join("out.fasta");
        std::fs::write(&input, "seq1\tMKTAYIAKQR\n").unwrap();

        run(ExportArgs {
            input: Some(input),
            output: Some(output.clone()),
            line_length: 4,
        })
        .unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(content, ">seq1\nMKTA\nYIAK\nQR\n");
    }
}
