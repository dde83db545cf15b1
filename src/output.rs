use csv_core::WriteResult;
use std::io::Write as _;
use std::path::PathBuf;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Table,
    Jsonl,
    Csv,
}

#[derive(clap::Parser, Clone, Debug)]
#[group(id = "output::Args")]
pub struct Args {
    /// Write to this file instead of the terminal.
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
    #[arg(long, short = 'f', value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not open the specified output file at {1:?}")]
    OpenOutputFile(#[source] std::io::Error, PathBuf),
    #[error("could not write data to the output file at {1:?}")]
    WriteFile(#[source] std::io::Error, PathBuf),
    #[error("could not write data to the terminal")]
    WriteStdout(#[source] std::io::Error),
    #[error("could not serialize a record to JSON")]
    SerializeJson(#[source] serde_json::Error),
}

impl Args {
    /// Open the output for records with the given `columns`.
    pub fn to_output(&self, columns: &'static [&'static str]) -> Result<Output<'static>, Error> {
        let io = match &self.output {
            None => Box::new(std::io::stdout().lock()) as Box<dyn std::io::Write>,
            Some(path) => Box::new(
                std::fs::OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)
                    .map_err(|e| Error::OpenOutputFile(e, path.clone()))?,
            ) as Box<_>,
        };
        Output::new(io, self.format, self.output.clone(), columns)
    }
}

pub struct Output<'a> {
    io: Box<dyn std::io::Write + 'a>,
    path: Option<PathBuf>,
    columns: &'static [&'static str],
    formatter: Formatter,
}

enum Formatter {
    Csv,
    Table { comfy: comfy_table::Table, rows: usize },
    Jsonl,
}

fn new_table(columns: &[&'static str]) -> comfy_table::Table {
    let mut comfy = comfy_table::Table::new();
    comfy.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
    comfy.set_header(columns.iter().copied());
    comfy
}

/// Encode one CSV record, terminator included.
fn csv_record<S: AsRef<str>>(fields: &[S]) -> Vec<u8> {
    let mut writer = csv_core::Writer::new();
    let mut record = Vec::new();
    let mut buffer = [0; 256];
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            loop {
                let (result, written) = writer.delimiter(&mut buffer);
                record.extend_from_slice(&buffer[..written]);
                if let WriteResult::InputEmpty = result {
                    break;
                }
            }
        }
        let mut input = field.as_ref().as_bytes();
        loop {
            let (result, read, written) = writer.field(input, &mut buffer);
            record.extend_from_slice(&buffer[..written]);
            input = &input[read..];
            if let WriteResult::InputEmpty = result {
                break;
            }
        }
    }
    loop {
        let (result, written) = writer.terminator(&mut buffer);
        record.extend_from_slice(&buffer[..written]);
        if let WriteResult::InputEmpty = result {
            break;
        }
    }
    record
}

impl<'a> Output<'a> {
    pub fn new(
        io: Box<dyn std::io::Write + 'a>,
        format: Format,
        path: Option<PathBuf>,
        columns: &'static [&'static str],
    ) -> Result<Self, Error> {
        let formatter = match format {
            Format::Table => Formatter::Table { comfy: new_table(columns), rows: 0 },
            Format::Jsonl => Formatter::Jsonl,
            Format::Csv => Formatter::Csv,
        };
        let mut output = Output { io, path, columns, formatter };
        if let Formatter::Csv = output.formatter {
            let header = csv_record(columns);
            output.io.write_all(&header).map_err(|e| output.write_error(e))?;
        }
        Ok(output)
    }

    /// Add one record. Tables and CSV use `row`, which must have a cell for every column.
    /// JSON lines serialize `record`.
    pub fn record<R: serde::Serialize>(
        &mut self,
        row: impl FnOnce() -> Vec<String>,
        record: impl FnOnce() -> R,
    ) -> Result<(), Error> {
        match &mut self.formatter {
            Formatter::Csv => {
                let row = csv_record(&row());
                self.io.write_all(&row).map_err(|e| self.write_error(e))?;
            }
            Formatter::Table { comfy, rows } => {
                comfy.add_row(row());
                *rows += 1;
            }
            Formatter::Jsonl => {
                serde_json::to_writer(&mut self.io, &record()).map_err(Error::SerializeJson)?;
                writeln!(self.io).map_err(|e| self.write_error(e))?;
            }
        }
        Ok(())
    }

    /// Write out everything recorded so far. A table is printed and a new one started.
    pub fn flush(&mut self) -> Result<(), Error> {
        if let Formatter::Table { comfy, rows } = &mut self.formatter {
            if *rows > 0 {
                *rows = 0;
                let table = std::mem::replace(comfy, new_table(self.columns));
                writeln!(self.io, "{table}").map_err(|e| self.write_error(e))?;
            }
        }
        self.io.flush().map_err(|e| self.write_error(e))
    }

    pub fn commit(mut self) -> Result<(), Error> {
        self.flush()
    }

    fn write_error(&self, e: std::io::Error) -> Error {
        match &self.path {
            None => Error::WriteStdout(e),
            Some(p) => Error::WriteFile(e, p.clone()),
        }
    }
}
