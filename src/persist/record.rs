use std::io::{self, BufRead, Write};
use std::marker::PhantomData;

use super::{LoadError, Malformation, MalformedRecord, ReadError, TruncatedRecord};
use crate::collections::value::TableValue;

const NEWLINE: char = '\n';

/// Removes a single trailing newline from `line`, if present. Nothing else is trimmed, so a `\r`
/// before the newline is kept as part of the line.
pub(crate) fn sanitise(line: &mut String) {
    if line.ends_with(NEWLINE) {
        line.pop();
    }
}

/// Writes entries as `name\nvalue\n\n` records.
pub struct RecordWriter<W: Write> {
    inner: W,
}

impl<W: Write> RecordWriter<W> {
    pub const fn new(inner: W) -> RecordWriter<W> {
        RecordWriter { inner }
    }

    pub fn write_record(&mut self, name: &str, value: &str) -> io::Result<()> {
        writeln!(self.inner, "{name}")?;
        writeln!(self.inner, "{value}")?;
        writeln!(self.inner)
    }

    /// Flushes any buffered output and returns the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Reads `name\nvalue\n\n` records one at a time, interpreting each value as `V`.
///
/// Iteration ends at the first end of file that falls on a record boundary. After an error has been
/// yielded, the reader yields nothing more.
pub struct RecordReader<R: BufRead, V: TableValue> {
    inner: R,
    line: usize,
    failed: bool,
    _phantom: PhantomData<V>,
}

impl<R: BufRead, V: TableValue> RecordReader<R, V> {
    pub const fn new(inner: R) -> RecordReader<R, V> {
        RecordReader {
            inner,
            line: 0,
            failed: false,
            _phantom: PhantomData,
        }
    }

    /// The number of lines consumed so far.
    pub const fn line(&self) -> usize {
        self.line
    }

    fn next_line(&mut self) -> Result<Option<String>, ReadError> {
        let mut buf = String::new();
        match self.inner.read_line(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => {
                self.line += 1;
                sanitise(&mut buf);
                Ok(Some(buf))
            },
            Err(source) => Err(ReadError {
                line: self.line + 1,
                source,
            }),
        }
    }

    /// Reads the next full record, or returns `None` at a clean end of file.
    pub fn read_record(&mut self) -> Result<Option<(String, V)>, LoadError> {
        let Some(name) = self.next_line()? else {
            return Ok(None);
        };
        let start = self.line;

        if name.is_empty() {
            return Err(MalformedRecord { line: start, reason: Malformation::BlankName }.into());
        }

        let value = match self.next_line()? {
            Some(line) => V::parse(&line).map_err(|error| MalformedRecord {
                line: self.line,
                reason: Malformation::Value(error),
            })?,
            None => return Err(TruncatedRecord { line: start }.into()),
        };

        match self.next_line()? {
            Some(separator) if separator.trim().is_empty() => Ok(Some((name, value))),
            Some(_) => Err(MalformedRecord { line: self.line, reason: Malformation::Separator }.into()),
            None => Err(TruncatedRecord { line: start }.into()),
        }
    }
}

impl<R: BufRead, V: TableValue> Iterator for RecordReader<R, V> {
    type Item = Result<(String, V), LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let record = self.read_record();
        self.failed = record.is_err();
        record.transpose()
    }
}
