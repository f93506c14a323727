use std::io;
use std::path::PathBuf;

use derive_more::{Display, Error, From, IsVariant};

use crate::collections::value::ParseValueError;

/// The direction a file was being opened in.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum AccessMode {
    #[display("reading")]
    Read,
    #[display("writing")]
    Write,
}

#[derive(Debug, Display, Error)]
#[display("unable to open {} for {mode}", path.display())]
pub struct OpenError {
    pub path: PathBuf,
    pub mode: AccessMode,
    pub source: io::Error,
}

#[derive(Debug, Display, Error)]
#[display("error while writing to {}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    pub source: io::Error,
}

#[derive(Debug, Display, Error)]
#[display("error while reading line {line}")]
pub struct ReadError {
    pub line: usize,
    pub source: io::Error,
}

/// The file ended part way through a record.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("record starting at line {line} is incomplete")]
pub struct TruncatedRecord {
    pub line: usize,
}

/// What was wrong with a malformed record.
#[derive(Debug, Display, Clone, PartialEq, Eq, IsVariant)]
pub enum Malformation {
    #[display("name is blank")]
    BlankName,
    #[display("separator line is not blank")]
    Separator,
    #[display("{_0}")]
    Value(ParseValueError),
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("malformed record at line {line}: {reason}")]
pub struct MalformedRecord {
    pub line: usize,
    pub reason: Malformation,
}

#[derive(Debug, Display, From, Error)]
pub enum SaveError {
    Open(OpenError),
    Write(WriteError),
}

#[derive(Debug, Display, From, Error, IsVariant)]
pub enum LoadError {
    Open(OpenError),
    Read(ReadError),
    Truncated(TruncatedRecord),
    Malformed(MalformedRecord),
}
