//! Saving and loading collections as flat text files.
//!
//! # Format
//! Each entry is written as a record of three lines: the name, the value, and a blank separator.
//! Records follow each other in collection order, without any header or footer.
//!
//! ```text
//! George
//! 23 Oak St
//!
//! Peter
//! 27 Oak St
//!
//! ```
//!
//! Integer values are written in base-10. There is no escaping: a name or value containing a
//! newline will corrupt the file. [`save`] logs a warning when this happens but writes the entry
//! regardless.
//!
//! When reading, exactly one trailing `\n` is removed from each line. A file ending part way
//! through a record produces [`LoadError::Truncated`]; a blank name, an unreadable integer or a
//! non-blank separator produce [`LoadError::Malformed`].

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::{debug, warn};

use crate::collections::traits::Association;
use crate::collections::value::TableValue;

mod error;
mod record;

pub use error::*;
pub use record::{RecordReader, RecordWriter};

/// Writes every entry of `store` to the file at `path`. The file is created if needed and
/// truncated otherwise.
pub fn save<A, V>(store: &A, path: &Path) -> Result<(), SaveError>
where
    A: Association<V>,
    V: TableValue,
{
    let file = File::create(path).map_err(|source| OpenError {
        path: path.to_owned(),
        mode: AccessMode::Write,
        source,
    })?;
    let write_error = |source| WriteError {
        path: path.to_owned(),
        source,
    };

    let mut writer = RecordWriter::new(BufWriter::new(file));
    for (name, value) in store.iter() {
        let value = value.render();
        if name.contains('\n') || value.contains('\n') {
            warn!("entry {name:?} contains a newline and will not load back as written");
        }
        writer.write_record(name, &value).map_err(write_error)?;
    }
    writer.finish().map_err(write_error)?;

    debug!("saved {} {} records to {}", store.len(), V::KIND, path.display());
    Ok(())
}

/// Clears `store` and fills it with the records in the file at `path`, passing each one to
/// [`Association::load_record`]. Returns the number of records read.
///
/// If the file can't be opened, `store` is left untouched. Any later failure leaves the records
/// read so far in `store`.
pub fn load<A, V>(store: &mut A, path: &Path) -> Result<usize, LoadError>
where
    A: Association<V>,
    V: TableValue,
{
    let file = File::open(path).map_err(|source| OpenError {
        path: path.to_owned(),
        mode: AccessMode::Read,
        source,
    })?;

    store.clear();

    let mut count = 0;
    for record in RecordReader::<_, V>::new(BufReader::new(file)) {
        let (name, value) = record.inspect_err(|error| {
            warn!("stopped loading {} after {count} records: {error}", path.display());
        })?;
        store.load_record(name, value);
        count += 1;
    }

    debug!("loaded {count} {} records from {}", V::KIND, path.display());
    Ok(count)
}
