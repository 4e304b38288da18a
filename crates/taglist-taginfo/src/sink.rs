//! Destinations for rendered markup.

use std::io;
use std::path::{Path, PathBuf};

/// Receives the rendered markup of one table, replacing previous content.
///
/// A sink is written at most once per render pass and only after rendering
/// succeeded.
pub trait Sink {
    /// Replace the sink's content with `markup`.
    fn write_markup(&mut self, markup: String) -> io::Result<()>;
}

impl Sink for String {
    fn write_markup(&mut self, markup: String) -> io::Result<()> {
        *self = markup;
        Ok(())
    }
}

impl<T: Sink + ?Sized> Sink for &mut T {
    fn write_markup(&mut self, markup: String) -> io::Result<()> {
        (**self).write_markup(markup)
    }
}

/// Sink writing markup to a file, replacing its content.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_markup(&mut self, markup: String) -> io::Result<()> {
        std::fs::write(&self.path, markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sink_replaces_content() {
        let mut sink = String::from("loading...");
        sink.write_markup("<table></table>".to_owned()).unwrap();
        assert_eq!(sink, "<table></table>");
    }

    #[test]
    fn test_file_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        std::fs::write(&path, "old").unwrap();

        let mut sink = FileSink::new(&path);
        sink.write_markup("<table></table>".to_owned()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<table></table>");
    }

    #[test]
    fn test_file_sink_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path().join("missing/out.html"));
        assert!(sink.write_markup(String::new()).is_err());
    }
}
