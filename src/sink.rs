use crate::error::{Error, Result};
use env_logger::Target;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Any writer shared behind a lock, so the same destination can be handed
/// to several configurations.
#[derive(Clone)]
pub struct SharedWriter {
    name: String,
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl SharedWriter {
    pub fn new<W: Write + Send + 'static>(name: &str, writer: W) -> Self {
        Self {
            name: name.to_string(),
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut w = self.inner.lock().map_err(|_| poisoned())?;
        w.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut w = self.inner.lock().map_err(|_| poisoned())?;
        w.flush()
    }
}

impl PartialEq for SharedWriter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedWriter").field(&self.name).finish()
    }
}

/// In-memory destination. Clones share the same buffer.
#[derive(Clone, Default, Debug)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        match self.inner.lock() {
            Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => String::new(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(|l| l.to_string()).collect()
    }

    pub fn clear(&self) {
        if let Ok(mut buf) = self.inner.lock() {
            buf.clear();
        }
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.inner.lock().map_err(|_| poisoned())?;
        inner.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn poisoned() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "log writer lock poisoned")
}

#[derive(Debug, Clone, PartialEq)]
pub enum StreamSink {
    Stdout,
    Stderr,
    Writer(SharedWriter),
}

impl Default for StreamSink {
    fn default() -> Self {
        StreamSink::Stderr
    }
}

impl From<LogBuffer> for StreamSink {
    fn from(buf: LogBuffer) -> Self {
        StreamSink::Writer(SharedWriter::new("buffer", buf))
    }
}

/// A destination for formatted log output.
#[derive(Debug, Clone, PartialEq)]
pub enum Sink {
    Stream(StreamSink),
    File(PathBuf),
}

impl Sink {
    pub fn stderr() -> Self {
        Sink::Stream(StreamSink::Stderr)
    }

    pub fn stdout() -> Self {
        Sink::Stream(StreamSink::Stdout)
    }

    pub fn file<P: AsRef<Path>>(path: P) -> Self {
        Sink::File(path.as_ref().to_path_buf())
    }

    pub fn buffer(buf: &LogBuffer) -> Self {
        Sink::Stream(buf.clone().into())
    }

    /// True for stdout and stderr, the only sinks that get colored output.
    pub fn is_console(&self) -> bool {
        matches!(
            self,
            Sink::Stream(StreamSink::Stdout) | Sink::Stream(StreamSink::Stderr)
        )
    }

    /// Opens the destination as an `env_logger` target. File sinks are
    /// created if missing and appended to.
    pub(crate) fn open(&self) -> Result<Target> {
        let target = match self {
            Sink::Stream(StreamSink::Stdout) => Target::Stdout,
            Sink::Stream(StreamSink::Stderr) => Target::Stderr,
            Sink::Stream(StreamSink::Writer(w)) => Target::Pipe(Box::new(w.clone())),
            Sink::File(path) => {
                let file = fs::OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(path)
                    .map_err(|source| Error::OpenFile {
                        path: path.clone(),
                        source,
                    })?;
                Target::Pipe(Box::new(file))
            }
        };
        Ok(target)
    }
}

impl From<StreamSink> for Sink {
    fn from(stream: StreamSink) -> Self {
        Sink::Stream(stream)
    }
}
