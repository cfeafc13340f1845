//! Source resolution: turn a path, byte buffer or stream into canonical bytes
//! plus effective options.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use docattach_types::{temporal, Timestamp};
use tracing::debug;

use crate::config::AttachConfig;
use crate::error::{AttachError, AttachResult};
use crate::options::{AttachOptions, EffectiveOptions, SourceDefaults};

/// Where attachment data comes from. Consumed by a single attach call.
pub enum AttachmentSource {
    /// A file on disk. Name and dates default to the file's own.
    Path(PathBuf),
    /// An in-memory buffer, used verbatim.
    Bytes(Bytes),
    /// A reader drained to the end.
    Stream(Box<dyn Read>),
}

impl AttachmentSource {
    pub fn path(path: impl AsRef<Path>) -> Self {
        Self::Path(path.as_ref().to_path_buf())
    }

    pub fn bytes(data: impl Into<Bytes>) -> Self {
        Self::Bytes(data.into())
    }

    pub fn stream(reader: impl Read + 'static) -> Self {
        Self::Stream(Box::new(reader))
    }
}

impl fmt::Debug for AttachmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(p) => f.debug_tuple("Path").field(p).finish(),
            Self::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

impl From<PathBuf> for AttachmentSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for AttachmentSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<Bytes> for AttachmentSource {
    fn from(data: Bytes) -> Self {
        Self::Bytes(data)
    }
}

impl From<Vec<u8>> for AttachmentSource {
    fn from(data: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(data))
    }
}

impl From<&'static [u8]> for AttachmentSource {
    fn from(data: &'static [u8]) -> Self {
        Self::Bytes(Bytes::from_static(data))
    }
}

impl From<fs::File> for AttachmentSource {
    fn from(file: fs::File) -> Self {
        Self::Stream(Box::new(file))
    }
}

/// Canonical content and options produced by [`resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSource {
    pub data: Bytes,
    pub options: EffectiveOptions,
}

/// Resolve a source into its bytes and effective options.
///
/// `now` is the single "current time" captured for this attach call; it backs
/// every date the caller and the source leave unset. Emptiness is checked
/// before the name, so an empty unnamed buffer reports
/// [`AttachError::EmptyData`].
pub fn resolve(
    source: AttachmentSource,
    options: AttachOptions,
    now: Timestamp,
    config: &AttachConfig,
) -> AttachResult<ResolvedSource> {
    let (data, defaults) = match source {
        AttachmentSource::Path(path) => read_path(&path, now, config)?,
        AttachmentSource::Bytes(data) => {
            config.check_size(data.len() as u64)?;
            (data, SourceDefaults::at(now))
        }
        AttachmentSource::Stream(reader) => (drain(reader, config)?, SourceDefaults::at(now)),
    };

    if data.is_empty() {
        return Err(AttachError::EmptyData);
    }

    let options = EffectiveOptions::merge(options, defaults)?;
    debug!(name = %options.name, size = data.len(), "source resolved");
    Ok(ResolvedSource { data, options })
}

fn read_path(
    path: &Path,
    now: Timestamp,
    config: &AttachConfig,
) -> AttachResult<(Bytes, SourceDefaults)> {
    let read_err = |source| AttachError::SourceRead {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(read_err)?;
    if metadata.is_dir() {
        return Err(AttachError::InvalidSource(format!(
            "{} is a directory",
            path.display()
        )));
    }
    if !metadata.is_file() {
        return Err(AttachError::InvalidSource(format!(
            "{} is not a regular file",
            path.display()
        )));
    }
    config.check_size(metadata.len())?;

    let data = fs::read(path).map_err(read_err)?;
    config.check_size(data.len() as u64)?;

    // Birth time is unavailable on some platforms and filesystems.
    let defaults = SourceDefaults {
        name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned()),
        creation_date: metadata
            .created()
            .map(temporal::from_system_time)
            .unwrap_or(now),
        modification_date: metadata
            .modified()
            .map(temporal::from_system_time)
            .unwrap_or(now),
    };
    Ok((Bytes::from(data), defaults))
}

fn drain(mut reader: Box<dyn Read>, config: &AttachConfig) -> AttachResult<Bytes> {
    let mut data = Vec::new();
    match config.max_source_bytes {
        Some(limit) => {
            reader
                .take(limit.saturating_add(1))
                .read_to_end(&mut data)
                .map_err(AttachError::StreamRead)?;
            config.check_size(data.len() as u64)?;
        }
        None => {
            reader
                .read_to_end(&mut data)
                .map_err(AttachError::StreamRead)?;
        }
    }
    Ok(Bytes::from(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::{self, Cursor};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn resolve_default(source: AttachmentSource, options: AttachOptions) -> AttachResult<ResolvedSource> {
        resolve(source, options, now(), &AttachConfig::default())
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device unplugged"))
        }
    }

    #[test]
    fn bytes_are_used_verbatim() {
        let resolved =
            resolve_default(AttachmentSource::bytes(&b"{}"[..]), AttachOptions::named("a.json")).unwrap();
        assert_eq!(resolved.data.as_ref(), b"{}");
        assert_eq!(resolved.options.name, "a.json");
    }

    #[test]
    fn bytes_dates_default_to_now() {
        let resolved =
            resolve_default(Vec::from(&b"x"[..]).into(), AttachOptions::named("x")).unwrap();
        assert_eq!(resolved.options.creation_date, now());
        assert_eq!(resolved.options.modification_date, now());
    }

    #[test]
    fn bytes_without_name_are_rejected() {
        let err = resolve_default(AttachmentSource::bytes(&b"data"[..]), AttachOptions::new())
            .unwrap_err();
        assert!(matches!(err, AttachError::MissingName));
    }

    #[test]
    fn empty_bytes_are_rejected() {
        let err = resolve_default(AttachmentSource::bytes(Vec::<u8>::new()), AttachOptions::named("e"))
            .unwrap_err();
        assert!(matches!(err, AttachError::EmptyData));
    }

    #[test]
    fn empty_check_precedes_name_check() {
        let err =
            resolve_default(AttachmentSource::bytes(Vec::<u8>::new()), AttachOptions::new()).unwrap_err();
        assert!(matches!(err, AttachError::EmptyData));
    }

    #[test]
    fn stream_is_drained() {
        let resolved = resolve_default(
            AttachmentSource::stream(Cursor::new(b"streamed".to_vec())),
            AttachOptions::named("s.txt"),
        )
        .unwrap();
        assert_eq!(resolved.data.as_ref(), b"streamed");
        assert_eq!(resolved.options.creation_date, now());
    }

    #[test]
    fn empty_stream_is_rejected() {
        let err = resolve_default(
            AttachmentSource::stream(io::empty()),
            AttachOptions::named("s.txt"),
        )
        .unwrap_err();
        assert!(matches!(err, AttachError::EmptyData));
    }

    #[test]
    fn stream_read_error_propagates() {
        let err = resolve_default(AttachmentSource::stream(FailingReader), AttachOptions::named("s"))
            .unwrap_err();
        assert!(matches!(err, AttachError::StreamRead(_)));
    }

    #[test]
    fn oversized_stream_is_rejected() {
        let config = AttachConfig::with_max_source_bytes(4);
        let err = resolve(
            AttachmentSource::stream(Cursor::new(vec![7u8; 100])),
            AttachOptions::named("big"),
            now(),
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, AttachError::SourceTooLarge { size: 5, limit: 4 }));
    }

    #[test]
    fn stream_at_limit_is_accepted() {
        let config = AttachConfig::with_max_source_bytes(4);
        let resolved = resolve(
            AttachmentSource::stream(Cursor::new(vec![7u8; 4])),
            AttachOptions::named("fits"),
            now(),
            &config,
        )
        .unwrap();
        assert_eq!(resolved.data.len(), 4);
    }

    #[test]
    fn path_derives_name_and_dates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.txt");
        fs::write(&path, b"file body").unwrap();

        let resolved = resolve_default(AttachmentSource::path(&path), AttachOptions::new()).unwrap();
        assert_eq!(resolved.data.as_ref(), b"file body");
        assert_eq!(resolved.options.name, "f.txt");

        let modified = temporal::from_system_time(fs::metadata(&path).unwrap().modified().unwrap());
        assert_eq!(resolved.options.modification_date, modified);
    }

    #[test]
    fn path_name_can_be_overridden() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.txt");
        fs::write(&path, b"file body").unwrap();

        let created = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
        let resolved = resolve_default(
            path.as_path().into(),
            AttachOptions::named("override.txt").creation_date(created),
        )
        .unwrap();
        assert_eq!(resolved.options.name, "override.txt");
        assert_eq!(resolved.options.creation_date, created);
    }

    #[test]
    fn directory_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_default(AttachmentSource::path(dir.path()), AttachOptions::new())
            .unwrap_err();
        assert!(matches!(err, AttachError::InvalidSource(_)));
    }

    #[cfg(unix)]
    #[test]
    fn special_file_is_invalid() {
        let err = resolve_default(AttachmentSource::path("/dev/null"), AttachOptions::named("null"))
            .unwrap_err();
        match err {
            AttachError::InvalidSource(msg) => assert!(msg.contains("not a regular file")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_default(
            AttachmentSource::path(dir.path().join("nope.txt")),
            AttachOptions::new(),
        )
        .unwrap_err();
        match err {
            AttachError::SourceRead { path, source } => {
                assert!(path.ends_with("nope.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, b"").unwrap();
        let err = resolve_default(AttachmentSource::path(&path), AttachOptions::new()).unwrap_err();
        assert!(matches!(err, AttachError::EmptyData));
    }

    #[test]
    fn oversized_file_is_rejected_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        fs::write(&path, vec![0u8; 64]).unwrap();
        let err = resolve(
            AttachmentSource::path(&path),
            AttachOptions::new(),
            now(),
            &AttachConfig::with_max_source_bytes(16),
        )
        .unwrap_err();
        assert!(matches!(err, AttachError::SourceTooLarge { size: 64, limit: 16 }));
    }

    #[test]
    fn file_handle_is_a_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, b"{\"k\":1}").unwrap();
        let source: AttachmentSource = fs::File::open(&path).unwrap().into();
        assert!(matches!(source, AttachmentSource::Stream(_)));
        let resolved = resolve_default(source, AttachOptions::named("data.json")).unwrap();
        assert_eq!(resolved.data.as_ref(), b"{\"k\":1}");
    }

    #[test]
    fn debug_hides_payload() {
        let source = AttachmentSource::bytes(&b"secret"[..]);
        assert_eq!(format!("{source:?}"), "Bytes(6)");
        assert_eq!(format!("{:?}", AttachmentSource::stream(io::empty())), "Stream(..)");
    }
}
