use std::{convert::Infallible, fmt, fs, path::PathBuf, str::FromStr};

use tracing::debug;

use crate::error::{LoadError, Result};

pub const DEFAULT_SOURCE: &str = "results2.csv";

/// Where the results feed lives: a local file or an `http(s)` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Default for Source {
    fn default() -> Self {
        Source::Path(PathBuf::from(DEFAULT_SOURCE))
    }
}

impl From<&str> for Source {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            Source::Url(s.to_owned())
        } else {
            Source::Path(PathBuf::from(s))
        }
    }
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Source::from(s))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(p) => write!(f, "{}", p.display()),
            Source::Url(u) => f.write_str(u),
        }
    }
}

impl Source {
    /// Read the whole feed as text. One attempt, no retry.
    pub fn fetch(&self) -> Result<String> {
        debug!("fetching {self}");
        match self {
            Source::Path(path) => fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            }),
            Source::Url(url) => {
                let resp = reqwest::blocking::get(url)?;
                let status = resp.status();
                if !status.is_success() {
                    return Err(LoadError::Http {
                        status: status.as_u16(),
                    });
                }
                Ok(resp.text()?)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_kind_from_prefix() {
        assert_eq!(
            "https://example.org/r.csv".parse::<Source>().unwrap(),
            Source::Url("https://example.org/r.csv".into())
        );
        assert_eq!(
            Source::from(" data/r.csv "),
            Source::Path(PathBuf::from("data/r.csv"))
        );
        assert_eq!(Source::default().to_string(), DEFAULT_SOURCE);
    }

    #[test]
    fn reads_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Place,Nom\n1,Ana").unwrap();
        let src = Source::Path(file.path().to_path_buf());
        assert_eq!(src.fetch().unwrap(), "Place,Nom\n1,Ana\n");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = Source::Path(dir.path().join("absent.csv"));
        let err = src.fetch().unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("absent.csv"));
    }

    #[test]
    fn http_error_message() {
        assert_eq!(LoadError::Http { status: 404 }.to_string(), "HTTP error: 404");
    }
}
