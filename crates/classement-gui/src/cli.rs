use anyhow::bail;
use clap::Parser;
use classement_core::{Config, source::DEFAULT_SOURCE};

#[derive(Debug, Parser)]
#[command(name = "classement", version, about = "Race results table with live filters")]
pub struct Args {
    /// Results feed: a CSV file path or an http(s) URL.
    #[arg(env = "CLASSEMENT_SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Field delimiter of the feed.
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,
}

impl Args {
    pub fn config(&self) -> anyhow::Result<Config> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got {:?}", self.delimiter);
        }
        Ok(Config::builder()
            .source(self.source.as_str())
            .delimiter(self.delimiter as u8)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use classement_core::Source;

    use super::*;

    #[test]
    fn url_and_delimiter() {
        let args =
            Args::try_parse_from(["classement", "https://example.org/r.csv", "-d", ";"]).unwrap();
        let cfg = args.config().unwrap();
        assert_eq!(cfg.source, Source::Url("https://example.org/r.csv".into()));
        assert_eq!(cfg.delimiter, b';');
    }

    #[test]
    fn rejects_non_ascii_delimiter() {
        let args = Args::try_parse_from(["classement", "r.csv", "--delimiter", "é"]).unwrap();
        assert!(args.config().is_err());
    }
}
