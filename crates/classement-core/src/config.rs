use bon::Builder;

use crate::{parse::DEFAULT_DELIMITER, source::Source};

/// Session settings, normally filled from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct Config {
    #[builder(default, into)]
    pub source:    Source,
    #[builder(default = DEFAULT_DELIMITER)]
    pub delimiter: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}
