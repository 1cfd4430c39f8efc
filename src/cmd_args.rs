use std::ffi::OsString;

pub use clap::Parser;

use crate::config;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Base URL of the search API.
    /// Defaults to QUERYLINE_BASE_URL when set, then to the built-in default.
    #[clap(short = 'u', long, help = "search API base URL")]
    base_url: Option<String>,

    /// Query to execute after loading the field schema. When omitted, only
    /// the schema is fetched and printed.
    #[clap(help = "search query")]
    query: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    base_url: String,
    query: Option<String>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            base_url: args.base_url.unwrap_or_else(config::get_base_url),
            query: args.query,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn explicit_base_url_should_win() {
        let args =
            CommandLineArgs::parse_from(["queryline", "--base-url", "http://search:9000", "foo"]);
        assert_eq!(args.base_url(), "http://search:9000");
        assert_eq!(args.query(), Some("foo"));
    }

    #[test]
    fn query_should_be_optional() {
        let args = CommandLineArgs::parse_from(["queryline"]);
        assert!(args.query().is_none());
        assert!(!args.base_url().is_empty());
    }
}
