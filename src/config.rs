use crate::{error::ConfigError, generators::Algorithm};

/// Settings for one maze run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub algorithm: Algorithm,
    pub rows: usize,
    pub columns: usize,
    /// `None` draws from the OS and the maze is not reproducible.
    pub seed: Option<u64>,
    /// Log at DEBUG instead of INFO.
    pub verbose: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::RecursiveBacktracker,
            rows: 5,
            columns: 5,
            seed: Some(12345),
            verbose: false,
        }
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}

impl MazeConfig {
    /// Reads flags on top of the defaults. The executable name must already
    /// be skipped.
    ///
    /// Dimensions are not validated here; the generator rejects empty grids.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = MazeConfig::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--rows" | "-r" => config.rows = parse_number(&arg, args.next())?,
                "--columns" | "-c" => config.columns = parse_number(&arg, args.next())?,
                "--seed" | "-s" => config.seed = Some(parse_number(&arg, args.next())?),
                "--random" => config.seed = None,
                "--algorithm" | "-a" => {
                    config.algorithm = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?
                        .parse()?;
                }
                "--verbose" | "-v" => config.verbose = true,
                _ => return Err(ConfigError::UnknownFlag(arg)),
            }
        }
        Ok(config)
    }
}
