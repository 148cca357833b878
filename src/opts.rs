//! CLI options.

use std::str::FromStr;

use clap::Parser;

use crate::prelude::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Opts {
    /// Sentry DSN
    #[arg(short, long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Sentry performance monitoring sample rate
    #[arg(long, env = "TRACES_SAMPLE_RATE", default_value = "0", value_parser = parse_sample_rate)]
    pub traces_sample_rate: f32,

    /// Web application bind host
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Web application bind port
    #[arg(short, long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Directory containing the pickled model artifacts
    #[arg(long, env = "MODELS_DIR", default_value = ".")]
    pub models_dir: PathBuf,

    /// Directory containing the built frontend
    #[arg(long, env = "STATIC_DIR", default_value = "dist")]
    pub static_dir: PathBuf,
}

fn parse_sample_rate(value: &str) -> Result<f32> {
    let value = f32::from_str(value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(anyhow!("{} is not within [0, 1]", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_opts_ok() -> Result {
        let opts = Opts::try_parse_from([
            "house-price-server",
            "--port",
            "8080",
            "--static-dir",
            "frontend/dist",
            "--traces-sample-rate",
            "0.5",
        ])?;
        assert_eq!(opts.port, 8080);
        assert_eq!(opts.static_dir, PathBuf::from("frontend/dist"));
        assert!((opts.traces_sample_rate - 0.5).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn invalid_sample_rate_fails() {
        assert!(Opts::try_parse_from(["house-price-server", "--traces-sample-rate", "2"]).is_err());
    }

    #[test]
    fn parse_sample_rate_ok() -> Result {
        assert!((parse_sample_rate("0.25")? - 0.25).abs() < f32::EPSILON);
        assert!(parse_sample_rate("1.5").is_err());
        assert!(parse_sample_rate("abc").is_err());
        Ok(())
    }
}
