use anyhow::Result;
use cleanbook_config::AppConfig;
use serde::Serialize;
use std::io::{self, Write};

pub mod batch;
pub mod completions;
pub mod single;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

impl Context<'_> {
    /// The `--region` override when given, otherwise the configured default.
    pub fn region<'r>(&'r self, flag: Option<&'r str>) -> &'r str {
        flag.map(str::trim)
            .filter(|region| !region.is_empty())
            .unwrap_or(self.config.default_region.as_str())
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
