use std::path::PathBuf;

use clap::Args;

use crate::config::AnalyzeOptions;
use crate::error::Result;
use crate::output::Printer;
use crate::server::{self, ServerConfig};

/// Serve the analyzer over HTTP
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, short, default_value = "127.0.0.1:3000")]
    pub bind: String,

    /// Directory uploaded images are stored in
    #[arg(long, default_value = "uploads")]
    pub upload_dir: PathBuf,

    /// Options file (YAML or JSON) applied to every request
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

impl ServeArgs {
    fn server_config(self) -> Result<ServerConfig> {
        let options = match &self.config {
            Some(path) => AnalyzeOptions::load(path)?,
            None => AnalyzeOptions::default(),
        };
        Ok(ServerConfig {
            bind_addr: self.bind,
            upload_dir: self.upload_dir,
            options,
        })
    }
}

pub fn run(args: ServeArgs, printer: &Printer) -> Result<()> {
    let config = args.server_config()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(config, printer))
}
