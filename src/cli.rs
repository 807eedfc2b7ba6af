use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::ArgAction;
use eve_help::{DEFAULT_ROOT, FlattenedEntry, HelpDocument, Layout, flatten_root};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The path to the help text document
    #[arg(default_value = "./workspace/help_text.yaml")]
    file: PathBuf,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let entries = self.entries()?;

        let mut stdout = io::stdout().lock();
        Layout::default().render(&entries, &mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    #[instrument(skip(self), fields(file = %self.file.display()))]
    fn entries(&self) -> anyhow::Result<Vec<FlattenedEntry>> {
        let document = HelpDocument::load(&self.file)
            .with_context(|| format!("failed to load {}", self.file.display()))?;
        let tree = document.root(DEFAULT_ROOT)?;

        Ok(flatten_root(&tree))
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries the listing, so logs go to stderr
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
