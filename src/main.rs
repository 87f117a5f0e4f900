use {
  anyhow::Context,
  arguments::Arguments,
  article::Article,
  clap::Parser,
  client::Client,
  crossterm::style::Stylize,
  fetch::Fetch,
  page::Page,
  serde::{Deserialize, Serialize},
  std::{
    backtrace::BacktraceStatus,
    fs,
    io::{self, IsTerminal},
    process,
    time::Duration,
  },
};

mod arguments;
mod article;
mod client;
mod feed;
mod fetch;
mod output;
mod page;
mod ranking;

const CSV_PATH: &str = "top_articles.csv";

const RESULT_COUNT: usize = 10;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  let arguments = Arguments::parse();

  let client = Client::new()?;

  let articles = feed::fetch_all(&client).await?;

  let ranked = ranking::top(articles, RESULT_COUNT);

  if arguments.csv {
    fs::write(CSV_PATH, output::csv(&ranked)?)
      .with_context(|| format!("failed to write {CSV_PATH}"))?;
  } else {
    print!("{}", output::listing(&ranked));
  }

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
