//! Line-driven search session for terminals and scripts.
//!
//! Each plain line is the new value of the search box; lines starting with `:`
//! are events. Input values go through the debouncer exactly like keystrokes in
//! a browser would.

use crate::debounce::Debouncer;
use crate::error::Result;
use crate::model::Dataset;
use crate::navigation::Navigator;
use crate::render::render_text;
use crate::search::{Query, SuggestLimits};
use crate::session::{Effect, Key, SearchSession};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const HELP: &str = "\
Type to search. Commands:
  :up / :down     move the highlighted row
  :enter          open the highlighted row
  :click N        open row N
  :esc            hide suggestions
  :dismiss        click outside the search box
  :submit         submit the search form
  :wait           wait for pending suggestions
  :quit           exit";

/// One parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// New search box value.
    Input(String),
    Key(Key),
    /// 1-based row number.
    Click(usize),
    Dismiss,
    Submit,
    Wait,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let Some(rest) = line.trim_end_matches(['\r', '\n']).strip_prefix(':') else {
            return Self::Input(line.trim_end_matches(['\r', '\n']).to_string());
        };

        let mut parts = rest.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("up"), None) => Self::Key(Key::Up),
            (Some("down"), None) => Self::Key(Key::Down),
            (Some("enter"), None) => Self::Key(Key::Enter),
            (Some("esc" | "escape"), None) => Self::Key(Key::Escape),
            (Some("click"), Some(n)) => match n.parse() {
                Ok(row) if row > 0 => Self::Click(row),
                _ => Self::Unknown(line.to_string()),
            },
            (Some("dismiss"), None) => Self::Dismiss,
            (Some("submit"), None) => Self::Submit,
            (Some("wait"), None) => Self::Wait,
            (Some("help" | "?"), None) => Self::Help,
            (Some("quit" | "q"), None) => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Console front end over a [`SearchSession`].
pub struct Console<'a, W> {
    session: SearchSession<'a>,
    debouncer: Debouncer<Query>,
    navigator: Navigator,
    out: W,
}

impl<'a, W: AsyncWrite + Unpin> Console<'a, W> {
    pub fn new(
        dataset: &'a Dataset,
        limits: SuggestLimits,
        debounce: Duration,
        navigator: Navigator,
        out: W,
    ) -> Self {
        Self {
            session: SearchSession::with_limits(dataset, limits),
            debouncer: Debouncer::new(debounce),
            navigator,
            out,
        }
    }

    /// Process `input` until it ends or `:quit` is read.
    ///
    /// Suggestions still pending when the input ends are waited for and shown.
    pub async fn run<R: AsyncBufRead + Unpin>(mut self, input: R) -> Result<W> {
        let mut lines = input.lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if !self.handle(Command::parse(&line)).await? {
                        return Ok(self.out);
                    }
                }
                Some(query) = self.debouncer.recv() => {
                    self.show(&query).await?;
                }
            }
        }

        self.flush_pending().await?;
        Ok(self.out)
    }

    /// Returns `false` when the console should stop.
    async fn handle(&mut self, command: Command) -> Result<bool> {
        let effect = match command {
            Command::Input(value) => {
                // Every keystroke restarts the delay, even one that hides the list.
                self.debouncer.cancel();
                self.session.input(&value)
            }
            Command::Key(key) => self.session.key(key),
            Command::Click(row) => self.session.click(row - 1),
            Command::Dismiss => self.session.dismiss(),
            Command::Submit => {
                self.debouncer.cancel();
                self.session.submit()
            }
            Command::Wait => {
                self.flush_pending().await?;
                Effect::None
            }
            Command::Help => {
                self.write_line(HELP).await?;
                Effect::None
            }
            Command::Quit => return Ok(false),
            Command::Unknown(line) => {
                tracing::warn!("Unknown command: {}", line.trim());
                Effect::None
            }
        };

        self.apply(effect).await?;
        Ok(true)
    }

    async fn apply(&mut self, effect: Effect) -> Result<()> {
        match effect {
            Effect::None => {}
            Effect::Schedule(query) => self.debouncer.schedule(query),
            Effect::Render => self.render().await?,
            Effect::Hide => {
                // A pending query still opens the list after a hide; only input cancels it.
                self.write_line("(suggestions hidden)").await?;
            }
            Effect::Navigate(destination) => {
                self.debouncer.cancel();
                let url = self.navigator.url(&destination);
                self.write_line(&format!("navigate: {url}")).await?;
            }
        }
        Ok(())
    }

    async fn flush_pending(&mut self) -> Result<()> {
        if self.debouncer.is_pending()
            && let Some(query) = self.debouncer.recv().await
        {
            self.show(&query).await?;
        }
        Ok(())
    }

    async fn show(&mut self, query: &Query) -> Result<()> {
        self.session.show(query);
        self.render().await
    }

    async fn render(&mut self) -> Result<()> {
        let text = render_text(self.session.suggestions(), self.session.highlighted());
        self.write_line(&text).await
    }

    async fn write_line(&mut self, line: &str) -> Result<()> {
        self.out.write_all(line.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await?;
        Ok(())
    }
}
