//! Interactive, line-oriented front end over the page state

use anyhow::Result;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::services::PoolService;
use crate::domain::contract::TransactionResult;
use crate::domain::pool::{FetchState, EMOJI_OPTIONS};
use crate::report::PoolReport;
use crate::shared::types::TokenInfo;

const PROMPT: &str = "pooler> ";

const HELP: &str = "\
Commands:
  landing                 show the home page
  goals                   show your goals
  fetch <id>              load a pool by its numeric id
  contribute [amount]     contribute to the loaded pool
  create                  open the new goal dialog
  title|description|target|emoji <value>
                          edit the open dialog
  submit                  create the pool from the dialog
  close                   close the dialog and discard the draft
  show                    print the current state
  quit";

const LANDING: &str = "\
Save together with friends.
  Set Group Goals       shared savings targets for concerts, trips or anything else
  Invite Friends        friends contribute securely through the app
  Secure & Transparent  the contract locks funds until the goal is reached
  Instant Release       funds are released once the target is met
`fetch <id>` loads a goal by pool id, `goals` shows your goals.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Landing,
    Goals,
    Fetch(String),
    Contribute(Option<String>),
    Create,
    Title(String),
    Description(String),
    Target(String),
    Emoji(String),
    Submit,
    Close,
    Show,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map(|(head, rest)| (head, rest.trim()))
            .unwrap_or((line, ""));
        let arg = |name: &str| {
            if rest.is_empty() {
                Err(format!("`{name}` needs a value"))
            } else {
                Ok(rest.to_string())
            }
        };

        match head {
            "help" | "?" => Ok(ShellCommand::Help),
            "landing" | "home" => Ok(ShellCommand::Landing),
            "goals" => Ok(ShellCommand::Goals),
            "fetch" => arg("fetch").map(ShellCommand::Fetch),
            "contribute" => Ok(ShellCommand::Contribute(
                (!rest.is_empty()).then(|| rest.to_string()),
            )),
            "create" => Ok(ShellCommand::Create),
            // empty values are allowed so fields can be cleared
            "title" => Ok(ShellCommand::Title(rest.to_string())),
            "description" | "desc" => Ok(ShellCommand::Description(rest.to_string())),
            "target" => Ok(ShellCommand::Target(rest.to_string())),
            "emoji" => arg("emoji").map(ShellCommand::Emoji),
            "submit" => Ok(ShellCommand::Submit),
            "close" => Ok(ShellCommand::Close),
            "show" => Ok(ShellCommand::Show),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(format!("Unknown command {other:?}, try `help`")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutput {
    Continue(String),
    Quit,
}

pub struct Shell {
    service: PoolService,
    token: TokenInfo,
}

impl Shell {
    pub fn new(service: PoolService, token: TokenInfo) -> Self {
        Self { service, token }
    }

    pub fn service(&self) -> &PoolService {
        &self.service
    }

    pub async fn handle(&mut self, command: ShellCommand) -> ShellOutput {
        let text = match command {
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => return ShellOutput::Quit,
            ShellCommand::Landing => {
                self.service.page_mut().show_landing();
                LANDING.to_string()
            }
            ShellCommand::Goals => {
                self.service.page_mut().show_goals();
                "Your goals. `fetch <id>` loads a pool, `create` starts a new one.".to_string()
            }
            ShellCommand::Fetch(input) => self.fetch(&input).await,
            ShellCommand::Contribute(amount) => self.contribute(amount).await,
            ShellCommand::Create => {
                self.service.page_mut().create_dialog.open();
                format!(
                    "New savings goal. Set `title`, `description`, `target` ({}) and `emoji` ({}), then `submit`.",
                    self.token.symbol,
                    EMOJI_OPTIONS.join(" ")
                )
            }
            ShellCommand::Title(value) => self.edit_draft(|draft| draft.title = value),
            ShellCommand::Description(value) => self.edit_draft(|draft| draft.description = value),
            ShellCommand::Target(value) => self.edit_draft(|draft| draft.target = value),
            ShellCommand::Emoji(value) => {
                match self.service.page_mut().create_dialog.draft_mut() {
                    Some(draft) => match draft.set_emoji(&value) {
                        Ok(()) => String::new(),
                        Err(err) => format!("Error: {err}"),
                    },
                    None => "No dialog is open, use `create` first.".to_string(),
                }
            }
            ShellCommand::Submit => match self.service.create_pool().await {
                Ok(result) => format!("Pool creation prepared:\n{}", render_result(&result)),
                Err(err) => format!("Error: {err}"),
            },
            ShellCommand::Close => {
                if self.service.page_mut().create_dialog.close() {
                    "Dialog closed.".to_string()
                } else {
                    "A submission is in progress.".to_string()
                }
            }
            ShellCommand::Show => self.show(),
        };
        ShellOutput::Continue(text)
    }

    async fn fetch(&mut self, input: &str) -> String {
        match self.service.fetch_pool(input).await {
            Ok(Some(pool)) => {
                let pool_id = self.service.page().pool.active_pool_id();
                pool_id
                    .map(|id| PoolReport::new(id, &pool, self.service.codec(), &self.token).to_string())
                    .unwrap_or_default()
            }
            // rejected identifiers are ignored
            Ok(None) => String::new(),
            Err(err) => format!("Error: {err}"),
        }
    }

    async fn contribute(&mut self, amount: Option<String>) -> String {
        if let Some(amount) = amount {
            self.service.page_mut().contribute.set_amount(&amount);
        }
        let base_units = self
            .service
            .codec()
            .to_base_units(self.service.page().contribute.amount())
            .ok();
        match self.service.contribute().await {
            Ok(result) => {
                let human = base_units
                    .map(|units| self.service.codec().from_base_units(units))
                    .unwrap_or_default();
                format!(
                    "Contribution of {} {} prepared:\n{}",
                    human,
                    self.token.symbol,
                    render_result(&result)
                )
            }
            Err(err) => format!("Error: {err}"),
        }
    }

    fn edit_draft(&mut self, edit: impl FnOnce(&mut crate::domain::pool::NewPoolDraft)) -> String {
        match self.service.page_mut().create_dialog.draft_mut() {
            Some(draft) => {
                edit(draft);
                String::new()
            }
            None => "No dialog is open, use `create` first.".to_string(),
        }
    }

    fn show(&self) -> String {
        let page = self.service.page();
        let mut lines = vec![format!("View: {:?}", page.view())];

        lines.push(match page.pool.state() {
            FetchState::Ready { pool_id, pool } => {
                PoolReport::new(*pool_id, pool, self.service.codec(), &self.token).to_string()
            }
            FetchState::Failed { pool_id, error } => format!("Pool: #{pool_id} failed: {error}"),
            _ => match page.pool.active_pool_id() {
                Some(pool_id) if page.pool.is_loading() => format!("Pool: #{pool_id} loading..."),
                _ => "Pool: none".to_string(),
            },
        });

        let dialog = &page.create_dialog;
        if dialog.is_open() {
            let draft = dialog.draft();
            lines.push(format!(
                "Dialog: {} {:?} / {:?} / target {:?}",
                draft.emoji, draft.title, draft.description, draft.target
            ));
            if let Some(error) = dialog.error() {
                lines.push(format!("  {error}"));
            }
        }
        let contribute = &page.contribute;
        if !contribute.amount().is_empty() {
            let validity = if contribute.is_valid(self.service.codec()) {
                "ready"
            } else {
                "invalid"
            };
            lines.push(format!(
                "Contribution: {} {} ({validity})",
                contribute.amount(),
                self.token.symbol
            ));
        }
        if let Some(error) = contribute.error() {
            lines.push(format!("Contribution: {error}"));
        }
        lines.join("\n")
    }

    /// Read commands from `input` until it ends or `quit` is entered.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        while let Some(line) = lines.next_line().await? {
            if !line.trim().is_empty() {
                let text = match line.parse::<ShellCommand>() {
                    Ok(command) => match self.handle(command).await {
                        ShellOutput::Quit => break,
                        ShellOutput::Continue(text) => text,
                    },
                    Err(message) => message,
                };
                if !text.is_empty() {
                    output.write_all(text.as_bytes()).await?;
                    output.write_all(b"\n").await?;
                }
            }
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;
        }
        Ok(())
    }
}

fn render_result(result: &TransactionResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|err| format!("<unprintable result: {err}>"))
}
