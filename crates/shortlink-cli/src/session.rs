use crate::command::{Command, CommandError, USAGE};
use crate::link::{format_timestamp, hours_to_ttl, LinkFormatter};
use jiff::tz::TimeZone;
use serde_json::json;
use shortlink_core::{Clock, LinkStats, StoreError, SystemClock};
use shortlink_generator::Generator;
use shortlink_store::ShortLinkStore;
use tracing::debug;

const INVALID_INPUT: &str = "Error: Invalid input.";
const EXPIRED: &str = "This URL has expired.";
const NOT_FOUND: &str = "Invalid short URL.";
const NO_STATS: &str = "No stats available for the given URL.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What the caller should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print the message and read the next line.
    Continue(String),
    Quit,
}

/// Runs user commands against a store and renders the replies.
#[derive(Debug)]
pub struct Session<G, C = SystemClock> {
    store: ShortLinkStore<G, C>,
    links: LinkFormatter,
    format: OutputFormat,
    time_zone: TimeZone,
}

impl<G: Generator, C: Clock> Session<G, C> {
    /// Creates a session that displays times in the system time zone.
    pub fn new(store: ShortLinkStore<G, C>, links: LinkFormatter, format: OutputFormat) -> Self {
        Self::with_time_zone(store, links, format, TimeZone::system())
    }

    pub fn with_time_zone(
        store: ShortLinkStore<G, C>,
        links: LinkFormatter,
        format: OutputFormat,
        time_zone: TimeZone,
    ) -> Self {
        Self {
            store,
            links,
            format,
            time_zone,
        }
    }

    pub fn store(&self) -> &ShortLinkStore<G, C> {
        &self.store
    }

    /// Parses and executes one line of input.
    pub fn handle_line(&self, line: &str) -> Step {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(err) => {
                debug!(error = %err, "rejected command");
                Step::Continue(self.render_command_error(&err))
            }
        }
    }

    pub fn execute(&self, command: Command) -> Step {
        let reply = match command {
            Command::Shorten { url, hours } => self.shorten(url, hours),
            Command::Resolve(input) => self.resolve(&input),
            Command::Stats(input) => self.stats(&input),
            Command::Total => self.total(),
            Command::Purge => self.purge(),
            Command::Help => USAGE.to_string(),
            Command::Quit => return Step::Quit,
        };
        Step::Continue(reply)
    }

    fn shorten(&self, url: String, hours: i64) -> String {
        let Some(ttl) = hours_to_ttl(hours) else {
            return self.render_error(INVALID_INPUT);
        };

        match self.store.create_short_link(url, ttl) {
            Ok(token) => {
                let link = self.links.to_link(&token);
                match self.format {
                    OutputFormat::Text => format!("Short URL: {link}"),
                    OutputFormat::Json => json!({ "token": token, "short_url": link }).to_string(),
                }
            }
            Err(StoreError::InvalidTtl(_)) => self.render_error(INVALID_INPUT),
            Err(err) => self.render_error(&format!("Error: {err}")),
        }
    }

    fn resolve(&self, input: &str) -> String {
        let token = self.links.token_from_input(input);

        match self.store.resolve(token) {
            // the deadline may pass between the two calls, so stats are optional
            Ok(original) => self.render_resolved(&original, self.store.get_stats(token).as_ref()),
            Err(StoreError::Expired(_)) => self.render_error(EXPIRED),
            Err(StoreError::NotFound(_)) => self.render_error(NOT_FOUND),
            Err(err) => self.render_error(&format!("Error: {err}")),
        }
    }

    fn stats(&self, input: &str) -> String {
        let stats = self.store.get_stats(self.links.token_from_input(input));
        match self.format {
            OutputFormat::Text => self.render_stats_text(stats.as_ref()),
            OutputFormat::Json => match stats {
                Some(stats) => self.stats_json(&stats).to_string(),
                None => self.render_error(NO_STATS),
            },
        }
    }

    fn total(&self) -> String {
        let total = self.store.total_created();
        match self.format {
            OutputFormat::Text => format!("Total URLs created: {total}"),
            OutputFormat::Json => json!({ "total_created": total }).to_string(),
        }
    }

    fn purge(&self) -> String {
        let purged = self.store.purge_expired();
        match self.format {
            OutputFormat::Text => format!("Purged {purged} expired URL(s)."),
            OutputFormat::Json => json!({ "purged": purged }).to_string(),
        }
    }

    fn render_resolved(&self, original: &str, stats: Option<&LinkStats>) -> String {
        match self.format {
            OutputFormat::Text => {
                let mut reply = format!("Original URL: {original}");
                if let Some(stats) = stats {
                    reply.push('\n');
                    reply.push_str(&self.render_stats_text(Some(stats)));
                }
                reply
            }
            OutputFormat::Json => {
                let stats = stats.map(|s| self.stats_json(s));
                json!({ "original_url": original, "stats": stats }).to_string()
            }
        }
    }

    fn render_stats_text(&self,stats: Option<&LinkStats>) -> String {
        match stats {
            Some(stats) => format!(
                "Short URL: {}\nClick count: {}\nExpiration time: {}",
                self.links.to_link(&stats.token),
                stats.click_count,
                format_timestamp(stats.expires_at, &self.time_zone)
            ),
            None => NO_STATS.to_string(),
        }
    }

    fn stats_json(&self, stats: &LinkStats) -> serde_json::Value {
        json!({
            "short_url": self.links.to_link(&stats.token),
            "token": stats.token,
            "click_count": stats.click_count,
            "created_at": stats.created_at,
            "expires_at": stats.expires_at,
        })
    }

    fn render_error(&self, message: &str) -> String {
        match self.format {
            OutputFormat::Text => message.to_string(),
            OutputFormat::Json => json!({ "error": message }).to_string(),
        }
    }

    fn render_command_error(&self, err: &CommandError) -> String {
        match err {
            CommandError::InvalidHours(_) => self.render_error(INVALID_INPUT),
            other => self.render_error(&format!("Error: {other}")),
        }
    }
}
