//! ui::messages
//!
//! Typed user-facing messages.
//!
//! Each variant names the values it communicates; rendering decides how
//! they look. [`Message::render`] takes a highlighter so the same message
//! can be shown plain or with flavored field values.

use std::fmt;
use std::path::PathBuf;

/// A message a command communicates to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Notice printed by commands that are not yet stable.
    Experimental,

    /// Intent of `check-route`.
    CheckingRoute,

    /// The queried route exists.
    RouteExists { url: String },

    /// The queried route does not exist.
    RouteMissing { url: String },

    /// Intent of `set-space-isolation-segment`.
    UpdatingSpaceIsolationSegment {
        space: String,
        org: String,
        user: String,
    },

    /// Follow-up hint after assigning an isolation segment.
    RestartToApplySegment,

    /// Intent of `start`.
    StartingApp {
        app: String,
        org: String,
        space: String,
        user: String,
    },

    /// The app needed no start.
    AppAlreadyStarted { app: String },

    /// Intent of `download-droplet`.
    DownloadingDroplet {
        app: String,
        org: String,
        space: String,
        user: String,
    },

    /// Where a droplet was saved.
    DropletSaved { path: PathBuf },
}

impl Message {
    /// Render the message, passing every field value through `hl`.
    pub fn render(&self, hl: &dyn Fn(&str) -> String) -> String {
        match self {
            Message::Experimental => {
                "This command is in EXPERIMENTAL stage and may change without notice".to_string()
            }
            Message::CheckingRoute => "Checking for route...".to_string(),
            Message::RouteExists { url } => format!("Route '{}' does exist.", hl(url)),
            Message::RouteMissing { url } => format!("Route '{}' does not exist.", hl(url)),
            Message::UpdatingSpaceIsolationSegment { space, org, user } => format!(
                "Updating isolation segment of space {} in org {} as {}...",
                hl(space),
                hl(org),
                hl(user)
            ),
            Message::RestartToApplySegment => {
                "In order to move running applications to this isolation segment, they must be restarted."
                    .to_string()
            }
            Message::StartingApp {
                app,
                org,
                space,
                user,
            } => format!(
                "Starting app {} in org {} / space {} as {}...",
                hl(app),
                hl(org),
                hl(space),
                hl(user)
            ),
            Message::AppAlreadyStarted { app } => format!("App {} is already started", hl(app)),
            Message::DownloadingDroplet {
                app,
                org,
                space,
                user,
            } => format!(
                "Downloading current droplet for app {} in org {} / space {} as {}...",
                hl(app),
                hl(org),
                hl(space),
                hl(user)
            ),
            Message::DropletSaved { path } => format!(
                "Droplet downloaded successfully at {}",
                hl(&path.display().to_string())
            ),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&|s| s.to_string()))
    }
}
