//! start command - Start an app
//!
//! Marked experimental: the runner prints the experimental notice before
//! gating.
//!
//! # Gating
//!
//! Uses `requirements::SPACE`: logged in with org and space targeted.
//!
//! # Sequence
//!
//! 1. `ApplicationResolver` looks the app up in the targeted space
//! 2. Already started: notice on stderr, OK, done
//! 3. Otherwise: flavored intent, `ApplicationStarter` with the app GUID, OK
//!
//! The intent is only shown once the lookup succeeded and the app needs
//! starting.

use anyhow::Result;
use async_trait::async_trait;

use super::block_on;
use crate::actor::{self, ApplicationResolver, ApplicationStarter};
use crate::cli::args::StartArgs;
use crate::core::session::Session;
use crate::engine::command::Command;
use crate::engine::gate::{requirements, ReadyContext, TargetRequirement};
use crate::engine::runner::run_command;
use crate::engine::{CommandError, Context};
use crate::ui::{Message, TerminalUi, Ui};

/// Start an app.
pub fn start(args: StartArgs, session: &Session, ctx: &Context) -> Result<()> {
    let ui = TerminalUi::new(ctx.verbosity());
    block_on(run_command::<StartCommand>(args, session, ctx, &ui))??;
    Ok(())
}

/// Command struct for start.
pub struct StartCommand {
    app_name: String,
    apps: Box<dyn ApplicationResolver>,
    starter: Box<dyn ApplicationStarter>,
}

impl StartCommand {
    /// Create the command with injected actors.
    pub fn new(
        app_name: impl Into<String>,
        apps: Box<dyn ApplicationResolver>,
        starter: Box<dyn ApplicationStarter>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            apps,
            starter,
        }
    }
}

#[async_trait]
impl Command for StartCommand {
    const NAME: &'static str = "start";
    const REQUIREMENTS: &'static TargetRequirement = &requirements::SPACE;
    const EXPERIMENTAL: bool = true;
    type Args = StartArgs;

    fn setup(args: StartArgs, session: &Session, ctx: &Context) -> Result<Self, CommandError> {
        let actors = actor::connect(session, ctx.verbosity())?;
        Ok(Self::new(
            args.app_name,
            Box::new(actors.v3.clone()),
            Box::new(actors.v3),
        ))
    }

    async fn execute(&self, ready: &ReadyContext, ui: &dyn Ui) -> Result<(), CommandError> {
        let app = self
            .apps
            .get_application_by_name_and_space(&self.app_name, &ready.space.guid)
            .await
            .surface(ui)?;

        if app.is_started() {
            ui.display_warning(&Message::AppAlreadyStarted {
                app: self.app_name.clone(),
            });
            ui.display_ok();
            return Ok(());
        }

        ui.display_text_with_flavor(&Message::StartingApp {
            app: self.app_name.clone(),
            org: ready.organization.name.clone(),
            space: ready.space.name.clone(),
            user: ready.user.name.clone(),
        });

        self.starter
            .start_application(&app.guid)
            .await
            .surface(ui)?;

        ui.display_ok();
        Ok(())
    }
}
