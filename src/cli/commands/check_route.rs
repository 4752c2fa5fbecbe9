//! check-route command - Report whether a route exists
//!
//! # Gating
//!
//! Uses `requirements::ORGANIZATION`: logged in with an org targeted.
//!
//! # Sequence
//!
//! 1. Text: `Checking for route...`
//! 2. `RouteChecker::check_route`, then its warnings
//! 3. Text: `Route '<URL>' does exist.` or `... does not exist.`
//! 4. OK
//!
//! The URL in step 3 is the route's canonical URL, so port routes read
//! `domain:port` and host routes `host.domain/path`.

use anyhow::Result;
use async_trait::async_trait;

use super::block_on;
use crate::actor::{self, RouteChecker};
use crate::cli::args::CheckRouteArgs;
use crate::core::route::RouteDescriptor;
use crate::core::session::Session;
use crate::engine::command::Command;
use crate::engine::gate::{requirements, ReadyContext, TargetRequirement};
use crate::engine::runner::run_command;
use crate::engine::{CommandError, Context};
use crate::ui::{Message, TerminalUi, Ui};

/// Check if a route exists.
pub fn check_route(args: CheckRouteArgs, session: &Session, ctx: &Context) -> Result<()> {
    let ui = TerminalUi::new(ctx.verbosity());
    block_on(run_command::<CheckRouteCommand>(args, session, ctx, &ui))??;
    Ok(())
}

/// Command struct for check-route.
pub struct CheckRouteCommand {
    route: RouteDescriptor,
    checker: Box<dyn RouteChecker>,
}

impl CheckRouteCommand {
    /// Create the command with an injected checker.
    pub fn new(route: RouteDescriptor, checker: Box<dyn RouteChecker>) -> Self {
        Self { route, checker }
    }
}

#[async_trait]
impl Command for CheckRouteCommand {
    const NAME: &'static str = "check-route";
    const REQUIREMENTS: &'static TargetRequirement = &requirements::ORGANIZATION;
    type Args = CheckRouteArgs;

    fn setup(args: CheckRouteArgs, session: &Session, ctx: &Context) -> Result<Self, CommandError> {
        let route = RouteDescriptor::new(args.domain, args.hostname, args.path, args.port)?;
        let actors = actor::connect(session, ctx.verbosity())?;
        Ok(Self::new(route, Box::new(actors.v3)))
    }

    async fn execute(&self, _ready: &ReadyContext, ui: &dyn Ui) -> Result<(), CommandError> {
        ui.display_text(&Message::CheckingRoute);

        let exists = self.checker.check_route(&self.route).await.surface(ui)?;

        let url = self.route.url();
        if exists {
            ui.display_text(&Message::RouteExists { url });
        } else {
            ui.display_text(&Message::RouteMissing { url });
        }
        ui.display_ok();

        Ok(())
    }
}
