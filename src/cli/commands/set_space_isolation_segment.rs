//! set-space-isolation-segment command - Assign a space's isolation segment
//!
//! # Gating
//!
//! Uses `requirements::ORGANIZATION`: logged in with an org targeted. The
//! space is named on the command line, not taken from the target.
//!
//! # Sequence
//!
//! 1. Flavored intent naming space, org and user
//! 2. `SpaceResolver` (API v2) resolves the space by org and name
//! 3. `IsolationSegmentAssigner` (API v3) assigns the segment by name
//! 4. OK, then the restart hint
//!
//! Each call's warnings are shown right after it returns. A failing
//! resolution stops before the assignment is attempted.

use anyhow::Result;
use async_trait::async_trait;

use super::block_on;
use crate::actor::{self, IsolationSegmentAssigner, SpaceResolver};
use crate::cli::args::SetSpaceIsolationSegmentArgs;
use crate::core::session::Session;
use crate::engine::command::Command;
use crate::engine::gate::{requirements, ReadyContext, TargetRequirement};
use crate::engine::runner::run_command;
use crate::engine::{CommandError, Context};
use crate::ui::{Message, TerminalUi, Ui};

/// Assign the isolation segment of a space.
pub fn set_space_isolation_segment(
    args: SetSpaceIsolationSegmentArgs,
    session: &Session,
    ctx: &Context,
) -> Result<()> {
    let ui = TerminalUi::new(ctx.verbosity());
    block_on(run_command::<SetSpaceIsolationSegmentCommand>(
        args, session, ctx, &ui,
    ))??;
    Ok(())
}

/// Command struct for set-space-isolation-segment.
pub struct SetSpaceIsolationSegmentCommand {
    space_name: String,
    segment_name: String,
    spaces: Box<dyn SpaceResolver>,
    segments: Box<dyn IsolationSegmentAssigner>,
}

impl SetSpaceIsolationSegmentCommand {
    /// Create the command with injected actors.
    pub fn new(
        args: SetSpaceIsolationSegmentArgs,
        spaces: Box<dyn SpaceResolver>,
        segments: Box<dyn IsolationSegmentAssigner>,
    ) -> Self {
        Self {
            space_name: args.space_name,
            segment_name: args.segment_name,
            spaces,
            segments,
        }
    }
}

#[async_trait]
impl Command for SetSpaceIsolationSegmentCommand {
    const NAME: &'static str = "set-space-isolation-segment";
    const REQUIREMENTS: &'static TargetRequirement = &requirements::ORGANIZATION;
    type Args = SetSpaceIsolationSegmentArgs;

    fn setup(
        args: SetSpaceIsolationSegmentArgs,
        session: &Session,
        ctx: &Context,
    ) -> Result<Self, CommandError> {
        let actors = actor::connect(session, ctx.verbosity())?;
        Ok(Self::new(args, Box::new(actors.v2), Box::new(actors.v3)))
    }

    async fn execute(&self, ready: &ReadyContext, ui: &dyn Ui) -> Result<(), CommandError> {
        ui.display_text_with_flavor(&Message::UpdatingSpaceIsolationSegment {
            space: self.space_name.clone(),
            org: ready.organization.name.clone(),
            user: ready.user.name.clone(),
        });

        let space = self
            .spaces
            .get_space_by_organization_and_name(&ready.organization.guid, &self.space_name)
            .await
            .surface(ui)?;

        self.segments
            .assign_isolation_segment_to_space_by_name_and_space(&self.segment_name, &space.guid)
            .await
            .surface(ui)?;

        ui.display_ok();
        ui.display_text(&Message::RestartToApplySegment);

        Ok(())
    }
}
