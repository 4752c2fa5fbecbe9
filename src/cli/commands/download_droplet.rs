//! download-droplet command - Save an app's current droplet locally
//!
//! # Gating
//!
//! Uses `requirements::SPACE`: logged in with org and space targeted.
//!
//! # Sequence
//!
//! 1. Flavored intent naming app, org, space and user
//! 2. `DropletDownloader` fetches the current droplet, then its warnings
//! 3. Bits written to `droplet_<GUID>.tgz` in the working directory
//! 4. Text with the saved path, then OK
//!
//! The file is written under a temporary name and renamed into place, so
//! a failed write never leaves a truncated droplet behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;

use super::block_on;
use crate::actor::{self, DropletDownloader};
use crate::cli::args::DownloadDropletArgs;
use crate::core::session::Session;
use crate::engine::command::Command;
use crate::engine::gate::{requirements, ReadyContext, TargetRequirement};
use crate::engine::runner::run_command;
use crate::engine::{CommandError, Context};
use crate::ui::{Message, TerminalUi, Ui};

/// Download an app's current droplet.
pub fn download_droplet(args: DownloadDropletArgs, session: &Session, ctx: &Context) -> Result<()> {
    let ui = TerminalUi::new(ctx.verbosity());
    block_on(run_command::<DownloadDropletCommand>(args, session, ctx, &ui))??;
    Ok(())
}

/// File name a droplet is saved under.
pub fn droplet_file_name(droplet_guid: &str) -> String {
    format!("droplet_{}.tgz", droplet_guid)
}

/// Write droplet bits into `dir`, returning the saved path.
///
/// # Errors
///
/// - `InvalidDropletGuid` if the GUID is empty or contains path syntax
/// - `Io` if the file cannot be written
pub fn save_droplet(
    dir: &Path,
    droplet_guid: &str,
    bits: &[u8],
) -> Result<PathBuf, CommandError> {
    let unsafe_guid = droplet_guid.is_empty()
        || droplet_guid.starts_with('.')
        || droplet_guid.contains(['/', '\\', '\0']);
    if unsafe_guid {
        return Err(CommandError::InvalidDropletGuid {
            guid: droplet_guid.to_string(),
        });
    }

    let file_name = droplet_file_name(droplet_guid);
    let path = dir.join(&file_name);
    let temp_path = dir.join(format!(".{}.part", file_name));

    let io_error = |path: &Path, e: std::io::Error| CommandError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let written = fs::File::create(&temp_path).and_then(|mut file| {
        file.write_all(bits)?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error(&temp_path, e));
    }

    if let Err(e) = fs::rename(&temp_path, &path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error(&path, e));
    }

    Ok(path)
}

/// Command struct for download-droplet.
pub struct DownloadDropletCommand {
    app_name: String,
    dir: PathBuf,
    downloader: Box<dyn DropletDownloader>,
}

impl DownloadDropletCommand {
    /// Create the command, saving into `dir`.
    pub fn new(
        app_name: impl Into<String>,
        dir: impl Into<PathBuf>,
        downloader: Box<dyn DropletDownloader>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            dir: dir.into(),
            downloader,
        }
    }
}

#[async_trait]
impl Command for DownloadDropletCommand {
    const NAME: &'static str = "download-droplet";
    const REQUIREMENTS: &'static TargetRequirement = &requirements::SPACE;
    type Args = DownloadDropletArgs;

    fn setup(
        args: DownloadDropletArgs,
        session: &Session,
        ctx: &Context,
    ) -> Result<Self, CommandError> {
        let dir = ctx.working_dir()?;
        let actors = actor::connect(session, ctx.verbosity())?;
        Ok(Self::new(args.app_name, dir, Box::new(actors.v3)))
    }

    async fn execute(&self, ready: &ReadyContext, ui: &dyn Ui) -> Result<(), CommandError> {
        ui.display_text_with_flavor(&Message::DownloadingDroplet {
            app: self.app_name.clone(),
            org: ready.organization.name.clone(),
            space: ready.space.name.clone(),
            user: ready.user.name.clone(),
        });

        let droplet = self
            .downloader
            .download_current_droplet(&self.app_name, &ready.space.guid)
            .await
            .surface(ui)?;

        let path = save_droplet(&self.dir, &droplet.guid, &droplet.bits)?;

        ui.display_text_with_flavor(&Message::DropletSaved { path });
        ui.display_ok();

        Ok(())
    }
}
