use ratatui_runtime::{Runtime, ScreenStack};
use tracing::info;

use crate::view::screens::GameScreen;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Do not capture mouse events (keyboard only)
    #[clap(long)]
    pub(crate) no_mouse: bool,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { no_mouse } = arg;

    info!(mouse = !no_mouse, "starting session");
    let mut app = ScreenStack::new(Box::new(GameScreen::new()));
    Runtime::new().mouse_capture(!no_mouse).run(&mut app)?;
    info!("session ended");

    Ok(())
}
