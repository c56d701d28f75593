use crate::{command::form::app::FormApp, tui::Tui};

mod app;

pub(crate) fn run() -> anyhow::Result<()> {
    let mut app = FormApp::new();
    Tui::new().run(&mut app)?;
    log::debug!("form closed");
    Ok(())
}
