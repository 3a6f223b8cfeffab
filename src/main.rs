mod app;
mod notify;
mod schedule;
mod settings;
mod theme;
mod timer;
mod tui;
mod util;

use anyhow::Result;

use app::App;

fn main() -> Result<()> {
    let mut terminal = tui::init()?;
    let mut app = App::new();
    let result = app.run(&mut terminal);
    tui::restore()?;
    result
}
