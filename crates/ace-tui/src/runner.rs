//! Main TUI runner - entry point and event loop

use ace_app::message::Message;
use ace_app::Engine;
use ace_core::prelude::*;
use ace_core::AceProject;
use ace_host::HostService;
use ratatui::DefaultTerminal;

use super::{event, render, terminal};

/// Run the workspace for an opened project until the user quits
pub async fn run_with_project<H>(project: AceProject, host: H) -> Result<()>
where
    H: HostService + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!("Opening workspace for '{}'", project.name());
    let mut engine = Engine::new(project, host);

    // Initialize terminal
    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_pointer_events() {
        ratatui::restore();
        return Err(e);
    }

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();

    terminal::disable_pointer_events();
    ratatui::restore();

    result
}

fn run_loop<H>(term: &mut DefaultTerminal, engine: &mut Engine<H>) -> Result<()>
where
    H: HostService + Sync + 'static,
{
    // The viewport centers on the first known canvas size
    let size = term.size()?;
    engine.process_message(Message::Resize {
        width: size.width,
        height: size.height,
    });
    engine.mount();

    while !engine.should_quit() {
        // Results of host loads and signals
        engine.drain_pending_messages();

        // Render
        term.draw(|frame| render::view(frame, &engine.state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
