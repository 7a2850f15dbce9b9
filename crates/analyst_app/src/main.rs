mod app;
mod commands;
mod effects;
mod examples;
mod logging;
mod render;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);
    app::run_app()
}
