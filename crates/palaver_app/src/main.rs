mod shell;

use palaver_logging::LogDestination;

fn main() -> anyhow::Result<()> {
    let settings = shell::Settings::from_args(std::env::args().skip(1))?;
    palaver_logging::initialize(LogDestination::File);
    shell::run_app(settings)
}
