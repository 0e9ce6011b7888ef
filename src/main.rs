use std::io;
use tictactoe_ai::command::run_command_loop;
use tictactoe_ai::config::AppConfig;

fn main() -> anyhow::Result<()> {
    tictactoe_ai::logging::init();
    let config = AppConfig::load_or_default();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run_command_loop(&config, &mut input, &mut out)?;
    Ok(())
}
