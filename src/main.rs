use anyhow::Result;
use chatclock::config::Config;
use chatclock::{logger, Clock};

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        return Config::generate_default_config(Config::get_default_config_path()?);
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    let clock = Clock::from_config(&config.clock)?;
    log::info!("Clock zone: {:?}", clock.zone());

    println!("Today:     {}", clock.current_day());
    println!("Yesterday: {}", clock.last_day());
    println!(
        "Now:       {} {} {}",
        clock.current_hour_minute(),
        clock.am_or_pm(),
        clock.today_week_day_str().unwrap_or_default()
    );
    println!("Synced:    {}", clock.is_time_synced_to_server());

    Ok(())
}
