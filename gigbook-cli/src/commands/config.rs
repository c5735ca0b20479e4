use anyhow::Result;
use gigbook_core::config::GigbookConfig;
use owo_colors::OwoColorize;

pub fn run(config: &GigbookConfig) -> Result<()> {
    let config_path = GigbookConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    match config.data_path() {
        Some(path) => println!("  Workspace:  {}", path.display()),
        None => println!("  Workspace:  {}", "(bundled sample data)".dimmed()),
    }

    println!();
    println!("{}", "Settings".bold());
    println!("  upcoming_limit:            {}", config.upcoming_limit);
    println!("  deadline_days:             {}", config.deadline_days);
    println!("  recurrence.max_instances:  {}", config.recurrence.max_instances);
    println!("  recurrence.horizon_days:   {}", config.recurrence.horizon_days);

    Ok(())
}
