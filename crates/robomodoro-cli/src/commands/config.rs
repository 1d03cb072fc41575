use clap::Subcommand;
use robomodoro_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "display.show_seconds", "durations.work_secs")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
    /// Print the config file location
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("config reset to defaults");
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
    }
    Ok(())
}
