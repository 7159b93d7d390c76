use budgeter::error::Result;
use budgeter::settings::{load_settings, save_settings, settings_path, Settings};

pub fn show() -> Result<()> {
    let settings = load_settings();
    println!("Settings file:  {}", settings_path().display());
    for key in Settings::KEYS {
        println!("{key:<15} {}", settings.get(key).unwrap_or_default());
    }
    Ok(())
}

pub fn set(key: &str, value: &str) -> Result<()> {
    let mut settings = load_settings();
    settings.set(key, value)?;
    save_settings(&settings)?;
    println!("Set {key} = {value}");
    Ok(())
}
