//! Show resolved preset locations.

use super::common::{GlobalArgs, controller};

pub fn run(global: &GlobalArgs) -> anyhow::Result<()> {
    let controller = controller(global)?;

    let current = controller.current_path();
    let presets = controller.presets_dir();
    let status = |exists: bool| if exists { "" } else { " (missing)" };

    println!("Config dir:     {}", controller.config_dir().display());
    println!("Current preset: {}{}", current.display(), status(current.is_file()));
    println!("Presets dir:    {}{}", presets.display(), status(presets.is_dir()));
    println!("Preset suffix:  {}", controller.settings().preset_extension);

    Ok(())
}
