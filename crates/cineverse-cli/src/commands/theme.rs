use super::context::AppContext;
use crate::output::Output;
use color_eyre::Result;
use serde_json::json;

fn theme_name(dark: bool) -> &'static str {
    if dark {
        "dark"
    } else {
        "light"
    }
}

pub fn run_theme(ctx: &AppContext, toggle: bool, output: &Output) -> Result<()> {
    let mut manager = ctx.collections();

    if !toggle {
        let dark = manager.is_dark_mode();
        if output.is_human() {
            output.info(format!("Theme: {}", theme_name(dark)));
        } else {
            output.data(&json!({ "darkMode": dark }));
        }
        return Ok(());
    }

    let dark = manager.toggle_theme();
    if output.is_human() {
        output.success(format!("Switched to {} theme", theme_name(dark)));
    } else {
        output.data(&json!({ "darkMode": dark }));
    }
    Ok(())
}
