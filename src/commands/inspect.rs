//! Read-only command handlers: status, assets and index

use anyhow::Result;

use ember_lift::presentation::output::{render_assets, render_status, AppStatus, ExposedAssets};

use super::CommandContext;

pub fn cmd_status(ctx: &CommandContext, apps: &[String]) -> Result<()> {
    for name in ctx.select_apps(apps)? {
        let app = ctx.app(&name)?;
        let status = AppStatus::collect(&app.controller)?;
        render_status(ctx.format, &status);
    }
    Ok(())
}

pub fn cmd_assets(ctx: &CommandContext, apps: &[String]) -> Result<()> {
    for name in ctx.select_apps(apps)? {
        let app = ctx.app(&name)?;
        let assets = ExposedAssets {
            app: name.clone(),
            js: app.controller.exposed_js_assets()?,
            css: app.controller.exposed_css_assets()?,
        };
        render_assets(ctx.format, &assets);
    }
    Ok(())
}

pub fn cmd_index(ctx: &CommandContext, name: &str, head: &str, body: &str) -> Result<()> {
    let app = ctx.app(name)?;
    let html = app.controller.index_html(head, body)?;

    if ctx.is_json() {
        let output = serde_json::json!({
            "app": name,
            "file": app.controller.index_file(),
            "html": html,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        print!("{}", html);
    }
    Ok(())
}
