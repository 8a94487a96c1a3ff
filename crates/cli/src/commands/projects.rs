//! Catalog browsing commands: project list, project detail, unit list.

use onepay_protocol::Unit;

use crate::cli::UnitStatusArg;
use crate::context::CommandContext;
use crate::error::Result;
use crate::format::{format_price, project_status_label, unit_status_label};

/// Lists projects with availability aggregates.
pub async fn list(ctx: &CommandContext) -> Result<()> {
    let api = ctx.client()?;
    let projects = api.projects().await?;

    if projects.is_empty() {
        println!("No projects yet.");
        return Ok(());
    }

    println!(
        "{:<5} {:<28} {:<12} {:<10} {}",
        "ID", "TITLE", "STATUS", "AVAILABLE", "FROM"
    );
    println!("{}", "-".repeat(80));
    for project in &projects {
        println!(
            "{:<5} {:<28} {:<12} {:<10} {}",
            project.id,
            clip(&project.title, 27),
            project_status_label(project.status),
            project.available_units,
            format_price(project.min_price),
        );
    }
    println!();
    println!("Total: {} projects", projects.len());
    Ok(())
}

/// Shows one project: description, floor plans, and the unit table.
pub async fn show(project_id: i64, ctx: &CommandContext) -> Result<()> {
    let api = ctx.client()?;
    let project = api.project(project_id).await?;

    println!("{} [{}]", project.title, project_status_label(project.status));
    println!("{}", project.address);
    println!();
    println!("{}", project.description);

    if !project.plans.is_empty() {
        println!();
        println!("PLANS ({}):", project.plans.len());
        for plan in &project.plans {
            let viewer = plan
                .viewer_url
                .as_deref()
                .unwrap_or(plan.source_url.as_str());
            println!(
                "  {:<24} level {:<6} {:<6} {}",
                plan.title,
                plan.level,
                plan.file_format.to_uppercase(),
                viewer
            );
        }
    }

    println!();
    print_unit_table(&project.units);
    Ok(())
}

/// Lists a project's units, optionally filtered by status.
pub async fn units(
    project_id: i64,
    status: Option<UnitStatusArg>,
    ctx: &CommandContext,
) -> Result<()> {
    let api = ctx.client()?;
    let units = api.project_units(project_id, status.map(Into::into)).await?;
    print_unit_table(&units);
    Ok(())
}

fn print_unit_table(units: &[Unit]) {
    if units.is_empty() {
        println!("No units.");
        return;
    }

    println!(
        "{:<6} {:<10} {:<6} {:<8} {:<6} {:<22} {}",
        "ID", "UNIT", "FLOOR", "AREA", "BEDS", "PRICE", "STATUS"
    );
    println!("{}", "-".repeat(80));
    for unit in units {
        println!(
            "{:<6} {:<10} {:<6} {:<8} {:<6} {:<22} {}",
            unit.id,
            unit.unit_code,
            unit.floor,
            format!("{}m2", unit.area_m2),
            unit.bedrooms,
            format_price(Some(unit.price)),
            unit_status_label(unit.status),
        );
    }
    println!();
    println!("Total: {} units", units.len());
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{clipped}...")
    }
}
