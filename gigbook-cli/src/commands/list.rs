use anyhow::{Result, anyhow};
use clap::ValueEnum;
use gigbook_core::entity::{Client, Document, Invoice, Listing, Payment, Project};
use gigbook_core::query::FilterSpec;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::summary::{Totals, count_by, format_counts, format_money};
use crate::workspace::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Page {
    Clients,
    Projects,
    Documents,
    Payments,
    Invoices,
}

/// Parse a `--facet name=value` argument.
pub fn parse_facet(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{arg}'")),
    }
}

pub fn run(workspace: &Workspace, page: Page, spec: &FilterSpec) -> Result<()> {
    match page {
        Page::Clients => show(&workspace.clients, spec, client_summary),
        Page::Projects => show(&workspace.projects, spec, project_summary),
        Page::Documents => show(&workspace.documents, spec, document_summary),
        Page::Payments => show(&workspace.payments, spec, payment_summary),
        Page::Invoices => show(&workspace.invoices, spec, invoice_summary),
    }
}

fn show<R: Listing + Render>(
    records: &[R],
    spec: &FilterSpec,
    summarize: fn(&[&R]) -> String,
) -> Result<()> {
    let engine = R::query_engine();
    let visible = engine.filter(records, spec).map_err(|e| {
        let available: Vec<_> = engine.facet_names().collect();
        anyhow!("{e}. Facets for {}: {}", R::KIND, available.join(", "))
    })?;

    if visible.is_empty() {
        println!("{}", format!("No {} match", R::KIND).dimmed());
    }
    for record in &visible {
        println!("  {}", record.render());
    }

    println!();
    println!(
        "{}",
        format!("Showing {} of {} {}", visible.len(), records.len(), R::KIND).bold()
    );
    println!("{}", summarize(&visible).dimmed());

    Ok(())
}

fn client_summary(clients: &[&Client]) -> String {
    let revenue = Totals::of(clients, |c| c.total_revenue);
    let active_projects: u32 = clients.iter().map(|c| c.active_projects).sum();
    format!(
        "Revenue {} | Active projects {} | {}",
        format_money(revenue.sum),
        active_projects,
        format_counts(&count_by(clients, |c| c.status.as_str())),
    )
}

fn project_summary(projects: &[&Project]) -> String {
    let budget = Totals::of(projects, |p| p.budget);
    let spent = Totals::of(projects, |p| p.spent);
    let progress = Totals::of(projects, |p| f64::from(p.progress));
    format!(
        "Budget {} | Spent {} | Avg progress {:.0}% | {}",
        format_money(budget.sum),
        format_money(spent.sum),
        progress.average().unwrap_or(0.0),
        format_counts(&count_by(projects, |p| p.status.as_str())),
    )
}

fn document_summary(documents: &[&Document]) -> String {
    let pages: u32 = documents.iter().map(|d| d.pages).sum();
    format!(
        "{} pages | {}",
        pages,
        format_counts(&count_by(documents, |d| d.kind.as_str())),
    )
}

fn payment_summary(payments: &[&Payment]) -> String {
    let (income, expenses): (Vec<&Payment>, Vec<&Payment>) =
        payments.iter().copied().partition(|p| p.kind == "income");
    let income = Totals::of(&income, |p| p.amount);
    let expenses = Totals::of(&expenses, |p| p.amount);
    format!(
        "Income {} | Expenses {} | Net {} | {}",
        format_money(income.sum),
        format_money(expenses.sum),
        format_money(income.sum - expenses.sum),
        format_counts(&count_by(payments, |p| p.status.as_str())),
    )
}

fn invoice_summary(invoices: &[&Invoice]) -> String {
    let totals = Totals::of(invoices, |i| i.amount);
    format!(
        "Total {} | Average {} | {}",
        format_money(totals.sum),
        format_money(totals.average().unwrap_or(0.0)),
        format_counts(&count_by(invoices, |i| i.status.as_str())),
    )
}
