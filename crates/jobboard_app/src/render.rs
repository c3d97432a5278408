//! Plain-text rendering of jobs for the terminal.

use chrono::DateTime;
use jobboard_core::{Job, JobListView};

const CURRENCY: &str = "CHF";

pub fn wage(job: &Job) -> String {
    format!("{CURRENCY} {:.2}/h", job.hourly_wage.amount)
}

pub fn location(job: &Job) -> String {
    let place = &job.job_location;
    match place.state.as_deref() {
        Some(state) if !state.is_empty() => format!("{}, {} ({state})", place.city, place.zip),
        _ => format!("{}, {}", place.city, place.zip),
    }
}

/// `dd.mm.yyyy` for an epoch-millisecond timestamp.
pub fn date(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn job_row(job: &Job, is_favorite: bool) -> String {
    let marker = if is_favorite { '*' } else { ' ' };
    format!(
        "{marker} {:<12} {:<40} {:>14}  {}  from {}",
        job.wa_readable_id,
        job.work_assignment_name,
        wage(job),
        location(job),
        date(job.period_from)
    )
}

pub fn job_details(job: &Job, is_favorite: bool) -> String {
    let mut lines = vec![
        format!("{} ({})", job.work_assignment_name, job.wa_readable_id),
        format!("  id:        {}", job.id()),
        format!("  wage:      {}", wage(job)),
    ];
    if job.salary.amount > 0.0 {
        lines.push(format!("  salary:    {CURRENCY} {:.2}", job.salary.amount));
    }
    lines.push(format!("  location:  {}", location(job)));
    if let Some(street) = job.job_location.address_street.as_deref() {
        lines.push(format!("  address:   {street}"));
    }
    lines.push(format!("  starts:    {}", date(job.period_from)));
    lines.push(format!("  published: {}", date(job.date_published)));
    if let Some(link) = job.branch_link.as_deref() {
        lines.push(format!("  link:      {link}"));
    }
    lines.push(format!(
        "  favorite:  {}",
        if is_favorite { "yes" } else { "no" }
    ));
    lines.join("\n")
}

pub fn list_footer(view: &JobListView) -> String {
    let mut footer = format!("{} of {} jobs", view.job_count(), view.total_available);
    if view.has_more {
        footer.push_str(" (more available)");
    }
    footer
}
