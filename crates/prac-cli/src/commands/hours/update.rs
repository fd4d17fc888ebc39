use prac_db::updates::log_entry::LogEntryUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_time};
use crate::context::AppContext;
use crate::output::output;

/// Borrowed view of the `hours update` flags.
pub struct UpdateFields<'a> {
    pub student: Option<&'a str>,
    pub site: Option<&'a str>,
    pub date: Option<&'a str>,
    pub hours: Option<f64>,
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
    pub lecturer: Option<&'a str>,
    pub notes: Option<&'a str>,
}

impl UpdateFields<'_> {
    const fn is_empty(&self) -> bool {
        self.student.is_none()
            && self.site.is_none()
            && self.date.is_none()
            && self.hours.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.lecturer.is_none()
            && self.notes.is_none()
    }
}

pub async fn run(
    id: &str,
    fields: &UpdateFields<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if fields.is_empty() {
        anyhow::bail!("Nothing to update: pass at least one field flag");
    }

    let mut builder = LogEntryUpdateBuilder::new();
    if let Some(student) = fields.student {
        builder = builder.student_id(student);
    }
    if let Some(site) = fields.site {
        let site = ctx.service.resolve_site(site).await?;
        builder = builder.site_id(site.site_id);
    }
    if let Some(date) = fields.date {
        builder = builder.date(parse_date(date, "date")?);
    }
    match (fields.hours, fields.start, fields.end) {
        (Some(hours), None, None) => builder = builder.hours(hours),
        (None, Some(start), Some(end)) => {
            builder = builder.shift(parse_time(start, "start")?, parse_time(end, "end")?)?;
        }
        (None, None, None) => {}
        _ => anyhow::bail!("Provide either --hours or both --start and --end"),
    }
    if let Some(lecturer) = fields.lecturer {
        builder = builder.lecturer(Some(lecturer.to_string()));
    }
    if let Some(notes) = fields.notes {
        builder = builder.notes(Some(notes.to_string()));
    }

    let entry = ctx.service.update_entry(id, builder.build()).await?;
    output(&entry, flags.format)
}
