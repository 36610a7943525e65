//! Boilerplate for new vows test files.
//!
//! The scaffold is a pure function of a [`TemplateContext`]: the same version
//! and date always produce the same bytes. Nothing here touches the
//! filesystem; [`render_template`] writes to stdout and the caller redirects
//! it wherever the new file should live.

use std::io::{self, Write};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]/[month]/[day]");

/// Inputs of a single render: the generator version and the calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    version: String,
    date: Date,
}

impl TemplateContext {
    pub fn new(version: impl Into<String>, date: Date) -> Self {
        Self {
            version: version.into(),
            date,
        }
    }

    /// Context for the local calendar date, or the UTC date when the local
    /// offset cannot be determined.
    pub fn today(version: impl Into<String>) -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self::new(version, now.date())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn date(&self) -> Date {
        self.date
    }

    /// `YYYY/MM/DD`
    pub fn formatted_date(&self) -> String {
        format_date(self.date)
    }
}

fn format_date(date: Date) -> String {
    // The format only has date components, which a Date always carries.
    date.format(DATE_FORMAT).unwrap_or_else(|_| {
        format!(
            "{:04}/{:02}/{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        )
    })
}

pub fn render(ctx: &TemplateContext) -> String {
    format!(
        r#"# -*- coding: utf-8 -*-
##  Generated by vows v{version}  ({date})
##  http://pyvows.org

##  IMPORTS  ##
##
##  Standard Library
#
##  Third Party
#
##  PyVows Testing
from pyvows import Vows, expect

##  Local Imports
import


##  TESTS  ##
@Vows.batch
class PleaseGiveMeAGoodName(Vows.Context):

    def topic(self):
        return # return what you're going to test here

    ##  Now, write some vows for your topic! :)
    def should_do_something(self, topic):
        expect(topic)# <pyvows assertion here>

"#,
        version = ctx.version(),
        date = ctx.formatted_date(),
    )
}

pub fn write_template<W: Write>(ctx: &TemplateContext, mut out: W) -> io::Result<()> {
    out.write_all(render(ctx).as_bytes())?;
    out.flush()
}

/// Writes today's scaffold for `version` to standard output.
pub fn render_template(version: &str) -> io::Result<()> {
    let ctx = TemplateContext::today(version);
    tracing::debug!(version, date = %ctx.formatted_date(), "rendering test template");
    write_template(&ctx, io::stdout().lock())
}
