//! The Book demo: declare a model, emit its DDL and one INSERT.

use chrono::{Local, NaiveDate};
use sqlscribe_core::{Emitter, FieldSpec, Model, ModelDef, Row};
use std::io::Write;
use std::sync::OnceLock;

/// The date captured once per process and used as every date field's
/// default. Deliberately frozen: the declared schema carries one fixed
/// default date, it does not re-evaluate "today" per statement.
fn frozen_today() -> NaiveDate {
    static TODAY: OnceLock<NaiveDate> = OnceLock::new();
    *TODAY.get_or_init(|| Local::now().date_naive())
}

/// The sample record type.
pub struct Book {
    pub title: String,
    pub author: String,
    pub published_date: NaiveDate,
    pub year: i64,
}

impl Model for Book {
    fn model_def() -> &'static ModelDef {
        static DEF: OnceLock<ModelDef> = OnceLock::new();
        DEF.get_or_init(|| {
            ModelDef::new("Book")
                .with_field(FieldSpec::text("title"))
                .with_field(FieldSpec::text("author").with_max_length(100))
                .with_field(FieldSpec::date("published_date", frozen_today()))
                .with_field(FieldSpec::integer("year"))
        })
    }

    fn row(&self) -> Row {
        Row::new()
            .with("title", self.title.as_str())
            .with("author", self.author.as_str())
            .with("published_date", self.published_date)
            .with("year", self.year)
    }
}

/// Emit the demo statements: the Book DDL, then one populated row.
pub fn run<W: Write>(
    emitter: &mut Emitter<W>,
    table: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    Book::create_table(emitter, table)?;

    let book = Book {
        title: "Python Cookbook".to_string(),
        author: "David Beazley".to_string(),
        published_date: NaiveDate::from_ymd_opt(2013, 5, 10)
            .ok_or("invalid demo publication date")?,
        year: 2012,
    };
    book.save(emitter)?;

    Ok(())
}

/// Print the demo schema as pretty JSON.
pub fn dump_schema() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(Book::model_def())?);
    Ok(())
}
