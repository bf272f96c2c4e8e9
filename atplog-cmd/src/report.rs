use std::io::{stdout, Write};
use std::path::Path;

use anyhow::{Context, Result};
use atplog::{describe, Payload, Record, Summary};
use handlebars::handlebars_helper;
use serde::Serialize;

#[derive(Debug, Clone)]
pub enum Format {
    Json,
    Text,
}

impl clap::ValueEnum for Format {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Json, Self::Text]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Json => Some(clap::builder::PossibleValue::new("json")),
            Self::Text => Some(clap::builder::PossibleValue::new("text")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct TypeCount {
    code: String,
    description: String,
    count: usize,
}

#[derive(Debug, Clone, Serialize)]
struct ListedRecord {
    offset: usize,
    timestamp: String,
    description: String,
    payload: String,
    window: String,
}

#[derive(Debug, Clone, Serialize)]
struct Report {
    filename: String,
    total: usize,
    first: Option<String>,
    last: Option<String>,
    types: Vec<TypeCount>,
    listed: usize,
    records: Vec<ListedRecord>,
}

fn render_payload(payload: &Payload) -> String {
    match payload {
        Payload::Scalar(value) => format!("value={value}"),
        Payload::Raw(bytes) => format!("raw={}", hex::encode(bytes)),
    }
}

fn build(fpath: &Path, records: &[Record], count: usize) -> Report {
    let mut summary = Summary::default();
    for record in records {
        summary.add(record);
    }

    let mut types: Vec<TypeCount> = summary
        .types
        .iter()
        .map(|(code, ts)| TypeCount {
            code: format!("0x{code:02x}"),
            description: describe(*code),
            count: ts.count,
        })
        .collect();
    types.sort_by(|a, b| a.code.cmp(&b.code));

    let listed: Vec<ListedRecord> = records
        .iter()
        .take(count)
        .map(|r| ListedRecord {
            offset: r.offset,
            timestamp: r.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            description: r.description(),
            payload: render_payload(&r.payload),
            window: hex::encode(&r.window),
        })
        .collect();

    Report {
        filename: fpath.to_string_lossy().to_string(),
        total: summary.count,
        first: summary.first.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()),
        last: summary.last.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()),
        types,
        listed: listed.len(),
        records: listed,
    }
}

pub fn report(fpath: &Path, records: &[Record], count: usize, format: &Format) -> Result<()> {
    let report = build(fpath, records, count);

    match format {
        Format::Json => {
            serde_json::to_writer_pretty(stdout(), &report).context("serializing to json")
        }
        Format::Text => {
            // No range statistics or listing to show for an empty scan.
            if report.total == 0 {
                println!("Recovered 0 records from {}", report.filename);
                return Ok(());
            }
            let data = render_text(&report).context("rendering report")?;
            stdout()
                .write_all(str::as_bytes(&data))
                .context("writing to stdout")
        }
    }
}

fn render_text(report: &Report) -> Result<String> {
    handlebars_helper!(left_pad: |num: u64, v: Json| {
        let v = match v {
            serde_json::Value::String(s) => s.to_owned(),
            serde_json::Value::Null => String::new(),
            _ => v.to_string()
        };
        let mut num: usize = usize::try_from(num).unwrap();
        if num < v.len() {
            num = v.len();
        }
        let mut s = String::new();
        let padding = num - v.len();
        for _ in 0..padding {
            s.push(' ');
        }
        s.push_str(&v);
        s
    });
    let mut hb = handlebars::Handlebars::new();
    hb.register_helper("lpad", Box::new(left_pad));
    assert!(hb.register_template_string("report", TEXT_TEMPLATE).is_ok());

    hb.render("report", &report).context("rendering text")
}

const TEXT_TEMPLATE: &str = r"Recovered {{ total }} records from {{ filename }}
================================================================================
First:   {{ first }}
Last:    {{ last }}
Count:   {{ total }}
--------------------------------------------------------------------------------
Type    Description                 Count
--------------------------------------------------------------------------------
{{#each types}}{{ code }}    {{ lpad 24 description }}   {{ lpad 5 count }}
{{/each}}--------------------------------------------------------------------------------
Listing first {{ listed }} of {{ total }}
--------------------------------------------------------------------------------
{{#each records}}{{ lpad 8 offset }}  {{ timestamp }}  {{ lpad 24 description }}  {{ payload }}  [{{ window }}]
{{/each}}";
