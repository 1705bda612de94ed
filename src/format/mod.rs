use crate::color;
use crate::error::{Error, Result};
use crate::level::{record_level, Level, LOGGING_CRITICAL};
use lazy_static::lazy_static;
use log::Record;
use regex::Regex;


/// `LEVEL:name:message`
pub const SIMPLE_FORMAT: &str = "{level}:{name}:{message}";

/// `timestamp - LEVEL - name - message`
pub const TIMESTAMP_FORMAT: &str = "{timestamp} - {level} - {name} - {message}";

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"\{\{|\}\}|\{([^{}]*)\}").expect("valid token regex");
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Level,
    Name,
    Message,
    Timestamp,
    Module,
    File,
    Line,
}

impl Segment {
    fn placeholder(name: &str) -> Option<Self> {
        let seg = match name {
            "level" => Segment::Level,
            "name" => Segment::Name,
            "message" => Segment::Message,
            "timestamp" => Segment::Timestamp,
            "module" => Segment::Module,
            "file" => Segment::File,
            "line" => Segment::Line,
            _ => return None,
        };
        Some(seg)
    }
}

/// A parsed output template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    template: String,
    segments: Vec<Segment>,
}

impl Format {
    pub fn parse(template: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last = 0;

        for caps in TOKEN.captures_iter(template) {
            let m = caps.get(0).expect("whole match");
            push_literal(&mut literal, &template[last..m.start()])?;
            last = m.end();

            match m.as_str() {
                "{{" => literal.push('{'),
                "}}" => literal.push('}'),
                _ => {
                    let name = caps.get(1).map_or("", |n| n.as_str());
                    let seg = match Segment::placeholder(name) {
                        Some(seg) => seg,
                        None => {
                            return Err(Error::InvalidFormat(format!(
                                "unknown placeholder {{{}}} in {:?}",
                                name, template
                            )))
                        }
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(seg);
                }
            }
        }

        push_literal(&mut literal, &template[last..])?;
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            template: template.to_string(),
            segments,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Renders a record. `timestamp` is only called when the template
    /// contains `{timestamp}`.
    pub fn render<F>(&self, record: &Record, timestamp: F, colored: bool) -> String
    where
        F: Fn() -> String,
    {
        let mut out = String::new();
        for seg in &self.segments {
            match seg {
                Segment::Literal(s) => out.push_str(s),
                Segment::Level => {
                    let label = level_label(record);
                    if colored {
                        out.push_str(&color::paint(color::for_level(record.level()), label));
                    } else {
                        out.push_str(label);
                    }
                }
                Segment::Name => out.push_str(record.target()),
                Segment::Message => out.push_str(&record.args().to_string()),
                Segment::Timestamp => out.push_str(&timestamp()),
                Segment::Module => out.push_str(record.module_path().unwrap_or("")),
                Segment::File => out.push_str(record.file().unwrap_or("")),
                Segment::Line => {
                    if let Some(line) = record.line() {
                        out.push_str(&line.to_string());
                    }
                }
            }
        }
        out
    }
}

impl Default for Format {
    fn default() -> Self {
        Format::parse(SIMPLE_FORMAT).expect("valid default format")
    }
}

/// The label printed for a record's level.
pub fn level_label(record: &Record) -> &'static str {
    if record_level(record) == Level::Critical {
        return LOGGING_CRITICAL;
    }
    match record.level() {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARNING",
        log::Level::Info => "INFO",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    }
}

// Text between tokens may not hold a lone brace.
fn push_literal(literal: &mut String, text: &str) -> Result<()> {
    if let Some(pos) = text.find(|c: char| c == '{' || c == '}') {
        return Err(Error::InvalidFormat(format!(
            "unbalanced brace in {:?} at {:?}",
            text,
            &text[pos..]
        )));
    }
    literal.push_str(text);
    Ok(())
}
