use crate::error::{ParseError, Result};
use crate::ir::{Action, Phase, Sequence};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static DIRECTIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@(?P<kind>order|endphase|phase)(?:\s+(?P<rest>.*))?$").unwrap()
});

#[derive(Debug, PartialEq, Eq)]
enum Statement<'a> {
    Order(Vec<&'a str>),
    OpenPhase {
        name: &'a str,
        color: Option<&'a str>,
    },
    ClosePhase,
    Flow {
        from: &'a str,
        to: &'a str,
        label: &'a str,
        color: Option<&'a str>,
    },
}

#[derive(Debug)]
struct OpenPhase {
    name: String,
    color: Option<String>,
    start: usize,
    line: usize,
}

/// Parses the sequence notation into a validated model.
///
/// Parsing stops at the first structural error; nothing partial is returned.
pub fn parse_sequence(input: &str) -> Result<Sequence> {
    let mut parser = SequenceParser::default();
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    for (idx, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = idx + 1;
        let statement = parse_statement(line, line_no)?;
        parser.apply(statement, line_no)?;
    }
    parser.finish()
}

#[derive(Debug, Default)]
struct SequenceParser {
    seq: Sequence,
    open: Vec<OpenPhase>,
    statements: usize,
}

impl SequenceParser {
    fn apply(&mut self, statement: Statement<'_>, line: usize) -> Result<()> {
        match statement {
            Statement::Order(names) => {
                if self.statements > 0 {
                    return Err(ParseError::OrderNotFirst { line });
                }
                debug!(line, count = names.len(), "explicit actor order");
                for name in names {
                    self.ensure_actor(name);
                }
            }
            Statement::OpenPhase { name, color } => {
                debug!(line, name, depth = self.open.len(), "open phase");
                self.open.push(OpenPhase {
                    name: name.to_string(),
                    color: color.map(str::to_string),
                    start: self.seq.action_count(),
                    line,
                });
            }
            Statement::ClosePhase => {
                let open = self
                    .open
                    .pop()
                    .ok_or(ParseError::UnmatchedEndPhase { line })?;
                let end = self.seq.action_count();
                debug!(line, name = %open.name, start = open.start, end, "close phase");
                self.seq.phases.push(Phase {
                    name: open.name,
                    color: open.color,
                    start: open.start,
                    end,
                    depth: self.open.len(),
                });
            }
            Statement::Flow {
                from,
                to,
                label,
                color,
            } => {
                let from = self.ensure_actor(from);
                let to = self.ensure_actor(to);
                self.seq.actions.push(Action {
                    from,
                    to,
                    label: label.to_string(),
                    color: color.map(str::to_string),
                });
            }
        }
        self.statements += 1;
        Ok(())
    }

    fn ensure_actor(&mut self, name: &str) -> usize {
        let known = self.seq.actor_count();
        let ordinal = self.seq.ensure_actor(name);
        if ordinal == known {
            debug!(name, ordinal, "new actor");
        }
        ordinal
    }

    fn finish(mut self) -> Result<Sequence> {
        if let Some(open) = self.open.pop() {
            return Err(ParseError::UnclosedPhase {
                name: open.name,
                line: open.line,
            });
        }
        Ok(self.seq)
    }
}

fn parse_statement(line: &str, line_no: usize) -> Result<Statement<'_>> {
    if let Some(caps) = DIRECTIVE_RE.captures(line) {
        let rest = caps.name("rest").map(|m| m.as_str()).unwrap_or("");
        return match caps.name("kind").map(|m| m.as_str()) {
            Some("order") => Ok(Statement::Order(
                split_fields(rest)
                    .into_iter()
                    .filter(|name| !name.is_empty())
                    .collect(),
            )),
            Some("phase") => {
                let fields = split_fields(rest);
                let name = fields.first().copied().unwrap_or("");
                if name.is_empty() {
                    return Err(malformed(line, line_no, "phase name missing"));
                }
                Ok(Statement::OpenPhase {
                    name,
                    color: non_empty(fields.get(1).copied()),
                })
            }
            _ => Ok(Statement::ClosePhase),
        };
    }

    let fields = split_fields(line);
    if fields.len() < 3 {
        return Err(malformed(line, line_no, "expected `source, target, label[, color]`"));
    }
    if fields.len() > 4 {
        return Err(malformed(line, line_no, "too many fields"));
    }
    if fields[0].is_empty() || fields[1].is_empty() {
        return Err(malformed(line, line_no, "actor name missing"));
    }
    Ok(Statement::Flow {
        from: fields[0],
        to: fields[1],
        label: fields[2],
        color: non_empty(fields.get(3).copied()),
    })
}

fn split_fields(text: &str) -> Vec<&str> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(',').map(str::trim).collect()
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.is_empty())
}

fn malformed(line: &str, line_no: usize, reason: &'static str) -> ParseError {
    ParseError::MalformedLine {
        line: line_no,
        text: line.to_string(),
        reason,
    }
}
