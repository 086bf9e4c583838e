//! Record-to-model construction
//!
//! The parser turns chunked records from the reader into a populated
//! [`FamilyGraph`]. Construction is two-pass: the first pass allocates an
//! arena slot for every `INDI`/`FAM` record and registers its cross-reference
//! key, the second pass fills the slots and resolves every pointer through
//! the key index. Forward references therefore need no fixup queue.

use crate::config::GedcomReaderConfig;
use crate::error::{GedcomError, Result};
use crate::models::{
    Encoding, Event, FamId, Family, FamilyGraph, Field, Header, IndiId, Individual, RecordRef,
    Submitter, is_family_event, is_individual_event,
};
use crate::reader::{GedcomLine, GedcomReader, GedcomRecord};
use crate::utils::logging::{log_operation_start, log_parse_complete, log_warning};
use rustc_hash::FxHashMap;
use std::path::Path;
use std::time::Instant;

/// Parse a GEDCOM file into a family graph
pub fn parse_file(path: &Path, config: &GedcomReaderConfig) -> Result<FamilyGraph> {
    log_operation_start("Reading GEDCOM file", path);
    let started = Instant::now();
    let reader = GedcomReader::open(path, config)?;
    let graph = build_graph(reader.into_records(), config)?;
    log_parse_complete(
        &path.display().to_string(),
        graph.individual_count(),
        graph.family_count(),
        Some(started.elapsed()),
    );
    Ok(graph)
}

/// Parse in-memory GEDCOM text into a family graph
pub fn parse_str(source: &str, config: &GedcomReaderConfig) -> Result<FamilyGraph> {
    let reader = GedcomReader::from_text(source, config)?;
    let graph = build_graph(reader.into_records(), config)?;
    log_parse_complete(
        "in-memory source",
        graph.individual_count(),
        graph.family_count(),
        None,
    );
    Ok(graph)
}

fn build_graph(records: Vec<GedcomRecord>, config: &GedcomReaderConfig) -> Result<FamilyGraph> {
    let mut graph = FamilyGraph::new();

    // Pass 1: allocate arena slots so later pointers always resolve.
    for record in &records {
        let reference = match record.tag() {
            "INDI" => RecordRef::Individual(graph.add_individual(Individual::default())),
            "FAM" => RecordRef::Family(graph.add_family(Family::new())),
            _ => continue,
        };
        let Some(xref) = record.xref() else {
            return Err(GedcomError::invalid_record(
                format!("{} record missing cross-reference", record.tag()),
                record.line_no(),
            ));
        };
        if graph.register_xref(xref, reference).is_some() {
            return Err(GedcomError::invalid_record(
                format!("duplicate cross-reference {xref}"),
                record.line_no(),
            ));
        }
    }

    // Pass 2: submitters first so the header's SUBM pointer can resolve,
    // individuals before families so family links land on filled slots.
    let mut submitters: FxHashMap<String, Submitter> = FxHashMap::default();
    for record in &records {
        if record.tag() == "SUBM" {
            let Some(xref) = record.xref() else {
                return Err(GedcomError::invalid_record(
                    "SUBM record missing cross-reference",
                    record.line_no(),
                ));
            };
            submitters.insert(xref.to_string(), parse_submitter(record, config)?);
        }
    }

    if let Some(record) = records.iter().find(|r| r.tag() == "HEAD") {
        graph.set_header(parse_header(record, &mut submitters, config)?);
    }

    // Individuals are filled by whole-slot assignment, so they must all be
    // in place before family links back-fill membership lists.
    for record in &records {
        if record.tag() == "INDI" {
            parse_individual(record, &mut graph)?;
        }
    }

    for record in &records {
        match record.tag() {
            "FAM" => parse_family(record, &mut graph)?,
            "INDI" | "HEAD" | "TRLR" | "SUBM" => {}
            tag => {
                if config.skip_unknown_records {
                    log::debug!(
                        "skipping unrecognised record '{tag}' at line {}",
                        record.line_no()
                    );
                } else {
                    return Err(GedcomError::invalid_record(
                        format!("unrecognised record '{tag}'"),
                        record.line_no(),
                    ));
                }
            }
        }
    }

    Ok(graph)
}

/// Index of the first following line at or above the subtree root's level
fn subtree_end(lines: &[GedcomLine], start: usize) -> usize {
    let level = lines[start].level;
    let mut end = start + 1;
    while end < lines.len() && lines[end].level > level {
        end += 1;
    }
    end
}

fn line_value(line: &GedcomLine) -> String {
    line.value.clone().unwrap_or_default()
}

fn push_field(fields: &mut Vec<Field>, line: &GedcomLine) {
    fields.push(Field::new(line.tag.clone(), line_value(line)));
}

/// Resolve an `@X@` pointer to an individual id
fn resolve_individual(graph: &FamilyGraph, line: &GedcomLine) -> Result<IndiId> {
    let Some(xref) = &line.value else {
        return Err(GedcomError::invalid_record(
            format!("{} line missing cross-reference", line.tag),
            line.line_no,
        ));
    };
    match graph.resolve_xref(xref) {
        Some(RecordRef::Individual(id)) => Ok(id),
        Some(RecordRef::Family(_)) => Err(GedcomError::invalid_record(
            format!("cross-reference {xref} is not an individual"),
            line.line_no,
        )),
        None => Err(GedcomError::invalid_record(
            format!("unresolved cross-reference {xref}"),
            line.line_no,
        )),
    }
}

/// Resolve an `@X@` pointer to a family id
fn resolve_family(graph: &FamilyGraph, line: &GedcomLine) -> Result<FamId> {
    let Some(xref) = &line.value else {
        return Err(GedcomError::invalid_record(
            format!("{} line missing cross-reference", line.tag),
            line.line_no,
        ));
    };
    match graph.resolve_xref(xref) {
        Some(RecordRef::Family(id)) => Ok(id),
        Some(RecordRef::Individual(_)) => Err(GedcomError::invalid_record(
            format!("cross-reference {xref} is not a family"),
            line.line_no,
        )),
        None => Err(GedcomError::invalid_record(
            format!("unresolved cross-reference {xref}"),
            line.line_no,
        )),
    }
}

/// Split a `NAME` value into given name and surname
///
/// The surname is the text between the first pair of slashes; the given
/// name is everything before it. Without slashes the whole value is the
/// given name.
fn split_name(value: &str) -> (String, String) {
    match value.find('/') {
        Some(open) => {
            let given = value[..open].trim().to_string();
            let rest = &value[open + 1..];
            let surname = match rest.find('/') {
                Some(close) => rest[..close].trim().to_string(),
                None => rest.trim().to_string(),
            };
            (given, surname)
        }
        None => (value.trim().to_string(), String::new()),
    }
}

/// Collect an event's `DATE`/`PLAC` sub-lines; everything else becomes a field
fn parse_event(tag: &str, lines: &[GedcomLine]) -> Event {
    let mut event = Event::new(tag);
    for line in lines {
        match line.tag.as_str() {
            "DATE" => event.date = line.value.clone(),
            "PLAC" => event.place = line.value.clone(),
            _ => push_field(&mut event.other_fields, line),
        }
    }
    event
}

fn parse_individual(record: &GedcomRecord, graph: &mut FamilyGraph) -> Result<()> {
    // Pass 1 registered a slot for every INDI carrying a cross-reference.
    let Some(RecordRef::Individual(id)) =
        record.xref().and_then(|xref| graph.resolve_xref(xref))
    else {
        return Err(GedcomError::invalid_record(
            "INDI record missing cross-reference",
            record.line_no(),
        ));
    };

    let mut individual = Individual::default();
    let mut memberships: Vec<FamId> = Vec::new();
    let lines = record.sub_lines();
    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];
        let end = subtree_end(lines, i);
        match line.tag.as_str() {
            "NAME" => {
                let (given, surname) = split_name(&line_value(line));
                individual.given_name = given;
                individual.surname = surname;
                for sub in &lines[i + 1..end] {
                    match sub.tag.as_str() {
                        "GIVN" => individual.given_name = line_value(sub),
                        "SURN" => individual.surname = line_value(sub),
                        _ => push_field(&mut individual.other_fields, sub),
                    }
                }
            }
            "FAMS" | "FAMC" => {
                memberships.push(resolve_family(graph, line)?);
                for sub in &lines[i + 1..end] {
                    push_field(&mut individual.other_fields, sub);
                }
            }
            tag if is_individual_event(tag) => {
                individual.events.push(parse_event(tag, &lines[i + 1..end]));
            }
            _ => {
                for sub in &lines[i..end] {
                    push_field(&mut individual.other_fields, sub);
                }
            }
        }
        i = end;
    }

    *graph.individual_mut(id) = individual;
    for family in memberships {
        graph.add_membership(id, family);
    }
    Ok(())
}

fn parse_family(record: &GedcomRecord, graph: &mut FamilyGraph) -> Result<()> {
    let Some(RecordRef::Family(id)) = record.xref().and_then(|xref| graph.resolve_xref(xref))
    else {
        return Err(GedcomError::invalid_record(
            "FAM record missing cross-reference",
            record.line_no(),
        ));
    };

    let lines = record.sub_lines();
    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];
        let end = subtree_end(lines, i);
        match line.tag.as_str() {
            "WIFE" => {
                let wife = resolve_individual(graph, line)?;
                graph.set_spouses(id, Some(wife), None);
                for sub in &lines[i + 1..end] {
                    push_field(&mut graph.family_mut(id).other_fields, sub);
                }
            }
            "HUSB" => {
                let husband = resolve_individual(graph, line)?;
                graph.set_spouses(id, None, Some(husband));
                for sub in &lines[i + 1..end] {
                    push_field(&mut graph.family_mut(id).other_fields, sub);
                }
            }
            "CHIL" => {
                let child = resolve_individual(graph, line)?;
                graph.add_child(id, child);
                for sub in &lines[i + 1..end] {
                    push_field(&mut graph.family_mut(id).other_fields, sub);
                }
            }
            tag if is_family_event(tag) => {
                let event = parse_event(tag, &lines[i + 1..end]);
                graph.family_mut(id).events.push(event);
            }
            _ => {
                for sub in &lines[i..end] {
                    push_field(&mut graph.family_mut(id).other_fields, sub);
                }
            }
        }
        i = end;
    }
    Ok(())
}

fn parse_submitter(record: &GedcomRecord, config: &GedcomReaderConfig) -> Result<Submitter> {
    let mut submitter = Submitter::new("");
    let lines = record.sub_lines();
    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];
        let end = subtree_end(lines, i);
        match line.tag.as_str() {
            "NAME" => submitter.name = line_value(line),
            "ADDR" => {
                submitter.address = line.value.clone();
                for sub in &lines[i + 1..end] {
                    push_field(&mut submitter.other_fields, sub);
                }
            }
            _ => {
                for sub in &lines[i..end] {
                    push_field(&mut submitter.other_fields, sub);
                }
            }
        }
        i = end;
    }
    if config.validate_structure && submitter.name.is_empty() {
        return Err(GedcomError::invalid_record(
            "submitter record missing NAME",
            record.line_no(),
        ));
    }
    Ok(submitter)
}

fn parse_header(
    record: &GedcomRecord,
    submitters: &mut FxHashMap<String, Submitter>,
    config: &GedcomReaderConfig,
) -> Result<Header> {
    // ANSEL is the GEDCOM default when CHAR is absent.
    let mut header = Header::new("", "", Encoding::Ansel);
    let mut encoding_seen = false;
    let lines = record.sub_lines();
    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];
        let end = subtree_end(lines, i);
        match line.tag.as_str() {
            "SOUR" => {
                header.source = line_value(line);
                for sub in &lines[i + 1..end] {
                    push_field(&mut header.other_fields, sub);
                }
            }
            "GEDC" => {
                for sub in &lines[i + 1..end] {
                    if sub.tag == "VERS" {
                        header.gedc_version = line_value(sub);
                    } else {
                        push_field(&mut header.other_fields, sub);
                    }
                }
            }
            "CHAR" => {
                let value = line_value(line);
                let Some(encoding) = Encoding::from_tag(&value) else {
                    return Err(GedcomError::invalid_header(
                        format!("unsupported encoding '{value}'"),
                        line.line_no,
                    ));
                };
                header.encoding = encoding;
                encoding_seen = true;
            }
            "SUBM" => {
                let Some(xref) = &line.value else {
                    return Err(GedcomError::invalid_header(
                        "SUBM line missing cross-reference",
                        line.line_no,
                    ));
                };
                let Some(submitter) = submitters.remove(xref) else {
                    return Err(GedcomError::invalid_header(
                        format!("submitter {xref} not found"),
                        line.line_no,
                    ));
                };
                header.submitter = Some(submitter);
            }
            _ => {
                for sub in &lines[i..end] {
                    push_field(&mut header.other_fields, sub);
                }
            }
        }
        i = end;
    }

    if config.validate_structure {
        if header.source.is_empty() {
            return Err(GedcomError::invalid_header("missing SOUR", record.line_no()));
        }
        if header.gedc_version.is_empty() {
            return Err(GedcomError::invalid_header(
                "missing GEDC version",
                record.line_no(),
            ));
        }
        if !encoding_seen {
            return Err(GedcomError::invalid_header(
                "missing CHAR encoding",
                record.line_no(),
            ));
        }
    } else if !encoding_seen {
        log_warning("header carries no CHAR encoding, assuming ANSEL", None);
    }
    if config.require_submitter && header.submitter.is_none() {
        return Err(GedcomError::invalid_header(
            "missing submitter",
            record.line_no(),
        ));
    }
    Ok(header)
}
