//! Delimited-file reader.
//!
//! Pipeline:
//!   raw &str
//!     └─ split_records()      → Vec<(line, Vec<String>)>
//!          └─ header check    → reject the whole document on mismatch
//!               └─ row → Contact, or a line-numbered error
//!
//! Quoting follows RFC 4180: a field wrapped in double quotes may contain
//! commas, line breaks, and doubled quotes. A quoted field may therefore span
//! physical lines, so records are split by walking characters, not lines.

use rolo_core::Contact;

use crate::{
  HEADER,
  error::{Error, Result},
};

// ─── Record splitter ─────────────────────────────────────────────────────────

/// Split `input` into records of raw fields, each tagged with the 1-based
/// physical line it started on. Blank lines are skipped; a trailing line
/// terminator is tolerated. Bare `\n` and `\r\n` both end a record.
fn split_records(input: &str) -> Result<Vec<(usize, Vec<String>)>> {
  let mut records: Vec<(usize, Vec<String>)> = Vec::new();
  let mut fields: Vec<String> = Vec::new();
  let mut field = String::new();
  let mut in_quotes = false;
  let mut quoted_this_record = false;
  let mut line = 1usize;
  let mut record_line = 1usize;

  let mut chars = input.chars().peekable();
  while let Some(c) = chars.next() {
    if in_quotes {
      match c {
        '"' => {
          // A doubled quote is a literal quote; a lone one closes the field.
          if chars.peek() == Some(&'"') {
            chars.next();
            field.push('"');
          } else {
            in_quotes = false;
          }
        }
        '\n' => {
          line += 1;
          field.push('\n');
        }
        _ => field.push(c),
      }
      continue;
    }

    match c {
      '"' if field.is_empty() => {
        in_quotes = true;
        quoted_this_record = true;
      }
      ',' => fields.push(std::mem::take(&mut field)),
      '\r' if chars.peek() == Some(&'\n') => {} // consumed by the '\n' arm
      '\n' => {
        let blank = fields.is_empty() && field.is_empty() && !quoted_this_record;
        if !blank {
          fields.push(std::mem::take(&mut field));
          records.push((record_line, std::mem::take(&mut fields)));
        }
        line += 1;
        record_line = line;
        quoted_this_record = false;
      }
      _ => field.push(c),
    }
  }

  if in_quotes {
    return Err(Error::UnterminatedQuote { line: record_line });
  }

  // Final record without a trailing terminator.
  if !(fields.is_empty() && field.is_empty() && !quoted_this_record) {
    fields.push(field);
    records.push((record_line, fields));
  }

  Ok(records)
}

// ─── Row mapping ─────────────────────────────────────────────────────────────

fn row_to_contact(line: usize, fields: Vec<String>) -> Result<Contact> {
  if fields.len() != 4 {
    return Err(Error::WrongFieldCount { line, found: fields.len() });
  }

  let mut fields = fields.into_iter();
  let id_raw = fields.next().unwrap_or_default();
  let name   = fields.next().unwrap_or_default();
  let email  = fields.next().unwrap_or_default();
  let phone  = fields.next().unwrap_or_default();

  let id = match id_raw.trim().parse::<u64>() {
    Ok(id) if id > 0 => id,
    _ => {
      return Err(Error::InvalidId { line, value: id_raw });
    }
  };

  // An empty email field means "no email", not an empty address.
  let email = if email.is_empty() { None } else { Some(email) };

  Ok(Contact { id, name, email, phone })
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Parse a whole contacts file into records in file order.
///
/// A completely empty document is the empty collection (a store file that was
/// touched but never written to). Any other document must start with the
/// exact header line, and every row must parse — one malformed row rejects
/// the whole document.
pub(crate) fn parse_document(input: &str) -> Result<Vec<Contact>> {
  let mut records = split_records(input)?.into_iter();

  let Some((_, header)) = records.next() else {
    return Ok(Vec::new());
  };
  if header.join(",") != HEADER {
    return Err(Error::BadHeader {
      expected: HEADER,
      found:    header.join(","),
    });
  }

  records
    .map(|(line, fields)| row_to_contact(line, fields))
    .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
