//! Delimited-file writer.
//!
//! Emits the fixed header line, then one row per contact in sequence order,
//! with LF line endings. The parser tolerates CRLF for files edited by hand.

use rolo_core::Contact;

use crate::HEADER;

// ─── Field quoting ───────────────────────────────────────────────────────────

/// Quote a field when it contains a delimiter, a quote, or a line break;
/// embedded quotes are doubled (RFC 4180).
fn escape_field(s: &str) -> String {
  if s.contains([',', '"', '\n', '\r']) {
    format!("\"{}\"", s.replace('"', "\"\""))
  } else {
    s.to_string()
  }
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Render the full collection as a contacts file.
///
/// This is always a whole-document render; callers overwrite the store file
/// with the result. Ordering is preserved exactly.
pub(crate) fn serialize_document(contacts: &[Contact]) -> String {
  let mut out = String::new();
  out.push_str(HEADER);
  out.push('\n');

  for contact in contacts {
    out.push_str(&contact.id.to_string());
    out.push(',');
    out.push_str(&escape_field(&contact.name));
    out.push(',');
    out.push_str(&escape_field(contact.email.as_deref().unwrap_or_default()));
    out.push(',');
    out.push_str(&escape_field(&contact.phone));
    out.push('\n');
  }

  out
}

// ─── Tests ───────────────────────────────────────────────────────────────────
