use crate::artifacts::status::status_entry::StatusEntry;
use crate::artifacts::status::status_type::StatusType;
use crate::errors::{SvnError, SvnResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::io::Cursor;
use std::iter::FusedIterator;
use tracing::debug;

const ROOT_ELEMENT: &[u8] = b"status";
const ENTRY_PARENT_ELEMENTS: [&[u8]; 2] = [b"target", b"changelist"];
const ENTRY_ELEMENT: &[u8] = b"entry";
const WC_STATUS_ELEMENT: &[u8] = b"wc-status";

#[derive(Debug)]
struct PendingEntry {
    name: String,
    item: Option<String>,
    revision: Option<String>,
}

/// Single-pass stream of status entries read from one `svn status --xml` response.
///
/// Entries come out in document order. The first error ends the stream: it is
/// yielded as an item and every later call to `next` returns `None`.
/// Anything after the closing `</status>` (e.g. stderr appended to the
/// combined output) is never read.
pub struct StatusEntries {
    reader: Reader<Cursor<Vec<u8>>>,
    buf: Vec<u8>,
    open_elements: Vec<Vec<u8>>,
    pending: Option<PendingEntry>,
    seen_root: bool,
    finished: bool,
}

impl StatusEntries {
    pub fn new(xml: impl Into<Vec<u8>>) -> Self {
        StatusEntries {
            reader: Reader::from_reader(Cursor::new(xml.into())),
            buf: Vec::new(),
            open_elements: Vec::new(),
            pending: None,
            seen_root: false,
            finished: false,
        }
    }

    fn next_entry(&mut self) -> SvnResult<Option<StatusEntry>> {
        loop {
            self.buf.clear();
            let event = self.reader.read_event_into(&mut self.buf)?.into_owned();

            match event {
                Event::Start(element) => {
                    self.enter(&element)?;
                    self.open_elements.push(element.name().as_ref().to_vec());
                }
                Event::Empty(element) => {
                    self.enter(&element)?;
                    if let Some(entry) = self.leave(element.name().as_ref())? {
                        return Ok(Some(entry));
                    }
                    if self.open_elements.is_empty() {
                        return Ok(None);
                    }
                }
                Event::End(element) => {
                    self.open_elements.pop();
                    if let Some(entry) = self.leave(element.name().as_ref())? {
                        return Ok(Some(entry));
                    }
                    if self.open_elements.is_empty() {
                        return Ok(None);
                    }
                }
                Event::Eof => {
                    if !self.seen_root {
                        return Err(SvnError::Parse("no status element found".to_string()));
                    }
                    if let Some(open) = self.open_elements.last() {
                        return Err(SvnError::Parse(format!(
                            "unexpected end of output inside <{}>",
                            String::from_utf8_lossy(open)
                        )));
                    }
                    return Ok(None);
                }
                _ => {}
            }
        }
    }

    // position is checked before the element is pushed
    fn enter(&mut self, element: &BytesStart<'_>) -> SvnResult<()> {
        let name = element.name();
        let name = name.as_ref();

        if self.open_elements.is_empty() {
            if name != ROOT_ELEMENT {
                return Err(SvnError::Parse(format!(
                    "unexpected root element <{}>",
                    String::from_utf8_lossy(name)
                )));
            }
            self.seen_root = true;
            return Ok(());
        }

        if name == ENTRY_ELEMENT && self.at_entry_level() {
            let path = attribute(element, "path")?
                .ok_or_else(|| SvnError::Parse("entry without path attribute".to_string()))?;
            self.pending = Some(PendingEntry {
                name: path,
                item: None,
                revision: None,
            });
            return Ok(());
        }

        if name == WC_STATUS_ELEMENT && self.inside_entry() {
            let item = attribute(element, "item")?;
            let revision = attribute(element, "revision")?;

            if let Some(pending) = self.pending.as_mut() {
                let item = item.ok_or_else(|| {
                    SvnError::Parse(format!(
                        "wc-status of '{}' has no item attribute",
                        pending.name
                    ))
                })?;
                pending.item = Some(item);
                pending.revision = revision;
            }
        }

        Ok(())
    }

    // position is checked after the element is popped
    fn leave(&mut self, name: &[u8]) -> SvnResult<Option<StatusEntry>> {
        if name != ENTRY_ELEMENT || !self.at_entry_level() {
            return Ok(None);
        }

        match self.pending.take() {
            Some(pending) => finish_entry(pending).map(Some),
            None => Ok(None),
        }
    }

    fn at_entry_level(&self) -> bool {
        match self.open_elements.as_slice() {
            [root, parent] => {
                root.as_slice() == ROOT_ELEMENT
                    && ENTRY_PARENT_ELEMENTS.contains(&parent.as_slice())
            }
            _ => false,
        }
    }

    fn inside_entry(&self) -> bool {
        self.pending.is_some()
            && self.open_elements.len() == 3
            && self
                .open_elements
                .last()
                .is_some_and(|last| last.as_slice() == ENTRY_ELEMENT)
    }
}

impl Iterator for StatusEntries {
    type Item = SvnResult<StatusEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_entry() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for StatusEntries {}

fn finish_entry(pending: PendingEntry) -> SvnResult<StatusEntry> {
    let type_raw_name = pending.item.ok_or_else(|| {
        SvnError::Parse(format!("entry '{}' has no wc-status element", pending.name))
    })?;

    let status_type =
        StatusType::from_raw(&type_raw_name).ok_or_else(|| SvnError::UnknownStatusCode {
            code: type_raw_name.clone(),
            path: pending.name.clone(),
        })?;

    // absent for unversioned entries, -1 for added but uncommitted ones
    let revision = pending
        .revision
        .map(|raw| {
            raw.parse::<i64>().map_err(|_| {
                SvnError::Parse(format!("invalid revision '{raw}' for '{}'", pending.name))
            })
        })
        .transpose()?;

    debug!(name = %pending.name, status = %status_type, ?revision, "parsed status entry");

    Ok(StatusEntry::new(
        pending.name,
        type_raw_name,
        status_type,
        revision,
    ))
}

// walks every attribute so repeated keys are reported instead of shadowed
fn attribute(element: &BytesStart<'_>, key: &str) -> SvnResult<Option<String>> {
    let mut value = None;

    for attribute in element.attributes() {
        let attribute = attribute?;
        if attribute.key.as_ref() == key.as_bytes() {
            value = Some(attribute.unescape_value()?.into_owned());
        }
    }

    Ok(value)
}
