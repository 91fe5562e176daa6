const UNCHECKED_MARKER: &str = "- [ ]";

/// An unchecked checklist line from the remediation schedule, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleItem {
    pub text: String,
}

/// Collects unchecked items from the first line starting with `heading` to the
/// end of the document.
///
/// Later headings do not end the section, so unchecked items under any
/// following heading still count as schedule items.
pub fn parse_schedule<S: AsRef<str>>(lines: &[S], heading: &str) -> Vec<ScheduleItem> {
    let mut items = Vec::new();
    let mut capture = false;

    for line in lines {
        let line = line.as_ref();
        if !capture {
            capture = line.starts_with(heading);
            continue;
        }
        let trimmed = line.trim();
        if trimmed.starts_with(UNCHECKED_MARKER) {
            items.push(ScheduleItem {
                text: trimmed.to_owned(),
            });
        }
    }

    log::debug!("parsed {} remediation schedule items", items.len());
    items
}

/// Space-joined, lowercased text of all items, used for coverage lookups.
pub fn schedule_text(items: &[ScheduleItem]) -> String {
    items
        .iter()
        .map(|item| item.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
