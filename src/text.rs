/// Parses one line of commit history in the format `hash|message|parent-hashes`,
/// with parent hashes separated by single spaces.
///
/// The parent field may be absent entirely (no parents) or present but empty
/// (yielding a single empty entry, as git emits for root commits).
/// Returns `None` for lines with fewer than two fields or an empty hash.
pub fn parse_log_line(line: &str) -> Option<(String, String, Vec<String>)> {
    let mut fields = line.splitn(3, '|');

    let hash = fields.next()?;
    let message = fields.next()?;
    if hash.is_empty() {
        return None;
    }

    let parent_hashes = match fields.next() {
        Some(parents) => parents.split(' ').map(|hash| hash.to_string()).collect(),
        None => Vec::new(),
    };

    Some((hash.to_string(), message.to_string(), parent_hashes))
}
