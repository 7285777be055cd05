pub mod config;
pub mod counter;
pub mod grades;
pub mod habit;
pub mod notes;
pub mod quiz;
pub mod timer;

/// Read one line from stdin, trimmed. `None` at end of input.
pub(crate) fn read_line(input: &mut impl std::io::BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
