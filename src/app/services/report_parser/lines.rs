//! Line splitting shared by every parser entry point
//!
//! Reports may end their lines with `\n`, `\r\n` or a lone `\r`, and a single
//! file may mix them. A terminator at the very end of the input does not
//! start another line.

/// Iterator over the lines of a report, without their terminators
#[derive(Debug, Clone)]
pub struct ReportLines<'a> {
    rest: Option<&'a str>,
}

/// Split `text` on `\n`, `\r\n` and lone `\r`
pub fn split_lines(text: &str) -> ReportLines<'_> {
    ReportLines { rest: Some(text) }
}

impl<'a> Iterator for ReportLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.filter(|rest| !rest.is_empty())?;

        match rest.find(['\r', '\n']) {
            Some(pos) => {
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = Some(&rest[pos + terminator..]);
                Some(&rest[..pos])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}
