//! Declaration text formatter.
//!
//! Fixed-profile cleanup applied to the composed output: trailing whitespace
//! stripped, blank-line runs collapsed to a single blank line, no leading
//! blanks, exactly one trailing newline.

pub fn format_declarations(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    let mut blank_run = 0usize;

    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            if out.is_empty() {
                continue;
            }
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }

    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}
