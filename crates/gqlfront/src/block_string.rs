use crate::location::split_lines;

/// Normalizes the raw text between a block string's `"""` delimiters
/// into its value.
///
/// The first line is kept as-is. Every following line loses the
/// indentation (spaces and tabs) common to all non-blank following
/// lines. Blank lines at either end are then dropped and the rest is
/// joined with `\n`.
///
/// ```
/// use gqlfront::dedent_block_string_value;
///
/// let raw = "\n    Hello,\n      World!\n    ";
/// assert_eq!(dedent_block_string_value(raw), "Hello,\n  World!");
/// ```
///
/// See <https://spec.graphql.org/October2021/#BlockStringValue()>.
pub fn dedent_block_string_value(raw: &str) -> String {
    let lines = split_lines(raw);

    let mut common_indent: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let indent = leading_whitespace_len(line);
        if indent == line.len() {
            continue;
        }
        if common_indent.is_none_or(|common| indent < common) {
            common_indent = Some(indent);
            if indent == 0 {
                break;
            }
        }
    }
    let common_indent = common_indent.unwrap_or(0);

    // The stripped prefix is always spaces/tabs, so byte slicing stays
    // on a char boundary.
    let dedented: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            if index == 0 {
                *line
            } else {
                &line[common_indent.min(line.len())..]
            }
        })
        .collect();

    let first = dedented
        .iter()
        .position(|line| !is_blank(line))
        .unwrap_or(dedented.len());
    let last = dedented
        .iter()
        .rposition(|line| !is_blank(line))
        .map_or(first, |index| index + 1);

    dedented[first..last.max(first)].join("\n")
}

fn leading_whitespace_len(line: &str) -> usize {
    line.bytes()
        .take_while(|byte| matches!(byte, b' ' | b'\t'))
        .count()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace_len(line) == line.len()
}
