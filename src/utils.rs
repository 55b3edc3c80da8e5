//! Line-shape helpers shared by the accumulator and the engine.
//!
//! All helpers look at a single source line and ignore whatever sits inside
//! double-quoted literals or after a `--` comment marker, so that text such as
//! `"Step (1 of 3"` or `"Loading..."` never changes the statement shape.

/// Lua comment marker.
pub const COMMENT_MARKER: &str = "--";

/// Lua concatenation operator.
pub const CONCAT_OPERATOR: &str = "..";

/// Returns the code part of a line: everything before a `--` comment that
/// is not inside a double-quoted literal.
///
/// # Examples
///
/// ```
/// use lrloc::utils::code_portion;
///
/// assert_eq!(code_portion(r#"x = "a -- b" -- note"#), r#"x = "a -- b" "#);
/// assert_eq!(code_portion("y = 1"), "y = 1");
/// ```
pub fn code_portion(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut in_string = false;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if in_string => i += 1,
            b'"' => in_string = !in_string,
            b'-' if !in_string && bytes.get(i + 1) == Some(&b'-') => return &line[..i],
            _ => {}
        }
        i += 1;
    }
    line
}

/// Net parenthesis balance of a line (opens minus closes), ignoring
/// parentheses inside literals and comments.
pub fn paren_delta(line: &str) -> i32 {
    let mut delta = 0;
    for_each_code_byte(code_portion(line), |b| match b {
        b'(' => delta += 1,
        b')' => delta -= 1,
        _ => {}
    });
    delta
}

/// True if the line's code ends with the concatenation operator.
///
/// ```
/// use lrloc::utils::ends_with_concat;
///
/// assert!(ends_with_concat(r#"title = "Uploading " .."#));
/// assert!(ends_with_concat(r#"title = "Uploading " ..  -- continues"#));
/// assert!(!ends_with_concat(r#"title = "Uploading...""#));
/// ```
pub fn ends_with_concat(line: &str) -> bool {
    let code = code_portion(line).trim_end();
    code.ends_with(CONCAT_OPERATOR) && !code.ends_with("...")
}

/// True if the concatenation operator appears outside any literal.
pub fn has_concat_operator(line: &str) -> bool {
    let mut previous_dot = false;
    let mut found = false;
    for_each_code_byte(code_portion(line), |b| {
        if b == b'.' {
            if previous_dot {
                found = true;
            }
            previous_dot = true;
        } else {
            previous_dot = false;
        }
    });
    found
}

/// Calls `f` for every byte that sits outside a double-quoted literal.
/// Quote characters themselves are reported as a neutral `b'"'`.
fn for_each_code_byte(code: &str, mut f: impl FnMut(u8)) {
    let bytes = code.as_bytes();
    let mut in_string = false;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            match b {
                b'\\' => i += 1,
                b'"' => {
                    in_string = false;
                    f(b'"');
                }
                _ => {}
            }
        } else if b == b'"' {
            in_string = true;
            f(b'"');
        } else {
            f(b);
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::*;

    #[test]
    fn test_code_portion_strips_trailing_comment() {
        assert_eq!(code_portion("a = 1 -- comment"), "a = 1 ");
        assert_eq!(code_portion("-- whole line"), "");
        assert_eq!(code_portion(r#"t = "a--b""#), r#"t = "a--b""#);
        assert_eq!(code_portion(r#"t = "say \"--\"" -- x"#), r#"t = "say \"--\"" "#);
    }

    #[test]
    fn test_paren_delta() {
        assert_eq!(paren_delta("LrDialogs.message("), 1);
        assert_eq!(paren_delta(r#"LrDialogs.message("Hi")"#), 0);
        assert_eq!(paren_delta(r#"  "Are you sure?")"#), -1);
        assert_eq!(paren_delta(r#"f("Step (1 of 3", g("#), 2);
        assert_eq!(paren_delta("f( -- )"), 1);
    }

    #[test]
    fn test_ends_with_concat() {
        assert!(ends_with_concat(r#"title = "Publishing " .. "#));
        assert!(ends_with_concat(r#"title = "Publishing " ..  -- more"#));
        assert!(!ends_with_concat(r#"title = "Publishing..""#));
        assert!(!ends_with_concat("local function f(...)"));
        assert!(!ends_with_concat("args = ..."));
        assert!(!ends_with_concat(""));
    }

    #[test]
    fn test_has_concat_operator() {
        assert!(has_concat_operator(r#"title = "Uploading " .. n .. " photos""#));
        assert!(!has_concat_operator(r#"title = "Uploading...""#));
        assert!(!has_concat_operator(r#"title = "a" -- x .. y"#));
    }
}
