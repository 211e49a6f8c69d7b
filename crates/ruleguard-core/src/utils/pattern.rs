use regex::{Regex, RegexBuilder};

/// Compiles a `match` argument.
///
/// Delimited patterns (`/^\d+$/i`, `#abc#`, `{a+}`) are unwrapped and their
/// trailing flags applied: `i` case-insensitive, `m` multi-line, `s` dot
/// matches newline, `x` ignore whitespace, `U` swap greed. `u` and `D` are
/// accepted and have no effect. Anything else is compiled as a bare pattern.
pub fn compile_pattern(argument: &str) -> Result<Regex, String> {
    let Some((body, flags)) = split_delimited(argument) else {
        return Regex::new(argument).map_err(|e| e.to_string());
    };

    let mut builder = RegexBuilder::new(body);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            'x' => builder.ignore_whitespace(true),
            'U' => builder.swap_greed(true),
            'u' | 'D' => &mut builder,
            other => return Err(format!("unknown pattern flag '{}'", other)),
        };
    }
    builder.build().map_err(|e| e.to_string())
}

fn split_delimited(argument: &str) -> Option<(&str, &str)> {
    let open = argument.chars().next()?;
    if open.is_alphanumeric() || open == '\\' || open.is_whitespace() {
        return None;
    }
    let close = match open {
        '(' => ')',
        '{' => '}',
        '[' => ']',
        '<' => '>',
        c => c,
    };
    let start = open.len_utf8();
    let end = argument.rfind(close).filter(|&end| end >= start)?;
    let flags = &argument[end + close.len_utf8()..];
    if !flags.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some((&argument[start..end], flags))
}
