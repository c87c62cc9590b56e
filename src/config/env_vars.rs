//! Environment-variable expansion for configured paths.
//!
//! Supports Windows `%VAR%` references and Unix `${VAR}` / `$VAR`
//! references in one pass each. Unset variables are left in place so a
//! config written for another platform stays recognizable in the output.

use std::env;

/// Expand all supported environment-variable references in a path string.
pub fn expand_path(path: &str) -> String {
    let expanded = expand_windows_vars(path);
    let expanded = expand_braced_vars(&expanded);
    expand_plain_vars(&expanded)
}

fn expand_windows_vars(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(start) = rest.find('%') {
        let Some(len) = rest[start + 1..].find('%') else {
            break;
        };
        let name = &rest[start + 1..start + 1 + len];
        result.push_str(&rest[..start]);
        match env::var(name) {
            Ok(value) => result.push_str(&value),
            Err(_) => {
                result.push('%');
                result.push_str(name);
                result.push('%');
            }
        }
        rest = &rest[start + len + 2..];
    }
    result.push_str(rest);
    result
}

fn expand_braced_vars(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        let name = &rest[start + 2..start + 2 + len];
        result.push_str(&rest[..start]);
        match env::var(name) {
            Ok(value) => result.push_str(&value),
            Err(_) => {
                result.push_str("${");
                result.push_str(name);
                result.push('}');
            }
        }
        rest = &rest[start + len + 3..];
    }
    result.push_str(rest);
    result
}

fn expand_plain_vars(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(start) = rest.find('$') {
        result.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let name_len = tail
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .count();
        if name_len == 0 {
            result.push('$');
            rest = tail;
            continue;
        }
        let name = &tail[..name_len];
        match env::var(name) {
            Ok(value) => result.push_str(&value),
            Err(_) => {
                result.push('$');
                result.push_str(name);
            }
        }
        rest = &tail[name_len..];
    }
    result.push_str(rest);
    result
}
