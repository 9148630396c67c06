//! Code formatting for generated modules.
//!
//! The pretty-printing collaborator behind a trait seam. The default
//! [`TsFormatter`] is intentionally light: it verifies bracket balance
//! outside string literals and comments, then normalizes whitespace
//! (no trailing whitespace, no blank-line runs, single trailing
//! newline). A rejected module surfaces as a formatting failure tagged
//! by the caller with the offending identifier.

use std::fmt::Debug;

/// Reformats generated source, or rejects it with a message.
pub trait Formatter: Debug + Send + Sync {
    /// Formats `source`, returning the formatted text or a message
    /// describing why the source is not syntactically acceptable.
    fn format(&self, source: &str) -> Result<String, String>;
}

/// Default formatter for generated TypeScript modules.
#[derive(Debug, Clone, Default)]
pub struct TsFormatter;

impl Formatter for TsFormatter {
    fn format(&self, source: &str) -> Result<String, String> {
        check_balance(source)?;

        let mut out = String::with_capacity(source.len());
        let mut previous_blank = false;
        for line in source.lines() {
            let trimmed = line.trim_end();
            let blank = trimmed.is_empty();
            if blank && previous_blank {
                continue;
            }
            out.push_str(trimmed);
            out.push('\n');
            previous_blank = blank;
        }
        while out.ends_with("\n\n") {
            out.pop();
        }
        Ok(out)
    }
}

/// Verifies that `()`, `[]` and `{}` are balanced outside string
/// literals and line comments.
fn check_balance(source: &str) -> Result<(), String> {
    let mut stack = Vec::new();
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' | '`' => {
                // Consume the literal; generated strings never span
                // lines except template literals, which `\n` handles.
                let quote = c;
                let mut escaped = false;
                for inner in chars.by_ref() {
                    if escaped {
                        escaped = false;
                    } else if inner == '\\' {
                        escaped = true;
                    } else if inner == quote {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                for inner in chars.by_ref() {
                    if inner == '\n' {
                        break;
                    }
                }
            }
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(expected) {
                    return Err(format!("unbalanced '{c}'"));
                }
            }
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(format!("unclosed '{open}'"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_normalizes_whitespace() {
        let source = "const a = 1;   \n\n\n\nconst b = 2;\n";
        let formatted = TsFormatter.format(source).unwrap();
        assert_eq!(formatted, "const a = 1;\n\nconst b = 2;\n");
    }

    #[test]
    fn test_format_adds_trailing_newline() {
        assert_eq!(TsFormatter.format("const a = 1;").unwrap(), "const a = 1;\n");
    }

    #[test]
    fn test_unbalanced_braces_rejected() {
        assert!(TsFormatter.format("const a = { b: [1, 2 };").is_err());
        assert!(TsFormatter.format("function f() {").is_err());
        assert!(TsFormatter.format("const a = 1);").is_err());
    }

    #[test]
    fn test_brackets_in_strings_are_ignored() {
        let source = "const d = 'M0 0 } ] )';\n";
        assert!(TsFormatter.format(source).is_ok());
    }

    #[test]
    fn test_brackets_in_comments_are_ignored() {
        let source = "// closing } only\nconst a = {};\n";
        assert!(TsFormatter.format(source).is_ok());
    }

    #[test]
    fn test_escaped_quote_in_string() {
        let source = "const s = 'it\\'s { fine';\nconst a = {};\n";
        assert!(TsFormatter.format(source).is_ok());
    }

    #[test]
    fn test_valid_module_passes_unchanged() {
        let source = "import { IconDefinition } from '../types';\n\nconst HomeFill: IconDefinition = { tag: 'svg' };\n\nexport default HomeFill;\n";
        assert_eq!(TsFormatter.format(source).unwrap(), source);
    }
}
