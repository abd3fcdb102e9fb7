// parser.rs

/// A command name and its arguments, split from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<String>,
}

/// Splits on whitespace; the name is lowercased. Blank lines give `None`.
pub fn parse_line(line: &str) -> Option<Invocation> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?.to_lowercase();
    Some(Invocation {
        name,
        args: tokens.map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_and_args() {
        assert_eq!(
            parse_line("  ADD 2   3.5\t-1 \n"),
            Some(Invocation {
                name: "add".into(),
                args: vec!["2".into(), "3.5".into(), "-1".into()],
            })
        );
    }

    #[test]
    fn args_keep_their_case() {
        let inv = parse_line("delete X").unwrap();
        assert_eq!(inv.args, vec!["X".to_string()]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t"), None);
    }
}
