//! Checks `ENVPROBE_*` values that must come from a fixed set
//!
//! A bad value is never fatal: the caller's fallback is used and stderr gets
//! a warning listing the accepted values, plus a "Did you mean" hint when
//! the value is a near miss.

use std::io::Write;

/// Largest edit distance that still counts as a typo
const MAX_TYPO_DISTANCE: usize = 2;

/// Checks one variable against its accepted values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Run `parser` on `value`; on `None`, warn on `writer` and return `fallback`
    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        fallback: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        match parser(value) {
            Some(parsed) => parsed,
            None => {
                self.warn(value, writer);
                fallback
            }
        }
    }

    fn warn<W: Write>(&self, value: &str, writer: &mut W) {
        let hint = self
            .closest(value)
            .map(|candidate| format!(". Did you mean '{}'?", candidate))
            .unwrap_or_default();

        // stderr trouble is ignored; the probe output matters more
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name, value, hint
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
    }

    /// Accepted value within `MAX_TYPO_DISTANCE` edits, nearest first
    fn closest(&self, value: &str) -> Option<&'a str> {
        let input = value.trim().to_lowercase();
        self.valid_values
            .iter()
            .map(|&candidate| (candidate, edit_distance(&input, candidate)))
            .filter(|&(_, dist)| (1..=MAX_TYPO_DISTANCE).contains(&dist))
            .min_by_key(|&(_, dist)| dist)
            .map(|(candidate, _)| candidate)
    }
}

/// Byte-wise Levenshtein distance, one DP row
fn edit_distance(a: &str, b: &str) -> usize {
    let b = b.as_bytes();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ca) in a.as_bytes().iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ca != cb));
            diagonal = above;
        }
    }

    row[b.len()]
}
