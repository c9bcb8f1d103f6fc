use std::sync::LazyLock;

use glam::{ivec2, IVec2};
use regex::Regex;

pub trait StrExt {
    /// Convert identifiers to lowercase kebab-case. Adds hyphens between
    /// connected lowercase and uppercase characters for CamelCase
    /// identifiers and turns spaces and underscores into hyphens.
    fn to_kebab_case(&self) -> String;

    /// Break text into lines of at most `max_width` characters at word
    /// boundaries.
    ///
    /// Words longer than `max_width` are cut into `max_width` sized pieces.
    /// Explicit newlines are kept.
    ///
    /// ```
    /// # use util::StrExt;
    /// assert_eq!(
    ///     "The old mill by the river".wrap(10),
    ///     vec!["The old", "mill by", "the river"]
    /// );
    /// ```
    fn wrap(&self, max_width: usize) -> Vec<String>;

    /// Remove escape codes of the form `\c[n]` (text color changes) and
    /// similar single letter codes from display text.
    ///
    /// ```
    /// # use util::StrExt;
    /// assert_eq!(r"\c[1]Costs:\c[0]".strip_text_codes(), "Costs:");
    /// ```
    fn strip_text_codes(&self) -> String;

    /// Get the smallest common indentation depth of nonempty lines of text.
    ///
    /// Both tabs and spaces are treated as a single unit of indentation.
    fn indentation(&self) -> usize;

    /// Return non-whitespace chars from a block of text mapped to their
    /// coordinates.
    ///
    /// The text is trimmed so that the result set will have a minimum x
    /// coordinate and a minimum y coordinate at 0.
    fn char_grid(&self) -> impl Iterator<Item = (IVec2, char)> + '_;
}

impl StrExt for str {
    fn to_kebab_case(&self) -> String {
        let mut result = String::with_capacity(self.len());
        let mut prev = '_';
        for c in self.chars() {
            match c {
                '_' | ' ' | '-' => {
                    if !result.ends_with('-') {
                        result.push('-');
                    }
                }
                c if c.is_uppercase() && prev.is_lowercase() => {
                    result.push('-');
                    result.extend(c.to_lowercase());
                }
                c => result.extend(c.to_lowercase()),
            }
            prev = c;
        }

        result
    }

    fn wrap(&self, max_width: usize) -> Vec<String> {
        assert!(max_width > 0, "wrap: zero width");

        let mut ret = Vec::new();
        for paragraph in self.lines() {
            let mut line = String::new();
            let mut line_len = 0;

            for word in paragraph.split_whitespace() {
                let mut word: Vec<char> = word.chars().collect();

                if line_len > 0 && line_len + 1 + word.len() <= max_width {
                    line.push(' ');
                    line.extend(word.iter());
                    line_len += 1 + word.len();
                    continue;
                }

                if line_len > 0 {
                    ret.push(std::mem::take(&mut line));
                }

                // Slice up words that can't fit on any line.
                while word.len() > max_width {
                    ret.push(word.drain(..max_width).collect());
                }
                line.extend(word.iter());
                line_len = word.len();
            }

            ret.push(line);
        }

        // Trailing blank lines carry no information.
        while ret.last().is_some_and(|a| a.is_empty()) {
            ret.pop();
        }
        ret
    }

    fn strip_text_codes(&self) -> String {
        static RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"\\[A-Za-z]+\[\d*\]|\\[{}.|!<>^]")
                .expect("invalid text code regex")
        });

        RE.replace_all(self, "").into_owned()
    }

    fn indentation(&self) -> usize {
        self.lines()
            .filter(|a| !a.trim().is_empty())
            .map(|a| a.chars().take_while(|c| c.is_whitespace()).count())
            .min()
            .unwrap_or(0)
    }

    fn char_grid(&self) -> impl Iterator<Item = (IVec2, char)> + '_ {
        let x_skip = self.indentation();

        self.lines()
            .skip_while(|a| a.trim().is_empty())
            .enumerate()
            .flat_map(move |(y, line)| {
                line.chars()
                    .skip(x_skip)
                    .enumerate()
                    .filter(|(_, c)| !c.is_whitespace())
                    .map(move |(x, c)| (ivec2(x as i32, y as i32), c))
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kebab() {
        for (a, b) in [
            ("", ""),
            ("discover", "discover"),
            ("Change Map", "change-map"),
            ("changeMap", "change-map"),
            ("change_category", "change-category"),
            ("Call  Scene", "call-scene"),
            ("call-scene", "call-scene"),
        ] {
            assert_eq!(a.to_kebab_case(), b);
        }
    }

    #[test]
    fn wrapping() {
        assert_eq!("".wrap(8), Vec::<String>::new());
        assert_eq!("short".wrap(8), vec!["short"]);
        assert_eq!(
            "A quiet fishing village\nwith a pier".wrap(12),
            vec!["A quiet", "fishing", "village", "with a pier"]
        );
        assert_eq!("abcdefghij xy".wrap(4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn text_codes() {
        assert_eq!("plain".strip_text_codes(), "plain");
        assert_eq!(
            r"\c[1]Fast Travel Unlocked:\c[0]".strip_text_codes(),
            "Fast Travel Unlocked:"
        );
        assert_eq!(r"\I[87]Ferry\{".strip_text_codes(), "Ferry");
    }

    #[test]
    fn grids() {
        fn g(text: &str) -> Vec<(IVec2, char)> {
            text.char_grid().collect()
        }

        assert_eq!(g(""), vec![]);
        assert_eq!(g("A"), vec![(ivec2(0, 0), 'A')]);
        assert_eq!(
            g("AB\nC"),
            vec![(ivec2(0, 0), 'A'), (ivec2(1, 0), 'B'), (ivec2(0, 1), 'C')]
        );
        assert_eq!(g("\n\n  A"), vec![(ivec2(0, 0), 'A')]);
        assert_eq!(g("A\n\nB"), vec![(ivec2(0, 0), 'A'), (ivec2(0, 2), 'B')]);
    }
}
