use super::{fuzzy::find_date, Substitute};
use crate::{
    date::{Date, DateFormat},
    error::InjectError,
};
use itertools::Itertools;
use tracing::debug;

/// Characters that are never part of a date and are always kept byte for byte.
const CONTROL: [char; 4] = ['\t', '\r', '\n', '\x0c'];

fn is_control(c: char) -> bool {
    CONTROL.contains(&c)
}

/// A line split into alternating runs of control characters (tabs, carriage returns, line
/// feeds, form feeds) and content. Empty runs are never kept.
///
/// ```
/// use verstamp::Runs;
///
/// let runs = Runs::split("\tbuilt\t2023-09-24\r\n");
/// assert_eq!(["\t", "\t", "\r\n"], runs.control());
/// assert_eq!(["built", "2023-09-24"], runs.content());
/// assert_eq!("\tbuilt\t2023-09-24\r\n", runs.rebuild());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runs {
    control: Vec<String>,
    content: Vec<String>,
    content_first: bool,
}

impl Runs {
    /// Splits `line` into its maximal control and content runs.
    pub fn split(line: &str) -> Self {
        let mut control = Vec::new();
        let mut content = Vec::new();

        for (is_ctrl, run) in &line.chars().group_by(|c| is_control(*c)) {
            let run: String = run.collect();
            if is_ctrl {
                control.push(run);
            } else {
                content.push(run);
            }
        }

        let content_first = control
            .first()
            .map_or(true, |first| !line.starts_with(first.as_str()));
        Self {
            control,
            content,
            content_first,
        }
    }

    /// The control runs, in order.
    pub fn control(&self) -> &[String] {
        &self.control
    }

    /// The content runs, in order.
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// Whether the line started with a content run rather than a control run.
    pub fn content_first(&self) -> bool {
        self.content_first
    }

    /// Zips the runs back together, starting with whichever kind started the line.
    pub fn rebuild(&self) -> String {
        let (first, second) = if self.content_first {
            (&self.content, &self.control)
        } else {
            (&self.control, &self.content)
        };
        first.iter().interleave(second).join("")
    }
}

/// Replaces the date on the line below each marker with a rendered [`Date`].
///
/// The date may be written in most ways a person would write one (`2023-09-24`, `9/24/23`,
/// `Sunday, Sep 24th 2023 at 3pm`...). Only the first date found on the line is replaced.
/// Control characters and the text around the date are kept as is.
///
/// ```
/// use verstamp::prelude::*;
///
/// let injector = DateInjector::new(&Date::explicit(2024, 3, 15).unwrap(), &DateFormat::default());
/// assert_eq!(
///     "Built on 2024-03-15 See link on GitHub\n",
///     injector.substitute("Built on 2023-09-24 See link on GitHub\n").unwrap(),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct DateInjector {
    date: String,
    marker: String,
}

impl DateInjector {
    /// Marker used unless [`DateInjector::with_marker`] says otherwise.
    pub const DEFAULT_MARKER: &'static str = "/-- DO NOT MODIFY /--/ [deploy Date Marker] --/";

    /// An injector for `date`, rendered once up front with `format`.
    pub fn new(date: &Date, format: &DateFormat) -> Self {
        Self {
            date: date.format(format),
            marker: Self::DEFAULT_MARKER.to_owned(),
        }
    }

    /// Uses `marker` instead of [`DateInjector::DEFAULT_MARKER`].
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// The rendered date that will be injected.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Replaces the first date in a content run, keeping its surrounding whitespace.
    fn substitute_run(&self, run: &str) -> Option<String> {
        let trimmed_start = run.trim_start();
        let core = trimmed_start.trim_end();
        let lead = &run[..run.len() - trimmed_start.len()];
        let trail = &trimmed_start[core.len()..];

        let found = find_date(core)?;
        debug!(
            year = ?found.year,
            month = found.month,
            day = found.day,
            "found date"
        );
        let (prefix, suffix) = peel(core, &found.fragments);
        Some(format!("{lead}{prefix}{}{suffix}{trail}", self.date))
    }
}

/// Splits `fragments` into the ones that lead `core` and the ones that trail it, and joins each
/// side back together.
fn peel(core: &str, fragments: &[String]) -> (String, String) {
    let mut rest = core;
    let mut prefix = String::new();
    let mut leading = 0;

    for fragment in fragments {
        let Some(after) = rest.strip_prefix(fragment.as_str()) else {
            break;
        };
        prefix.push_str(fragment);
        rest = after;
        leading += 1;
    }

    let mut trailing = Vec::new();
    for fragment in fragments[leading..].iter().rev() {
        let Some(before) = rest.strip_suffix(fragment.as_str()) else {
            break;
        };
        trailing.push(fragment.as_str());
        rest = before;
    }
    trailing.reverse();

    (prefix, trailing.concat())
}

impl Substitute for DateInjector {
    fn marker(&self) -> &str {
        &self.marker
    }

    fn substitute(&self, line: &str) -> Result<String, InjectError> {
        let mut runs = Runs::split(line);

        let (index, replacement) = runs
            .content
            .iter()
            .enumerate()
            .find_map(|(index, run)| self.substitute_run(run).map(|new| (index, new)))
            .ok_or_else(|| InjectError::NoDateFound {
                line: line.to_owned(),
            })?;
        runs.content[index] = replacement;

        Ok(runs.rebuild())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inject::inject_file;
    use rstest::rstest;
    use std::fs;
    use tempfile::tempdir;

    fn injector() -> DateInjector {
        DateInjector::new(&Date::explicit(2024, 3, 15).unwrap(), &DateFormat::default())
    }

    #[test]
    fn test_runs_round_trip() {
        let lines = [
            "",
            "\t",
            "a",
            "\ta\tb\t",
            "a\r\n",
            "\r\n\r\n",
            "a b\x0cc",
            "  spaces stay content  \n",
        ];

        for line in lines {
            assert_eq!(line, Runs::split(line).rebuild(), "{line:?}");
        }
    }

    #[test]
    fn test_runs_split() {
        let args = [
            ("a\tb\n", vec!["\t", "\n"], vec!["a", "b"], true),
            ("\t\ta", vec!["\t\t"], vec!["a"], false),
            ("a b", vec![], vec!["a b"], true),
            ("\r\n", vec!["\r\n"], vec![], false),
        ];

        for (line, control, content, content_first) in args {
            let runs = Runs::split(line);
            assert_eq!(control, runs.control());
            assert_eq!(content, runs.content());
            assert_eq!(content_first, runs.content_first());
        }
    }

    #[test]
    fn test_peel() {
        let fragments = |parts: &[&str]| parts.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let args = [
            ("a 1/2/23 b", fragments(&["a ", " b"]), ("a ", " b")),
            ("1/2/23 b", fragments(&[" b"]), ("", " b")),
            ("a 1/2/23", fragments(&["a "]), ("a ", "")),
            ("1/2/23", fragments(&[]), ("", "")),
            ("a b 1/2/23 c d", fragments(&["a ", "b ", " c", " d"]), ("a b ", " c d")),
        ];

        for (core, fragments, (prefix, suffix)) in args {
            assert_eq!(
                (prefix.to_owned(), suffix.to_owned()),
                peel(core, &fragments),
                "{core:?}"
            );
        }
    }

    #[rstest]
    #[case(
        "Built on 2023-09-24 See link on GitHub\n",
        "Built on 2024-03-15 See link on GitHub\n"
    )]
    #[case("\tReleased: Sep 24, 2023\r\n", "\tReleased: 2024-03-15\r\n")]
    #[case("Built\t2023-09-24\tby CI\n", "Built\t2024-03-15\tby CI\n")]
    #[case("  date = \"24.09.2023\"  \n", "  date = \"2024-03-15\"  \n")]
    #[case(
        "-- Sunday, 24 September 2023 at 10:30 pm | notes",
        "-- 2024-03-15 | notes"
    )]
    #[case("first 1/2/2023 then 3/4/2024", "first 2024-03-15 then 3/4/2024")]
    #[case("\x0c\t 2023-09-24T12:30:00Z \t", "\x0c\t 2024-03-15 \t")]
    #[case(
        "Version 1.2.3 built 2023-09-24\n",
        "Version 1.2.3 built 2024-03-15\n"
    )]
    #[case(
        "Date: Mon, 24 Sep 2023 10:00:00 +0000\n",
        "Date: 2024-03-15\n"
    )]
    #[case("Released September 2023\n", "Released 2024-03-15\n")]
    fn test_substitute(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(expected, injector().substitute(line).unwrap());
    }

    #[test]
    fn test_custom_format() {
        let format = DateFormat::new("%B %-d, %Y").unwrap();
        let injector = DateInjector::new(&Date::explicit(2024, 3, 5).unwrap(), &format);
        assert_eq!("March 5, 2024", injector.date());
        assert_eq!(
            "stamp: March 5, 2024\n",
            injector.substitute("stamp: 2023-09-24\n").unwrap()
        );
    }

    #[test]
    fn test_no_date() {
        for line in [
            "",
            "\t\r\n",
            "no date here 42\n",
            "version 1.2.3.4",
            "version 1.2.3\n",
        ] {
            assert!(matches!(
                injector().substitute(line),
                Err(InjectError::NoDateFound { .. })
            ));
        }
    }

    #[test]
    fn test_inject_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("README.md");
        let text = format!(
            "# Project\r\n<!-- {} -->\r\nLast built\t2023-09-24\r\nOther 2023-09-24\r\n",
            DateInjector::DEFAULT_MARKER
        );
        fs::write(&path, &text).unwrap();

        assert_eq!(1, inject_file(&path, &injector()).unwrap());
        assert_eq!(
            text.replacen("2023-09-24", "2024-03-15", 1),
            fs::read_to_string(&path).unwrap()
        );
    }

    #[test]
    fn test_missing_marker_leaves_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let text = "Built on 2023-09-24\n";
        fs::write(&path, text).unwrap();

        let custom = injector().with_marker("[date]");
        assert!(matches!(
            inject_file(&path, &custom),
            Err(InjectError::MarkerNotFound { .. })
        ));
        assert_eq!(text, fs::read_to_string(&path).unwrap());
    }
}
