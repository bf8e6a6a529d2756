//! Finds a date written for humans somewhere inside free text.
//!
//! The text is lexed into runs of digits, runs of letters, runs of whitespace, and single
//! punctuation characters. Starting from each digit or letter run, in order, a small grammar is
//! tried:
//!
//! ```text
//! date      := [weekday [.] [,] ' '] (group | month-day | day-month | month-year) [time]
//! group     := elem (sep elem){1,2}  with one sep of - / .   |  YYYYMMDD
//! month-day := month [.] ' ' day [ord] [[,] ' ' yyyy]
//! day-month := day [ord] ' ' [of ' '] month [.] [[,] ' ' yyyy]
//! month-year:= month [.] [,] ' ' yyyy
//! time      := (' ' [at ' '] | T) h:mm[:ss] [[' '] am|pm] [zone]
//! zone      := Z | (+|-)hh[:]mm | ' ' (+|-)hh[:]mm
//! ```
//!
//! Years take two or four digits.
//!
//! The first expression that names a real calendar date and is not glued to surrounding letters
//! or digits wins.
use chrono::{NaiveDate, NaiveTime};
use core::ops::Range;

/// A date found by [`find_date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundDate {
    /// The year, if one was written.
    pub year: Option<i32>,
    /// Month, `1..=12`.
    pub month: u32,
    /// Day of the month, or `1` when only a month and year were written.
    pub day: u32,
    /// The time of day, if one was written after the date.
    pub time: Option<NaiveTime>,
    /// Byte range of the date expression within the searched text.
    pub span: Range<usize>,
    /// The non-empty text before and after the date expression, in order.
    pub fragments: Vec<String>,
}

impl FoundDate {
    /// The calendar date, when a year was written.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year?, self.month, self.day)
    }
}

/// Returns the first date written in `text`, or `None`.
///
/// ```
/// use verstamp::find_date;
///
/// let found = find_date("Built on 2023-09-24 See link on GitHub").unwrap();
/// assert_eq!(Some(2023), found.year);
/// assert_eq!(vec!["Built on ", " See link on GitHub"], found.fragments);
///
/// let found = find_date("released Sunday, Jan 16th, 2004 at 3:04 pm").unwrap();
/// assert_eq!("Sunday, Jan 16th, 2004 at 3:04 pm", &"released Sunday, Jan 16th, 2004 at 3:04 pm"[found.span]);
///
/// assert!(find_date("version 1.2.3.4").is_none());
/// ```
pub fn find_date(text: &str) -> Option<FoundDate> {
    let tokens = lex(text);

    (0..tokens.len())
        .filter(|&start| tokens[start].is_alphanumeric())
        .find_map(|start| {
            let (end, ymd, time) = parse_at(&tokens, start)?;
            let span = tokens[start].start..tokens[end - 1].end();
            let fragments = [&text[..span.start], &text[span.end..]]
                .into_iter()
                .filter(|fragment| !fragment.is_empty())
                .map(str::to_owned)
                .collect();
            Some(FoundDate {
                year: ymd.year,
                month: ymd.month,
                day: ymd.day,
                time,
                span,
                fragments,
            })
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Number,
    Word,
    Space,
    Punct,
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    kind: Kind,
    text: &'a str,
    start: usize,
}

impl Token<'_> {
    fn end(&self) -> usize {
        self.start + self.text.len()
    }

    fn is_alphanumeric(&self) -> bool {
        matches!(self.kind, Kind::Number | Kind::Word)
    }

    fn is_punct(&self, c: char) -> bool {
        self.kind == Kind::Punct && self.text.starts_with(c)
    }

    fn is_separator(&self) -> bool {
        self.is_punct('-') || self.is_punct('/') || self.is_punct('.')
    }

    fn is_word(&self, word: &str) -> bool {
        self.kind == Kind::Word && self.text.eq_ignore_ascii_case(word)
    }

    /// The value of a digit run of `widths` length.
    fn number(&self, widths: Range<usize>) -> Option<u32> {
        if self.kind != Kind::Number || !widths.contains(&self.text.len()) {
            return None;
        }
        self.text.parse().ok()
    }
}

fn lex(text: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();

    for (start, c) in text.char_indices() {
        let kind = if c.is_ascii_digit() {
            Kind::Number
        } else if c.is_alphabetic() {
            Kind::Word
        } else if c.is_whitespace() {
            Kind::Space
        } else {
            Kind::Punct
        };
        let end = start + c.len_utf8();

        match tokens.last_mut() {
            Some(last) if last.kind == kind && kind != Kind::Punct => {
                last.text = &text[last.start..end];
            }
            _ => tokens.push(Token {
                kind,
                text: &text[start..end],
                start,
            }),
        }
    }

    tokens
}

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Full name, or its first three letters. `sept` is also accepted.
fn month_of(token: &Token<'_>) -> Option<u32> {
    if token.kind != Kind::Word || token.text.len() < 3 {
        return None;
    }
    let word = token.text.to_lowercase();
    MONTHS
        .iter()
        .position(|name| *name == word || (word.len() == 3 && name.starts_with(&word)))
        .or_else(|| (word == "sept").then_some(8))
        .map(|index| index as u32 + 1)
}

fn is_weekday(token: &Token<'_>) -> bool {
    if token.kind != Kind::Word || token.text.len() < 3 {
        return false;
    }
    let word = token.text.to_lowercase();
    WEEKDAYS.iter().any(|name| *name == word || (word.len() == 3 && name.starts_with(&word)))
        || matches!(word.as_str(), "tues" | "thur" | "thurs")
}

fn is_space(tokens: &[Token<'_>], index: usize) -> bool {
    tokens.get(index).is_some_and(|token| token.kind == Kind::Space)
}

/// Years are written with two or four digits. Two-digit years land in 1969..=2068.
fn expand_year(digits: &Token<'_>) -> Option<i32> {
    let value = digits.number(2..5)? as i32;
    match digits.text.len() {
        2 if value <= 68 => Some(2000 + value),
        2 => Some(1900 + value),
        4 => Some(value),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ymd {
    year: Option<i32>,
    month: u32,
    day: u32,
}

impl Ymd {
    fn is_valid(&self) -> bool {
        // a leap year, so that a yearless Feb 29 is accepted
        NaiveDate::from_ymd_opt(self.year.unwrap_or(2000), self.month, self.day).is_some()
    }
}

/// Whether a date may end right before `tokens[index]` without splitting a word, a number, or a
/// dotted/dashed group of numbers.
fn at_boundary(tokens: &[Token<'_>], index: usize) -> bool {
    !tokens.get(index).is_some_and(|next| {
        next.is_alphanumeric()
            || (next.is_separator() && tokens.get(index + 1).is_some_and(|t| t.kind == Kind::Number))
    })
}

fn starts_cleanly(tokens: &[Token<'_>], start: usize) -> bool {
    match start {
        0 => true,
        1 => !tokens[0].is_alphanumeric(),
        _ => {
            let prev = &tokens[start - 1];
            !prev.is_alphanumeric() && !(prev.is_separator() && tokens[start - 2].kind == Kind::Number)
        }
    }
}

fn parse_at(tokens: &[Token<'_>], start: usize) -> Option<(usize, Ymd, Option<NaiveTime>)> {
    if !starts_cleanly(tokens, start) {
        return None;
    }

    let date_start = weekday_prefix(tokens, start).unwrap_or(start);
    let forms: [fn(&[Token<'_>], usize) -> Option<(usize, Ymd)>; 4] =
        [numeric_group, month_day, day_month, month_year];
    let (end, ymd) = forms
        .into_iter()
        .find_map(|form| form(tokens, date_start).filter(|(_, ymd)| ymd.is_valid()))?;

    match time_suffix(tokens, end) {
        Some((after, time)) if at_boundary(tokens, after) => Some((after, ymd, Some(time))),
        _ => at_boundary(tokens, end).then_some((end, ymd, None)),
    }
}

fn weekday_prefix(tokens: &[Token<'_>], start: usize) -> Option<usize> {
    if !is_weekday(tokens.get(start)?) {
        return None;
    }
    let mut index = start + 1;
    for punct in ['.', ','] {
        if tokens.get(index).is_some_and(|token| token.is_punct(punct)) {
            index += 1;
        }
    }
    is_space(tokens, index).then_some(index + 1)
}

/// A day number, and an ordinal suffix glued to it.
fn day_at(tokens: &[Token<'_>], index: usize) -> Option<(usize, u32)> {
    let day = tokens.get(index)?.number(1..3)?;
    let ordinal = tokens
        .get(index + 1)
        .is_some_and(|token| ["st", "nd", "rd", "th"].iter().any(|suffix| token.is_word(suffix)));
    Some((index + 1 + usize::from(ordinal), day))
}

/// `[,] ' ' yyyy`
fn trailing_year(tokens: &[Token<'_>], index: usize) -> Option<(usize, i32)> {
    let index = if tokens.get(index)?.is_punct(',') {
        index + 1
    } else {
        index
    };
    if !is_space(tokens, index) {
        return None;
    }
    let year = tokens.get(index + 1)?.number(4..5)?;
    Some((index + 2, year as i32))
}

/// A month word, optionally followed by `[.] [,] ' ' yyyy`. The period is only taken together
/// with a year, so that a sentence's full stop stays out of the date.
fn month_then_year(tokens: &[Token<'_>], index: usize) -> Option<(usize, u32, Option<i32>)> {
    let month = month_of(tokens.get(index)?)?;
    let after_month = index + 1;
    let dotted = tokens
        .get(after_month)
        .is_some_and(|token| token.is_punct('.'));

    let with_year = if dotted {
        trailing_year(tokens, after_month + 1)
    } else {
        trailing_year(tokens, after_month)
    };
    Some(match with_year {
        Some((end, year)) => (end, month, Some(year)),
        None => (after_month, month, None),
    })
}

/// `Sep 24`, `September 24th, 2023`, `Sep. 24 2023`
fn month_day(tokens: &[Token<'_>], start: usize) -> Option<(usize, Ymd)> {
    let month = month_of(tokens.get(start)?)?;
    let mut index = start + 1;
    if tokens.get(index)?.is_punct('.') {
        index += 1;
    }
    if !is_space(tokens, index) {
        return None;
    }
    let (index, day) = day_at(tokens, index + 1)?;
    let (end, year) = match trailing_year(tokens, index) {
        Some((end, year)) => (end, Some(year)),
        None => (index, None),
    };
    Some((end, Ymd { year, month, day }))
}

/// `24 Sep`, `24th of September, 2023`
fn day_month(tokens: &[Token<'_>], start: usize) -> Option<(usize, Ymd)> {
    let (mut index, day) = day_at(tokens, start)?;
    if !is_space(tokens, index) {
        return None;
    }
    index += 1;
    if tokens.get(index)?.is_word("of") {
        if !is_space(tokens, index + 1) {
            return None;
        }
        index += 2;
    }
    let (end, month, year) = month_then_year(tokens, index)?;
    Some((end, Ymd { year, month, day }))
}

/// `September 2023`, `Sep. 2023`, `Sep, 2023`
fn month_year(tokens: &[Token<'_>], start: usize) -> Option<(usize, Ymd)> {
    let (end, month, year) = month_then_year(tokens, start)?;
    Some((
        end,
        Ymd {
            year: Some(year?),
            month,
            day: 1,
        },
    ))
}

#[derive(Debug, Clone, Copy)]
enum Element<'t, 'a> {
    Number(&'t Token<'a>),
    Month(u32),
}

impl<'t, 'a> Element<'t, 'a> {
    fn of(token: &'t Token<'a>) -> Option<Self> {
        match token.kind {
            Kind::Number => Some(Element::Number(token)),
            Kind::Word => month_of(token).map(Element::Month),
            _ => None,
        }
    }
}

/// `2023-09-24`, `9/24/2023`, `24.09.23`, `24-Sep-2023`, `9/24`, `20230924`
fn numeric_group(tokens: &[Token<'_>], start: usize) -> Option<(usize, Ymd)> {
    let mut elements = vec![Element::of(tokens.get(start)?)?];
    let mut separator: Option<&str> = None;
    let mut index = start + 1;

    while let (Some(sep), Some(next)) = (tokens.get(index), tokens.get(index + 1)) {
        let same_sep = sep.is_separator() && separator.map_or(true, |s| s == sep.text);
        let Some(element) = same_sep.then(|| Element::of(next)).flatten() else {
            break;
        };
        separator = Some(sep.text);
        elements.push(element);
        index += 2;
    }

    let ymd = match (separator, elements.as_slice()) {
        (None, [Element::Number(digits)]) => compact(digits)?,
        (Some(sep), [first, second]) => two_elements(sep, *first, *second)?,
        (Some(sep), [first, second, third]) => three_elements(sep, *first, *second, *third)?,
        _ => return None,
    };
    Some((index, ymd))
}

/// `YYYYMMDD`
fn compact(digits: &Token<'_>) -> Option<Ymd> {
    if digits.kind != Kind::Number || digits.text.len() != 8 {
        return None;
    }
    let part = |range: Range<usize>| digits.text[range].parse::<u32>().ok();
    Some(Ymd {
        year: Some(part(0..4)? as i32),
        month: part(4..6)?,
        day: part(6..8)?,
    })
}

fn two_elements(sep: &str, first: Element<'_, '_>, second: Element<'_, '_>) -> Option<Ymd> {
    use Element::*;
    match (first, second) {
        (Month(month), Number(day)) | (Number(day), Month(month)) => Some(Ymd {
            year: None,
            month,
            day: day.number(1..3)?,
        }),
        // `1.2` is far more likely a version than a date, so only slashes pair two numbers
        (Number(a), Number(b)) if sep == "/" => {
            let (a, b) = (a.number(1..3)?, b.number(1..3)?);
            let (month, day) = if a > 12 { (b, a) } else { (a, b) };
            Some(Ymd {
                year: None,
                month,
                day,
            })
        }
        _ => None,
    }
}

fn three_elements(
    sep: &str,
    first: Element<'_, '_>,
    second: Element<'_, '_>,
    third: Element<'_, '_>,
) -> Option<Ymd> {
    use Element::*;
    match (first, second, third) {
        (Month(month), Number(a), Number(b))
        | (Number(a), Month(month), Number(b))
        | (Number(a), Number(b), Month(month)) => {
            let (day, year) = if a.text.len() == 4 { (b, a) } else { (a, b) };
            Some(Ymd {
                year: Some(expand_year(year)?),
                month,
                day: day.number(1..3)?,
            })
        }
        (Number(a), Number(b), Number(c)) => {
            if a.text.len() == 4 {
                let (b, c) = (b.number(1..3)?, c.number(1..3)?);
                let (month, day) = if b > 12 && c <= 12 { (c, b) } else { (b, c) };
                Some(Ymd {
                    year: Some(expand_year(a)?),
                    month,
                    day,
                })
            } else {
                // `1.2.30` is a version; a dotted date with a short year pads its day and month
                let padded = a.text.len() == 2 && b.text.len() == 2;
                if sep == "." && c.text.len() == 2 && !padded {
                    return None;
                }
                let (a, b) = (a.number(1..3)?, b.number(1..3)?);
                let (month, day) = if a > 12 { (b, a) } else { (a, b) };
                Some(Ymd {
                    year: Some(expand_year(c)?),
                    month,
                    day,
                })
            }
        }
        _ => None,
    }
}

/// A time of day after the date. Returns the index past it.
fn time_suffix(tokens: &[Token<'_>], index: usize) -> Option<(usize, NaiveTime)> {
    let mut index = match tokens.get(index)? {
        token if token.kind == Kind::Space => {
            if tokens.get(index + 1).is_some_and(|t| t.is_word("at")) && is_space(tokens, index + 2)
            {
                index + 3
            } else {
                index + 1
            }
        }
        token if token.is_word("t") => index + 1,
        _ => return None,
    };

    let mut hour = tokens.get(index)?.number(1..3)?;
    let colon = |index: usize| tokens.get(index).is_some_and(|t| t.is_punct(':'));
    if !colon(index + 1) {
        return None;
    }
    let minute = tokens.get(index + 2)?.number(2..3)?;
    index += 3;

    let mut second = 0;
    if colon(index) {
        if let Some(value) = tokens.get(index + 1).and_then(|t| t.number(2..3)) {
            second = value;
            index += 2;
        }
    }

    let meridiem_at = if is_space(tokens, index) { index + 1 } else { index };
    let meridiem = tokens.get(meridiem_at).and_then(|token| {
        if token.is_word("am") {
            Some(false)
        } else if token.is_word("pm") {
            Some(true)
        } else {
            None
        }
    });
    if let Some(pm) = meridiem {
        if !(1..=12).contains(&hour) {
            return None;
        }
        hour = match (pm, hour) {
            (false, 12) => 0,
            (true, 12) => 12,
            (true, hour) => hour + 12,
            (false, hour) => hour,
        };
        index = meridiem_at + 1;
    }

    index = zone_suffix(tokens, index)
        .or_else(|| {
            is_space(tokens, index)
                .then(|| signed_offset(tokens, index + 1))
                .flatten()
        })
        .unwrap_or(index);
    NaiveTime::from_hms_opt(hour, minute, second).map(|time| (index, time))
}

/// `Z`, `+0200`, `-05:30`, glued to the time.
fn zone_suffix(tokens: &[Token<'_>], index: usize) -> Option<usize> {
    if tokens.get(index)?.is_word("z") {
        return Some(index + 1);
    }
    signed_offset(tokens, index)
}

/// `+0200`, `-05:30`, `+02`
fn signed_offset(tokens: &[Token<'_>], index: usize) -> Option<usize> {
    let token = tokens.get(index)?;
    if !(token.is_punct('+') || token.is_punct('-')) {
        return None;
    }
    let hours = tokens.get(index + 1)?;
    if hours.number(4..5).is_some() {
        return Some(index + 2);
    }
    hours.number(2..3)?;
    let minutes_follow = tokens.get(index + 2).is_some_and(|t| t.is_punct(':'))
        && tokens.get(index + 3).is_some_and(|t| t.number(2..3).is_some());
    Some(if minutes_follow { index + 4 } else { index + 2 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn span_of(text: &str) -> Option<&str> {
        find_date(text).map(|found| &text[found.span])
    }

    #[rstest]
    #[case("2023-09-24", (Some(2023), 9, 24))]
    #[case("2023/09/24", (Some(2023), 9, 24))]
    #[case("2023-24-09", (Some(2023), 9, 24))]
    #[case("9/24/2023", (Some(2023), 9, 24))]
    #[case("24/9/2023", (Some(2023), 9, 24))]
    #[case("24.09.2023", (Some(2023), 9, 24))]
    #[case("09.10.23", (Some(2023), 9, 10))]
    #[case("1/2/99", (Some(1999), 1, 2))]
    #[case("1.2.2023", (Some(2023), 1, 2))]
    #[case("20230924", (Some(2023), 9, 24))]
    #[case("24-Sep-2023", (Some(2023), 9, 24))]
    #[case("2023-Sep-24", (Some(2023), 9, 24))]
    #[case("9/24", (None, 9, 24))]
    #[case("Sep 24", (None, 9, 24))]
    #[case("Sep 24, 2023", (Some(2023), 9, 24))]
    #[case("Sept. 24th 2023", (Some(2023), 9, 24))]
    #[case("september 24TH, 2023", (Some(2023), 9, 24))]
    #[case("24 Sep", (None, 9, 24))]
    #[case("24th of September, 2023", (Some(2023), 9, 24))]
    #[case("Feb 29", (None, 2, 29))]
    #[case("September 2023", (Some(2023), 9, 1))]
    #[case("Sep. 2023", (Some(2023), 9, 1))]
    #[case("Sep, 2023", (Some(2023), 9, 1))]
    #[case("Mon, 24 Sep 2023 10:00:00 +0000", (Some(2023), 9, 24))]
    fn test_recognized(#[case] text: &str, #[case] expected: (Option<i32>, u32, u32)) {
        let found = find_date(text).unwrap();
        assert_eq!(expected, (found.year, found.month, found.day), "{text:?}");
        assert_eq!(0..text.len(), found.span, "{text:?}");
        assert!(found.fragments.is_empty());
    }

    #[rstest]
    #[case("")]
    #[case("no date here")]
    #[case("42")]
    #[case("build 1234")]
    #[case("v1.2.3")]
    #[case("1.2.3")]
    #[case("Version 1.2.3")]
    #[case("1.2.30")]
    #[case("10.4.7")]
    #[case("1.2")]
    #[case("version 1.2.3.4")]
    #[case("2023-13-45")]
    #[case("Feb 30, 2023")]
    #[case("x2023-09-24")]
    #[case("2023-09-24x")]
    #[case("May")]
    #[case("Sunday")]
    #[case("12345678")]
    fn test_not_recognized(#[case] text: &str) {
        assert_eq!(None, find_date(text), "{text:?}");
    }

    #[test]
    fn test_fragments() {
        let args = [
            (
                "Built on 2023-09-24 See link on GitHub",
                vec!["Built on ", " See link on GitHub"],
            ),
            ("(2023-09-24)", vec!["(", ")"]),
            ("date: Sep 24, 2023.", vec!["date: ", "."]),
            ("2023-09-24 trailing", vec![" trailing"]),
        ];

        for (text, expected) in args {
            assert_eq!(expected, find_date(text).unwrap().fragments, "{text:?}");
        }
    }

    #[test]
    fn test_span() {
        let args = [
            ("released Sunday, Jan 16th, 2004 at 3:04 pm!", "Sunday, Jan 16th, 2004 at 3:04 pm"),
            ("stamp 2023-09-24T12:30:00Z end", "2023-09-24T12:30:00Z"),
            ("at 2023-09-24 12:30:05+02:00", "2023-09-24 12:30:05+02:00"),
            ("24 Sep. Done", "24 Sep"),
            ("on Sep 24, see notes", "Sep 24"),
            ("first 1/2/2023 then 3/4/2024", "1/2/2023"),
            ("v1.2.3 built 2023-09-24", "2023-09-24"),
            ("Version 1.2.3 built 2023-09-24", "2023-09-24"),
            ("release 2.0.15 on 24.09.23", "24.09.23"),
            ("2023-09-24 25:00", "2023-09-24"),
            ("Released September 2023", "September 2023"),
            ("since Sep 2023, see notes", "Sep 2023"),
            (
                "Date: Mon, 24 Sep 2023 10:00:00 +0000 (UTC)",
                "Mon, 24 Sep 2023 10:00:00 +0000",
            ),
            ("at 2023-09-24 12:30 - 14:00", "2023-09-24 12:30"),
        ];

        for (text, expected) in args {
            assert_eq!(Some(expected), span_of(text), "{text:?}");
        }
    }

    #[test]
    fn test_time() {
        let args = [
            ("2023-09-24 12:30", (12, 30, 0)),
            ("2023-09-24 12:30:45", (12, 30, 45)),
            ("2023-09-24 12:30am", (0, 30, 0)),
            ("2023-09-24 12:30 pm", (12, 30, 0)),
            ("2023-09-24 at 3:04 PM", (15, 4, 0)),
            ("2023-09-24T07:08:09-0500", (7, 8, 9)),
            ("2023-09-24 07:08 -05:30", (7, 8, 0)),
        ];

        for (text, (hour, minute, second)) in args {
            let found = find_date(text).unwrap();
            assert_eq!(NaiveTime::from_hms_opt(hour, minute, second), found.time, "{text:?}");
            assert_eq!(0..text.len(), found.span, "{text:?}");
        }
    }

    #[test]
    fn test_date() {
        let found = find_date("Sep 24").unwrap();
        assert_eq!(None, found.date());
        let found = find_date("Sep 24 2023").unwrap();
        assert_eq!(NaiveDate::from_ymd_opt(2023, 9, 24), found.date());
        let found = find_date("Feb 2024").unwrap();
        assert_eq!(NaiveDate::from_ymd_opt(2024, 2, 1), found.date());
    }

    #[test]
    fn test_unicode_surroundings() {
        let text = "📅 2023-09-24 ✓";
        assert_eq!(Some("2023-09-24"), span_of(text));
        assert_eq!(vec!["📅 ", " ✓"], find_date(text).unwrap().fragments);
    }
}
