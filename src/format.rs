use crate::CalendarDate;

impl CalendarDate {
    /// Formats the date as a human-readable English string with an ordinal
    /// day suffix, e.g. `"March 3rd, 2024"`.
    ///
    /// The month name is spelled out in full, the day carries its ordinal
    /// suffix ("st"/"nd"/"rd"/"th"), and the year is rendered without
    /// zero-padding. Pure and total: every constructible date produces a
    /// defined, non-empty string.
    pub fn pretty(&self) -> String {
        format!(
            "{} {}, {}",
            self.month_typed().name(),
            ordinalize(i32::from(self.day())),
            self.year()
        )
    }
}

/// Decimal digits of `n`'s magnitude followed by its English ordinal suffix.
///
/// Works on the magnitude: a sign-bearing day representation must not leak a
/// `-` into the rendered text, even though a valid calendar day is never
/// negative.
fn ordinalize(n: i32) -> String {
    let n = n.unsigned_abs();
    format!("{n}{}", ordinal_suffix(n))
}

/// English ordinal suffix for `n`. The teens (11, 12, 13 mod 100) always take
/// "th", overriding the last-digit rule.
const fn ordinal_suffix(n: u32) -> &'static str {
    match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teens_always_take_th() {
        assert_eq!(ordinalize(11), "11th");
        assert_eq!(ordinalize(12), "12th");
        assert_eq!(ordinalize(13), "13th");
        // 111 % 100 = 11, so the teens exception still applies
        assert_eq!(ordinalize(111), "111th");
        assert_eq!(ordinalize(112), "112th");
        assert_eq!(ordinalize(113), "113th");
    }

    #[test]
    fn test_last_digit_one_takes_st() {
        assert_eq!(ordinalize(1), "1st");
        assert_eq!(ordinalize(21), "21st");
        assert_eq!(ordinalize(31), "31st");
        assert_eq!(ordinalize(101), "101st");
    }

    #[test]
    fn test_last_digit_two_takes_nd() {
        assert_eq!(ordinalize(2), "2nd");
        assert_eq!(ordinalize(22), "22nd");
    }

    #[test]
    fn test_last_digit_three_takes_rd() {
        assert_eq!(ordinalize(3), "3rd");
        assert_eq!(ordinalize(23), "23rd");
    }

    #[test]
    fn test_remaining_digits_take_th() {
        assert_eq!(ordinalize(4), "4th");
        assert_eq!(ordinalize(5), "5th");
        assert_eq!(ordinalize(9), "9th");
        assert_eq!(ordinalize(10), "10th");
        assert_eq!(ordinalize(20), "20th");
        assert_eq!(ordinalize(30), "30th");
    }

    #[test]
    fn test_negative_input_ordinalized_by_magnitude() {
        assert_eq!(ordinalize(-3), "3rd");
        assert_eq!(ordinalize(-22), "22nd");
        assert_eq!(ordinalize(-11), "11th");
    }

    #[test]
    fn test_pretty() {
        let date = CalendarDate::from_ymd(2024, 3, 3).unwrap();
        assert_eq!(date.pretty(), "March 3rd, 2024");

        let date = CalendarDate::from_ymd(1999, 12, 25).unwrap();
        assert_eq!(date.pretty(), "December 25th, 1999");

        let date = CalendarDate::from_ymd(2000, 1, 1).unwrap();
        assert_eq!(date.pretty(), "January 1st, 2000");

        let date = CalendarDate::from_ymd(2021, 11, 11).unwrap();
        assert_eq!(date.pretty(), "November 11th, 2021");
    }

    #[test]
    fn test_pretty_every_suffix_on_real_days() {
        let cases = [
            (1, "August 1st, 2024"),
            (2, "August 2nd, 2024"),
            (3, "August 3rd, 2024"),
            (4, "August 4th, 2024"),
            (11, "August 11th, 2024"),
            (12, "August 12th, 2024"),
            (13, "August 13th, 2024"),
            (21, "August 21st, 2024"),
            (22, "August 22nd, 2024"),
            (23, "August 23rd, 2024"),
            (30, "August 30th, 2024"),
            (31, "August 31st, 2024"),
        ];
        for (day, expected) in cases {
            let date = CalendarDate::from_ymd(2024, 8, day).unwrap();
            assert_eq!(date.pretty(), expected);
        }
    }

    #[test]
    fn test_pretty_every_month_name() {
        let expected = [
            "January", "February", "March", "April", "May", "June", "July", "August", "September",
            "October", "November", "December",
        ];
        for (i, name) in expected.iter().enumerate() {
            let month = u8::try_from(i + 1).unwrap();
            let date = CalendarDate::from_ymd(2024, month, 15).unwrap();
            assert_eq!(date.pretty(), format!("{name} 15th, 2024"));
        }
    }

    #[test]
    fn test_pretty_year_not_padded() {
        let date = CalendarDate::from_ymd(800, 1, 4).unwrap();
        assert_eq!(date.pretty(), "January 4th, 800");
    }
}
